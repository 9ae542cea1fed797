use crate::consts::*;

use std::path::PathBuf;

use smart_default::SmartDefault;

/// Settings for one [`BacklightController`](crate::BacklightController).
#[derive(Clone, Debug, SmartDefault)]
pub struct ControllerConfig {
    /// Directory holding the backlight devices
    #[default(PathBuf::from(DEVICES_PATH))]
    pub backlight_root: PathBuf,

    /// Device name, or a path whose last component is the device name
    #[default(DEFAULT_DEVICE.to_string())]
    pub device: String,

    /// The range is split into this many steps
    #[default(DEFAULT_STEP_DIVISOR)]
    pub step_divisor: i64,

    /// Gauge width in columns, borders included
    #[default(FALLBACK_WIDTH)]
    pub width: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.backlight_root, PathBuf::from("/sys/class/backlight"));
        assert_eq!(config.device, "intel_backlight");
        assert_eq!(config.step_divisor, 200);
        assert_eq!(config.width, 80);
    }
}
