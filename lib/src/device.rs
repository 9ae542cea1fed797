use crate::consts::*;
use crate::errors::*;
use crate::session::BrightnessRange;
use crate::util::*;

use std::path::{Path, PathBuf};

make_log_macro!(debug, "device");

/// A backlight device under the backlight class directory.
///
/// Paths are resolved once and never re-validated; the files themselves are
/// only opened for the duration of each read or write.
#[derive(Clone, Debug)]
pub struct Device {
    pub device_name: String,
    brightness_file: PathBuf,
    max_brightness_file: PathBuf,
}

impl Device {
    /// Resolve `device` under `root`.
    ///
    /// A full path such as `/sys/class/backlight/acpi_video0` is reduced to its
    /// last component.
    pub fn new(root: &Path, device: &str) -> Result<Self> {
        let device_name = Path::new(device)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AdjbacklightError::InvalidDevice(device.to_string()))?;

        let device_path = root.join(&device_name);
        debug!("{} resolved to {}", device, device_path.display());

        Ok(Self {
            brightness_file: device_path.join(FILE_BRIGHTNESS),
            max_brightness_file: device_path.join(FILE_MAX_BRIGHTNESS),
            device_name,
        })
    }

    pub fn brightness_file(&self) -> &Path {
        &self.brightness_file
    }

    /// Read the current brightness in raw device units.
    pub async fn read_brightness(&self) -> Result<i64> {
        let value = read_int(&self.brightness_file).await?;
        debug!("{} brightness {}", self.device_name, value);
        Ok(value)
    }

    /// Read the device's range, failing with [`AdjbacklightError::InvalidRange`]
    /// when the maximum does not exceed the minimum.
    pub async fn read_range(&self) -> Result<BrightnessRange> {
        let max = read_int(&self.max_brightness_file).await?;
        debug!("{} max_brightness {}", self.device_name, max);
        BrightnessRange::new(MIN_BRIGHTNESS, max)
    }

    /// Write a raw brightness value.
    pub async fn write_brightness(&self, value: i64) -> Result<()> {
        debug!("{} <- {}", self.brightness_file.display(), value);
        write_int(&self.brightness_file, value).await
    }
}
