/// Location of backlight devices
pub const DEVICES_PATH: &str = "/sys/class/backlight";

/// Filename for device's max brightness
pub const FILE_MAX_BRIGHTNESS: &str = "max_brightness";

/// Filename for the current brightness, read at startup and written on every step.
pub const FILE_BRIGHTNESS: &str = "brightness";

/// Device used when none is given on the command line
pub const DEFAULT_DEVICE: &str = "intel_backlight";

/// Steps per full range, one step per keystroke
pub const DEFAULT_STEP_DIVISOR: i64 = 200;

/// Lowest brightness the device accepts
pub const MIN_BRIGHTNESS: i64 = 0;

/// Two border columns plus at least one gauge column
pub const MIN_GAUGE_WIDTH: u16 = 3;

/// Width used when the terminal can't tell us its size
pub const FALLBACK_WIDTH: u16 = 80;

/// Rows occupied by one gauge frame
pub const FRAME_HEIGHT: u16 = 6;

/// Process exit status when `max_brightness <= MIN_BRIGHTNESS`
pub const EXIT_INVALID_RANGE: u8 = 127;
