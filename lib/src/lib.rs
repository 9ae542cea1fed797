#![warn(clippy::match_same_arms)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::unnecessary_wraps)]

#[macro_use]
mod util;
mod adjustment;
mod config;
mod consts;
mod device;
mod errors;
mod gauge;
mod keys;
mod session;
#[cfg(test)]
mod test_support;

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::io::{AsyncRead, AsyncReadExt as _, AsyncWrite, AsyncWriteExt as _};

pub use crate::adjustment::{Adjustment, Unit};
pub use crate::config::ControllerConfig;
pub use crate::consts::{DEFAULT_DEVICE, DEFAULT_STEP_DIVISOR, DEVICES_PATH, FALLBACK_WIDTH};
pub use crate::device::Device;
pub use crate::errors::{AdjbacklightError, Result};
pub use crate::gauge::{Gauge, fill_width};
pub use crate::keys::{Key, KeyDecoder};
pub use crate::session::{BrightnessRange, Session};

make_log_macro!(debug, "controller");

/// Used to construct [`BacklightController`]
#[derive(Default)]
pub struct AdjbacklightBuilder {
    config: ControllerConfig,
}

impl AdjbacklightBuilder {
    /// Create a new [`AdjbacklightBuilder`].
    pub fn new() -> Self {
        AdjbacklightBuilder::default()
    }

    /// Defaults to [`DEFAULT_DEVICE`].
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.config.device = device.into();
        self
    }

    /// Defaults to [`DEVICES_PATH`].
    pub fn with_backlight_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.backlight_root = root.into();
        self
    }

    /// Defaults to [`DEFAULT_STEP_DIVISOR`].
    pub fn with_step_divisor(mut self, step_divisor: i64) -> Self {
        self.config.step_divisor = step_divisor;
        self
    }

    /// Defaults to [`FALLBACK_WIDTH`].
    pub fn with_width(mut self, width: u16) -> Self {
        self.config.width = width;
        self
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the device and returns the constructed [`BacklightController`].
    ///
    /// Fails with [`AdjbacklightError::InvalidRange`] when the device's maximum
    /// brightness is not above its minimum.
    pub async fn build(self) -> Result<BacklightController> {
        BacklightController::new(self.config).await
    }
}

/// Reads and adjusts the brightness of a single backlight device.
pub struct BacklightController {
    device: Device,
    session: Session,
    gauge: Gauge,
}

impl BacklightController {
    pub(crate) async fn new(config: ControllerConfig) -> Result<Self> {
        let device = Device::new(&config.backlight_root, &config.device)?;
        let current = device.read_brightness().await?;
        let range = device.read_range().await?;
        let session = Session::new(range, current, config.step_divisor)?;

        Ok(Self {
            device,
            session,
            gauge: Gauge::new(config.width),
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current brightness as a percentage of the device's range.
    pub fn brightness_percent(&self) -> f64 {
        let range = self.session.range();
        (self.session.current() - range.min()) as f64 * 100.0 / range.span() as f64
    }

    /// Apply a one-shot adjustment and write it to the device.
    pub async fn set_brightness(&mut self, adjustment: Adjustment) -> Result<i64> {
        let value = adjustment.apply(self.session.range(), self.session.current());
        self.device.write_brightness(value).await?;
        Ok(self.session.set_current(value))
    }

    /// Interactive loop: draw the gauge, then read one byte at a time from
    /// `input`, stepping the brightness on arrow keys and redrawing after each
    /// write.
    ///
    /// Returns on a quit key (after printing a newline) or at end of input.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut decoder = KeyDecoder::new();

        output.write_all(&self.gauge.reserve()).await?;
        self.redraw(&mut output).await?;

        loop {
            let byte = match input.read_u8().await {
                Ok(byte) => byte,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    debug!("end of input");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            match decoder.feed(byte) {
                Some(Key::Quit) => {
                    output.write_all(b"\n").await?;
                    output.flush().await?;
                    return Ok(());
                }
                Some(key) => {
                    if let Some(value) = self.session.apply(key) {
                        self.device.write_brightness(value).await?;
                        self.redraw(&mut output).await?;
                    }
                }
                None => {}
            }
        }
    }

    async fn redraw<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let frame = self.gauge.frame(
            self.session.range(),
            self.session.initial(),
            self.session.current(),
        )?;
        output.write_all(&frame).await?;
        output.flush().await?;
        Ok(())
    }
}
