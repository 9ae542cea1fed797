use crate::errors::*;
use crate::keys::Key;

make_log_macro!(debug, "session");

/// Inclusive brightness bounds of a device, with `max > min` guaranteed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrightnessRange {
    min: i64,
    max: i64,
}

impl BrightnessRange {
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if max <= min {
            return Err(AdjbacklightError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn span(&self) -> i64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Brightness per keystroke: the span split into `divisor` parts, never zero.
    pub fn step(&self, divisor: i64) -> Result<i64> {
        if divisor < 1 {
            return Err(AdjbacklightError::InvalidStepDivisor(divisor));
        }
        Ok((self.span() / divisor).max(1))
    }
}

/// State of one interactive adjustment.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    range: BrightnessRange,
    initial: i64,
    current: i64,
    step: i64,
}

impl Session {
    pub fn new(range: BrightnessRange, current: i64, divisor: i64) -> Result<Self> {
        let step = range.step(divisor)?;
        debug!("range {:?} current {} step {}", range, current, step);
        Ok(Self {
            range,
            initial: current,
            current,
            step,
        })
    }

    pub fn range(&self) -> BrightnessRange {
        self.range
    }

    /// Brightness when the session started, kept for display.
    pub fn initial(&self) -> i64 {
        self.initial
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Jump to `value`, clamped to the range.
    pub fn set_current(&mut self, value: i64) -> i64 {
        self.current = self.range.clamp(value);
        self.current
    }

    pub fn increase(&mut self) -> i64 {
        self.current = self.range.clamp(self.current.saturating_add(self.step));
        self.current
    }

    pub fn decrease(&mut self) -> i64 {
        self.current = self.range.clamp(self.current.saturating_sub(self.step));
        self.current
    }

    /// Apply a brightness key, returning the new value, or `None` for keys
    /// that don't change brightness.
    pub fn apply(&mut self, key: Key) -> Option<i64> {
        match key {
            Key::Increase => Some(self.increase()),
            Key::Decrease => Some(self.decrease()),
            Key::Quit => None,
        }
    }
}
