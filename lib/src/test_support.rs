//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{FILE_BRIGHTNESS, FILE_MAX_BRIGHTNESS};

/// A throwaway backlight class directory holding a single device.
///
/// Removed from disk when dropped.
pub struct FakeBacklight {
    root: PathBuf,
    device: String,
}

impl FakeBacklight {
    pub fn new(device: &str, brightness: &str, max_brightness: &str) -> Self {
        let root = std::env::temp_dir().join(format!("adjbacklight-{}", uuid::Uuid::new_v4()));
        let device_dir = root.join(device);
        fs::create_dir_all(&device_dir).unwrap();
        fs::write(device_dir.join(FILE_BRIGHTNESS), brightness).unwrap();
        fs::write(device_dir.join(FILE_MAX_BRIGHTNESS), max_brightness).unwrap();
        Self {
            root,
            device: device.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn device_dir(&self) -> PathBuf {
        self.root.join(&self.device)
    }

    pub fn brightness_path(&self) -> PathBuf {
        self.device_dir().join(FILE_BRIGHTNESS)
    }

    pub fn max_brightness_path(&self) -> PathBuf {
        self.device_dir().join(FILE_MAX_BRIGHTNESS)
    }

    /// Raw contents of the brightness file.
    pub fn brightness(&self) -> String {
        fs::read_to_string(self.brightness_path()).unwrap()
    }
}

impl Drop for FakeBacklight {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
