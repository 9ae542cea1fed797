use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};

use crate::errors::*;

macro_rules! make_log_macro {
    (@wdoll $macro_name:ident, $block_name:literal, ($dol:tt)) => {
        #[allow(unused_macros)]
        macro_rules! $macro_name {
            ($dol($args:tt)+) => {
                ::log::$macro_name!(target: $block_name, $dol($args)+);
            };
        }
    };
    ($macro_name:ident, $block_name:literal) => {
        make_log_macro!(@wdoll $macro_name, $block_name, ($));
    };
}

fn device_file_error(path: &Path) -> impl FnOnce(std::io::Error) -> AdjbacklightError + '_ {
    move |source| AdjbacklightError::DeviceFile {
        path: path.to_path_buf(),
        source,
    }
}

pub async fn read_file(path: impl AsRef<Path>) -> std::io::Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut content = String::new();
    file.read_to_string(&mut content).await?;
    Ok(content)
}

/// Parse the first line of a file as a base-10 integer.
///
/// The handle is dropped before returning, whether or not the read succeeded.
pub async fn read_int(path: &Path) -> Result<i64> {
    let content = read_file(path).await.map_err(device_file_error(path))?;
    content
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .parse()
        .map_err(|source| AdjbacklightError::ParseInt {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `value` followed by a newline, then flush and close the file.
///
/// The file is opened per call so a reader never sees a partial value.
pub async fn write_int(path: &Path, value: i64) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(device_file_error(path))?;
    file.write_all(format!("{value}\n").as_bytes())
        .await
        .map_err(device_file_error(path))?;
    file.flush().await.map_err(device_file_error(path))
}
