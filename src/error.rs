use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FraktalError {
    #[error("pixel channel index {index} out of range (0..=2)")]
    IndexOutOfRange { index: usize },
    #[error("failed to open {path:?}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path:?}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
