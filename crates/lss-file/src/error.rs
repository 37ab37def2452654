//! 文件操作错误定义

use thiserror::Error;

use lss_core::record::RecordError;
use lss_core::summary::EmptyDatasetError;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Malformed record: {0}")]
    Record(#[from] RecordError),

    #[error("Empty dataset: {0}")]
    EmptyDataset(#[from] EmptyDatasetError),
}
