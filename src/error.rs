use std::path::PathBuf;

use thiserror::Error;

/// checkalive 的错误类型
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("invalid status code: {0:?}")]
    InvalidStatusCode(String),
    #[error("File {} not found.", .0.display())]
    InputNotFound(PathBuf),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// 连接、DNS、超时等传输层错误，供不基于 reqwest 的传输实现使用
    #[error("{0}")]
    Network(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("operation cancelled")]
    Cancelled,
}

impl CheckError {
    /// 请求没有拿到可用响应：网络失败或非 2xx 状态
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CheckError::Http(_) | CheckError::HttpStatus(_) | CheckError::Network(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
