use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("文件读写失败 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置错误: {0}")]
    Config(String),
}

impl MonitorError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        MonitorError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
