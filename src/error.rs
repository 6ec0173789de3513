//! 错误处理

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // 标准库错误处理
    #[error("io error, {0}")]
    Io(std::io::Error),
    #[error("strum error, {0}")]
    ParseEnumString(String),

    // 数据源
    #[error("data source missing, {0}")]
    DataSourceMissing(String),
    #[error("data source corrupt, {0}")]
    DataSourceCorrupt(String),

    #[error("csv error, {0}")]
    Csv(#[from] csv::Error),

    #[error("encode error, {0}")]
    Encode(String),
    #[error("decode error, {0}")]
    Decode(String),

    #[cfg(feature = "python")]
    #[error("py missing kwargs, {0}")]
    PyMissingKwargs(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<calamine::Error> for Error {
    fn from(e: calamine::Error) -> Self {
        Error::DataSourceCorrupt(e.to_string())
    }
}
