//! 错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 查找流程中的全部错误（均为终止性错误，不做重试）
#[derive(Debug, Error)]
pub enum FindError {
    /// 词表无法打开或读取
    #[error("cannot read word list {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置文件无法读取
    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 配置文件不是合法的 TOML
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 目标串归一化后为空
    #[error("target string must not be empty")]
    EmptyTarget,

    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FindError>;
