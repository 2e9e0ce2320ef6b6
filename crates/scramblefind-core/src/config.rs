//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::errors::{FindError, Result};
use crate::options::{FindOptions, MatchMode, OutputFormat};

/// `[find]` 段；所有字段均可省略
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FindSection {
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub strip_comments: Option<bool>,
    #[serde(default)]
    pub mode: Option<MatchMode>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// 顶层配置文件结构
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub find: FindSection,
}

impl ConfigFile {
    /// 从 TOML 文本解析
    pub fn from_toml_str(txt: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }

    /// 将文件中出现的字段覆盖到 `opts` 上，未出现的保持不变
    pub fn apply_to(&self, opts: &mut FindOptions) {
        let f = &self.find;
        if let Some(t) = &f.target { opts.target = t.clone(); }
        if let Some(s) = f.strip_comments { opts.strip_comments = s; }
        if let Some(m) = f.mode { opts.mode = m; }
        if let Some(fmt) = f.format { opts.format = fmt; }
    }
}

/// 从 TOML 配置文件加载
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| FindError::ConfigRead { path: path.to_path_buf(), source })?;
    ConfigFile::from_toml_str(&txt)
        .map_err(|source| FindError::Config { path: path.to_path_buf(), source })
}
