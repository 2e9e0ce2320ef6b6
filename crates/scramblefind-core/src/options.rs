//! 查找选项与统计信息（模块）
use serde::Deserialize;

/// 默认目标串
pub const DEFAULT_TARGET: &str = "brain";

/// 匹配模式
/// - Substring：单词中存在长度等于目标串的连续窗口，其字母多重集与目标串相同。
/// - Anagram：整个单词即为目标串的字母重排。
/// - Pattern：定长模式，`?` 匹配任意一个字母，其余位置逐字相等。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Substring,
    Anagram,
    Pattern,
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// 查找选项
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// 目标串（加载时与单词一样做 trim + 小写）
    pub target: String,
    /// 是否在 `;` 处截断行尾注释
    pub strip_comments: bool,
    /// 匹配模式
    pub mode: MatchMode,
    /// 报告输出格式
    pub format: OutputFormat,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            strip_comments: true,
            mode: MatchMode::Substring,
            format: OutputFormat::Text,
        }
    }
}

impl FindOptions {
    /// 归一化后的目标串
    pub fn normalized_target(&self) -> String {
        self.target.trim().to_lowercase()
    }
}

/// 查找统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FindStats {
    pub lines_read: usize,
    pub words_loaded: usize,
    pub matches: usize,
}
