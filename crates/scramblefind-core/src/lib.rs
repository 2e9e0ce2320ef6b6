//! 乱序子串查找核心库
//!
//! 设计要点：
//! - 词表整读后按 UTF-8 有损解码，非法字节丢弃，不中断运行。
//! - 匹配按 char 计数做多重集比较，纯函数、无全局状态、保持输入顺序。
//! - 报告按字典序输出，单线程一次完成。

mod options;
mod errors;
mod config;
mod multiset;
mod loader;
mod matcher;
mod report;
mod find;

pub use options::{FindOptions, FindStats, MatchMode, OutputFormat, DEFAULT_TARGET};
pub use errors::{FindError, Result};
pub use config::{load_config, ConfigFile, FindSection};
pub use multiset::LetterCounts;
pub use loader::{decode_lossy, load_wordlist, normalize_line, parse_words, WordList, COMMENT_DELIMITER};
pub use matcher::{find_matches, has_scrambled_substring, is_anagram, matches_pattern, ScrambleMatcher, WILDCARD};
pub use report::{OutputItem, Report};
pub use find::{find_and_write, find_in_words};
