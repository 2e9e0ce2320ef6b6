//! 词表加载
//! - 整读文件字节，按 UTF-8 有损解码：非法字节序列直接丢弃，不报错
//! - 逐行 trim + 小写，可选在 `;` 处截断行尾注释，空行跳过
//! - 保持输入顺序，不去重
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{FindError, Result};

/// 注释分隔符
pub const COMMENT_DELIMITER: char = ';';

/// 加载结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// 归一化后的单词（非空、小写）
    pub words: Vec<String>,
    /// 读取的物理行数（含空行）
    pub lines_read: usize,
}

/// 从文件加载词表
pub fn load_wordlist(path: &Path, strip_comments: bool) -> Result<WordList> {
    let access = |source| FindError::FileAccess { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(access)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(access)?;
    Ok(parse_words(&buf, strip_comments))
}

/// 从内存字节解析词表
pub fn parse_words(bytes: &[u8], strip_comments: bool) -> WordList {
    let text = decode_lossy(bytes);
    let mut out = WordList::default();
    for raw in text.lines() {
        // 单独的 '\r' 也视为换行，按拆分后的行计数
        for part in raw.split('\r') {
            out.lines_read += 1;
            if let Some(w) = normalize_line(part, strip_comments) {
                out.words.push(w);
            }
        }
    }
    out
}

/// 归一化单行；结果为空时返回 None
pub fn normalize_line(line: &str, strip_comments: bool) -> Option<String> {
    let mut w = line.trim();
    if strip_comments {
        if let Some((head, _)) = w.split_once(COMMENT_DELIMITER) {
            w = head.trim();
        }
    }
    if w.is_empty() {
        return None;
    }
    Some(w.to_lowercase())
}

/// UTF-8 有损解码，丢弃非法字节而不是替换为 U+FFFD
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        s.push_str(chunk.valid());
    }
    s
}
