//! 乱序子串匹配
//!
//! 判定单词中是否存在长度为 `|target|` 的连续窗口，其字母多重集与目标串完全相同。
//! 长度与窗口均按 char 计算。
//! - `has_scrambled_substring`：逐窗口重新计数，直接对照定义。
//! - `ScrambleMatcher`：目标计数只算一次，整词预筛后滑动窗口增量更新。
//!
//! 另有整词重排（anagram）与定长通配模式（pattern，`?` 为通配符）两种模式。
use crate::errors::{FindError, Result};
use crate::multiset::LetterCounts;
use crate::options::MatchMode;

/// 单词是否包含目标串的某个字母重排作为连续子串
///
/// 目标串为空时恒为真（空窗口总是存在）；目标串长于单词时为假。
pub fn has_scrambled_substring(word: &str, target: &str) -> bool {
    let target_counts = LetterCounts::from(target);
    let tlen = target_counts.len();
    let chars: Vec<char> = word.chars().collect();
    if tlen > chars.len() {
        return false;
    }
    (0..=chars.len() - tlen)
        .any(|i| LetterCounts::from_chars(chars[i..i + tlen].iter().copied()) == target_counts)
}

/// 整个单词是否为目标串的字母重排
pub fn is_anagram(word: &str, target: &str) -> bool {
    LetterCounts::from(word) == LetterCounts::from(target)
}

/// 通配符
pub const WILDCARD: char = '?';

/// 单词是否匹配定长模式：长度（char 数）相同，`?` 位置任意，其余位置相等
pub fn matches_pattern(word: &str, pattern: &str) -> bool {
    word.chars().count() == pattern.chars().count()
        && word.chars().zip(pattern.chars()).all(|(w, p)| p == WILDCARD || w == p)
}

/// 保序过滤：返回满足乱序子串判定的单词（不去重）
pub fn find_matches(words: &[String], target: &str) -> Vec<String> {
    words
        .iter()
        .filter(|w| has_scrambled_substring(w, target))
        .cloned()
        .collect()
}

/// 预先计算好目标多重集的匹配器
#[derive(Debug, Clone)]
pub struct ScrambleMatcher {
    target: String,
    counts: LetterCounts,
    mode: MatchMode,
}

impl ScrambleMatcher {
    /// 目标串需已归一化；为空时返回 `EmptyTarget`
    pub fn new(target: &str, mode: MatchMode) -> Result<Self> {
        if target.is_empty() {
            return Err(FindError::EmptyTarget);
        }
        Ok(Self { target: target.to_string(), counts: LetterCounts::from(target), mode })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_match(&self, word: &str) -> bool {
        match self.mode {
            MatchMode::Substring => self.scan_windows(word),
            MatchMode::Anagram => is_anagram(word, &self.target),
            MatchMode::Pattern => matches_pattern(word, &self.target),
        }
    }

    /// 保序过滤，语义同 [`find_matches`]
    pub fn find_matches(&self, words: &[String]) -> Vec<String> {
        words.iter().filter(|w| self.is_match(w)).cloned().collect()
    }

    fn scan_windows(&self, word: &str) -> bool {
        let k = self.counts.len();
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < k {
            return false;
        }
        // 整词都凑不齐目标字母时不必滑动
        if !LetterCounts::from_chars(chars.iter().copied()).covers(&self.counts) {
            return false;
        }
        let mut window = LetterCounts::from_chars(chars[..k].iter().copied());
        if window == self.counts {
            return true;
        }
        for i in k..chars.len() {
            window.remove(chars[i - k]);
            window.add(chars[i]);
            if window == self.counts {
                return true;
            }
        }
        false
    }
}
