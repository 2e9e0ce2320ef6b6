//! 字母多重集（字符 -> 出现次数）
//!
//! 以 Unicode 标量值（char）计数，而非字节；计数归零的字符会被移除，
//! 因此两个多重集相等当且仅当字符集合与每个字符的次数都相同。
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// 统计一段字符序列
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut lc = Self::new();
        for ch in chars {
            lc.add(ch);
        }
        lc
    }

    pub fn add(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
        self.total += 1;
    }

    /// 移除一个字符；字符不存在时不做任何事
    pub fn remove(&mut self, ch: char) {
        if let Some(n) = self.counts.get_mut(&ch) {
            *n -= 1;
            self.total -= 1;
            if *n == 0 {
                self.counts.remove(&ch);
            }
        }
    }

    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// 元素总数（含重复）
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// `other` 是否为 self 的子多重集
    pub fn covers(&self, other: &LetterCounts) -> bool {
        other.counts.iter().all(|(ch, &n)| self.count(*ch) >= n)
    }
}

impl From<&str> for LetterCounts {
    fn from(s: &str) -> Self {
        Self::from_chars(s.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_are_equal() {
        assert_eq!(LetterCounts::from("brain"), LetterCounts::from("barni"));
        assert_ne!(LetterCounts::from("brain"), LetterCounts::from("grain"));
        assert_ne!(LetterCounts::from("aab"), LetterCounts::from("abb"));
    }

    #[test]
    fn remove_drops_zero_entries() {
        let mut lc = LetterCounts::from("ab");
        lc.add('c');
        lc.remove('c');
        assert_eq!(lc, LetterCounts::from("ba"));
        assert_eq!(lc.len(), 2);
        lc.remove('z');
        assert_eq!(lc.len(), 2);
    }

    #[test]
    fn covers_checks_counts() {
        let word = LetterCounts::from("bananas");
        assert!(word.covers(&LetterCounts::from("nab")));
        assert!(word.covers(&LetterCounts::from("aaa")));
        assert!(!word.covers(&LetterCounts::from("aaaa")));
        assert!(word.covers(&LetterCounts::new()));
    }

    #[test]
    fn counts_codepoints_not_bytes() {
        let lc = LetterCounts::from("été");
        assert_eq!(lc.len(), 3);
        assert_eq!(lc.count('é'), 2);
    }
}
