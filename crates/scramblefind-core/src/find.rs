//! 查找主流程：加载 → 匹配 → 排序 → 输出
use std::io::Write;
use std::path::Path;

use crate::errors::Result;
use crate::loader::load_wordlist;
use crate::matcher::ScrambleMatcher;
use crate::options::{FindOptions, FindStats};
use crate::report::Report;

/// 对已加载的单词执行匹配，返回排序后的报告
pub fn find_in_words(words: &[String], opts: &FindOptions) -> Result<Report> {
    let matcher = ScrambleMatcher::new(&opts.normalized_target(), opts.mode)?;
    let matches = matcher.find_matches(words);
    Ok(Report::new(matcher.target(), opts.mode, matches))
}

/// 加载词表并将报告写入 `out`
///
/// 目标串在读取文件之前校验，词表在匹配开始前完成读取并释放文件句柄。
pub fn find_and_write(wordlist: &Path, out: &mut dyn Write, opts: &FindOptions) -> Result<FindStats> {
    let matcher = ScrambleMatcher::new(&opts.normalized_target(), opts.mode)?;
    let list = load_wordlist(wordlist, opts.strip_comments)?;

    let report = Report::new(matcher.target(), opts.mode, matcher.find_matches(&list.words));
    report.write_to(out, opts.format)?;

    Ok(FindStats {
        lines_read: list.lines_read,
        words_loaded: list.words.len(),
        matches: report.count(),
    })
}
