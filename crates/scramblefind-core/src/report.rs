//! 结果报告：排序与输出（文本 / JSON）
use serde::Serialize;
use std::io::Write;

use crate::errors::Result;
use crate::options::{MatchMode, OutputFormat};

/// JSON 输出结构
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem<'a> {
    pub target: &'a str,
    pub count: usize,
    pub matches: &'a [String],
}

/// 已排序的命中结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub target: String,
    pub mode: MatchMode,
    pub matches: Vec<String>,
}

impl Report {
    /// 命中按字典序（码点序）升序排列；重复项保留
    pub fn new(target: impl Into<String>, mode: MatchMode, mut matches: Vec<String>) -> Self {
        matches.sort();
        Self { target: target.into(), mode, matches }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn header(&self) -> String {
        match self.mode {
            MatchMode::Pattern => {
                format!("Found {} words matching pattern '{}':", self.count(), self.target)
            }
            MatchMode::Substring | MatchMode::Anagram => format!(
                "Found {} words containing a scrambled '{}' substring:",
                self.count(),
                self.target
            ),
        }
    }

    pub fn write_to(&self, out: &mut dyn Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// 标题行 + 每行一个单词
    pub fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.header())?;
        for m in &self.matches {
            writeln!(out, "{m}")?;
        }
        Ok(())
    }

    pub fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        let item = OutputItem { target: &self.target, count: self.count(), matches: &self.matches };
        serde_json::to_writer(&mut *out, &item)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        report.write_to(&mut buf, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_output_is_sorted_with_header() {
        let r = Report::new("brain", MatchMode::Substring, vec!["brainy".into(), "barnie".into()]);
        assert_eq!(
            render(&r, OutputFormat::Text),
            "Found 2 words containing a scrambled 'brain' substring:\nbarnie\nbrainy\n"
        );
    }

    #[test]
    fn empty_report_says_zero() {
        let r = Report::new("brain", MatchMode::Substring, Vec::new());
        assert_eq!(
            render(&r, OutputFormat::Text),
            "Found 0 words containing a scrambled 'brain' substring:\n"
        );
    }

    #[test]
    fn pattern_header() {
        let r = Report::new("br??n", MatchMode::Pattern, vec!["brown".into(), "brain".into()]);
        assert_eq!(
            render(&r, OutputFormat::Text),
            "Found 2 words matching pattern 'br??n':\nbrain\nbrown\n"
        );
    }

    #[test]
    fn json_output() {
        let r = Report::new("brain", MatchMode::Substring, vec!["nairb".into(), "brain".into()]);
        let v: serde_json::Value = serde_json::from_str(&render(&r, OutputFormat::Json)).unwrap();
        assert_eq!(v["target"], "brain");
        assert_eq!(v["count"], 2);
        assert_eq!(v["matches"], serde_json::json!(["brain", "nairb"]));
    }
}
