use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use scramblefind_core::{find_and_write, load_config, FindOptions, FindStats, MatchMode, OutputFormat};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "scramblefind", version, about = "查找包含目标串乱序子串的单词")]
struct Cli {
    /// 词表文件（每行一个单词）
    wordlist: PathBuf,

    /// 目标串（默认 brain）
    #[arg(long)]
    target: Option<String>,

    /// 配置文件路径（TOML，[find] 段）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 保留 `;` 之后的内容，不截断注释
    #[arg(long)]
    keep_comments: bool,

    /// 匹配模式：substring、anagram 或 pattern（`?` 为通配符）
    #[arg(long, value_parser = ["substring", "anagram", "pattern"])]
    mode: Option<String>,

    /// 输出格式：text 或 json
    #[arg(long, value_parser = ["text", "json"])]
    format: Option<String>,

    /// 输出文件；缺省写到标准输出
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // 缺少词表参数：用法打印到标准输出，退出码 1
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", Cli::command().render_usage());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let opts = resolve_options(&cli)?;
    info!(wordlist = ?cli.wordlist, target = %opts.target, mode = ?opts.mode, "starting search");

    // 报告先写入内存，查找成功后才触碰输出目标；失败时旧的输出文件保持原样
    let mut report = Vec::new();
    let stats = run(&cli, &opts, &mut report)?;
    match &cli.output {
        Some(path) => fs::write(path, &report).context("write output file")?,
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&report).context("write stdout")?;
            out.flush().context("flush stdout")?;
        }
    }

    info!(
        lines_read = stats.lines_read,
        words_loaded = stats.words_loaded,
        matches = stats.matches,
        "search finished"
    );
    Ok(())
}

fn run(cli: &Cli, opts: &FindOptions, out: &mut dyn Write) -> Result<FindStats> {
    find_and_write(&cli.wordlist, out, opts).context("search failed")
}

/// 合并选项：命令行 > 配置文件 > 内置默认值
fn resolve_options(cli: &Cli) -> Result<FindOptions> {
    let mut opts = FindOptions::default();
    if let Some(path) = &cli.config {
        let cfg = load_config(path).context("load config")?;
        debug!(?path, ?cfg, "config loaded");
        cfg.apply_to(&mut opts);
    }
    if let Some(t) = &cli.target {
        opts.target = t.clone();
    }
    if cli.keep_comments {
        opts.strip_comments = false;
    }
    if let Some(m) = cli.mode.as_deref() {
        opts.mode = parse_mode(m);
    }
    if let Some(f) = cli.format.as_deref() {
        opts.format = parse_format(f);
    }
    Ok(opts)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给报告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析匹配模式（取值已由 clap 限定）
fn parse_mode(s: &str) -> MatchMode {
    match s {
        "anagram" => MatchMode::Anagram,
        "pattern" => MatchMode::Pattern,
        _ => MatchMode::Substring,
    }
}

fn parse_format(s: &str) -> OutputFormat {
    match s {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_wordlist_is_missing_argument() {
        let err = Cli::try_parse_from(["scramblefind"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["scramblefind", "words.txt"]).unwrap();
        let opts = resolve_options(&cli).unwrap();
        assert_eq!(opts.target, "brain");
        assert!(opts.strip_comments);
        assert_eq!(opts.mode, MatchMode::Substring);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = tempfile::NamedTempFile::new().unwrap();
        writeln!(cfg, "[find]\ntarget = \"stone\"\nformat = \"json\"\nmode = \"anagram\"").unwrap();
        let path = cfg.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "scramblefind", "words.txt", "--config", path.as_str(), "--target", "heart", "--keep-comments",
        ])
        .unwrap();
        let opts = resolve_options(&cli).unwrap();
        assert_eq!(opts.target, "heart");
        assert!(!opts.strip_comments);
        assert_eq!(opts.mode, MatchMode::Anagram);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn pattern_mode_flag() {
        let cli = Cli::try_parse_from(["scramblefind", "w.txt", "--mode", "pattern", "--target", "br??n"]).unwrap();
        let opts = resolve_options(&cli).unwrap();
        assert_eq!(opts.mode, MatchMode::Pattern);
        assert_eq!(opts.target, "br??n");
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["scramblefind", "w.txt", "--mode", "fuzzy"]).is_err());
    }
}
