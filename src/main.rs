//! numgap - find the holes in numbered file and directory sequences.
//!
//! Usage:
//!   numgap -d PHOTOS                 Check one directory
//!   numgap -d A -d B -r              Check several, recursively
//!   numgap -d LOGS --check dirs      Check directory names instead
//!   numgap -d SHOTS --format csv     Machine-readable output
//!   numgap --help                    Show all options

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};

use numgap_analyze::GapAnalyzer;
use numgap_core::{AnalyzeConfig, BlockPolicy, CheckMode, ScanConfig};
use numgap_render::{
    deliver, OutputFormat, OutputTarget, RangeStyle, RenderOptions, ShowMode, SinkConfig,
};
use numgap_scan::NameScanner;

#[derive(Parser)]
#[command(
    name = "numgap",
    version,
    about = "Detect missing numbers in file and directory name sequences",
    long_about = "numgap scans directories for names carrying numeric blocks \
                  (frame_0001.png, disc-3, s01e05), groups them into sequences, \
                  and reports the numbers that should exist but don't."
)]
struct Cli {
    /// Directory to check (repeatable)
    #[arg(short, long = "dir", required = true)]
    dir: Vec<PathBuf>,

    /// Glob pattern for names to skip; matching directories are not entered (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// What to analyze: file names, directory names, or both
    #[arg(long, value_enum, default_value = "files")]
    check: CheckArg,

    /// Regex a name must match to be considered
    #[arg(long)]
    pattern: Option<String>,

    /// Substring a name must contain to be considered
    #[arg(long)]
    filter: Option<String>,

    /// Number of scan threads (default: auto)
    #[arg(long)]
    threads: Option<usize>,

    /// Which numeric block in a name identifies the sequence
    #[arg(long, value_enum, default_value = "first")]
    block_policy: PolicyArg,

    /// Block position for --block-policy index (0-based)
    #[arg(long, default_value_t = 0)]
    block_index: usize,

    /// Expand inline ranges like 005-008 to cover every number in between
    #[arg(long)]
    multi_range: bool,

    /// Merge sequences with the same shape across directories
    #[arg(long)]
    cross_dir_grouping: bool,

    /// Split a sequence where consecutive numbers differ by more than this
    #[arg(long)]
    group_threshold: Option<u64>,

    /// Check from this number instead of the smallest one found
    #[arg(long)]
    start_num: Option<u64>,

    /// Check up to this number instead of the largest one found
    #[arg(long)]
    end_num: Option<u64>,

    /// Round the checked range out to multiples of this boundary (e.g. 100)
    #[arg(long)]
    mod_boundary: Option<u64>,

    /// Expected step between consecutive numbers
    #[arg(long, default_value_t = 1)]
    increment: u64,

    /// Treat 005 and 5 as the same sequence
    #[arg(long)]
    width_insensitive: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: FormatArg,

    /// List every missing item instead of compact first..last segments
    #[arg(long, value_enum, default_value = "compact")]
    range: RangeArg,

    /// Blank line between missing segments
    #[arg(long)]
    range_spacing: bool,

    /// How to label each missing item
    #[arg(long, value_enum, default_value = "filename")]
    show: ShowArg,

    /// Annotate each gap as leading, internal, or trailing
    #[arg(long)]
    explain: bool,

    /// Append overall found/missing statistics
    #[arg(long)]
    stats: bool,

    /// Also list sequences with nothing missing
    #[arg(long)]
    show_empty: bool,

    /// Per-sequence debug details
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the stdout copy of the report
    #[arg(short, long)]
    quiet: bool,

    /// Where the report goes
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputArg,

    /// Report file name for --output file/all (default: timestamped)
    #[arg(long)]
    filename: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CheckArg {
    Files,
    Dirs,
    Both,
}

impl From<CheckArg> for CheckMode {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::Files => Self::Files,
            CheckArg::Dirs => Self::Dirs,
            CheckArg::Both => Self::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    First,
    Last,
    Largest,
    All,
    Index,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Summary,
    Inline,
    Csv,
    Json,
    AsciiTable,
    RichTable,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Summary => Self::Summary,
            FormatArg::Inline => Self::Inline,
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
            FormatArg::AsciiTable => Self::AsciiTable,
            FormatArg::RichTable => Self::RichTable,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RangeArg {
    All,
    Compact,
}

impl From<RangeArg> for RangeStyle {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::All => Self::All,
            RangeArg::Compact => Self::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShowArg {
    Filename,
    Padded,
    Number,
    Significant,
}

impl From<ShowArg> for ShowMode {
    fn from(arg: ShowArg) -> Self {
        match arg {
            ShowArg::Filename => Self::Filename,
            ShowArg::Padded => Self::Padded,
            ShowArg::Number => Self::Number,
            ShowArg::Significant => Self::Significant,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Stdout,
    File,
    Clip,
    All,
}

impl OutputArg {
    fn targets(self) -> Vec<OutputTarget> {
        match self {
            Self::Stdout => vec![OutputTarget::Stdout],
            Self::File => vec![OutputTarget::File],
            Self::Clip => vec![OutputTarget::Clipboard],
            Self::All => vec![
                OutputTarget::Stdout,
                OutputTarget::File,
                OutputTarget::Clipboard,
            ],
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let scan_config = ScanConfig::builder()
        .roots(cli.dir.clone())
        .recursive(cli.recursive)
        .check_mode(CheckMode::from(cli.check))
        .exclude(cli.exclude.clone())
        .name_pattern(cli.pattern.clone())
        .name_filter(cli.filter.clone())
        .threads(cli.threads.unwrap_or(0))
        .build()
        .context("Invalid scan options")?;

    let block_policy = match cli.block_policy {
        PolicyArg::First => BlockPolicy::First,
        PolicyArg::Last => BlockPolicy::Last,
        PolicyArg::Largest => BlockPolicy::Largest,
        PolicyArg::All => BlockPolicy::All,
        PolicyArg::Index => BlockPolicy::Index(cli.block_index),
    };

    let analyze_config = AnalyzeConfig::builder()
        .block_policy(block_policy)
        .multi_range(cli.multi_range)
        .cross_dir_grouping(cli.cross_dir_grouping)
        .group_threshold(cli.group_threshold)
        .forced_start(cli.start_num)
        .forced_end(cli.end_num)
        .mod_boundary(cli.mod_boundary)
        .increment(cli.increment)
        .width_sensitive(!cli.width_insensitive)
        .build()
        .context("Invalid analysis options")?;

    if cli.verbose {
        for dir in &cli.dir {
            eprintln!("Scanning {}...", dir.display());
        }
    }

    let scanner = NameScanner::new();
    let items = scanner.scan(&scan_config).context("Scan failed")?;

    if cli.verbose {
        eprintln!("Collected {} name(s)", items.len());
    }

    let analyzer = GapAnalyzer::with_config(analyze_config);
    let report = analyzer.analyze(&items).context("Analysis failed")?;

    let opts = RenderOptions {
        range_style: cli.range.into(),
        range_spacing: cli.range_spacing,
        show: cli.show.into(),
        explain: cli.explain,
        stats: cli.stats,
        show_empty: cli.show_empty,
        verbose: cli.verbose,
    };
    let rendered = numgap_render::render(&report, cli.format.into(), &opts)?;

    let sink = SinkConfig {
        targets: cli.output.targets(),
        file_path: cli.filename.clone(),
        quiet: cli.quiet,
    };
    for note in deliver(&rendered, &sink)? {
        eprintln!("{note}");
    }

    if !cli.quiet && report.total_missing() == 0 && !report.groups.is_empty() {
        eprintln!("No gaps found across {} sequence(s)", report.groups.len());
    }

    Ok(())
}
