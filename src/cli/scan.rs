//! # scan 子命令 CLI 定义
//!
//! 扫描目录中的 JSON 文档，查找目标字符串值
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::batch::runner::{DEFAULT_BATCH_SIZE, DEFAULT_JOBS};
use crate::search::MatchMode;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 字符串匹配范围
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MatchModeArg {
    /// Only string values stored under a mapping key are compared
    MappingValues,
    /// Every string leaf is compared, including list elements
    AnyString,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::MappingValues => MatchMode::MappingValues,
            MatchModeArg::AnyString => MatchMode::AnyString,
        }
    }
}

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Folder containing the JSON documents
    pub folder: PathBuf,

    /// Values to search for; quote values containing spaces, e.g. '"a b" c'
    #[arg(short = 'v', long = "values", required = true, num_args = 1..)]
    pub values: Vec<String>,

    /// Output CSV file
    #[arg(short, long, default_value = "matching_files.csv")]
    pub output: PathBuf,

    /// Filename pattern(s) of candidate documents (comma-separated)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Search subdirectories recursively
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of files per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Maximum number of concurrent workers (0 = number of CPUs)
    #[arg(short, long, default_value_t = DEFAULT_JOBS)]
    pub jobs: usize,

    /// Which string leaves are compared against the targets
    #[arg(long, value_enum, default_value_t = MatchModeArg::MappingValues)]
    pub match_mode: MatchModeArg,

    /// Sort report rows by file path and value
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Print a per-value match table after the scan
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Hide the batch progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
