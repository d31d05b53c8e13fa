//! # scan 命令实现
//!
//! 扫描目录中的 JSON 文档，写出包含目标值的文件清单。
//!
//! ## 流程
//! 1. 校验目录与目标值（配置错误直接终止，不触碰任何文件）
//! 2. 列出候选文件；为空时提示并结束，不生成报告
//! 3. 分批并行扫描，汇总报告
//! 4. 报告非空时写出 CSV，否则提示未找到
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/` 扫描, `report/` 导出
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchScanner, FileCollector, ScanConfig};
use crate::cli::scan::ScanArgs;
use crate::error::{JsonseekError, Result};
use crate::models::TargetSet;
use crate::parsers::parse_targets;
use crate::report::{export, summary, Report};
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 一次扫描的结束状态
#[derive(Debug, PartialEq, Eq)]
pub enum ScanStatus {
    /// 目录中没有候选文件
    NoCandidates,
    /// 没有任何匹配，未写出报告
    NoMatches,
    /// 报告已写出
    Written { matches: usize, output: PathBuf },
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning JSON Documents");

    let targets = validate_inputs(&args.folder, &args.values)?;
    let config = scan_config(&args)?;

    let collector = FileCollector::new(args.folder.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive);

    match run_scan(&collector, &targets, config, &args)? {
        ScanStatus::Written { matches, output: path } => {
            output::print_info(&format!("{} row(s) saved to '{}'", matches, path.display()));
        }
        ScanStatus::NoCandidates | ScanStatus::NoMatches => {}
    }

    Ok(())
}

/// 校验目录与目标值
pub fn validate_inputs(folder: &Path, values: &[String]) -> Result<TargetSet> {
    if !folder.exists() {
        return Err(JsonseekError::DirectoryNotFound {
            path: folder.display().to_string(),
        });
    }
    if !folder.is_dir() {
        return Err(JsonseekError::NotADirectory {
            path: folder.display().to_string(),
        });
    }

    parse_targets(values)
}

/// 由命令行参数构造扫描配置
pub fn scan_config(args: &ScanArgs) -> Result<ScanConfig> {
    let config = ScanConfig {
        batch_size: args.batch_size,
        jobs: args.jobs,
        match_mode: args.match_mode.into(),
    };
    config.validate()?;
    Ok(config)
}

/// 列出候选文件、扫描并写出报告
fn run_scan(
    collector: &FileCollector,
    targets: &TargetSet,
    config: ScanConfig,
    args: &ScanArgs,
) -> Result<ScanStatus> {
    let spinner = progress::create_spinner("Listing candidate files...");
    let files = spinner.suspend(|| collector.collect());
    spinner.finish_and_clear();
    let files = files?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No candidate files matching '{}' in '{}'",
            args.pattern,
            args.folder.display()
        ));
        return Ok(ScanStatus::NoCandidates);
    }

    let scanner = BatchScanner::new(config).show_progress(!args.no_progress);
    output::print_info(&format!(
        "Searching {} file(s) in {} batch(es) of up to {} with {} worker(s) for {} value(s)",
        files.len(),
        files.len().div_ceil(config.batch_size.max(1)),
        config.batch_size,
        scanner.jobs(),
        targets.len()
    ));

    let outcome = scanner.scan(&files, targets)?;
    let mut report = outcome.report;

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} batch(es), {} file(s) scanned, {} failed, {} match(es)",
        outcome.stats.batches,
        outcome.stats.scanned(),
        outcome.stats.failed(),
        outcome.stats.matches
    ));
    output::print_failures(&outcome.stats.failures, output::MAX_LISTED_FAILURES);

    if args.sort {
        report.sort();
    }

    let status = finish_report(&report, &args.output)?;

    if args.summary {
        summary::print_value_table(&report, targets);
    }

    Ok(status)
}

/// 报告非空时写出 CSV
fn finish_report(report: &Report, output_path: &Path) -> Result<ScanStatus> {
    if report.is_empty() {
        output::print_warning("No JSON file contains any of the given values.");
        return Ok(ScanStatus::NoMatches);
    }

    export::to_csv(report, output_path)?;

    output::print_done(&format!(
        "Found {} match(es) in {} file(s)",
        report.len(),
        report.matched_files()
    ));

    Ok(ScanStatus::Written {
        matches: report.len(),
        output: output_path.to_path_buf(),
    })
}
