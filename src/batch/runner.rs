//! # 批量扫描器
//!
//! 并行扫描各批次，汇总为最终报告。
//!
//! ## 功能
//! - 基于 rayon 的有上限线程池（`jobs` 个线程），批次数量不再决定线程数
//! - 每个批次向共享结果队列推送恰好一次结果（可能为空）
//! - worker 只发送事件，由调用线程作为唯一协调者更新进度条和打印诊断
//! - 所有批次结束后按到达顺序排空结果队列
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `parsers/document.rs` 读取文档, `search/` 提取匹配值
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 并行, `crossbeam-channel` 传递结果与事件

use crate::batch::partition::{partition, Batch};
use crate::error::{JsonseekError, Result};
use crate::models::{MatchRecord, TargetSet};
use crate::parsers::load_document;
use crate::report::Report;
use crate::search::{extract, MatchMode};
use crate::utils::{output, progress};

use crossbeam_channel::{unbounded, Sender};
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::PathBuf;
use std::thread;

/// 默认批次大小
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// 默认并行 worker 上限
pub const DEFAULT_JOBS: usize = 8;

/// 扫描配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// 每个批次最多包含的文件数
    pub batch_size: usize,
    /// 同时运行的 worker 数上限（0 表示 CPU 核数）
    pub jobs: usize,
    /// 字符串叶子的匹配范围
    pub match_mode: MatchMode,
}

impl ScanConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(JsonseekError::InvalidArgument(
                "--batch-size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            jobs: DEFAULT_JOBS,
            match_mode: MatchMode::default(),
        }
    }
}

/// worker 发给协调者的事件
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// 单个文件读取或解析失败
    FileFailed { file: String, reason: String },
    /// 一个批次已完成并已推送结果
    BatchDone { index: usize, matches: usize },
}

/// 扫描统计
#[derive(Debug, Default)]
pub struct ScanStats {
    /// 候选文件数
    pub files: usize,
    /// 批次数
    pub batches: usize,
    /// 已完成批次数
    pub batches_done: usize,
    /// 匹配记录总数
    pub matches: usize,
    /// 失败详情 (文件名, 原因)
    pub failures: Vec<(String, String)>,
}

impl ScanStats {
    /// 记录一个事件
    pub fn merge(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::FileFailed { file, reason } => self.failures.push((file, reason)),
            ScanEvent::BatchDone { matches, .. } => {
                self.batches_done += 1;
                self.matches += matches;
            }
        }
    }

    /// 失败文件数
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 成功解析的文件数
    pub fn scanned(&self) -> usize {
        self.files - self.failed()
    }
}

/// 扫描结果
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: Report,
    pub stats: ScanStats,
}

/// 批量扫描器
pub struct BatchScanner {
    config: ScanConfig,
    /// 并行作业数（已解析 0 值）
    jobs: usize,
    show_progress: bool,
}

impl BatchScanner {
    /// 创建新的批量扫描器
    pub fn new(config: ScanConfig) -> Self {
        let jobs = if config.jobs == 0 {
            num_cpus::get()
        } else {
            config.jobs
        };
        Self {
            config,
            jobs,
            show_progress: true,
        }
    }

    /// 是否显示进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// 实际使用的线程数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 扫描文件列表
    pub fn scan(&self, files: &[PathBuf], targets: &TargetSet) -> Result<ScanOutcome> {
        let batches = partition(files, self.config.batch_size);
        let total_batches = batches.len();

        let mut stats = ScanStats {
            files: files.len(),
            batches: total_batches,
            ..Default::default()
        };

        if batches.is_empty() {
            return Ok(ScanOutcome {
                report: Report::new(),
                stats,
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| JsonseekError::Other(format!("Failed to start worker pool: {}", e)))?;

        let pb = if self.show_progress {
            progress::create_batch_bar(total_batches as u64, "Scanning")
        } else {
            ProgressBar::hidden()
        };

        let (result_tx, result_rx) = unbounded::<Vec<MatchRecord>>();
        let (event_tx, event_rx) = unbounded::<ScanEvent>();
        let mode = self.config.match_mode;

        thread::scope(|s| {
            s.spawn(move || {
                pool.install(|| {
                    batches.par_iter().for_each_with(
                        (result_tx, event_tx),
                        |(results, events), batch| {
                            let records = scan_batch(batch, targets, mode, events);
                            let matches = records.len();
                            // 接收端在 scope 结束后才释放，发送不会失败
                            results.send(records).ok();
                            events
                                .send(ScanEvent::BatchDone {
                                    index: batch.index,
                                    matches,
                                })
                                .ok();
                        },
                    );
                });
            });

            // 协调者：所有发送端释放后循环结束
            for event in event_rx.iter() {
                match &event {
                    ScanEvent::FileFailed { file, reason } => {
                        pb.suspend(|| output::print_file_diagnostic(file, reason));
                        stats.merge(event);
                    }
                    ScanEvent::BatchDone { index, .. } => {
                        let index = *index;
                        stats.merge(event);
                        pb.inc(1);
                        pb.set_message(format!(
                            "{:.2}% (batch {} finished)",
                            progress::percent(stats.batches_done, total_batches),
                            index + 1
                        ));
                    }
                }
            }
        });

        pb.finish_and_clear();

        let report: Report = result_rx.try_iter().collect();

        Ok(ScanOutcome { report, stats })
    }
}

/// 顺序处理一个批次内的文件
fn scan_batch(
    batch: &Batch<'_>,
    targets: &TargetSet,
    mode: MatchMode,
    events: &Sender<ScanEvent>,
) -> Vec<MatchRecord> {
    let mut records = Vec::new();

    for path in batch.files {
        match load_document(path) {
            Ok(document) => {
                records.extend(
                    extract(&document, targets, mode)
                        .into_iter()
                        .map(|value| MatchRecord::new(path, value)),
                );
            }
            Err(e) => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                events
                    .send(ScanEvent::FileFailed {
                        file,
                        reason: e.cause(),
                    })
                    .ok();
            }
        }
    }

    records
}
