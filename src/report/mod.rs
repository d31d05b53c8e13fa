//! # 报告模块
//!
//! 汇总所有批次的匹配记录，并导出为 CSV / 终端表格。
//!
//! 报告中的行顺序没有语义：每一行都是独立的事实。
//! 默认保持批次结果到达结果队列的顺序，需要稳定输出时可调用 `sort`。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 与 `commands/scan.rs` 使用
//! - 子模块: export, summary

pub mod export;
pub mod summary;

use crate::models::MatchRecord;

use std::collections::{BTreeMap, BTreeSet};

/// 最终报告：扁平的匹配记录序列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    records: Vec<MatchRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个批次的结果
    pub fn extend(&mut self, batch: Vec<MatchRecord>) {
        self.records.extend(batch);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// 按 (文件路径, 值) 排序
    pub fn sort(&mut self) {
        self.records.sort_by(|a, b| {
            a.file_path
                .cmp(&b.file_path)
                .then_with(|| a.value.cmp(&b.value))
        });
    }

    /// 包含至少一个匹配的不同文件数
    pub fn matched_files(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.file_path.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// 每个值出现在多少个文件中
    pub fn value_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.value.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Vec<MatchRecord>> for Report {
    fn from_iter<I: IntoIterator<Item = Vec<MatchRecord>>>(iter: I) -> Self {
        let mut report = Report::new();
        for batch in iter {
            report.extend(batch);
        }
        report
    }
}
