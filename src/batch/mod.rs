//! # 批量扫描模块
//!
//! 将候选文件列表切分为固定大小的批次，并行扫描后汇总结果。
//!
//! ## 功能
//! - 收集匹配扩展名的候选文件
//! - 按批次大小切分（保持原顺序，不重不漏）
//! - 有上限的线程池并行处理批次
//! - 单一协调者接收进度事件并顺序输出
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `crossbeam-channel` 传递批次结果与进度事件
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod partition;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchScanner, ScanConfig};
