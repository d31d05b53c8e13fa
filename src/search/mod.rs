//! # 值检索模块
//!
//! 在已解析的 JSON 文档中递归查找目标字符串。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `models/` 中的 TargetSet
//! - 子模块: extractor

pub mod extractor;

pub use extractor::{extract, MatchMode};
