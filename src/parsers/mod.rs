//! # 解析器模块
//!
//! 提供 JSON 文档加载和目标值列表的解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: document, targets

pub mod document;
pub mod targets;

pub use document::load_document;
pub use targets::parse_targets;
