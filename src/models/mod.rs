//! # 数据模型模块
//!
//! 定义扫描过程中流转的数据：目标值集合、匹配记录。
//!
//! ## 依赖关系
//! - 被 `search/`, `batch/`, `report/` 和 `commands/` 使用
//! - 子模块: target, record

pub mod record;
pub mod target;

pub use record::MatchRecord;
pub use target::TargetSet;
