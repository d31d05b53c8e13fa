//! # 匹配记录
//!
//! 一条记录表示"某个目标值至少在某个文件中出现过一次"。
//! 同一文件中重复出现的同一个值只产生一条记录。

use serde::Serialize;
use std::path::Path;

/// 报告表头（文件名、文件路径、检索到的值）
pub const REPORT_HEADER: [&str; 3] = ["파일 이름", "파일 경로", "검색된 값"];

/// 单条匹配记录
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRecord {
    /// 文件名（不含目录）
    #[serde(rename = "파일 이름")]
    pub file_name: String,
    /// 完整文件路径
    #[serde(rename = "파일 경로")]
    pub file_path: String,
    /// 匹配到的目标值
    #[serde(rename = "검색된 값")]
    pub value: String,
}

impl MatchRecord {
    /// 由文件路径和匹配值构造记录
    pub fn new(path: &Path, value: impl Into<String>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            file_name,
            file_path: path.display().to_string(),
            value: value.into(),
        }
    }
}
