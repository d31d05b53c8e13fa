//! # JSON 文档加载
//!
//! 打开并解析单个 JSON 文件。文件句柄只在本函数内存活，
//! 解析失败时同样会被释放。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `serde_json` 解析

use crate::error::{JsonseekError, Result};

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 读取并解析 JSON 文档
pub fn load_document(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| JsonseekError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| JsonseekError::ParseError {
        format: "JSON".to_string(),
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
