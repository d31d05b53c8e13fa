//! # 报告导出
//!
//! 将报告写入 CSV 文件（UTF-8），表头为
//! `파일 이름, 파일 경로, 검색된 값`，每条记录一行。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `csv` 库写入, `serde` 序列化记录

use crate::error::{JsonseekError, Result};
use crate::models::record::REPORT_HEADER;
use crate::report::Report;

use std::path::Path;

/// 导出报告为 CSV
pub fn to_csv(report: &Report, output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    wtr.write_record(REPORT_HEADER)?;

    for record in report.records() {
        wtr.serialize(record)?;
    }

    wtr.flush().map_err(|e| JsonseekError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
