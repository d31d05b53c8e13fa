//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `scan`: 扫描目录中的 JSON 文档并查找目标值
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: scan

pub mod scan;

use clap::{Parser, Subcommand};

/// jsonseek - JSON 文档目标值批量检索工具
#[derive(Parser)]
#[command(name = "jsonseek")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Find which JSON documents in a folder contain given string values", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder of JSON documents for target values and write a CSV report
    Scan(scan::ScanArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
