//! # jsonseek - JSON 文档目标值批量检索工具
//!
//! 扫描目录中的 JSON 文档，找出包含指定字符串值的文件，
//! 结果写入 CSV 报告。
//!
//! ## 子命令
//! - `scan` - 分批并行扫描目录并导出匹配报告
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (候选收集、批次切分、并行扫描)
//!   │     ├── search/    (值提取器)
//!   │     ├── parsers/   (文档加载、目标值解析)
//!   │     ├── report/    (报告汇总与导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod report;
mod search;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        if e.is_configuration() {
            utils::output::print_info("Nothing was scanned. Check the folder path and values.");
        }
        std::process::exit(1);
    }
}
