//! # 美化输出工具
//!
//! 提供统一的终端输出样式。扫描期间的输出都经由
//! 单一协调者调用这里的函数，避免多线程交错打印。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/runner.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 失败列表默认最多显示的条数
pub const MAX_LISTED_FAILURES: usize = 10;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印单个文件的读取/解析诊断
pub fn print_file_diagnostic(file_name: &str, reason: &str) {
    println!(
        "{} {} {}",
        "[WARN]".yellow().bold(),
        format!("Failed to read {}:", file_name).yellow(),
        reason.dimmed()
    );
}

/// 打印失败文件列表（超过 `limit` 条时折叠）
pub fn print_failures(failures: &[(String, String)], limit: usize) {
    if failures.is_empty() {
        return;
    }

    print_warning(&format!("{} file(s) could not be read:", failures.len()));
    for (file, err) in failures.iter().take(limit) {
        println!("  {} {}", file.bold(), err.dimmed());
    }
    if failures.len() > limit {
        print_warning(&format!("  ... and {} more", failures.len() - limit));
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
