//! # 统一错误处理模块
//!
//! 定义 jsonseek 的所有错误类型，使用 `thiserror` 派生。
//!
//! 运行级错误（配置错误、报告写入失败）会终止本次扫描；
//! 单文件的读取/解析错误只作为诊断信息记录，不会向上传播。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// jsonseek 统一错误类型
#[derive(Error, Debug)]
pub enum JsonseekError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误（扫描开始前即终止）
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("No target values given; nothing to search for")]
    NoTargets,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl JsonseekError {
    /// 是否为扫描开始前的配置错误
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            JsonseekError::DirectoryNotFound { .. }
                | JsonseekError::NotADirectory { .. }
                | JsonseekError::NoTargets
                | JsonseekError::InvalidArgument(_)
        )
    }

    /// 底层原因（不含文件路径），用于单文件诊断
    pub fn cause(&self) -> String {
        match self {
            JsonseekError::FileReadError { source, .. }
            | JsonseekError::FileWriteError { source, .. } => source.to_string(),
            JsonseekError::ParseError { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, JsonseekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        assert!(JsonseekError::NoTargets.is_configuration());
        assert!(JsonseekError::DirectoryNotFound {
            path: "x".to_string()
        }
        .is_configuration());
        assert!(!JsonseekError::ParseError {
            format: "JSON".to_string(),
            path: "a.json".to_string(),
            reason: "eof".to_string(),
        }
        .is_configuration());
    }

    #[test]
    fn test_parse_error_message_names_file() {
        let err = JsonseekError::ParseError {
            format: "JSON".to_string(),
            path: "broken.json".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("broken.json"));
        assert!(msg.contains("expected value"));
        assert_eq!(err.cause(), "expected value at line 1 column 1");
    }
}
