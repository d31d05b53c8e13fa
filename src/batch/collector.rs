//! # 文件收集器
//!
//! 根据输入目录和文件名模式收集候选文档列表。
//!
//! ## 功能
//! - glob 模式匹配（逗号分隔的多模式，默认 `*.json`）
//! - 可选递归目录搜索（默认只看目录的直接子项）
//! - 跟随符号链接，指向文件的链接同样作为候选
//! - 结果按路径排序，保证多次运行顺序一致
//! - 根目录不可读时报错；子项遍历失败时打印诊断并继续
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{JsonseekError, Result};
use crate::utils::output;

use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认候选文件模式
pub const DEFAULT_PATTERN: &str = "*.json";

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    root: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（模式为 `*.json`）
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: vec![Pattern::new(DEFAULT_PATTERN).expect("default pattern is valid")],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    JsonseekError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        fs::read_dir(&self.root).map_err(|e| JsonseekError::FileReadError {
            path: self.root.display().to_string(),
            source: e,
        })?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true);

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let name = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    output::print_file_diagnostic(&name, &e.to_string());
                    continue;
                }
            };

            if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn setup_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.json"), "{}").unwrap();
        fs::write(root.join("a.json"), "{}").unwrap();
        fs::write(root.join("notes.txt"), "hello").unwrap();
        fs::write(root.join("data.json.bak"), "{}").unwrap();
        fs::create_dir(root.join("nested.json")).unwrap();
        fs::write(root.join("nested.json").join("c.json"), "{}").unwrap();
        dir
    }

    fn file_names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_collect_top_level_json_sorted() {
        let dir = setup_dir();
        let files = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert_eq!(file_names(&files), vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_collect_recursive() {
        let dir = setup_dir();
        let files = FileCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(files.len(), 3);
        assert!(file_names(&files).contains(&"c.json".to_string()));
    }

    #[test]
    fn test_collect_multiple_patterns() {
        let dir = setup_dir();
        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.txt, a.*")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(file_names(&files), vec!["a.json", "notes.txt"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(matches!(result, Err(JsonseekError::InvalidArgument(_))));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileCollector::new(dir.path().join("missing")).collect();
        assert!(matches!(result, Err(JsonseekError::FileReadError { .. })));
    }

    #[test]
    fn test_unreadable_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.json");
        fs::write(&file, "{}").unwrap();

        match FileCollector::new(file.clone()).collect() {
            Err(JsonseekError::FileReadError { path, .. }) => {
                assert_eq!(path, file.display().to_string())
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_collected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("real.json");
        fs::write(&target, r#"{"a": "foo"}"#).unwrap();
        fs::write(root.join("plain.json"), "{}").unwrap();
        std::os::unix::fs::symlink(&target, root.join("link.json")).unwrap();

        let files = FileCollector::new(root.to_path_buf()).collect().unwrap();
        assert_eq!(file_names(&files), vec!["link.json", "plain.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_link_does_not_abort_collection() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("plain.json"), "{}").unwrap();
        std::os::unix::fs::symlink(root.join("gone.json"), root.join("ghost.json")).unwrap();

        let files = FileCollector::new(root.to_path_buf()).collect().unwrap();
        assert_eq!(file_names(&files), vec!["plain.json"]);
    }
}
