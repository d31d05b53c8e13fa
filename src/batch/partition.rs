//! # 批次切分
//!
//! 把候选文件列表切分为连续的、最多 `batch_size` 个文件的批次。
//! 批次之间不重叠、不遗漏，批次内部保持原始顺序。

use std::path::PathBuf;

/// 一个批次：文件列表中的一段连续切片
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    /// 批次序号（仅用于进度显示）
    pub index: usize,
    /// 本批次的文件
    pub files: &'a [PathBuf],
}

/// 切分文件列表；`batch_size` 为 0 时按 1 处理
pub fn partition(files: &[PathBuf], batch_size: usize) -> Vec<Batch<'_>> {
    files
        .chunks(batch_size.max(1))
        .enumerate()
        .map(|(index, files)| Batch { index, files })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("{:04}.json", i))).collect()
    }

    #[test]
    fn test_partition_is_exact_and_ordered() {
        let files = names(1234);
        for size in [1, 7, 500, 1234, 5000] {
            let batches = partition(&files, size);
            assert_eq!(batches.len(), files.len().div_ceil(size));
            assert!(batches.iter().all(|b| !b.files.is_empty() && b.files.len() <= size));

            let rejoined: Vec<PathBuf> = batches.iter().flat_map(|b| b.files.to_vec()).collect();
            assert_eq!(rejoined, files);

            for (i, batch) in batches.iter().enumerate() {
                assert_eq!(batch.index, i);
            }
        }
    }

    #[test]
    fn test_partition_last_batch_is_remainder() {
        let files = names(1001);
        let batches = partition(&files, 500);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].files.len(), 1);
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(&[], 500).is_empty());
    }

    #[test]
    fn test_partition_zero_size() {
        let files = names(3);
        assert_eq!(partition(&files, 0).len(), 3);
    }
}
