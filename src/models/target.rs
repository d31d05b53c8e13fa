//! # 目标值集合
//!
//! 调用方给出的待查找字符串集合。一次扫描期间只读，
//! 所有 worker 通过共享引用读取，无需同步。

use std::collections::BTreeSet;

/// 待查找的目标字符串集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    values: BTreeSet<String>,
}

impl TargetSet {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否包含该值
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 按字典序遍历
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|s| s.as_str())
    }

    /// 合并另一个集合
    pub fn extend(&mut self, other: TargetSet) {
        self.values.extend(other.values);
    }
}

impl<S: Into<String>> FromIterator<S> for TargetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let targets: TargetSet = ["foo", "bar", "foo"].into_iter().collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains("foo"));
        assert!(!targets.contains("baz"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let targets: TargetSet = ["c", "a", "b"].into_iter().collect();
        let values: Vec<&str> = targets.iter().collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_extend() {
        let mut a: TargetSet = ["x"].into_iter().collect();
        let b: TargetSet = ["y", "x"].into_iter().collect();
        a.extend(b);
        assert_eq!(a.len(), 2);
    }
}
