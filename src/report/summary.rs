//! # 终端汇总表
//!
//! 使用 `tabled` 打印每个目标值在多少个文件中被找到。

use crate::models::TargetSet;
use crate::report::Report;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
pub struct ValueRow {
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Files")]
    pub files: usize,
}

/// 每个目标值一行，未找到的值计 0
pub fn value_rows(report: &Report, targets: &TargetSet) -> Vec<ValueRow> {
    let counts = report.value_counts();
    targets
        .iter()
        .map(|value| ValueRow {
            value: value.to_string(),
            files: counts.get(value).copied().unwrap_or(0),
        })
        .collect()
}

/// 打印目标值汇总表
pub fn print_value_table(report: &Report, targets: &TargetSet) {
    let rows = value_rows(report, targets);
    if rows.is_empty() {
        return;
    }

    output::print_header("Matches per Value");
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;
    use std::path::Path;

    #[test]
    fn test_rows_include_absent_targets() {
        let report: Report = vec![vec![
            MatchRecord::new(Path::new("a.json"), "foo"),
            MatchRecord::new(Path::new("b.json"), "foo"),
        ]]
        .into_iter()
        .collect();
        let targets: TargetSet = ["foo", "z"].into_iter().collect();

        let rows = value_rows(&report, &targets);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].value.as_str(), rows[0].files), ("foo", 2));
        assert_eq!((rows[1].value.as_str(), rows[1].files), ("z", 0));
    }
}
