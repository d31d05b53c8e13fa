//! # 值提取器
//!
//! 递归遍历文档的映射/序列结构，返回作为字符串叶子出现的目标值。
//!
//! 默认模式下只检查映射中的值：序列元素只会被继续向下遍历，
//! 自身是字符串时并不参与比较，顶层字符串同样不参与比较。
//! `MatchMode::AnyString` 取消这一限制，检查所有字符串叶子。
//!
//! 提取是纯函数，多个 worker 可以对各自的文档并发调用。

use crate::models::TargetSet;

use serde_json::Value;
use std::collections::BTreeSet;

/// 字符串叶子的匹配范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// 只匹配映射中的字符串值；序列元素（包括顶层序列）中的字符串不参与比较
    #[default]
    MappingValues,
    /// 匹配任意位置的字符串（包括序列元素和顶层字符串）
    AnyString,
}

/// 返回文档中出现的目标值集合
pub fn extract(document: &Value, targets: &TargetSet, mode: MatchMode) -> BTreeSet<String> {
    let mut matched = BTreeSet::new();

    match mode {
        MatchMode::MappingValues => walk_mapping_values(document, targets, &mut matched),
        MatchMode::AnyString => walk_any_string(document, targets, &mut matched),
    }

    matched
}

fn walk_mapping_values(node: &Value, targets: &TargetSet, matched: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for value in map.values() {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        walk_mapping_values(value, targets, matched)
                    }
                    Value::String(s) if targets.contains(s) => {
                        matched.insert(s.clone());
                    }
                    _ => {}
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_mapping_values(item, targets, matched);
            }
        }
        _ => {}
    }
}

fn walk_any_string(node: &Value, targets: &TargetSet, matched: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for value in map.values() {
                walk_any_string(value, targets, matched);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk_any_string(item, targets, matched);
            }
        }
        Value::String(s) if targets.contains(s) => {
            matched.insert(s.clone());
        }
        _ => {}
    }
}
