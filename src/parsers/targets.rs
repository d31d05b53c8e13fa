//! # 目标值列表解析
//!
//! 将用户输入按类 shell 规则切分为目标值：
//! - 空白分隔
//! - `"..."` 与 `'...'` 内的空白保留在同一个值中
//! - 相邻的引号段与普通段拼接为一个值（`a"b c"` -> `ab c`）
//! - 反斜杠转义：引号外转义任意字符；双引号内只转义 `"` 与 `\`
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `models/` 中的 TargetSet

use crate::error::{JsonseekError, Result};
use crate::models::TargetSet;

/// 解析一个或多个输入串为目标值集合，结果为空时报错
pub fn parse_targets<S: AsRef<str>>(inputs: &[S]) -> Result<TargetSet> {
    let mut targets = TargetSet::new();

    for input in inputs {
        targets.extend(split_quoted(input.as_ref())?.into_iter().collect());
    }

    if targets.is_empty() {
        return Err(JsonseekError::NoTargets);
    }

    Ok(targets)
}

/// 类 shell 切分
pub fn split_quoted(input: &str) -> Result<Vec<String>> {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Normal,
        Single,
        Double,
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    // 区分 "没有 token" 与 "空字符串 token"（如 `""`）
    let mut in_token = false;
    let mut state = State::Normal;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match state {
            State::Normal => match c {
                '\'' => {
                    state = State::Single;
                    in_token = true;
                }
                '"' => {
                    state = State::Double;
                    in_token = true;
                }
                '\\' => match chars.next() {
                    Some(next) => {
                        current.push(next);
                        in_token = true;
                    }
                    None => {
                        return Err(JsonseekError::InvalidArgument(format!(
                            "Trailing backslash with nothing to escape in target list: {}",
                            input
                        )));
                    }
                },
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
            State::Single => match c {
                '\'' => state = State::Normal,
                c => current.push(c),
            },
            State::Double => match c {
                '"' => state = State::Normal,
                '\\' => match chars.next() {
                    Some(next @ ('"' | '\\')) => current.push(next),
                    Some(next) => {
                        current.push('\\');
                        current.push(next);
                    }
                    None => current.push('\\'),
                },
                c => current.push(c),
            },
        }
    }

    if state != State::Normal {
        return Err(JsonseekError::InvalidArgument(format!(
            "Unterminated quote in target list: {}",
            input
        )));
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_multi_word_token() {
        let targets = parse_targets(&["\"a b\" c"]).unwrap();
        let values: Vec<&str> = targets.iter().collect();
        assert_eq!(values, vec!["a b", "c"]);
    }

    #[test]
    fn test_split_plain_and_quoted() {
        assert_eq!(
            split_quoted("  foo   'bar baz'\tqux ").unwrap(),
            vec!["foo", "bar baz", "qux"]
        );
        assert_eq!(split_quoted("a\"b c\"d").unwrap(), vec!["ab cd"]);
        assert_eq!(split_quoted(r#""say \"hi\"""#).unwrap(), vec![r#"say "hi""#]);
        assert_eq!(split_quoted(r"one\ two").unwrap(), vec!["one two"]);
    }

    #[test]
    fn test_empty_quotes_make_empty_token() {
        assert_eq!(split_quoted("\"\" x").unwrap(), vec!["", "x"]);
    }

    #[test]
    fn test_unterminated_quote() {
        assert!(matches!(
            split_quoted("\"open"),
            Err(JsonseekError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_trailing_backslash() {
        assert!(matches!(
            split_quoted("\\"),
            Err(JsonseekError::InvalidArgument(_))
        ));
        assert!(matches!(
            split_quoted("foo \\"),
            Err(JsonseekError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_targets(&["\\"]),
            Err(JsonseekError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            parse_targets(&["   "]),
            Err(JsonseekError::NoTargets)
        ));
        let none: [&str; 0] = [];
        assert!(matches!(parse_targets(&none), Err(JsonseekError::NoTargets)));
    }

    #[test]
    fn test_multiple_inputs_merge() {
        let targets = parse_targets(&["foo bar", "'bar' baz"]).unwrap();
        assert_eq!(targets.len(), 3);
        assert!(targets.contains("baz"));
    }
}
