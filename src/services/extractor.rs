//! 字段抽取 - 业务能力层
//!
//! 把单道题拆成 题干 / 选项 / 答案 / 解析

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MalformedInputError;
use crate::models::{ParsedItem, ProblemKind};
use crate::services::tokens::{ANALYSIS_MARKER, ANSWER_MARKER, OPTION_LETTERS};

static OPTION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]+\.").expect("选项正则"));

/// 抽取一道题的各个字段
///
/// # 参数
/// - `kind`: 所在分区对应的题型
/// - `raw`: 去掉题号后的题目文本
/// - `item`: 题目在分区中的序号（从 1 开始，仅用于错误信息）
pub fn extract(kind: ProblemKind, raw: &str, item: usize) -> Result<ParsedItem, MalformedInputError> {
    let (before, after) = split_answer(kind, raw, item)?;

    let (stem, options) = match kind {
        ProblemKind::Choice => split_options(before, item)?,
        ProblemKind::Blank | ProblemKind::Judge => (before.trim().to_string(), Vec::new()),
    };

    let (answer, analysis) = match after.split_once(ANALYSIS_MARKER) {
        Some((answer, analysis)) => (answer.trim().to_string(), analysis.trim().to_string()),
        None => (after.trim().to_string(), String::new()),
    };

    Ok(ParsedItem {
        kind,
        stem,
        options,
        answer,
        analysis,
    })
}

/// 按答案标记切成恰好两段
fn split_answer(
    kind: ProblemKind,
    raw: &str,
    item: usize,
) -> Result<(&str, &str), MalformedInputError> {
    let mut parts = raw.split(ANSWER_MARKER);
    let before = parts.next().unwrap_or_default();
    let after = parts
        .next()
        .ok_or(MalformedInputError::MissingAnswerMarker { kind, item })?;
    if parts.next().is_some() {
        return Err(MalformedInputError::DuplicateAnswerMarker { kind, item });
    }
    Ok((before, after))
}

/// 拆出题干和选项，选项字母只看位置
fn split_options(before: &str, item: usize) -> Result<(String, Vec<String>), MalformedInputError> {
    let mut fragments = OPTION_PREFIX.split(before).map(str::trim);
    let stem = fragments.next().unwrap_or_default().to_string();
    let options: Vec<String> = fragments.map(str::to_string).collect();

    if options.is_empty() {
        return Err(MalformedInputError::NoOptions { item });
    }
    if options.len() > OPTION_LETTERS.len() {
        return Err(MalformedInputError::TooManyOptions {
            item,
            count: options.len(),
        });
    }

    Ok((stem, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_choice_with_analysis() {
        let parsed = extract(
            ProblemKind::Choice,
            "中国的首都是 A. 北京 B. 上海 [答案] A [解析] 北京是首都",
            1,
        )
        .unwrap();

        assert_eq!(parsed.stem, "中国的首都是");
        assert_eq!(parsed.options, vec!["北京", "上海"]);
        assert_eq!(parsed.answer, "A");
        assert_eq!(parsed.analysis, "北京是首都");
    }

    #[test]
    fn test_extract_without_analysis_leaves_it_empty() {
        let parsed = extract(ProblemKind::Blank, "一加一等于 [答案]  二 ", 1).unwrap();

        assert_eq!(parsed.stem, "一加一等于");
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.answer, "二");
        assert_eq!(parsed.analysis, "");
    }

    #[test]
    fn test_extract_keeps_case_and_punctuation() {
        let parsed = extract(ProblemKind::Judge, "Rust 是 内存安全的？ [答案] 正确 [解析] Borrow checker!", 2).unwrap();

        assert_eq!(parsed.stem, "Rust 是 内存安全的？");
        assert_eq!(parsed.analysis, "Borrow checker!");
    }

    #[test]
    fn test_extract_source_letters_do_not_matter() {
        let parsed = extract(ProblemKind::Choice, "题 C. 甲 A. 乙 [答案] B", 1).unwrap();
        assert_eq!(parsed.options, vec!["甲", "乙"]);
    }

    #[test]
    fn test_extract_missing_answer_marker() {
        assert_eq!(
            extract(ProblemKind::Judge, "没有答案的题", 4),
            Err(MalformedInputError::MissingAnswerMarker {
                kind: ProblemKind::Judge,
                item: 4
            })
        );
    }

    #[test]
    fn test_extract_duplicate_answer_marker() {
        assert_eq!(
            extract(ProblemKind::Blank, "题 [答案] 一 [答案] 二", 2),
            Err(MalformedInputError::DuplicateAnswerMarker {
                kind: ProblemKind::Blank,
                item: 2
            })
        );
    }

    #[test]
    fn test_extract_choice_without_options() {
        assert_eq!(
            extract(ProblemKind::Choice, "没有选项 [答案] A", 5),
            Err(MalformedInputError::NoOptions { item: 5 })
        );
    }

    #[test]
    fn test_extract_choice_too_many_options() {
        let mut raw = String::from("字母不够用");
        for letter in OPTION_LETTERS.chars() {
            raw.push_str(&format!(" {}. 选项{}", letter, letter));
        }
        raw.push_str(" AA. 多出来的 [答案] A");

        assert_eq!(
            extract(ProblemKind::Choice, &raw, 1),
            Err(MalformedInputError::TooManyOptions { item: 1, count: 27 })
        );
    }

    #[test]
    fn test_extract_repeated_analysis_marker_stays_in_analysis() {
        let parsed = extract(ProblemKind::Blank, "题 [答案] 一 [解析] 甲 [解析] 乙", 1).unwrap();
        assert_eq!(parsed.answer, "一");
        assert_eq!(parsed.analysis, "甲 [解析] 乙");
    }
}
