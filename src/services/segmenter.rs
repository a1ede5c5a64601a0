//! 分区切分 - 业务能力层
//!
//! 把整段文本切成 选择题 / 判断题 / 填空题 三个区域

use tracing::debug;

use crate::error::MalformedInputError;
use crate::services::tokens::{BLANK_HEADER, CHOICE_HEADER, JUDGE_HEADER};

/// 三个题型区域（均已去除首尾空白）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub choice: String,
    pub judge: String,
    pub blank: String,
}

/// 切分分区
///
/// 标题必须各出现一次，且顺序固定为 选择题 → 判断题 → 填空题。
pub fn segment(text: &str) -> Result<Sections, MalformedInputError> {
    let text = text.replace("\r\n", "\n");

    let choice_at = locate_header(&text, CHOICE_HEADER)?;
    let judge_at = locate_header(&text, JUDGE_HEADER)?;
    let blank_at = locate_header(&text, BLANK_HEADER)?;

    if !(choice_at < judge_at && judge_at < blank_at) {
        return Err(MalformedInputError::SectionOutOfOrder);
    }

    let sections = Sections {
        choice: text[choice_at + CHOICE_HEADER.len()..judge_at].trim().to_string(),
        judge: text[judge_at + JUDGE_HEADER.len()..blank_at].trim().to_string(),
        blank: text[blank_at + BLANK_HEADER.len()..].trim().to_string(),
    };

    debug!(
        "分区切分完成 - 选择 {} 字节, 判断 {} 字节, 填空 {} 字节",
        sections.choice.len(),
        sections.judge.len(),
        sections.blank.len()
    );

    Ok(sections)
}

/// 查找唯一的标题位置
fn locate_header(text: &str, header: &'static str) -> Result<usize, MalformedInputError> {
    let mut positions = text.match_indices(header).map(|(at, _)| at);
    let first = positions
        .next()
        .ok_or(MalformedInputError::MissingSection { header })?;
    if positions.next().is_some() {
        return Err(MalformedInputError::DuplicateSection { header });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_splits_three_regions() {
        let text = "选择题\n1. 题一 A. 甲 B. 乙 [答案] A\n判断题\n1. 地球是圆的 [答案] 正确\n填空题\n1. 一加一等于 [答案] 二\n";
        let sections = segment(text).unwrap();

        assert_eq!(sections.choice, "1. 题一 A. 甲 B. 乙 [答案] A");
        assert_eq!(sections.judge, "1. 地球是圆的 [答案] 正确");
        assert_eq!(sections.blank, "1. 一加一等于 [答案] 二");
    }

    #[test]
    fn test_segment_normalizes_crlf() {
        let text = "选择题\r\n1. 题 A. 甲 [答案] A\r\n2. 题 A. 乙 [答案] A\r\n判断题\r\n填空题\r\n";
        let sections = segment(text).unwrap();

        assert!(!sections.choice.contains('\r'));
        assert_eq!(sections.choice, "1. 题 A. 甲 [答案] A\n2. 题 A. 乙 [答案] A");
        assert_eq!(sections.judge, "");
        assert_eq!(sections.blank, "");
    }

    #[test]
    fn test_segment_ignores_preamble_before_choice_header() {
        let sections = segment("期中测验\n选择题 判断题 填空题").unwrap();
        assert_eq!(sections.choice, "");
    }

    #[test]
    fn test_segment_missing_header() {
        assert_eq!(
            segment("选择题\n1. 题 A. 甲 [答案] A\n填空题\n"),
            Err(MalformedInputError::MissingSection { header: JUDGE_HEADER })
        );
    }

    #[test]
    fn test_segment_duplicate_header() {
        assert_eq!(
            segment("选择题 判断题 判断题 填空题"),
            Err(MalformedInputError::DuplicateSection { header: JUDGE_HEADER })
        );
    }

    #[test]
    fn test_segment_out_of_order() {
        assert_eq!(
            segment("判断题 选择题 填空题"),
            Err(MalformedInputError::SectionOutOfOrder)
        );
    }
}
