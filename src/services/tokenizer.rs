//! 题号切分 - 业务能力层
//!
//! 按 "1." "12." 这样的题号把一个分区切成单道题

use once_cell::sync::Lazy;
use regex::Regex;

static ITEM_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.").expect("题号正则"));

/// 切分题目
///
/// 返回按原文顺序排列的题目文本（已去除首尾空白），空片段直接丢弃。
/// 空分区返回空列表。
pub fn split_items(section: &str) -> Vec<&str> {
    ITEM_NUMBER
        .split(section)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_items_in_source_order() {
        let items = split_items("1. 第一题 [答案] 甲\n2. 第二题 [答案] 乙\n12. 第十二题 [答案] 丙");
        assert_eq!(
            items,
            vec!["第一题 [答案] 甲", "第二题 [答案] 乙", "第十二题 [答案] 丙"]
        );
    }

    #[test]
    fn test_split_items_drops_leading_empty_fragment() {
        let items = split_items("1.只有一题 [答案] 正确");
        assert_eq!(items, vec!["只有一题 [答案] 正确"]);
    }

    #[test]
    fn test_split_items_empty_section() {
        assert!(split_items("").is_empty());
        assert!(split_items("   \n ").is_empty());
    }
}
