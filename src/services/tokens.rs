//! 题目文本中使用的固定标记

/// 选择题分区标题
pub const CHOICE_HEADER: &str = "选择题";
/// 判断题分区标题
pub const JUDGE_HEADER: &str = "判断题";
/// 填空题分区标题
pub const BLANK_HEADER: &str = "填空题";

/// 答案标记
pub const ANSWER_MARKER: &str = "[答案]";
/// 解析标记
pub const ANALYSIS_MARKER: &str = "[解析]";

/// 判断题"正确"
pub const JUDGE_TRUE: &str = "正确";
/// 判断题"错误"
pub const JUDGE_FALSE: &str = "错误";

/// 选项字母，按位置分配
pub const OPTION_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
