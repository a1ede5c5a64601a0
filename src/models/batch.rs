use serde::{Deserialize, Serialize};

use super::problem::{ChoiceOption, ProblemKind};

/// 字段抽取后的原始题目，仅在一次导入调用内存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub kind: ProblemKind,
    pub stem: String,
    /// 选项文本，按出现顺序（仅选择题）
    pub options: Vec<String>,
    pub answer: String,
    pub analysis: String,
}

/// 按题型解析后的答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerPayload {
    /// 每个选项的字母、文本和正误
    Choice(Vec<ChoiceOption>),
    /// 填空题答案原文
    Blank(String),
    /// 判断题正误
    Judge(bool),
}

impl AnswerPayload {
    pub fn kind(&self) -> ProblemKind {
        match self {
            AnswerPayload::Choice(_) => ProblemKind::Choice,
            AnswerPayload::Blank(_) => ProblemKind::Blank,
            AnswerPayload::Judge(_) => ProblemKind::Judge,
        }
    }
}

/// 可直接写库的题目：原始字段 + 已解析答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub item: ParsedItem,
    pub payload: AnswerPayload,
}

/// 导入结果中的一条记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemBatch {
    pub problem_id: i64,
    pub problem_type: ProblemKind,
    pub description: String,
    pub analysis: String,
    pub answer: String,
}

/// 批量导入响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchProblemResponse {
    pub problems: Vec<ProblemBatch>,
}
