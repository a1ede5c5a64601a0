//! 答案解析 - 业务能力层
//!
//! 把答案原文转换成按题型区分的答案数据

use tracing::warn;

use crate::error::MalformedInputError;
use crate::models::{AnswerPayload, ChoiceOption, ParsedItem, ProblemKind};
use crate::services::tokens::{JUDGE_FALSE, JUDGE_TRUE, OPTION_LETTERS};

/// 答案解析器
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerResolver {
    /// 严格模式下，判断题答案只能是 正确/错误
    strict_judge: bool,
}

impl AnswerResolver {
    pub fn new(strict_judge: bool) -> Self {
        Self { strict_judge }
    }

    /// 解析一道题的答案
    ///
    /// - 选择题：答案中包含该选项字母即为正确，"AC" 自然表示多选
    /// - 判断题：答案恰好为"正确"才为真
    /// - 填空题：答案原样保留
    pub fn resolve(&self, parsed: &ParsedItem, item: usize) -> Result<AnswerPayload, MalformedInputError> {
        match parsed.kind {
            ProblemKind::Choice => Ok(AnswerPayload::Choice(resolve_choice(parsed))),
            ProblemKind::Blank => Ok(AnswerPayload::Blank(parsed.answer.clone())),
            ProblemKind::Judge => self.resolve_judge(&parsed.answer, item).map(AnswerPayload::Judge),
        }
    }

    fn resolve_judge(&self, answer: &str, item: usize) -> Result<bool, MalformedInputError> {
        if answer == JUDGE_TRUE {
            return Ok(true);
        }
        if answer != JUDGE_FALSE {
            if self.strict_judge {
                return Err(MalformedInputError::UnrecognizedJudgeAnswer {
                    item,
                    answer: answer.to_string(),
                });
            }
            warn!("判断题第 {} 题答案 '{}' 无法识别，按错误处理", item, answer);
        }
        Ok(false)
    }
}

fn resolve_choice(parsed: &ParsedItem) -> Vec<ChoiceOption> {
    OPTION_LETTERS
        .chars()
        .zip(&parsed.options)
        .map(|(letter, text)| ChoiceOption {
            choice: letter.to_string(),
            description: text.clone(),
            is_correct: parsed.answer.contains(letter),
        })
        .collect()
}
