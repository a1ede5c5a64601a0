use serde::{Deserialize, Serialize};

use crate::models::{AnswerPayload, ChoiceOption, ProblemKind};

/// `POST /problem/batch` 的查询参数
#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    pub problem_set_id: i64,
}

/// 按题型区分的答案
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnswerView {
    Choice { choices: Vec<ChoiceOption> },
    Blank { answer: String },
    Judge { is_correct: bool },
}

impl From<AnswerPayload> for AnswerView {
    fn from(payload: AnswerPayload) -> Self {
        match payload {
            AnswerPayload::Choice(choices) => AnswerView::Choice { choices },
            AnswerPayload::Blank(answer) => AnswerView::Blank { answer },
            AnswerPayload::Judge(is_correct) => AnswerView::Judge { is_correct },
        }
    }
}

/// `GET /problem/answer/:id` 的响应
#[derive(Debug, Clone, Serialize)]
pub struct ProblemAnswerResponse {
    pub problem_id: i64,
    pub problem_type: ProblemKind,
    pub analysis: Option<String>,
    #[serde(flatten)]
    pub answer: AnswerView,
}

/// `GET /problem_set/all_problem/:id` 的响应
#[derive(Debug, Clone, Serialize)]
pub struct ProblemSetProblemsResponse {
    pub problem_set_id: i64,
    pub problem_ids: Vec<i64>,
}
