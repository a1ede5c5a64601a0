use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 题目类型
///
/// 数值与 `problem_type.problem_type_id` 列一致：0=选择 1=填空 2=判断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ProblemKind {
    /// 选择题
    Choice = 0,
    /// 填空题
    Blank = 1,
    /// 判断题
    Judge = 2,
}

impl ProblemKind {
    /// 获取类型代码
    pub fn code(self) -> i64 {
        self as i64
    }

    /// 获取中文名称
    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::Choice => "选择题",
            ProblemKind::Blank => "填空题",
            ProblemKind::Judge => "判断题",
        }
    }

    /// 从代码解析类型
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ProblemKind::Choice),
            1 => Some(ProblemKind::Blank),
            2 => Some(ProblemKind::Judge),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<ProblemKind> for i64 {
    fn from(kind: ProblemKind) -> Self {
        kind.code()
    }
}

impl TryFrom<i64> for ProblemKind {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        ProblemKind::from_code(code).ok_or_else(|| format!("未知题目类型: {}", code))
    }
}

/// 题干记录（`problem_type` 表）
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProblemStem {
    pub id: i64,
    pub description: String,
    pub user_id: i64,
    pub problem_type_id: i64,
    pub is_public: bool,
    pub analysis: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProblemStem {
    pub fn kind(&self) -> Option<ProblemKind> {
        ProblemKind::from_code(self.problem_type_id)
    }
}

/// 选择题选项（`problem_choice` 表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChoiceOption {
    pub choice: String,
    pub description: String,
    pub is_correct: bool,
}
