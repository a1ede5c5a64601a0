//! 批次上下文
//!
//! 封装"谁在往哪个题库导入"这一信息，显式传入流程而不是放在全局状态里

use std::fmt::Display;

/// 批次上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchCtx {
    /// 当前用户（所有导入题目的所有者）
    pub user_id: i64,

    /// 目标题库
    pub problem_set_id: i64,
}

impl BatchCtx {
    pub fn new(user_id: i64, problem_set_id: i64) -> Self {
        Self {
            user_id,
            problem_set_id,
        }
    }
}

impl Display for BatchCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[批次 用户#{} 题库#{}]", self.user_id, self.problem_set_id)
    }
}
