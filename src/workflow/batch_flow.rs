//! 批量导入流程 - 流程层
//!
//! 核心职责：定义"一段文本"的完整导入流程
//!
//! 流程顺序：
//! 1. 分区切分 → 题号切分 → 字段抽取 → 答案解析（全部成功才继续）
//! 2. 开启事务 → 逐题写入题干和答案 → 写入题库关联
//! 3. 全部成功提交，任一步失败整批回滚

use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{IngestResult, MalformedInputError, PersistenceError};
use crate::models::{ProblemBatch, ProblemKind, ResolvedItem};
use crate::services::{extract, problem_store, segment, split_items, AnswerResolver};
use crate::utils::logging::truncate_text;
use crate::workflow::batch_ctx::BatchCtx;

/// 批量导入流程
///
/// - 不持有任何资源（连接池由调用方传入）
/// - 解析阶段没有副作用
/// - 写库阶段要么全部提交，要么全部回滚
#[derive(Debug, Clone, Default)]
pub struct BatchFlow {
    resolver: AnswerResolver,
    verbose_logging: bool,
}

impl BatchFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: AnswerResolver::new(config.strict_judge_answers),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 执行一次批量导入
    ///
    /// # 返回
    /// 按原文顺序返回每道已写入题目的摘要
    pub async fn run(&self, pool: &SqlitePool, ctx: &BatchCtx, text: &str) -> IngestResult<Vec<ProblemBatch>> {
        info!("{} 开始批量导入，文本长度 {} 字节", ctx, text.len());

        let items = self.parse(text).map_err(|e| {
            warn!("{} ❌ 题目解析失败: {}", ctx, e);
            e
        })?;
        info!("{} ✓ 解析完成，共 {} 道题", ctx, items.len());

        // 题库 ID 不做存在性和写权限校验，只记录
        if !problem_store::problem_set_exists(pool, ctx.problem_set_id).await? {
            warn!("{} ⚠️ 目标题库不存在，题目仍会关联到该 ID", ctx);
        }

        let mut tx = pool.begin().await.map_err(PersistenceError::BeginFailed)?;

        match self.persist(&mut tx, ctx, &items).await {
            Ok(problems) => {
                tx.commit().await.map_err(PersistenceError::CommitFailed)?;
                info!("{} ✅ 导入完成，写入 {} 道题", ctx, problems.len());
                Ok(problems)
            }
            Err(e) => {
                error!("{} ❌ 写入失败，整批回滚: {}", ctx, e);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("{} 回滚失败: {}", ctx, rollback_err);
                    return Err(PersistenceError::RollbackFailed {
                        cause: Box::new(e.into()),
                        source: rollback_err,
                    }
                    .into());
                }
                Err(e.into())
            }
        }
    }

    /// 解析整段文本
    ///
    /// 分区按原文顺序处理：选择题 → 判断题 → 填空题，遇到第一个错误即停止。
    pub fn parse(&self, text: &str) -> Result<Vec<ResolvedItem>, MalformedInputError> {
        let sections = segment(text)?;
        let regions = [
            (ProblemKind::Choice, sections.choice.as_str()),
            (ProblemKind::Judge, sections.judge.as_str()),
            (ProblemKind::Blank, sections.blank.as_str()),
        ];

        let mut resolved = Vec::new();
        for (kind, region) in regions {
            let raw_items = split_items(region);
            debug!("{} 共 {} 道", kind, raw_items.len());

            for (idx, raw) in raw_items.into_iter().enumerate() {
                let item_index = idx + 1;
                let item = extract(kind, raw, item_index)?;
                let payload = self.resolver.resolve(&item, item_index)?;

                if self.verbose_logging {
                    debug!(
                        "{} 第 {} 题: {} | 答案: {}",
                        kind,
                        item_index,
                        truncate_text(&item.stem, 40),
                        item.answer
                    );
                }
                resolved.push(ResolvedItem { item, payload });
            }
        }

        Ok(resolved)
    }

    /// 在事务中逐题写入，再统一写入题库关联
    async fn persist(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        ctx: &BatchCtx,
        items: &[ResolvedItem],
    ) -> Result<Vec<ProblemBatch>, PersistenceError> {
        let mut problems = Vec::with_capacity(items.len());

        for resolved in items {
            let item = &resolved.item;
            debug_assert_eq!(resolved.payload.kind(), item.kind);
            let analysis = Some(item.analysis.as_str()).filter(|a| !a.is_empty());

            // 批量导入的题目一律公开
            let problem_id =
                problem_store::insert_stem(tx, ctx.user_id, item.kind, &item.stem, analysis, true).await?;
            problem_store::insert_answer(tx, problem_id, &resolved.payload).await?;

            debug!("{} ✓ {} #{} 已写入", ctx, item.kind, problem_id);
            problems.push(ProblemBatch {
                problem_id,
                problem_type: item.kind,
                description: item.stem.clone(),
                analysis: item.analysis.clone(),
                answer: item.answer.clone(),
            });
        }

        for problem in &problems {
            problem_store::link_to_problem_set(tx, ctx.problem_set_id, problem.problem_id).await?;
        }

        Ok(problems)
    }
}
