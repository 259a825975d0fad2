//! 多学期汇总 - 编排层
//!
//! ## 职责
//!
//! 1. 查询请求的学期，查不到则直接返回未找到
//! 2. 并发查询全部八个学期，用 `Semaphore` 限制并发数
//! 3. 按固定的 I..VIII 顺序收集各学期 SGPA
//! 4. 合并到请求学期的原始数据上
//!
//! 查询在调用方的 future 内执行，不 spawn 任何任务，
//! 请求被取消时，进行中的查询也一并丢弃。

use crate::clients::ResultClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{
    AggregatedResult, ComputedFields, Semester, SemesterQuery, SemesterResult, SemesterSgpa,
};
use crate::services::semester_sgpa;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// 汇总编排器
pub struct ResultAggregator {
    client: ResultClient,
    max_concurrent_fetches: usize,
}

impl ResultAggregator {
    pub fn new(client: ResultClient, config: &Config) -> Self {
        Self {
            client,
            max_concurrent_fetches: config.max_concurrent_fetches.max(1),
        }
    }

    /// 同时创建客户端和编排器
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(ResultClient::new(config)?, config))
    }

    /// 以请求的学期为中心汇总学生成绩
    ///
    /// # 返回
    /// - `Ok(None)`: 请求的学期本身没有记录
    /// - `Err(_)`: 请求学期的数据无法解析
    /// - `Ok(Some(_))`: 合并后的结果；查询失败的学期
    ///   不会出现在 `semester_wise_sgpa` 中
    pub async fn aggregate(&self, query: &SemesterQuery) -> AppResult<Option<AggregatedResult>> {
        info!("{} 🔍 fetching requested semester", query);

        let requested = match self.client.fetch_semester(query).await {
            Some(result) => result,
            None => {
                info!("{} requested semester not found", query);
                return Ok(None);
            }
        };

        let semester_wise_sgpa = self.sweep_semesters(query).await?;
        let sgpa = semester_sgpa(&requested)?;
        let cgpa = requested.cgpa().cloned();

        info!(
            "{} ✓ aggregated: sgpa={}, {} semester(s) with SGPA",
            query,
            sgpa.map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string()),
            semester_wise_sgpa.len()
        );

        let computed = ComputedFields {
            sgpa,
            cgpa,
            semester_wise_sgpa,
        };
        Ok(Some(AggregatedResult::merge(requested, computed)))
    }

    /// 查询所有学期，保留能算出 SGPA 的学期
    ///
    /// `join_all` 按输入顺序返回结果，因此无论查询完成顺序如何，
    /// 输出始终遵循 `Semester::ALL` 的顺序
    async fn sweep_semesters(&self, query: &SemesterQuery) -> AppResult<Vec<SemesterSgpa>> {
        let gate = Arc::new(Semaphore::new(self.max_concurrent_fetches));

        let lookups = Semester::ALL.into_iter().map(|semester| {
            let gate = gate.clone();
            let semester_query = query.for_semester(semester);
            async move {
                let _permit = gate.acquire_owned().await?;
                let result = self.client.fetch_semester(&semester_query).await;
                AppResult::Ok((semester, result))
            }
        });

        let mut collected = Vec::with_capacity(Semester::ALL.len());
        for outcome in join_all(lookups).await {
            let (semester, result) = outcome?;
            if let Some(entry) = sgpa_entry(semester, result.as_ref()) {
                collected.push(entry);
            }
        }

        Ok(collected)
    }
}

// 无记录、无学分、科目列表无法解析：一律跳过
fn sgpa_entry(semester: Semester, result: Option<&SemesterResult>) -> Option<SemesterSgpa> {
    let result = result?;
    match semester_sgpa(result) {
        Ok(Some(sgpa)) => Some(SemesterSgpa { semester, sgpa }),
        Ok(None) => {
            debug!("semester {} has no credits, skipped", semester);
            None
        }
        Err(e) => {
            debug!("semester {} skipped: {}", semester, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sheet(value: serde_json::Value) -> SemesterResult {
        match value {
            serde_json::Value::Object(map) => SemesterResult::new(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_sgpa_entry_skips_absent_and_empty() {
        assert!(sgpa_entry(Semester::I, None).is_none());
        assert!(sgpa_entry(Semester::II, Some(&sheet(json!({})))).is_none());
        assert!(sgpa_entry(Semester::III, Some(&sheet(json!({ "theorySubjects": 5 })))).is_none());
    }

    #[test]
    fn test_sgpa_entry_keeps_semester() {
        let entry = sgpa_entry(
            Semester::IV,
            Some(&sheet(json!({ "theorySubjects": [{ "credit": 2, "grade": "A" }] }))),
        )
        .unwrap();
        assert_eq!(entry.semester, Semester::IV);
        assert_eq!(entry.sgpa.to_string(), "8.00");
    }
}
