//! 请求处理

use super::error::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::state::AppState;
use crate::models::{AggregatedResult, Semester, SemesterQuery};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

/// 存活检查
pub async fn root() -> &'static str {
    "BEU Result Proxy is running"
}

/// `/api/beu-result` 的原始查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ResultParams {
    pub year: Option<String>,
    pub reg: Option<String>,
    pub sem: Option<String>,
    pub exam: Option<String>,
}

impl ResultParams {
    /// 校验四个参数均存在且非空
    pub fn validate(self) -> ApiResult<SemesterQuery> {
        fn required(value: Option<String>) -> ApiResult<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ApiError::MissingParameters)
        }

        Ok(SemesterQuery::new(
            required(self.year)?,
            required(self.reg)?,
            required(self.sem)?,
            required(self.exam)?,
        ))
    }
}

/// `GET /api/beu-result?year=&reg=&sem=&exam=`
///
/// 无法解析的查询字符串按缺少参数处理
pub async fn beu_result(
    State(state): State<AppState>,
    params: Result<Query<ResultParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<AggregatedResult>>> {
    let Query(params) = params.map_err(|rejection| {
        warn!("rejected query string: {}", rejection);
        ApiError::MissingParameters
    })?;
    let query = params.validate()?;

    if Semester::from_label(&query.semester).is_none() {
        warn!("{} semester label is not I..VIII, forwarding as is", query);
    }

    match state.aggregator.aggregate(&query).await? {
        Some(result) => Ok(Json(ApiResponse::success(result))),
        None => Err(ApiError::NotFound),
    }
}
