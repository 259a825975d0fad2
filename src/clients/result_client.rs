//! 成绩服务客户端
//!
//! 封装大学成绩服务提供的唯一查询接口
use crate::config::Config;
use crate::error::{AppError, UpstreamError};
use crate::logger::truncate_text;
use crate::models::{SemesterQuery, SemesterResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::{debug, warn};

const RESULT_PATH: &str = "/backend/v1/result/get-result";

/// 成绩服务客户端
///
/// `reqwest::Client` 内部复用连接池，可以放心共享
#[derive(Clone)]
pub struct ResultClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResultClient {
    /// 根据配置创建客户端
    ///
    /// 每个请求都带上 User-Agent，
    /// 成绩服务会拒绝不像浏览器的请求
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(AppError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.result_api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 构建完整查询 URL，所有参数都做百分号编码
    pub fn endpoint_url(&self, query: &SemesterQuery) -> String {
        format!(
            "{}{}?year={}&redg_no={}&semester={}&exam_held={}",
            self.base_url,
            RESULT_PATH,
            urlencoding::encode(&query.year),
            urlencoding::encode(&query.reg_no),
            urlencoding::encode(&query.semester),
            urlencoding::encode(&query.exam_held),
        )
    }

    /// 查询单个学期
    ///
    /// # 返回
    /// 没有可用记录时返回 `None`，原因包括：
    /// 无法连接、超时、非 2xx、非 JSON、或响应中没有成功状态。
    /// 是否影响结果由调用方决定
    pub async fn fetch_semester(&self, query: &SemesterQuery) -> Option<SemesterResult> {
        match self.try_fetch(query).await {
            Ok(result) => {
                debug!("{} ✓ result sheet received", query);
                Some(result)
            }
            Err(e @ UpstreamError::Transport { .. }) => {
                warn!("{} ⚠️ {}", query, e);
                None
            }
            Err(e) => {
                debug!("{} no record: {}", query, e);
                None
            }
        }
    }

    async fn try_fetch(&self, query: &SemesterQuery) -> Result<SemesterResult, UpstreamError> {
        let endpoint = self.endpoint_url(query);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        let body: JsonValue = response.json().await.map_err(UpstreamError::Decode)?;
        parse_envelope(body)
    }
}

/// 解包 `{ status: 200, data: {...} }`
pub fn parse_envelope(body: JsonValue) -> Result<SemesterResult, UpstreamError> {
    let status_ok = match body.get("status") {
        Some(JsonValue::Number(n)) => n.as_u64() == Some(200),
        Some(JsonValue::String(s)) => s.trim() == "200",
        _ => false,
    };

    if status_ok {
        if let Some(JsonValue::Object(data)) = body.get("data") {
            return Ok(SemesterResult::new(data.clone()));
        }
    }

    Err(UpstreamError::Rejected {
        status: body.get("status").map(|v| v.to_string()),
        message: body
            .get("message")
            .and_then(|v| v.as_str())
            .map(|m| truncate_text(m, 120)),
    })
}
