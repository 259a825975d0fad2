use thiserror::Error;

/// 应用程序错误类型
///
/// 只包含需要传递给请求处理层的错误。
/// 上游查不到某个学期不属于这一层的错误，见
/// [`UpstreamError`]
#[derive(Debug, Error)]
pub enum AppError {
    /// 上游数据结构无法用于计算
    #[error("malformed upstream payload ({field}): {source}")]
    MalformedPayload {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// 创建 HTTP 客户端失败
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// 并发控制信号量已关闭
    #[error("fetch gate closed")]
    GateClosed(#[from] tokio::sync::AcquireError),
}

/// 单个学期查询为空的原因
///
/// 不会传出客户端，仅用于在日志中记录
/// 查询为空的具体原因
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 网络、TLS 或超时错误
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 非 2xx 的 HTTP 状态码
    #[error("upstream answered HTTP {status}")]
    Status { status: u16 },

    /// 响应体不是 JSON
    #[error("could not decode upstream body: {0}")]
    Decode(#[source] reqwest::Error),

    /// JSON 中没有成功状态或没有 data 对象
    #[error("upstream rejected the lookup (status={status:?}, message={message:?})")]
    Rejected {
        status: Option<String>,
        message: Option<String>,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("environment variable {var_name} has value '{value}', expected {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    /// 读取配置文件失败
    #[error("failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("failed to parse config file {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
