use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 指定 TOML 配置文件路径的环境变量（可选）
pub const CONFIG_PATH_VAR: &str = "BEU_PROXY_CONFIG";

/// 程序配置
///
/// TOML 文件中所有字段都可省略，缺失的字段使用默认值
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 成绩服务地址（不带末尾斜杠）
    pub result_api_base_url: String,
    /// 每个出站请求都会携带；成绩服务拒绝没有 UA 的请求
    pub user_agent: String,
    /// 单次查询超时（秒）
    pub fetch_timeout_secs: u64,
    /// 单个请求内同时进行的学期查询上限
    pub max_concurrent_fetches: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            result_api_base_url: "https://beu-bih.ac.in".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36".to_string(),
            fetch_timeout_secs: 10,
            max_concurrent_fetches: 8,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 先读取 `BEU_PROXY_CONFIG` 指定的文件（如果有），再应用环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// 用环境变量覆盖配置
    ///
    /// 未设置的变量保留当前值；
    /// 设置了但无法解析的变量直接报错
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("HOST") {
            self.host = v;
        }
        self.port = parse_var(&lookup, "PORT", self.port, "u16")?;
        if let Some(v) = lookup("RESULT_API_BASE_URL") {
            self.result_api_base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("UPSTREAM_USER_AGENT") {
            self.user_agent = v;
        }
        self.fetch_timeout_secs = parse_var(
            &lookup,
            "FETCH_TIMEOUT_SECS",
            self.fetch_timeout_secs,
            "u64",
        )?;
        self.max_concurrent_fetches = parse_var(
            &lookup,
            "MAX_CONCURRENT_FETCHES",
            self.max_concurrent_fetches,
            "usize",
        )?;
        self.verbose_logging =
            parse_var(&lookup, "VERBOSE_LOGGING", self.verbose_logging, "bool")?;
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    name: &str,
    current: T,
    expected_type: &str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(current),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}
