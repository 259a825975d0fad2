//! 日志模块
//!
//! 初始化全局 `tracing` subscriber，并输出启动信息

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`；否则默认 `info`，详细日志模式下为 `debug`。
/// 可重复调用（后续调用被忽略），测试中也可使用
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 BEU Result Proxy starting - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 Listening on: {}", config.bind_address());
    info!("📡 Result service: {}", config.result_api_base_url);
    info!(
        "📊 Max concurrent fetches: {} (timeout {}s)",
        config.max_concurrent_fetches, config.fetch_timeout_secs
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
