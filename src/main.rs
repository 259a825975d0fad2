use anyhow::{Context, Result};
use beu_result_proxy::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 先加载配置：日志级别取决于配置
    let config = Config::load().context("failed to load configuration")?;

    logger::init(config.verbose_logging);

    App::initialize(config).await?.run().await
}
