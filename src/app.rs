use crate::api::{self, AppState};
use crate::config::Config;
use crate::logger;
use crate::orchestrator::ResultAggregator;
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    listener: TcpListener,
    router: Router,
}

impl App {
    /// 初始化应用：创建编排器并绑定端口
    pub async fn initialize(config: Config) -> Result<Self> {
        logger::log_startup(&config);

        let aggregator =
            ResultAggregator::from_config(&config).context("failed to create result client")?;
        let router = api::router(AppState::new(aggregator));

        let address = config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {}", address))?;

        Ok(Self { listener, router })
    }

    /// 运行服务，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let address = self.listener.local_addr()?;
        info!("✓ Server running on {}", address);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("👋 Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
