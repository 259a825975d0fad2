//! # BEU Result Proxy
//!
//! 从大学成绩服务获取成绩单，
//! 并为学生计算各学期 SGPA
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - `ResultClient`，每次查询一个学期，失败返回 None 而不是错误
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 基于科目列表的 SGPA 计算
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - `ResultAggregator`，八个学期的查询与合并
//!
//! ### ④ 接口层（API）
//! - `api/` - axum 路由、参数校验、响应结构
//!
//! `models/` 存放各层共用的数据类型

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// 重新导出常用类型
pub use app::App;
pub use clients::ResultClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AggregatedResult, SemesterQuery};
pub use orchestrator::ResultAggregator;
