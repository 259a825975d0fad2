//! 编排层（Orchestration Layer）
//!
//! ```text
//! api::handlers（处理单个入站请求）
//!     ↓
//! orchestrator::ResultAggregator（八个学期的查询）
//!     ↓
//! services::sgpa_service（计算）+ clients::ResultClient（HTTP）
//! ```

pub mod aggregator;

pub use aggregator::ResultAggregator;
