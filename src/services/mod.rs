//! 服务层模块
//!
//! 包含可达性搜索算法、网格生成和结果统计

pub mod algorithm;
pub mod generator;
pub mod stats;

// 重新导出常用服务
pub use algorithm::{search, search_with_observer, Algorithm, SearchResult};
pub use generator::GridGenerator;
pub use stats::SearchStats;
