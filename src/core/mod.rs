//! 核心模块
//!
//! 网格模型与统一错误类型

pub mod error;
pub mod grid;

// 错误和结果类型
pub use error::{ReachError, ReachResult};

// 核心数据类型
pub use grid::{CellState, Coord, Grid, MIN_DIMENSION};
