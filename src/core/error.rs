//! 统一错误处理 for GridReach
//!
//! ## 设计理念
//!
//! 1. **快速失败**：所有错误均为前置条件违规，搜索立即返回，不产生部分结果
//! 2. **外部错误转字符串**：toml 等外部错误通过自定义 `From` 实现转换为字符串，降低模块耦合
//! 3. **统一接口**：`ReachResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

use crate::core::grid::Coord;

/// 统一的可达性引擎错误类型
#[derive(Error, Debug)]
pub enum ReachError {
    #[error("坐标越界: {coord} 不在 {height}x{width} 网格内")]
    OutOfBounds {
        coord: Coord,
        height: usize,
        width: usize,
    },

    #[error("无效起点: {0} 是墙")]
    InvalidStart(Coord),

    #[error("邻接表缺少条目: {0}")]
    MissingAdjacencyEntry(Coord),

    #[error("邻接表与网格不一致: {0} 在网格中不是空单元格")]
    StaleAdjacency(Coord),

    #[error("无效网格尺寸: {height}x{width}，高和宽都必须不小于 3")]
    InvalidDimensions { height: usize, width: usize },

    #[error("无效墙密度: {0}，必须位于 [0, 1]")]
    InvalidDensity(f64),

    #[error("网格解析错误: {0}")]
    Parse(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 统一的结果类型
pub type ReachResult<T> = Result<T, ReachError>;

impl ReachError {
    /// 是否为搜索前置条件错误
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ReachError::OutOfBounds { .. }
                | ReachError::InvalidStart(_)
                | ReachError::MissingAdjacencyEntry(_)
                | ReachError::StaleAdjacency(_)
        )
    }
}

// ==================== 外部错误转换实现 ====================

impl From<toml::de::Error> for ReachError {
    fn from(err: toml::de::Error) -> Self {
        ReachError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ReachError {
    fn from(err: toml::ser::Error) -> Self {
        ReachError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for ReachError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        ReachError::Logging(err.to_string())
    }
}
