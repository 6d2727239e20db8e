//! 算法模块
//!
//! 包含网格可达性搜索的全部实现：直接洪水填充、基于邻接表的 BFS 与 DFS、
//! 以及按层并行的洪水填充。所有实现对同一输入必须给出相同的可达集合。

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod direct;
pub mod observer;
pub mod parallel;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CellState, Coord, Grid, ReachError, ReachResult};

// 重新导出常用算法结构体
pub use adjacency::AdjacencyMap;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use direct::DirectSearch;
pub use observer::{NoopObserver, SearchObserver, StepRecorder};
pub use parallel::ParallelSearch;

/// 可选的搜索算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// 不预建邻接表，直接在网格上按层扩展
    Direct,
    /// 基于邻接表的 BFS，前沿为无序集合
    #[default]
    Bfs,
    /// 基于邻接表的 DFS，显式栈
    Dfs,
    /// 按层并行扩展，原子 CAS 认领单元格
    Parallel,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Direct,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Parallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Direct => "direct",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// 搜索结果
///
/// 与输入网格同形：起点为 `Start`，所有可达单元格为 `Reachable`，
/// 其余空单元格保持 `Empty`，墙保持 `Wall`，不含任何 `Frontier`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    grid: Grid,
    start: Coord,
}

impl SearchResult {
    pub(crate) fn new(grid: Grid, start: Coord) -> Self {
        Self { grid, start }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn state(&self, coord: Coord) -> ReachResult<CellState> {
        self.grid.get(coord)
    }

    /// 被标记为 `Reachable` 的坐标集合（不含起点）
    pub fn reachable_set(&self) -> HashSet<Coord> {
        self.grid.coords_with(CellState::Reachable).into_iter().collect()
    }

    /// 起点或可达单元格
    pub fn is_reachable(&self, coord: Coord) -> bool {
        matches!(
            self.grid.get(coord),
            Ok(CellState::Start | CellState::Reachable)
        )
    }
}

/// 搜索前校验起点：越界返回 `OutOfBounds`，墙返回 `InvalidStart`
pub(crate) fn validate_start(grid: &Grid, start: Coord) -> ReachResult<()> {
    if grid.get(start)?.is_wall() {
        log::warn!("拒绝从墙开始搜索: {}", start);
        return Err(ReachError::InvalidStart(start));
    }
    Ok(())
}

/// 把邻接表给出的邻居标记为 `Frontier`
///
/// 该坐标在被搜索的网格中必须仍为 `Empty`（DFS 中也可能已是 `Frontier`），
/// 否则说明邻接表来自另一张网格，返回 `StaleAdjacency`。
pub(crate) fn claim_frontier(res: &mut Grid, coord: Coord) -> ReachResult<()> {
    match res.get(coord)? {
        CellState::Empty | CellState::Frontier => res.set(coord, CellState::Frontier),
        _ => Err(ReachError::StaleAdjacency(coord)),
    }
}

/// 使用指定算法执行搜索
pub fn search(grid: &Grid, start: Coord, algorithm: Algorithm) -> ReachResult<SearchResult> {
    search_with_observer(grid, start, algorithm, &mut NoopObserver)
}

/// 使用指定算法执行搜索，并在每一步通知观察者
pub fn search_with_observer(
    grid: &Grid,
    start: Coord,
    algorithm: Algorithm,
    observer: &mut dyn SearchObserver,
) -> ReachResult<SearchResult> {
    let result = match algorithm {
        Algorithm::Direct => DirectSearch::search_with_observer(grid, start, observer),
        Algorithm::Bfs => Bfs::search_with_observer(grid, start, observer),
        Algorithm::Dfs => Dfs::search_with_observer(grid, start, observer),
        Algorithm::Parallel => ParallelSearch::search_with_observer(grid, start, observer),
    }?;

    log::debug!(
        "{} 搜索完成: 起点 {}, 可达 {} 个单元格",
        algorithm,
        start,
        result.reachable_set().len() + 1
    );
    Ok(result)
}
