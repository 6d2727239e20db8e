//! DFS算法模块
//!
//! 基于预建邻接表的深度优先搜索。使用显式栈，递归深度不受可通行单元格数量影响。

use std::collections::HashSet;

use super::adjacency::AdjacencyMap;
use super::observer::{NoopObserver, SearchObserver};
use super::{claim_frontier, validate_start, SearchResult};
use crate::core::{CellState, Coord, Grid, ReachResult};

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 为网格构建邻接表后执行 DFS
    pub fn search(grid: &Grid, start: Coord) -> ReachResult<SearchResult> {
        Self::search_with_observer(grid, start, &mut NoopObserver)
    }

    /// 为网格构建邻接表后执行 DFS，每访问一个坐标通知一次观察者
    pub fn search_with_observer(
        grid: &Grid,
        start: Coord,
        observer: &mut dyn SearchObserver,
    ) -> ReachResult<SearchResult> {
        validate_start(grid, start)?;

        let mut snapshot = grid.clone();
        snapshot.set(start, CellState::Empty)?;
        let adjacency = AdjacencyMap::build(&snapshot);

        Self::traverse(grid, &adjacency, start, observer)
    }

    /// 使用已有邻接表执行 DFS
    ///
    /// 入栈但尚未访问的坐标标记为 `Frontier`，访问时转为 `Reachable`。
    pub fn traverse(
        grid: &Grid,
        adjacency: &AdjacencyMap,
        start: Coord,
        observer: &mut dyn SearchObserver,
    ) -> ReachResult<SearchResult> {
        validate_start(grid, start)?;

        let mut res = grid.clone();
        res.set(start, CellState::Start)?;

        let mut visited: HashSet<Coord> = HashSet::new();
        let mut stack: Vec<Coord> = vec![start];
        let mut step = 0;

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current != start {
                res.set(current, CellState::Reachable)?;
            }

            for &neighbor in adjacency.neighbors(current)? {
                if !visited.contains(&neighbor) {
                    claim_frontier(&mut res, neighbor)?;
                    stack.push(neighbor);
                }
            }

            step += 1;
            observer.on_step(step, &res);
        }

        log::trace!("DFS 完成: 访问 {} 个坐标", visited.len());
        Ok(SearchResult::new(res, start))
    }
}
