//! BFS算法模块
//!
//! 基于预建邻接表的广度优先搜索。前沿是无序集合，每次取出任意一个坐标扩展，
//! 因此访问顺序不保证严格按层，只保证最终可达集合。

use std::collections::HashSet;

use super::adjacency::AdjacencyMap;
use super::observer::{NoopObserver, SearchObserver};
use super::{claim_frontier, validate_start, SearchResult};
use crate::core::{CellState, Coord, Grid, ReachResult};

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 为网格构建邻接表后执行 BFS
    pub fn search(grid: &Grid, start: Coord) -> ReachResult<SearchResult> {
        Self::search_with_observer(grid, start, &mut NoopObserver)
    }

    /// 为网格构建邻接表后执行 BFS，每扩展一个坐标通知一次观察者
    ///
    /// 起点若已标记为 `Start`，构建邻接表前先视为 `Empty`。
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

    /// 使用已有邻接表执行 BFS
    ///
    /// 遇到邻接表中不存在的坐标时立即返回 `MissingAdjacencyEntry`，
    /// 邻接表与网格不一致时返回 `StaleAdjacency`。
    pub fn traverse(
        grid: &Grid,
        adjacency: &AdjacencyMap,
        start: Coord,
        observer: &mut dyn SearchObserver,
    ) -> ReachResult<SearchResult> {
        validate_start(grid, start)?;

        let mut res = grid.clone();
        res.set(start, CellState::Start)?;

        let mut visited: HashSet<Coord> = HashSet::from([start]);
        let mut frontier: HashSet<Coord> = HashSet::from([start]);
        let mut step = 0;

        while let Some(pos) = take_any(&mut frontier) {
            if pos != start {
                res.set(pos, CellState::Reachable)?;
            }

            for &neighbor in adjacency.neighbors(pos)? {
                if visited.insert(neighbor) {
                    claim_frontier(&mut res, neighbor)?;
                    frontier.insert(neighbor);
                }
            }

            step += 1;
            observer.on_step(step, &res);
        }

        log::trace!("BFS 完成: 扩展 {} 次, 访问 {} 个坐标", step, visited.len());
        Ok(SearchResult::new(res, start))
    }
}

/// 从集合中取出任意一个元素，不保证顺序
fn take_any(set: &mut HashSet<Coord>) -> Option<Coord> {
    let item = set.iter().next().copied()?;
    set.remove(&item);
    Some(item)
}
