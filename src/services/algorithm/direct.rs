//! 直接搜索模块
//!
//! 不预建邻接表的洪水填充：逐层扩展前沿，每一步都直接对照工作网格
//! 检查原始坐标的四个正交邻居。

use std::collections::HashSet;

use super::observer::{NoopObserver, SearchObserver};
use super::{validate_start, SearchResult};
use crate::core::{CellState, Coord, Grid, ReachResult};

/// 直接搜索算法结构体
pub struct DirectSearch;

impl DirectSearch {
    /// 从起点执行洪水填充
    pub fn search(grid: &Grid, start: Coord) -> ReachResult<SearchResult> {
        Self::search_with_observer(grid, start, &mut NoopObserver)
    }

    /// 从起点执行洪水填充，每扩展一轮通知一次观察者
    ///
    /// 邻居坐标逐个做边界检查，因此不要求网格外圈为墙。
    pub fn search_with_observer(
        grid: &Grid,
        start: Coord,
        observer: &mut dyn SearchObserver,
    ) -> ReachResult<SearchResult> {
        validate_start(grid, start)?;

        let mut res = grid.clone();
        res.set(start, CellState::Start)?;

        let mut frontier: HashSet<Coord> = HashSet::from([start]);
        let mut step = 0;

        loop {
            let mut next_frontier = HashSet::new();

            for &pos in &frontier {
                for neighbor in pos.orthogonal() {
                    if !res.contains(neighbor) {
                        continue;
                    }
                    if res.get(neighbor)? == CellState::Empty {
                        res.set(neighbor, CellState::Frontier)?;
                        next_frontier.insert(neighbor);
                    }
                }
            }

            if next_frontier.is_empty() {
                break;
            }

            step += 1;
            observer.on_step(step, &res);

            for &pos in &next_frontier {
                res.set(pos, CellState::Reachable)?;
            }
            log::trace!("直接搜索第 {} 轮: 新增 {} 个单元格", step, next_frontier.len());
            frontier = next_frontier;
        }

        Ok(SearchResult::new(res, start))
    }
}
