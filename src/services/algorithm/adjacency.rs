//! 邻接表构建模块
//!
//! 为网格内部每个空单元格预先计算其正交相邻的空单元格集合，
//! 供基于图的 BFS 和 DFS 使用。

use std::collections::{HashMap, HashSet};

use crate::core::{CellState, Coord, Grid, ReachError, ReachResult};

/// 网格邻接表
///
/// 只覆盖内部区域 `[1,height-1) × [1,width-1)`，依赖外圈为墙的约定。
/// 构建后与网格无关联，网格后续修改不会反映到邻接表中。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbors: HashMap<Coord, HashSet<Coord>>,
}

impl AdjacencyMap {
    /// 由网格快照构建邻接表
    pub fn build(grid: &Grid) -> Self {
        let mut neighbors = HashMap::new();

        for coord in grid.interior() {
            if !matches!(grid.get(coord), Ok(CellState::Empty)) {
                continue;
            }
            let open: HashSet<Coord> = coord
                .orthogonal()
                .filter(|n| matches!(grid.get(*n), Ok(CellState::Empty)))
                .collect();
            neighbors.insert(coord, open);
        }

        log::trace!(
            "邻接表构建完成: {} 个节点, {} 条有向边",
            neighbors.len(),
            neighbors.values().map(HashSet::len).sum::<usize>()
        );

        Self { neighbors }
    }

    /// 获取坐标的邻居集合，坐标不在表中时返回 `MissingAdjacencyEntry`
    pub fn neighbors(&self, coord: Coord) -> ReachResult<&HashSet<Coord>> {
        self.neighbors
            .get(&coord)
            .ok_or(ReachError::MissingAdjacencyEntry(coord))
    }

    pub fn get(&self, coord: Coord) -> Option<&HashSet<Coord>> {
        self.neighbors.get(&coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.neighbors.contains_key(&coord)
    }

    /// 节点数量，即内部空单元格数量
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// 有向边数量，每条无向相邻关系计两次
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(HashSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Coord, &HashSet<Coord>)> {
        self.neighbors.iter()
    }
}
