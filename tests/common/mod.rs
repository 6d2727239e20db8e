//! 集成测试共享工具模块
//!
//! 提供测试网格夹具和辅助函数，供所有集成测试使用

#![allow(dead_code)]

use std::collections::HashSet;

use gridreach::core::{CellState, Coord, Grid};
use gridreach::services::{Algorithm, GridGenerator, SearchResult};

/// 由文本构造网格
pub fn grid(text: &str) -> Grid {
    text.parse().expect("测试网格解析失败")
}

/// 5x5，外圈为墙，内部全空
pub fn open_5x5() -> Grid {
    Grid::with_border(5, 5).expect("创建测试网格失败")
}

/// 5x5，第 2 列整列为墙，把内部分成左右两半
pub fn split_5x5() -> Grid {
    grid(
        "#####
         #.#.#
         #.#.#
         #.#.#
         #####",
    )
}

/// 起点 (2,2) 四面都是墙
pub fn pocket_5x5() -> Grid {
    grid(
        "#####
         #.#.#
         ##.##
         #.#.#
         #####",
    )
}

/// 10x10，外圈为墙，内部全空
pub fn open_10x10() -> Grid {
    Grid::with_border(10, 10).expect("创建测试网格失败")
}

/// 按种子生成随机网格和起点
pub fn seeded(height: usize, width: usize, density: f64, seed: u64) -> (Grid, Coord) {
    let mut generator = GridGenerator::new(height, width, density, Some(seed)).expect("创建生成器失败");
    let mut grid = generator.generate().expect("生成网格失败");
    let start = generator.random_start(&mut grid).expect("选择起点失败");
    (grid, start)
}

/// 起点与可达单元格的集合
pub fn reached(result: &SearchResult) -> HashSet<Coord> {
    let mut set = result.reachable_set();
    set.insert(result.start());
    set
}

/// 独立的参考实现：按 4 邻接计算连通分量
pub fn reference_component(grid: &Grid, start: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::from([start]);
    let mut todo = vec![start];
    while let Some(pos) = todo.pop() {
        for n in grid.neighbors(pos) {
            if grid.get(n).expect("邻居在网格内") == CellState::Empty && seen.insert(n) {
                todo.push(n);
            }
        }
    }
    seen
}

pub const ALGORITHMS: [Algorithm; 4] = Algorithm::ALL;
