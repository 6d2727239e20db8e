//! 并行搜索模块
//!
//! 按层同步的并行洪水填充。每一层前沿用 rayon 并行展开，
//! 单元格以原子字节存储，通过 compare-and-set 从 `Empty` 认领为 `Frontier`，
//! 保证每个单元格只离开 `Empty` 一次。

use std::sync::atomic::{AtomicU8, Ordering};

use rayon::prelude::*;

use super::observer::{NoopObserver, SearchObserver};
use super::{validate_start, SearchResult};
use crate::core::{CellState, Coord, Grid, ReachError, ReachResult};

/// 并行搜索算法结构体
pub struct ParallelSearch;

impl ParallelSearch {
    /// 从起点执行并行洪水填充
    pub fn search(grid: &Grid, start: Coord) -> ReachResult<SearchResult> {
        Self::search_with_observer(grid, start, &mut NoopObserver)
    }

    /// 从起点执行并行洪水填充，每扩展一层通知一次观察者
    pub fn search_with_observer(
        grid: &Grid,
        start: Coord,
        observer: &mut dyn SearchObserver,
    ) -> ReachResult<SearchResult> {
        validate_start(grid, start)?;

        let cells = AtomicCells::from_grid(grid);
        cells.store(grid.index_of(start)?, CellState::Start);

        let mut frontier: Vec<Coord> = vec![start];
        let mut step = 0;

        while !frontier.is_empty() {
            let next_frontier: Vec<Coord> = frontier
                .par_iter()
                .flat_map_iter(|&pos| {
                    pos.orthogonal()
                        .filter(|n| grid.contains(*n))
                        .filter(|n| cells.claim(n.row * grid.width() + n.col))
                        .collect::<Vec<_>>()
                })
                .collect();

            if next_frontier.is_empty() {
                break;
            }

            step += 1;
            if observer.wants_snapshots() {
                observer.on_step(step, &cells.snapshot(grid.height(), grid.width())?);
            }

            next_frontier.par_iter().for_each(|n| {
                cells.store(n.row * grid.width() + n.col, CellState::Reachable);
            });
            log::trace!("并行搜索第 {} 层: 新增 {} 个单元格", step, next_frontier.len());
            frontier = next_frontier;
        }

        let res = cells.snapshot(grid.height(), grid.width())?;
        Ok(SearchResult::new(res, start))
    }
}

/// 原子单元格数组，行优先
struct AtomicCells {
    cells: Vec<AtomicU8>,
}

impl AtomicCells {
    fn from_grid(grid: &Grid) -> Self {
        Self {
            cells: grid.cells().iter().map(|&s| AtomicU8::new(s as u8)).collect(),
        }
    }

    fn store(&self, index: usize, state: CellState) {
        self.cells[index].store(state as u8, Ordering::Release);
    }

    /// 尝试把单元格从 `Empty` 认领为 `Frontier`，只有一个线程能成功
    fn claim(&self, index: usize) -> bool {
        self.cells[index]
            .compare_exchange(
                CellState::Empty as u8,
                CellState::Frontier as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    fn snapshot(&self, height: usize, width: usize) -> ReachResult<Grid> {
        let states = self
            .cells
            .iter()
            .map(|cell| {
                let code = cell.load(Ordering::Acquire);
                CellState::from_u8(code)
                    .ok_or_else(|| ReachError::Parse(format!("无效单元格编码: {}", code)))
            })
            .collect::<ReachResult<Vec<_>>>()?;
        Grid::from_cells(height, width, states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::algorithm::{DirectSearch, StepRecorder};

    #[test]
    fn test_matches_direct_search() {
        let grid: Grid = "##########
                          #...#....#
                          #.#.#.##.#
                          #.#...#..#
                          #.#####..#
                          #......#.#
                          ##########"
            .parse()
            .expect("Grid should parse in test");

        for start in [Coord::new(1, 1), Coord::new(5, 8), Coord::new(3, 4)] {
            let parallel = ParallelSearch::search(&grid, start).expect("Search should succeed in test");
            let direct = DirectSearch::search(&grid, start).expect("Search should succeed in test");
            assert_eq!(parallel.grid(), direct.grid());
        }
    }

    #[test]
    fn test_claim_only_once() {
        let grid = Grid::new(3, 3).expect("Grid should be created in test");
        let cells = AtomicCells::from_grid(&grid);
        let wins: usize = (0..64)
            .into_par_iter()
            .map(|_| usize::from(cells.claim(4)))
            .sum();
        assert_eq!(wins, 1);
    }

    #[test]
    fn test_wall_never_claimed() {
        let grid = Grid::with_border(3, 3).expect("Grid should be created in test");
        let cells = AtomicCells::from_grid(&grid);
        assert!(!cells.claim(0));
        assert!(cells.claim(4));
    }

    #[test]
    fn test_snapshots_show_frontier() {
        let grid = Grid::with_border(5, 5).expect("Grid should be created in test");
        let mut recorder = StepRecorder::new();
        ParallelSearch::search_with_observer(&grid, Coord::new(2, 2), &mut recorder)
            .expect("Search should succeed in test");

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.steps()[0].count(CellState::Frontier), 4);
        assert_eq!(recorder.steps()[1].count(CellState::Frontier), 4);
        assert_eq!(recorder.steps()[1].count(CellState::Reachable), 4);
    }
}
