//! 搜索性质集成测试
//!
//! 在大量随机网格上验证：
//! - 等价性：所有算法给出相同可达集合，且与独立参考实现一致
//! - 守恒：reachable_count <= empty_count + 1
//! - 不穿墙：墙永远不会进入前沿或被标记为可达
//! - 单调性：搜索过程中可达集合只增不减
//! - 终止性与结果中不残留前沿

mod common;

use common::{reached, reference_component, seeded, ALGORITHMS};
use gridreach::core::{CellState, Coord, Grid};
use gridreach::services::algorithm::StepRecorder;
use gridreach::services::{search, search_with_observer, SearchStats};

const SEEDS: u64 = 60;

#[test]
fn test_equivalence_on_random_grids() {
    for seed in 0..SEEDS {
        let density = 0.15 + (seed % 5) as f64 * 0.1;
        let (grid, start) = seeded(12 + (seed as usize % 7), 15, density, seed);
        let expected = reference_component(&grid, start);

        for algorithm in ALGORITHMS {
            let result = search(&grid, start, algorithm).expect("搜索失败");
            assert_eq!(
                reached(&result),
                expected,
                "seed {} 上 {} 的可达集合与参考实现不一致",
                seed,
                algorithm
            );
        }
    }
}

#[test]
fn test_conservation_and_classification() {
    for seed in 0..SEEDS {
        let (grid, start) = seeded(16, 16, 0.35, seed);
        for algorithm in ALGORITHMS {
            let result = search(&grid, start, algorithm).expect("搜索失败");
            let stats = SearchStats::classify(&grid, &result);

            assert!(stats.reachable_count <= stats.empty_count + 1);
            assert_eq!(stats, SearchStats::classify(&grid, &result));
            assert_eq!(
                stats.is_fully_connected(),
                stats.reachable_count == stats.empty_count,
                "起点在原网格中为空时，全连通当且仅当两者相等"
            );
        }
    }
}

#[test]
fn test_no_wall_crossing_and_no_leftover_frontier() {
    for seed in 0..SEEDS {
        let (grid, start) = seeded(14, 20, 0.45, seed);
        for algorithm in ALGORITHMS {
            let result = search(&grid, start, algorithm).expect("搜索失败");
            assert_eq!(result.grid().count(CellState::Frontier), 0);
            assert_eq!(result.grid().count(CellState::Start), 1);
            for coord in grid.coords() {
                if grid.get(coord).expect("坐标在网格内") == CellState::Wall {
                    assert_eq!(result.state(coord).expect("坐标在网格内"), CellState::Wall);
                }
            }
        }
    }
}

#[test]
fn test_monotonic_progress() {
    for seed in 0..10 {
        let (grid, start) = seeded(12, 12, 0.3, seed);
        for algorithm in ALGORITHMS {
            let mut recorder = StepRecorder::new();
            search_with_observer(&grid, start, algorithm, &mut recorder).expect("搜索失败");

            let mut previous: Option<&Grid> = None;
            for snapshot in recorder.steps() {
                for coord in snapshot.coords() {
                    let state = snapshot.get(coord).expect("坐标在网格内");
                    if state == CellState::Wall {
                        assert_eq!(grid.get(coord).expect("坐标在网格内"), CellState::Wall);
                    }
                    if let Some(prev) = previous {
                        let before = prev.get(coord).expect("坐标在网格内");
                        // 一旦可达就不再回退
                        if before == CellState::Reachable {
                            assert_eq!(state, CellState::Reachable, "{} 在 {} 回退", coord, algorithm);
                        }
                        if before == CellState::Frontier {
                            assert_ne!(state, CellState::Empty);
                        }
                    }
                }
                previous = Some(snapshot);
            }
        }
    }
}

#[test]
fn test_dense_grids_terminate() {
    for seed in 0..SEEDS {
        let (grid, start) = seeded(9, 9, 0.95, seed);
        for algorithm in ALGORITHMS {
            let result = search(&grid, start, algorithm).expect("搜索失败");
            assert!(result.is_reachable(start));
        }
    }
}

#[test]
fn test_large_open_grid() {
    let grid = Grid::with_border(120, 150).expect("创建测试网格失败");
    let start = Coord::new(60, 75);
    for algorithm in ALGORITHMS {
        let result = search(&grid, start, algorithm).expect("搜索失败");
        let stats = SearchStats::classify(&grid, &result);
        assert_eq!(stats.reachable_count, 118 * 148);
    }
}
