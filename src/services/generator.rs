//! 网格生成模块
//!
//! 生成带墙边框的随机网格，内部每个单元格以 `wall_density` 的概率成为墙。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GridConfig;
use crate::core::{CellState, Coord, Grid, ReachError, ReachResult, MIN_DIMENSION};

/// 随机网格生成器
#[derive(Debug, Clone)]
pub struct GridGenerator {
    height: usize,
    width: usize,
    wall_density: f64,
    rng: StdRng,
}

impl GridGenerator {
    /// 创建生成器，`seed` 为 `None` 时使用系统熵
    pub fn new(height: usize, width: usize, wall_density: f64, seed: Option<u64>) -> ReachResult<Self> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(ReachError::InvalidDimensions { height, width });
        }
        if !(0.0..=1.0).contains(&wall_density) {
            return Err(ReachError::InvalidDensity(wall_density));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            height,
            width,
            wall_density,
            rng,
        })
    }

    pub fn from_config(config: &GridConfig) -> ReachResult<Self> {
        Self::new(config.height, config.width, config.wall_density, config.seed)
    }

    /// 生成一张新网格：外圈为墙，内部随机布墙
    pub fn generate(&mut self) -> ReachResult<Grid> {
        let mut grid = Grid::with_border(self.height, self.width)?;
        for coord in grid.interior().collect::<Vec<_>>() {
            if self.rng.gen::<f64>() < self.wall_density {
                grid.set(coord, CellState::Wall)?;
            }
        }

        log::debug!(
            "生成 {}x{} 网格, 墙密度 {}, 空单元格 {} 个",
            self.height,
            self.width,
            self.wall_density,
            grid.count(CellState::Empty)
        );
        Ok(grid)
    }

    /// 在内部随机选择起点，并强制该单元格为 `Empty`，保证起点不是墙
    pub fn random_start(&mut self, grid: &mut Grid) -> ReachResult<Coord> {
        let start = Coord::new(
            self.rng.gen_range(1..grid.height() - 1),
            self.rng.gen_range(1..grid.width() - 1),
        );
        grid.set(start, CellState::Empty)?;
        Ok(start)
    }
}
