//! 网格模型
//!
//! 二维单元格状态数组，行优先存储。搜索期间只读，算法在私有副本上写入。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{ReachError, ReachResult};

/// 网格允许的最小边长（含一圈墙边框）
pub const MIN_DIMENSION: usize = 3;

/// 网格坐标 `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 四个正交方向的邻居：左、右、上、下
    ///
    /// 只过滤掉会下溢的方向，不检查网格上界，调用方负责边界判断。
    pub fn orthogonal(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            col.checked_add(1).map(|c| Coord::new(row, c)),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            row.checked_add(1).map(|r| Coord::new(r, col)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// 单元格状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CellState {
    /// 未访问、可通行
    Empty = 0,
    /// 不可通行，永不转换
    Wall = 1,
    /// 搜索起点
    Start = 2,
    /// 已确认可从起点到达
    Reachable = 3,
    /// 暂态：正在等待扩展，不会出现在最终结果中
    Frontier = 4,
}

impl CellState {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Wall),
            2 => Some(CellState::Start),
            3 => Some(CellState::Reachable),
            4 => Some(CellState::Frontier),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Reachable => 'o',
            CellState::Frontier => '+',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'o' => Some(CellState::Reachable),
            '+' => Some(CellState::Frontier),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }
}

/// 矩形网格
///
/// `Clone` 即深拷贝，复杂度 O(height·width)。
/// 反序列化经由 `from_cells` 校验尺寸与单元格数量。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

/// `Grid` 的未校验序列化形式
#[derive(Deserialize)]
struct GridRepr {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = ReachError;

    fn try_from(repr: GridRepr) -> ReachResult<Self> {
        Grid::from_cells(repr.height, repr.width, repr.cells)
    }
}

impl Grid {
    /// 创建全部为 `Empty` 的网格
    pub fn new(height: usize, width: usize) -> ReachResult<Self> {
        Self::filled(height, width, CellState::Empty)
    }

    /// 创建所有单元格为同一状态的网格
    pub fn filled(height: usize, width: usize, state: CellState) -> ReachResult<Self> {
        let len = Self::check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![state; len],
        })
    }

    /// 创建带一圈墙边框、内部全空的网格
    pub fn with_border(height: usize, width: usize) -> ReachResult<Self> {
        let mut grid = Self::new(height, width)?;
        for row in 0..height {
            for col in 0..width {
                if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                    grid.cells[row * width + col] = CellState::Wall;
                }
            }
        }
        Ok(grid)
    }

    /// 由行优先的状态数组构造网格
    pub fn from_cells(height: usize, width: usize, cells: Vec<CellState>) -> ReachResult<Self> {
        let len = Self::check_dimensions(height, width)?;
        if cells.len() != len {
            return Err(ReachError::Parse(format!(
                "期望 {} 个单元格，实际 {}",
                len,
                cells.len()
            )));
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// 校验尺寸并返回单元格总数，乘积溢出同样视为无效尺寸
    fn check_dimensions(height: usize, width: usize) -> ReachResult<usize> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(ReachError::InvalidDimensions { height, width });
        }
        height
            .checked_mul(width)
            .ok_or(ReachError::InvalidDimensions { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// 是否位于最外圈以内 `[1,height-1) × [1,width-1)`
    pub fn is_interior(&self, coord: Coord) -> bool {
        coord.row >= 1 && coord.col >= 1 && coord.row < self.height - 1 && coord.col < self.width - 1
    }

    /// 坐标转行优先下标，越界返回 `OutOfBounds`
    pub fn index_of(&self, coord: Coord) -> ReachResult<usize> {
        if !self.contains(coord) {
            return Err(ReachError::OutOfBounds {
                coord,
                height: self.height,
                width: self.width,
            });
        }
        Ok(coord.row * self.width + coord.col)
    }

    /// 行优先下标转坐标
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.width, index % self.width)
    }

    pub fn get(&self, coord: Coord) -> ReachResult<CellState> {
        let index = self.index_of(coord)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, coord: Coord, state: CellState) -> ReachResult<()> {
        let index = self.index_of(coord)?;
        self.cells[index] = state;
        Ok(())
    }

    /// 网格内的正交邻居（已做边界检查）
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.orthogonal().filter(move |n| self.contains(*n))
    }

    /// 按行优先顺序遍历所有坐标
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.coord_of(i))
    }

    /// 遍历内部区域坐标（不含最外圈）
    pub fn interior(&self) -> impl Iterator<Item = Coord> {
        let (height, width) = (self.height, self.width);
        (1..height - 1).flat_map(move |row| (1..width - 1).map(move |col| Coord::new(row, col)))
    }

    /// 统计处于指定状态的单元格数量
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// 处于指定状态的所有坐标，行优先
    pub fn coords_with(&self, state: CellState) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == state)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// 每一行的状态切片
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for state in row {
                write!(f, "{}", state.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ReachError;

    /// 每行一个网格行，首尾空白行被忽略
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = lines.len();
        let width = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(height * width);

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(ReachError::Parse(format!(
                    "第 {} 行长度为 {}，期望 {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let state = CellState::from_char(c).ok_or_else(|| {
                    ReachError::Parse(format!("未知字符 '{}' 位于 ({}, {})", c, row, col))
                })?;
                cells.push(state);
            }
        }

        Grid::from_cells(height, width, cells)
    }
}
