//! 搜索观察者模块
//!
//! 搜索过程中的逐步观察钩子。引擎只负责在每一步调用观察者，
//! 渲染、计时和延迟全部由观察者自行处理。

use crate::core::Grid;

/// 搜索步进观察者
///
/// 直接搜索、BFS 和并行搜索每扩展一轮调用一次，DFS 每访问一个坐标调用一次。
/// 传入的网格是当前的部分结果，包含暂态 `Frontier` 标记。
pub trait SearchObserver {
    /// `step` 从 1 开始计数
    fn on_step(&mut self, step: usize, grid: &Grid);

    /// 是否需要网格快照，返回 false 时并行搜索可以跳过快照构建
    fn wants_snapshots(&self) -> bool {
        true
    }
}

/// 不做任何事的观察者
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_step(&mut self, _step: usize, _grid: &Grid) {}

    fn wants_snapshots(&self) -> bool {
        false
    }
}

impl<F> SearchObserver for F
where
    F: FnMut(usize, &Grid),
{
    fn on_step(&mut self, step: usize, grid: &Grid) {
        self(step, grid)
    }
}

/// 记录每一步网格快照的观察者
#[derive(Debug, Default, Clone)]
pub struct StepRecorder {
    steps: Vec<Grid>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Grid] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl SearchObserver for StepRecorder {
    fn on_step(&mut self, _step: usize, grid: &Grid) {
        self.steps.push(grid.clone());
    }
}
