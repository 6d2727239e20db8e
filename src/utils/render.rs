//! 终端渲染模块
//!
//! 以背景色块渲染网格：空白为白、墙为黑、起点为红、可达为青、前沿为绿。

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};

use crate::core::{CellState, Grid};
use crate::services::algorithm::SearchObserver;

fn paint(state: CellState) -> ColoredString {
    match state {
        CellState::Empty => " ".on_white(),
        CellState::Wall => " ".on_black(),
        CellState::Start => " ".on_red(),
        CellState::Reachable => " ".on_cyan(),
        CellState::Frontier => " ".on_green(),
    }
}

/// 渲染为带颜色的多行字符串，每个单元格一个字符宽
pub fn render(grid: &Grid) -> String {
    let mut output = String::with_capacity(grid.len() * 8);
    for row in grid.rows() {
        for &state in row {
            output.push_str(&paint(state).to_string());
        }
        output.push('\n');
    }
    output
}

/// 逐步打印搜索过程的观察者，每步之间暂停 `pause`
pub struct ConsoleVisualizer<W: Write> {
    out: W,
    pause: Duration,
}

impl ConsoleVisualizer<io::Stdout> {
    pub fn stdout(pause: Duration) -> Self {
        Self::new(io::stdout(), pause)
    }
}

impl<W: Write> ConsoleVisualizer<W> {
    pub fn new(out: W, pause: Duration) -> Self {
        Self { out, pause }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SearchObserver for ConsoleVisualizer<W> {
    fn on_step(&mut self, step: usize, grid: &Grid) {
        // 渲染失败不影响搜索本身
        if let Err(e) = writeln!(self.out, "\nstep {}\n{}", step, render(grid)) {
            log::warn!("可视化输出失败: {}", e);
        }
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }
}
