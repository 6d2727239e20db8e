// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 日志模块
pub mod logging;

// 终端渲染模块
pub mod render;
pub use render::{render, ConsoleVisualizer};
