//! GridReach - reachability engine for 2D grids
//!
//! Computes the set of cells reachable from a start cell on a grid of
//! passable and blocked cells, using one of several interchangeable
//! traversal strategies that all produce the same reachable set.

pub mod config;
pub mod core;
pub mod services;
pub mod utils;
