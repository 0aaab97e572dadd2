//! Terminal falling-block puzzle: a pure game core driven by elapsed time,
//! plus the crossterm input mapping and ratatui renderer around it.

pub mod config;
pub mod constants;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
