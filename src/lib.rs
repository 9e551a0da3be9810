//! postergrid
//!
//! Virtualized poster-grid layout and windowing engine, plus a terminal host
//! that exercises it.
//!
//! The [`grid`] module is the pure core: it turns a viewport width, display
//! options and an ordered item sequence into grid geometry, a visible row
//! window and one-shot scroll targets. Everything else is the impure shell
//! that feeds it measurements and draws what it says to draw.

pub mod config;
pub mod grid;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
