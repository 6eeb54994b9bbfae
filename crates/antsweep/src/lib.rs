//! Terminal reporting for ant-colony optimizer parameter sweeps.
//!
//! Loads the three sweep result tables once, then shows two figures:
//! per-sweep trends and the cross-parameter mean summary.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod report;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use config::load_labels;
pub use logging::init_logging;
pub use report::Report;
