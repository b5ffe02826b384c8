//! Visual theme for Reunion Planner.

mod styles;

pub use styles::GLOBAL_STYLES;
