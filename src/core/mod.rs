//! Core application primitives (engine, chart planning, runtime)

pub mod engine;
pub mod render;
pub mod runtime;

pub use engine::*;
pub use render::*;
pub use runtime::*;
