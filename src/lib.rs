// src/lib.rs

pub mod config;
pub mod geometry;
pub mod generator;

pub use config::GasketConfig;
pub use generator::{GasketGenerator, IndexSource, PointSequence, RngIndexSource};
pub use geometry::{Point2, Triangle};
