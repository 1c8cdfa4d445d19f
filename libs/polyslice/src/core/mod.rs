//! Core data types for the slicing kernel.
//!
//! Includes the point alias (`Point`) and the vertex ring (`Polygon`).

pub mod point;
pub mod polygon;
