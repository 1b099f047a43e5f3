//! Chart module - vector projection of value series.

mod chart_projector;

pub use chart_projector::{dashed_segments, project, sample_indices, PlotArea};
