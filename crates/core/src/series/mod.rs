//! Series module - synthesized value and inflation benchmark series.

mod series_model;
mod series_synthesizer;

pub use series_model::{Series, SeriesPair, TimePoint};
pub use series_synthesizer::{
    inflation_path, monthly_inflation_rate, sample_months, series_months, synthesize_series,
    synthesize_series_as_of,
};
