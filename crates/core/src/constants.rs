/// Annual inflation rate used for every benchmark and inflation target.
pub const DEFAULT_INFLATION_RATE: f64 = 0.035;

/// Holding horizon in years when a category gives no better estimate.
pub const DEFAULT_YEARS: f64 = 3.0;

/// Shortest horizon a term deposit can report, in years.
pub const MIN_TERM_DEPOSIT_YEARS: f64 = 0.25;

/// Currency assumed when an asset record carries none.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Glyph rendered in place of an unknown value.
pub const UNKNOWN_PLACEHOLDER: &str = "—";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum number of monthly points in a synthesized series.
pub const MIN_SERIES_MONTHS: usize = 24;

/// Most points a synthesized series carries into the chart.
pub const MAX_SERIES_POINTS: usize = 100;

/// Base value for series synthesis when nothing about the asset is known.
pub const FALLBACK_SERIES_BASE: f64 = 10_000.0;

/// Floor applied to the series base value.
pub const MIN_SERIES_BASE: f64 = 1_000.0;
