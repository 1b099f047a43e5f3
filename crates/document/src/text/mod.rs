//! Text measurement, encoding and justification.

mod font_metrics;
mod justifier;
mod win_ansi;

pub use font_metrics::{char_width, text_width, FontKind};
pub use justifier::{justify, Line};
pub use win_ansi::encode_win_ansi;
