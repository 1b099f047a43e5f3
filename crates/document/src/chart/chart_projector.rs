//! Projects two value series onto a plot area as vector primitives.

use folioreport_core::utils::format_utils::format_compact_currency;
use folioreport_core::Series;

use crate::layout::{Color, DrawCommand, Point};
use crate::text::{text_width, FontKind};

/// Horizontal grid rules, including the top and bottom edges.
const GRID_LINES: usize = 5;
/// Upper bound on X axis labels.
const MAX_X_LABELS: usize = 6;
/// Sub-segments per segment of the dashed benchmark line.
const DASH_SUBDIVISIONS: usize = 8;

const LABEL_SIZE: f64 = 7.0;
const SERIES_LINE_WIDTH: f64 = 1.6;

/// Pixel rectangle reserved for the plotted lines, excluding axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Linear value/index → point mapping shared by both series.
struct Projection {
    area: PlotArea,
    min: f64,
    range: f64,
}

impl Projection {
    fn new(area: PlotArea, a: &Series, b: &Series) -> Self {
        let (min, max) = a
            .values()
            .chain(b.values())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;
        Self {
            area,
            min,
            // Flat data still needs a non-zero denominator
            range: if range > 0.0 && range.is_finite() {
                range
            } else {
                1.0
            },
        }
    }

    fn y(&self, value: f64) -> f64 {
        self.area.y + self.area.height - (value - self.min) / self.range * self.area.height
    }

    fn x(&self, index: usize, count: usize) -> f64 {
        if count < 2 {
            return self.area.x;
        }
        self.area.x + index as f64 / (count - 1) as f64 * self.area.width
    }

    fn points(&self, series: &Series) -> Vec<Point> {
        let count = series.len();
        series
            .values()
            .enumerate()
            .map(|(idx, value)| Point::new(self.x(idx, count), self.y(value)))
            .collect()
    }
}

/// Emits grid lines, axis labels, a solid polyline for `asset` and a dashed
/// polyline for `benchmark`.
pub fn project(
    asset: &Series,
    benchmark: &Series,
    area: PlotArea,
    currency: &str,
) -> Vec<DrawCommand> {
    let projection = Projection::new(area, asset, benchmark);
    let mut commands = Vec::new();

    push_grid(&mut commands, &projection, currency);
    push_x_labels(&mut commands, &projection, asset);

    commands.push(DrawCommand::Polyline {
        points: projection.points(asset),
        width: SERIES_LINE_WIDTH,
        color: Color::ACCENT,
    });
    commands.extend(
        dashed_segments(&projection.points(benchmark))
            .into_iter()
            .map(|(from, to)| DrawCommand::line(from, to, SERIES_LINE_WIDTH, Color::BENCHMARK)),
    );

    commands
}

fn push_grid(commands: &mut Vec<DrawCommand>, projection: &Projection, currency: &str) {
    let area = projection.area;
    for step in 0..GRID_LINES {
        let fraction = step as f64 / (GRID_LINES - 1) as f64;
        let value = projection.min + projection.range * fraction;
        let y = projection.y(value);

        commands.push(DrawCommand::line(
            Point::new(area.x, y),
            Point::new(area.x + area.width, y),
            0.5,
            Color::GRID,
        ));

        let label = format_compact_currency(Some(value), currency);
        let label_width = text_width(FontKind::Regular, LABEL_SIZE, &label);
        commands.push(DrawCommand::text(
            area.x - label_width - 6.0,
            y + LABEL_SIZE / 3.0,
            label,
            FontKind::Regular,
            LABEL_SIZE,
            Color::MUTED,
        ));
    }
}

fn push_x_labels(commands: &mut Vec<DrawCommand>, projection: &Projection, series: &Series) {
    let area = projection.area;
    let count = series.len();
    let points = series.points();

    for idx in sample_indices(count, MAX_X_LABELS) {
        let label = points[idx].time.format("%m/%Y").to_string();
        let width = text_width(FontKind::Regular, LABEL_SIZE, &label);
        let x = (projection.x(idx, count) - width / 2.0)
            .min(area.x + area.width - width / 2.0)
            .max(area.x - width / 2.0);
        commands.push(DrawCommand::text(
            x,
            area.y + area.height + LABEL_SIZE + 6.0,
            label,
            FontKind::Regular,
            LABEL_SIZE,
            Color::MUTED,
        ));
    }
}

/// At most `max` evenly spaced indices over `0..count`, always including
/// both ends when there are at least two points.
pub fn sample_indices(count: usize, max: usize) -> Vec<usize> {
    match count {
        0 => Vec::new(),
        1 => vec![0],
        _ => {
            let samples = count.min(max.max(2));
            let mut indices: Vec<usize> = (0..samples)
                .map(|i| (i * (count - 1) + (samples - 1) / 2) / (samples - 1))
                .collect();
            indices.dedup();
            indices
        }
    }
}

/// Splits every segment into equal sub-segments and keeps the even ones.
pub fn dashed_segments(points: &[Point]) -> Vec<(Point, Point)> {
    let mut dashes = Vec::with_capacity(points.len() * DASH_SUBDIVISIONS / 2);
    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let step_x = (end.x - start.x) / DASH_SUBDIVISIONS as f64;
        let step_y = (end.y - start.y) / DASH_SUBDIVISIONS as f64;
        for sub in (0..DASH_SUBDIVISIONS).step_by(2) {
            let from = Point::new(start.x + step_x * sub as f64, start.y + step_y * sub as f64);
            let to = Point::new(from.x + step_x, from.y + step_y);
            dashes.push((from, to));
        }
    }
    dashes
}
