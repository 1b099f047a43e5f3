//! Assembles the ordered report blocks from derived data.
//!
//! Sections, in order:
//! 1. title, badges and description
//! 2. financial summary
//! 3. asset information (only with info rows)
//! 4. projection analysis with the comparison chart
//! 5. initial expenses (only with expenses)
//! 6. closing metadata line
//!
//! Numbers are not baked into heading texts: omitted sections must not leave
//! gaps, so numbering happens at layout time.

use chrono::NaiveDate;
use folioreport_core::utils::format_utils::{format_currency, format_percent, to_f64};
use folioreport_core::{AssetRecord, InfoRow, Metrics, SeriesPair, Translator};
use log::debug;

use super::document_model::{Block, DocumentModel, FigureLegend, KeyValueRow};

const SUMMARY_COLUMNS: [f64; 2] = [0.55, 0.45];
const INFO_COLUMNS: [f64; 2] = [0.45, 0.55];
const EXPENSE_COLUMNS: [f64; 2] = [0.65, 0.35];

/// Everything a report document is built from.
pub struct DocumentInput<'a> {
    pub asset: &'a AssetRecord,
    pub metrics: &'a Metrics,
    pub info_rows: &'a [InfoRow],
    pub series: &'a SeriesPair,
    pub generated_on: NaiveDate,
}

/// Builds the document model. Deterministic for a given input.
pub fn build_document(input: &DocumentInput<'_>, t: &dyn Translator) -> DocumentModel {
    let mut blocks = Vec::new();

    push_title_section(&mut blocks, input, t);
    push_summary_section(&mut blocks, input, t);
    if !input.info_rows.is_empty() {
        push_info_section(&mut blocks, input, t);
    }
    push_projection_section(&mut blocks, input, t);
    if !input.asset.initial_expenses.is_empty() {
        push_expenses_section(&mut blocks, input, t);
    }
    blocks.push(Block::muted(metadata_line(input, t)));

    debug!(
        "Built document for asset {} with {} blocks",
        input.asset.id,
        blocks.len()
    );
    DocumentModel { blocks }
}

fn push_title_section(blocks: &mut Vec<Block>, input: &DocumentInput<'_>, t: &dyn Translator) {
    let badges = [
        t.t(&input.asset.category().label_key()),
        t.t(&input.metrics.risk_level.label_key()),
        input.metrics.currency.clone(),
    ];

    blocks.push(Block::heading(1, input.asset.name.trim()));
    blocks.push(Block::muted(badges.join(" · ")));
    if let Some(description) = input.asset.description_text() {
        blocks.push(Block::paragraph(description));
    }
}

fn push_summary_section(blocks: &mut Vec<Block>, input: &DocumentInput<'_>, t: &dyn Translator) {
    let metrics = input.metrics;
    let currency = metrics.currency.as_str();

    let current_value = match metrics.gain_loss {
        Some(gain) => format!(
            "{} · {}",
            format_currency(metrics.current_value, currency),
            t.t_with(
                "report.summary.gainLoss",
                &[
                    ("amount", signed_currency(gain, currency)),
                    ("percent", format_percent(metrics.roi_percent)),
                ],
            )
        ),
        None => format_currency(metrics.current_value, currency),
    };

    let cashflow = match metrics.monthly_cashflow {
        Some(cashflow) => t.t_with(
            "report.summary.perMonth",
            &[("amount", format_currency(Some(cashflow), currency))],
        ),
        None => t.t("report.summary.noCashflow"),
    };

    let rows = vec![
        KeyValueRow::new(t.t("report.summary.currentValue"), current_value),
        KeyValueRow::new(
            t.t("report.summary.invested"),
            format_currency(metrics.invested, currency),
        ),
        KeyValueRow::new(
            t.t("report.summary.expenses"),
            format_currency(Some(metrics.expenses_total), currency),
        ),
        KeyValueRow::new(t.t("report.summary.cashflow"), cashflow),
        KeyValueRow::new(
            t.t("report.summary.roi"),
            format_percent(metrics.roi_percent),
        ),
        KeyValueRow::new(
            t.t("report.summary.inflationGap"),
            format_percent(metrics.inflation_gap_percent),
        ),
    ];

    blocks.push(Block::heading(2, t.t("report.sections.summary")));
    blocks.push(Block::paragraph(t.t_with(
        "report.sections.summaryIntro",
        &[("name", input.asset.name.trim().to_string())],
    )));
    blocks.push(Block::KeyValueTable {
        header: (t.t("report.table.metric"), t.t("report.table.value")),
        rows,
        column_widths: SUMMARY_COLUMNS,
    });
}

fn push_info_section(blocks: &mut Vec<Block>, input: &DocumentInput<'_>, t: &dyn Translator) {
    let category = t.t(&input.asset.category().label_key()).to_lowercase();

    blocks.push(Block::heading(2, t.t("report.sections.info")));
    blocks.push(Block::paragraph(t.t_with(
        "report.sections.infoIntro",
        &[("category", category)],
    )));
    blocks.push(Block::KeyValueTable {
        header: (t.t("report.table.field"), t.t("report.table.value")),
        rows: input
            .info_rows
            .iter()
            .map(|row| KeyValueRow::new(row.label.clone(), row.value.clone()))
            .chain(std::iter::once(KeyValueRow::new(
                t.t("assets.fields.id"),
                input.asset.id.trim().to_string(),
            )))
            .collect(),
        column_widths: INFO_COLUMNS,
    });
}

fn push_projection_section(
    blocks: &mut Vec<Block>,
    input: &DocumentInput<'_>,
    t: &dyn Translator,
) {
    let metrics = input.metrics;
    let key = if metrics.beats_inflation() {
        "report.sections.projectionAbove"
    } else {
        "report.sections.projectionBelow"
    };
    let rate = inflation_rate_label(metrics);

    blocks.push(Block::heading(2, t.t("report.sections.projection")));
    blocks.push(Block::paragraph(t.t_with(
        key,
        &[
            ("name", input.asset.name.trim().to_string()),
            (
                "target",
                format_currency(metrics.inflation_target, &metrics.currency),
            ),
            ("years", years_label(metrics)),
            ("rate", rate.clone()),
        ],
    )));
    blocks.push(Block::Figure {
        asset_series: input.series.asset_series.clone(),
        inflation_series: input.series.inflation_series.clone(),
        caption: t.t_with("report.chart.caption", &[("rate", rate)]),
        legend: FigureLegend {
            asset: t.t("report.chart.legendAsset"),
            benchmark: t.t("report.chart.legendInflation"),
        },
        currency: metrics.currency.clone(),
    });
    blocks.push(Block::paragraph(insight_line(metrics, t)));
}

/// Verdict against inflation, the return note when known, then guidance.
fn insight_line(metrics: &Metrics, t: &dyn Translator) -> String {
    let verdict = if metrics.beats_inflation() {
        t.t("report.insights.aboveInflation")
    } else {
        t.t("report.insights.belowInflation")
    };
    let mut parts = vec![verdict];
    if metrics.roi_percent.is_some() {
        parts.push(t.t_with(
            "report.insights.annualised",
            &[("percent", format_percent(metrics.roi_percent))],
        ));
    }
    parts.push(t.t("report.insights.guidance"));
    parts.join(" ")
}

fn push_expenses_section(blocks: &mut Vec<Block>, input: &DocumentInput<'_>, t: &dyn Translator) {
    let currency = input.metrics.currency.as_str();
    let mut rows: Vec<KeyValueRow> = input
        .asset
        .initial_expenses
        .iter()
        .map(|expense| {
            let label = match expense.label.trim() {
                "" => t.t("report.expenses.unnamed"),
                label => label.to_string(),
            };
            KeyValueRow::new(label, format_currency(Some(to_f64(expense.amount)), currency))
        })
        .collect();
    rows.push(KeyValueRow::emphasized(
        t.t("report.expenses.total"),
        format_currency(Some(input.metrics.expenses_total), currency),
    ));

    blocks.push(Block::heading(2, t.t("report.sections.expenses")));
    blocks.push(Block::paragraph(t.t("report.sections.expensesIntro")));
    blocks.push(Block::KeyValueTable {
        header: (t.t("report.table.concept"), t.t("report.table.amount")),
        rows,
        column_widths: EXPENSE_COLUMNS,
    });
}

fn metadata_line(input: &DocumentInput<'_>, t: &dyn Translator) -> String {
    t.t_with(
        "report.metadata",
        &[
            ("date", input.generated_on.format("%Y-%m-%d").to_string()),
            ("rate", inflation_rate_label(input.metrics)),
            ("years", years_label(input.metrics)),
            ("currency", input.metrics.currency.clone()),
        ],
    )
}

/// Inflation rate in percent with one decimal, e.g. `3.5`.
fn inflation_rate_label(metrics: &Metrics) -> String {
    format!("{:.1}", metrics.inflation_rate * 100.0)
}

fn years_label(metrics: &Metrics) -> String {
    format!("{:.1}", metrics.years)
}

fn signed_currency(amount: f64, currency: &str) -> String {
    let formatted = format_currency(Some(amount), currency);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{}", formatted)
    }
}
