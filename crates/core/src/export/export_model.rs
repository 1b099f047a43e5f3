//! JSON export of a single asset.
//!
//! The export is the layout-free alternative to the PDF report. It is built
//! from the same [`Metrics`] value the document uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::{AssetCategory, AssetRecord, InfoRow, InitialExpense};
use crate::errors::{Error, Result};
use crate::metrics::Metrics;

/// Serialized export payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetExport {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: AssetCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub currency: String,
    pub initial_expenses: Vec<InitialExpense>,
    pub metrics: Metrics,
    pub info: Vec<InfoRow>,
    pub exported_at: DateTime<Utc>,
}

impl AssetExport {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Export(e.to_string()))
    }
}

/// Assembles the export from already derived metrics and info rows.
pub fn build_export(
    asset: &AssetRecord,
    metrics: &Metrics,
    info: &[InfoRow],
    exported_at: DateTime<Utc>,
) -> AssetExport {
    AssetExport {
        id: asset.id.clone(),
        name: asset.name.clone(),
        category: asset.category(),
        description: asset.description_text().map(str::to_string),
        currency: metrics.currency.clone(),
        initial_expenses: asset.initial_expenses.clone(),
        metrics: metrics.clone(),
        info: info.to_vec(),
        exported_at,
    }
}

/// Lowercases the name and collapses whitespace runs to `-`.
pub fn file_slug(name: &str) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase();
    if slug.is_empty() {
        "asset".to_string()
    } else {
        slug
    }
}

/// File name of the JSON export, e.g. `flat-in-valencia-details.json`.
pub fn export_file_name(name: &str) -> String {
    format!("{}-details.json", file_slug(name))
}

/// File name of the PDF report, e.g. `flat-in-valencia-report.pdf`.
pub fn report_file_name(name: &str) -> String {
    format!("{}-report.pdf", file_slug(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{build_info_rows, AssetDetails, RealEstateDetails};
    use crate::i18n::{Catalog, Locale};
    use crate::metrics::derive_metrics_as_of;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn exported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(export_file_name("Flat in  Valencia"), "flat-in-valencia-details.json");
        assert_eq!(report_file_name(" Gold\tBars "), "gold-bars-report.pdf");
        assert_eq!(report_file_name("   "), "asset-report.pdf");
    }

    #[test]
    fn test_export_shape() {
        let mut asset = AssetRecord::new(
            "re-1",
            "Flat",
            AssetDetails::RealEstate(RealEstateDetails {
                location: Some("Valencia".to_string()),
                ..Default::default()
            }),
        );
        asset.price = Some(dec!(100000));
        asset.description = Some("Two bedrooms".to_string());

        let catalog = Catalog::load(Locale::En).unwrap();
        let metrics = derive_metrics_as_of(&asset, exported_at());
        let info = build_info_rows(&asset, &catalog);
        let export = build_export(&asset, &metrics, &info, exported_at());

        let value: serde_json::Value =
            serde_json::from_str(&export.to_pretty_json().unwrap()).unwrap();
        assert_eq!(value["id"], "re-1");
        assert_eq!(value["type"], "real_estate");
        assert_eq!(value["description"], "Two bedrooms");
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["metrics"]["currentValue"], 100000.0);
        assert_eq!(value["info"][0]["label"], "Location");
        assert_eq!(value["exportedAt"], "2026-10-15T09:30:00Z");
        assert!(value["initialExpenses"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let asset = AssetRecord::new(
            "re-2",
            "Plot",
            AssetDetails::RealEstate(RealEstateDetails::default()),
        );
        let metrics = derive_metrics_as_of(&asset, exported_at());
        let json = build_export(&asset, &metrics, &[], exported_at())
            .to_pretty_json()
            .unwrap();
        assert!(json.starts_with("{\n  \"id\""));
        assert!(!json.contains("\"description\""));
    }
}
