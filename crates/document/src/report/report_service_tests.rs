//! Tests for the report service facade.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};
    use folioreport_core::{
        AssetDetails, AssetRecord, Catalog, InfoRow, InitialExpense, Locale, RealEstateDetails,
        SavingsAccountDetails, Translator,
    };
    use rust_decimal_macros::dec;

    use crate::errors::RenderError;
    use crate::layout::{Margins, PageSize};
    use crate::report::{ReportConfig, ReportService, ReportServiceTrait};

    /// Returns every key untranslated.
    struct KeyEcho;

    impl Translator for KeyEcho {
        fn t(&self, key: &str) -> String {
            key.to_string()
        }
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
    }

    fn service(locale: Locale, config: ReportConfig) -> ReportService {
        ReportService::new(Arc::new(Catalog::load(locale).unwrap()), config)
    }

    fn flat() -> AssetRecord {
        let mut asset = AssetRecord::new(
            "re-1",
            "Flat in Valencia",
            AssetDetails::RealEstate(RealEstateDetails {
                location: Some("Valencia".to_string()),
                rental_yield: Some(dec!(5)),
                ..Default::default()
            }),
        );
        asset.price = Some(dec!(100000));
        asset.purchase_price = Some(dec!(80000));
        asset.initial_expenses = vec![InitialExpense {
            label: "Notary".to_string(),
            amount: dec!(4000),
        }];
        asset
    }

    fn pdf_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).to_string()
    }

    #[test]
    fn test_generate_returns_pdf_and_export_from_same_metrics() {
        let artifacts = service(Locale::En, ReportConfig::default())
            .generate(&flat(), generated_at())
            .unwrap();

        assert!(artifacts.pdf.starts_with(b"%PDF-"));
        assert!(artifacts.page_count >= 1);
        assert_eq!(artifacts.export.metrics, artifacts.metrics);
        assert_eq!(artifacts.export.name, "Flat in Valencia");
        assert_eq!(artifacts.export.exported_at, generated_at());
        assert_eq!(artifacts.metrics.current_value, Some(100000.0));

        let text = pdf_text(&artifacts.pdf);
        assert!(text.contains(&format!("/Count {}", artifacts.page_count)));
        assert!(text.contains("(Asset Report)"));
        assert!(text.contains("(Generated on 2026-10-15)"));
        assert!(text.contains(&format!("(1/{})", artifacts.page_count)));
    }

    #[test]
    fn test_export_path_matches_generate() {
        let service = service(Locale::En, ReportConfig::default());
        let artifacts = service.generate(&flat(), generated_at()).unwrap();
        assert_eq!(service.export(&flat(), generated_at()), artifacts.export);
    }

    #[test]
    fn test_render_pdf_reuses_export_metrics_and_info() {
        let service = service(Locale::En, ReportConfig::default());
        let mut export = service.export(&flat(), generated_at());
        export.metrics.monthly_cashflow = None;
        export.info = vec![InfoRow {
            label: "Cadastre".to_string(),
            value: "XYZ-42".to_string(),
        }];

        let rendered = service.render_pdf(&flat(), &export).unwrap();
        let text = pdf_text(&rendered.pdf);
        assert!(text.contains("(No recurring cashflow)"));
        assert!(text.contains("(Cadastre)"));
        assert!(text.contains("(XYZ-42)"));
        assert!(!text.contains("(Valencia)"));
    }

    #[test]
    fn test_title_override_and_locale() {
        let config = ReportConfig {
            report_title: Some("Household Review".to_string()),
            ..Default::default()
        };
        let artifacts = service(Locale::Es, config)
            .generate(&flat(), generated_at())
            .unwrap();
        let text = pdf_text(&artifacts.pdf);

        assert!(text.contains("(Household Review)"));
        assert!(!text.contains("(Informe del activo)"));
        assert!(text.contains("(Generado el 2026-10-15)"));
    }

    #[test]
    fn test_any_translator_can_drive_the_report() {
        let service = ReportService::new(Arc::new(KeyEcho), ReportConfig::default());
        let artifacts = service.generate(&flat(), generated_at()).unwrap();
        assert!(pdf_text(&artifacts.pdf).contains("(report.title)"));
    }

    #[test]
    fn test_invalid_record_fails_before_rendering() {
        let mut asset = flat();
        asset.name = "  ".to_string();
        let result = service(Locale::En, ReportConfig::default()).generate(&asset, generated_at());
        assert!(matches!(result, Err(RenderError::Core(_))));
    }

    #[test]
    fn test_surface_failure_still_allows_json_export() {
        let config = ReportConfig {
            margins: Margins::uniform(500.0),
            ..Default::default()
        };
        let service = service(Locale::En, config);
        let asset = AssetRecord::new(
            "sv-1",
            "Rainy day fund",
            AssetDetails::SavingsAccount(SavingsAccountDetails::default()),
        );

        assert!(matches!(
            service.generate(&asset, generated_at()),
            Err(RenderError::InvalidSurface { .. })
        ));
        let export = service.export(&asset, generated_at());
        assert_eq!(export.id, "sv-1");
        assert!(export.to_pretty_json().is_ok());
    }

    #[test]
    fn test_letter_pages_use_letter_media_box() {
        let config = ReportConfig::default().with_page_size(PageSize::LETTER);
        let artifacts = service(Locale::En, config)
            .generate(&flat(), generated_at())
            .unwrap();
        assert!(pdf_text(&artifacts.pdf).contains("/MediaBox [0 0 612 792]"));
    }
}
