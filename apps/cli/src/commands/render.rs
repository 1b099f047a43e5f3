//! Render command implementation.
//!
//! Writes `<slug>-report.pdf` and `<slug>-details.json` per asset. A failed
//! render is logged and the JSON export is written anyway.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use folioreport_core::{export_file_name, report_file_name, AssetExport, Catalog, Locale};
use folioreport_document::{Margins, PageSize, ReportConfig, ReportService, ReportServiceTrait};
use tracing::{error, info};

use super::read_assets;
use crate::config::Config;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Asset JSON file, holding one object or an array
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for generated files, overrides FOLIOREPORT_OUTPUT_DIR
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Report language (en, es), overrides FOLIOREPORT_LOCALE
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Paper size (a4, letter), overrides FOLIOREPORT_PAGE_SIZE
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Page margin in points, applied on every side
    #[arg(long)]
    pub margin: Option<f64>,

    /// Write only the JSON exports
    #[arg(long)]
    pub json_only: bool,
}

/// Files written by one render run.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub reports: Vec<PathBuf>,
    pub exports: Vec<PathBuf>,
    /// Ids of assets whose PDF could not be rendered
    pub failures: Vec<String>,
}

pub fn execute(args: &RenderArgs, config: &Config) -> Result<RenderSummary> {
    let assets = read_assets(&args.input)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    let locale = args.locale.unwrap_or(config.locale);

    let mut report_config =
        ReportConfig::default().with_page_size(args.page_size.unwrap_or(config.page_size));
    if let Some(margin) = args.margin {
        report_config.margins = Margins::uniform(margin);
    }
    let catalog = Catalog::load(locale).context("Failed to load locale catalog")?;
    let service = ReportService::new(Arc::new(catalog), report_config);

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory {}", output_dir.display())
    })?;
    info!(
        "Rendering {} asset(s) into {} (locale {})",
        assets.len(),
        output_dir.display(),
        locale
    );

    let generated_at = Utc::now();
    let mut summary = RenderSummary::default();
    for asset in &assets {
        let export = service.export(asset, generated_at);
        if !args.json_only {
            match service.render_pdf(asset, &export) {
                Ok(rendered) => {
                    let path = output_dir.join(report_file_name(&asset.name));
                    write_file(&path, &rendered.pdf)?;
                    info!("Wrote {} ({} pages)", path.display(), rendered.page_count);
                    summary.reports.push(path);
                }
                Err(err) => {
                    error!("Failed to render report for asset {}: {}", asset.id, err);
                    summary.failures.push(asset.id.clone());
                }
            }
        }
        summary.exports.push(write_export(&output_dir, &export)?);
    }

    Ok(summary)
}

fn write_export(output_dir: &Path, export: &AssetExport) -> Result<PathBuf> {
    let path = output_dir.join(export_file_name(&export.name));
    write_file(&path, export.to_pretty_json()?.as_bytes())?;
    info!("Wrote {}", path.display());
    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    const ASSETS: &str = r#"[
      {"id": "re-1", "name": "Flat in Valencia", "type": "real_estate",
       "price": 100000, "purchasePrice": 80000, "rentalYield": 5},
      {"id": "chk-1", "name": "Current account", "type": "checking_account",
       "bankName": "Bank", "balance": 2500}
    ]"#;

    fn setup(json: &str) -> (tempfile::TempDir, RenderArgs, Config) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("assets.json");
        fs::write(&input, json).unwrap();
        let config = Config {
            output_dir: dir.path().join("out"),
            locale: Locale::En,
            page_size: PageSize::A4,
            log_format: LogFormat::Text,
        };
        let args = RenderArgs {
            input,
            output_dir: None,
            locale: None,
            page_size: None,
            margin: None,
            json_only: false,
        };
        (dir, args, config)
    }

    #[test]
    fn test_writes_pdf_and_json_per_asset() {
        let (dir, args, config) = setup(ASSETS);
        let summary = execute(&args, &config).unwrap();

        assert!(summary.failures.is_empty());
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.exports.len(), 2);

        let out = dir.path().join("out");
        let pdf = fs::read(out.join("flat-in-valencia-report.pdf")).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        let json = fs::read_to_string(out.join("current-account-details.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "chk-1");
        assert_eq!(value["type"], "checking_account");
    }

    #[test]
    fn test_json_only_skips_pdf() {
        let (dir, mut args, config) = setup(ASSETS);
        args.json_only = true;
        args.output_dir = Some(dir.path().join("json"));
        let summary = execute(&args, &config).unwrap();

        assert!(summary.reports.is_empty());
        assert_eq!(summary.exports.len(), 2);
        assert!(dir.path().join("json/flat-in-valencia-details.json").exists());
        assert!(!dir.path().join("json/flat-in-valencia-report.pdf").exists());
    }

    #[test]
    fn test_render_failure_still_writes_json_export() {
        let (dir, mut args, config) = setup(ASSETS);
        args.margin = Some(400.0);
        let summary = execute(&args, &config).unwrap();

        assert_eq!(summary.failures, vec!["re-1", "chk-1"]);
        assert!(summary.reports.is_empty());
        assert!(dir
            .path()
            .join("out/flat-in-valencia-details.json")
            .exists());
    }

    #[test]
    fn test_invalid_input_is_an_error() {
        let (_dir, args, config) = setup(r#"{"id": "x", "name": "No type"}"#);
        let err = execute(&args, &config).unwrap_err();
        assert!(err.to_string().contains("Invalid asset data"));
    }
}
