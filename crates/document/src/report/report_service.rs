use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use folioreport_core::{
    build_export, build_info_rows, derive_metrics_as_of, synthesize_series_as_of,
    validate_record, AssetExport, AssetRecord, Translator,
};
use log::{debug, info};

use super::report_model::{RenderedPdf, ReportArtifacts, ReportConfig};
use super::report_traits::ReportServiceTrait;
use crate::errors::Result;
use crate::layout::{render, stamp, PageHeader};
use crate::model::{build_document, DocumentInput};
use crate::pdf::{encode_pdf, DocumentInfo};

pub struct ReportService {
    translator: Arc<dyn Translator>,
    config: ReportConfig,
}

impl ReportService {
    pub fn new(translator: Arc<dyn Translator>, config: ReportConfig) -> Self {
        ReportService { translator, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn report_title(&self) -> String {
        self.config
            .report_title
            .clone()
            .unwrap_or_else(|| self.translator.t("report.title"))
    }

    fn page_header(&self, generated_on: NaiveDate) -> PageHeader {
        PageHeader {
            title: self.report_title(),
            generated_on: self.translator.t_with(
                "report.generatedOn",
                &[("date", generated_on.format("%Y-%m-%d").to_string())],
            ),
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn generate(
        &self,
        asset: &AssetRecord,
        generated_at: DateTime<Utc>,
    ) -> Result<ReportArtifacts> {
        validate_record(asset)?;
        let export = self.export(asset, generated_at);
        let RenderedPdf { page_count, pdf } = self.render_pdf(asset, &export)?;

        Ok(ReportArtifacts {
            metrics: export.metrics.clone(),
            export,
            page_count,
            pdf,
        })
    }

    fn export(&self, asset: &AssetRecord, generated_at: DateTime<Utc>) -> AssetExport {
        let metrics = derive_metrics_as_of(asset, generated_at);
        let info_rows = build_info_rows(asset, self.translator.as_ref());
        build_export(asset, &metrics, &info_rows, generated_at)
    }

    fn render_pdf(&self, asset: &AssetRecord, export: &AssetExport) -> Result<RenderedPdf> {
        validate_record(asset)?;
        let layout = self.config.layout_config();
        let translator = self.translator.as_ref();
        let generated_on = export.exported_at.date_naive();
        let metrics = &export.metrics;

        let series = synthesize_series_as_of(metrics, generated_on);
        let model = build_document(
            &DocumentInput {
                asset,
                metrics,
                info_rows: &export.info,
                series: &series,
                generated_on,
            },
            translator,
        );
        debug!("Built {} blocks for asset {}", model.len(), asset.id);

        let mut pages = render(&model, &layout)?;
        let header = self.page_header(generated_on);
        stamp(&mut pages, &header, &layout);

        let pdf = encode_pdf(
            &pages,
            layout.page_size,
            &DocumentInfo {
                title: format!("{}: {}", header.title, asset.name),
                subject: asset.description_text().map(str::to_string),
            },
        )?;

        info!(
            "Generated report for asset {} ({} pages, {} bytes)",
            asset.id,
            pages.len(),
            pdf.len()
        );
        Ok(RenderedPdf {
            page_count: pages.len(),
            pdf,
        })
    }
}
