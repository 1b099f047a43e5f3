//! Category-specific "Asset Information" rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assets_model::{AssetDetails, AssetRecord, CommodityType};
use crate::i18n::Translator;
use crate::utils::format_utils::{
    format_currency, format_percent, format_plain, opt_to_f64, to_f64,
};

/// A label/value pair describing one recorded field of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// Collects rows for the fields present on the asset.
struct InfoRows<'a> {
    rows: Vec<InfoRow>,
    translator: &'a dyn Translator,
}

impl<'a> InfoRows<'a> {
    fn new(translator: &'a dyn Translator) -> Self {
        Self {
            rows: Vec::new(),
            translator,
        }
    }

    fn push(&mut self, field: &str, value: impl Into<String>) {
        self.rows.push(InfoRow {
            label: self.translator.t(&format!("assets.fields.{}", field)),
            value: value.into(),
        });
    }

    fn push_text(&mut self, field: &str, value: Option<&str>) {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(field, value);
        }
    }

    /// Signed with two decimals, e.g. `+4.50%`.
    fn push_rate(&mut self, field: &str, value: Option<Decimal>) {
        if let Some(value) = value {
            self.push(field, format_percent(Some(to_f64(value))));
        }
    }

    /// Pushes a translated enum value, looked up under `assets.fields.{group}.{value}`.
    fn push_choice(&mut self, field: &str, group: &str, value: &str) {
        let text = self
            .translator
            .t(&format!("assets.fields.{}.{}", group, value));
        self.push(field, text);
    }

    fn finish(self) -> Vec<InfoRow> {
        self.rows
    }
}

/// Builds the information rows shown in the report and the JSON export.
///
/// Only fields with a value produce a row; bank names are always listed for
/// account-like categories.
pub fn build_info_rows(asset: &AssetRecord, translator: &dyn Translator) -> Vec<InfoRow> {
    let currency = asset.currency_or_default();
    let mut rows = InfoRows::new(translator);

    match &asset.details {
        AssetDetails::RealEstate(details) => {
            rows.push_text("location", details.location.as_deref());
            if let Some(property_type) = details.property_type {
                rows.push_choice("propertyType", "propertyTypes", property_type.as_str());
            }
            if let Some(square_meters) = details.square_meters.filter(|m| !m.is_zero()) {
                rows.push("squareMeters", format!("{} m²", format_plain(square_meters)));
            }
            rows.push_rate("rentalYield", details.rental_yield);
            if let Some(purchase_price) = asset.purchase_price {
                rows.push(
                    "purchasePrice",
                    format_currency(Some(to_f64(purchase_price)), currency),
                );
            }
        }
        AssetDetails::SavingsAccount(details) => {
            rows.push("bankName", details.bank_name.clone());
            rows.push_text("accountNumber", details.account_number.as_deref());
            rows.push_rate("interestRate", details.interest_rate);
        }
        AssetDetails::CheckingAccount(details) => {
            rows.push("bankName", details.bank_name.clone());
            rows.push_text("accountNumber", details.account_number.as_deref());
        }
        AssetDetails::TermDeposit(details) => {
            rows.push("bankName", details.bank_name.clone());
            if let Some(deposit_type) = details.deposit_type {
                rows.push_choice("depositType", "depositTypes", deposit_type.as_str());
            }
            if let Some(maturity_date) = details.maturity_date {
                rows.push("maturityDate", maturity_date.format("%Y-%m-%d").to_string());
            }
            rows.push_rate("interestRate", details.interest_rate);
        }
        AssetDetails::PreciousMetal(details) => {
            rows.push_choice("metalType", "metalTypes", details.metal_type.as_str());
            if let Some(weight) = details.weight {
                let value = match details.unit {
                    Some(unit) => format!(
                        "{} {}",
                        format_plain(weight),
                        translator.t(&format!("assets.fields.units.{}", unit.as_str()))
                    ),
                    None => format_plain(weight),
                };
                rows.push("weight", value);
            }
            rows.push_rate("purity", details.purity);
            rows.push_text("storageLocation", details.storage_location.as_deref());
        }
        AssetDetails::Commodity(details) => {
            let commodity_type = details.commodity_type.unwrap_or(CommodityType::Other);
            rows.push_choice("commodityType", "commodityTypes", commodity_type.as_str());
            let unit = details
                .unit
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty());
            if let (Some(contract_size), Some(unit)) = (details.contract_size, unit) {
                rows.push(
                    "contractSize",
                    format!("{} {}", format_plain(contract_size), unit),
                );
            }
            rows.push_text("storageLocation", details.storage_location.as_deref());
        }
        AssetDetails::PensionPlan(details) => {
            rows.push_choice("planType", "planTypes", details.plan_type.as_str());
            rows.push_text("provider", details.provider.as_deref());
            rows.push_text("riskProfile", details.risk_profile.as_deref());
            if let Some(contribution) = details.annual_contribution {
                rows.push(
                    "annualContribution",
                    format_currency(opt_to_f64(Some(contribution)), currency),
                );
            }
            rows.push_rate("expectedReturn", details.expected_return);
        }
    }

    rows.finish()
}
