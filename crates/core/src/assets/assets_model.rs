//! Manual asset domain models.
//!
//! An [`AssetRecord`] is produced by collaborators (forms, imports) and is the
//! only input the report pipeline consumes. Absent numeric fields mean
//! "unknown", never zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::constants::DEFAULT_CURRENCY;
use crate::utils::time_utils::deserialize_optional_date;

/// Manual asset category. Exactly one per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    RealEstate,
    SavingsAccount,
    TermDeposit,
    CheckingAccount,
    PreciousMetal,
    Commodity,
    PensionPlan,
}

impl AssetCategory {
    /// Returns the wire representation (snake_case).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::SavingsAccount => "savings_account",
            AssetCategory::TermDeposit => "term_deposit",
            AssetCategory::CheckingAccount => "checking_account",
            AssetCategory::PreciousMetal => "precious_metal",
            AssetCategory::Commodity => "commodity",
            AssetCategory::PensionPlan => "pension_plan",
        }
    }

    /// Translation key for the category badge.
    pub fn label_key(&self) -> String {
        format!("assets.category.{}", self.as_str())
    }
}

/// One-off cost paid when acquiring the asset (notary, fees, taxes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialExpense {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub amount: Decimal,
}

/// A manually tracked asset.
///
/// Common fields live on the record; category-specific fields live in
/// [`AssetDetails`], flattened so the JSON shape is a single object with a
/// `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Current market price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub initial_expenses: Vec<InitialExpense>,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl AssetRecord {
    /// Creates a record with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, details: AssetDetails) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            currency: None,
            price: None,
            purchase_price: None,
            initial_expenses: Vec::new(),
            details,
        }
    }

    pub fn category(&self) -> AssetCategory {
        self.details.category()
    }

    /// Record currency, falling back to EUR when missing or blank.
    pub fn currency_or_default(&self) -> &str {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    /// Description text if present and not blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Raw sum of initial expense amounts, rebates included.
    pub fn net_expenses(&self) -> Decimal {
        self.initial_expenses.iter().map(|expense| expense.amount).sum()
    }
}

/// Category-specific fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetDetails {
    RealEstate(RealEstateDetails),
    SavingsAccount(SavingsAccountDetails),
    TermDeposit(TermDepositDetails),
    CheckingAccount(CheckingAccountDetails),
    PreciousMetal(PreciousMetalDetails),
    Commodity(CommodityDetails),
    PensionPlan(PensionPlanDetails),
}

impl AssetDetails {
    pub const fn category(&self) -> AssetCategory {
        match self {
            AssetDetails::RealEstate(_) => AssetCategory::RealEstate,
            AssetDetails::SavingsAccount(_) => AssetCategory::SavingsAccount,
            AssetDetails::TermDeposit(_) => AssetCategory::TermDeposit,
            AssetDetails::CheckingAccount(_) => AssetCategory::CheckingAccount,
            AssetDetails::PreciousMetal(_) => AssetCategory::PreciousMetal,
            AssetDetails::Commodity(_) => AssetCategory::Commodity,
            AssetDetails::PensionPlan(_) => AssetCategory::PensionPlan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    Land,
}

impl PropertyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "residential",
            PropertyType::Commercial => "commercial",
            PropertyType::Industrial => "industrial",
            PropertyType::Land => "land",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_meters: Option<Decimal>,
    /// Gross annual rental yield, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_yield: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccountDetails {
    pub bank_name: String,
    /// Annual interest rate, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_balance: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositType {
    Fixed,
    Variable,
}

impl DepositType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DepositType::Fixed => "fixed",
            DepositType::Variable => "variable",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDepositDetails {
    pub bank_name: String,
    /// Annual interest rate, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_type: Option<DepositType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckingAccountDetails {
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetalType {
    Gold,
    Silver,
    Platinum,
    Palladium,
}

impl MetalType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetalType::Gold => "gold",
            MetalType::Silver => "silver",
            MetalType::Platinum => "platinum",
            MetalType::Palladium => "palladium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Grams,
    Ounces,
    Kilograms,
}

impl WeightUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Grams => "grams",
            WeightUnit::Ounces => "ounces",
            WeightUnit::Kilograms => "kilograms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetalForm {
    Bar,
    Coin,
    Jewelry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreciousMetalDetails {
    pub metal_type: MetalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    /// Purity, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purity: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<MetalForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommodityType {
    PreciousMetals,
    Energy,
    Agricultural,
    IndustrialMetals,
    Other,
}

impl CommodityType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CommodityType::PreciousMetals => "precious_metals",
            CommodityType::Energy => "energy",
            CommodityType::Agricultural => "agricultural",
            CommodityType::IndustrialMetals => "industrial_metals",
            CommodityType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commodity_type: Option<CommodityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Units per contract; the commodity value is `price * contract_size`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_size: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Individual,
    Employment,
    Associated,
}

impl PlanType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlanType::Individual => "individual",
            PlanType::Employment => "employment",
            PlanType::Associated => "associated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PensionPlanDetails {
    pub plan_type: PlanType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_contribution: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Expected annual return, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Decimal>,
}
