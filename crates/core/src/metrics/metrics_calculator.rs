//! Metrics derivation for manual assets.
//!
//! Each category contributes a base (invested capital before expenses,
//! current value, cashflow, horizon, risk). The aggregate fields are then
//! computed the same way for every category in [`finalize_metrics`].

use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;

use super::metrics_model::{Metrics, RiskLevel};
use crate::assets::{
    AssetDetails, AssetRecord, CheckingAccountDetails, CommodityDetails, PensionPlanDetails,
    RealEstateDetails, SavingsAccountDetails, TermDepositDetails,
};
use crate::constants::{DEFAULT_INFLATION_RATE, DEFAULT_YEARS, MIN_TERM_DEPOSIT_YEARS};
use crate::utils::format_utils::{opt_to_f64, to_f64};
use crate::utils::time_utils::years_until;

/// Per-category inputs to the uniform aggregation step.
#[derive(Debug, Clone, PartialEq)]
struct CategoryBase {
    base_invested: Option<f64>,
    current_value: Option<f64>,
    monthly_cashflow: Option<f64>,
    years: f64,
    risk_level: RiskLevel,
}

/// Derives metrics for an asset as of now.
///
/// Total: every branch has a default, so this never fails.
pub fn derive_metrics(asset: &AssetRecord) -> Metrics {
    derive_metrics_as_of(asset, Utc::now())
}

/// Derives metrics for an asset as of the given instant.
///
/// The instant only matters for term deposits, whose horizon is the time
/// left until maturity.
pub fn derive_metrics_as_of(asset: &AssetRecord, now: DateTime<Utc>) -> Metrics {
    let expenses_total = expenses_total(asset);
    let price = opt_to_f64(asset.price);
    let purchase_price = opt_to_f64(asset.purchase_price);

    let base = match &asset.details {
        AssetDetails::RealEstate(details) => real_estate_base(details, price, purchase_price),
        AssetDetails::SavingsAccount(details) => savings_account_base(details, price),
        AssetDetails::TermDeposit(details) => term_deposit_base(details, now),
        AssetDetails::CheckingAccount(details) => checking_account_base(details),
        AssetDetails::PreciousMetal(_) => CategoryBase {
            base_invested: purchase_price.or(price),
            current_value: price.or(purchase_price),
            monthly_cashflow: None,
            years: 4.0,
            risk_level: RiskLevel::Medium,
        },
        AssetDetails::Commodity(details) => commodity_base(details, price, purchase_price),
        AssetDetails::PensionPlan(details) => pension_plan_base(details, price),
    };

    debug!(
        "Derived {} base for asset {}: {:?}",
        asset.category().as_str(),
        asset.id,
        base
    );

    finalize_metrics(
        asset.currency_or_default().to_string(),
        expenses_total,
        base,
    )
}

/// Sum of initial expenses. Rebates (negative entries) offset other costs,
/// and the net total is floored at zero.
fn expenses_total(asset: &AssetRecord) -> f64 {
    to_f64(asset.net_expenses().max(Decimal::ZERO))
}

fn real_estate_base(
    details: &RealEstateDetails,
    price: Option<f64>,
    purchase_price: Option<f64>,
) -> CategoryBase {
    let current_value = price.or(purchase_price);
    let monthly_cashflow = current_value
        .zip(opt_to_f64(details.rental_yield))
        .map(|(value, rental_yield)| value * rental_yield / 100.0 / 12.0);

    CategoryBase {
        base_invested: purchase_price.or(price),
        current_value,
        monthly_cashflow,
        years: 5.0,
        risk_level: RiskLevel::Medium,
    }
}

fn savings_account_base(details: &SavingsAccountDetails, price: Option<f64>) -> CategoryBase {
    let amount = opt_to_f64(details.initial_amount).or(price).unwrap_or(0.0);
    let monthly_cashflow =
        opt_to_f64(details.interest_rate).map(|rate| amount * rate / 100.0 / 12.0);

    CategoryBase {
        base_invested: Some(amount),
        current_value: Some(amount),
        monthly_cashflow,
        years: 1.0,
        risk_level: RiskLevel::Low,
    }
}

/// Simple (not compound) interest over the remaining term.
fn term_deposit_base(details: &TermDepositDetails, now: DateTime<Utc>) -> CategoryBase {
    let principal = opt_to_f64(details.initial_amount).unwrap_or(0.0);
    let rate = opt_to_f64(details.interest_rate).unwrap_or(0.0);
    let years = details
        .maturity_date
        .map(|maturity| years_until(now, maturity).max(MIN_TERM_DEPOSIT_YEARS))
        .unwrap_or(DEFAULT_YEARS);

    CategoryBase {
        base_invested: Some(principal),
        current_value: Some(principal * (1.0 + rate / 100.0 * years)),
        monthly_cashflow: Some(principal * rate / 100.0 / 12.0),
        years,
        risk_level: RiskLevel::Low,
    }
}

fn checking_account_base(details: &CheckingAccountDetails) -> CategoryBase {
    let balance = opt_to_f64(details.balance).unwrap_or(0.0);
    CategoryBase {
        base_invested: Some(balance),
        current_value: Some(balance),
        monthly_cashflow: None,
        years: 0.5,
        risk_level: RiskLevel::Low,
    }
}

fn commodity_base(
    details: &CommodityDetails,
    price: Option<f64>,
    purchase_price: Option<f64>,
) -> CategoryBase {
    let quantity = opt_to_f64(details.contract_size).unwrap_or(1.0);
    let market_value = price.map(|p| p * quantity);

    CategoryBase {
        base_invested: purchase_price.or(market_value),
        current_value: market_value.or(purchase_price),
        monthly_cashflow: None,
        years: 2.0,
        risk_level: RiskLevel::Medium,
    }
}

fn pension_plan_base(details: &PensionPlanDetails, price: Option<f64>) -> CategoryBase {
    let annual_contribution = opt_to_f64(details.annual_contribution);
    let base_invested = annual_contribution.map(|c| c * 3.0).or(price);

    CategoryBase {
        base_invested,
        current_value: price.or(base_invested),
        monthly_cashflow: annual_contribution.map(|c| c / 12.0),
        years: 10.0,
        risk_level: RiskLevel::Medium,
    }
}

/// Uniform aggregation shared by every category.
fn finalize_metrics(currency: String, expenses_total: f64, base: CategoryBase) -> Metrics {
    let inflation_rate = DEFAULT_INFLATION_RATE;
    let base_invested = finite(base.base_invested);
    let current_value = finite(base.current_value);

    let invested = if base_invested.is_some() || current_value.is_some() {
        finite(Some(
            base_invested.or(current_value).unwrap_or(0.0) + expenses_total,
        ))
    } else {
        None
    };

    let gain_loss = finite(
        invested
            .zip(current_value)
            .map(|(invested, current)| current - invested),
    );

    let roi_percent = finite(
        gain_loss
            .zip(invested)
            .filter(|(_, invested)| *invested != 0.0)
            .map(|(gain, invested)| gain / invested * 100.0),
    );

    let inflation_target =
        finite(invested.map(|invested| invested * (1.0 + inflation_rate).powf(base.years)));

    let inflation_gap_percent = finite(
        current_value
            .zip(inflation_target)
            .filter(|(_, target)| *target != 0.0)
            .map(|(current, target)| (current - target) / target * 100.0),
    );

    Metrics {
        currency,
        invested,
        base_invested,
        expenses_total,
        current_value,
        gain_loss,
        roi_percent,
        monthly_cashflow: finite(base.monthly_cashflow),
        inflation_rate,
        years: base.years,
        inflation_target,
        inflation_gap_percent,
        risk_level: base.risk_level,
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
