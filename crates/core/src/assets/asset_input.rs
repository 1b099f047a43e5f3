//! Reading asset records from JSON documents.

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::assets_model::AssetRecord;
use crate::errors::{Result, ValidationError};

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetInput {
    Many(Vec<AssetRecord>),
    One(Box<AssetRecord>),
}

/// Parses a JSON document holding either one asset object or an array of them.
pub fn parse_asset_records(json: &str) -> Result<Vec<AssetRecord>> {
    let records = match serde_json::from_str::<AssetInput>(json) {
        Ok(AssetInput::Many(records)) => records,
        Ok(AssetInput::One(record)) => vec![*record],
        // Untagged errors are vague; retry as a single record for a precise message.
        Err(_) => vec![serde_json::from_str::<AssetRecord>(json)?],
    };

    for record in &records {
        validate_record(record)?;
    }
    debug!("Parsed {} asset record(s)", records.len());
    Ok(records)
}

/// Checks the fields every report needs.
pub fn validate_record(record: &AssetRecord) -> Result<()> {
    if record.id.trim().is_empty() {
        return Err(ValidationError::MissingField("id".to_string()).into());
    }
    if record.name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    let net_expenses = record.net_expenses();
    if net_expenses < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "initial expenses of '{}' sum to {}, rebates cannot exceed costs",
            record.id, net_expenses
        ))
        .into());
    }
    Ok(())
}
