//! Assets module - manual asset records, input parsing and info rows.

mod asset_info;
mod asset_input;
mod assets_model;


// Re-export the public interface
pub use asset_info::{build_info_rows, InfoRow};
pub use asset_input::{parse_asset_records, validate_record};
pub use assets_model::{
    AssetCategory, AssetDetails, AssetRecord, CheckingAccountDetails, CommodityDetails,
    CommodityType, DepositType, InitialExpense, MetalForm, MetalType, PensionPlanDetails,
    PlanType, PreciousMetalDetails, PropertyType, RealEstateDetails, SavingsAccountDetails,
    TermDepositDetails, WeightUnit,
};
