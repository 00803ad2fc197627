use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod cost {
    use super::*;

    /// Request body for an engraving quote.
    ///
    /// `flatFee`/`flatFeeAmount` may be omitted and default to "no fee".
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EngravingQuote {
        pub quantity: u32,
        pub length: Decimal,
        pub width: Decimal,
        #[serde(default)]
        pub flat_fee: bool,
        #[serde(default)]
        pub flat_fee_amount: Decimal,
    }

    /// Request body for a cutting quote.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CuttingQuote {
        pub quantity: u32,
        /// Sent by clients alongside the perimeter; the cutting price is
        /// time-based and does not use it.
        #[serde(default)]
        pub total_area: Option<Decimal>,
        pub total_perimeter: Decimal,
        pub cutting_speed: Decimal,
        #[serde(default)]
        pub flat_fee: bool,
        #[serde(default)]
        pub flat_fee_amount: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EngravingBreakdown {
        pub total_area: Decimal,
        pub price_per_mark: Decimal,
        pub base_price: Decimal,
        pub flat_fee_per_piece: Decimal,
        pub vat: Decimal,
        pub final_price_per_piece: Decimal,
        pub total_price: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CuttingBreakdown {
        pub seconds: Decimal,
        pub minutes: Decimal,
        pub rate_per_minute: Decimal,
        pub variable_cutting_cost: Decimal,
        pub base_price: Decimal,
        pub flat_fee_per_piece: Decimal,
        pub vat: Decimal,
        pub final_price_per_piece: Decimal,
        pub total_price: Decimal,
    }

    /// Response body for an engraving quote.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EngravingQuoteResponse {
        pub success: bool,
        /// Total price for the whole job (quantity included).
        pub cost: Decimal,
        pub breakdown: EngravingBreakdown,
    }

    /// Response body for a cutting quote.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CuttingQuoteResponse {
        pub success: bool,
        /// Total price for the whole job (quantity included).
        pub cost: Decimal,
        pub breakdown: CuttingBreakdown,
    }
}

pub mod materials {
    use super::*;

    /// One catalog entry as shown to clients.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MaterialView {
        /// 1-based catalog position.
        pub id: u32,
        pub name: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub thickness: Option<String>,
        pub price: Decimal,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MaterialsResponse {
        pub success: bool,
        pub materials: Vec<MaterialView>,
    }
}

pub mod error {
    use super::*;

    /// Error envelope returned by every route on failure.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ErrorResponse {
        pub success: bool,
        pub error: String,
    }
}
