//! Cost estimation API endpoints
use api_types::cost::{
    CuttingQuote, CuttingQuoteResponse, EngravingQuote, EngravingQuoteResponse,
};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle quote requests for laser engraving jobs.
pub async fn engraving(
    State(state): State<ServerState>,
    Json(payload): Json<EngravingQuote>,
) -> Result<Json<EngravingQuoteResponse>, ServerError> {
    let breakdown = state.engine.calculate_engraving(
        payload.quantity,
        payload.length,
        payload.width,
        payload.flat_fee,
        payload.flat_fee_amount,
    )?;

    Ok(Json(EngravingQuoteResponse {
        success: true,
        cost: breakdown.total_price,
        breakdown: engraving_view(breakdown),
    }))
}

/// Handle quote requests for laser cutting jobs.
pub async fn cutting(
    State(state): State<ServerState>,
    Json(payload): Json<CuttingQuote>,
) -> Result<Json<CuttingQuoteResponse>, ServerError> {
    let breakdown = state.engine.calculate_cutting(
        payload.quantity,
        payload.total_perimeter,
        payload.cutting_speed,
        payload.flat_fee,
        payload.flat_fee_amount,
    )?;

    Ok(Json(CuttingQuoteResponse {
        success: true,
        cost: breakdown.total_price,
        breakdown: cutting_view(breakdown),
    }))
}

fn engraving_view(breakdown: engine::EngravingBreakdown) -> api_types::cost::EngravingBreakdown {
    api_types::cost::EngravingBreakdown {
        total_area: breakdown.total_area,
        price_per_mark: breakdown.price_per_mark,
        base_price: breakdown.base_price,
        flat_fee_per_piece: breakdown.flat_fee_per_piece,
        vat: breakdown.vat,
        final_price_per_piece: breakdown.final_price_per_piece,
        total_price: breakdown.total_price,
    }
}

fn cutting_view(breakdown: engine::CuttingBreakdown) -> api_types::cost::CuttingBreakdown {
    api_types::cost::CuttingBreakdown {
        seconds: breakdown.seconds,
        minutes: breakdown.minutes,
        rate_per_minute: breakdown.rate_per_minute,
        variable_cutting_cost: breakdown.variable_cutting_cost,
        base_price: breakdown.base_price,
        flat_fee_per_piece: breakdown.flat_fee_per_piece,
        vat: breakdown.vat,
        final_price_per_piece: breakdown.final_price_per_piece,
        total_price: breakdown.total_price,
    }
}
