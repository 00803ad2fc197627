//! Material catalog API endpoints
use api_types::materials::{MaterialView, MaterialsResponse};
use axum::{Json, extract::State};
use engine::Material;

use crate::server::ServerState;

/// Handle requests for listing the material catalog.
pub async fn list(State(state): State<ServerState>) -> Json<MaterialsResponse> {
    let materials = state
        .engine
        .list_materials()
        .iter()
        .enumerate()
        .map(|(index, material)| material_view(index, material))
        .collect();

    Json(MaterialsResponse {
        success: true,
        materials,
    })
}

fn material_view(index: usize, material: &Material) -> MaterialView {
    // Product names embed the sheet thickness ("Clear Acrylic - 3mm").
    let thickness = material
        .product
        .rsplit_once(" - ")
        .map(|(_, thickness)| thickness.to_string());

    MaterialView {
        id: index as u32 + 1,
        name: material.product.clone(),
        kind: material.category.clone(),
        thickness,
        price: material.price_per_sq_in,
    }
}
