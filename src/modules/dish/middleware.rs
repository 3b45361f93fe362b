use super::repository::{self, Dish};
use crate::types::Context;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, RequestPartsExt,
};
use serde_json::json;
use std::sync::Arc;

/// The dish addressed by the `:dish_id` route segment.
pub struct FoundDish(pub Dish);

#[async_trait]
impl FromRequestParts<Arc<Context>> for FoundDish {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = parts
            .extract::<Path<String>>()
            .await
            .map_err(IntoResponse::into_response)?;

        repository::find_by_id(&ctx.store, id.clone())
            .await
            .map(Self)
            .ok_or_else(|| {
                tracing::debug!("Dish lookup missed: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Dish does not exist: {}.", id) })),
                )
                    .into_response()
            })
    }
}
