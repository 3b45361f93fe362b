use super::repository::{self, Order};
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

/// The order addressed by the `:order_id` route segment.
pub struct FoundOrder(pub Order);

#[async_trait]
impl FromRequestParts<Arc<Context>> for FoundOrder {
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
                tracing::debug!("Order lookup missed: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Order with id {} does not exist", id) })),
                )
                    .into_response()
            })
    }
}
