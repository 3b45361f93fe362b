use super::{service::service, types::request};
use crate::{modules::dish::middleware::FoundDish, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    FoundDish(dish): FoundDish,
) -> impl IntoResponse {
    service(ctx, request::Payload { dish }).await
}
