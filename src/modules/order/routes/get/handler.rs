use super::{service::service, types::request};
use crate::{modules::order::middleware::FoundOrder, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    FoundOrder(order): FoundOrder,
) -> impl IntoResponse {
    service(ctx, request::Payload { order }).await
}
