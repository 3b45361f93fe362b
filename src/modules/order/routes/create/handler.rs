use super::{service::service, types::request};
use crate::{types::Context, utils::validation::InvalidJson};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    WithRejection(Json(body), _): WithRejection<Json<request::Body>, InvalidJson>,
) -> impl IntoResponse {
    service(ctx, body).await
}
