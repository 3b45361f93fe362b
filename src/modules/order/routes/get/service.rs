use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(_: Arc<Context>, payload: request::Payload) -> response::Response {
    response::Success::Order(payload.order)
}
