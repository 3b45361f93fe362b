use super::types::{request, response};
use crate::{modules::order::repository, types::Context, utils::store::Guarded};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match repository::delete_if_pending(&ctx.store, payload.order.id.clone()).await {
        Guarded::Applied(order) => {
            tracing::info!("Order deleted: {}", order.id);
            Ok(response::Success::OrderDeleted)
        }
        Guarded::Refused(order) => {
            tracing::debug!("Order {} is no longer pending", order.id);
            Err(response::Error::OrderNotPending)
        }
        Guarded::Missing => Err(response::Error::OrderNotFound(payload.order.id)),
    }
}
