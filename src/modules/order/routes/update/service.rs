use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils::store::Guarded,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let data = payload.body.into_data();

    let update = validation::validate_order(&data).map_err(response::Error::FailedToValidate)?;
    let status = validation::validate_transition(&data, &payload.order)
        .map_err(response::Error::FailedToValidate)?;

    let outcome = repository::update_unless_delivered(
        &ctx.store,
        payload.order.id.clone(),
        repository::UpdateOrderPayload {
            deliver_to: update.deliver_to,
            mobile_number: update.mobile_number,
            status: Some(status.clone()),
            dishes: update.dishes,
        },
    )
    .await;

    match outcome {
        Guarded::Applied(order) => {
            tracing::info!("Order updated: {} ({})", order.id, status.to_string());
            Ok(response::Success::OrderUpdated(order))
        }
        Guarded::Refused(order) => {
            tracing::debug!("Order {} was delivered before the update landed", order.id);
            Err(response::Error::FailedToValidate(validation::delivered_error()))
        }
        Guarded::Missing => {
            tracing::error!("Order {} vanished before it could be updated", payload.order.id);
            Err(response::Error::OrderNotFound(payload.order.id))
        }
    }
}
