use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    let data = body.into_data();

    let order = validation::validate_order(&data).map_err(response::Error::FailedToValidate)?;
    let status = validation::initial_status(&data);

    let order = repository::create(
        &ctx.store,
        repository::CreateOrderPayload {
            deliver_to: order.deliver_to,
            mobile_number: order.mobile_number,
            status,
            dishes: order.dishes,
        },
    )
    .await;
    tracing::info!("Order created: {}", order.id);

    Ok(response::Success::OrderCreated(order))
}
