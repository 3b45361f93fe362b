use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let data = payload.body.into_data();

    let update =
        validation::validate_dish(&data).map_err(response::Error::FailedToValidate)?;
    validation::validate_route_id(&data, &payload.dish.id)
        .map_err(response::Error::FailedToValidate)?;

    let dish = repository::update_by_id(&ctx.store, payload.dish.id.clone(), update)
        .await
        .ok_or_else(|| {
            tracing::error!("Dish {} vanished before it could be updated", payload.dish.id);
            response::Error::DishNotFound(payload.dish.id)
        })?;
    tracing::info!("Dish updated: {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}
