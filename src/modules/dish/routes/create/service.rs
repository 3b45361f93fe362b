use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, body: request::Body) -> response::Response {
    let payload =
        validation::validate_dish(&body.into_data()).map_err(response::Error::FailedToValidate)?;

    let dish = repository::create(&ctx.store, payload).await;
    tracing::info!("Dish created: {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
