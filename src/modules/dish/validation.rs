use super::repository::CreateDishPayload;
use crate::utils::validation::{error, is_falsy, mismatched_id, positive_integer, required_text};
use serde::Deserialize;
use serde_json::Value;
use validator::ValidationError;

#[derive(Deserialize, Default)]
pub struct DishData {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

#[derive(Deserialize)]
pub struct Body {
    #[serde(default)]
    pub data: Option<DishData>,
}

impl Body {
    pub fn into_data(self) -> DishData {
        self.data.unwrap_or_default()
    }
}

fn validate_price(price: Option<&Value>) -> Result<u64, ValidationError> {
    let price = price
        .filter(|price| !is_falsy(price))
        .ok_or_else(|| error("DISH_PRICE_REQUIRED", "Dish must include a price"))?;

    positive_integer(price).ok_or_else(|| {
        error(
            "INVALID_DISH_PRICE",
            "Dish must have a price that is an integer greater than 0",
        )
    })
}

/// Checks every dish field in order, stopping at the first failure.
pub fn validate_dish(data: &DishData) -> Result<CreateDishPayload, ValidationError> {
    let name = required_text(
        data.name.as_ref(),
        "DISH_NAME_REQUIRED",
        "Dish must include a name",
    )?;
    let description = required_text(
        data.description.as_ref(),
        "DISH_DESCRIPTION_REQUIRED",
        "Dish must include a description",
    )?;
    let price = validate_price(data.price.as_ref())?;
    let image_url = required_text(
        data.image_url.as_ref(),
        "DISH_IMAGE_URL_REQUIRED",
        "Dish must include a image_url",
    )?;

    Ok(CreateDishPayload {
        name,
        description,
        price,
        image_url,
    })
}

pub fn validate_route_id(data: &DishData, route_id: &str) -> Result<(), ValidationError> {
    match mismatched_id(data.id.as_ref(), route_id) {
        Some(id) => Err(error(
            "DISH_ID_MISMATCH",
            format!(
                "Dish id does not match route id. Dish: {}, Route: {}.",
                id, route_id
            ),
        )),
        None => Ok(()),
    }
}
