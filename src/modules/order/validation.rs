use super::repository::{is_delivered, LineItem, Order, OrderStatus};
use crate::utils::validation::{error, is_falsy, mismatched_id, positive_integer, required_text};
use serde::Deserialize;
use serde_json::Value;
use validator::ValidationError;

const INVALID_STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed";

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

#[derive(Deserialize)]
pub struct Body {
    #[serde(default)]
    pub data: Option<OrderData>,
}

impl Body {
    pub fn into_data(self) -> OrderData {
        self.data.unwrap_or_default()
    }
}

pub struct ValidOrder {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<LineItem>,
}

fn line_item(index: usize, item: &Value) -> Result<LineItem, ValidationError> {
    let invalid = || {
        error(
            "INVALID_DISH_QUANTITY",
            format!(
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ),
        )
    };

    let Value::Object(fields) = item else {
        return Err(invalid());
    };
    let quantity = fields
        .get("quantity")
        .and_then(positive_integer)
        .ok_or_else(invalid)?;

    let mut dish = fields.clone();
    dish.remove("quantity");

    Ok(LineItem { dish, quantity })
}

pub fn validate_quantities(items: &[Value]) -> Result<Vec<LineItem>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| line_item(index, item))
        .collect()
}

fn validate_dishes(dishes: Option<&Value>) -> Result<Vec<LineItem>, ValidationError> {
    let dishes = dishes
        .filter(|dishes| !is_falsy(dishes))
        .ok_or_else(|| error("ORDER_DISH_REQUIRED", "Order must include a dish"))?;

    match dishes {
        Value::Array(items) if !items.is_empty() => validate_quantities(items),
        _ => Err(error(
            "ORDER_DISHES_EMPTY",
            "Order must include at least one dish",
        )),
    }
}

/// Checks the delivery fields, then the line items; the first failure wins.
pub fn validate_order(data: &OrderData) -> Result<ValidOrder, ValidationError> {
    let deliver_to = required_text(
        data.deliver_to.as_ref(),
        "ORDER_DELIVER_TO_REQUIRED",
        "Order must include a deliverTo",
    )?;
    let mobile_number = required_text(
        data.mobile_number.as_ref(),
        "ORDER_MOBILE_NUMBER_REQUIRED",
        "Order must include a mobileNumber",
    )?;
    let dishes = validate_dishes(data.dishes.as_ref())?;

    Ok(ValidOrder {
        deliver_to,
        mobile_number,
        dishes,
    })
}

fn parse_status(status: Option<&Value>) -> Option<OrderStatus> {
    match status {
        Some(Value::String(status)) => status.parse().ok(),
        _ => None,
    }
}

/// Creation stores whatever status the caller sent; transitions are only checked on update.
pub fn initial_status(data: &OrderData) -> Option<OrderStatus> {
    data.status
        .clone()
        .filter(|status| !status.is_null())
        .map(OrderStatus::from)
}

pub fn delivered_error() -> ValidationError {
    error("ORDER_DELIVERED", DELIVERED_MESSAGE)
}

pub fn validate_transition(data: &OrderData, current: &Order) -> Result<OrderStatus, ValidationError> {
    if let Some(id) = mismatched_id(data.id.as_ref(), &current.id) {
        return Err(error(
            "ORDER_ID_MISMATCH",
            format!(
                "Order id does not match route id. Order: {}, Route: {}",
                id, current.id
            ),
        ));
    }

    match parse_status(data.status.as_ref()) {
        Some(OrderStatus::Delivered) => Err(delivered_error()),
        None => Err(error("INVALID_ORDER_STATUS", INVALID_STATUS_MESSAGE)),
        Some(_) if is_delivered(current) => Err(delivered_error()),
        Some(status) => Ok(status),
    }
}
