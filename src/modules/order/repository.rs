use crate::utils::store::{Guarded, Record, Store};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
    /// Anything else a client sent at creation, stored as given.
    #[serde(untagged)]
    Other(Value),
}

impl From<Value> for OrderStatus {
    fn from(value: Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or(OrderStatus::Other(value))
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        match self {
            OrderStatus::Pending => String::from("pending"),
            OrderStatus::Preparing => String::from("preparing"),
            OrderStatus::OutForDelivery => String::from("out-for-delivery"),
            OrderStatus::Delivered => String::from("delivered"),
            OrderStatus::Other(Value::String(status)) => status.clone(),
            OrderStatus::Other(status) => status.to_string(),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// A dish reference as submitted by the client, plus how many were ordered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn is_deletable(order: &Order) -> bool {
    order.status == Some(OrderStatus::Pending)
}

pub fn is_delivered(order: &Order) -> bool {
    order.status == Some(OrderStatus::Delivered)
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<LineItem>,
}

pub type UpdateOrderPayload = CreateOrderPayload;

pub async fn create(store: &Store, payload: CreateOrderPayload) -> Order {
    let order = store
        .orders
        .insert(Order {
            id: Ulid::new().to_string(),
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            status: payload.status,
            dishes: payload.dishes,
        })
        .await;

    tracing::debug!("Stored order {}", order.id);
    order
}

pub async fn find_many(store: &Store) -> Vec<Order> {
    store.orders.all().await
}

pub async fn find_by_id(store: &Store, id: String) -> Option<Order> {
    store.orders.find(&id).await
}

/// Replaces the order unless the stored copy has been delivered in the meantime.
pub async fn update_unless_delivered(
    store: &Store,
    id: String,
    payload: UpdateOrderPayload,
) -> Guarded<Order> {
    store
        .orders
        .replace_if(
            Order {
                id,
                deliver_to: payload.deliver_to,
                mobile_number: payload.mobile_number,
                status: payload.status,
                dishes: payload.dishes,
            },
            |live| !is_delivered(live),
        )
        .await
}

/// Removes the order only if the stored copy is still pending.
pub async fn delete_if_pending(store: &Store, id: String) -> Guarded<Order> {
    store.orders.remove_if(&id, is_deletable).await
}
