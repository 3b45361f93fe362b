use crate::utils::store::{Record, Store};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub type UpdateDishPayload = CreateDishPayload;

pub async fn create(store: &Store, payload: CreateDishPayload) -> Dish {
    let dish = store
        .dishes
        .insert(Dish {
            id: Ulid::new().to_string(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        })
        .await;

    tracing::debug!("Stored dish {}", dish.id);
    dish
}

pub async fn find_many(store: &Store) -> Vec<Dish> {
    store.dishes.all().await
}

pub async fn find_by_id(store: &Store, id: String) -> Option<Dish> {
    store.dishes.find(&id).await
}

pub async fn update_by_id(store: &Store, id: String, payload: UpdateDishPayload) -> Option<Dish> {
    store
        .dishes
        .replace(Dish {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        })
        .await
}
