//! End-to-end tests driving the full router with in-memory requests.

use crate::{app::App, types::Context};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> Router {
    App::new(Arc::new(Context::for_tests())).router()
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn taco() -> Value {
    json!({
        "data": {
            "name": "Taco",
            "description": "Spicy",
            "price": 5,
            "image_url": "http://x"
        }
    })
}

fn order(status: &str) -> Value {
    json!({
        "data": {
            "deliverTo": "1 Main St",
            "mobileNumber": "555-0100",
            "status": status,
            "dishes": [{ "id": "d1", "name": "Taco", "price": 5, "quantity": 2 }]
        }
    })
}

async fn create_order(router: &Router, status: &str) -> String {
    let (code, body) = send(router, Method::POST, "/orders", Some(order(status))).await;
    assert_eq!(code, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_dish_returns_the_stored_record() {
    let router = router();

    let (status, body) = send(&router, Method::POST, "/dishes", Some(taco())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], json!(5));
    assert!(body["data"]["id"].is_string());

    let (status, list) = send(&router, Method::GET, "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["data"], json!([body["data"]]));
}

#[tokio::test]
async fn create_dish_with_negative_price_is_rejected() {
    let router = router();
    let mut dish = taco();
    dish["data"]["price"] = json!(-1);

    let (status, body) = send(&router, Method::POST, "/dishes", Some(dish)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Dish must have a price that is an integer greater than 0")
    );

    let (_, list) = send(&router, Method::GET, "/dishes", None).await;
    assert_eq!(list["data"], json!([]));
}

#[tokio::test]
async fn create_dish_without_data_asks_for_a_name() {
    let (status, body) = send(&router(), Method::POST, "/dishes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Dish must include a name"));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/dishes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn read_and_update_dish() {
    let router = router();
    let (_, created) = send(&router, Method::POST, "/dishes", Some(taco())).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, read) = send(&router, Method::GET, &format!("/dishes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["data"], created["data"]);

    let mut update = taco();
    update["data"]["name"] = json!("Burrito");
    update["data"]["id"] = json!(id);
    let (status, updated) = send(&router, Method::PUT, &format!("/dishes/{id}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["name"], json!("Burrito"));
    assert_eq!(updated["data"]["id"], json!(id));

    let (_, list) = send(&router, Method::GET, "/dishes", None).await;
    assert_eq!(list["data"], json!([updated["data"]]));
}

#[tokio::test]
async fn update_dish_with_mismatched_id_is_rejected() {
    let router = router();
    let (_, created) = send(&router, Method::POST, "/dishes", Some(taco())).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let mut update = taco();
    update["data"]["id"] = json!("nope");
    let (status, body) = send(&router, Method::PUT, &format!("/dishes/{id}"), Some(update)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!(format!("Dish id does not match route id. Dish: nope, Route: {id}."))
    );
}

#[tokio::test]
async fn unknown_dish_is_not_found() {
    let router = router();

    let (status, body) = send(&router, Method::GET, "/dishes/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Dish does not exist: missing."));

    let (status, _) = send(&router, Method::PUT, "/dishes/missing", Some(taco())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let (status, body) = send(&router(), Method::DELETE, "/dishes/anything", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], json!("DELETE not allowed for /dishes/anything"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let (status, body) = send(&router(), Method::GET, "/menus", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Path not found: /menus"));

    let (status, body) = send(&router(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Path not found: /"));
}

#[tokio::test]
async fn list_is_stable_without_writes() {
    let router = router();
    create_order(&router, "pending").await;
    create_order(&router, "preparing").await;

    let (_, first) = send(&router, Method::GET, "/orders", None).await;
    let (_, second) = send(&router, Method::GET, "/orders", None).await;

    assert_eq!(first["data"].as_array().unwrap().len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn read_order_and_unknown_order() {
    let router = router();
    let id = create_order(&router, "pending").await;

    let (status, body) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deliverTo"], json!("1 Main St"));
    assert_eq!(body["data"]["dishes"][0]["quantity"], json!(2));

    let (status, body) = send(&router, Method::GET, "/orders/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Order with id missing does not exist"));
}

#[tokio::test]
async fn create_order_with_empty_dishes_is_rejected() {
    let mut body = order("pending");
    body["data"]["dishes"] = json!([]);

    let (status, body) = send(&router(), Method::POST, "/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Order must include at least one dish"));
}

#[tokio::test]
async fn update_order_to_delivered_is_rejected() {
    let router = router();
    let id = create_order(&router, "out-for-delivery").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(order("delivered")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("A delivered order cannot be changed"));
}

#[tokio::test]
async fn update_order_persists_the_new_status() {
    let router = router();
    let id = create_order(&router, "pending").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(order("preparing")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["status"], json!("preparing"));

    let (_, read) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(read["data"]["status"], json!("preparing"));
}

#[tokio::test]
async fn update_order_with_invalid_status_lists_the_options() {
    let router = router();
    let id = create_order(&router, "pending").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(order("lost")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Order must have a status of pending, preparing, out-for-delivery, delivered")
    );
}

#[tokio::test]
async fn delete_of_preparing_order_is_rejected() {
    let router = router();
    let id = create_order(&router, "preparing").await;

    let (status, body) = send(&router, Method::DELETE, &format!("/orders/{id}"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("An order cannot be deleted unless it is pending")
    );
}

#[tokio::test]
async fn delete_of_pending_order_has_no_content() {
    let router = router();
    let id = create_order(&router, "pending").await;

    let (status, body) = send(&router, Method::DELETE, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_and_delete_of_unknown_order_are_not_found() {
    let router = router();

    let (status, body) = send(&router, Method::PUT, "/orders/missing", Some(order("pending"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Order with id missing does not exist"));

    let (status, body) = send(&router, Method::DELETE, "/orders/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Order with id missing does not exist"));
}

#[tokio::test]
async fn update_order_with_mismatched_id_is_rejected() {
    let router = router();
    let id = create_order(&router, "pending").await;

    let mut update = order("preparing");
    update["data"]["id"] = json!("nope");
    let (status, body) = send(&router, Method::PUT, &format!("/orders/{id}"), Some(update)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!(format!("Order id does not match route id. Order: nope, Route: {id}"))
    );

    let (_, read) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(read["data"]["status"], json!("pending"));
}

#[tokio::test]
async fn delivered_order_cannot_go_back_to_pending() {
    let router = router();
    let id = create_order(&router, "delivered").await;

    let (status, body) = send(
        &router,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(order("pending")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("A delivered order cannot be changed"));

    let (_, read) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(read["data"]["status"], json!("delivered"));
}

#[tokio::test]
async fn create_order_keeps_the_status_it_was_given() {
    let router = router();

    let (status, body) = send(&router, Method::POST, "/orders", Some(order("lost"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], json!("lost"));

    let mut without_status = order("pending");
    without_status["data"].as_object_mut().unwrap().remove("status");
    let (status, body) = send(&router, Method::POST, "/orders", Some(without_status)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"].get("status").is_none());
}

#[tokio::test]
async fn order_without_a_status_cannot_be_deleted() {
    let router = router();
    let mut without_status = order("pending");
    without_status["data"].as_object_mut().unwrap().remove("status");
    let (_, created) = send(&router, Method::POST, "/orders", Some(without_status)).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&router, Method::DELETE, &format!("/orders/{id}"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("An order cannot be deleted unless it is pending")
    );
}

#[tokio::test]
async fn delete_sees_a_status_change_made_after_the_order_was_read() {
    let router = router();
    let id = create_order(&router, "pending").await;
    let (_, before) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(before["data"]["status"], json!("pending"));

    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("/orders/{id}"),
        Some(order("preparing")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, Method::DELETE, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("An order cannot be deleted unless it is pending")
    );

    let (status, _) = send(&router, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}
