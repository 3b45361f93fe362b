pub mod request {
    use crate::modules::order::repository::Order;

    pub struct Payload {
        pub order: Order,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotPending,
        OrderNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotPending => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "An order cannot be deleted unless it is pending" })),
                )
                    .into_response(),
                Self::OrderNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Order with id {} does not exist", id) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
