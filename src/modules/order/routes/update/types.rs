pub mod request {
    use crate::modules::order::{repository::Order, validation};

    pub type Body = validation::Body;

    pub struct Payload {
        pub order: Order,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationError;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationError),
        OrderNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(err) => validation::into_response(err).into_response(),
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
