pub mod request {
    use crate::modules::order::validation;

    pub type Body = validation::Body;
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationError;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationError),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(err) => validation::into_response(err).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
