pub mod request {
    use crate::modules::dish::{repository::Dish, validation};

    pub type Body = validation::Body;

    pub struct Payload {
        pub dish: Dish,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationError;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationError),
        DishNotFound(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(err) => validation::into_response(err).into_response(),
                Self::DishNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("Dish does not exist: {}.", id) })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
