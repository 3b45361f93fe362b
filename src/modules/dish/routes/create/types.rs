pub mod request {
    use crate::modules::dish::validation;

    pub type Body = validation::Body;
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationError;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
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
