mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::{types::Context, utils::fallback::method_not_allowed};
use axum::routing::{get, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            post(create::handler)
                .get(list::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:order_id",
            get(get::handler)
                .put(update::handler)
                .delete(delete::handler)
                .fallback(method_not_allowed),
        )
}
