//! App Router

use salvo::Router;

use crate::{healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("product")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{sku}")
                        .get(products::get::handler)
                        .patch(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
