//! App Router

use salvo::Router;

use crate::{assets, carts, previews};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("preview").post(previews::create::handler))
        .push(Router::with_path("order-asset").post(assets::create::handler))
        .push(
            Router::with_path("carts/{session}")
                .get(carts::get::handler)
                .delete(carts::clear::handler)
                .push(Router::with_path("checkout").post(carts::checkout::handler))
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{item}")
                                .put(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
}
