//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storyloom::{
    cart::{Cart, NewCartItem},
    pricing::{self, PricingRules},
};
use storyloom_app::{
    context::AppContext,
    domain::{
        assets::{MockPrintAssetsService, PrintAssetsService},
        carts::{CartView, CartsService, MockCartsService},
        previews::{
            MockPreviewService, PAGE_HEIGHT, PAGE_WIDTH, PREVIEW_TTL, PreviewPage,
            PreviewResponse, PreviewService,
        },
    },
};

use crate::state::State;

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_update_quantity().never();
    carts.expect_clear().never();
    carts.expect_validate_checkout().never();

    carts
}

fn strict_previews_mock() -> MockPreviewService {
    let mut previews = MockPreviewService::new();

    previews.expect_generate().never();

    previews
}

fn strict_assets_mock() -> MockPrintAssetsService {
    let mut assets = MockPrintAssetsService::new();

    assets.expect_create().never();

    assets
}

fn make_state(
    carts: Arc<dyn CartsService>,
    previews: Arc<dyn PreviewService>,
    print_assets: Arc<dyn PrintAssetsService>,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        carts,
        previews,
        print_assets,
    }))
}

fn make_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// A service with the given carts mock; other services reject every call.
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    make_service(
        make_state(
            Arc::new(carts),
            Arc::new(strict_previews_mock()),
            Arc::new(strict_assets_mock()),
        ),
        route,
    )
}

/// A service with the given previews mock; other services reject every call.
pub(crate) fn previews_service(previews: MockPreviewService, route: Router) -> Service {
    make_service(
        make_state(
            Arc::new(strict_carts_mock()),
            Arc::new(previews),
            Arc::new(strict_assets_mock()),
        ),
        route,
    )
}

/// A service with the given assets mock; other services reject every call.
pub(crate) fn assets_service(assets: MockPrintAssetsService, route: Router) -> Service {
    make_service(
        make_state(
            Arc::new(strict_carts_mock()),
            Arc::new(strict_previews_mock()),
            Arc::new(assets),
        ),
        route,
    )
}

/// An empty cart with derived totals.
pub(crate) fn make_cart_view() -> CartView {
    make_view_with_items(&[])
}

/// A cart holding the given lines, with totals derived under default rules.
pub(crate) fn make_view_with_items(items: &[NewCartItem]) -> CartView {
    let mut cart = Cart::new(Uuid::now_v7(), "USD", Timestamp::UNIX_EPOCH);

    for item in items {
        cart.add_item(item.clone(), Timestamp::UNIX_EPOCH);
    }

    let totals = pricing::totals(&PricingRules::default(), &cart.items);

    CartView { cart, totals }
}

/// A preview response with the given number of placeholder pages.
pub(crate) fn make_preview(pages: u32) -> PreviewResponse {
    PreviewResponse {
        pages: (1..=pages)
            .map(|page_number| PreviewPage {
                page_number,
                image_url: format!("https://img.test/{page_number}"),
                thumbnail_url: format!("https://thumb.test/{page_number}"),
                width: PAGE_WIDTH,
                height: PAGE_HEIGHT,
            })
            .collect(),
        asset_id: Uuid::now_v7(),
        expires_at: Timestamp::UNIX_EPOCH
            .saturating_add(PREVIEW_TTL)
            .expect("PREVIEW_TTL is a fixed hours-based duration and cannot fail span arithmetic"),
    }
}
