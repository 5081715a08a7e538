use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// Storefront landing page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Shopfront" }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                // Cart card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-6 h-6" />
                            { "My Cart" }
                        </h2>
                        <p>{ "Review the items in your cart and proceed to checkout." }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Cart} classes="btn btn-primary">
                                { "View cart" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>

                // Sign-in card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-6 h-6" />
                            { "Sign in" }
                        </h2>
                        <p>{ "Sign in to your account to see your saved cart." }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-secondary">
                                { "Sign in" }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
