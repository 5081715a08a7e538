use yew::{Html, function_component, html, use_state};

use crate::auth::Credentials;
use crate::components::CartView;

/// Cart page component.
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    // One credentials handle per mount keeps the view's props stable.
    let credentials = use_state(Credentials::browser);

    html! {
        <div class="container mx-auto mt-5 p-4 max-w-2xl">
            <h2 class="text-2xl font-bold mb-4">{"My Cart"}</h2>
            <CartView credentials={(*credentials).clone()} />
        </div>
    }
}
