use std::cell::Cell;
use std::rc::Rc;

use shared::models::{CartFetchError, CartLine, format_price};
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, Properties, function_component, html, use_effect_with, use_state};

use crate::api::ShopClient;
use crate::auth::Credentials;
use crate::components::loading::Loading;

/// The mutually exclusive rendering modes of the cart view.
#[derive(Debug, Clone, PartialEq)]
pub enum CartViewState {
    Loading,
    Failed(String),
    Loaded(Vec<CartLine>),
}

#[derive(Properties, PartialEq)]
pub struct CartViewProps {
    /// Read-only source of the bearer token.
    pub credentials: Credentials,
    /// Invoked on checkout. Without one the placeholder browser alert is
    /// shown instead; real checkout is out of scope either way.
    #[prop_or_default]
    pub on_checkout: Option<Callback<()>>,
}

/// Gate run before any network traffic: a missing credential is a terminal
/// precondition failure, not a fetch error.
fn fetch_precondition(credentials: &Credentials) -> Result<String, CartFetchError> {
    credentials.token().ok_or(CartFetchError::MissingCredentials)
}

/// Map the fetch outcome to its terminal view state. Loading is never an
/// outcome: the Loading -> Failed | Loaded transition is one-shot and the
/// view never reverts within a mount.
fn settle(outcome: Result<Vec<CartLine>, CartFetchError>) -> CartViewState {
    match outcome {
        Ok(lines) => CartViewState::Loaded(lines),
        Err(err) => CartViewState::Failed(err.to_string()),
    }
}

fn cart_row(line: &CartLine) -> Html {
    html! {
        <li class="p-3 flex justify-between">
            <div>
                <div class="font-medium">{ line.product.name.clone() }</div>
                <div class="text-sm text-base-content/70">
                    { format!("Quantity: {}", line.quantity) }
                </div>
                <div class="text-sm text-base-content/70">
                    { format!("Price: ${}", format_price(line.product.price)) }
                </div>
            </div>
            <div class="text-end">
                { format!("Total: ${}", format_price(line.line_total())) }
            </div>
        </li>
    }
}

/// Renders the current user's cart and a checkout trigger.
///
/// Fetches the cart exactly once per mount. A response that arrives after
/// unmount is dropped: the alive flag is cleared in the effect cleanup and
/// checked before the terminal state update.
#[function_component(CartView)]
pub fn cart_view(props: &CartViewProps) -> Html {
    let state = use_state(|| CartViewState::Loading);

    {
        let state = state.clone();
        let credentials = props.credentials.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            match fetch_precondition(&credentials) {
                Err(err) => state.set(CartViewState::Failed(err.to_string())),
                Ok(token) => {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let client = ShopClient::shared();
                        let next = settle(client.fetch_cart(&token).await);
                        if alive.get() {
                            state.set(next);
                        }
                    });
                }
            }
            move || alive.set(false)
        });
    }

    let on_checkout = {
        let callback = props.on_checkout.clone();
        Callback::from(move |_| match &callback {
            Some(callback) => callback.emit(()),
            None => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Proceeding to checkout...");
                }
            }
        })
    };

    match &*state {
        CartViewState::Loading => html! { <Loading /> },
        CartViewState::Failed(message) => html! {
            <div class="alert alert-error my-3">
                <span>{ message.clone() }</span>
            </div>
        },
        CartViewState::Loaded(lines) => html! {
            <>
                if lines.is_empty() {
                    <div class="alert alert-info my-3">{"Your cart is empty."}</div>
                } else {
                    <ul class="divide-y divide-base-300 mb-3">
                        { for lines.iter().map(cart_row) }
                    </ul>
                }
                <button
                    class="btn btn-primary"
                    type="button"
                    onclick={on_checkout}
                    disabled={lines.is_empty()}
                >
                    {"Proceed to Checkout"}
                </button>
            </>
        },
    }
}
