use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="text-center my-3" role="status">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="sr-only">{"Loading..."}</span>
        </div>
    }
}
