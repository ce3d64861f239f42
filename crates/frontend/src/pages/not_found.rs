use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! { <h1 class="p-10 text-xl">{ "404 - Page Not Found" }</h1> }
}
