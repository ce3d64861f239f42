//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-emerald-500 rounded-full animate-spin mb-4"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm m-0">{text}</p>
            }
        </div>
    }
}
