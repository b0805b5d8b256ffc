//! Loading spinner component.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Text shown under the spinner.
    #[prop_or_else(|| "Loading...".into())]
    pub message: AttrValue,
}

/// Loading spinner component.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p class="loading-text">{ &props.message }</p>
        </div>
    }
}
