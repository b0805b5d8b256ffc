//! Error banner shown when a fetch fails.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub message: AttrValue,
}

/// Error banner component.
#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <p class="error-notice">{ &props.message }</p>
    }
}
