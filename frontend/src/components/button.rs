use log::{error, warn};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

/// Opens `url` in a new tab. Failures only end up in the console.
pub fn open_external(url: &str) {
    if let Some(window) = window() {
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => warn!("Browser blocked opening {}", url),
            Err(e) => error!("Failed to open {}: {:?}", url, e),
        }
    } else {
        warn!("No window available to open {}", url);
    }
}

/// Click handler that opens `url` in a new tab.
pub fn open_on_click(url: impl Into<String>) -> Callback<MouseEvent> {
    let url = url.into();
    Callback::from(move |_: MouseEvent| open_external(&url))
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant = if props.primary { "shop-button primary" } else { "shop-button secondary" };

    html! {
        <button class={classes!(variant, props.class.clone())} onclick={props.onclick.clone()}>
            {
                if let Some(icon) = &props.icon {
                    html! { <span class="button-icon">{icon}</span> }
                } else {
                    html! {}
                }
            }
            { for props.children.iter() }
        </button>
    }
}
