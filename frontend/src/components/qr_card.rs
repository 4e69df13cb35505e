use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QrCardProps {
    pub title: AttrValue,
    /// Where the QR code points; the card itself links there too.
    pub url: AttrValue,
    pub qr_src: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub color_class: Classes,
}

#[function_component(QrCard)]
pub fn qr_card(props: &QrCardProps) -> Html {
    html! {
        <a class="qr-card" href={props.url.clone()} target="_blank" rel="noopener noreferrer">
            <h3>{&props.title}</h3>
            <div class="qr-frame">
                <img src={props.qr_src.clone()} alt={format!("{} QR", props.title)} loading="lazy" />
            </div>
            <span class={classes!("qr-label", props.color_class.clone())}>
                {&props.label}
            </span>
        </a>
    }
}
