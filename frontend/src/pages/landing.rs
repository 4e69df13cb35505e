use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::components::button::{open_on_click, Button};
use crate::components::qr_card::QrCard;
use crate::config::ShopConfig;
use crate::links::ShopLinks;

const HERO_ENTER_DELAY_MS: u32 = 80;
// Fraction of the viewport a section's top edge must cross to fade in.
const REVEAL_THRESHOLD: f64 = 0.88;

pub fn is_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

fn reveal_visible_sections(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let nodes = match document.query_selector_all(".reveal:not(.visible)") {
        Ok(nodes) => nodes,
        Err(e) => {
            warn!("Failed to query reveal sections: {:?}", e);
            return;
        }
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            if is_revealed(element.get_bounding_client_rect().top(), viewport_height) {
                if let Err(e) = element.class_list().add_1("visible") {
                    warn!("Failed to reveal section: {:?}", e);
                }
            }
        }
    }
}

/// Fades `.reveal` sections in as they scroll into view.
#[hook]
pub fn use_scroll_reveal(enabled: bool) {
    use_effect_with_deps(
        move |enabled| {
            let window = if *enabled { web_sys::window() } else { None };
            let listener = window.map(|window| {
                let scroll_window = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    reveal_visible_sections(&scroll_window);
                }) as Box<dyn FnMut()>);

                if let Err(e) = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    warn!("Failed to attach scroll listener: {:?}", e);
                }
                // Sections already on screen shouldn't wait for a scroll.
                reveal_visible_sections(&window);
                (window, callback)
            });

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        enabled,
    );
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub shop: Rc<ShopConfig>,
    pub links: Rc<ShopLinks>,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let SectionProps { shop, links } = props;
    let entered = use_state(|| !shop.animations);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = (!*entered)
                    .then(|| Timeout::new(HERO_ENTER_DELAY_MS, move || entered.set(true)));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <header class={classes!("shop-hero", (*entered).then(|| "entered"))}>
            <div class="hero-content">
                <h1>{&shop.name}</h1>
                <p class="hero-subtitle">{&shop.tagline}</p>
                <div class="hero-cta-group">
                    <Button primary=true icon="🧭" onclick={open_on_click(links.route.clone())}>
                        {"Построить маршрут"}
                    </Button>
                    <Button icon="🗺️" onclick={open_on_click(links.secondary_map.clone())}>
                        {"Открыть 2ГИС"}
                    </Button>
                    <Button icon="✈️" onclick={open_on_click(links.messaging.clone())}>
                        {"Телеграм"}
                    </Button>
                </div>
            </div>
        </header>
    }
}

#[function_component(FindUs)]
pub fn find_us(props: &SectionProps) -> Html {
    let SectionProps { shop, links } = props;
    let reveal = shop.animations.then(|| "reveal");

    html! {
        <section id="find-us" class={classes!("find-us", reveal)}>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"🧭 Как до нас добраться"}</h2>
                    <p>{"Сканируйте, чтобы открыть в удобном приложении"}</p>
                </div>

                <div class="find-us-grid">
                    <div class="qr-grid">
                        <QrCard
                            title="Яндекс Карты"
                            url={links.route.clone()}
                            qr_src={links.route_qr.clone()}
                            label="Проложить маршрут"
                            color_class="label-yellow"
                        />
                        <QrCard
                            title="2ГИС"
                            url={links.secondary_map.clone()}
                            qr_src={links.secondary_map_qr.clone()}
                            label="Показать на карте"
                            color_class="label-green"
                        />
                    </div>

                    <div class="map-preview">
                        <img src={shop.map_preview_path.clone()} alt="Map Preview" loading="lazy" />
                        <div class="map-preview-overlay">
                            <Button onclick={open_on_click(links.primary_map.clone())} class="lifted">
                                {"Открыть Яндекс Карты"}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let SectionProps { shop, links } = props;
    let reveal = shop.animations.then(|| "reveal");

    html! {
        <section id="contact" class={classes!("contact", reveal)}>
            <div class="contact-card">
                <div class="contact-details">
                    <h2>{"Контакты"}</h2>
                    {
                        if let Some(about) = &shop.about {
                            html! { <p class="about-text">{about}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="contact-row">
                        <span class="contact-icon">{"📍"}</span>
                        <div>
                            <p class="contact-caption">{"Адрес"}</p>
                            <p class="contact-address">{&shop.address}</p>
                        </div>
                    </div>
                    <div class="contact-row">
                        <span class="contact-icon">{"🕘"}</span>
                        <div>
                            <p class="contact-caption">{"Часы работы"}</p>
                            <p>{&shop.opening_hours}</p>
                        </div>
                    </div>
                </div>

                <div class="contact-channel">
                    <div class="qr-frame large">
                        <img src={links.messaging_qr.clone()} alt="Telegram QR" loading="lazy" />
                    </div>
                    <h3>{"Наш Телеграм Канал"}</h3>
                    <p>{"Сканируйте, чтобы узнать о свежем улове и ценах."}</p>
                    <Button primary=true icon="✈️" class="full-width" onclick={open_on_click(links.messaging.clone())}>
                        {"Перейти в канал"}
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub shop: Rc<ShopConfig>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="shop-footer">
            <p>{format!("© {} {}. Все права защищены.", props.shop.footer_year(), props.shop.name)}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
    use_scroll_reveal(props.shop.animations);

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Hero shop={props.shop.clone()} links={props.links.clone()} />
            <FindUs shop={props.shop.clone()} links={props.links.clone()} />
            <About shop={props.shop.clone()} links={props.links.clone()} />
            <Footer shop={props.shop.clone()} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background: #f8fafc;
        color: #475569;
        font-family: system-ui, sans-serif;
    }
    .shop-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        font-weight: 700;
        cursor: pointer;
        transition: transform 0.2s ease, opacity 0.2s ease;
    }
    .shop-button:hover { transform: scale(1.05); }
    .shop-button:active { transform: scale(0.95); }
    .shop-button.primary {
        background: rgb(21, 35, 62);
        color: white;
        border: none;
        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.2);
    }
    .shop-button.secondary {
        background: white;
        color: rgb(21, 35, 62);
        border: 2px solid #e2e8f0;
    }
    .shop-button.full-width { width: 100%; }
    .shop-button.lifted { box-shadow: 0 25px 50px rgba(15, 23, 42, 0.35); }
    .shop-hero {
        padding: 6rem 1rem 5rem;
        text-align: center;
        background: linear-gradient(180deg, white, #f1f5f9);
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .shop-hero.entered { opacity: 1; transform: none; }
    .shop-hero h1 { font-size: 3rem; color: #0f172a; margin: 0 0 1rem; }
    .hero-subtitle { font-size: 1.25rem; margin-bottom: 2rem; }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
    .section-inner { max-width: 80rem; margin: 0 auto; padding: 5rem 1rem; }
    .section-heading { text-align: center; margin-bottom: 3rem; }
    .section-heading h2 { font-size: 1.875rem; color: #0f172a; }
    .find-us { background: white; }
    .find-us-grid { display: grid; gap: 3rem; align-items: center; }
    .qr-grid { display: grid; gap: 1.5rem; }
    .qr-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1.5rem;
        border-radius: 1rem;
        background: white;
        border: 1px solid #f1f5f9;
        box-shadow: 0 4px 6px rgba(15, 23, 42, 0.08);
        text-decoration: none;
        color: #1e293b;
        transition: box-shadow 0.3s ease;
    }
    .qr-card:hover { box-shadow: 0 20px 25px rgba(15, 23, 42, 0.15); }
    .qr-frame { background: #f8fafc; padding: 0.5rem; border-radius: 0.75rem; margin-bottom: 1rem; }
    .qr-frame img { width: 10rem; height: 10rem; mix-blend-mode: multiply; }
    .qr-frame.large { padding: 1rem; }
    .qr-label { font-size: 0.875rem; font-weight: 600; padding: 0.25rem 0.75rem; border-radius: 9999px; }
    .label-yellow { background: #fef9c3; color: #854d0e; }
    .label-green { background: #dcfce7; color: #166534; }
    .map-preview {
        position: relative;
        min-height: 310px;
        border-radius: 1.5rem;
        overflow: hidden;
        background: #f1f5f9;
        border: 1px solid #e2e8f0;
    }
    .map-preview img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; opacity: 0.8; }
    .map-preview-overlay { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
    .contact { padding: 5rem 1rem; border-top: 1px solid #e2e8f0; }
    .contact-card {
        max-width: 56rem;
        margin: 0 auto;
        display: grid;
        border-radius: 2rem;
        overflow: hidden;
        background: white;
        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.15);
    }
    .contact-details { padding: 2.5rem; color: white; background: rgb(21, 35, 62); }
    .contact-row { display: flex; gap: 1rem; align-items: flex-start; margin-top: 1.5rem; }
    .contact-icon { opacity: 0.7; }
    .contact-caption { opacity: 0.7; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; }
    .contact-address { font-size: 1.25rem; }
    .contact-channel { padding: 2.5rem; display: flex; flex-direction: column; align-items: center; text-align: center; }
    .shop-footer { background: white; padding: 2rem; text-align: center; color: #94a3b8; font-size: 0.875rem; }
    .reveal { opacity: 0; transform: translateY(32px); transition: opacity 0.7s ease, transform 0.7s ease; }
    .reveal.visible { opacity: 1; transform: none; }
    @media (min-width: 640px) {
        .qr-grid { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 768px) {
        .find-us-grid, .contact-card { grid-template-columns: repeat(2, 1fr); }
    }
    @media (prefers-reduced-motion: reduce) {
        .shop-hero, .reveal { transition: none; opacity: 1; transform: none; }
    }
"#;
