use std::rc::Rc;

use yew::prelude::*;
use log::{error, info, warn, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod links;
mod components {
    pub mod button;
    pub mod qr_card;
}
mod pages {
    pub mod landing;
}

use components::button::{open_on_click, Button};
use config::ShopConfig;
use links::ShopLinks;
use pages::landing::Landing;

// Past this many pixels the nav bar picks up its shadow.
const NAV_SCROLL_THRESHOLD: f64 = 40.0;

const CONFIG_ERROR_TITLE: &str = "Страница временно недоступна";
const CONFIG_ERROR_BODY: &str = "Не удалось загрузить настройки магазина:";

fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub shop: Rc<ShopConfig>,
    pub links: Rc<ShopLinks>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { shop, links } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(nav_is_scrolled(scroll_y));
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Failed to attach nav scroll listener: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors keep their default jump; only the dropdown closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <img src={shop.logo_path.clone()} alt={format!("{} Logo", shop.name)} />
                    <span>{&shop.name}</span>
                </a>

                <div class="nav-links">
                    <a href="#find-us" class="nav-link">{"Как найти"}</a>
                    <a href="#contact" class="nav-link">{"Контакты"}</a>
                    <Button primary=true icon="✈️" onclick={open_on_click(links.messaging.clone())}>
                        {"Телеграм"}
                    </Button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Меню">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <a href="#find-us" class="mobile-link" onclick={close_menu.clone()}>{"Как найти"}</a>
                            <a href="#contact" class="mobile-link" onclick={close_menu.clone()}>{"Контакты"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub shop: Rc<ShopConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let links = use_memo(|shop| ShopLinks::derive(shop), props.shop.clone());

    info!("Rendering landing page for {}", props.shop.name);
    html! {
        <>
            <Nav shop={props.shop.clone()} links={links.clone()} />
            <Landing shop={props.shop.clone()} links={links} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: AttrValue,
}

#[function_component(ConfigErrorView)]
fn config_error_view(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="config-error" style="max-width: 40rem; margin: 4rem auto; font-family: system-ui, sans-serif;">
            <h1>{CONFIG_ERROR_TITLE}</h1>
            <p>{CONFIG_ERROR_BODY}</p>
            <pre>{&props.message}</pre>
        </div>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: sticky;
        top: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #f1f5f9;
        transition: box-shadow 0.3s ease;
    }
    .top-nav.scrolled { box-shadow: 0 4px 12px rgba(15, 23, 42, 0.12); }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; }
    .nav-logo img { height: 3rem; width: 3rem; object-fit: contain; border-radius: 0.5rem; }
    .nav-logo span { font-weight: 700; font-size: 1.5rem; color: #0f172a; }
    .nav-links { display: none; align-items: center; gap: 2rem; }
    .nav-link { font-weight: 500; color: rgb(21, 35, 62); text-decoration: none; }
    .nav-link:hover { opacity: 0.7; }
    .burger-menu { background: none; border: none; font-size: 1.5rem; color: #475569; cursor: pointer; }
    .mobile-menu {
        position: absolute;
        width: 100%;
        background: white;
        border-top: 1px solid #f1f5f9;
        padding: 0.5rem 1rem 1.5rem;
        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
        animation: menu-drop 0.2s ease-out;
    }
    .mobile-link { display: block; padding: 0.75rem 1rem; border-radius: 0.5rem; color: #1e293b; text-decoration: none; }
    .mobile-link:hover { background: #f8fafc; }
    @keyframes menu-drop {
        from { opacity: 0; transform: translateY(-8px); }
        to { opacity: 1; transform: none; }
    }
    @media (min-width: 768px) {
        .nav-links { display: flex; }
        .burger-menu, .mobile-menu { display: none; }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    match config::load_shop_config() {
        Ok(shop) => {
            yew::Renderer::<App>::with_props(AppProps { shop: Rc::new(shop) }).render();
        }
        Err(e) => {
            error!("Invalid shop configuration: {}", e);
            yew::Renderer::<ConfigErrorView>::with_props(ConfigErrorProps {
                message: e.to_string().into(),
            })
            .render();
        }
    }
}
