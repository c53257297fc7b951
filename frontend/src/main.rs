use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::info;
use web_sys::MouseEvent;

mod config;
mod animation {
    pub mod clock;
    pub mod hooks;
    pub mod network;
    pub mod sequence;
}
mod components {
    pub mod charts;
    pub mod flow_diagram;
    pub mod framework_card;
    pub mod network_background;
    pub mod newsletter_popup;
    pub mod section_header;
    pub mod terminal_boot;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod pricing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404: Signal Lost"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Return to base"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("#story", "The Origin"),
    ("#doctrine", "The Doctrine"),
    ("#system", "The Protocol"),
    ("#wealth", "Wealth Mgmt"),
    ("#resources", "Resources"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SOLID_AFTER_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchors still navigate; this only folds the mobile menu away
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(11, 17, 32, 0.9);
                        backdrop-filter: blur(24px);
                        border-bottom-color: rgba(30, 41, 59, 0.5);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: #94a3b8;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .nav-link:hover { color: #fff; }
                    .nav-cta {
                        color: #10b981;
                        border: 1px solid rgba(16, 185, 129, 0.5);
                        padding: 0.5rem 1.25rem;
                        border-radius: 4px;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 900px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #0b1120;
                            border-bottom: 1px solid #1e293b;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"IM NOKIB"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#pricing" class="nav-cta" onclick={close_menu.clone()}>{"Access Data"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
