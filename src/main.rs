use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod observe;
    pub mod video_modal;
}
mod lead {
    pub mod form;
    pub mod submit;
    pub mod validate;
}
mod pages {
    pub mod exercises;
    pub mod home;
}

use pages::{exercises::Exercises, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/exercises")]
    Exercises,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Exercises => {
            info!("Rendering Exercises page");
            html! { <Exercises /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("header", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"GRITFORGE"}
                </Link<Route>>

                <button
                    class={classes!("mobile-menu-btn", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav", (*menu_open).then(|| "active"))}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Exercises} classes="nav-link">
                            {"Exercises"}
                        </Link<Route>>
                    </div>
                </nav>
            </div>
        </header>
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

const NAV_CSS: &str = r#"
    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(29, 25, 23, 0.9);
        backdrop-filter: blur(8px);
    }
    .header.scrolled {
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
        transition: box-shadow 0.3s ease;
    }
    .header-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 64rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .nav-logo {
        font-weight: 800;
        letter-spacing: 0.1em;
        color: #ff6b35;
        text-decoration: none;
    }
    .nav {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #f5f0eb;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #ff6b35;
    }
    .mobile-menu-btn {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 4px;
    }
    .mobile-menu-btn span {
        width: 24px;
        height: 2px;
        background: #f5f0eb;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .mobile-menu-btn.open span:nth-child(1) {
        transform: rotate(45deg) translate(6px, 6px);
    }
    .mobile-menu-btn.open span:nth-child(2) {
        opacity: 0;
    }
    .mobile-menu-btn.open span:nth-child(3) {
        transform: rotate(-45deg) translate(6px, -6px);
    }
    @media (max-width: 768px) {
        .mobile-menu-btn {
            display: flex;
        }
        .nav {
            display: none;
        }
        .nav.active {
            display: flex;
            position: absolute;
            top: 60px;
            left: 0;
            right: 0;
            flex-direction: column;
            background: rgba(29, 25, 23, 0.95);
            padding: 1rem;
            gap: 1rem;
            z-index: 40;
        }
    }
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
