use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod components {
    pub mod bilingual;
    pub mod reveal;
}
mod content;
mod pages {
    pub mod home;
    pub mod termsprivacy;
}
mod scroll;
mod stage;
mod ui_state;

use components::bilingual::Bilingual;
use content::NAV_SECTIONS;
use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};
use ui_state::MenuState;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 60.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.navigated());
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"AURA"}<span class="nav-logo-dot">{"."}</span>
                    </Link<Route>>
                    <button class="menu-toggle" onclick={toggle_menu} aria-label="Menu">
                        { if menu.is_open() { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            {
                if menu.is_open() {
                    html! {
                        <div class="menu-overlay">
                            <div class="menu-items">
                                { for NAV_SECTIONS.iter().enumerate().map(|(idx, section)| html! {
                                    <div
                                        key={section.anchor}
                                        class="menu-item"
                                        style={format!("animation-delay: {}ms;", idx * 100 + 300)}
                                    >
                                        <a href={format!("/#{}", section.anchor)} onclick={close_menu.clone()}>
                                            <Bilingual en={section.label} ko={section.label_ko} />
                                        </a>
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #FBFBFE;
                        color: #0F172A;
                        font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }

                    .bilingual {
                        display: inline-block;
                        cursor: default;
                        outline: none;
                        transition: opacity 0.15s ease-out, transform 0.15s ease-out;
                    }

                    .bilingual.fading {
                        opacity: 0;
                        transform: translateY(-5px);
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 200;
                        padding: 2rem 1.5rem;
                        box-sizing: border-box;
                        transition: padding 0.3s ease, background 0.3s ease;
                    }

                    .top-nav.scrolled {
                        padding: 1rem 1.5rem;
                        background: rgba(251, 251, 254, 0.7);
                        backdrop-filter: blur(12px);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.04em;
                        color: #0F172A;
                        text-decoration: none;
                    }

                    .nav-logo-dot {
                        color: #A78BFA;
                    }

                    .menu-toggle {
                        width: 2.75rem;
                        height: 2.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.45);
                        backdrop-filter: blur(12px);
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }

                    .menu-toggle:hover {
                        background: rgba(255, 255, 255, 0.8);
                    }

                    .menu-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 150;
                        background: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: overlay-in 0.3s ease-out;
                    }

                    @keyframes overlay-in {
                        from { opacity: 0; transform: translateX(100%); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    .menu-items {
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .menu-item {
                        opacity: 0;
                        animation: item-in 0.4s ease-out forwards;
                    }

                    @keyframes item-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .menu-item a {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #0F172A;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .menu-item a:hover {
                        color: #A78BFA;
                    }

                    @media (min-width: 768px) {
                        .top-nav { padding: 2rem 3rem; }
                        .top-nav.scrolled { padding: 1rem 3rem; }
                        .menu-item a { font-size: 4.5rem; }
                    }
                "#}
            </style>
        </>
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
    // Better panic messages in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
