use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod components {
    pub mod reveal;
    pub mod visibility;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
                    is_scrolled.set(scroll_top > 100);
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

    // Anchor links close the mobile menu but keep default navigation so
    // the browser scrolls to the section.
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
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"</>"}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        config::SECTION_ANCHORS.iter().map(|(anchor, label)| html! {
                            <a
                                href={format!("#{}", anchor)}
                                class="nav-link"
                                onclick={close_menu.clone()}
                            >
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 1rem 0;
    background: rgba(10, 25, 47, 0.9);
    backdrop-filter: blur(8px);
    transition: box-shadow 0.3s ease;
}

.top-nav.scrolled {
    box-shadow: 0 10px 30px -10px rgba(2, 12, 27, 0.7);
}

.nav-content {
    max-width: 896px;
    margin: 0 auto;
    padding: 0 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-logo {
    color: #64ffda;
    font-size: 1.5rem;
    font-weight: bold;
    text-decoration: none;
}

.nav-right {
    display: flex;
    gap: 1.5rem;
}

.nav-link {
    color: #ccd6f6;
    text-decoration: none;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: #64ffda;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 4px;
}

.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    background: #64ffda;
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        width: 100%;
        background: rgba(10, 25, 47, 0.97);
        padding: 1.5rem;
        text-align: center;
    }
}
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
