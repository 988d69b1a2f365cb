use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod lead;
mod roi;
mod scroll;
mod components {
    pub mod calculator;
    pub mod case_studies;
    pub mod comparison;
    pub mod faq;
    pub mod lead_modal;
    pub mod particles;
    pub mod ui;
}
mod pages {
    pub mod landing;
}

use components::{
    lead_modal::LeadModal,
    particles::BloodParticles,
    ui::Button,
};
use pages::landing::Landing;
use scroll::{scroll_to_section, scroll_to_top};

const SECTIONS: [(&str, &str); 3] = [
    ("calculator", "Calculadora"),
    ("oferta", "Oferta"),
    ("casos", "Casos"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 20.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let open_modal = {
        let menu_open = menu_open.clone();
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_open_modal.emit(());
        })
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <div class="nav-logo" onclick={Callback::from(|_: MouseEvent| scroll_to_top())}>
                        <div class="nav-mark clip-claw">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M19.07 4.93L17 9h-4l1 5-6 6-4-3 1-5H2L4.93 4.93z"></path>
                                <path d="M14.5 9.5L19 14l-4 6H7"></path>
                            </svg>
                        </div>
                        <span>{"IA "}<span class="text-blood">{"FEROZ"}</span></span>
                    </div>

                    <div class="nav-links">
                        { for SECTIONS.iter().map(|(id, label)| html! {
                            <button key={*id} class="nav-link" onclick={go_to(*id)}>{*label}</button>
                        }) }
                    </div>
                    <Button class="nav-cta" onclick={open_modal.clone()}>{"Auditoría Gratis"}</Button>

                    <button class="burger-menu" onclick={toggle_menu.clone()}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for SECTIONS.iter().map(|(id, label)| html! {
                        <button key={*id} class="mobile-link" onclick={go_to(*id)}>{*label}</button>
                    }) }
                    <Button onclick={open_modal}>{"AGENDAR AUDITORÍA"}</Button>
                    <button class="mobile-close" onclick={toggle_menu}>{"✕"}</button>
                </div>
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            info!("Closing lead modal");
            modal_open.set(false);
        })
    };

    html! {
        <>
            <BloodParticles />
            <LeadModal is_open={*modal_open} on_close={close_modal} />
            <Nav on_open_modal={open_modal.clone()} />
            <main class="main-content">
                <Landing on_open_modal={open_modal} />
            </main>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting IA Feroz landing page");
    yew::Renderer::<App>::new().render();
}
