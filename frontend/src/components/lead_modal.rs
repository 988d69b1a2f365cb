use yew::prelude::*;
use yew_hooks::prelude::*;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use crate::components::ui::Button;
use crate::lead::{self, LeadForm, LeadSector, LeadSubmission, Outcome};

const CLOSE_TRANSITION_MS: u32 = 400;
const SUCCESS_NOTICE: &str = "DATOS RECIBIDOS. PREPARA TU CARTERA, TE LLAMAMOS EN <2H.";
const FAILURE_NOTICE: &str = "ERROR DE CONEXIÓN. INTÉNTALO DE NUEVO.";

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn notify(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let form = use_mut_ref(LeadForm::default);
    let update = use_update();
    let mounted = use_state(|| props.is_open);
    let shown = use_state(|| false);
    // Bumped on every open/close so a stale timeout can't undo a newer transition
    let generation = use_mut_ref(|| 0u32);

    {
        let mounted = mounted.clone();
        let shown = shown.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |is_open| {
                let current = generation.borrow().wrapping_add(1);
                *generation.borrow_mut() = current;
                if *is_open {
                    log::info!("Opening lead modal");
                    mounted.set(true);
                    Timeout::new(20, move || {
                        if *generation.borrow() == current {
                            shown.set(true);
                        }
                    })
                    .forget();
                } else {
                    shown.set(false);
                    Timeout::new(CLOSE_TRANSITION_MS, move || {
                        if *generation.borrow() == current {
                            mounted.set(false);
                        }
                    })
                    .forget();
                }
                || ()
            },
            props.is_open,
        );
    }

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(fields) = form.borrow_mut().begin_submit() else {
                log::debug!("Lead submission already in flight, ignoring");
                return;
            };
            update();

            let form = form.clone();
            let update = update.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                gloo_console::log!("Sending lead for", fields.email.clone());
                let result = lead::submit(&fields).await;
                if let Err(e) = &result {
                    log::error!("Error sending lead: {}", e);
                }
                let outcome = form.borrow_mut().finish(&result);
                update();
                match outcome {
                    Outcome::Sent => {
                        log::info!("Lead sent");
                        notify(SUCCESS_NOTICE);
                    }
                    Outcome::Failed => notify(FAILURE_NOTICE),
                }
                if outcome.closes_surface() {
                    on_close.emit(());
                }
            });
        })
    };

    let edit_field = |apply: fn(&mut LeadSubmission, String)| {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.borrow_mut().edit(|fields| apply(fields, input.value()));
            update();
        })
    };

    let on_message = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.borrow_mut().edit(|fields| fields.message = area.value());
            update();
        })
    };

    let on_sector = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(sector) = LeadSector::from_label(&select.value()) {
                form.borrow_mut().edit(|fields| fields.sector = sector);
                update();
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !*mounted {
        return html! {};
    }

    let form = form.borrow();
    let fields = form.fields();
    let submitting = form.is_submitting();

    html! {
        <div class={classes!("lead-modal", (*shown).then(|| "open"))}>
            <style>
            {r#".lead-modal {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1rem;
                overflow-y: auto;
            }
            .lead-overlay {
                position: absolute;
                inset: 0;
                background: rgba(0, 0, 0, 0.95);
                backdrop-filter: blur(4px);
                opacity: 0;
                transition: opacity 0.3s ease-in-out;
            }
            .lead-modal.open .lead-overlay { opacity: 1; }
            .lead-scratches {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                pointer-events: none;
                z-index: 10;
                mix-blend-mode: screen;
            }
            .lead-scratches path {
                stroke-dasharray: 1500;
                stroke-dashoffset: 1500;
                transition: stroke-dashoffset 0.4s cubic-bezier(0.165, 0.84, 0.44, 1), opacity 0.5s 0.6s;
            }
            .lead-scratches path:nth-child(2) { transition-delay: 0.05s, 0.65s; }
            .lead-scratches path:nth-child(3) { transition-delay: 0.1s, 0.7s; }
            .lead-modal.open .lead-scratches path { stroke-dashoffset: 0; opacity: 0.1; }
            .lead-content {
                position: relative;
                z-index: 20;
                width: 100%;
                max-width: 42rem;
                background: #000;
                border: 2px solid var(--blood);
                box-shadow: 0 0 50px rgba(220, 38, 38, 0.5);
                padding: 0.25rem;
                opacity: 0;
                transform: scale(0.9) translateY(50px);
                transition: opacity 0.4s 0.2s, transform 0.4s 0.2s cubic-bezier(0.34, 1.56, 0.64, 1);
            }
            .lead-modal.open .lead-content { opacity: 1; transform: scale(1) translateY(0); }
            .lead-corner { position: absolute; width: 1rem; height: 1rem; background: var(--blood); }
            .lead-inner { background: rgba(26, 26, 26, 0.9); padding: 2.5rem; position: relative; }
            .lead-close {
                position: absolute;
                top: 1rem;
                right: 1rem;
                background: none;
                border: none;
                color: #6b7280;
                font-size: 2rem;
                cursor: pointer;
                transition: all 0.3s;
            }
            .lead-close:hover { color: var(--blood); transform: rotate(90deg); }
            .lead-header { text-align: center; margin-bottom: 2rem; }
            .lead-header .warning { font-size: 3rem; color: var(--blood); animation: pulse 2s infinite; }
            .lead-header h2 {
                font-family: var(--font-display);
                font-size: 3rem;
                font-style: italic;
                text-transform: uppercase;
                transform: skewX(-6deg);
            }
            .lead-header p {
                display: inline-block;
                text-align: left;
                color: var(--ash);
                font-family: var(--font-mono);
                border-left: 2px solid var(--blood);
                background: rgba(0, 0, 0, 0.5);
                padding: 0.5rem 0.5rem 0.5rem 1rem;
                margin-top: 1rem;
            }
            .lead-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; margin-bottom: 1.25rem; }
            .lead-field { margin-bottom: 1.25rem; }
            .lead-row .lead-field { margin-bottom: 0; }
            .lead-field label {
                display: block;
                font-size: 0.75rem;
                font-weight: bold;
                color: var(--blood);
                margin-bottom: 0.25rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
                transition: color 0.2s;
            }
            .lead-field:focus-within label { color: #fff; }
            .lead-field input, .lead-field select, .lead-field textarea {
                width: 100%;
                background: #000;
                border: 1px solid #1f2937;
                color: #fff;
                padding: 0.75rem;
                font-family: var(--font-mono);
                transition: all 0.2s;
                box-sizing: border-box;
            }
            .lead-field textarea { resize: none; }
            .lead-field input:focus, .lead-field select:focus, .lead-field textarea:focus {
                border-color: var(--blood);
                outline: none;
                box-shadow: 0 0 15px rgba(220, 38, 38, 0.3);
            }
            .lead-field :disabled { opacity: 0.5; }
            .lead-submit { padding-top: 1rem; }
            .lead-submit .btn { font-size: 1.125rem; padding: 1.25rem; }
            .lead-submit .btn:disabled { opacity: 0.5; cursor: not-allowed; animation: pulse 1.5s infinite; }
            .lead-fineprint { text-align: center; font-size: 0.75rem; color: #4b5563; margin-top: 1rem; font-family: var(--font-mono); }
            @media (max-width: 768px) {
                .lead-inner { padding: 1.5rem; }
                .lead-header h2 { font-size: 1.875rem; }
                .lead-row { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="lead-overlay" onclick={close.clone()}></div>

            <svg class="lead-scratches" viewBox="0 0 1000 1000" preserveAspectRatio="none">
                <path d="M-100,100 L1100,900" stroke="#DC2626" stroke-width="20" fill="none" />
                <path d="M-100,300 L1100,1100" stroke="#DC2626" stroke-width="15" fill="none" />
                <path d="M200,-100 L-100,200" stroke="#DC2626" stroke-width="30" fill="none" />
            </svg>

            <div class="lead-content">
                <div class="lead-corner" style="top: 0; left: 0;"></div>
                <div class="lead-corner" style="top: 0; right: 0;"></div>
                <div class="lead-corner" style="bottom: 0; left: 0;"></div>
                <div class="lead-corner" style="bottom: 0; right: 0;"></div>

                <div class="lead-inner">
                    <button class="lead-close" onclick={close}>{"✕"}</button>

                    <div class="lead-header">
                        <div class="warning">{"⚠"}</div>
                        <h2>{"CORTA TU "}<span class="text-blood text-glow">{"HEMORRAGIA"}</span>{" AHORA"}</h2>
                        <p>
                            {"Introduce tus datos. Te llamo en <2h para"}<br/>
                            {"destripar tus procesos manuales."}
                        </p>
                    </div>

                    <form onsubmit={on_submit}>
                        <div class="lead-row">
                            <div class="lead-field">
                                <label>{"Nombre Completo"}</label>
                                <input
                                    type="text"
                                    required={true}
                                    disabled={submitting}
                                    placeholder="Ej. Thomas Anderson"
                                    value={fields.name.clone()}
                                    oninput={edit_field(|fields, value| fields.name = value)}
                                />
                            </div>
                            <div class="lead-field">
                                <label>{"Email Corporativo"}</label>
                                <input
                                    type="email"
                                    required={true}
                                    disabled={submitting}
                                    placeholder="ceo@tuempresa.com"
                                    value={fields.email.clone()}
                                    oninput={edit_field(|fields, value| fields.email = value)}
                                />
                            </div>
                        </div>

                        <div class="lead-row">
                            <div class="lead-field">
                                <label>{"Teléfono"}</label>
                                <input
                                    type="tel"
                                    required={true}
                                    disabled={submitting}
                                    placeholder="+34 600 000 000"
                                    value={fields.phone.clone()}
                                    oninput={edit_field(|fields, value| fields.phone = value)}
                                />
                            </div>
                            <div class="lead-field">
                                <label>{"Sector"}</label>
                                <select key={form.clears()} disabled={submitting} onchange={on_sector}>
                                    { for LeadSector::ALL.iter().map(|sector| html! {
                                        <option
                                            key={sector.label()}
                                            value={sector.label()}
                                            selected={*sector == fields.sector}
                                        >
                                            {sector.label()}
                                        </option>
                                    }) }
                                </select>
                            </div>
                        </div>

                        <div class="lead-field">
                            <label>{"¿Dónde te duele más?"}</label>
                            <textarea
                                rows="3"
                                disabled={submitting}
                                placeholder="Describe el proceso manual que te está costando dinero..."
                                value={fields.message.clone()}
                                oninput={on_message}
                            />
                        </div>

                        <div class="lead-submit">
                            <Button kind="submit" full_width={true} disabled={submitting}>
                                if submitting {
                                    {"INYECTANDO DATOS... ⟳"}
                                } else {
                                    {"ENVIAR Y AHORRAR YA ➤"}
                                }
                            </Button>
                            <p class="lead-fineprint">
                                {"Al enviar aceptas que destripemos tus ineficiencias. 100% Confidencial."}
                            </p>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
