use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::components::ui::Button;
use crate::roi::{self, format_eur, RoiInput, Sector};

#[derive(Properties, PartialEq)]
pub struct CalculatorProps {
    pub on_open_modal: Callback<()>,
}

fn slider_value(e: &InputEvent) -> Option<u32> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().parse::<u32>().ok()
}

#[function_component(Calculator)]
pub fn calculator(props: &CalculatorProps) -> Html {
    let input = use_state(RoiInput::default);
    let result = roi::compute(&input);

    let on_employees = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = slider_value(&e) {
                let next = (*input).with_employees(value);
                log::debug!("Recomputing ROI for {:?}", next);
                input.set(next);
            }
        })
    };

    let on_hours = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = slider_value(&e) {
                let next = (*input).with_weekly_hours(value);
                log::debug!("Recomputing ROI for {:?}", next);
                input.set(next);
            }
        })
    };

    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };

    html! {
        <div class="calculator">
            <style>
            {r#".calculator {
                max-width: 56rem;
                margin: 0 auto;
                background: rgba(26, 26, 26, 0.5);
                border: 1px solid rgba(220, 38, 38, 0.3);
                padding: 2.5rem;
                border-radius: 2px;
                backdrop-filter: blur(4px);
            }
            .calculator h2 {
                font-family: var(--font-display);
                font-size: 3rem;
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .calculator-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 3rem;
            }
            .calculator-label {
                display: flex;
                justify-content: space-between;
                color: var(--ash);
                font-weight: bold;
                text-transform: uppercase;
                font-size: 0.875rem;
                margin-bottom: 0.75rem;
            }
            .calculator-value {
                color: var(--blood);
                font-family: var(--font-mono);
                font-size: 1.25rem;
            }
            .sector-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 0.5rem;
            }
            .sector-option {
                border: 1px solid #374151;
                background: transparent;
                color: #6b7280;
                padding: 0.5rem;
                font-size: 0.75rem;
                text-transform: uppercase;
                font-family: var(--font-mono);
                cursor: pointer;
                transition: all 0.2s;
            }
            .sector-option:hover { border-color: var(--blood); }
            .sector-option.selected {
                background: var(--blood);
                border-color: var(--blood);
                color: #fff;
            }
            .calculator input[type=range] { width: 100%; accent-color: var(--blood); }
            .roi-output {
                border-left: 2px solid rgba(220, 38, 38, 0.2);
                padding-left: 2.5rem;
                display: flex;
                flex-direction: column;
                justify-content: center;
            }
            .roi-result { animation: roiIn 0.35s cubic-bezier(0.34, 1.56, 0.64, 1); }
            @keyframes roiIn {
                from { opacity: 0; transform: translateX(20px); }
                to { opacity: 1; transform: translateX(0); }
            }
            .roi-headline {
                border-bottom: 1px solid #1f2937;
                padding-bottom: 1rem;
                margin-bottom: 1.5rem;
            }
            .roi-caption {
                color: var(--ash);
                font-size: 0.875rem;
                text-transform: uppercase;
                letter-spacing: 0.1em;
            }
            .roi-monthly {
                font-family: var(--font-display);
                font-size: 3.75rem;
                font-weight: bold;
                color: var(--blood);
            }
            .roi-breakdown {
                font-family: var(--font-mono);
                font-size: 0.875rem;
                color: #9ca3af;
                margin-bottom: 1.5rem;
            }
            .roi-breakdown div { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
            .roi-breakdown span:last-child { color: #fff; }
            .roi-summary {
                background: rgba(220, 38, 38, 0.1);
                border: 1px solid rgba(220, 38, 38, 0.5);
                padding: 1rem;
                margin-bottom: 1rem;
            }
            .roi-yearly { display: flex; justify-content: space-between; align-items: flex-end; font-weight: bold; }
            .roi-yearly span:last-child { font-size: 1.5rem; }
            .roi-figures {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
                margin-top: 0.75rem;
                font-family: var(--font-mono);
                font-size: 0.75rem;
            }
            .roi-figures strong { display: block; font-size: 1.125rem; }
            .roi-figures .roi-percent { color: var(--blood); text-align: right; }
            .roi-payback {
                grid-column: span 2;
                text-align: center;
                background: rgba(0, 0, 0, 0.4);
                padding: 0.25rem;
                border-radius: 4px;
            }
            .roi-payback strong { display: inline; color: #4ade80; font-size: 0.75rem; }
            @media (max-width: 768px) {
                .calculator { padding: 1.5rem; }
                .calculator h2 { font-size: 1.875rem; }
                .calculator-grid { grid-template-columns: 1fr; }
                .roi-output { border-left: none; padding-left: 0; }
                .roi-monthly { font-size: 3rem; }
            }"#}
            </style>
            <h2>
                {"¿CUÁNTO DINERO ESTÁS "}<span class="text-blood text-glow">{"QUEMANDO"}</span>{" AHORA MISMO?"}
            </h2>

            <div class="calculator-grid">
                <div class="calculator-inputs">
                    <div class="calculator-field">
                        <label class="calculator-label">{"1. Sector de tu empresa"}</label>
                        <div class="sector-grid">
                            { for Sector::ALL.iter().map(|&sector| {
                                let selected = input.sector == Some(sector);
                                let onclick = {
                                    let input = input.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        input.set((*input).with_sector(sector));
                                    })
                                };
                                html! {
                                    <button
                                        key={sector.label()}
                                        class={classes!("sector-option", selected.then(|| "selected"))}
                                        {onclick}
                                    >
                                        { format!("[{}] {}", if selected { "x" } else { " " }, sector.label()) }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>

                    <div class="calculator-field">
                        <label class="calculator-label">
                            {"2. Empleados manuales"}
                            <span class="calculator-value">{input.employees}</span>
                        </label>
                        <input
                            type="range"
                            min={roi::EMPLOYEES_MIN.to_string()}
                            max={roi::EMPLOYEES_MAX.to_string()}
                            value={input.employees.to_string()}
                            oninput={on_employees}
                        />
                    </div>

                    <div class="calculator-field">
                        <label class="calculator-label">
                            {"3. Horas sem. repetitivas"}
                            <span class="calculator-value">{format!("{}h", input.weekly_hours)}</span>
                        </label>
                        <input
                            type="range"
                            min={roi::WEEKLY_HOURS_MIN.to_string()}
                            max={roi::WEEKLY_HOURS_MAX.to_string()}
                            value={input.weekly_hours.to_string()}
                            oninput={on_hours}
                        />
                    </div>
                </div>

                <div class="roi-output">
                    <div class="roi-result" key={result.monthly_loss.to_string()}>
                        <div class="roi-headline">
                            <div class="roi-caption">{"Tu Hemorragia Mensual"}</div>
                            <div class="roi-monthly text-glow">{format_eur(result.monthly_loss)}</div>
                        </div>

                        <div class="roi-breakdown">
                            <div>
                                <span>{"• Coste laboral desperdiciado:"}</span>
                                <span>{format!("{}/mes", format_eur(result.labor_cost))}</span>
                            </div>
                            <div>
                                <span>{"• Leads perdidos:"}</span>
                                <span>{format!("{}/mes", format_eur(result.lost_leads))}</span>
                            </div>
                            <div>
                                <span>{"• Errores humanos:"}</span>
                                <span>{format!("{}/mes", format_eur(result.errors))}</span>
                            </div>
                        </div>

                        <div class="roi-summary">
                            <div class="roi-yearly">
                                <span>{"EN 1 AÑO PIERDES:"}</span>
                                <span>{format_eur(result.yearly_loss)}</span>
                            </div>
                            <div class="roi-figures">
                                <div>
                                    <span>{"Inversión IA Feroz"}</span>
                                    <strong>{format_eur(roi::INVESTMENT)}</strong>
                                </div>
                                <div class="roi-percent">
                                    <span>{"ROI Año 1"}</span>
                                    <strong>{format!("{}%", result.roi_year1)}</strong>
                                </div>
                                <div class="roi-payback">
                                    {"Payback: "}<strong>{format!("{} días", result.payback_days)}</strong>
                                </div>
                            </div>
                        </div>

                        <Button full_width={true} onclick={open_modal}>
                            {"CORTA LA HEMORRAGIA AHORA"}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
