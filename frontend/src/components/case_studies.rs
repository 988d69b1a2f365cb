use yew::prelude::*;
use crate::components::ui::{Button, ButtonVariant};

pub struct CaseStudy {
    pub title: &'static str,
    pub problem: &'static str,
    pub bleed: &'static str,
    pub solution: &'static str,
    pub results: [&'static str; 3],
    pub roi: &'static str,
    pub payback: &'static str,
    pub cta: &'static str,
}

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "AGENCIA REAL ESTATE",
        problem: "40% tiempo en seguimientos. 60% leads perdidos.",
        bleed: "2.400€/mes",
        solution: "Lead capture LinkedIn + Scoring + Secuencia 5 emails + Calendly.",
        results: ["0h seguimientos manuales", "78% leads cualificados", "23% más citas"],
        roi: "3.200€",
        payback: "5 días",
        cta: "QUIERO RESULTADOS ASÍ",
    },
    CaseStudy {
        title: "ECOMMERCE B2C",
        problem: "Atención cliente 15h/sem. FAQs repetitivas 70%.",
        bleed: "1.800€/mes",
        solution: "RAG Bot con 18 documentos. Respuestas 24/7.",
        results: ["68% tickets resueltos", "11h/sem liberadas", "Satisfacción ↑ 17%"],
        roi: "1.650€",
        payback: "10 días",
        cta: "NECESITO ESTO YA",
    },
    CaseStudy {
        title: "CONSULTORÍA B2B",
        problem: "Generación propuestas 6h. 90% repetitivo.",
        bleed: "3.200€/mes",
        solution: "Doc automation. Input params -> PDF listo en 15min.",
        results: ["Tiempo: 6h → 20min", "3x más propuestas", "Cierre ↑ 11%"],
        roi: "4.100€",
        payback: "4 días",
        cta: "ESTO NECESITO",
    },
];

#[derive(Properties, PartialEq)]
pub struct CaseStudiesProps {
    pub on_open_modal: Callback<()>,
}

#[function_component(CaseStudies)]
pub fn case_studies(props: &CaseStudiesProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };

    html! {
        <div class="case-grid">
            <style>
            {r#".case-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
            .case-card {
                background: #000;
                border: 1px solid #1f2937;
                padding: 1.5rem;
                display: flex;
                flex-direction: column;
                transition: border-color 0.2s;
            }
            .case-card:hover { border-color: var(--blood); }
            .case-head { border-bottom: 1px solid #1f2937; padding-bottom: 1rem; margin-bottom: 1rem; }
            .case-head h3 { font-size: 1.125rem; margin-bottom: 0.5rem; }
            .case-head p { font-size: 0.75rem; color: #9ca3af; }
            .case-head .case-bleed { color: var(--blood); font-family: var(--font-mono); font-weight: bold; font-size: 1rem; margin-top: 0.5rem; }
            .case-body { flex-grow: 1; margin-bottom: 1rem; }
            .case-body p { font-size: 0.875rem; color: #d1d5db; margin-bottom: 1rem; }
            .case-body ul { list-style: none; padding: 0; font-size: 0.75rem; font-family: var(--font-mono); color: var(--ash); }
            .case-numbers {
                display: flex;
                justify-content: space-between;
                background: rgba(220, 38, 38, 0.1);
                padding: 0.75rem;
                margin-bottom: 1rem;
                border-radius: 4px;
                font-size: 0.75rem;
                font-weight: bold;
                color: var(--blood);
            }
            @media (max-width: 768px) {
                .case-grid { grid-template-columns: 1fr; }
            }"#}
            </style>
            { for CASE_STUDIES.iter().map(|study| html! {
                <div class="case-card" key={study.title}>
                    <div class="case-head">
                        <h3>{study.title}</h3>
                        <p>{format!("PROBLEMA: {}", study.problem)}</p>
                        <p class="case-bleed">{format!("HEMORRAGIA: {}", study.bleed)}</p>
                    </div>
                    <div class="case-body">
                        <p>{study.solution}</p>
                        <ul>
                            { for study.results.iter().map(|result| html! { <li>{format!("✓ {}", result)}</li> }) }
                        </ul>
                    </div>
                    <div class="case-numbers">
                        <span>{format!("ROI: {}", study.roi)}</span>
                        <span>{format!("PAYBACK: {}", study.payback)}</span>
                    </div>
                    <Button variant={ButtonVariant::Secondary} full_width={true} onclick={open_modal.clone()}>
                        {study.cta}
                    </Button>
                </div>
            }) }
        </div>
    }
}
