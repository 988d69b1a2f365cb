use yew::prelude::*;
use web_sys::MouseEvent;

const QUESTIONS: [(&str, &str); 4] = [
    (
        "¿Por qué 600€ si otros cobran miles?",
        "Lambda cobra 3-10K por cloud caro y educación. Nosotros somos ejecución pura y self-hosted. Sin inflar.",
    ),
    (
        "¿Cómo sé que no es un template genérico?",
        "Auditoría de TU negocio primero. 600€ es implementación personalizada, un template cuesta 50€.",
    ),
    (
        "¿Necesito equipo técnico?",
        "No. Solo necesitas ganas de ahorrar. Nosotros ponemos el expertise técnico. Tú usas el sistema.",
    ),
    (
        "¿Funciona con mi CRM?",
        "Sí. HubSpot, Salesforce, Pipedrive, Gmail, Outlook, Notion, Airtable, Stripe... Si tiene API, lo conectamos.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| true);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <p class="faq-answer">{&props.answer}</p>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq">
            <style>
            {r#".faq { max-width: 48rem; margin: 0 auto; }
            .faq h2 { font-family: var(--font-display); font-size: 1.875rem; text-align: center; margin-bottom: 2.5rem; }
            .faq-item { background: rgba(17, 24, 39, 0.5); border: 1px solid #1f2937; padding: 1.5rem; margin-bottom: 1.5rem; }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                background: none;
                border: none;
                color: #fff;
                font-size: 1.125rem;
                font-weight: bold;
                text-align: left;
                cursor: pointer;
                padding: 0;
            }
            .faq-question .toggle-icon { color: var(--blood); }
            .faq-answer { display: none; color: #9ca3af; font-size: 0.875rem; margin-top: 0.5rem; }
            .faq-item.open .faq-answer { display: block; }"#}
            </style>
            <h2>{"FAQ PAIN-BASED"}</h2>
            { for QUESTIONS.iter().map(|(question, answer)| html! {
                <FaqItem key={*question} question={*question} answer={*answer} />
            }) }
        </div>
    }
}
