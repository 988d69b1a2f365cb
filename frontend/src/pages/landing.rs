use yew::prelude::*;
use chrono::Datelike;
use web_sys::window;
use crate::components::{
    calculator::Calculator,
    case_studies::CaseStudies,
    comparison::Comparison,
    faq::Faq,
    ui::{Button, ButtonVariant, Section},
};
use crate::config;
use crate::scroll::scroll_to_section;

const FOR_YOU: [&str; 5] = [
    "Facturas >50K€/año",
    "Procesos manuales dolorosos",
    "Quieres resultados, no cursos",
    "Valor 600€ como inversión",
    "Velocidad de implementación",
];

const NOT_FOR_YOU: [&str; 5] = [
    "Buscas tutoriales bonitos",
    "Quieres \"aprender\" (ve a AILINK)",
    "Presupuesto <600€",
    "Esperas magia sin cambios",
    "Prefieres pagar 5-10K por lo mismo",
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_open_modal: Callback<()>,
}

fn open_checkout(_: MouseEvent) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(config::CHECKOUT_URL, "_blank").is_err() {
            log::error!("Could not open checkout window");
        }
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };
    let to_calculator = Callback::from(|_: MouseEvent| scroll_to_section("calculator"));
    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page">
            <style>
            {r#".hero {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                position: relative;
                overflow: hidden;
                padding: 0 1rem;
            }
            .hero-wipe {
                position: absolute;
                inset: 0;
                background: #fff;
                z-index: 50;
                pointer-events: none;
                mix-blend-mode: overlay;
                animation: wipe 1s ease-in 0.5s forwards;
            }
            @keyframes wipe { from { transform: translateX(0); } to { transform: translateX(100%); } }
            .hero-content { max-width: 64rem; margin: 0 auto; text-align: center; position: relative; z-index: 20; }
            .hero h1 {
                font-family: var(--font-display);
                font-weight: 900;
                font-size: 6rem;
                line-height: 1.1;
                text-transform: uppercase;
                margin-bottom: 1.5rem;
                animation: rise 0.8s ease-out both;
            }
            .hero-pitch {
                max-width: 42rem;
                margin: 0 auto 2.5rem;
                color: var(--ash);
                font-size: 1.25rem;
                border-left: 4px solid var(--blood);
                padding: 1rem 1rem 1rem 1.5rem;
                text-align: left;
                background: rgba(0, 0, 0, 0.5);
                animation: rise 0.6s ease-out 0.4s both;
            }
            .hero-pitch strong { color: #fff; }
            .hero-pitch .tagline { color: var(--blood); font-family: var(--font-mono); text-transform: uppercase; letter-spacing: 0.1em; }
            .hero-actions { display: flex; gap: 1rem; justify-content: center; animation: rise 0.6s ease-out 0.6s both; }
            .hero-badges {
                margin-top: 3rem;
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 1.5rem;
                font-family: var(--font-mono);
                font-size: 0.875rem;
                color: #6b7280;
                text-transform: uppercase;
            }
            .hero-badges span::before { content: "✓ "; color: var(--blood); }
            @keyframes rise { from { opacity: 0; transform: translateY(20px) scale(0.95); } to { opacity: 1; transform: none; } }
            .section-heading { font-family: var(--font-display); font-size: 3.75rem; text-align: center; text-transform: uppercase; margin-bottom: 1rem; }
            .offer-intro { max-width: 42rem; margin: 0 auto 4rem; color: var(--ash); text-align: center; }
            .offer-box { display: inline-block; text-align: left; background: #111827; border: 1px solid #1f2937; padding: 1.5rem; border-radius: 8px; }
            .offer-box h3 { color: var(--blood); font-size: 1.25rem; margin-bottom: 0.5rem; }
            .offer-box ul { list-style: none; padding: 0; font-family: var(--font-mono); font-size: 0.875rem; color: #d1d5db; }
            .offer-columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; max-width: 72rem; margin: 0 auto; }
            .offer-card { background: var(--charcoal); padding: 2rem; border-top: 4px solid var(--blood); position: relative; transition: background 0.2s; }
            .offer-card:hover { background: #111827; }
            .offer-card.featured { border-top-color: #fff; transform: scale(1.05); box-shadow: 0 0 30px rgba(220, 38, 38, 0.15); z-index: 10; }
            .offer-card .badge { position: absolute; top: 0; right: 0; background: var(--blood); font-size: 0.75rem; font-weight: bold; padding: 0.25rem 0.75rem; }
            .offer-card h3 { font-size: 1.25rem; text-transform: uppercase; }
            .offer-tag { font-family: var(--font-mono); font-size: 0.75rem; border: 1px solid var(--blood); color: var(--blood); padding: 0.25rem 0.5rem; border-radius: 4px; }
            .offer-card ul { list-style: none; padding: 0; font-size: 0.875rem; color: #9ca3af; }
            .offer-card li { margin-bottom: 0.75rem; }
            .offer-card li::before { content: "▸ "; color: var(--blood); }
            .offer-stack { background: rgba(0, 0, 0, 0.5); border: 1px solid #374151; padding: 0.75rem; border-radius: 4px; font-size: 0.75rem; margin-bottom: 1.5rem; }
            .is-not { margin: 4rem auto 0; max-width: 72rem; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; background: rgba(0, 0, 0, 0.4); padding: 2rem; border: 1px solid #1f2937; }
            .is-not ul { list-style: none; padding: 0; font-size: 0.875rem; }
            .audience { background: #fff; color: #000; }
            .audience-grid { max-width: 56rem; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
            .audience h3 { font-family: var(--font-display); font-weight: 900; font-size: 1.875rem; margin-bottom: 1.5rem; }
            .audience ul { list-style: none; padding: 0; font-size: 1.125rem; font-weight: bold; }
            .audience li { margin-bottom: 1rem; }
            .audience .yes li::before { content: "✓ "; color: var(--blood); }
            .audience .no { opacity: 0.7; filter: grayscale(1); }
            .audience .no li { font-weight: 500; }
            .audience .no li::before { content: "✕ "; }
            .audience .aside { margin-top: 2rem; font-size: 0.875rem; font-family: var(--font-mono); border-top: 1px solid #000; padding-top: 1rem; }
            .guarantee { background: var(--blood); text-align: center; }
            .guarantee-box { max-width: 48rem; margin: 0 auto; }
            .guarantee-box .shield { font-size: 4rem; color: #000; }
            .guarantee-box h2 { font-family: var(--font-display); font-weight: 900; font-size: 3rem; text-transform: uppercase; margin-bottom: 1.5rem; }
            .guarantee-card { background: #000; padding: 2rem; border: 4px solid rgba(255, 255, 255, 0.2); transform: rotate(-1deg); }
            .guarantee-card h3 { color: var(--blood); font-size: 1.5rem; margin-bottom: 1rem; }
            .guarantee-card .promise { font-size: 1.25rem; font-weight: bold; }
            .final-cta { text-align: center; padding: 8rem 1.5rem; }
            .final-cta h2 { font-family: var(--font-display); font-weight: 900; font-size: 3.75rem; text-transform: uppercase; margin-bottom: 1.5rem; }
            .final-cta .question { font-size: 1.25rem; color: var(--ash); margin-bottom: 2.5rem; }
            .final-cta .btn { font-size: 1.25rem; padding: 1.5rem 3rem; animation: pulse 1s infinite; }
            .final-cta a { display: block; margin-top: 1.5rem; font-size: 0.875rem; color: #6b7280; }
            .final-cta a:hover { color: #fff; }
            .final-contact { margin-top: 3rem; padding-top: 3rem; border-top: 1px solid #111827; font-size: 0.75rem; font-family: var(--font-mono); color: #4b5563; }
            .site-footer { background: #000; border-top: 1px solid #111827; padding: 3rem 1rem; }
            .footer-grid { max-width: 80rem; margin: 0 auto 3rem; display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
            .footer-grid h3, .footer-grid h4 { font-size: 0.875rem; margin-bottom: 1rem; }
            .footer-grid ul, .footer-grid p { list-style: none; padding: 0; font-size: 0.75rem; color: #6b7280; }
            .footer-legal { text-align: center; border-top: 1px solid #111827; padding-top: 2rem; font-size: 0.75rem; color: #4b5563; font-family: var(--font-mono); text-transform: uppercase; }
            .footer-legal span { display: block; margin-top: 0.5rem; color: rgba(220, 38, 38, 0.5); }
            @media (max-width: 768px) {
                .hero h1 { font-size: 2.25rem; }
                .hero-actions { flex-direction: column; align-items: center; }
                .section-heading, .final-cta h2 { font-size: 2.25rem; }
                .offer-columns, .is-not, .audience-grid, .footer-grid { grid-template-columns: 1fr; }
                .offer-card.featured { transform: none; }
                .guarantee-box h2 { font-size: 1.875rem; }
            }"#}
            </style>

            <section class="hero">
                <div class="hero-wipe"></div>
                <div class="hero-content">
                    <h1>
                        {"DEJA DE PERDER"}<br/>
                        <span class="text-blood text-glow">{"DINERO"}</span><br/>
                        {"EN PROCESOS MANUALES"}
                    </h1>
                    <div class="hero-pitch">
                        <p>{"Tu empresa sangra dinero cada día que sigue funcionando a mano."}</p>
                        <p><strong>{"Automatización IA que te ahorra costes en 7 días."}</strong></p>
                        <p class="tagline">{"600€. Sin riesgos. Sin excusas."}</p>
                    </div>
                    <div class="hero-actions">
                        <Button onclick={to_calculator}>{"CALCULA TU HEMORRAGIA →"}</Button>
                        <Button variant={ButtonVariant::Secondary} onclick={open_modal.clone()}>
                            {"AUDITORÍA GRATUITA"}
                        </Button>
                    </div>
                    <div class="hero-badges">
                        <span>{"Implementación 7 días"}</span>
                        <span>{"Garantía total + 200€"}</span>
                        <span>{"Self-hosted seguro"}</span>
                    </div>
                </div>
            </section>

            <Section id="calculator" class="calculator-section">
                <Calculator on_open_modal={props.on_open_modal.clone()} />
            </Section>

            <Section id="oferta">
                <h2 class="section-heading">
                    {"600€ O TE DEVOLVEMOS "}<s class="text-blood">{"600€"}</s>{" 800€"}
                </h2>
                <div class="offer-intro">
                    <p>{"No vendemos promesas. Vendemos ahorro medible."}</p>
                    <div class="offer-box">
                        <h3>{"SISTEMA FEROZ 7D"}</h3>
                        <ul>
                            <li>{"▸ Precio: 600€ pago único"}</li>
                            <li>{"▸ Entrega: 7 días máximo"}</li>
                            <li>{"▸ Garantía: Si no reduces costes en 30 días, te devolvemos 600€ + 200€ por las molestias."}</li>
                        </ul>
                    </div>
                    <p><em>{"¿Por qué podemos garantizar esto? Porque sabemos que funciona. Porque lo hemos hecho 47 veces."}</em></p>
                </div>

                <div class="offer-columns">
                    <div class="offer-card">
                        <h3>{"Auditoría Express "}<span class="offer-tag">{"24 HORAS"}</span></h3>
                        <ul>
                            <li>{"Mapa completo de tus procesos"}</li>
                            <li>{"Detección fugas tiempo/dinero"}</li>
                            <li>{"3 quick wins inmediatos"}</li>
                            <li>{"Priorización por ROI"}</li>
                        </ul>
                    </div>

                    <div class="offer-card featured">
                        <div class="badge">{"POPULAR"}</div>
                        <h3>{"Automatización Crítica "}<span class="offer-tag">{"1 WORKFLOW"}</span></h3>
                        <p>{"TÚ ELIGES UNO:"}</p>
                        <ul>
                            <li>{"Lead Capture + Calificación"}</li>
                            <li>{"RAG FAQ Bot (20 docs)"}</li>
                            <li>{"Doc Auto (Facturas/PDF)"}</li>
                        </ul>
                        <div class="offer-stack">
                            {"Stack Real: n8n self-hosted • Claude/GPT-4 • Integrado CRM/Email"}
                        </div>
                        <Button full_width={true} onclick={Callback::from(open_checkout)}>{"ME INTERESA"}</Button>
                    </div>

                    <div class="offer-card">
                        <h3>{"Soporte Post "}<span class="offer-tag">{"14 DÍAS"}</span></h3>
                        <ul>
                            <li>{"Telegram directo conmigo"}</li>
                            <li>{"1 llamada ajustes (30min)"}</li>
                            <li>{"Video tutorial 10min"}</li>
                            <li>{"SOPs modificación"}</li>
                        </ul>
                    </div>
                </div>

                <div class="is-not">
                    <div>
                        <h4 style="color: #ef4444;">{"✕ LO QUE NO ES"}</h4>
                        <ul style="color: #6b7280;">
                            <li>{"❌ NO es un curso"}</li>
                            <li>{"❌ NO es un template genérico"}</li>
                            <li>{"❌ NO depende de plataformas SaaS caras"}</li>
                            <li>{"❌ NO requiere equipo técnico"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4 style="color: #22c55e;">{"✓ LO QUE ES"}</h4>
                        <ul>
                            <li>{"✅ ES implementación hecha para ti"}</li>
                            <li>{"✅ ES sistema funcionando en tu negocio"}</li>
                            <li>{"✅ ES ahorro medible en 7 días"}</li>
                        </ul>
                    </div>
                </div>
            </Section>

            <Section class="comparison-section">
                <h2 class="section-heading">
                    {"POR QUÉ LAMBDA AUTOMATIONS "}<span class="text-blood">{"NO PUEDE COMPETIR"}</span>
                </h2>
                <Comparison />
            </Section>

            <Section id="casos">
                <h2 class="section-heading">{"CASOS DE ESTUDIO"}</h2>
                <CaseStudies on_open_modal={props.on_open_modal.clone()} />
            </Section>

            <Section class="audience">
                <div class="audience-grid">
                    <div class="yes">
                        <h3>{"ESTO ES PARA TI SI..."}</h3>
                        <ul>
                            { for FOR_YOU.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                        </ul>
                    </div>
                    <div class="no">
                        <h3>{"ESTO NO ES PARA TI..."}</h3>
                        <ul>
                            { for NOT_FOR_YOU.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                        </ul>
                        <p class="aside">
                            {"Si buscas postureo, ve a ver a Agustín Medina."}<br/>
                            {"Si buscas ahorrar 20.000€/año, quédate aquí."}
                        </p>
                    </div>
                </div>
            </Section>

            <Section class="guarantee">
                <div class="guarantee-box">
                    <div class="shield">{"🛡"}</div>
                    <h2>{"Nuestra garantía es agresiva porque sabemos que funciona"}</h2>
                    <div class="guarantee-card">
                        <h3>{"GARANTÍA TOTAL 30 DÍAS"}</h3>
                        <p>{"Si después de implementar no reduces costes operativos mínimo 30% o no liberas tiempo..."}</p>
                        <p class="promise">{"Te devolvemos los 600€ completos."}</p>
                        <p class="promise">{"Y te pagamos 200€ adicionales por tu tiempo."}</p>
                    </div>
                    <p>{"En 47 implementaciones: 0 devoluciones. ROI promedio 4.2x."}</p>
                </div>
            </Section>

            <Section>
                <Faq />
            </Section>

            <Section class="final-cta">
                <h2>{"CADA DÍA SIN AUTOMATIZAR ES "}<span class="text-blood">{"DINERO QUEMADO"}</span></h2>
                <p class="question">
                    {"La pregunta no es \"¿debería automatizar?\""}<br/>
                    {"La pregunta es \"¿cuánto más voy a perder antes de hacerlo?\""}
                </p>
                <Button onclick={open_modal}>{"AUDITORÍA GRATUITA - DESCUBRE TU HEMORRAGIA"}</Button>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"CONTRATAR SISTEMA FEROZ 7D - 600€"}</a>
                <div class="final-contact">
                    {format!("Telegram: {} • Email: {} • Respuesta <2h", config::TELEGRAM_HANDLE, config::CONTACT_EMAIL)}
                </div>
            </Section>

            <footer class="site-footer">
                <div class="footer-grid">
                    <div>
                        <h3>{"IA FEROZ"}</h3>
                        <p>{"Automatización que muerde."}</p>
                    </div>
                    <div>
                        <h4>{"SERVICIOS"}</h4>
                        <ul>
                            <li>{"Sistema Feroz 7D"}</li>
                            <li>{"Soporte Extendido"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"RECURSOS"}</h4>
                        <ul>
                            <li>{"Calculadora ROI"}</li>
                            <li>{"Casos Estudio"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"LEGAL"}</h4>
                        <ul>
                            <li>{"Privacidad"}</li>
                            <li>{"Términos"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    {format!("© {} IA Feroz - Durá Ventures S.L.", year)}
                    <span>{"El mercado es de lobos. Nosotros somos más feroces."}</span>
                </div>
            </footer>
        </div>
    }
}
