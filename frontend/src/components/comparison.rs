use yew::prelude::*;

struct Row {
    metric: &'static str,
    them: &'static str,
    us: &'static str,
}

const ROWS: [Row; 7] = [
    Row { metric: "Precio", them: "\"Contacta para presupuesto\"\n1.000-10.000 USD", us: "600€ fijo\nTransparente desde día 1" },
    Row { metric: "Entrega", them: "14-21 días\nDepende de carga", us: "7 días máximo\nGarantizado" },
    Row { metric: "Garantía", them: "No especificada", us: "Total + 200€\nSin riesgos" },
    Row { metric: "ROI", them: "Casos vagos en YouTube", us: "Calculado pre-firma\nCon tu data real" },
    Row { metric: "Stack", them: "Cloud dependencies\nCostes recurrentes", us: "Self-hosted\nControl + ahorro" },
    Row { metric: "Soporte", them: "Comunidad paga (600 members)\nRespuestas genéricas", us: "Directo Telegram 14 días\nTu caso específico" },
    Row { metric: "Casos estudio", them: "Testimonios sin números", us: "ROI documentado\nCliente por cliente" },
];

#[function_component(Comparison)]
pub fn comparison() -> Html {
    html! {
        <div class="comparison">
            <style>
            {r#".comparison { overflow-x: auto; }
            .comparison table { width: 100%; text-align: left; border-collapse: collapse; }
            .comparison th {
                padding: 1rem;
                font-family: var(--font-display);
                text-transform: uppercase;
                letter-spacing: 0.05em;
                text-align: center;
            }
            .comparison th.them { background: #111827; color: #9ca3af; font-size: 1.25rem; border-top: 4px solid #374151; }
            .comparison th.us {
                background: rgba(220, 38, 38, 0.1);
                color: #fff;
                font-size: 1.5rem;
                border-top: 4px solid var(--blood);
                animation: pulse 2s infinite;
            }
            .comparison tbody { font-family: var(--font-mono); }
            .comparison tbody tr:nth-child(odd) { background: rgba(17, 24, 39, 0.3); }
            .comparison td { padding: 1rem; border-bottom: 1px solid #1f2937; white-space: pre-line; }
            .comparison td.metric { font-weight: bold; color: var(--ash); text-transform: uppercase; white-space: normal; }
            .comparison td.them { color: #9ca3af; text-align: center; }
            .comparison td.us {
                color: #fff;
                font-weight: bold;
                text-align: center;
                background: rgba(220, 38, 38, 0.05);
                border-left: 1px solid rgba(220, 38, 38, 0.2);
                border-right: 1px solid rgba(220, 38, 38, 0.2);
                border-bottom-color: rgba(220, 38, 38, 0.3);
            }
            .comparison tfoot td { border: none; text-align: center; font-weight: bold; color: var(--blood); font-style: italic; text-transform: uppercase; }"#}
            </style>
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <th class="them">{"Lambda Automations"}</th>
                        <th class="us"><span class="text-glow">{"IA Feroz"}</span></th>
                    </tr>
                </thead>
                <tbody>
                    { for ROWS.iter().map(|row| html! {
                        <tr key={row.metric}>
                            <td class="metric">{row.metric}</td>
                            <td class="them">{row.them}</td>
                            <td class="us">{row.us}</td>
                        </tr>
                    }) }
                </tbody>
                <tfoot>
                    <tr>
                        <td></td>
                        <td></td>
                        <td>{"La verdad duele."}<br/>{"Pero te ahorra dinero."}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
