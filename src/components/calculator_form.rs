//! MgO Calculator Form Component
//!
//! Inputs for the dosing calculation and the worked result.

use leptos::prelude::*;

use crate::calculator::{
    compute, parse_number, CalcError, DosingInput, DosingResult, Po4Basis, DEFAULT_MGO_PURITY, DEFAULT_MG_RATIO,
};

/// Labeled numeric input bound to a string signal
#[component]
fn NumberField(
    id: &'static str,
    label: &'static str,
    unit: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="calc-field">
            <label for=id>{label}</label>
            <div class="calc-input">
                <input
                    id=id
                    type="number"
                    step="any"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <span class="calc-unit">{unit}</span>
            </div>
        </div>
    }
}

#[component]
pub fn CalculatorForm() -> impl IntoView {
    let flow_digestate = RwSignal::new(String::new());
    let po4_concentration = RwSignal::new(String::new());
    let po4_basis = RwSignal::new(Po4Basis::Phosphate);
    let flow_mgo = RwSignal::new(String::new());
    let mg_ratio = RwSignal::new(DEFAULT_MG_RATIO.to_string());
    let prep_volume = RwSignal::new(String::new());
    let mgo_purity = RwSignal::new(DEFAULT_MGO_PURITY.to_string());
    let efficiency = RwSignal::new("100".to_string());
    let result = RwSignal::new(None::<Result<DosingResult, CalcError>>);

    let calculate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = DosingInput {
            flow_digestate: parse_number(&flow_digestate.get_untracked()),
            po4_concentration: parse_number(&po4_concentration.get_untracked()),
            po4_basis: po4_basis.get_untracked(),
            flow_mgo: parse_number(&flow_mgo.get_untracked()),
            mg_ratio: parse_number(&mg_ratio.get_untracked()),
            prep_volume: parse_number(&prep_volume.get_untracked()),
            mgo_purity: parse_number(&mgo_purity.get_untracked()),
            efficiency: parse_number(&efficiency.get_untracked()),
        };
        result.set(Some(compute(&input)));
    };

    let clear = move |_| {
        for field in [flow_digestate, po4_concentration, flow_mgo, prep_volume] {
            field.set(String::new());
        }
        mg_ratio.set(DEFAULT_MG_RATIO.to_string());
        mgo_purity.set(DEFAULT_MGO_PURITY.to_string());
        result.set(None);
    };

    let concentration = move || match result.get() {
        Some(Ok(r)) => format!("{:.4} g/L", r.required_conc_mgo),
        _ => "Error".to_string(),
    };
    let mass = move || match result.get() {
        Some(Ok(r)) => format!("{:.4} g", r.final_mass),
        _ => "Error".to_string(),
    };

    view! {
        <form class="calculator" on:submit=calculate>
            <NumberField id="flow_digestate" label="Caudal de digestato" unit="mL/min" value=flow_digestate />
            <div class="calc-field">
                <NumberField id="po4_concentration" label="Concentración de PO₄" unit="mg/L" value=po4_concentration />
                <select
                    id="po4_type"
                    on:change=move |ev| po4_basis.set(Po4Basis::from_value(&event_target_value(&ev)))
                >
                    <option value="po4" selected=move || po4_basis.get() == Po4Basis::Phosphate>"como PO₄³⁻"</option>
                    <option value="po4p" selected=move || po4_basis.get() == Po4Basis::Phosphorus>"como P (PO₄-P)"</option>
                </select>
            </div>
            <NumberField id="flow_mgo" label="Caudal de la bomba de MgO" unit="mL/min" value=flow_mgo />
            <NumberField id="mg_ratio" label="Relación molar Mg:P" unit="" value=mg_ratio />
            <NumberField id="prep_volume" label="Volumen a preparar" unit="mL" value=prep_volume />
            <NumberField id="mgo_purity" label="Pureza del MgO" unit="%" value=mgo_purity />
            <NumberField id="efficiency" label="Eficiencia" unit="%" value=efficiency />

            <div class="calc-actions">
                <button id="calculateBtn" type="submit">"Calcular"</button>
                <button id="clearBtn" type="button" on:click=clear>"Limpiar"</button>
            </div>

            <Show when=move || result.with(|r| r.is_some())>
                <div id="result-section" class="calc-result">
                    <p>"Concentración de MgO: " <strong id="result_conc">{concentration}</strong></p>
                    <p>"Masa a pesar: " <strong id="result_mass">{mass}</strong></p>
                    <div id="calculation_steps" class="calc-steps">
                        {move || match result.get() {
                            Some(Ok(r)) => r.steps().into_iter().map(|step| view! { <p>{step}</p> }).collect_view().into_any(),
                            _ => view! { <p class="text-red-500">"Revisa los valores."</p> }.into_any(),
                        }}
                    </div>
                </div>
            </Show>
        </form>
    }
}
