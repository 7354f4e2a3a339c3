//! Text of the Directions / Details / About dialogs.
//!
//! Bodies are HTML fragments; showing and hiding the dialog stays in the page.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HelpText {
    pub title: &'static str,
    pub body: &'static str,
}

const MIXING_DIRECTIONS: &str = r#"<p>In this simulation, ideal gases A and B are mixed isothermally by:</p>
<ul>
  <li>Keeping total volume constant (remove barrier), or</li>
  <li>Adding gas A to chamber B so final volume = initial volume of B (compress right).</li>
</ul>
<p>Click “mix gases” to initiate mixing. For "remove barrier", the entropy change of each gas is the same as that of a gas expanding into a vacuum. When the partial pressure decreases, entropy increases. For "compress right", if the partial pressure of a gas does not change, its entropy does not change, even when mixed with another gas. The total entropy change is the sum of the entropy changes of each gas.</p>
<p>Gas A is colored red and gas B is colored blue, and when the gases mix, different shades of purple result, depending on the ratio of moles of each species. As the pressures increase, the color becomes more intense. When the initial pressures of A and B are equal and the "remove barrier" is selected, which corresponds to mixing at constant pressure, the entropy of mixing is:</p>
<div class="formula">ΔS<sub>mix</sub> = – n<sub>A</sub> R ln x<sub>A</sub> – n<sub>B</sub> R ln x<sub>B</sub></div>
<p>where x<sub>A</sub> and x<sub>B</sub> are the mole fractions of A and B in the final mixture. Note that the calculations only apply when A and B are different gases.</p>"#;

const MIXING_DETAILS: &str = r#"<p>The total volume of the container is 2 m<sup>3</sup>.</p>
<div class="formula">ΔS<sub>Total</sub> = ΔS<sub>A</sub> + ΔS<sub>B</sub></div>
<div class="formula">ΔS<sub>A</sub> = – n<sub>A</sub> R ln (P<sub>F,A</sub> / P<sub>I,A</sub>)</div>
<div class="formula">ΔS<sub>B</sub> = – n<sub>B</sub> R ln (P<sub>F,B</sub> / P<sub>I,B</sub>)</div>
<p class="modal-or">or</p>
<div class="formula">ΔS<sub>A</sub> = n<sub>A</sub> R ln (V<sub>F,A</sub> / V<sub>I,A</sub>)</div>
<div class="formula">ΔS<sub>B</sub> = n<sub>B</sub> R ln (V<sub>F,B</sub> / V<sub>I,B</sub>)</div>
<p>where <em>n</em> represents the number of moles, <em>R</em> is the gas constant (J / [K·mol]), ΔS is the entropy change (J / K), <em>P</em> is pressure (bar), <em>V</em> is volume (m<sup>3</sup>), the subscripts A and B represent the gases used, and the subscripts F and I represent the final and initial pressures.</p>"#;

const MIXING_ABOUT: &str = r#"<p>This simulation was created in the <a href="https://www.colorado.edu/chbe" target="_blank" rel="noopener">Department of Chemical and Biological Engineering</a> at University of Colorado Boulder for <a href="https://learncheme.com/" target="_blank" rel="noopener">LearnChemE.com</a> by <em>Venkateswarlu Mopidevi</em> under the direction of Professor John L. Falconer and Michelle Medlin.</p>
<p>It is a JavaScript/HTML5 implementation of a <a href="https://demonstrations.wolfram.com/EntropyChangesInMixingIdealGases/" target="_blank" rel="noopener">Mathematica simulation</a> originally developed by Derek M. Machalek.</p>
<p>It was prepared with financial support from the National Science Foundation (DUE 2336987 and 2336988) in collaboration with Washington State University. Address any questions or comments to <a href="mailto:LearnChemE@gmail.com">LearnChemE@gmail.com</a>.</p>
<p>If this simulation is too big or too small for your screen, zoom out or in using command - or command + on Mac or ctrl - or ctrl + on Windows.</p>"#;

const CSTR_DIRECTIONS: &str = r#"<p>The reversible, exothermic reaction A ⇌ B takes place in a jacketed continuous stirred-tank reactor. The diagram plots product concentration against reactor temperature for the energy balance (blue line) and the mass balance (green curve). Each intersection is a steady state.</p>
<p>Use the sliders to change the heat-transfer coefficient U, the pre-exponential factor k<sub>r</sub> of the reverse reaction, the feed temperature T<sub>f</sub> and the residence time τ. The "+" buttons raise a value by one slider step. Depending on the settings the reactor has one or three steady states.</p>"#;

const CSTR_DETAILS: &str = r#"<p>Energy balance, solved for the product concentration:</p>
<div class="formula">C<sub>B</sub> = – [v ρ C<sub>p</sub> (T – T<sub>f</sub>) + U A (T – T<sub>c</sub>)] / (v ΔH)</div>
<p>Mass balance:</p>
<div class="formula">C<sub>B</sub> = τ k<sub>f</sub> C<sub>A0</sub> / (1 + τ k<sub>f</sub> + τ k<sub>r</sub>)</div>
<div class="formula">k<sub>f</sub> = k<sub>f0</sub> exp(–E<sub>f</sub> / RT), k<sub>r</sub> = k<sub>r0</sub> exp(–E<sub>r</sub> / RT)</div>
<p>with v = 100 dm<sup>3</sup>/s, ρ = 0.8 kg/dm<sup>3</sup>, C<sub>p</sub> = 2 cal/(g·K), A = 8.94 m<sup>2</sup>, ΔH = –15000 cal/mol, T<sub>c</sub> = 310 K, k<sub>f0</sub> = 10<sup>11</sup> s<sup>–1</sup>, E<sub>f</sub> = 20000 cal/mol, E<sub>r</sub> = 24000 cal/mol and C<sub>A0</sub> = 0.01 mol/dm<sup>3</sup>. Concentrations are shown in mmol/dm<sup>3</sup>.</p>"#;

/// Dialog content for `simulation` ("cstr" or "mixing") and `topic`
/// ("directions", "details" or "about").
pub fn lookup(simulation: &str, topic: &str) -> Option<HelpText> {
    let (title, body) = match (simulation, topic) {
        ("mixing", "directions") => ("Directions", MIXING_DIRECTIONS),
        ("mixing", "details") => ("Details", MIXING_DETAILS),
        ("mixing", "about") => ("About", MIXING_ABOUT),
        ("cstr", "directions") => ("Directions", CSTR_DIRECTIONS),
        ("cstr", "details") => ("Details", CSTR_DETAILS),
        _ => return None,
    };
    Some(HelpText { title, body })
}

/// Dialog content as `{ title, body }`.
#[wasm_bindgen]
pub fn help_text(simulation: &str, topic: &str) -> Result<JsValue, JsError> {
    let text = lookup(simulation, topic)
        .ok_or_else(|| JsError::new(&format!("No {} help for {}", topic, simulation)))?;
    to_js(&text)
}
