//! Generated controls and client-side script
//!
//! Everything interactive on the page is generated from the same Rust tables
//! and constants the native evaluator uses: slider markup from
//! [`sliders`], the recompute formula from the evaluator constants, the erfc
//! kernel from [`erfc_js_source`]. There is no hand-maintained JavaScript
//! copy of any physical quantity, so the client curve cannot drift from the
//! server-rendered one.

use crate::physics::{
    erfc_js_source, sliders, ColumnParameters, SliderScale, SliderUnit, AXIS_CEILING,
    ML_PER_HOUR_PER_M3_PER_S, UPSTREAM_FRACTION,
};
use crate::transport::{TransportProfile, C0};

// =================================================================================================
// Controls Markup
// =================================================================================================

/// Markup for the slider column and the save button
///
/// One `<input type="range">` per entry of the slider table, positioned at
/// the given parameter set. Log-scaled sliders carry `ln(value)` on the
/// track; the client script exponentiates before recomputing.
pub(crate) fn controls_markup(parameters: &ColumnParameters) -> String {
    let mut html = String::new();

    for spec in &sliders() {
        if let Some(value) = parameters.value_for(spec.id) {
            let raw = spec.raw_from_value(value);
            html.push_str(&format!(
                "<div class=\"slider-row\">\n\
                 \x20 <label for=\"{id}\">{label}: <span class=\"readout\" id=\"{id}-readout\"></span></label>\n\
                 \x20 <input type=\"range\" id=\"{id}\" min=\"{min:?}\" max=\"{max:?}\" step=\"{step:?}\" value=\"{raw:?}\">\n\
                 </div>\n",
                id = spec.id,
                label = spec.label,
                min = spec.min,
                max = spec.max,
                step = spec.step,
                raw = raw,
            ));
        }
    }

    html.push_str("<button id=\"save-button\">Save data</button>\n");
    html
}

// =================================================================================================
// Plot Markup
// =================================================================================================

/// Markup for the plot area: canvas plus the full client script
///
/// The initial curve is the server-evaluated `profile`, embedded as JSON
/// arrays; slider input switches to the client-side recompute path, which
/// evaluates the identical formula.
///
/// # Errors
///
/// Returns `Err` when the profile arrays cannot be serialized (does not
/// happen for finite data).
pub(crate) fn plot_markup(
    profile: &TransportProfile,
    samples: usize,
) -> Result<String, serde_json::Error> {
    let xs_json = serde_json::to_string(&profile.positions_vec())?;
    let ys_json = serde_json::to_string(&profile.concentrations_vec())?;

    Ok(format!(
        "<canvas id=\"profile-canvas\" width=\"960\" height=\"540\"></canvas>\n\
         <script>\n{script}</script>\n",
        script = client_script(&xs_json, &ys_json, samples),
    ))
}

/// Assemble the client script from its generated and static parts
fn client_script(xs_json: &str, ys_json: &str, samples: usize) -> String {
    let mut js = String::new();

    js.push_str("\"use strict\";\n");

    // Shared constants, serialized from the same Rust values the native
    // evaluator reads.
    js.push_str(&format!(
        "const SAMPLES = {samples};\n\
         const FLOW_UNIT = {flow_unit:?};\n\
         const UPSTREAM = {upstream:?};\n\
         const CEILING = {ceiling:?};\n\
         const C0 = {c0:?};\n",
        samples = samples,
        flow_unit = ML_PER_HOUR_PER_M3_PER_S,
        upstream = UPSTREAM_FRACTION,
        ceiling = AXIS_CEILING,
        c0 = C0,
    ));

    // Server-evaluated initial curve
    js.push_str(&format!(
        "const INITIAL_X = {xs_json};\nconst INITIAL_Y = {ys_json};\n"
    ));

    js.push_str(&erfc_js_source());
    js.push_str(&sliders_object());
    js.push_str(RUNTIME);
    js
}

/// JavaScript object describing the sliders: scale and readout formatting
fn sliders_object() -> String {
    let mut js = String::from("const SLIDERS = {\n");

    for spec in &sliders() {
        let scale = match spec.scale {
            SliderScale::Linear => "linear",
            SliderScale::Log => "log",
        };
        js.push_str(&format!(
            "  {id}: {{ scale: \"{scale}\", readout: function (v) {{ return {expr}; }} }},\n",
            id = spec.id,
            scale = scale,
            expr = readout_expression(spec.unit),
        ));
    }

    js.push_str("};\n");
    js
}

/// Readout expression for a slider unit, in terms of the physical value `v`
fn readout_expression(unit: SliderUnit) -> &'static str {
    match unit {
        SliderUnit::Hours => "(v / 3600.0).toFixed(2) + \" [h]\"",
        SliderUnit::Meters => "v.toFixed(3) + \" [m]\"",
        SliderUnit::SquareMetersPerSecond => "v.toExponential(1) + \" [m2/s]\"",
        SliderUnit::PerSecond => "v.toExponential(1) + \" [1/s]\"",
        SliderUnit::MilliLitersPerHour => "v.toFixed(0) + \" [mL/h]\"",
        SliderUnit::Dimensionless => "v.toFixed(2) + \" [-]\"",
    }
}

/// Static part of the client script: recompute, canvas rendering, CSV export
///
/// The recompute formula mirrors `TransportEvaluator::concentration_at` term
/// by term (same operation order on IEEE-754 doubles).
const RUNTIME: &str = r##"
function currentParameters() {
  const value = function (id) {
    const raw = parseFloat(document.getElementById(id).value);
    return SLIDERS[id].scale === "log" ? Math.exp(raw) : raw;
  };
  return {
    time: value("time"),
    length: value("length"),
    radius: value("radius"),
    dispersion: value("dispersion"),
    reaction: value("reaction"),
    flow: value("flow"),
    porosity: value("porosity")
  };
}

function computeProfile(p) {
  const area = Math.PI * p.radius * p.radius;
  const v = p.flow / (FLOW_UNIT * p.porosity * area);
  const spreading = Math.sqrt(4.0 * p.dispersion * p.time);
  const xs = new Array(SAMPLES);
  const ys = new Array(SAMPLES);
  for (let j = 0; j < SAMPLES; j++) {
    const x = -UPSTREAM * p.length + (1.0 + UPSTREAM) * p.length / SAMPLES * j;
    xs[j] = x;
    ys[j] = x <= 0.0
      ? C0
      : C0 / 2.0 * erfc((x - v * p.time) / spreading) * Math.exp(-p.reaction * x / v);
  }
  return { xs: xs, ys: ys };
}

function drawProfile(xs, ys) {
  const canvas = document.getElementById("profile-canvas");
  const ctx = canvas.getContext("2d");
  const W = canvas.width;
  const H = canvas.height;
  const ML = 65, MR = 20, MT = 20, MB = 50;
  const x0 = xs[0];
  const x1 = xs[xs.length - 1];
  const px = function (x) { return ML + (x - x0) / (x1 - x0) * (W - ML - MR); };
  const py = function (y) { return H - MB - y / CEILING * (H - MT - MB); };

  ctx.clearRect(0, 0, W, H);

  ctx.strokeStyle = "#ddd";
  ctx.fillStyle = "#444";
  ctx.font = "12px sans-serif";
  ctx.lineWidth = 1;
  for (let i = 0; i <= 5; i++) {
    const x = x0 + (x1 - x0) * i / 5;
    ctx.beginPath();
    ctx.moveTo(px(x), MT);
    ctx.lineTo(px(x), H - MB);
    ctx.stroke();
    ctx.textAlign = "center";
    ctx.fillText(x.toFixed(3), px(x), H - MB + 16);
  }
  for (let y = 0.0; y <= CEILING; y += 0.25) {
    ctx.beginPath();
    ctx.moveTo(ML, py(y));
    ctx.lineTo(W - MR, py(y));
    ctx.stroke();
    ctx.textAlign = "right";
    ctx.fillText(y.toFixed(2), ML - 6, py(y) + 4);
  }

  ctx.strokeStyle = "#222";
  ctx.strokeRect(ML, MT, W - ML - MR, H - MT - MB);

  ctx.textAlign = "center";
  ctx.fillText("x [m]", ML + (W - ML - MR) / 2, H - 8);
  ctx.save();
  ctx.translate(14, MT + (H - MT - MB) / 2);
  ctx.rotate(-Math.PI / 2);
  ctx.fillText("c(t)/c0", 0, 0);
  ctx.restore();

  ctx.strokeStyle = "#d62728";
  ctx.lineWidth = 2;
  ctx.beginPath();
  for (let j = 0; j < xs.length; j++) {
    if (j === 0) {
      ctx.moveTo(px(xs[j]), py(ys[j]));
    } else {
      ctx.lineTo(px(xs[j]), py(ys[j]));
    }
  }
  ctx.stroke();
}

function refreshReadouts(p) {
  for (const id in SLIDERS) {
    const node = document.getElementById(id + "-readout");
    node.textContent = SLIDERS[id].readout(p[id]);
  }
}

let displayed = { xs: INITIAL_X, ys: INITIAL_Y };

function update() {
  const p = currentParameters();
  displayed = computeProfile(p);
  refreshReadouts(p);
  drawProfile(displayed.xs, displayed.ys);
}

function saveCsv() {
  const lines = ["x (m),c/c0 (-)"];
  for (let j = 0; j < displayed.xs.length; j++) {
    lines.push(displayed.xs[j] + "," + displayed.ys[j]);
  }
  const blob = new Blob([lines.join("\n") + "\n"], { type: "text/csv" });
  const link = document.createElement("a");
  link.href = URL.createObjectURL(blob);
  link.download = "concentration_profile.csv";
  link.click();
  URL.revokeObjectURL(link.href);
}

for (const id in SLIDERS) {
  document.getElementById(id).addEventListener("input", update);
}
document.getElementById("save-button").addEventListener("click", saveCsv);

refreshReadouts(currentParameters());
drawProfile(displayed.xs, displayed.ys);
"##;

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportEvaluator;

    #[test]
    fn test_controls_contain_all_sliders() {
        let html = controls_markup(&ColumnParameters::default());
        assert_eq!(html.matches("<input type=\"range\"").count(), 7);
        for spec in &sliders() {
            assert!(html.contains(&format!("id=\"{}\"", spec.id)));
            assert!(html.contains(&format!("id=\"{}-readout\"", spec.id)));
        }
        assert!(html.contains("id=\"save-button\""));
    }

    #[test]
    fn test_controls_position_log_slider_at_ln_of_default() {
        let params = ColumnParameters::default();
        let html = controls_markup(&params);
        let expected = format!("value=\"{:?}\"", params.time.ln());
        assert!(html.contains(&expected), "missing {}", expected);
    }

    #[test]
    fn test_plot_markup_embeds_server_curve() {
        let evaluator = TransportEvaluator::with_samples(64);
        let params = ColumnParameters::default();
        let profile = evaluator.evaluate(&params).unwrap();

        let html = plot_markup(&profile, evaluator.samples()).unwrap();
        assert!(html.contains("profile-canvas"));
        assert!(html.contains("function erfc"));
        assert!(html.contains("const SAMPLES = 64;"));
        // First sample of the reference scenario: x = -0.02 · 0.2
        assert!(html.contains(&format!("const INITIAL_X = {}", {
            serde_json::to_string(&profile.positions_vec()).unwrap()
        })));
    }

    #[test]
    fn test_script_injects_shared_constants() {
        let profile = TransportEvaluator::with_samples(8)
            .evaluate(&ColumnParameters::default())
            .unwrap();
        let html = plot_markup(&profile, 8).unwrap();

        assert!(html.contains(&format!("const FLOW_UNIT = {:?};", 3.6e9)));
        assert!(html.contains(&format!("const UPSTREAM = {:?};", 0.02)));
        assert!(html.contains(&format!("const CEILING = {:?};", 1.05)));
    }

    #[test]
    fn test_sliders_object_covers_scales() {
        let js = sliders_object();
        assert!(js.contains("time: { scale: \"log\""));
        assert!(js.contains("length: { scale: \"linear\""));
        assert!(js.contains("reaction: { scale: \"log\""));
        assert!(js.contains("porosity: { scale: \"linear\""));
    }
}
