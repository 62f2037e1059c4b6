//! Example: Breakthrough Study - Tracer Front Through a Sand Column
//!
//! Evaluates the analytical ADRE solution for the reference column at several
//! observation times and flow rates, then renders the interactive page, a
//! comparison plot and a CSV export.
//!
//! **Physical System**:
//! - Column: water-saturated sand, 20 cm length, 5 cm radius
//! - Tracer: conservative front with weak first-order decay
//! - Inlet: constant concentration c0 (normalized to 1)
//!
//! **Parameters** (reference scenario):
//! - D = 1e-8 m²/s (dispersion coefficient)
//! - k = 1e-6 1/s (reaction coefficient)
//! - q = 25 mL/h (flow rate)
//! - n = 0.5 (porosity)
//! - v ≈ 1.77e-6 m/s (derived pore velocity)

use adre_rs::{
    output::{
        export::{export_profile_csv, CsvConfig, CsvMetadata},
        page::PageBuilder,
        visualization::{plot_profiles_comparison, PlotConfig},
    },
    physics::ColumnParameters,
    transport::TransportEvaluator,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    println!("═══════════════════════════════════════════════════════");
    println!("  Column Transport - Breakthrough Study");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Reference column ======

    let base = ColumnParameters::default();

    println!("Column Parameters:");
    println!("  L (length)     : {} m", base.length);
    println!("  r (radius)     : {} m", base.radius);
    println!("  D (dispersion) : {:e} m²/s", base.dispersion);
    println!("  k (reaction)   : {:e} 1/s", base.reaction);
    println!("  q (flow rate)  : {} mL/h", base.flow_rate);
    println!("  n (porosity)   : {}", base.porosity);
    println!("  v (velocity)   : {:.3e} m/s\n", base.pore_velocity());

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // ====== Observation times: 6 hours to 2 weeks ======

    let hours = [6.0, 24.0, 72.0, 336.0];

    let evaluator = TransportEvaluator::new();

    println!("═══════════════════════════════════════════════════════");
    println!("  Evaluating {} Observation Times", hours.len());
    println!("═══════════════════════════════════════════════════════\n");

    let mut profiles = Vec::new();
    let mut labels = Vec::new();

    for &h in &hours {
        let mut params = base;
        params.time = h * 3600.0;

        let started = Instant::now();
        let profile = evaluator.evaluate(&params)?;
        let elapsed = started.elapsed().as_secs_f64();

        println!(
            "  t = {:>5} h : outlet c = {:>10.3e}, max c = {:.3}  ({:.4}s)",
            h,
            profile.outlet_concentration(),
            profile.max_concentration(),
            elapsed
        );

        labels.push(format!("t = {} h", h));
        profiles.push(profile);
    }

    // =============================================================================================
    // Front Position Analysis
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Front Position (c/c0 = 0.5 crossing)");
    println!("═══════════════════════════════════════════════════════\n");

    println!("{:<10} {:>14} {:>14}", "Time", "x(c=0.5) (m)", "v·t (m)");
    println!("{:-<40}", "");

    for (label, profile) in labels.iter().zip(&profiles) {
        let half_crossing = profile
            .pairs()
            .find(|&(_, c)| c < 0.5)
            .map(|(x, _)| x)
            .unwrap_or(f64::NAN);

        let h: f64 = label
            .trim_start_matches("t = ")
            .trim_end_matches(" h")
            .parse()?;
        let advected = base.pore_velocity() * h * 3600.0;

        println!("{:<10} {:>14.4} {:>14.4}", label, half_crossing, advected);
    }

    // =============================================================================================
    // Exports
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Generating Outputs");
    println!("═══════════════════════════════════════════════════════\n");

    // == Comparison plot of all observation times ==

    let plot_path = tmp_dir.join("breakthrough_times.png");
    let datasets: Vec<(&str, _)> = labels
        .iter()
        .map(|l| l.as_str())
        .zip(profiles.iter())
        .collect();
    plot_profiles_comparison(
        datasets,
        plot_path.to_str().unwrap(),
        Some(&PlotConfig::profile("Breakthrough vs. Time")),
    )?;
    println!("  Comparison plot : {:?}", plot_path);

    // == CSV export of the 24 h profile, with the parameter set as header ==

    let mut day_params = base;
    day_params.time = 24.0 * 3600.0;
    let csv_path = tmp_dir.join("breakthrough_24h.csv");
    let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&day_params));
    export_profile_csv(&profiles[1], csv_path.to_str().unwrap(), Some(&csv_config))?;
    println!("  CSV export      : {:?}", csv_path);

    // == Interactive page at the reference scenario ==

    let page_path = tmp_dir.join("column.html");
    PageBuilder::new(base)?.write_to(&page_path)?;
    println!("  Interactive page: {:?}", page_path);

    Ok(())
}
