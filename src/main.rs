//! adre-page: generate the interactive column transport page
//!
//! Evaluates the analytical ADRE solution for a parameter set given on the
//! command line (defaulting to the reference scenario) and writes the
//! self-contained HTML page. Optionally also exports the initial profile as
//! CSV and/or a static plot.

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::error::Error;
use std::process::ExitCode;

use adre_rs::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
use adre_rs::output::page::PageBuilder;
use adre_rs::output::visualization::{plot_profile, PlotConfig};
use adre_rs::physics::ColumnParameters;
use adre_rs::transport::TransportEvaluator;

#[derive(Debug, Parser)]
#[command(
    name = "adre-page",
    version,
    about = "Interactive 1D advection-dispersion-reaction column transport page."
)]
struct Cli {
    /// Output path for the generated page.
    #[arg(default_value = "column.html")]
    output: String,

    /// Host template file (must contain both substitution tokens); default is
    /// the embedded template.
    #[arg(long)]
    template: Option<String>,

    /// Sample count of the evaluation grid.
    #[arg(long, default_value_t = TransportEvaluator::DEFAULT_SAMPLES)]
    samples: usize,

    /// Elapsed time since injection [s].
    #[arg(long, default_value_t = ColumnParameters::default().time)]
    time: f64,

    /// Column length [m].
    #[arg(long, default_value_t = ColumnParameters::default().length)]
    length: f64,

    /// Column radius [m].
    #[arg(long, default_value_t = ColumnParameters::default().radius)]
    radius: f64,

    /// Dispersion coefficient [m²/s].
    #[arg(long, default_value_t = ColumnParameters::default().dispersion)]
    dispersion: f64,

    /// First-order reaction coefficient [1/s].
    #[arg(long, default_value_t = ColumnParameters::default().reaction)]
    reaction: f64,

    /// Volumetric flow rate [mL/h].
    #[arg(long, default_value_t = ColumnParameters::default().flow_rate)]
    flow_rate: f64,

    /// Porosity [-].
    #[arg(long, default_value_t = ColumnParameters::default().porosity)]
    porosity: f64,

    /// Also export the initial profile as CSV to this path.
    #[arg(long)]
    csv: Option<String>,

    /// Also render a static plot (.png or .svg) of the initial profile.
    #[arg(long)]
    plot: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Logger init can only fail if one is already set; there is none here.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let parameters = ColumnParameters {
        time: cli.time,
        length: cli.length,
        radius: cli.radius,
        dispersion: cli.dispersion,
        reaction: cli.reaction,
        flow_rate: cli.flow_rate,
        porosity: cli.porosity,
    };
    parameters.validate()?;

    info!(
        "reference velocity v = {:.3e} m/s over {:.3} m",
        parameters.pore_velocity(),
        parameters.length
    );

    let mut builder = PageBuilder::new(parameters)?.with_samples(cli.samples);
    if let Some(template) = &cli.template {
        builder = builder.with_template_file(template)?;
    }
    builder.write_to(&cli.output)?;

    if cli.csv.is_some() || cli.plot.is_some() {
        let profile = TransportEvaluator::with_samples(cli.samples).evaluate(&parameters)?;

        if let Some(csv_path) = &cli.csv {
            let config = CsvConfig::default()
                .with_metadata(CsvMetadata::from_parameters(&parameters));
            export_profile_csv(&profile, csv_path, Some(&config))?;
            info!("exported profile data to {csv_path}");
        }

        if let Some(plot_path) = &cli.plot {
            plot_profile(&profile, plot_path, Some(&PlotConfig::profile("c(t)/c0")))?;
            info!("rendered static plot to {plot_path}");
        }
    }

    Ok(())
}
