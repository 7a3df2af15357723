use anyhow::{Context, Result};
use clap::Parser;
use simple_linreg::cli::{Cli, OutputFormat};
use simple_linreg::json_output::JsonRegressionReport;
use simple_linreg::regression::{FitConfig, SimpleLinearRegression};
use simple_linreg::sample::{parse_value_list, Sample};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config(args: &Cli) -> Result<FitConfig> {
    let mut config = match &args.config {
        Some(path) => FitConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FitConfig::default(),
    };
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    config.validate().context("Invalid --precision")?;
    Ok(config)
}

fn print_text(slr: &SimpleLinearRegression, inputs: &[f64]) -> Result<()> {
    let predictions = slr.predict(inputs)?;

    println!("Predictions:");
    for (x, y_hat) in inputs.iter().zip(&predictions) {
        println!("  x = {} -> {:.3}", x, y_hat);
    }
    println!();
    print!("{}", slr.to_report_string()?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;

    let sample = match &args.input {
        Some(path) => Sample::from_file(path).context("Failed to load sample")?,
        None => Sample::demo(),
    };
    tracing::debug!(n = sample.len(), "loaded sample");

    let inputs = parse_value_list(&args.predict).context("Invalid --predict values")?;

    let mut slr = SimpleLinearRegression::with_config(config);
    slr.fit(&sample.x, &sample.y)
        .context("Failed to fit regression")?;

    match args.format {
        OutputFormat::Text => print_text(&slr, &inputs)?,
        OutputFormat::Json => {
            let report = JsonRegressionReport::from_estimator(&slr, &inputs)?;
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
