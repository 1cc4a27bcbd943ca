// Audit Dashboard Generator CLI
//
// Runs one render pass over the artifact directory and writes the
// self-contained HTML report. Artifact problems (missing files, undecodable
// content) are warnings by contract; only operator errors (bad config file,
// unwritable output) fail the run.

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use congestion_audit::{render_dashboard, write_dashboard, DashboardConfig};

/// CLI arguments for the dashboard generator
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Render the congestion pricing audit dashboard to a single HTML file", long_about = None)]
struct Args {
    /// Directory containing the analysis artifacts (PNG charts, text reports).
    /// Overrides the config file; defaults to outputs/visualizations
    #[arg(short, long)]
    artifacts: Option<PathBuf>,

    /// Output path for the rendered HTML report
    #[arg(short, long, default_value = "dashboard.html")]
    output: PathBuf,

    /// Optional JSON config file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the metrics extracted from the rain report as JSON
    #[arg(long)]
    dump_metrics: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("\n🚕 Congestion Pricing Audit Dashboard");
    println!("=====================================");

    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    // The artifact flag wins over the config file so a one-off directory can
    // be rendered without editing config
    if let Some(dir) = &args.artifacts {
        config.artifacts_dir = dir.clone();
    }

    println!("  Artifacts: {}", config.artifacts_dir.display());
    println!("  Output:    {}", args.output.display());
    println!("=====================================\n");

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓▒░ "),
    );

    pb.set_message("Reading artifacts and rendering...");
    let dashboard = render_dashboard(&config);
    pb.inc(1);

    pb.set_message("Writing report...");
    write_dashboard(&dashboard.html, &args.output)?;
    pb.inc(1);

    pb.set_message("Finishing up...");
    if let Some(path) = &args.dump_metrics {
        let json = serde_json::to_string_pretty(&dashboard.weather_metrics)?;
        std::fs::write(path, json)?;
    }
    pb.inc(1);

    pb.finish_with_message("✓ Render pass complete");

    // Summary
    println!("\n📊 Summary:");
    println!("  Extracted metrics: {}", dashboard.weather_metrics.len());
    if dashboard.warnings.is_empty() {
        println!("  Artifact notices: none");
    } else {
        println!("  Artifact notices: {}", dashboard.warnings.len());
        for warning in &dashboard.warnings {
            println!("    ⚠ {warning}");
        }
    }
    println!("  Report size: {:.2} KB", dashboard.html.len() as f64 / 1_000.0);

    println!("\n✨ Dashboard Generated!");
    println!("📄 {}\n", args.output.display());

    Ok(())
}
