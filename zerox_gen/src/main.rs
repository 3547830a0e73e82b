//! ZEROX33 generator CLI
//!
//! Renders the 128 animated cubes and the logo into one directory.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::FmtSubscriber;
use zerox_gen::{trait_map, CatalogDriver, CatalogSummary, GenConfig};

/// ZEROX33 animated cube generator
#[derive(Parser, Debug)]
#[command(name = "zerox-gen")]
#[command(about = "Generate the ZEROX33 animated cube catalog", long_about = None)]
struct Args {
    /// JSON config file (frame_count, canvas_size, frame_duration_ms, output_dir, traits)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render a single catalog index instead of the whole set
    #[arg(short, long)]
    item: Option<u32>,

    /// Skip the logo
    #[arg(long)]
    no_logo: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON summary for scripting
    #[arg(long)]
    json: bool,
}

fn print_banner(config: &GenConfig) {
    let render = &config.render;
    info!("ZEROX33 - {} animated cube generator", render.catalog_size());
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("Output:  {}", config.output_dir.display());
    info!(
        "Size:    {}x{}px, {} frames each, {}ms per frame",
        render.canvas_size, render.canvas_size, render.frame_count, render.frame_duration_ms
    );
}

fn print_summary(config: &GenConfig, summary: &CatalogSummary) {
    info!("");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("Done in {} seconds", summary.elapsed.as_secs());
    info!(
        "{} GIFs{} = {:.1} MB",
        summary.items,
        if summary.logo_path.is_some() { " + logo.png" } else { "" },
        summary.total_bytes as f64 / (1024.0 * 1024.0)
    );
    info!("Trait map:");
    for range in trait_map(&config.render) {
        let tag = if range.rare { "  ★ RARE" } else { "" };
        info!("  {:>3}-{:<3}  {}{}", range.first, range.last, range.name, tag);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging. With --json, stdout carries only the summary:
    // progress is suppressed and warnings go to stderr.
    let (level, writer) = if args.json {
        (Level::WARN, BoxMakeWriter::new(std::io::stderr))
    } else if args.verbose {
        (Level::DEBUG, BoxMakeWriter::new(std::io::stdout))
    } else {
        (Level::INFO, BoxMakeWriter::new(std::io::stdout))
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(!args.json)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut config = match &args.config {
        Some(path) => GenConfig::load(path)?,
        None => GenConfig::default(),
    };
    if let Some(dir) = args.output {
        config = config.with_output_dir(dir);
    }

    let driver = CatalogDriver::new(config)
        .context("Invalid configuration")?
        .with_logo(!args.no_logo);

    // Single-item preview
    if let Some(index) = args.item {
        driver.prepare_output()?;
        let report = driver
            .render_item(index)
            .with_context(|| format!("Failed to render item {}", index))?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report.entry)?);
        } else {
            info!(
                "✓ #{} {} v{} -> {} ({} bytes)",
                index,
                report.entry.trait_name,
                report.entry.variation,
                driver.output_dir().join(report.slot.file_name()).display(),
                report.entry.bytes
            );
        }
        return Ok(());
    }

    if !args.json {
        print_banner(driver.config());
    }

    let summary = driver.run().context("Catalog generation halted")?;

    if args.json {
        let out = serde_json::json!({
            "items": summary.items,
            "total_bytes": summary.total_bytes,
            "elapsed_secs": summary.elapsed.as_secs_f64(),
            "output_dir": driver.output_dir(),
            "logo": summary.logo_path,
            "manifest": summary.manifest_path,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_summary(driver.config(), &summary);
    }

    Ok(())
}
