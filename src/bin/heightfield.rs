//! Simple CLI for surface expression evaluation
//!
//! Evaluates formulas of x and y over a sample grid and prints the result
//! as a summary, JSON, or CSV.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use heightfield::export::{SurfaceReport, grid_to_csv, report_to_json};
use heightfield::{SurfaceEngine, parse, presets};
use std::process;

#[derive(Parser)]
#[command(name = "heightfield")]
#[command(about = "Evaluate surface expressions f(x, y) over a sample grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and print the sampled grid
    Evaluate {
        /// Expression to evaluate, e.g. "np.sin(x) * np.cos(y)"
        expression: String,
        /// Half-width of the sampling domain along x
        #[arg(long, default_value_t = 3.0, value_parser = extent_in_range)]
        x_extent: f64,
        /// Half-width of the sampling domain along y
        #[arg(long, default_value_t = 3.0, value_parser = extent_in_range)]
        y_extent: f64,
        /// Sample count per axis
        #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(20..=80))]
        resolution: u32,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
        /// Suppress informational messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// Parse and validate expression syntax
    Parse {
        /// Expression to parse
        expression: String,
        /// Suppress informational messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// Validate expression syntax (alias for parse)
    Validate {
        /// Expression to validate
        expression: String,
        /// Suppress informational messages
        #[arg(short, long)]
        quiet: bool,
    },
    /// List the preset expressions
    Presets,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Shape and height range
    Summary,
    /// Full grid as JSON
    Json,
    /// Full grid as x,y,z CSV rows
    Csv,
}

/// The explorer UI's extent slider range
fn extent_in_range(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.5..=6.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("extent must be between 0.5 and 6.0, got {value}"))
    }
}

fn main() {
    human_panic::setup_panic!();
    env_logger::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Evaluate {
            expression,
            x_extent,
            y_extent,
            resolution,
            format,
            pretty,
            quiet,
        } => handle_evaluate(
            &expression,
            x_extent,
            y_extent,
            resolution as usize,
            format,
            pretty,
            quiet,
        ),
        Commands::Parse { expression, quiet } | Commands::Validate { expression, quiet } => {
            handle_parse(&expression, quiet)
        }
        Commands::Presets => handle_presets(),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn handle_evaluate(
    expression: &str,
    x_extent: f64,
    y_extent: f64,
    resolution: usize,
    format: OutputFormat,
    pretty: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let engine = SurfaceEngine::new();
    let surface = engine.evaluate(expression, x_extent, y_extent, resolution);

    if let Some(diagnostic) = &surface.diagnostic {
        eprintln!("{diagnostic}");
        if !quiet {
            eprintln!("substituted fallback surface sin(x)*cos(y) over [-3,3]x[-3,3]");
        }
    }

    let report = SurfaceReport {
        expression,
        x_extent,
        y_extent,
        resolution,
        fallback: surface.is_fallback(),
        grid: &surface.grid,
    };

    match format {
        OutputFormat::Summary => print_summary(&report, quiet),
        OutputFormat::Json => {
            let json = report_to_json(&report, pretty).context("serializing grid to JSON")?;
            println!("{json}");
        }
        OutputFormat::Csv => print!("{}", grid_to_csv(report.grid)),
    }
    Ok(())
}

fn print_summary(report: &SurfaceReport<'_>, quiet: bool) {
    let grid = report.grid;
    let (rows, cols) = grid.shape();

    let mut z_min = f64::INFINITY;
    let mut z_max = f64::NEG_INFINITY;
    let mut non_finite = 0usize;
    for &sample in grid.z.samples() {
        if sample.is_finite() {
            z_min = z_min.min(sample);
            z_max = z_max.max(sample);
        } else {
            non_finite += 1;
        }
    }

    println!("z = {}", report.expression);
    println!(
        "grid: {rows}x{cols} over [-{},{}] x [-{},{}]",
        report.x_extent, report.x_extent, report.y_extent, report.y_extent
    );
    if z_min <= z_max {
        println!("z range: [{z_min:.6}, {z_max:.6}]");
    }
    if non_finite > 0 && !quiet {
        println!("non-finite samples: {non_finite}");
    }
    if report.fallback && !quiet {
        println!("(fallback surface)");
    }
}

fn handle_parse(expression: &str, quiet: bool) -> anyhow::Result<()> {
    match parse(expression) {
        Ok(ast) => {
            if !quiet {
                println!("parsed: {ast}");
            }
            println!("Valid expression");
            Ok(())
        }
        Err(err) => {
            eprintln!("Invalid expression: {err}");
            process::exit(1);
        }
    }
}

fn handle_presets() -> anyhow::Result<()> {
    for preset in presets::PRESETS.iter() {
        println!("{:<24} {}", preset.label, preset.expression);
    }
    Ok(())
}
