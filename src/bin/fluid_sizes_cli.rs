//! CLI tool for fluid-sizes - derives a clamp() expression from two breakpoints
//!
//! Usage:
//!   fluid_sizes_cli                                   # defaults: 1.5rem@700px .. 3rem@1000px
//!   fluid_sizes_cli --min-size 1 --max-size 2.5       # override any input
//!   fluid_sizes_cli --viewport-width 500              # line-broken layout
//!   fluid_sizes_cli --at 320 --at 1440                # resolved sizes at given widths
//!   fluid_sizes_cli --json                            # full snapshot as JSON

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fluid_sizes::a11y::ZOOM_WARNING;
use fluid_sizes::css::format_number;
use fluid_sizes::scale::Field;
use fluid_sizes::{CalculatorSnapshot, ClampExpression};
use fluid_sizes::{DisplayOptions, FluidScaleCalculator};

#[derive(Parser, Debug)]
#[command(name = "fluid_sizes_cli", version, about = "Derive CSS clamp() expressions for fluid sizes")]
struct Cli {
    /// Size in rem at the minimum viewport width
    #[arg(long, value_name = "REM", allow_negative_numbers = true)]
    min_size: Option<String>,

    /// Minimum viewport width in px
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    min_width: Option<String>,

    /// Size in rem at the maximum viewport width
    #[arg(long, value_name = "REM", allow_negative_numbers = true)]
    max_size: Option<String>,

    /// Maximum viewport width in px
    #[arg(long, value_name = "PX", allow_negative_numbers = true)]
    max_width: Option<String>,

    /// CSS property to render a declaration for (repeatable; default: font-size, width)
    #[arg(short, long = "property", value_name = "NAME")]
    properties: Vec<String>,

    /// Window width used to choose between single-line and line-broken output
    #[arg(long, value_name = "PX", default_value_t = 1024.0)]
    viewport_width: f64,

    /// Print the resolved size at this window width (repeatable)
    #[arg(long = "at", value_name = "PX")]
    at: Vec<f64>,

    /// Print the full calculator snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = DisplayOptions::default();
    if !cli.properties.is_empty() {
        options.properties = cli.properties.clone();
    }

    let mut calculator = FluidScaleCalculator::new(options.initial);
    for (field, raw) in [
        (Field::MinSize, &cli.min_size),
        (Field::MinWidth, &cli.min_width),
        (Field::MaxSize, &cli.max_size),
        (Field::MaxWidth, &cli.max_width),
    ] {
        if let Some(raw) = raw {
            let value = calculator.set_text(field, raw);
            if value == 0.0 && !raw.chars().any(|c| c.is_ascii_digit()) {
                log::warn!("--{} {raw:?} is not a number, using 0", field.name());
            }
            log::debug!("{} = {value}", field.name());
        }
    }

    let snapshot = calculator.snapshot(cli.viewport_width, &options);

    if cli.json {
        return match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing JSON: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let clamp = match calculator.clamp() {
        Ok(clamp) => clamp,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    match print_report(&mut out, &snapshot, &clamp, &cli.at) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(
    out: &mut impl Write,
    snapshot: &CalculatorSnapshot,
    clamp: &ClampExpression,
    widths: &[f64],
) -> io::Result<()> {
    for declaration in &snapshot.declarations {
        writeln!(out, "{declaration}")?;
    }
    if snapshot.warning {
        writeln!(out)?;
        writeln!(out, "warning: {ZOOM_WARNING}")?;
    }
    if !widths.is_empty() {
        writeln!(out)?;
        for width in widths {
            let rem = (clamp.evaluate(*width) * 1000.0).round() / 1000.0;
            writeln!(out, "{:>6}px  {}rem", format_number(*width), format_number(rem))?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "fluid_sizes=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_inputs_as_separate_values() {
        let cli = Cli::try_parse_from([
            "fluid_sizes_cli",
            "--min-size",
            "-1",
            "--min-width",
            "-320",
            "--max-size",
            "-0.5",
            "--max-width",
            "-1200",
        ])
        .unwrap();
        assert_eq!(cli.min_size.as_deref(), Some("-1"));
        assert_eq!(cli.min_width.as_deref(), Some("-320"));
        assert_eq!(cli.max_size.as_deref(), Some("-0.5"));
        assert_eq!(cli.max_width.as_deref(), Some("-1200"));
    }

    #[test]
    fn test_negative_min_size_report() {
        let cli = Cli::try_parse_from(["fluid_sizes_cli", "--min-size", "-1"]).unwrap();
        let mut calculator = FluidScaleCalculator::default();
        let value = calculator.set_text(Field::MinSize, cli.min_size.as_deref().unwrap_or(""));
        assert_eq!(value, -1.0);
        // slope 4/300 -> 21.333.. -> 21.3vw, -1 - 9.333.. -> -10.3rem
        let clamp = calculator.clamp().unwrap();
        assert_eq!(clamp.to_string(), "clamp(-1rem, 21.3vw - 10.3rem, 3rem)");
    }

    #[test]
    fn test_report_lists_declarations_and_widths() {
        let calculator = FluidScaleCalculator::default();
        let snapshot = calculator.snapshot(1024.0, &DisplayOptions::default());
        let clamp = calculator.clamp().unwrap();
        let mut out = Vec::new();
        print_report(&mut out, &snapshot, &clamp, &[700.0, 1000.0]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("font-size: clamp(1.5rem, 8vw - 2rem, 3rem);"));
        assert!(text.contains("   700px  1.5rem"));
        assert!(text.contains("  1000px  3rem"));
    }
}
