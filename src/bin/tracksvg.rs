use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracksvg_core::canvas::ConversionParameters;
use tracksvg_core::converter;
use tracksvg_core::errors::ConversionError;

/// Convert a GPX track into a scaled SVG line drawing.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    /// path to the GPX track file to read
    track: PathBuf,

    /// path of the SVG file to write
    output: PathBuf,

    /// real-world meters represented by one centimeter of drawing
    #[arg(long, default_value_t = 100.0)]
    meters_per_unit: f64,

    /// multiplier applied after the unit conversion
    #[arg(long, default_value_t = 0.05)]
    scale_factor: f64,

    /// stroke width of the drawn path
    #[arg(long, default_value_t = 6.0)]
    stroke_width: f64,
}

fn exit_code(error: &ConversionError) -> u8 {
    match error {
        ConversionError::InvalidInput { .. } => 2,
        ConversionError::Parse { .. } => 3,
        ConversionError::DegenerateTrack { .. } => 4,
        ConversionError::Write { .. } => 5,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = CliArgs::parse();

    let params = ConversionParameters {
        meters_per_unit: args.meters_per_unit,
        scale_factor: args.scale_factor,
        stroke_width: args.stroke_width,
    };
    match converter::convert(&args.track, &args.output, &params) {
        Ok(summary) => {
            println!(
                "saved '{}' ({:.0}x{:.0} px, {} points, {:.2} km)",
                args.output.display(),
                summary.canvas.width_px,
                summary.canvas.height_px,
                summary.point_count,
                summary.total_length_meters / 1000.0
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(exit_code(&error))
        }
    }
}
