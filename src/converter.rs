use std::path::Path;

use crate::canvas::{self, ConversionParameters};
use crate::distance;
use crate::errors::{ConversionError, Result};
use crate::projector;
use crate::svg_writer;
use crate::track::CanvasSize;
use crate::track_loader;

/// What a successful conversion produced, for the host shell to report.
#[derive(Debug, PartialEq)]
pub struct ConversionSummary {
    pub point_count: usize,
    pub total_length_meters: f64,
    pub canvas: CanvasSize,
}

/// Runs the whole pipeline: load -> total length -> canvas size ->
/// projection -> SVG emission. Pure function of its inputs; each call
/// owns its own track and pixel buffers, so concurrent callers need no
/// coordination.
pub fn convert(
    track_path: &Path,
    output_path: &Path,
    params: &ConversionParameters,
) -> Result<ConversionSummary> {
    params.validate()?;

    let track = track_loader::load_gpx(track_path)?;
    if track.len() < 2 {
        return Err(ConversionError::DegenerateTrack {
            reason: "track has fewer than 2 points",
        });
    }

    let total_length_meters = distance::total_length_meters(&track);
    // Guards the division in the projector: a zero-length track would
    // produce a zero-sized canvas.
    if total_length_meters <= 0.0 {
        return Err(ConversionError::DegenerateTrack {
            reason: "total path length is zero",
        });
    }

    let canvas = canvas::canvas_for_length(total_length_meters, params);
    let pixels = projector::project(&track, &canvas)?;
    svg_writer::write_svg(output_path, &canvas, &pixels, params.stroke_width)?;

    info!(
        "converted {} points ({:.0} m) into '{}' at {:.0}x{:.0} px",
        track.len(),
        total_length_meters,
        output_path.display(),
        canvas.width_px,
        canvas.height_px
    );
    Ok(ConversionSummary {
        point_count: track.len(),
        total_length_meters,
        canvas,
    })
}
