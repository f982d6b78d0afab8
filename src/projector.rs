use crate::errors::{ConversionError, Result};
use crate::track::{CanvasSize, PixelPoint, Track};

/// Maps every geographic point into pixel space using min-max bounding
/// normalization. Output has the same length and order as the input track.
/// Y is inverted so increasing latitude maps to decreasing pixel y
/// (geographic north = up on screen).
pub fn project(track: &Track, canvas: &CanvasSize) -> Result<Vec<PixelPoint>> {
    if track.len() < 2 {
        return Err(ConversionError::DegenerateTrack {
            reason: "track has fewer than 2 points",
        });
    }
    // len >= 2, so the bounding box exists
    let bbox = track.bounding_box().unwrap();
    if bbox.lon_span() == 0.0 {
        return Err(ConversionError::DegenerateTrack {
            reason: "all points share the same longitude",
        });
    }
    if bbox.lat_span() == 0.0 {
        return Err(ConversionError::DegenerateTrack {
            reason: "all points share the same latitude",
        });
    }

    let pixels = track
        .points
        .iter()
        .map(|point| PixelPoint {
            x: (point.longitude - bbox.min_lon) / bbox.lon_span() * canvas.width_px,
            y: canvas.height_px
                - (point.latitude - bbox.min_lat) / bbox.lat_span() * canvas.height_px,
        })
        .collect();
    Ok(pixels)
}
