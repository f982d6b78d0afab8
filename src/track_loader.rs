use std::{fs::File, io::BufReader, path::Path};

use gpx::read;

use crate::errors::{ConversionError, Result};
use crate::track::{GeoPoint, Track};

/// Reads a GPX file and flattens every point across every segment of every
/// track (track order, then segment order, then point order) into one flat
/// sequence. Routes and waypoints are ignored.
pub fn load_gpx(file_path: &Path) -> Result<Track> {
    let parse_error = |source: Box<dyn std::error::Error + Send + Sync>| ConversionError::Parse {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::open(file_path).map_err(|e| parse_error(Box::new(e)))?;
    let gpx_data = read(BufReader::new(file)).map_err(|e| parse_error(Box::new(e)))?;

    let points: Vec<GeoPoint> = gpx_data
        .tracks
        .iter()
        .flat_map(|track| {
            track.segments.iter().flat_map(|segment| {
                segment.points.iter().map(|point| GeoPoint {
                    longitude: point.point().x(),
                    latitude: point.point().y(),
                })
            })
        })
        .collect();

    debug!(
        "loaded {} points from {} tracks in '{}'",
        points.len(),
        gpx_data.tracks.len(),
        file_path.display()
    );
    Ok(Track { points })
}
