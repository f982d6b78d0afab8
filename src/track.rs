/// A geographic coordinate in WGS84 degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// An ordered recording of geographic points. Insertion order is the
/// drawing order of the polyline.
#[derive(Debug, PartialEq)]
pub struct Track {
    pub points: Vec<GeoPoint>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box over all points. `None` for an empty track.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let mut bbox = BoundingBox {
            min_lon: first.longitude,
            max_lon: first.longitude,
            min_lat: first.latitude,
            max_lat: first.latitude,
        };
        for point in &self.points[1..] {
            bbox.min_lon = bbox.min_lon.min(point.longitude);
            bbox.max_lon = bbox.max_lon.max(point.longitude);
            bbox.min_lat = bbox.min_lat.min(point.latitude);
            bbox.max_lat = bbox.max_lat.max(point.latitude);
        }
        Some(bbox)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// A projected coordinate in device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasSize {
    pub width_px: f64,
    pub height_px: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box() {
        let track = Track {
            points: vec![
                GeoPoint {
                    longitude: 151.14,
                    latitude: -33.79,
                },
                GeoPoint {
                    longitude: 151.27,
                    latitude: -33.94,
                },
                GeoPoint {
                    longitude: 151.20,
                    latitude: -33.81,
                },
            ],
        };
        let bbox = track.bounding_box().unwrap();
        assert_eq!(bbox.min_lon, 151.14);
        assert_eq!(bbox.max_lon, 151.27);
        assert_eq!(bbox.min_lat, -33.94);
        assert_eq!(bbox.max_lat, -33.79);
    }

    #[test]
    fn bounding_box_of_empty_track() {
        let track = Track { points: vec![] };
        assert_eq!(track.bounding_box(), None);
    }
}
