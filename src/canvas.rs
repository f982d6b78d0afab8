use crate::errors::{ConversionError, Result};
use crate::track::CanvasSize;

// 96 DPI device pixels per centimeter of physical drawing.
const PX_PER_CM: f64 = 96.0 / 2.54;

/// User-supplied scaling parameters, passed by value into the pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConversionParameters {
    /// Real-world meters represented by one centimeter of drawing.
    pub meters_per_unit: f64,
    /// Multiplier applied after the unit conversion.
    pub scale_factor: f64,
    /// Stroke width of the emitted path, in pixels.
    pub stroke_width: f64,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        ConversionParameters {
            meters_per_unit: 100.0,
            scale_factor: 0.05,
            stroke_width: 6.0,
        }
    }
}

impl ConversionParameters {
    pub fn validate(&self) -> Result<()> {
        let check = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConversionError::InvalidInput {
                    name,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        };
        check("meters_per_unit", self.meters_per_unit)?;
        check("scale_factor", self.scale_factor)?;
        check("stroke_width", self.stroke_width)?;
        Ok(())
    }
}

/// Canvas size from total path length. Both axes are derived from the same
/// total-distance scalar, so the raw canvas is always square; the per-axis
/// stretch into it happens later in the projector.
pub fn canvas_for_length(total_length_meters: f64, params: &ConversionParameters) -> CanvasSize {
    let length_units = total_length_meters / params.meters_per_unit;
    let scaled_units = length_units * params.scale_factor;
    let width_px = scaled_units * PX_PER_CM;
    CanvasSize {
        width_px,
        height_px: width_px,
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn exact_formula() {
        // 10 km at 100 m/cm and factor 0.05 -> 5 cm -> 5 * 96 / 2.54 px
        let canvas = canvas_for_length(10_000.0, &ConversionParameters::default());
        assert_float_absolute_eq!(canvas.width_px, 188.976_377, 1e-4);
        assert_eq!(canvas.width_px, canvas.height_px);
    }

    #[test]
    fn zero_length_gives_zero_canvas() {
        let canvas = canvas_for_length(0.0, &ConversionParameters::default());
        assert_eq!(canvas.width_px, 0.0);
        assert_eq!(canvas.height_px, 0.0);
    }

    #[test]
    fn monotonic_in_parameters() {
        let base = ConversionParameters::default();
        let bigger_scale = ConversionParameters {
            scale_factor: base.scale_factor * 2.0,
            ..base
        };
        let coarser_unit = ConversionParameters {
            meters_per_unit: base.meters_per_unit * 2.0,
            ..base
        };
        let w = |p: &ConversionParameters| canvas_for_length(10_000.0, p).width_px;
        assert!(w(&bigger_scale) > w(&base));
        assert!(w(&coarser_unit) < w(&base));
    }

    #[test]
    fn rejects_bad_parameters() {
        let bad = [0.0, -1.0, f64::NAN, f64::INFINITY];
        for value in bad {
            let params = ConversionParameters {
                meters_per_unit: value,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "accepted {value}");
        }
        assert!(ConversionParameters::default().validate().is_ok());
    }
}
