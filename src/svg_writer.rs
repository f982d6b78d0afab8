use std::path::Path as FilePath;

use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::errors::{ConversionError, Result};
use crate::track::{CanvasSize, PixelPoint};

// Fixed by the output contract, not configurable.
const STROKE_COLOR: &str = "rgb(10%,10%,16%)";

/// One moveto followed by a lineto per remaining point, in order.
pub fn path_data(pixels: &[PixelPoint]) -> Data {
    let mut data = Data::new().move_to((pixels[0].x, pixels[0].y));
    for pixel in &pixels[1..] {
        data = data.line_to((pixel.x, pixel.y));
    }
    data
}

/// Writes the drawing as an SVG document containing exactly one path.
/// Nothing touches the filesystem until the whole document is assembled,
/// so a failed conversion never leaves a partial file behind.
pub fn write_svg(
    output_path: &FilePath,
    canvas: &CanvasSize,
    pixels: &[PixelPoint],
    stroke_width: f64,
) -> Result<()> {
    let path = Path::new()
        .set("stroke", STROKE_COLOR)
        .set("stroke-width", stroke_width)
        .set("fill", "none")
        .set("d", path_data(pixels));
    let document = Document::new()
        .set("width", canvas.width_px)
        .set("height", canvas.height_px)
        .add(path);

    svg::save(output_path, &document).map_err(|source| ConversionError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use svg::node::Value;

    use super::*;

    #[test]
    fn path_data_is_one_moveto_then_linetos() {
        let pixels = [
            PixelPoint { x: 0.0, y: 10.0 },
            PixelPoint { x: 5.0, y: 2.5 },
            PixelPoint { x: 8.0, y: 0.0 },
        ];
        let rendered = Value::from(path_data(&pixels)).to_string();
        assert!(rendered.starts_with('M'), "{rendered}");
        assert_eq!(rendered.matches('M').count(), 1, "{rendered}");
        assert_eq!(rendered.matches('L').count(), 2, "{rendered}");
    }
}
