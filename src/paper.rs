//! Page geometry: A4 canvases and the points-to-pixels conversion.
//!
//! PDF sizes are in points (1/72 inch). Pages are rasterized at 72 DPI, so a
//! point maps to one pixel.

/// ISO A4 in PDF points, portrait.
pub const A4_WIDTH_PT: f32 = 595.0;
pub const A4_HEIGHT_PT: f32 = 842.0;

const PDF_POINTS_PER_INCH: f32 = 72.0;
pub const DEFAULT_DPI: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape only when strictly wider than tall; square pages are portrait.
    pub fn of(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Target page size in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn a4(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self {
                width: A4_WIDTH_PT,
                height: A4_HEIGHT_PT,
            },
            Orientation::Landscape => Self {
                width: A4_HEIGHT_PT,
                height: A4_WIDTH_PT,
            },
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }

    /// Pixel dimensions at [`DEFAULT_DPI`], never smaller than 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

/// Picks the canvas a page is rasterized onto.
///
/// Without rescaling the page keeps its own size. With rescaling it is
/// stretched onto A4 in the orientation its own proportions suggest.
pub fn target_canvas(page_width: f32, page_height: f32, rescale: bool) -> Canvas {
    if rescale {
        Canvas::a4(Orientation::of(page_width, page_height))
    } else {
        Canvas {
            width: page_width,
            height: page_height,
        }
    }
}

fn to_pixels(points: f32) -> u32 {
    // NaN and negatives saturate to 0
    ((points * DEFAULT_DPI / PDF_POINTS_PER_INCH).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_page_gets_landscape_a4() {
        let canvas = target_canvas(842.0, 300.0, true);
        assert_eq!(canvas.orientation(), Orientation::Landscape);
        assert_eq!(canvas.pixel_size(), (842, 595));
    }

    #[test]
    fn test_portrait_and_square_pages_get_portrait_a4() {
        assert_eq!(target_canvas(200.0, 300.0, true).pixel_size(), (595, 842));
        assert_eq!(target_canvas(500.0, 500.0, true).pixel_size(), (595, 842));
    }

    #[test]
    fn test_without_rescale_page_keeps_its_size() {
        let canvas = target_canvas(612.0, 792.0, false);
        assert_eq!(
            canvas,
            Canvas {
                width: 612.0,
                height: 792.0
            }
        );
        assert_eq!(canvas.pixel_size(), (612, 792));
    }

    #[test]
    fn test_fractional_points_round_to_nearest_pixel() {
        let canvas = target_canvas(595.28, 841.89, false);
        assert_eq!(canvas.pixel_size(), (595, 842));
    }

    #[test]
    fn test_degenerate_sizes_clamp_to_one_pixel() {
        assert_eq!(target_canvas(0.0, -3.0, false).pixel_size(), (1, 1));
        assert_eq!(target_canvas(f32::NAN, 0.2, false).pixel_size(), (1, 1));
    }
}
