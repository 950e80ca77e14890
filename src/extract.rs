use std::path::Path;

use image::RgbaImage;
use pdfium_render::prelude::*;
use tracing::debug;

use crate::error::CoverError;
use crate::paper;

/// Rasterized cover page, 8-bit RGBA.
pub type PixelBuffer = RgbaImage;

/// Turns the first page of a PDF into pixels.
///
/// Implementations own the document for the duration of the call and must
/// release it before returning, on success or failure.
pub trait PageRasterizer {
    fn rasterize_first_page(&self, path: &Path, rescale: bool) -> Result<PixelBuffer, CoverError>;
}

/// PDFium-backed rasterizer. Binding the native library happens once, here.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Looks for `libpdfium` in the working directory, then on the system path.
    pub fn new() -> Result<Self, CoverError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| CoverError::LibraryUnavailable(format!("{e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize_first_page(&self, path: &Path, rescale: bool) -> Result<PixelBuffer, CoverError> {
        let render_error = |e: PdfiumError| CoverError::Render {
            path: path.to_path_buf(),
            reason: format!("{e:?}"),
        };

        // Dropping `document` closes it, so every return below releases it.
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| CoverError::DocumentOpen {
                path: path.to_path_buf(),
                reason: format!("{e:?}"),
            })?;

        let pages = document.pages();
        if pages.len() == 0 {
            return Err(CoverError::EmptyDocument {
                path: path.to_path_buf(),
            });
        }
        let page = pages.get(0).map_err(render_error)?;

        let (page_width, page_height) = (page.width().value, page.height().value);
        let canvas = paper::target_canvas(page_width, page_height, rescale);
        let (width, height) = canvas.pixel_size();
        debug!(
            path = %path.display(),
            page_width,
            page_height,
            width,
            height,
            rescale,
            orientation = ?canvas.orientation(),
            "rasterizing first page"
        );

        // Setting both target dimensions stretches the page to fill them.
        let render_config =
            PdfRenderConfig::new().set_target_size(width as i32, height as i32);
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(render_error)?;

        let (bitmap_width, bitmap_height) = (bitmap.width() as u32, bitmap.height() as u32);
        let image = RgbaImage::from_raw(bitmap_width, bitmap_height, bitmap.as_rgba_bytes());
        image.ok_or_else(|| CoverError::Render {
            path: path.to_path_buf(),
            reason: format!("bitmap does not match {bitmap_width}x{bitmap_height} RGBA"),
        })
    }
}
