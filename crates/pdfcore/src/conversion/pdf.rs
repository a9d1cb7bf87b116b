//! Image → single-page PDF
//!
//! The decoded image is normalized to 8-bit gray or RGB, embedded as a
//! baseline JPEG (`DCTDecode`) and drawn to fill a page whose size is the
//! pixel size at a fixed resolution. Normalization rules:
//! - grayscale without alpha → `DeviceGray`
//! - everything else → `DeviceRGB`
//! - an alpha channel is composited over opaque white first
//!
//! No timestamps or ids are written, so the same input always produces the
//! same bytes.

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, GrayImage, Rgb, RgbImage, Rgba, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::sniff_format;
use crate::core::config;
use crate::core::error::{ConvertError, ConvertResult};

/// Resource name the page content uses to reference the image XObject
const IMAGE_NAME: &str = "Im0";

/// PDF points per inch
const POINTS_PER_INCH: f32 = 72.0;

/// Options for PDF output
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Page resolution; one pixel is `72 / dpi` points
    pub dpi: f32,
    /// Quality of the embedded JPEG stream (1-100)
    pub jpeg_quality: u8,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            dpi: config::pdf::RESOLUTION_DPI,
            jpeg_quality: config::pdf::JPEG_QUALITY,
        }
    }
}

/// Converts raw image bytes into a one-page PDF using the default options
/// (100 DPI).
///
/// # Errors
/// * [`ConvertError::DecodeFailed`] - bytes are not a recognized raster image
/// * [`ConvertError::EncodeFailed`] - JPEG or PDF serialization failed
pub fn image_to_pdf(bytes: &[u8]) -> ConvertResult<Vec<u8>> {
    image_to_pdf_with(bytes, &PdfOptions::default())
}

/// Converts raw image bytes into a one-page PDF.
pub fn image_to_pdf_with(bytes: &[u8], options: &PdfOptions) -> ConvertResult<Vec<u8>> {
    if options.dpi.is_nan() || options.dpi <= 0.0 {
        return Err(ConvertError::EncodeFailed(format!("invalid resolution: {}", options.dpi)));
    }

    let format = sniff_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format).map_err(ConvertError::DecodeFailed)?;
    log::debug!(
        "Decoded {:?} image {}x{} ({:?})",
        format,
        image.width(),
        image.height(),
        image.color()
    );

    let raster = PageRaster::from_image(image);
    let (width, height) = raster.dimensions();
    let jpeg = raster.to_jpeg(options.jpeg_quality.clamp(1, 100))?;

    build_document(jpeg, width, height, raster.color_space(), options.dpi)
}

/// Page size in points for an image of `width`×`height` pixels at `dpi`.
pub fn page_size_points(width: u32, height: u32, dpi: f32) -> (f32, f32) {
    (
        width as f32 * POINTS_PER_INCH / dpi,
        height as f32 * POINTS_PER_INCH / dpi,
    )
}

/// Pixels after normalization to a color space the PDF can carry directly
enum PageRaster {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl PageRaster {
    fn from_image(image: DynamicImage) -> Self {
        match image.color() {
            ColorType::L8 | ColorType::L16 => PageRaster::Gray(image.into_luma8()),
            color if color.has_alpha() => PageRaster::Rgb(flatten_onto_white(&image.into_rgba8())),
            _ => PageRaster::Rgb(image.into_rgb8()),
        }
    }

    fn dimensions(&self) -> (u32, u32) {
        match self {
            PageRaster::Gray(img) => img.dimensions(),
            PageRaster::Rgb(img) => img.dimensions(),
        }
    }

    fn color_space(&self) -> &'static str {
        match self {
            PageRaster::Gray(_) => "DeviceGray",
            PageRaster::Rgb(_) => "DeviceRGB",
        }
    }

    fn to_jpeg(&self, quality: u8) -> ConvertResult<Vec<u8>> {
        let mut out = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut out, quality);
        match self {
            PageRaster::Gray(img) => img.write_with_encoder(encoder),
            PageRaster::Rgb(img) => img.write_with_encoder(encoder),
        }
        .map_err(|e| ConvertError::EncodeFailed(format!("JPEG encoding failed: {}", e)))?;
        Ok(out)
    }
}

/// Alpha-composites every pixel over opaque white.
fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let alpha = u16::from(a);
        // round(c * a / 255 + 255 * (255 - a) / 255)
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

fn build_document(jpeg: Vec<u8>, width: u32, height: u32, color_space: &str, dpi: f32) -> ConvertResult<Vec<u8>> {
    let (page_width, page_height) = page_size_points(width, height, dpi);

    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => color_space,
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    // Scale the unit square to the full page, then paint the image into it.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(page_width),
                    0.into(),
                    0.into(),
                    Object::Real(page_height),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), Object::Real(page_width), Object::Real(page_height)],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Producer" => Object::string_literal("pdfbot"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ConvertError::EncodeFailed(format!("PDF serialization failed: {}", e)))?;

    Ok(out)
}
