use std::path::Path;

use image::{ColorType, DynamicImage};
use ts_core::TestScriptError;

pub fn load_image(path: &Path) -> Result<DynamicImage, TestScriptError> {
    image::open(path).map_err(|source| TestScriptError::ReferenceImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), TestScriptError> {
    image.save(path).map_err(|source| TestScriptError::SaveImage {
        path: path.to_path_buf(),
        source,
    })
}

// Pixel format conversion only; dimensions are left untouched.
pub fn convert_to_color(image: &DynamicImage, color: ColorType) -> DynamicImage {
    if image.color() == color {
        return image.clone();
    }
    match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        ColorType::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
        ColorType::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        _ => image.clone(),
    }
}

pub fn images_equal(left: &DynamicImage, right: &DynamicImage) -> bool {
    left.width() == right.width()
        && left.height() == right.height()
        && left.color() == right.color()
        && left.as_bytes() == right.as_bytes()
}
