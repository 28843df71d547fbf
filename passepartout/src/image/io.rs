use std::borrow::Cow;
use std::path::Path;

use image as image_lib;
use image_lib::{DynamicImage, ImageFormat};

use crate::prelude::*;

fn image_format(filename: &Path) -> Result<ImageFormat> {
    let extension = filename
        .extension()
        .and_then(|os_str| os_str.to_str())
        .ok_or_else(|| Error::InvalidExtension("missing extension".to_string()))?
        .to_ascii_lowercase();

    let format = match extension.as_str() {
        "png" => ImageFormat::Png,
        "jpeg" | "jpg" => ImageFormat::Jpeg,
        "bmp" => ImageFormat::Bmp,
        "gif" => ImageFormat::Gif,

        _ => return Err(Error::InvalidExtension(extension)),
    };

    Ok(format)
}

pub(crate) fn load<P: AsRef<Path>>(filename: P) -> Result<Image> {
    let filename = filename.as_ref();
    image_format(filename)?;

    let img = image_lib::ImageReader::open(filename)?
        .with_guessed_format()?
        .decode()?;

    from_dynamic(img)
}

pub(crate) fn save<P: AsRef<Path>>(image: &Image, filename: P) -> Result<()> {
    let filename = filename.as_ref();
    let format = image_format(filename)?;
    let color_format = image.desc().color_format;

    let image = match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg if color_format.has_alpha() => {
            Cow::Owned(image.clone().convert(color_format.without_alpha())?)
        }
        // the GIF encoder only takes RGB(A)
        ImageFormat::Gif if matches!(color_format, ColorFormat::L8 | ColorFormat::LA8) => {
            Cow::Owned(image.clone().convert(ColorFormat::RGBA8)?)
        }
        _ => Cow::Borrowed(image),
    };

    let color_type = match image.desc().color_format {
        ColorFormat::L8 => image_lib::ColorType::L8,
        ColorFormat::LA8 => image_lib::ColorType::La8,
        ColorFormat::RGB8 => image_lib::ColorType::Rgb8,
        ColorFormat::RGBA8 => image_lib::ColorType::Rgba8,
    };

    let (width, height) = image.dimensions();

    image_lib::save_buffer_with_format(filename, image.bytes(), width, height, color_type, format)?;

    Ok(())
}

pub(crate) fn from_dynamic(img: DynamicImage) -> Result<Image> {
    let color_format = match img.color() {
        image_lib::ColorType::L8 | image_lib::ColorType::L16 => ColorFormat::L8,
        image_lib::ColorType::La8 | image_lib::ColorType::La16 => ColorFormat::LA8,
        image_lib::ColorType::Rgb8 | image_lib::ColorType::Rgb16 | image_lib::ColorType::Rgb32F => {
            ColorFormat::RGB8
        }
        image_lib::ColorType::Rgba8
        | image_lib::ColorType::Rgba16
        | image_lib::ColorType::Rgba32F => ColorFormat::RGBA8,

        other => return Err(Error::UnsupportedColorType(format!("{:?}", other))),
    };

    from_dynamic_as(img, color_format)
}

pub(crate) fn from_dynamic_as(img: DynamicImage, color_format: ColorFormat) -> Result<Image> {
    let desc = ImageDesc::new(img.width(), img.height(), color_format);

    let bytes = match color_format {
        ColorFormat::L8 => img.into_luma8().into_raw(),
        ColorFormat::LA8 => img.into_luma_alpha8().into_raw(),
        ColorFormat::RGB8 => img.into_rgb8().into_raw(),
        ColorFormat::RGBA8 => img.into_rgba8().into_raw(),
    };

    Image::new_with_data(desc, bytes)
}

pub(crate) fn to_dynamic(image: &Image) -> Result<DynamicImage> {
    let (width, height) = image.dimensions();
    let bytes = image.bytes().to_vec();

    let dynamic = match image.desc().color_format {
        ColorFormat::L8 => {
            image_lib::GrayImage::from_raw(width, height, bytes).map(DynamicImage::ImageLuma8)
        }
        ColorFormat::LA8 => {
            image_lib::GrayAlphaImage::from_raw(width, height, bytes).map(DynamicImage::ImageLumaA8)
        }
        ColorFormat::RGB8 => {
            image_lib::RgbImage::from_raw(width, height, bytes).map(DynamicImage::ImageRgb8)
        }
        ColorFormat::RGBA8 => {
            image_lib::RgbaImage::from_raw(width, height, bytes).map(DynamicImage::ImageRgba8)
        }
    };

    dynamic.ok_or_else(|| {
        Error::Encoding(format!("pixel buffer does not match {}", image.desc()))
    })
}
