use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use tracing::warn;

/// Longest edge of a stored player photo, in pixels
pub const THUMBNAIL_SIZE: u32 = 300;
pub const THUMBNAIL_QUALITY: u8 = 85;
pub const DEFAULT_AVATAR_URI: &str = "https://cdn-icons-png.flaticon.com/512/166/166344.png";

/// Decodes an uploaded image, shrinks it to fit a 300x300 box (aspect ratio
/// kept, never enlarged) and returns it as base64 JPEG. `None` if the bytes
/// are not an image we can read.
pub fn encode_thumbnail(raw: &[u8]) -> Option<String> {
    let img = match image::load_from_memory(raw) {
        Ok(img) => img,
        Err(e) => {
            warn!("Could not decode uploaded photo: {}", e);
            return None;
        }
    };

    let rgb = if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgb8()
    } else {
        img.to_rgb8()
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buf, THUMBNAIL_QUALITY);
        if let Err(e) = encoder.encode_image(&rgb) {
            warn!("Could not encode thumbnail: {}", e);
            return None;
        }
    }

    Some(general_purpose::STANDARD.encode(buf.into_inner()))
}

/// URI an `<img>` can use for a stored photo, or the default avatar.
pub fn resolve_display_image(photo: Option<&str>) -> String {
    match photo {
        Some(b64) if !b64.is_empty() => format!("data:image/jpeg;base64,{}", b64),
        _ => DEFAULT_AVATAR_URI.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30])));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageOutputFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_large_image_is_bounded() {
        let encoded = encode_thumbnail(&png_bytes(900, 600)).unwrap();

        let jpeg = general_purpose::STANDARD.decode(encoded).unwrap();
        let thumb = image::load_from_memory(&jpeg).unwrap();

        assert_eq!(thumb.width(), 300);
        assert_eq!(thumb.height(), 200);
    }

    #[test]
    fn test_small_image_not_enlarged() {
        let encoded = encode_thumbnail(&png_bytes(64, 48)).unwrap();

        let thumb = image::load_from_memory(&general_purpose::STANDARD.decode(encoded).unwrap()).unwrap();

        assert_eq!((thumb.width(), thumb.height()), (64, 48));
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(encode_thumbnail(b"definitely not an image").is_none());
    }

    #[test]
    fn test_resolve_display_image() {
        assert_eq!(resolve_display_image(None), DEFAULT_AVATAR_URI);
        assert_eq!(resolve_display_image(Some("")), DEFAULT_AVATAR_URI);
        assert_eq!(resolve_display_image(Some("QUJD")), "data:image/jpeg;base64,QUJD");
    }
}
