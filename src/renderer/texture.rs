//! Texture loading
//!
//! Nothing in the current draw path is textured, but `draw_quad` accepts a
//! texture and this is how one gets made. A missing or undecodable image is
//! an error; callers treat it as fatal.

use std::path::Path;

use gl::types::{GLint, GLsizei, GLuint};
use image::RgbaImage;

use crate::error::{PongError, Result};

/// OpenGL texture name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub GLuint);

/// Read and decode an image as 8-bit RGBA
pub fn decode_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| PongError::Texture {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode `path` and upload it as a nearest-filtered 2D texture
pub fn load_texture(path: &Path) -> Result<TextureId> {
    let image = decode_rgba(path).inspect_err(|e| log::error!("{e}"))?;
    let (width, height) = image.dimensions();

    let mut id: GLuint = 0;
    unsafe {
        gl::GenTextures(1, &mut id);
        gl::BindTexture(gl::TEXTURE_2D, id);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as GLint,
            width as GLsizei,
            height as GLsizei,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            image.as_raw().as_ptr().cast(),
        );
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);
    }

    log::debug!("Loaded texture {} ({}x{}) from {}", id, width, height, path.display());
    Ok(TextureId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_is_error() {
        let path = std::env::temp_dir().join("sdl_pong_no_such_texture.png");
        let err = decode_rgba(&path).unwrap_err();
        assert!(matches!(err, PongError::Texture { .. }));
        assert!(err.to_string().contains("sdl_pong_no_such_texture.png"));
    }

    #[test]
    fn test_decode_png() {
        let path = std::env::temp_dir().join(format!("sdl_pong_tex_{}.png", std::process::id()));
        let mut img = RgbaImage::new(2, 3);
        img.put_pixel(1, 2, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let decoded = decode_rgba(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(decoded.dimensions(), (2, 3));
        assert_eq!(decoded.get_pixel(1, 2).0, [255, 0, 0, 255]);
    }
}
