/// Exportación de texturas a PNG para depuración y para la CLI.
use super::buffer_pool::Texture;
use super::surface::PixelSurface;
use crate::error::RippleResult;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::path::Path;

/// Codifica los píxeles actuales de la textura como PNG RGBA8. El buffer se
/// escribe en su layout lineal, `width` píxeles por fila de imagen.
pub fn encode_png<S: PixelSurface>(texture: &Texture<S>) -> RippleResult<Vec<u8>> {
    let (width, height, pixels) = {
        let surface = texture.lock();
        (surface.width(), surface.height(), surface.read_pixels())
    };
    let mut buf: Vec<u8> = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        bytemuck::cast_slice::<_, u8>(pixels.as_slice()),
        width,
        height,
        ColorType::Rgba8,
    )?;
    Ok(buf)
}

pub fn save_png<S: PixelSurface>(texture: &Texture<S>, path: impl AsRef<Path>) -> RippleResult<()> {
    let bytes = encode_png(texture)?;
    std::fs::write(path.as_ref(), bytes)?;
    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}
