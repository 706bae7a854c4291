//! `PixelSurface` host backed by a `tiny_skia::Pixmap`.
//
// tiny-skia guarda RGBA premultiplicado; el resto del crate trabaja con RGBA
// directo. La conversión ocurre sólo en `read_pixels` / `write_pixels`.

use super::surface::{check_pixel_count, PixelSurface};
use crate::color::Rgba;
use crate::config::TextureSettings;
use crate::error::{RippleError, RippleResult};
use tiny_skia::{ColorU8, Pixmap, PremultipliedColorU8};

pub struct SkiaSurface {
    pixmap: Pixmap,
    settings: TextureSettings,
}

impl SkiaSurface {
    /// Pixmap premultiplicado, listo para dibujarse con tiny-skia.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn settings(&self) -> &TextureSettings {
        &self.settings
    }
}

fn premultiply(c: Rgba) -> PremultipliedColorU8 {
    ColorU8::from_rgba(c.r, c.g, c.b, c.a).premultiply()
}

fn demultiply(p: PremultipliedColorU8) -> Rgba {
    let c = p.demultiply();
    Rgba::new(c.red(), c.green(), c.blue(), c.alpha())
}

impl PixelSurface for SkiaSurface {
    /// tiny-skia rechaza pixmaps de tamaño cero; se reportan como error de
    /// allocación.
    fn create(width: u32, height: u32, settings: &TextureSettings) -> RippleResult<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or_else(|| RippleError::allocation(width, height))?;
        Ok(Self {
            pixmap,
            settings: settings.clone(),
        })
    }

    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Si la allocación falla, el pixmap anterior queda intacto.
    fn resize(&mut self, width: u32, height: u32) -> RippleResult<()> {
        self.pixmap =
            Pixmap::new(width, height).ok_or_else(|| RippleError::allocation(width, height))?;
        Ok(())
    }

    /// Colores translúcidos vuelven con el redondeo del premultiplicado.
    fn read_pixels(&self) -> Vec<Rgba> {
        self.pixmap.pixels().iter().copied().map(demultiply).collect()
    }

    fn write_pixels(&mut self, pixels: &[Rgba]) -> RippleResult<()> {
        check_pixel_count(self.pixel_count(), pixels.len())?;
        for (dst, src) in self.pixmap.pixels_mut().iter_mut().zip(pixels) {
            *dst = premultiply(*src);
        }
        Ok(())
    }

    fn commit(&mut self) -> RippleResult<()> {
        // El pixmap es el propio backing store.
        Ok(())
    }
}
