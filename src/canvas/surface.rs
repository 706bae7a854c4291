/// Interfaz mínima que el host debe ofrecer para alojar un buffer de píxeles.
/// Todo lo que el pool y el rasterizador necesitan pasa por aquí.
use crate::color::Rgba;
use crate::config::TextureSettings;
use crate::error::{RippleError, RippleResult};

/// Imagen direccionable por píxel del lado del host. Los píxeles usan el mismo
/// layout lineal que el rasterizador; `read_pixels().len() == width * height`.
pub trait PixelSurface: Send + Sized {
    /// Crea una superficie nueva. Un fallo de allocación es fatal para el llamador.
    fn create(width: u32, height: u32, settings: &TextureSettings) -> RippleResult<Self>;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Cambia las dimensiones in situ. El contenido previo queda invalidado.
    fn resize(&mut self, width: u32, height: u32) -> RippleResult<()>;

    fn read_pixels(&self) -> Vec<Rgba>;

    /// Reemplaza todos los píxeles; `pixels.len()` debe ser `width * height`.
    fn write_pixels(&mut self, pixels: &[Rgba]) -> RippleResult<()>;

    /// Vuelca las escrituras pendientes para que el consumidor pueda mostrarla.
    fn commit(&mut self) -> RippleResult<()>;

    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// `width * height` comprobado; el overflow es un error de allocación.
pub(crate) fn pixel_count_for(width: u32, height: u32) -> RippleResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| RippleError::allocation(width, height))
}

pub(crate) fn check_pixel_count(expected: usize, actual: usize) -> RippleResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(RippleError::PixelCountMismatch { expected, actual })
    }
}

/// Superficie en memoria. `commit` incrementa un contador de revisión que hace
/// las veces de la subida a GPU de un motor real.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    settings: TextureSettings,
    revision: u64,
    dirty: bool,
}

impl CpuSurface {
    pub fn settings(&self) -> &TextureSettings {
        &self.settings
    }

    /// Número de commits desde la allocación.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` si hay píxeles escritos sin commit.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Reutiliza la allocación existente si el nuevo tamaño cabe en ella.
    /// Si la reserva falla, el buffer conserva su tamaño y contenido.
    fn reallocate(&mut self, width: u32, height: u32) -> RippleResult<()> {
        let count = pixel_count_for(width, height)?;
        self.pixels
            .try_reserve(count.saturating_sub(self.pixels.len()))
            .map_err(|_| RippleError::allocation(width, height))?;
        self.pixels.clear();
        self.pixels.resize(count, Rgba::default());
        self.width = width;
        self.height = height;
        Ok(())
    }
}

impl PixelSurface for CpuSurface {
    fn create(width: u32, height: u32, settings: &TextureSettings) -> RippleResult<Self> {
        let mut surface = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            settings: settings.clone(),
            revision: 0,
            dirty: false,
        };
        surface.reallocate(width, height)?;
        Ok(surface)
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) -> RippleResult<()> {
        self.reallocate(width, height)?;
        self.dirty = true;
        Ok(())
    }

    fn read_pixels(&self) -> Vec<Rgba> {
        self.pixels.clone()
    }

    fn write_pixels(&mut self, pixels: &[Rgba]) -> RippleResult<()> {
        check_pixel_count(self.pixels.len(), pixels.len())?;
        self.pixels.copy_from_slice(pixels);
        self.dirty = true;
        Ok(())
    }

    fn commit(&mut self) -> RippleResult<()> {
        self.revision += 1;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_zero_fills_and_keeps_invariant() {
        let s = CpuSurface::create(4, 3, &TextureSettings::default()).unwrap();
        assert_eq!(s.pixel_count(), 12);
        assert_eq!(s.read_pixels().len(), 12);
        assert!(s.read_pixels().iter().all(|p| *p == Rgba::default()));
    }

    #[test]
    fn resize_updates_dimensions() {
        let mut s = CpuSurface::create(8, 8, &TextureSettings::default()).unwrap();
        s.resize(16, 2).unwrap();
        assert_eq!((s.width(), s.height()), (16, 2));
        assert_eq!(s.read_pixels().len(), 32);
    }

    #[test]
    fn write_rejects_wrong_length() {
        let mut s = CpuSurface::create(2, 2, &TextureSettings::default()).unwrap();
        let err = s.write_pixels(&[Rgba::default(); 3]).unwrap_err();
        assert!(matches!(
            err,
            RippleError::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn commit_clears_dirty_flag() {
        let mut s = CpuSurface::create(1, 1, &TextureSettings::default()).unwrap();
        s.write_pixels(&[Rgba::opaque(1, 2, 3)]).unwrap();
        assert!(s.is_dirty());
        s.commit().unwrap();
        assert!(!s.is_dirty());
        assert_eq!(s.revision(), 1);
    }

    #[test]
    fn failed_resize_keeps_previous_buffer() {
        let mut s = CpuSurface::create(4, 4, &TextureSettings::default()).unwrap();
        s.write_pixels(&[Rgba::opaque(5, 6, 7); 16]).unwrap();

        let err = s.resize(u32::MAX, u32::MAX).unwrap_err();
        assert!(err.is_resource_exhausted());
        assert_eq!((s.width(), s.height()), (4, 4));
        assert_eq!(s.pixel_count(), s.read_pixels().len());
        assert!(s.read_pixels().iter().all(|p| *p == Rgba::opaque(5, 6, 7)));
        s.write_pixels(&[Rgba::default(); 16]).unwrap();
    }

    #[test]
    fn overflowing_dimensions_are_an_allocation_error() {
        let err = CpuSurface::create(u32::MAX, u32::MAX, &TextureSettings::default()).unwrap_err();
        assert!(err.is_resource_exhausted());
    }
}
