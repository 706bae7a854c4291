/// Rasterizado en CPU de círculos rellenos sobre fondo transparente.
/// Trabaja directamente sobre el buffer lineal de píxeles del host.
use super::buffer_pool::{BufferPool, Texture};
use super::surface::PixelSurface;
use crate::color::{Rgba, TRANSPARENT};
use crate::error::RippleResult;

/// Geometría y color de una petición de textura circular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleSpec {
    pub color: Rgba,
    pub width: u32,
    pub height: u32,
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl CircleSpec {
    /// Índice lineal de `(u, v)`: `u * width + v`, el layout con el que se
    /// crearon las texturas de ripple existentes. `None` si cae fuera del
    /// buffer. Sólo se comprueba el índice combinado, así que en buffers no
    /// cuadrados una fila desbordada continúa en la siguiente.
    pub fn pixel_index(&self, u: i64, v: i64) -> Option<usize> {
        let idx = u * self.width as i64 + v;
        let len = self.width as i64 * self.height as i64;
        (0..len).contains(&idx).then_some(idx as usize)
    }

    /// Estrictamente dentro del círculo; los puntos justo en el borde quedan fuera.
    pub fn covers(&self, u: i64, v: i64) -> bool {
        let dx = self.center_x as i64 - u;
        let dy = self.center_y as i64 - v;
        let r = self.radius as i64;
        dx * dx + dy * dy < r * r
    }

    /// Rango inclusivo del cuadrado envolvente en ambos ejes. Vacío con radio
    /// negativo.
    fn bounds(&self) -> (std::ops::RangeInclusive<i64>, std::ops::RangeInclusive<i64>) {
        let (cx, cy, r) = (
            self.center_x as i64,
            self.center_y as i64,
            self.radius as i64,
        );
        (cx - r..=cx + r, cy - r..=cy + r)
    }
}

/// Pinta `spec` en `pixels` (longitud `width * height`). Los píxeles del
/// cuadrado envolvente reciben el color o el transparente; el resto queda
/// como estaba. Devuelve cuántos píxeles se escribieron.
pub fn paint_circle(pixels: &mut [Rgba], spec: &CircleSpec) -> usize {
    let (us, vs) = spec.bounds();
    let mut written = 0;
    for u in us {
        for v in vs.clone() {
            let Some(idx) = spec.pixel_index(u, v) else {
                continue;
            };
            // Hosts que reportan más píxeles de los que devuelven.
            let Some(px) = pixels.get_mut(idx) else {
                continue;
            };
            *px = if spec.covers(u, v) {
                spec.color
            } else {
                TRANSPARENT
            };
            written += 1;
        }
    }
    written
}

/// Pide al `pool` una textura `width x height`, pinta un círculo relleno de
/// `color` centrado en `(center_x, center_y)`, hace commit y la entrega fuera
/// del pool. Devolverla con `release` cuando termine el efecto.
pub fn create_circle_texture<S: PixelSurface>(
    pool: &BufferPool<S>,
    color: Rgba,
    width: u32,
    height: u32,
    center_x: i32,
    center_y: i32,
    radius: i32,
) -> RippleResult<Texture<S>> {
    render_circle(
        pool,
        &CircleSpec {
            color,
            width,
            height,
            center_x,
            center_y,
            radius,
        },
    )
}

/// Igual que [`create_circle_texture`], con la petición en un [`CircleSpec`].
pub fn render_circle<S: PixelSurface>(
    pool: &BufferPool<S>,
    spec: &CircleSpec,
) -> RippleResult<Texture<S>> {
    let texture = pool.acquire(spec.width, spec.height)?;
    {
        let mut surface = texture.lock();
        let mut pixels = surface.read_pixels();
        paint_circle(&mut pixels, spec);
        surface.write_pixels(&pixels)?;
        surface.commit()?;
    }
    Ok(texture)
}
