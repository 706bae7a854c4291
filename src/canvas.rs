//! Módulo de texturas circulares para el efecto ripple.
//
// `surface` define la interfaz mínima con el host, `buffer_pool` reutiliza
// las texturas entre disparos del efecto y `rasterizer` pinta el círculo.
pub mod buffer_pool;
pub mod export;
pub mod rasterizer;
#[cfg(feature = "skia")]
pub mod skia_surface;
pub mod surface;

pub use buffer_pool::{BufferPool, PoolStats, Texture};
pub use export::{encode_png, save_png};
pub use rasterizer::{create_circle_texture, paint_circle, render_circle, CircleSpec};
pub use surface::{CpuSurface, PixelSurface};

#[cfg(feature = "skia")]
pub use skia_surface::SkiaSurface;

use once_cell::sync::Lazy;

static GLOBAL_POOL: Lazy<BufferPool<CpuSurface>> = Lazy::new(BufferPool::new);

/// Process-wide pool for callers without an owning context. Lives until the
/// process exits; prefer an explicit `BufferPool` when teardown matters.
pub fn global_pool() -> &'static BufferPool<CpuSurface> {
    &GLOBAL_POOL
}
