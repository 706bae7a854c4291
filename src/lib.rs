//! Pooled circle textures for ripple/feedback effects.
//!
//! ```no_run
//! use ripple_texture::{create_circle_texture, BufferPool, CpuSurface, Rgba};
//!
//! let pool = BufferPool::<CpuSurface>::new();
//! let tex = create_circle_texture(&pool, Rgba::opaque(255, 255, 255), 64, 64, 32, 32, 30)?;
//! // ... display it ...
//! pool.release(tex);
//! # Ok::<(), ripple_texture::RippleError>(())
//! ```
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;

pub use canvas::{
    create_circle_texture, global_pool, paint_circle, render_circle, BufferPool, CircleSpec,
    CpuSurface, PixelSurface, PoolStats, Texture,
};
pub use color::{Rgba, TRANSPARENT};
pub use config::{FilterMode, RippleConfig, TextureSettings, WrapMode};
pub use error::{RippleError, RippleResult};
