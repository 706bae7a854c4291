/// Pool de texturas para reutilizar buffers de píxeles y evitar allocaciones
/// costosas cada vez que se dispara un efecto ripple.
use super::surface::PixelSurface;
use crate::config::TextureSettings;
use crate::error::RippleResult;
use log::{debug, trace, warn};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle compartido a una superficie del pool. Clonarlo no copia píxeles;
/// dos handles son iguales sólo si apuntan a la misma superficie.
pub struct Texture<S> {
    inner: Arc<TextureInner<S>>,
}

struct TextureInner<S> {
    id: u64,
    surface: Mutex<S>,
}

impl<S: PixelSurface> Texture<S> {
    fn new(surface: S) -> Self {
        Self {
            inner: Arc::new(TextureInner {
                id: NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed),
                surface: Mutex::new(surface),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Toma el lock de la superficie: no llamar mientras se tiene `lock()`
    /// en el mismo hilo (el mutex no es reentrante). Con el guard en la mano,
    /// usar `guard.width()`.
    pub fn width(&self) -> u32 {
        self.inner.surface.lock().width()
    }

    pub fn height(&self) -> u32 {
        self.inner.surface.lock().height()
    }

    /// `(width, height)` leídos bajo un único lock. Mismas restricciones que
    /// [`Texture::width`].
    pub fn size(&self) -> (u32, u32) {
        let surface = self.inner.surface.lock();
        (surface.width(), surface.height())
    }

    /// Como [`Texture::size`], pero devuelve `None` en vez de bloquear si la
    /// superficie ya está tomada (también por el propio hilo).
    pub fn try_size(&self) -> Option<(u32, u32)> {
        let surface = self.inner.surface.try_lock()?;
        Some((surface.width(), surface.height()))
    }

    /// Acceso exclusivo a la superficie del host. Mientras el guard viva,
    /// `width()`, `height()` y `size()` sobre este mismo handle se bloquean;
    /// leer las dimensiones desde el guard.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.surface.lock()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> Clone for Texture<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PixelSurface> PartialEq for Texture<S> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<S: PixelSurface> Eq for Texture<S> {}

impl<S> fmt::Debug for Texture<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture").field("id", &self.inner.id).finish()
    }
}

/// Contadores de uso del pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers creados porque el pool estaba vacío.
    pub allocated: usize,
    /// Acquires servidos desde el pool.
    pub reused: usize,
    /// Buffers reutilizados que cambiaron de tamaño.
    pub resized: usize,
    /// Releases ignorados porque el buffer ya estaba en el pool.
    pub rejected: usize,
}

#[derive(Default)]
struct Counters {
    allocated: AtomicUsize,
    reused: AtomicUsize,
    resized: AtomicUsize,
    rejected: AtomicUsize,
}

/// Conjunto thread-safe de texturas disponibles. Reutiliza en orden LIFO sin
/// mirar el tamaño y nunca descarta texturas.
pub struct BufferPool<S: PixelSurface> {
    available: Mutex<Vec<Texture<S>>>,
    settings: TextureSettings,
    counters: Counters,
}

impl<S: PixelSurface> BufferPool<S> {
    pub fn new() -> Self {
        Self::with_settings(TextureSettings::default())
    }

    /// Pool cuyas texturas nuevas se crean con `settings`.
    pub fn with_settings(settings: TextureSettings) -> Self {
        Self {
            available: Mutex::new(Vec::new()),
            settings,
            counters: Counters::default(),
        }
    }

    pub fn settings(&self) -> &TextureSettings {
        &self.settings
    }

    /// Toma cualquier textura disponible, redimensionada a `width x height` si
    /// hace falta, o crea una nueva. El contenido de una reutilizada no está
    /// definido.
    pub fn acquire(&self, width: u32, height: u32) -> RippleResult<Texture<S>> {
        // El lock cubre sólo el pop; resize y allocación van fuera.
        let pooled = self.available.lock().pop();
        match pooled {
            Some(texture) => {
                {
                    let mut surface = texture.lock();
                    if surface.width() != width || surface.height() != height {
                        trace!(
                            "resizing texture {} from {}x{} to {}x{}",
                            texture.id(),
                            surface.width(),
                            surface.height(),
                            width,
                            height
                        );
                        surface.resize(width, height)?;
                        self.counters.resized.fetch_add(1, Ordering::Relaxed);
                    }
                }
                self.counters.reused.fetch_add(1, Ordering::Relaxed);
                Ok(texture)
            }
            None => {
                let surface = S::create(width, height, &self.settings)?;
                let texture = Texture::new(surface);
                self.counters.allocated.fetch_add(1, Ordering::Relaxed);
                debug!(
                    "allocated texture {} ({}x{}) for {}",
                    texture.id(),
                    width,
                    height,
                    self.settings.name
                );
                Ok(texture)
            }
        }
    }

    /// Devuelve una textura al pool. `None` se ignora, igual que una textura
    /// que ya estaba en el pool (se avisa con un warning).
    pub fn release(&self, texture: impl Into<Option<Texture<S>>>) {
        let Some(texture) = texture.into() else {
            return;
        };
        let mut available = self.available.lock();
        if available.iter().any(|t| t.ptr_eq(&texture)) {
            warn!("texture {} was already returned to the pool", texture.id());
            self.counters.rejected.fetch_add(1, Ordering::Relaxed);
            return;
        }
        available.push(texture);
    }

    /// Texturas esperando a ser reutilizadas.
    pub fn available(&self) -> usize {
        self.available.lock().len()
    }

    pub fn contains(&self, texture: &Texture<S>) -> bool {
        self.available.lock().iter().any(|t| t.ptr_eq(texture))
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocated: self.counters.allocated.load(Ordering::Relaxed),
            reused: self.counters.reused.load(Ordering::Relaxed),
            resized: self.counters.resized.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
        }
    }
}

impl<S: PixelSurface> Default for BufferPool<S> {
    fn default() -> Self {
        Self::new()
    }
}
