use rayon::prelude::*;
use ripple_texture::{
    create_circle_texture, BufferPool, CpuSurface, PixelSurface, Rgba, TRANSPARENT,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn parallel_acquire_release_never_duplicates() {
    let pool = BufferPool::<CpuSurface>::new();

    (0..2_000).into_par_iter().for_each(|i| {
        let size = 16 + (i % 3) as u32 * 4;
        let tex = create_circle_texture(&pool, Rgba::opaque(0, 0, 255), size, size, 8, 8, 6)
            .expect("render");
        pool.release(tex);
    });

    let stats = pool.stats();
    assert_eq!(stats.allocated + stats.reused, 2_000);
    assert_eq!(stats.rejected, 0);
    // Every allocated texture ends up back in the pool exactly once.
    assert_eq!(pool.available(), stats.allocated);

    let mut ids = HashSet::new();
    let mut drained = Vec::new();
    for _ in 0..stats.allocated {
        let tex = pool.acquire(1, 1).unwrap();
        assert!(ids.insert(tex.id()), "texture {} handed out twice", tex.id());
        drained.push(tex);
    }
    assert_eq!(pool.available(), 0);
}

#[test]
fn racing_double_release_inserts_once() {
    let pool = Arc::new(BufferPool::<CpuSurface>::new());
    let tex = pool.acquire(8, 8).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let tex = tex.clone();
            thread::spawn(move || pool.release(tex))
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(pool.available(), 1);
    assert_eq!(pool.stats().rejected, 7);
}

#[test]
fn each_thread_sees_its_own_circle() {
    let pool = BufferPool::<CpuSurface>::new();
    let colors: Vec<Rgba> = (0..32u8).map(|i| Rgba::opaque(i, 255 - i, 128)).collect();

    colors.par_iter().for_each(|&color| {
        let tex = create_circle_texture(&pool, color, 24, 24, 12, 12, 10).unwrap();
        {
            let pixels = tex.lock().read_pixels();
            assert_eq!(pixels[12 * 24 + 12], color);
            assert_eq!(pixels[2 * 24 + 12], TRANSPARENT);
        }
        pool.release(tex);
    });
}
