//! Generated stand-ins for the image assets.
//!
//! The chapters look for their textures under the asset directory first. When a file is not
//! there, one of these images is uploaded instead so every chapter still runs from a bare
//! checkout. All generators are deterministic.

use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length used by the chapters for generated textures.
pub const DEFAULT_SIZE: u32 = 256;

/// Seeded values in `[0, 1)` on a grid of cells, wrapping around at the edges.
struct CellNoise {
    columns: u32,
    rows: u32,
    values: Vec<f32>,
}

impl CellNoise {
    fn new(seed: u64, columns: u32, rows: u32) -> CellNoise {
        let (columns, rows) = (columns.max(1), rows.max(1));
        let mut rng = StdRng::seed_from_u64(seed);
        let values = (0..columns * rows).map(|_| rng.gen()).collect();
        CellNoise { columns, rows, values }
    }

    fn at(&self, x: u32, y: u32) -> f32 {
        self.values[((y % self.rows) * self.columns + x % self.columns) as usize]
    }
}

fn shade(color: [u8; 3], factor: f32) -> Rgba<u8> {
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Rgba([scale(color[0]), scale(color[1]), scale(color[2]), 255])
}

/// Two-color checkerboard with `cells` squares per side.
pub fn checkerboard(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> RgbaImage {
    let cell = (size / cells.max(1)).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba(a)
        } else {
            Rgba(b)
        }
    })
}

/// Running-bond brick wall with mortar lines.
pub fn brick(size: u32) -> RgbaImage {
    let rows = 8;
    let brick_h = (size / rows).max(2);
    let brick_w = brick_h * 2;
    let mortar = (brick_h / 8).max(1);
    let bricks = CellNoise::new(1, size / brick_w + 2, size / brick_h + 1);
    let mut grain = StdRng::seed_from_u64(2);

    RgbaImage::from_fn(size, size, |x, y| {
        let jitter: f32 = grain.gen();
        let row = y / brick_h;
        let offset = if row % 2 == 0 { 0 } else { brick_w / 2 };
        let bx = (x + offset) % brick_w;
        let by = y % brick_h;
        if bx < mortar || by < mortar {
            return shade([200, 195, 185], 0.9 + 0.1 * jitter);
        }
        let column = (x + offset) / brick_w;
        let tint = 0.75 + 0.25 * bricks.at(column, row) + 0.05 * jitter;
        shade([178, 84, 60], tint)
    })
}

/// Yellow smiley face on a transparent background.
pub fn smiley(size: u32) -> RgbaImage {
    let s = size as f32;
    let inside = |x: f32, y: f32, cx: f32, cy: f32, r: f32| (x - cx).powi(2) + (y - cy).powi(2) <= r * r;

    RgbaImage::from_fn(size, size, |x, y| {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let (c, r) = (s / 2.0, s * 0.45);
        if !inside(fx, fy, c, c, r) {
            return Rgba([0, 0, 0, 0]);
        }
        if !inside(fx, fy, c, c, r - s * 0.03) {
            return Rgba([40, 30, 10, 255]);
        }
        let eye = s * 0.06;
        if inside(fx, fy, s * 0.35, s * 0.38, eye) || inside(fx, fy, s * 0.65, s * 0.38, eye) {
            return Rgba([40, 30, 10, 255]);
        }
        // image rows grow downward, so the mouth is the lower half of a ring
        let mouth = inside(fx, fy, c, s * 0.52, s * 0.25) && !inside(fx, fy, c, s * 0.52, s * 0.2);
        if mouth && fy > s * 0.55 {
            return Rgba([40, 30, 10, 255]);
        }
        Rgba([250, 205, 40, 255])
    })
}

/// Wooden crate: planks inside a steel frame.
pub fn container_diffuse(size: u32) -> RgbaImage {
    let frame = size / 10;
    let plank = (size / 6).max(1);
    let steel = CellNoise::new(3, size / 4 + 1, size / 4 + 1);
    let fibers = CellNoise::new(4, size / 2 + 1, size / plank + 1);
    let mut jitter = StdRng::seed_from_u64(5);
    RgbaImage::from_fn(size, size, |x, y| {
        let edge = x < frame || y < frame || x >= size - frame || y >= size - frame;
        if edge {
            return shade([120, 122, 128], 0.85 + 0.15 * steel.at(x / 4, y / 4));
        }
        let grain = 0.8 + 0.15 * fibers.at(x / 2, y / plank) + 0.05 * jitter.gen::<f32>();
        let seam = y % plank == 0;
        if seam {
            shade([90, 55, 25], 0.8)
        } else {
            shade([160, 105, 55], grain)
        }
    })
}

/// Specular map matching [`container_diffuse`]: shiny frame, dull wood.
pub fn container_specular(size: u32) -> RgbaImage {
    let frame = size / 10;
    let steel = CellNoise::new(6, size / 4 + 1, size / 4 + 1);
    RgbaImage::from_fn(size, size, |x, y| {
        let edge = x < frame || y < frame || x >= size - frame || y >= size - frame;
        if edge {
            let v = (170.0 + 60.0 * steel.at(x / 4, y / 4)) as u8;
            Rgba([v, v, v, 255])
        } else {
            Rgba([8, 8, 8, 255])
        }
    })
}

/// Grey stone tiles with dark grout.
pub fn stone_tiles(size: u32) -> RgbaImage {
    let tile = (size / 4).max(2);
    let grout = (tile / 16).max(1);
    let tiles = CellNoise::new(8, size / tile + 1, size / tile + 1);
    let mut jitter = StdRng::seed_from_u64(9);
    RgbaImage::from_fn(size, size, |x, y| {
        if x % tile < grout || y % tile < grout {
            return shade([60, 58, 55], 1.0);
        }
        let tint = 0.7 + 0.2 * tiles.at(x / tile, y / tile) + 0.1 * jitter.gen::<f32>();
        shade([150, 148, 140], tint)
    })
}

/// Horizontal wooden floor planks.
pub fn wood_planks(size: u32) -> RgbaImage {
    let plank = (size / 8).max(2);
    let planks = CellNoise::new(10, 1, size / plank + 1);
    let fibers = CellNoise::new(11, size / 3 + 1, size);
    RgbaImage::from_fn(size, size, |x, y| {
        let row = y / plank;
        if y % plank == 0 {
            return shade([70, 40, 20], 1.0);
        }
        let tint = 0.75 + 0.2 * planks.at(0, row) + 0.05 * fibers.at(x / 3, y);
        shade([170, 110, 60], tint)
    })
}

/// Grass blades on a fully transparent background, for alpha testing.
pub fn grass(size: u32) -> RgbaImage {
    let blades = 12;
    let s = size as f32;
    let mut rng = StdRng::seed_from_u64(12);
    let shapes: Vec<(f32, f32)> =
        (0..blades).map(|_| (0.5 + 0.45 * rng.gen::<f32>(), rng.gen_range(-0.1..0.1))).collect();
    RgbaImage::from_fn(size, size, |x, y| {
        // distance from the bottom edge, 0 at the bottom row
        let height = (s - 1.0 - y as f32) / s;
        for (blade, &(top, lean)) in shapes.iter().enumerate() {
            let base = (blade as f32 + 0.5) / blades as f32;
            let width = 0.035 * (1.0 - height / top).max(0.0);
            let center = base + lean * height;
            if height <= top && ((x as f32 + 0.5) / s - center).abs() <= width {
                let green = 0.6 + 0.4 * height;
                return shade([60, 150, 40], green);
            }
        }
        Rgba([0, 0, 0, 0])
    })
}

/// Red tinted glass with an opaque frame, for blending.
pub fn window_pane(size: u32) -> RgbaImage {
    let frame = (size / 16).max(1);
    let tint = CellNoise::new(14, size / 16 + 1, size / 16 + 1);
    RgbaImage::from_fn(size, size, |x, y| {
        let edge = x < frame || y < frame || x >= size - frame || y >= size - frame;
        let mullion = (x as i64 - size as i64 / 2).abs() < frame as i64 / 2
            || (y as i64 - size as i64 / 2).abs() < frame as i64 / 2;
        if edge || mullion {
            Rgba([60, 40, 30, 255])
        } else {
            let alpha = (100.0 + 40.0 * tint.at(x / 16, y / 16)) as u8;
            Rgba([200, 40, 40, alpha])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_noise_is_seeded_and_wraps() {
        let noise = CellNoise::new(5, 4, 3);
        assert_eq!(noise.values, CellNoise::new(5, 4, 3).values);
        assert_ne!(noise.values, CellNoise::new(6, 4, 3).values);
        assert!(noise.values.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(noise.at(1, 2), noise.at(5, 5));
    }

    #[test]
    fn empty_grid_still_has_one_cell() {
        let noise = CellNoise::new(1, 0, 0);
        assert_eq!(noise.values.len(), 1);
        assert_eq!(noise.at(7, 9), noise.values[0]);
    }

    #[test]
    fn checkerboard_alternates() {
        let image = checkerboard(8, 2, [255, 255, 255, 255], [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(4, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(4, 4).0, [255, 255, 255, 255]);
    }
}
