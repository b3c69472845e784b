use raylib::prelude::*;
use crate::config::GameConfig;
use crate::error::GameError;

pub const CAR_FILE: &str = "car.png";
pub const TILES_FILE: &str = "mapTiles.png";

/// Tileset layout: 5 x 2 cells.
pub const TILESET_CELLS: (u32, u32) = (5, 2);

/// An immutable CPU pixmap, sampled per pixel without `&mut Image`.
#[derive(Clone)]
pub struct Pixmap {
    pub w: u32,
    pub h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    pub fn new(w: u32, h: u32, px: Vec<Color>) -> Self { Self { w, h, px } }

    pub fn filled(w: u32, h: u32, c: Color) -> Self {
        Self::new(w, h, vec![c; (w * h) as usize])
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Color {
        let xi = (x % self.w) as usize;
        let yi = (y % self.h) as usize;
        self.px[(yi * self.w as usize) + xi]
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, c: Color) {
        if x < self.w && y < self.h {
            self.px[(y * self.w + x) as usize] = c;
        }
    }

    fn to_image(&self) -> Image {
        let mut img = Image::gen_image_color(self.w as i32, self.h as i32, Color::BLANK);
        for y in 0..self.h {
            for x in 0..self.w {
                img.draw_pixel(x as i32, y as i32, self.sample(x, y));
            }
        }
        img
    }
}

/// A loaded sheet: pixels for CPU baking plus the GPU texture.
pub struct Sheet {
    pub pixmap: Pixmap,
    pub texture: Texture2D,
}

/// Owns the car sprite and the tileset for the life of the window.
pub struct TextureManager {
    pub car: Sheet,
    pub tiles: Sheet,
}

impl TextureManager {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, cfg: &GameConfig) -> Result<Self, GameError> {
        let (cw, ch) = (cfg.car_size.0 as u32, cfg.car_size.1 as u32);
        let (bw, bh) = (cfg.block.0 as u32, cfg.block.1 as u32);

        let car = Self::load_sheet(rl, thread, &cfg.asset_path(CAR_FILE), "car", || make_car(cw, ch))?;
        let tiles = Self::load_sheet(rl, thread, &cfg.asset_path(TILES_FILE), "tiles", || make_tileset(bw, bh))?;

        tracing::info!(
            car = ?(car.pixmap.w, car.pixmap.h),
            tiles = ?(tiles.pixmap.w, tiles.pixmap.h),
            "textures ready"
        );
        Ok(Self { car, tiles })
    }

    /// Loads `path`, or builds the fallback if the file is missing or unreadable.
    fn load_sheet<F>(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        path: &str,
        what: &'static str,
        fallback: F,
    ) -> Result<Sheet, GameError>
    where
        F: FnOnce() -> Pixmap,
    {
        let (img, pixmap) = match Image::load_image(path) {
            Ok(img) => {
                let w = img.width().max(1) as u32;
                let h = img.height().max(1) as u32;
                let data = img.get_image_data().to_vec(); // Vec<Color>
                (img, Pixmap::new(w, h, data))
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "{what} image unavailable, using generated one");
                let pm = fallback();
                (pm.to_image(), pm)
            }
        };
        let texture = rl
            .load_texture_from_image(thread, &img)
            .map_err(|e| GameError::Texture { what, reason: e.to_string() })?;
        Ok(Sheet { pixmap, texture })
    }
}

#[inline]
pub fn mix(a: Color, b: Color, t: u8) -> Color {
    let ta = t as u16;
    let na = 255u16 - ta;
    let mixc = |x: u8, y: u8| -> u8 { (((x as u16)*na + (y as u16)*ta) / 255) as u8 };
    Color::new(mixc(a.r,b.r), mixc(a.g,b.g), mixc(a.b,b.b), mixc(a.a,b.a))
}

const ROAD: Color = Color::new(70, 70, 76, 255);
const GRASS: Color = Color::new(0, 117, 44, 255);
const KERB_A: Color = Color::new(230, 230, 230, 255);
const KERB_B: Color = Color::new(200, 40, 40, 255);

/// Car body facing up: red with a windscreen near the front.
pub fn make_car(w: u32, h: u32) -> Pixmap {
    let mut pm = Pixmap::filled(w, h, Color::new(200, 30, 30, 255));
    let screen = mix(Color::SKYBLUE, Color::BLACK, 60);
    for y in h / 5..h / 5 + (h / 6).max(1) {
        for x in 1..w.saturating_sub(1) {
            pm.put(x, y, screen);
        }
    }
    pm
}

fn checker(w: u32, h: u32, base: Color) -> Vec<Color> {
    let mut px = vec![base; (w * h) as usize];
    let cell = (w / 2).max(1);
    for y in 0..h {
        for x in 0..w {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                let i = (y * w + x) as usize;
                px[i] = mix(px[i], Color::WHITE, 24);
            }
        }
    }
    px
}

#[derive(Copy, Clone)]
enum Kerb { None, Top, Bottom, Left, Right, TopLeft, TopRight, BottomLeft, BottomRight }

/// Tileset with the cell layout the tile lookup table expects, each cell
/// `bw` x `bh` pixels.
pub fn make_tileset(bw: u32, bh: u32) -> Pixmap {
    let (cols, rows) = TILESET_CELLS;
    let mut pm = Pixmap::filled(bw * cols, bh * rows, GRASS);

    // (cell, kerb side); grass with a kerb facing the road
    let edges = [
        ((3, 0), Kerb::Bottom), // top edge sits above the road
        ((3, 1), Kerb::Top),
        ((4, 1), Kerb::Right),  // left edge
        ((4, 0), Kerb::Left),
        ((1, 0), Kerb::BottomRight),
        ((2, 0), Kerb::BottomLeft),
        ((1, 1), Kerb::TopRight),
        ((2, 1), Kerb::TopLeft),
        ((0, 1), Kerb::None),
    ];

    let wall = checker(bw, bh, Color::new(110, 110, 110, 255));
    for y in 0..bh {
        for x in 0..bw {
            pm.put(x, y, wall[(y * bw + x) as usize]);
        }
    }

    for ((cx, cy), kerb) in edges {
        let (ox, oy) = (cx * bw, cy * bh);
        if matches!(kerb, Kerb::None) {
            for y in 0..bh {
                for x in 0..bw {
                    pm.put(ox + x, oy + y, ROAD);
                }
            }
            continue;
        }
        let t = 2.min(bw).min(bh);
        for y in 0..bh {
            for x in 0..bw {
                let top = y < t;
                let bottom = y >= bh - t;
                let left = x < t;
                let right = x >= bw - t;
                let on = match kerb {
                    Kerb::Top => top,
                    Kerb::Bottom => bottom,
                    Kerb::Left => left,
                    Kerb::Right => right,
                    Kerb::TopLeft => top && left,
                    Kerb::TopRight => top && right,
                    Kerb::BottomLeft => bottom && left,
                    Kerb::BottomRight => bottom && right,
                    Kerb::None => false,
                };
                if on {
                    let c = if ((x + y) / 2) % 2 == 0 { KERB_A } else { KERB_B };
                    pm.put(ox + x, oy + y, c);
                }
            }
        }
    }
    pm
}
