use raylib::prelude::*;
use raylib::core::texture::RaylibTexture2D; // ← trait for .update_texture()
use crate::error::GameError;

/// CPU pixel buffer. The track never changes, so it is painted here once
/// and uploaded to a texture.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLANK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set_pixel_color(xx, yy, color);
            }
        }
    }

    /// The buffer as RGBA8 bytes, without copying.
    pub fn rgba_bytes(&self) -> &[u8] {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        // Color is four u8 channels, repr(C)
        unsafe { std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len) }
    }

    /// Uploads the pixels into an existing texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) -> Result<(), GameError> {
        tex.update_texture(self.rgba_bytes())
            .map_err(|e| GameError::Texture { what: "track", reason: e.to_string() })
    }

    /// Creates a texture of the buffer's size and uploads the pixels.
    pub fn to_texture(&self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D, GameError> {
        let img = Image::gen_image_color(self.width as i32, self.height as i32, self.background_color);
        let mut tex = rl
            .load_texture_from_image(thread, &img)
            .map_err(|e| GameError::Texture { what: "track", reason: e.to_string() })?;
        self.upload_to_texture(&mut tex)?;
        Ok(tex)
    }
}
