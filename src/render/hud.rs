//! Car sprite and debug text.
use raylib::prelude::*;
use crate::core::car::Car;
use crate::render::textures::Sheet;

pub const TEXT_SIZE: i32 = 10;
pub const TEXT_COLOR: Color = Color::WHITE;

/// The three debug lines: heading, velocity, velocity components.
pub fn debug_lines(car: &Car) -> [String; 3] {
    let (vx, vy) = car.velocity_components();
    [
        format!("{:.6}", car.heading),
        format!("{:.6}", car.velocity),
        format!("{:.6} {:.6}", vx, vy),
    ]
}

pub fn draw_debug<D: RaylibDraw>(d: &mut D, car: &Car) {
    for (i, line) in debug_lines(car).iter().enumerate() {
        d.draw_text(line, 11, 11 + 9 * i as i32, TEXT_SIZE, TEXT_COLOR);
    }
}

/// Draws the car sprite rotated about its centre.
pub fn draw_car<D: RaylibDraw>(d: &mut D, sheet: &Sheet, car: &Car) {
    let (w, h) = (sheet.pixmap.w as f32, sheet.pixmap.h as f32);
    d.draw_texture_pro(
        &sheet.texture,
        Rectangle::new(0.0, 0.0, w, h),
        Rectangle::new(car.pos.x, car.pos.y, w, h),
        Vector2::new(w * 0.5, h * 0.5),
        car.heading.to_degrees(),
        Color::WHITE,
    );
}
