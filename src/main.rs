// main.rs
mod config;
mod core;
mod error;
mod render;

use raylib::prelude::*;
use crate::config::{GameConfig, TITLE};
use crate::core::car::{Car, PlayArea};
use crate::core::collision::{check_wall_collision, Unresolved};
use crate::core::process_events::process_events;
use crate::core::track::TileMap;
use crate::error::GameError;
use crate::render::framebuffer::Framebuffer;
use crate::render::hud::{draw_car, draw_debug};
use crate::render::textures::TextureManager;
use crate::render::tiles::{bake_track, OFF_TRACK};

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "frazzer racing failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let cfg = GameConfig::from_env()?;
    let (window_width, window_height) = cfg.window_size();

    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title(TITLE)
        .build();
    window.set_target_fps(cfg.target_fps);

    tracing::info!(
        screen = ?(cfg.screen_width, cfg.screen_height),
        scale = cfg.pixel_scale,
        assets = %cfg.asset_dir,
        "window open"
    );

    // Track is fixed for the whole run: classify once, bake once
    let map = TileMap::new(cfg.screen_width, cfg.screen_height, cfg.block);
    tracing::info!(cols = map.cols(), rows = map.rows(), "track built");

    // Textures are declared after `window` so they are unloaded before it closes
    let texman = TextureManager::new(&mut window, &raylib_thread, &cfg)?;
    let mut framebuffer = Framebuffer::new(cfg.screen_width as u32, cfg.screen_height as u32);
    framebuffer.set_background_color(OFF_TRACK);
    framebuffer.clear();
    bake_track(&mut framebuffer, &map, &texman.tiles.pixmap);
    let track_texture = framebuffer.to_texture(&mut window, &raylib_thread)?;

    let area = PlayArea::inset(cfg.screen_width, cfg.screen_height, cfg.block);
    let mut car = Car::new(cfg.car_start.0, cfg.car_start.1, 0.0);

    let camera = Camera2D {
        offset: Vector2::new(0.0, 0.0),
        target: Vector2::new(0.0, 0.0),
        rotation: 0.0,
        zoom: cfg.pixel_scale as f32,
    };

    while !window.window_should_close() {
        process_events(&window, &mut car, &cfg.tuning, &area);

        if let Some(pose) = check_wall_collision(&map, &car, cfg.car_size, &Unresolved) {
            car.set_pose(pose, &area);
        }

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::new(64, 64, 64, 255));
        {
            let mut d2 = d.begin_mode2D(camera);
            d2.draw_texture(&track_texture, 0, 0, Color::WHITE);
            draw_car(&mut d2, &texman.car, &car);
            draw_debug(&mut d2, &car);
        }
    }

    Ok(())
}
