pub const WINDOW_WIDTH: u32 = 960;
pub const WINDOW_HEIGHT: u32 = 640;

/// Canvas selector used when running in the browser.
pub const CANVAS_SELECTOR: &str = "#minigame";

pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 16;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x050510;
    pub const SPHERE: u32 = 0xff3366;
    pub const RAY: u32 = 0x88ccff;
    pub const HUD: u32 = 0x4da6a6;
    pub const HUD_DIM: u32 = 0x888888;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

/// Random opaque color, as used for the sphere after each hit.
pub fn random_color(rng: &mut impl rand::Rng) -> bevy::prelude::Color {
    color_from_hex(rng.gen_range(0..=0xffffff))
}
