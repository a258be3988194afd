use bevy::prelude::*;

pub(super) const HIT_TOP: f32 = 10.0;
pub(super) const HINT_BOTTOM: f32 = 16.0;

pub(super) const INFO_BUTTON_LEFT: f32 = 12.0;
pub(super) const BUTTON_BOTTOM: f32 = 12.0;
pub(super) const BUTTON_SIZE: f32 = 28.0;

pub(super) const PANEL_LEFT: f32 = 12.0;
pub(super) const PANEL_BOTTOM: f32 = 48.0;
pub(super) const PANEL_WIDTH: f32 = 190.0;

#[derive(Resource, Default)]
pub(crate) struct HudUiState {
    pub(crate) info_visible: bool,
}

#[derive(Component)]
pub(super) struct HudHitCountText;

#[derive(Component)]
pub(super) struct HudInfoButton;

#[derive(Component)]
pub(super) struct HudInfoPanel;

pub(super) fn hit_label(count: u32, threshold: u32) -> String {
    format!("hits: {count}/{threshold}")
}

pub(super) fn panel_bg(alpha: f32) -> Color {
    Color::srgba(5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0, alpha)
}

pub(super) fn panel_border(alpha: f32) -> Color {
    Color::srgba(77.0 / 255.0, 166.0 / 255.0, 166.0 / 255.0, alpha)
}
