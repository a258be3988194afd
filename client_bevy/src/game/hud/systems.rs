use bevy::prelude::*;

use crate::game::scene::SceneState;

use super::types::{hit_label, HudHitCountText, HudInfoButton, HudInfoPanel, HudUiState};

type InfoButtonQuery<'w, 's> =
    Query<'w, 's, &'static Interaction, (Changed<Interaction>, With<HudInfoButton>)>;

pub(super) fn handle_button_interactions(
    q_buttons: InfoButtonQuery,
    hud_ui: Option<ResMut<HudUiState>>,
) {
    let Some(mut hud_ui) = hud_ui else {
        return;
    };
    for interaction in &q_buttons {
        if *interaction == Interaction::Pressed {
            hud_ui.info_visible = !hud_ui.info_visible;
        }
    }
}

pub(super) fn update_hit_ui(
    scene: Option<Res<SceneState>>,
    mut q_hit: Query<&mut Text, With<HudHitCountText>>,
    mut last_shown: Local<Option<(u32, u32)>>,
) {
    let Some(scene) = scene else {
        return;
    };
    let hits = scene.game.hits();
    let shown = (hits.count(), hits.threshold());
    if *last_shown == Some(shown) {
        return;
    }

    if let Ok(mut text) = q_hit.single_mut() {
        text.0 = hit_label(shown.0, shown.1);
        *last_shown = Some(shown);
    }
}

pub(super) fn update_info_panel_ui(
    hud_ui: Option<Res<HudUiState>>,
    mut q_panel: Query<&mut Visibility, With<HudInfoPanel>>,
) {
    let Some(hud_ui) = hud_ui else {
        return;
    };
    if !hud_ui.is_changed() {
        return;
    }
    for mut visibility in &mut q_panel {
        *visibility = if hud_ui.info_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
