mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use super::core::AppView;
use super::UpdateSet;

pub(crate) use types::HudUiState;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppView::Minigame), spawn::spawn_hud)
            .add_systems(
                Update,
                (
                    systems::handle_button_interactions,
                    systems::update_hit_ui,
                    systems::update_info_panel_ui,
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
