use bevy::prelude::*;

use minigame_shared::config::MinigameConfig;

use crate::constants::{color_from_hex, Colors};

use super::input::PointerMessage;
use super::navigation::NavigateToAboutMessage;
use super::target::SphereHitMessage;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Interaction,
    Simulate,
    Visuals,
}

/// Top-level view. Leaving `Minigame` unmounts the scene.
#[derive(States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    #[default]
    Minigame,
    About,
}

/// Resolved configuration, fixed for the lifetime of the app.
#[derive(Resource, Clone)]
pub(crate) struct MinigameSettings(pub(crate) MinigameConfig);

/// Everything spawned for the minigame view. Despawned on unmount.
#[derive(Component)]
pub(crate) struct MinigameEntity;

#[derive(Component)]
pub(crate) struct MainCamera;

pub struct CorePlugin {
    pub config: MinigameConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MinigameSettings(self.config.clone()))
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .init_state::<AppView>()
            .add_message::<PointerMessage>()
            .add_message::<SphereHitMessage>()
            .add_message::<NavigateToAboutMessage>()
            .configure_sets(
                Update,
                (
                    UpdateSet::Input,
                    UpdateSet::Interaction,
                    UpdateSet::Simulate,
                    UpdateSet::Visuals,
                )
                    .chain()
                    .run_if(in_state(AppView::Minigame)),
            );
    }
}
