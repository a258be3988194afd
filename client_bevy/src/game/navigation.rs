use bevy::prelude::*;

use super::core::{AppView, MinigameSettings};
use super::UpdateSet;

pub struct NavigationPlugin;

/// Hit threshold reached: leave the minigame for the biography page.
#[derive(Message, Clone, Copy, Debug, Default)]
pub(crate) struct NavigateToAboutMessage;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, navigation_system.in_set(UpdateSet::Visuals));
    }
}

fn navigation_system(
    mut reader: MessageReader<NavigateToAboutMessage>,
    settings: Res<MinigameSettings>,
    mut next_view: ResMut<NextState<AppView>>,
) {
    if reader.read().count() == 0 {
        return;
    }

    navigate_to_about(&settings.0.about_url);
    next_view.set(AppView::About);
}

#[cfg(target_arch = "wasm32")]
fn navigate_to_about(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!("no browser window, cannot navigate to {url}");
        return;
    };
    info!("navigating to {url}");
    if let Err(e) = window.location().assign(url) {
        warn!("navigation to {url} failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate_to_about(url: &str) {
    info!("navigating to {url}");
}
