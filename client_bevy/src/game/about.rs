//! Placeholder biography view shown after the minigame unlocks it.
//!
//! In the browser the page has already been sent to the configured URL; this
//! view matters for native builds, where it offers a way back.

use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::core::{AppView, MinigameSettings};

pub struct AboutPlugin;

#[derive(Component)]
struct AboutEntity;

#[derive(Component)]
struct BackToMinigameButton;

impl Plugin for AboutPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppView::About), spawn_about)
            .add_systems(OnExit(AppView::About), despawn_about)
            .add_systems(
                Update,
                back_button_system.run_if(in_state(AppView::About)),
            );
    }
}

fn spawn_about(mut commands: Commands, settings: Res<MinigameSettings>) {
    commands.spawn((Camera2d, AboutEntity));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            AboutEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("About"),
                TextFont::from_font_size(28.0),
                TextColor(color_from_hex(Colors::HUD)),
            ));
            parent.spawn((
                Text::new(format!("continue at {}", settings.0.about_url)),
                TextFont::from_font_size(14.0),
                TextColor(color_from_hex(Colors::HUD_DIM)),
            ));
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor::all(color_from_hex(Colors::HUD)),
                    BorderRadius::all(Val::Px(6.0)),
                    BackToMinigameButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("back to minigame"),
                        TextFont::from_font_size(14.0),
                        TextColor(color_from_hex(Colors::HUD)),
                    ));
                });
        });
}

fn despawn_about(mut commands: Commands, q_entities: Query<Entity, With<AboutEntity>>) {
    for entity in &q_entities {
        commands.entity(entity).despawn();
    }
}

fn back_button_system(
    q_button: Query<&Interaction, (Changed<Interaction>, With<BackToMinigameButton>)>,
    mut next_view: ResMut<NextState<AppView>>,
) {
    if q_button.iter().any(|i| *i == Interaction::Pressed) {
        info!("returning to minigame");
        next_view.set(AppView::Minigame);
    }
}
