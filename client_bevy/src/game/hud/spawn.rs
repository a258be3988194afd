use bevy::prelude::*;

use minigame_shared::config::{ImpulseModel, MinigameConfig};

use crate::constants::{color_from_hex, Colors};
use crate::game::core::{MinigameEntity, MinigameSettings};

use super::types::{
    hit_label, panel_bg, panel_border, HudHitCountText, HudInfoButton, HudInfoPanel, HudUiState,
    BUTTON_BOTTOM, BUTTON_SIZE, HINT_BOTTOM, HIT_TOP, INFO_BUTTON_LEFT, PANEL_BOTTOM, PANEL_LEFT,
    PANEL_WIDTH,
};

fn info_lines(config: &MinigameConfig) -> Vec<String> {
    let model = match config.impulse_model {
        ImpulseModel::HitPoint => "hit point",
        ImpulseModel::Beam => "beam",
    };
    vec![
        format!("points: {}", config.point_count),
        format!("impulse: {model}"),
        format!("hits to unlock: {}", config.hit_threshold),
    ]
}

pub(super) fn spawn_hud(mut commands: Commands, settings: Res<MinigameSettings>) {
    let config = &settings.0;
    let small = TextFont::from_font_size(10.0);
    let medium = TextFont::from_font_size(14.0);

    commands.insert_resource(HudUiState::default());

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(HIT_TOP),
            ..default()
        },
        Text::new(hit_label(0, config.hit_threshold)),
        medium,
        TextColor(color_from_hex(Colors::HUD)),
        HudHitCountText,
        MinigameEntity,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            bottom: Val::Px(HINT_BOTTOM),
            ..default()
        },
        Text::new("drag to orbit, scroll to zoom, click to shoot"),
        small.clone(),
        TextColor(color_from_hex(Colors::HUD_DIM)),
        MinigameEntity,
    ));

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(INFO_BUTTON_LEFT),
                bottom: Val::Px(BUTTON_BOTTOM),
                width: Val::Px(BUTTON_SIZE),
                height: Val::Px(BUTTON_SIZE),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(panel_bg(0.6)),
            BorderColor::all(panel_border(0.4)),
            BorderRadius::MAX,
            HudInfoButton,
            MinigameEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("i"),
                TextFont::from_font_size(16.0),
                TextColor(panel_border(0.7)),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PANEL_LEFT),
                bottom: Val::Px(PANEL_BOTTOM),
                width: Val::Px(PANEL_WIDTH),
                flex_direction: FlexDirection::Column,
                border: UiRect::all(Val::Px(1.0)),
                padding: UiRect {
                    left: Val::Px(10.0),
                    right: Val::Px(10.0),
                    top: Val::Px(8.0),
                    bottom: Val::Px(8.0),
                },
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(panel_bg(0.92)),
            BorderColor::all(panel_border(0.3)),
            BorderRadius::all(Val::Px(6.0)),
            Visibility::Hidden,
            HudInfoPanel,
            MinigameEntity,
        ))
        .with_children(|parent| {
            for line in info_lines(config) {
                parent.spawn((
                    Text::new(line),
                    small.clone(),
                    TextColor(Color::srgb(0.55, 0.8, 0.8)),
                ));
            }
        });
}
