use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::coord::PxPos;

use super::UpdateSet;

/// Pixel scroll deltas are converted to lines with this factor.
const PIXELS_PER_SCROLL_LINE: f32 = 100.0;

pub struct InputPlugin;

/// Pointer activity on the scene, in window-relative logical pixels.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub(crate) enum PointerMessage {
    Pressed(PxPos),
    Released(PxPos),
    /// Movement since the previous frame while the pointer is held
    Dragged(Vec2),
    /// Positive zooms in
    Scrolled(f32),
}

#[derive(Default)]
struct PointerTrack {
    held: bool,
    last: Option<Vec2>,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, pointer_input_system.in_set(UpdateSet::Input));
    }
}

pub(crate) fn scroll_lines(delta_y: f32, unit: MouseScrollUnit) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta_y,
        MouseScrollUnit::Pixel => delta_y / PIXELS_PER_SCROLL_LINE,
    }
}

fn pointer_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    scroll: Res<AccumulatedMouseScroll>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_ui: Query<&Interaction, With<Button>>,
    mut writer: MessageWriter<PointerMessage>,
    mut track: Local<PointerTrack>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    let touch = touches.iter().next().map(|t| t.position());
    let cursor = window.cursor_position().or(touch);

    let pressed = buttons.just_pressed(MouseButton::Left) || touches.any_just_pressed();
    let released = buttons.just_released(MouseButton::Left)
        || touches.iter_just_released().next().is_some();

    if pressed && !track.held {
        // Clicks on HUD buttons belong to the UI, not the scene.
        let over_ui = q_ui.iter().any(|i| *i != Interaction::None);
        if let (Some(pos), false) = (cursor, over_ui) {
            track.held = true;
            track.last = Some(pos);
            writer.write(PointerMessage::Pressed(PxPos::new(pos.x, pos.y)));
        }
    } else if track.held {
        if let (Some(pos), Some(last)) = (cursor, track.last) {
            let delta = pos - last;
            if delta != Vec2::ZERO {
                writer.write(PointerMessage::Dragged(delta));
            }
            track.last = Some(pos);
        }
    }

    if released && track.held {
        let release_pos = touches
            .iter_just_released()
            .next()
            .map(|t| t.position())
            .or(cursor)
            .or(track.last);
        if let Some(pos) = release_pos {
            writer.write(PointerMessage::Released(PxPos::new(pos.x, pos.y)));
        }
        track.held = false;
        track.last = None;
    }

    if scroll.delta.y != 0.0 {
        writer.write(PointerMessage::Scrolled(scroll_lines(scroll.delta.y, scroll.unit)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::touch::{touch_screen_input_system, TouchInput, TouchPhase};
    use bevy::window::WindowResolution;

    #[derive(Resource, Default)]
    struct SeenPointer(Vec<PointerMessage>);

    fn collect_pointer(mut reader: MessageReader<PointerMessage>, mut seen: ResMut<SeenPointer>) {
        seen.0.extend(reader.read().copied());
    }

    fn make_test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<MouseButton>>();
        app.init_resource::<Touches>();
        app.init_resource::<AccumulatedMouseScroll>();
        app.init_resource::<SeenPointer>();
        app.add_message::<PointerMessage>();
        app.add_message::<TouchInput>();
        app.add_systems(PreUpdate, touch_screen_input_system);
        app.add_systems(Update, (pointer_input_system, collect_pointer).chain());
        let window = app
            .world_mut()
            .spawn((
                Window {
                    resolution: WindowResolution::new(800, 600),
                    ..default()
                },
                PrimaryWindow,
            ))
            .id();
        (app, window)
    }

    fn move_cursor(app: &mut App, pos: Option<Vec2>) {
        let mut q = app
            .world_mut()
            .query_filtered::<&mut Window, With<PrimaryWindow>>();
        let mut window = q.single_mut(app.world_mut()).unwrap();
        window.set_cursor_position(pos);
    }

    fn buttons(app: &mut App) -> Mut<'_, ButtonInput<MouseButton>> {
        app.world_mut().resource_mut::<ButtonInput<MouseButton>>()
    }

    /// Runs one frame, then clears per-frame button edges.
    fn step(app: &mut App) {
        app.update();
        buttons(app).clear();
    }

    fn seen(app: &App) -> &[PointerMessage] {
        &app.world().resource::<SeenPointer>().0
    }

    fn touch(app: &mut App, window: Entity, phase: TouchPhase, pos: Vec2) {
        app.world_mut().write_message(TouchInput {
            phase,
            position: pos,
            window,
            force: None,
            id: 1,
        });
    }

    #[test]
    fn press_move_release_reports_a_drag() {
        let (mut app, _) = make_test_app();
        move_cursor(&mut app, Some(Vec2::new(100.0, 100.0)));
        buttons(&mut app).press(MouseButton::Left);
        step(&mut app);

        move_cursor(&mut app, Some(Vec2::new(110.0, 105.0)));
        step(&mut app);

        buttons(&mut app).release(MouseButton::Left);
        step(&mut app);

        assert_eq!(
            seen(&app),
            &[
                PointerMessage::Pressed(PxPos::new(100.0, 100.0)),
                PointerMessage::Dragged(Vec2::new(10.0, 5.0)),
                PointerMessage::Released(PxPos::new(110.0, 105.0)),
            ]
        );
    }

    #[test]
    fn held_still_pointer_reports_no_drag() {
        let (mut app, _) = make_test_app();
        move_cursor(&mut app, Some(Vec2::new(50.0, 60.0)));
        buttons(&mut app).press(MouseButton::Left);
        step(&mut app);
        step(&mut app);
        step(&mut app);

        assert_eq!(seen(&app), &[PointerMessage::Pressed(PxPos::new(50.0, 60.0))]);
    }

    #[test]
    fn press_and_release_in_one_frame_is_a_click() {
        let (mut app, _) = make_test_app();
        move_cursor(&mut app, Some(Vec2::new(200.0, 150.0)));
        buttons(&mut app).press(MouseButton::Left);
        buttons(&mut app).release(MouseButton::Left);
        step(&mut app);

        assert_eq!(
            seen(&app),
            &[
                PointerMessage::Pressed(PxPos::new(200.0, 150.0)),
                PointerMessage::Released(PxPos::new(200.0, 150.0)),
            ]
        );
    }

    #[test]
    fn press_over_hud_button_is_ignored() {
        let (mut app, _) = make_test_app();
        app.world_mut().spawn((Button, Interaction::Hovered));
        move_cursor(&mut app, Some(Vec2::new(20.0, 580.0)));
        buttons(&mut app).press(MouseButton::Left);
        step(&mut app);
        buttons(&mut app).release(MouseButton::Left);
        step(&mut app);

        assert!(seen(&app).is_empty());
    }

    #[test]
    fn press_without_cursor_is_ignored() {
        let (mut app, _) = make_test_app();
        move_cursor(&mut app, None);
        buttons(&mut app).press(MouseButton::Left);
        step(&mut app);
        buttons(&mut app).release(MouseButton::Left);
        step(&mut app);

        assert!(seen(&app).is_empty());
    }

    #[test]
    fn touch_drives_the_pointer_without_a_cursor() {
        let (mut app, window) = make_test_app();
        move_cursor(&mut app, None);
        touch(&mut app, window, TouchPhase::Started, Vec2::new(300.0, 200.0));
        step(&mut app);

        touch(&mut app, window, TouchPhase::Moved, Vec2::new(306.0, 198.0));
        step(&mut app);

        touch(&mut app, window, TouchPhase::Ended, Vec2::new(306.0, 198.0));
        step(&mut app);

        assert_eq!(
            seen(&app),
            &[
                PointerMessage::Pressed(PxPos::new(300.0, 200.0)),
                PointerMessage::Dragged(Vec2::new(6.0, -2.0)),
                PointerMessage::Released(PxPos::new(306.0, 198.0)),
            ]
        );
    }

    #[test]
    fn scroll_is_reported_in_lines() {
        let (mut app, _) = make_test_app();
        {
            let mut scroll = app.world_mut().resource_mut::<AccumulatedMouseScroll>();
            scroll.unit = MouseScrollUnit::Pixel;
            scroll.delta = Vec2::new(0.0, 200.0);
        }
        step(&mut app);

        assert_eq!(seen(&app), &[PointerMessage::Scrolled(2.0)]);
    }

    #[test]
    fn line_scroll_passes_through() {
        assert_eq!(scroll_lines(2.0, MouseScrollUnit::Line), 2.0);
    }

    #[test]
    fn pixel_scroll_is_scaled_to_lines() {
        assert!((scroll_lines(-150.0, MouseScrollUnit::Pixel) + 1.5).abs() < 1e-6);
    }
}
