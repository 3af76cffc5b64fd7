use std::collections::HashMap;
use std::sync::Arc;

use glam::{DVec2, DVec3};
use indexmap::IndexMap;

use super::map_intent_to_commands;
use crate::app::state::PickingState;
use crate::app::{ViewerCommand, ViewerIntent, ViewerSession};
use crate::core::{fit, AxisRange, BoundingDomain, Mapper, Point, Reconstruction, Shot, Viewport};
use crate::shared::InteractionMode;

/// Szene mit zwei Shots und zwei Punkten; Punkt 2 liegt direkt unter
/// Shot A. Viewport 320x320, Inset 10 → 30 Pixel pro Welteinheit.
fn session_with_scene() -> ViewerSession {
    let shots = vec![
        Shot::from_euler_xyz(
            "A.jpeg".to_string(),
            None,
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::ZERO,
        ),
        Shot::from_euler_xyz(
            "B.jpeg".to_string(),
            None,
            DVec3::new(10.0, 10.0, 5.0),
            DVec3::ZERO,
        ),
    ];
    let points = vec![
        Point::new(1, DVec3::new(5.0, 5.0, 0.0)),
        Point::new(2, DVec3::new(0.0, 0.0, 0.0)),
    ];
    let point_shots = HashMap::from([
        (1, vec!["A.jpeg".to_string(), "B.jpeg".to_string()]),
        (2, vec!["A.jpeg".to_string()]),
    ]);
    let domain = BoundingDomain {
        x: AxisRange::new(0.0, 10.0),
        y: AxisRange::new(0.0, 10.0),
        z: Some(AxisRange::new(0.0, 5.0)),
    };
    let reconstruction = Reconstruction::new(IndexMap::new(), shots, points, point_shots, domain);

    let mut state = ViewerSession::new();
    state.view.viewport_size = [320.0, 320.0];
    let viewport = Viewport::new(320.0, 320.0);
    let fitted = fit(reconstruction.domain(), viewport, 10.0).expect("Fit sollte gelingen");
    state.view.mapper = Some(Mapper::new(fitted, viewport, 10.0, false));
    state.picking = PickingState::from_reconstruction(&reconstruction);
    state.reconstruction = Some(Arc::new(reconstruction));
    state
}

#[test]
fn pointer_move_over_shot_maps_to_hover_shot() {
    let state = session_with_scene();

    // Shot B liegt bei Welt (10, 10) → Pixel (310, 310).
    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(310.0, 310.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(
        matches!(&commands[0], ViewerCommand::HoverShot { image_name } if image_name == "B.jpeg")
    );
}

#[test]
fn pointer_move_prefers_shot_over_colocated_point() {
    let state = session_with_scene();

    // Bei Welt (0, 0) liegen Shot A und Punkt 2 übereinander.
    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(10.0, 10.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(
        matches!(&commands[0], ViewerCommand::HoverShot { image_name } if image_name == "A.jpeg")
    );
}

#[test]
fn repeated_pointer_move_over_same_shot_maps_to_nothing() {
    let mut state = session_with_scene();
    state.selection.hovered_shot = Some("B.jpeg".to_string());

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(310.0, 310.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_move_over_point_maps_to_hover_point() {
    let state = session_with_scene();

    // Punkt 1 liegt bei Welt (5, 5) → Pixel (160, 160).
    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(160.0, 160.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], ViewerCommand::HoverPoint { id: 1 }));
}

#[test]
fn pointer_move_over_empty_area_without_hover_maps_to_nothing() {
    let state = session_with_scene();

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(160.0, 40.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pointer_move_over_empty_area_clears_stale_hover() {
    let mut state = session_with_scene();
    state.selection.hovered_point = Some(1);

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(160.0, 40.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], ViewerCommand::ClearHover));
}

#[test]
fn shots_only_mode_ignores_points() {
    let mut state = session_with_scene();
    state.options.interaction_mode = InteractionMode::ShotsOnly;

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(160.0, 160.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn click_on_shot_maps_to_toggle_selection() {
    let state = session_with_scene();

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapClicked {
            screen: DVec2::new(310.0, 310.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        ViewerCommand::ToggleShotSelection { image_name } if image_name == "B.jpeg"
    ));
}

#[test]
fn click_on_point_leaves_selection_alone() {
    let state = session_with_scene();

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapClicked {
            screen: DVec2::new(160.0, 160.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn pick_accounts_for_pan_zoom_transform() {
    let mut state = session_with_scene();
    state.view.transform.scale = 2.0;
    state.view.transform.translation = DVec2::new(5.0, 5.0);

    // Shot B: Pixel (310, 310) → Bildschirm 310 * 2 + 5 = 625.
    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(625.0, 625.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(
        matches!(&commands[0], ViewerCommand::HoverShot { image_name } if image_name == "B.jpeg")
    );
}

#[test]
fn pointer_move_without_scene_maps_to_nothing() {
    let state = ViewerSession::new();

    let commands = map_intent_to_commands(
        &state,
        ViewerIntent::MapPointerMoved {
            screen: DVec2::new(100.0, 100.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn viewport_resized_maps_to_set_viewport_size() {
    let state = ViewerSession::new();

    let commands =
        map_intent_to_commands(&state, ViewerIntent::ViewportResized { size: [800.0, 600.0] });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        ViewerCommand::SetViewportSize { size } if size == [800.0, 600.0]
    ));
}

#[test]
fn zoom_in_request_maps_to_zoom_in() {
    let state = ViewerSession::new();

    let commands = map_intent_to_commands(&state, ViewerIntent::ZoomInRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], ViewerCommand::ZoomIn));
}
