//! Headless runs of the scene plugin against a fake primary window.

use bevy::input::ButtonState;
use bevy::input::InputPlugin;
use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};

use resource_cloud::engine::assets::resource_record::ResourceRecord;
use resource_cloud::engine::assets::resource_set::{DataOrigin, ResourceSet};
use resource_cloud::engine::camera::viewport_camera::SceneCamera;
use resource_cloud::engine::core::scene_plugin::ResourceCloudPlugin;
use resource_cloud::engine::scene::generation::RelayoutRequest;
use resource_cloud::engine::scene::layout::CloudLayout;
use resource_cloud::engine::scene::markers::{MarkerAssets, PointMarker, WorldRoot};
use resource_cloud::engine::systems::feature_selector::{FeatureState, SceneRng};
use resource_cloud::engine::systems::viewport::ViewportSize;
use resource_cloud::engine::ui::card::{CardRect, InfoCard};
use resource_cloud::interaction::hot_zone::LinkHotZone;
use resource_cloud::interaction::navigation::OpenLinkEvent;

/// Inside the bottom-left card for a 1280x720 viewport.
const OVER_CARD: Vec2 = Vec2::new(100.0, 600.0);

fn record(name: &str, relevance: &str, link: &str) -> ResourceRecord {
    ResourceRecord::new(name, "Tool", "A resource", relevance, link)
}

fn scene_app(records: Vec<ResourceRecord>) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin))
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(SceneRng::seeded(42))
        .insert_resource(ResourceSet::from_records(records, DataOrigin::Host))
        .add_plugins(ResourceCloudPlugin);

    app.world_mut().spawn((
        Window {
            resolution: WindowResolution::new(1280.0, 720.0),
            ..default()
        },
        PrimaryWindow,
    ));
    app.world_mut().spawn((SceneCamera, Transform::default()));
    app
}

fn with_window(app: &mut App, edit: impl FnOnce(&mut Window)) {
    let world = app.world_mut();
    let mut windows = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
    let mut window = windows.single_mut(world).unwrap();
    edit(&mut window);
}

fn click(app: &mut App) {
    let world = app.world_mut();
    let window = world
        .query_filtered::<Entity, With<PrimaryWindow>>()
        .single(world)
        .unwrap();
    world.send_event(MouseButtonInput {
        button: MouseButton::Left,
        state: ButtonState::Pressed,
        window,
    });
    app.update();
}

fn opened_links(app: &App) -> Vec<String> {
    let events = app.world().resource::<Events<OpenLinkEvent>>();
    events
        .iter_current_update_events()
        .map(|e| e.url.clone())
        .collect()
}

fn marker_count(app: &mut App) -> usize {
    app.world_mut()
        .query::<&PointMarker>()
        .iter(app.world())
        .count()
}

#[test]
fn higher_relevance_records_are_placed_higher() {
    let mut app = scene_app(vec![
        record("a", "High", ""),
        record("b", "Medium", ""),
        record("c", "Low", ""),
    ]);
    app.update();

    let layout = app.world().resource::<CloudLayout>();
    assert_eq!(layout.positions.len(), 3);
    assert!(layout.positions[0].y > layout.positions[1].y);
    assert!(layout.positions[1].y > layout.positions[2].y);
}

#[test]
fn empty_dataset_renders_nothing_and_never_arms() {
    let mut app = scene_app(Vec::new());
    with_window(&mut app, |w| w.set_cursor_position(Some(OVER_CARD)));
    app.update();
    app.update();

    assert!(app.world().resource::<CloudLayout>().positions.is_empty());
    assert_eq!(app.world().resource::<FeatureState>().featured(), None);
    assert_eq!(*app.world().resource::<CardRect>(), CardRect(None));
    assert!(!app.world().resource::<LinkHotZone>().armed);
    assert_eq!(marker_count(&mut app), 0);

    let world = app.world_mut();
    let root_visibility = *world
        .query_filtered::<&Visibility, With<WorldRoot>>()
        .single(world)
        .unwrap();
    assert_eq!(root_visibility, Visibility::Hidden);

    click(&mut app);
    assert!(opened_links(&app).is_empty());
}

#[test]
fn placeholder_link_arms_but_does_not_navigate() {
    let mut app = scene_app(vec![record("Halcyon Arts Lab", "Helpful", "[link]")]);
    with_window(&mut app, |w| w.set_cursor_position(Some(OVER_CARD)));
    app.update();

    let zone = app.world().resource::<LinkHotZone>();
    assert!(zone.armed);
    assert_eq!(zone.link.as_deref(), Some("[link]"));

    click(&mut app);
    assert!(opened_links(&app).is_empty());
}

#[test]
fn real_link_opens_on_click_over_the_card() {
    let mut app = scene_app(vec![record("p5.js", "High", "https://p5js.org")]);
    with_window(&mut app, |w| w.set_cursor_position(Some(OVER_CARD)));
    app.update();

    click(&mut app);
    assert_eq!(opened_links(&app), vec!["https://p5js.org".to_string()]);
}

#[test]
fn click_outside_the_card_does_nothing() {
    let mut app = scene_app(vec![record("p5.js", "High", "https://p5js.org")]);
    with_window(&mut app, |w| w.set_cursor_position(Some(Vec2::new(900.0, 100.0))));
    app.update();

    assert!(!app.world().resource::<LinkHotZone>().armed);
    click(&mut app);
    assert!(opened_links(&app).is_empty());
}

#[test]
fn resize_moves_the_card_but_keeps_positions() {
    let mut app = scene_app(vec![record("a", "High", ""), record("b", "Low", "")]);
    app.update();
    let before = app.world().resource::<CloudLayout>().clone();

    with_window(&mut app, |w| w.resolution.set(800.0, 400.0));
    app.update();

    assert_eq!(
        *app.world().resource::<ViewportSize>(),
        ViewportSize {
            width: 800.0,
            height: 400.0
        }
    );
    let after = app.world().resource::<CloudLayout>();
    assert_eq!(after.positions, before.positions);
    assert_eq!(after.box_size, before.box_size);

    let rect = app.world().resource::<CardRect>().0.unwrap();
    assert_eq!(rect.min.y, 400.0 - 170.0 - 20.0);
    assert!(rect.max.y <= 400.0);
}

#[test]
fn new_generation_rebuilds_markers_and_selection() {
    let mut app = scene_app(vec![record("a", "High", "")]);
    app.update();
    assert_eq!(marker_count(&mut app), 1);

    let replacement: Vec<_> = (0..5).map(|i| record(&format!("r{i}"), "Key", "")).collect();
    app.world_mut()
        .resource_mut::<ResourceSet>()
        .publish(replacement, DataOrigin::Upload("drop.csv".into()));
    app.update();

    let layout = app.world().resource::<CloudLayout>();
    assert_eq!(layout.generation, Some(2));
    assert_eq!(layout.positions.len(), 5);
    assert!(app.world().resource::<FeatureState>().featured().is_some_and(|i| i < 5));
    assert_eq!(marker_count(&mut app), 5);
    assert_eq!(
        app.world_mut()
            .query_filtered::<Entity, With<WorldRoot>>()
            .iter(app.world())
            .count(),
        1
    );
}

#[test]
fn featured_marker_is_the_only_sphere() {
    let records: Vec<_> = (0..4).map(|i| record(&format!("r{i}"), "Medium", "")).collect();
    let mut app = scene_app(records);
    app.update();
    app.update();

    let featured = app.world().resource::<FeatureState>().featured();
    let sphere = app.world().resource::<MarkerAssets>().sphere.clone();
    let world = app.world_mut();
    let mut markers = world.query::<(&PointMarker, &Mesh3d)>();
    let spheres: Vec<usize> = markers
        .iter(world)
        .filter(|(_, mesh)| mesh.0 == sphere)
        .map(|(marker, _)| marker.index)
        .collect();
    assert_eq!(spheres.len(), 1);
    assert_eq!(Some(spheres[0]), featured);
}

#[test]
fn relayout_keeps_x_and_y_and_generation() {
    let mut app = scene_app(vec![
        record("a", "High", ""),
        record("b", "Useful", ""),
        record("c", "", ""),
    ]);
    app.update();
    let before = app.world().resource::<CloudLayout>().clone();

    app.world_mut().send_event(RelayoutRequest);
    app.update();

    let after = app.world().resource::<CloudLayout>();
    assert_eq!(after.generation, before.generation);
    for (a, b) in before.positions.iter().zip(&after.positions) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }
    assert_eq!(marker_count(&mut app), 3);
}

#[test]
fn scene_keeps_running_without_camera_or_card() {
    let mut app = scene_app(vec![record("a", "High", "")]);
    app.update();

    let world = app.world_mut();
    let doomed: Vec<Entity> = world
        .query_filtered::<Entity, Or<(With<SceneCamera>, With<InfoCard>)>>()
        .iter(world)
        .collect();
    assert_eq!(doomed.len(), 2);
    for entity in doomed {
        world.entity_mut(entity).despawn();
    }

    app.update();
    let replacement: Vec<_> = (0..3).map(|i| record(&format!("r{i}"), "Low", "")).collect();
    app.world_mut()
        .resource_mut::<ResourceSet>()
        .publish(replacement, DataOrigin::Host);
    app.update();
    app.update();

    let layout = app.world().resource::<CloudLayout>();
    assert_eq!(layout.generation, Some(2));
    assert_eq!(layout.positions.len(), 3);
    assert_eq!(marker_count(&mut app), 3);
}
