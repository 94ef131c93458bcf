use bevy::prelude::*;

use crate::engine::loading::status::DataSourceStatus;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::viewport_camera::ResetCameraEvent;

#[derive(Component)]
pub struct LoadingNotice;

#[derive(Component)]
pub struct ErrorNotice;

#[derive(Component)]
pub struct ErrorText;

#[derive(Component)]
pub struct ResetViewButton;

const ERROR_RED: Color = Color::srgb(0.86, 0.15, 0.15);
const ERROR_RED_HOVER: Color = Color::srgb(0.74, 0.11, 0.11);

/// Top-left notices for the data source. Neither captures scene input.
pub fn spawn_status_overlay(mut commands: Commands) {
    commands
        .spawn((
            Name::new("StatusOverlay"),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                top: Val::Px(16.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    LoadingNotice,
                    BackgroundColor(Color::srgb(0.23, 0.51, 0.96)),
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    Visibility::Hidden,
                ))
                .with_children(|notice| {
                    notice.spawn((
                        Text::new("Loading CSV..."),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                });

            overlay
                .spawn((
                    ErrorNotice,
                    Button,
                    BackgroundColor(ERROR_RED),
                    Node {
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        max_width: Val::Px(420.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                    Visibility::Hidden,
                ))
                .with_children(|notice| {
                    notice.spawn((
                        ErrorText,
                        Text::new(""),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    notice.spawn((
                        Text::new("Click to dismiss"),
                        TextFont {
                            font_size: 10.0,
                            ..default()
                        },
                        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
                    ));
                });
        });
}

pub fn update_status_overlay(
    status: Res<DataSourceStatus>,
    mut loading: Query<&mut Visibility, (With<LoadingNotice>, Without<ErrorNotice>)>,
    mut error: Query<&mut Visibility, (With<ErrorNotice>, Without<LoadingNotice>)>,
    mut error_text: Query<&mut Text, With<ErrorText>>,
) {
    if !status.is_changed() {
        return;
    }

    let shown = |visible: bool| {
        if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    };

    for mut visibility in &mut loading {
        *visibility = shown(status.is_loading());
    }

    let message = status.visible_error();
    for mut visibility in &mut error {
        *visibility = shown(message.is_some());
    }
    if let Some(message) = message {
        for mut text in &mut error_text {
            text.0 = message.to_string();
        }
    }
}

pub fn dismiss_error_notice(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ErrorNotice>)>,
    mut status: ResMut<DataSourceStatus>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                info!("Data source error dismissed");
                status.dismiss();
            }
            Interaction::Hovered => *bg = BackgroundColor(ERROR_RED_HOVER),
            Interaction::None => *bg = BackgroundColor(ERROR_RED),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_reset_view_button(mut commands: Commands) {
    commands
        .spawn((
            ResetViewButton,
            Button,
            Name::new("ResetViewButton"),
            BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new("Reset View"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reset_view_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ResetViewButton>)>,
    mut reset_events: EventWriter<ResetCameraEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                reset_events.write(ResetCameraEvent);
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}
