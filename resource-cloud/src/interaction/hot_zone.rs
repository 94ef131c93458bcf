use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use crate::engine::assets::resource_record::is_real_link;
use crate::engine::assets::resource_set::ResourceSet;
use crate::engine::systems::feature_selector::FeatureState;
use crate::engine::systems::frame_fault::FrameFault;
use crate::engine::ui::card::CardRect;

/// Whether the pointer is over the featured record's card, and that record's link.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct LinkHotZone {
    pub armed: bool,
    pub link: Option<String>,
}

impl LinkHotZone {
    /// Arm when the pointer lies inside the card. Returns whether `armed` flipped.
    pub fn update(&mut self, pointer: Option<Vec2>, card: Option<Rect>, link: Option<&str>) -> bool {
        let armed = match (pointer, card) {
            (Some(pointer), Some(card)) => card.contains(pointer),
            _ => false,
        };
        let link = if armed { link.map(str::to_string) } else { None };

        let flipped = armed != self.armed;
        self.armed = armed;
        if self.link != link {
            self.link = link;
        }
        flipped
    }

    /// The URL a click would open right now, if any.
    pub fn navigation_target(&self) -> Option<&str> {
        if !self.armed {
            return None;
        }
        self.link.as_deref().filter(|link| is_real_link(link)).map(str::trim)
    }
}

pub fn update_link_hot_zone(
    mut commands: Commands,
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    touches: Option<Res<Touches>>,
    card_rect: Res<CardRect>,
    feature: Res<FeatureState>,
    resource_set: Res<ResourceSet>,
    mut hot_zone: ResMut<LinkHotZone>,
) -> Result<(), FrameFault> {
    let (window_entity, window) = windows.single().map_err(|_| FrameFault::MissingWindow)?;

    let pointer = window.cursor_position().or_else(|| {
        touches
            .as_ref()
            .and_then(|touches| touches.iter().next().map(|touch| touch.position()))
    });
    let link = feature
        .featured()
        .and_then(|index| resource_set.get(index))
        .map(|record| record.link.as_str());

    let mut next = hot_zone.clone();
    let flipped = next.update(pointer, card_rect.0, link);
    hot_zone.set_if_neq(next);

    if flipped {
        let icon = if hot_zone.armed {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        commands.entity(window_entity).insert(CursorIcon::from(icon));
    }

    Ok(())
}
