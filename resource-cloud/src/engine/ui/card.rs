use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::text::TextLayoutInfo;
use bevy::ui::ComputedNode;

use constants::card::{
    BOLD_AVERAGE_ADVANCE, CARD_ANCHOR_FROM_BOTTOM, CARD_DESCRIPTION_MAX_HEIGHT, CARD_EDGE_MARGIN,
    CARD_HEIGHT, CARD_MIN_WIDTH, CARD_PADDING, CATEGORY_FONT_SIZE, DESCRIPTION_FONT_SIZE,
    DETAIL_FONT_SIZE, NAME_FONT_SIZE, RELEVANCE_PREFIX, UNKNOWN_CATEGORY, UNKNOWN_DESCRIPTION,
    UNKNOWN_NAME, UNKNOWN_RELEVANCE, VISIT_LABEL,
};
use constants::path::{BOLD_FONT_PATH, REGULAR_FONT_PATH};

use crate::engine::assets::resource_record::ResourceRecord;
use crate::engine::assets::resource_set::ResourceSet;
use crate::engine::systems::feature_selector::FeatureState;
use crate::engine::systems::frame_fault::FrameFault;
use crate::engine::systems::viewport::ViewportSize;

/// Where the info card is drawn this frame, in logical pixels from the top-left.
/// Placement and link hit-testing both read this.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CardRect(pub Option<Rect>);

#[derive(Component)]
pub struct InfoCard;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRow {
    Name,
    Category,
    Description,
    Relevance,
    Visit,
}

impl CardRow {
    fn is_bold(self) -> bool {
        matches!(self, Self::Name)
    }
}

/// Optional card fonts. Rows keep the default font until these load.
#[derive(Resource)]
pub struct CardFonts {
    pub bold: Handle<Font>,
    pub regular: Handle<Font>,
    resolved: bool,
}

impl CardFonts {
    pub fn load(asset_server: &AssetServer) -> Self {
        Self {
            bold: asset_server.load(BOLD_FONT_PATH),
            regular: asset_server.load(REGULAR_FONT_PATH),
            resolved: false,
        }
    }
}

/// Laid-out width of the name row, in logical pixels, for the text it was measured with.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct NameMeasure {
    text: String,
    width: f32,
}

impl NameMeasure {
    pub fn width_for(&self, name: &str) -> Option<f32> {
        (self.text == name && self.width > 0.0).then_some(self.width)
    }
}

/// Width of `text` in the bold card face, from the average glyph advance.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * BOLD_AVERAGE_ADVANCE
}

/// Measured name width once the text pipeline has laid it out, the estimate until then.
pub fn name_text_width(name: &str, measure: &NameMeasure) -> f32 {
    measure
        .width_for(name)
        .unwrap_or_else(|| estimate_text_width(name, NAME_FONT_SIZE))
}

pub fn card_width(text_width: f32) -> f32 {
    (text_width + 2.0 * CARD_PADDING).max(CARD_MIN_WIDTH)
}

/// Anchor the card at the bottom-left and pull it back inside the viewport.
pub fn card_rect(text_width: f32, viewport: ViewportSize) -> Rect {
    let width = card_width(text_width);
    let mut left = 0.0;
    let mut top = viewport.height - CARD_ANCHOR_FROM_BOTTOM;

    if left + width > viewport.width {
        left = viewport.width - width - CARD_EDGE_MARGIN;
    }
    if left < 0.0 {
        left = CARD_EDGE_MARGIN;
    }
    if top + CARD_HEIGHT > viewport.height {
        top = viewport.height - CARD_HEIGHT - CARD_EDGE_MARGIN;
    }
    if top < 0.0 {
        top = CARD_EDGE_MARGIN;
    }

    Rect::new(left, top, left + width, top + CARD_HEIGHT)
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

fn row_text(row: CardRow, record: &ResourceRecord) -> String {
    match row {
        CardRow::Name => or_fallback(&record.name, UNKNOWN_NAME).to_string(),
        CardRow::Category => or_fallback(&record.category, UNKNOWN_CATEGORY).to_string(),
        CardRow::Description => or_fallback(&record.description, UNKNOWN_DESCRIPTION).to_string(),
        CardRow::Relevance => format!(
            "{RELEVANCE_PREFIX}{}",
            or_fallback(&record.relevance, UNKNOWN_RELEVANCE)
        ),
        CardRow::Visit => VISIT_LABEL.to_string(),
    }
}

fn spawn_card_row(parent: &mut ChildSpawnerCommands, row: CardRow, size: f32, gray: Color, node: Node) {
    // The name never wraps so its laid-out size is the full line width.
    let layout = if row == CardRow::Name {
        TextLayout::new_with_no_wrap()
    } else {
        TextLayout::default()
    };
    parent.spawn((
        row,
        Text::new(""),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(gray),
        layout,
        node,
    ));
}

pub fn spawn_info_card(mut commands: Commands) {
    commands
        .spawn((
            InfoCard,
            Name::new("InfoCard"),
            BackgroundColor(Color::srgba_u8(255, 255, 255, 240)),
            BorderColor(Color::srgb_u8(200, 200, 200)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(CARD_MIN_WIDTH),
                height: Val::Px(CARD_HEIGHT),
                border: UiRect::all(Val::Px(1.0)),
                padding: UiRect::axes(Val::Px(CARD_PADDING), Val::Px(16.0)),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                overflow: Overflow::clip(),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|card| {
            spawn_card_row(card, CardRow::Name, NAME_FONT_SIZE, Color::BLACK, Node::default());
            spawn_card_row(
                card,
                CardRow::Category,
                CATEGORY_FONT_SIZE,
                Color::srgb_u8(100, 100, 100),
                Node::default(),
            );
            spawn_card_row(
                card,
                CardRow::Description,
                DESCRIPTION_FONT_SIZE,
                Color::srgb_u8(60, 60, 60),
                Node {
                    width: Val::Percent(100.0),
                    max_height: Val::Px(CARD_DESCRIPTION_MAX_HEIGHT),
                    overflow: Overflow::clip(),
                    ..default()
                },
            );
            spawn_card_row(
                card,
                CardRow::Relevance,
                DETAIL_FONT_SIZE,
                Color::srgb_u8(120, 120, 120),
                Node::default(),
            );
            spawn_card_row(
                card,
                CardRow::Visit,
                DETAIL_FONT_SIZE,
                Color::srgb_u8(0, 100, 200),
                Node {
                    display: Display::None,
                    ..default()
                },
            );
        });
}

/// Swap in the card fonts once they load; a failed load keeps the default font.
pub fn resolve_card_fonts(
    mut fonts: ResMut<CardFonts>,
    asset_server: Res<AssetServer>,
    mut rows: Query<(&CardRow, &mut TextFont)>,
) {
    if fonts.resolved {
        return;
    }

    let settled = |handle: &Handle<Font>| match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => Some(true),
        Some(LoadState::Failed(_)) | None => Some(false),
        _ => None,
    };
    let (Some(bold_ok), Some(regular_ok)) = (settled(&fonts.bold), settled(&fonts.regular)) else {
        return;
    };

    if !bold_ok || !regular_ok {
        warn!("Card fonts unavailable, using the default font");
    }

    for (row, mut text_font) in &mut rows {
        if row.is_bold() && bold_ok {
            text_font.font = fonts.bold.clone();
        } else if !row.is_bold() && regular_ok {
            text_font.font = fonts.regular.clone();
        }
    }
    fonts.resolved = true;
}

/// Record the name row's laid-out width from the last text layout pass.
pub fn measure_card_name(
    rows: Query<(&CardRow, &Text, &TextLayoutInfo, &ComputedNode)>,
    mut measure: ResMut<NameMeasure>,
) {
    for (row, text, layout, node) in &rows {
        if *row != CardRow::Name || layout.size.x <= 0.0 {
            continue;
        }
        measure.set_if_neq(NameMeasure {
            text: text.0.clone(),
            width: layout.size.x * node.inverse_scale_factor(),
        });
    }
}

/// Place and fill the card for the featured record, or hide it.
pub fn update_info_card(
    feature: Res<FeatureState>,
    resource_set: Res<ResourceSet>,
    viewport: Res<ViewportSize>,
    measure: Res<NameMeasure>,
    mut card_rect: ResMut<CardRect>,
    mut cards: Query<(&mut Node, &mut Visibility), With<InfoCard>>,
    mut rows: Query<(&CardRow, &mut Text, &mut Node), Without<InfoCard>>,
) -> Result<(), FrameFault> {
    let (mut card_node, mut visibility) = cards
        .single_mut()
        .map_err(|_| FrameFault::MissingCardNodes)?;

    let featured = feature.featured();
    let record = featured.and_then(|index| resource_set.get(index));
    let Some(record) = record else {
        visibility.set_if_neq(Visibility::Hidden);
        card_rect.set_if_neq(CardRect(None));
        return match featured {
            Some(index) => Err(FrameFault::FeaturedOutOfRange {
                index,
                count: resource_set.len(),
            }),
            None => Ok(()),
        };
    };

    let rect = card_rect_for(record, *viewport, &measure);
    card_rect.set_if_neq(CardRect(Some(rect)));
    visibility.set_if_neq(Visibility::Visible);

    let (left, top, width) = (
        Val::Px(rect.min.x),
        Val::Px(rect.min.y),
        Val::Px(rect.width()),
    );
    if card_node.left != left || card_node.top != top || card_node.width != width {
        card_node.left = left;
        card_node.top = top;
        card_node.width = width;
    }

    let show_visit = record.navigable_link().is_some();
    for (row, mut text, mut node) in &mut rows {
        let wanted = row_text(*row, record);
        if text.0 != wanted {
            text.0 = wanted;
        }
        if *row == CardRow::Visit {
            let display = if show_visit { Display::Flex } else { Display::None };
            if node.display != display {
                node.display = display;
            }
        }
    }

    Ok(())
}

fn card_rect_for(record: &ResourceRecord, viewport: ViewportSize, measure: &NameMeasure) -> Rect {
    let name = or_fallback(&record.name, UNKNOWN_NAME);
    card_rect(name_text_width(name, measure), viewport)
}
