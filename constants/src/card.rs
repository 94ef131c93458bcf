pub const CARD_HEIGHT: f32 = 170.0;
pub const CARD_MIN_WIDTH: f32 = 240.0;

/// Horizontal padding on each side of the card text.
pub const CARD_PADDING: f32 = 20.0;

/// Inset applied on an axis where the card would leave the viewport.
pub const CARD_EDGE_MARGIN: f32 = 20.0;

/// Distance of the card's anchored top edge from the bottom of the viewport.
pub const CARD_ANCHOR_FROM_BOTTOM: f32 = 100.0;

pub const CARD_DESCRIPTION_MAX_HEIGHT: f32 = 60.0;

pub const NAME_FONT_SIZE: f32 = 16.0;
pub const CATEGORY_FONT_SIZE: f32 = 12.0;
pub const DESCRIPTION_FONT_SIZE: f32 = 10.0;
pub const DETAIL_FONT_SIZE: f32 = 9.0;

/// Average glyph advance of the bold face, in ems.
pub const BOLD_AVERAGE_ADVANCE: f32 = 0.56;

/// Link value the dataset uses when a resource has no URL.
pub const LINK_PLACEHOLDER: &str = "[link]";

pub const RELEVANCE_PREFIX: &str = "Relevance: ";
pub const VISIT_LABEL: &str = "Click to visit →";

pub const UNKNOWN_NAME: &str = "Unknown Resource";
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";
pub const UNKNOWN_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_RELEVANCE: &str = "Unknown";
