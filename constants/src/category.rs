/// Colour used for any category missing from `CATEGORY_MAP`.
pub const UNKNOWN_CATEGORY_COLOUR: [u8; 3] = [150, 150, 150];

pub struct CategoryInfo {
    pub name: &'static str,
    pub colour: [u8; 3],
}

/// Presentation palette. Lookups are exact and case-sensitive.
pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        name: "Global Community",
        colour: [255, 100, 100],
    },
    CategoryInfo {
        name: "Cultural Heritage",
        colour: [100, 255, 100],
    },
    CategoryInfo {
        name: "Education/Pedagogy",
        colour: [100, 100, 255],
    },
    CategoryInfo {
        name: "Tools & Resources",
        colour: [255, 255, 100],
    },
    CategoryInfo {
        name: "Performance Venues",
        colour: [100, 255, 255],
    },
    CategoryInfo {
        name: "Regional Events",
        colour: [255, 150, 50],
    },
    CategoryInfo {
        name: "Arts Organizations",
        colour: [180, 100, 255],
    },
    CategoryInfo {
        name: "Community Spaces",
        colour: [255, 100, 200],
    },
    CategoryInfo {
        name: "Representation & Equity",
        colour: [200, 50, 150],
    },
    CategoryInfo {
        name: "Local Community",
        colour: [50, 200, 200],
    },
    CategoryInfo {
        name: "Professional Networks",
        colour: [150, 150, 150],
    },
    CategoryInfo {
        name: "Tool",
        colour: [100, 150, 255],
    },
    CategoryInfo {
        name: "Community",
        colour: [255, 150, 100],
    },
    CategoryInfo {
        name: "Venue",
        colour: [150, 255, 150],
    },
];

pub fn get_category_colour(category: &str) -> [u8; 3] {
    CATEGORY_MAP
        .iter()
        .find(|c| c.name == category)
        .map_or(UNKNOWN_CATEGORY_COLOUR, |c| c.colour)
}
