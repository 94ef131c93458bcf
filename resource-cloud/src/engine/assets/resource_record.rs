use constants::card::LINK_PLACEHOLDER;
use constants::category::get_category_colour;
use constants::relevance::relevance_score;
use serde::{Deserialize, Serialize};

/// One resource row. Field names mirror the CSV header and the host's JSON shape.
/// Optional columns default to empty strings when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "Resource_Name", default)]
    pub name: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Sub_Category", default)]
    pub sub_category: String,
    #[serde(rename = "Location_Scope", default)]
    pub location_scope: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Relevance", default)]
    pub relevance: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Access type", default)]
    pub access_type: String,
}

impl ResourceRecord {
    pub fn new(name: &str, category: &str, description: &str, relevance: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            relevance: relevance.to_string(),
            link: link.to_string(),
            ..Default::default()
        }
    }

    /// Whether the required name, category and description are all present.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && !self.description.trim().is_empty()
    }

    pub fn relevance_score(&self) -> u8 {
        relevance_score(&self.relevance)
    }

    pub fn category_colour(&self) -> [u8; 3] {
        get_category_colour(&self.category)
    }

    /// The link, if it is a real URL rather than empty or the placeholder.
    pub fn navigable_link(&self) -> Option<&str> {
        is_real_link(&self.link).then_some(self.link.trim())
    }
}

pub fn is_real_link(link: &str) -> bool {
    let link = link.trim();
    !link.is_empty() && link != LINK_PLACEHOLDER
}
