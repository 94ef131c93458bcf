use crate::engine::assets::resource_record::ResourceRecord;

struct FallbackEntry {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    relevance: &'static str,
    link: &'static str,
}

const FALLBACK_RESOURCES: &[FallbackEntry] = &[
    FallbackEntry {
        name: "Processing",
        category: "Tool",
        description: "A flexible software sketchbook and a language for learning how to code within the context of the visual arts",
        relevance: "High",
        link: "https://processing.org",
    },
    FallbackEntry {
        name: "p5.js",
        category: "Tool",
        description: "A JavaScript library for creative coding, with a focus on making coding accessible and inclusive for artists, designers, educators, beginners",
        relevance: "High",
        link: "https://p5js.org",
    },
    FallbackEntry {
        name: "openFrameworks",
        category: "Tool",
        description: "An open source C++ toolkit for creative coding",
        relevance: "Medium",
        link: "https://openframeworks.cc",
    },
    FallbackEntry {
        name: "Creative Code Collective",
        category: "Community",
        description: "A community of artists, designers, and developers interested in creative coding",
        relevance: "High",
        link: "https://creativecode.org",
    },
    FallbackEntry {
        name: "The Kennedy Center",
        category: "Venue",
        description: "National cultural center with digital arts programming and live coding events",
        relevance: "Medium",
        link: "https://kennedy-center.org",
    },
    FallbackEntry {
        name: "Smithsonian Arts + Industries",
        category: "Venue",
        description: "Museum space featuring interactive digital art installations and workshops",
        relevance: "Medium",
        link: "https://aibuilding.si.edu",
    },
];

pub fn fallback_records() -> Vec<ResourceRecord> {
    FALLBACK_RESOURCES
        .iter()
        .map(|entry| {
            ResourceRecord::new(
                entry.name,
                entry.category,
                entry.description,
                entry.relevance,
                entry.link,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_records_are_complete_and_linked() {
        let records = fallback_records();
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(ResourceRecord::is_complete));
        assert!(records.iter().all(|r| r.navigable_link().is_some()));
    }

    #[test]
    fn fallback_keeps_declared_order() {
        let names: Vec<_> = fallback_records().into_iter().map(|r| r.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Processing"));
        assert_eq!(
            names.last().map(String::as_str),
            Some("Smithsonian Arts + Industries")
        );
    }
}
