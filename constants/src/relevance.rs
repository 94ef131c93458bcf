/// Score given to empty or unmatched relevance text.
pub const DEFAULT_RELEVANCE_SCORE: u8 = 1;

/// Highest ordinal a relevance label can map to.
pub const MAX_RELEVANCE_SCORE: u8 = 5;

pub struct RelevanceTier {
    pub score: u8,
    pub keywords: &'static [&'static str],
}

/// Checked top to bottom; the first tier with a matching keyword wins.
pub const RELEVANCE_TIERS: &[RelevanceTier] = &[
    RelevanceTier {
        score: 5,
        keywords: &["high", "core", "essential"],
    },
    RelevanceTier {
        score: 4,
        keywords: &["important", "key"],
    },
    RelevanceTier {
        score: 3,
        keywords: &["medium", "useful", "helpful"],
    },
    RelevanceTier {
        score: 2,
        keywords: &["low", "supplementary", "additional"],
    },
];

/// Map free relevance text to an ordinal in `1..=5` by case-insensitive substring match.
pub fn relevance_score(text: &str) -> u8 {
    if text.is_empty() {
        return DEFAULT_RELEVANCE_SCORE;
    }

    let lowered = text.to_lowercase();
    RELEVANCE_TIERS
        .iter()
        .find(|tier| tier.keywords.iter().any(|k| lowered.contains(k)))
        .map_or(DEFAULT_RELEVANCE_SCORE, |tier| tier.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_match_case_insensitively() {
        assert_eq!(relevance_score("High"), 5);
        assert_eq!(relevance_score("ESSENTIAL reading"), 5);
        assert_eq!(relevance_score("Key partner"), 4);
        assert_eq!(relevance_score("medium"), 3);
        assert_eq!(relevance_score("Helpful"), 3);
        assert_eq!(relevance_score("Supplementary"), 2);
    }

    #[test]
    fn first_matching_tier_wins() {
        // "low" also appears, but the score 4 tier is checked first.
        assert_eq!(relevance_score("key but low priority"), 4);
        // "highly" contains "high".
        assert_eq!(relevance_score("Highly useful"), 5);
    }

    #[test]
    fn empty_or_unmatched_text_scores_one() {
        assert_eq!(relevance_score(""), DEFAULT_RELEVANCE_SCORE);
        assert_eq!(relevance_score("n/a"), DEFAULT_RELEVANCE_SCORE);
        assert_eq!(relevance_score("   "), DEFAULT_RELEVANCE_SCORE);
    }

    #[test]
    fn scores_stay_in_range() {
        for label in ["High", "Important", "Medium", "Low", "Other", ""] {
            let score = relevance_score(label);
            assert!((DEFAULT_RELEVANCE_SCORE..=MAX_RELEVANCE_SCORE).contains(&score));
        }
    }
}
