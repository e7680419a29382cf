use std::fmt::Display;

/// Canonical moods driving recommendation category selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Boring,
    Joy,
}

/// All moods, in the order they are offered and matched
pub const ALL_MOODS: [Mood; 5] = [
    Mood::Happy,
    Mood::Sad,
    Mood::Angry,
    Mood::Boring,
    Mood::Joy,
];

/// Emotion words accepted as guidance towards a canonical mood.
///
/// Membership is a literal contract: matching is exact (case-sensitive) and
/// the lists are kept verbatim, duplicates included. Earlier moods win if a
/// word ever appears under more than one of them.
const SYNONYMS: [(Mood, &[&str]); 5] = [
    (
        Mood::Happy,
        &[
            "Pleasure",
            "Pride",
            "AweAwe",
            "pleasure",
            "pride",
            "aweAwe",
            "Fantastic",
            "fantastic",
        ],
    ),
    (
        Mood::Sad,
        &[
            "Lonely",
            "Unhappy",
            "Hopeless",
            "Gloomy",
            "Miserable",
            "lonely",
            "unhappy",
            "hopeless",
            "gloomy",
            "miserable",
        ],
    ),
    (
        Mood::Angry,
        &[
            "Annoyed",
            "Frustrated",
            "Bitter",
            "Mad",
            "Insulted",
            "annoyed",
            "frustrated",
            "bitter",
            "mad",
            "insulted",
            "mad",
        ],
    ),
    (
        Mood::Boring,
        &[
            "Worried",
            "Stressed",
            "Nervous",
            "worried",
            "stressed",
            "nervous",
        ],
    ),
    (
        Mood::Joy,
        &[
            "Amusement",
            "Excitement",
            "Ecstasy",
            "amusement",
            "excitement",
            "ecstasy",
        ],
    ),
];

impl Mood {
    /// Case-normalizing lookup of a submitted mood string
    pub fn parse(raw: &str) -> Option<Mood> {
        match raw.to_ascii_lowercase().as_str() {
            "happy" => Some(Mood::Happy),
            "sad" => Some(Mood::Sad),
            "angry" => Some(Mood::Angry),
            "boring" => Some(Mood::Boring),
            "joy" => Some(Mood::Joy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Boring => "Boring",
            Mood::Joy => "Joy",
        }
    }

    /// Catalog subject categories queried for this mood, in query order
    pub fn categories(&self) -> [&'static str; 3] {
        match self {
            Mood::Happy => ["romance", "humor", "adventure"],
            Mood::Sad => ["tragedy", "drama", "emotional"],
            Mood::Angry => ["thriller", "suspense", "revenge"],
            Mood::Boring => ["mystery", "horror", "psychological"],
            Mood::Joy => ["inspirational", "self-help", "uplifting"],
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying a submitted mood string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodResolution {
    /// A supported mood, ready for recommendations
    Supported(Mood),
    /// An emotion word mapped to a canonical mood, for the guidance page
    SynonymOf(Mood),
    /// Neither a supported mood nor a known emotion word
    Unknown,
}

/// Classifies a raw mood string from the picker form
pub fn resolve(raw: &str) -> MoodResolution {
    if let Some(mood) = Mood::parse(raw) {
        return MoodResolution::Supported(mood);
    }

    for (mood, words) in &SYNONYMS {
        if words.contains(&raw) {
            return MoodResolution::SynonymOf(*mood);
        }
    }

    MoodResolution::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_original_casings() {
        assert_eq!(Mood::parse("Happy"), Some(Mood::Happy));
        assert_eq!(Mood::parse("happy"), Some(Mood::Happy));
        assert_eq!(Mood::parse("Boring"), Some(Mood::Boring));
        assert_eq!(Mood::parse("boring"), Some(Mood::Boring));
    }

    #[test]
    fn test_parse_normalizes_any_casing() {
        assert_eq!(Mood::parse("HAPPY"), Some(Mood::Happy));
        assert_eq!(Mood::parse("jOy"), Some(Mood::Joy));
    }

    #[test]
    fn test_parse_rejects_unknown_words() {
        assert_eq!(Mood::parse("Xyzzy"), None);
        assert_eq!(Mood::parse(""), None);
    }

    #[test]
    fn test_resolve_supported_mood() {
        assert_eq!(resolve("Sad"), MoodResolution::Supported(Mood::Sad));
        assert_eq!(resolve("sad"), MoodResolution::Supported(Mood::Sad));
    }

    #[test]
    fn test_resolve_synonym_reports_parent_mood() {
        assert_eq!(resolve("Pleasure"), MoodResolution::SynonymOf(Mood::Happy));
        assert_eq!(resolve("pleasure"), MoodResolution::SynonymOf(Mood::Happy));
        assert_eq!(resolve("Gloomy"), MoodResolution::SynonymOf(Mood::Sad));
        assert_eq!(resolve("ecstasy"), MoodResolution::SynonymOf(Mood::Joy));
    }

    #[test]
    fn test_resolve_synonyms_are_case_sensitive() {
        // Mood lookup normalizes case, synonym lookup does not
        assert_eq!(resolve("PLEASURE"), MoodResolution::Unknown);
        assert_eq!(resolve("AweAwe"), MoodResolution::SynonymOf(Mood::Happy));
        assert_eq!(resolve("aweawe"), MoodResolution::Unknown);
    }

    #[test]
    fn test_resolve_duplicated_mad_literal() {
        // "mad" appears twice in the Angry list; membership still holds
        assert_eq!(resolve("mad"), MoodResolution::SynonymOf(Mood::Angry));
        assert_eq!(resolve("Mad"), MoodResolution::SynonymOf(Mood::Angry));
    }

    #[test]
    fn test_resolve_unknown_word() {
        assert_eq!(resolve("Xyzzy"), MoodResolution::Unknown);
    }

    #[test]
    fn test_synonym_table_precedence_order() {
        // First match wins on overlap, so the table order is a contract
        let table_order: Vec<Mood> = SYNONYMS.iter().map(|(mood, _)| *mood).collect();
        assert_eq!(table_order, ALL_MOODS.to_vec());
    }

    #[test]
    fn test_categories_per_mood() {
        assert_eq!(Mood::Happy.categories(), ["romance", "humor", "adventure"]);
        assert_eq!(Mood::Sad.categories(), ["tragedy", "drama", "emotional"]);
        assert_eq!(Mood::Angry.categories(), ["thriller", "suspense", "revenge"]);
        assert_eq!(
            Mood::Boring.categories(),
            ["mystery", "horror", "psychological"]
        );
        assert_eq!(
            Mood::Joy.categories(),
            ["inspirational", "self-help", "uplifting"]
        );
    }
}
