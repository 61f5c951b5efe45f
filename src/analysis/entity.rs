/// Tag used when no known country occurs in the text
pub const UNKNOWN_COUNTRY: &str = "Unknown Country";

/// Substring-based country tagger.
///
/// Matching is case-insensitive and the first entry in list order wins, so
/// "Kosovë" is reported for a text mentioning both Kosovë and Serbi.
#[derive(Debug, Clone)]
pub struct EntityTagger {
    /// (display name, lowercase needle)
    entities: Vec<(String, String)>,
}

impl EntityTagger {
    pub fn new<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entities = entities
            .into_iter()
            .map(|e| {
                let name = e.as_ref().to_string();
                let needle = name.to_lowercase();
                (name, needle)
            })
            .filter(|(_, needle)| !needle.is_empty())
            .collect();
        Self { entities }
    }

    /// First matching entity, if any
    pub fn find<'a>(&'a self, text: &str) -> Option<&'a str> {
        let haystack = text.to_lowercase();
        self.entities
            .iter()
            .find(|(_, needle)| haystack.contains(needle.as_str()))
            .map(|(name, _)| name.as_str())
    }

    /// Like [`find`](Self::find), falling back to [`UNKNOWN_COUNTRY`]
    pub fn tag(&self, text: &str) -> String {
        self.find(text).unwrap_or(UNKNOWN_COUNTRY).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::vocabulary::DEFAULT_COUNTRIES;

    fn tagger() -> EntityTagger {
        EntityTagger::new(DEFAULT_COUNTRIES)
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(tagger().tag("LAJME NGA SHQIPËRI SOT"), "Shqipëri");
        assert_eq!(tagger().tag("Zgjedhjet në mal i zi"), "Mal i Zi");
    }

    #[test]
    fn test_list_order_wins() {
        assert_eq!(tagger().tag("Serbi dhe Kosovë nënshkruan"), "Kosovë");
    }

    #[test]
    fn test_substring_semantics() {
        // "Italia" 包含 "itali"
        assert_eq!(tagger().tag("Ndeshja me Italian"), "Itali");
    }

    #[test]
    fn test_unknown() {
        assert_eq!(tagger().tag("Nothing relevant here"), UNKNOWN_COUNTRY);
        assert_eq!(tagger().tag(""), UNKNOWN_COUNTRY);
        assert_eq!(EntityTagger::new(Vec::<String>::new()).tag("Shqipëri"), UNKNOWN_COUNTRY);
    }
}
