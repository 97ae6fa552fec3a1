//! Keyword matching against lowercased user input.
//!
//! `Substring` mode reproduces plain containment, so "feverish" matches "fever" and
//! "stroke" matches "heatstroke". `Word` mode only accepts whole-word hits.

use crate::domain::DomainError;
use crate::domain::responses::{EMERGENCY_PHRASES, TOPIC_RESPONSES};
use regex::Regex;

/// How a keyword must appear in the input to count as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Substring,
    Word,
}

impl std::str::FromStr for MatchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "word" => Ok(Self::Word),
            other => Err(DomainError::Config(format!(
                "unknown match mode '{}' (expected 'substring' or 'word')",
                other
            ))),
        }
    }
}

enum Needle {
    Substring(&'static str),
    Word(Regex),
}

impl Needle {
    fn compile(keyword: &'static str, mode: MatchMode) -> Result<Self, DomainError> {
        match mode {
            MatchMode::Substring => Ok(Needle::Substring(keyword)),
            MatchMode::Word => {
                let pattern = format!(r"\b{}\b", regex::escape(keyword));
                Regex::new(&pattern)
                    .map(Needle::Word)
                    .map_err(|e| DomainError::Config(format!("keyword '{}': {}", keyword, e)))
            }
        }
    }

    fn is_in(&self, lowered: &str) -> bool {
        match self {
            Needle::Substring(keyword) => !keyword.is_empty() && lowered.contains(keyword),
            Needle::Word(re) => re.is_match(lowered),
        }
    }
}

/// Ordered keyword list. Each keyword carries a payload returned on the first hit.
pub struct KeywordMatcher<T> {
    entries: Vec<(Needle, T)>,
}

impl<T: Copy> KeywordMatcher<T> {
    pub fn compile<I>(entries: I, mode: MatchMode) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'static str, T)>,
    {
        let entries = entries
            .into_iter()
            .map(|(keyword, payload)| Needle::compile(keyword, mode).map(|needle| (needle, payload)))
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(Self { entries })
    }

    /// Payload of the first keyword (in definition order) found in `lowered`.
    ///
    /// Blank input never matches: with plain containment an empty keyword would
    /// otherwise hit everything.
    pub fn first_match(&self, lowered: &str) -> Option<T> {
        if lowered.trim().is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(needle, _)| needle.is_in(lowered))
            .map(|(_, payload)| *payload)
    }
}

/// A topic keyword and the canned reply it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub keyword: &'static str,
    pub response: &'static str,
}

/// Phrases that short-circuit all other routing.
pub struct EmergencyKeywordSet(KeywordMatcher<&'static str>);

impl EmergencyKeywordSet {
    pub fn new(mode: MatchMode) -> Result<Self, DomainError> {
        let matcher = KeywordMatcher::compile(EMERGENCY_PHRASES.iter().map(|p| (*p, *p)), mode)?;
        Ok(Self(matcher))
    }

    /// The emergency phrase found in `lowered`, if any.
    pub fn find(&self, lowered: &str) -> Option<&'static str> {
        self.0.first_match(lowered)
    }
}

/// Topic keywords in their fixed order.
pub struct ResponseTable(KeywordMatcher<Topic>);

impl ResponseTable {
    pub fn new(mode: MatchMode) -> Result<Self, DomainError> {
        let matcher = KeywordMatcher::compile(
            TOPIC_RESPONSES
                .iter()
                .map(|&(keyword, response)| (keyword, Topic { keyword, response })),
            mode,
        )?;
        Ok(Self(matcher))
    }

    pub fn lookup(&self, lowered: &str) -> Option<Topic> {
        self.0.first_match(lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_mode_matches_inside_words() {
        let table = ResponseTable::new(MatchMode::Substring).unwrap();
        let topic = table.lookup("i feel feverish").unwrap();
        assert_eq!(topic.keyword, "fever");
    }

    #[test]
    fn test_word_mode_requires_whole_word() {
        let table = ResponseTable::new(MatchMode::Word).unwrap();
        assert!(table.lookup("i feel feverish").is_none());
        assert_eq!(table.lookup("i have a fever.").unwrap().keyword, "fever");
    }

    #[test]
    fn test_table_order_breaks_ties() {
        let table = ResponseTable::new(MatchMode::Substring).unwrap();
        // "pain" is defined before "fever", "symptom" before both.
        assert_eq!(table.lookup("fever and pain").unwrap().keyword, "pain");
        assert_eq!(
            table.lookup("fever, pain and another symptom").unwrap().keyword,
            "symptom"
        );
    }

    #[test]
    fn test_blank_input_never_matches() {
        let table = ResponseTable::new(MatchMode::Substring).unwrap();
        let emergency = EmergencyKeywordSet::new(MatchMode::Substring).unwrap();
        for input in ["", "   ", "\n\t"] {
            assert!(table.lookup(input).is_none());
            assert!(emergency.find(input).is_none());
        }
    }

    #[test]
    fn test_empty_keyword_is_ignored() {
        let matcher = KeywordMatcher::compile([("", 1u8), ("flu", 2u8)], MatchMode::Substring).unwrap();
        assert_eq!(matcher.first_match("anything"), None);
        assert_eq!(matcher.first_match("the flu"), Some(2));
    }

    #[test]
    fn test_emergency_phrases_multiword() {
        let emergency = EmergencyKeywordSet::new(MatchMode::Word).unwrap();
        assert_eq!(
            emergency.find("there is severe bleeding here"),
            Some("severe bleeding")
        );
        assert_eq!(emergency.find("a heatstroke warning"), None);
    }

    #[test]
    fn test_topic_table_excludes_emergency() {
        let table = ResponseTable::new(MatchMode::Substring).unwrap();
        assert!(table.lookup("this is an emergency").is_none());
        for (keyword, _) in TOPIC_RESPONSES {
            assert_eq!(table.lookup(keyword).unwrap().keyword, *keyword);
        }
    }

    #[test]
    fn test_match_mode_from_str() {
        assert_eq!("Word".parse::<MatchMode>().unwrap(), MatchMode::Word);
        assert_eq!(" substring ".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }
}
