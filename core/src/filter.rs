//! Keyword predicates over person records.

use std::fmt;

use crate::person::Person;

/// A filter over persons, built by the find command.
///
/// Exactly one variant is produced per parsed find command; the variant
/// encodes which fields the keywords apply to. Keyword lists are ordered as
/// the user supplied them. An empty keyword list matches nothing, so the
/// combined name-and-class variant matches nothing when either side is empty.
///
/// Matching semantics per variant:
///
/// - `NameContainsKeywords` — any keyword equals a whitespace-separated word
///   of the name, case-insensitively.
/// - `ClassIdContainsKeywords` — any keyword is a case-insensitive substring
///   of the class id.
/// - `NameAndClassIdContainsKeywords` — both of the above hold.
/// - `MonthPaidContainsKeywords` — any keyword is a substring of any paid
///   month (months render as `YYYY-MM`).
/// - `NotMonthPaidContainsKeywords` — the month-paid test fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonFilter {
    NameContainsKeywords(Vec<String>),
    ClassIdContainsKeywords(Vec<String>),
    NameAndClassIdContainsKeywords {
        name_keywords: Vec<String>,
        class_id_keywords: Vec<String>,
    },
    MonthPaidContainsKeywords(Vec<String>),
    NotMonthPaidContainsKeywords(Vec<String>),
}

impl PersonFilter {
    /// Tests the filter against a single person record.
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::NameContainsKeywords(keywords) => name_matches(keywords, person),
            PersonFilter::ClassIdContainsKeywords(keywords) => class_id_matches(keywords, person),
            PersonFilter::NameAndClassIdContainsKeywords {
                name_keywords,
                class_id_keywords,
            } => name_matches(name_keywords, person) && class_id_matches(class_id_keywords, person),
            PersonFilter::MonthPaidContainsKeywords(keywords) => {
                month_paid_matches(keywords, person)
            }
            PersonFilter::NotMonthPaidContainsKeywords(keywords) => {
                !month_paid_matches(keywords, person)
            }
        }
    }
}

impl fmt::Display for PersonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonFilter::NameContainsKeywords(keywords) => {
                write!(f, "name matches any of {keywords:?}")
            }
            PersonFilter::ClassIdContainsKeywords(keywords) => {
                write!(f, "class id matches any of {keywords:?}")
            }
            PersonFilter::NameAndClassIdContainsKeywords {
                name_keywords,
                class_id_keywords,
            } => write!(
                f,
                "name matches any of {name_keywords:?} and class id matches any of {class_id_keywords:?}"
            ),
            PersonFilter::MonthPaidContainsKeywords(keywords) => {
                write!(f, "months paid match any of {keywords:?}")
            }
            PersonFilter::NotMonthPaidContainsKeywords(keywords) => {
                write!(f, "months paid match none of {keywords:?}")
            }
        }
    }
}

fn name_matches(keywords: &[String], person: &Person) -> bool {
    keywords.iter().any(|keyword| {
        person
            .name
            .as_str()
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    })
}

fn class_id_matches(keywords: &[String], person: &Person) -> bool {
    let class_id = person.class_id.as_str().to_ascii_lowercase();
    keywords
        .iter()
        .any(|keyword| class_id.contains(&keyword.to_ascii_lowercase()))
}

fn month_paid_matches(keywords: &[String], person: &Person) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_ascii_lowercase();
        person
            .months_paid
            .iter()
            .any(|month| month.as_str().to_ascii_lowercase().contains(&keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, ClassId, Email, Fees, MonthPaid, Name, Phone};

    fn person(name: &str, class_id: &str, months: &[&str]) -> Person {
        let mut person = Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("94824427").unwrap(),
            Email::parse("anna@example.com").unwrap(),
            Address::parse("4th street").unwrap(),
            Fees::parse("200").unwrap(),
            ClassId::parse(class_id).unwrap(),
        );
        for month in months {
            person.months_paid.insert(MonthPaid::parse(month).unwrap());
        }
        person
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_name_filter_matches_whole_words_case_insensitively() {
        let filter = PersonFilter::NameContainsKeywords(keywords(&["alice", "Bob"]));

        assert!(filter.matches(&person("Alice Pauline", "1A", &[])));
        assert!(filter.matches(&person("Bob Choo", "1A", &[])));
        // Substrings of a word are not word matches
        assert!(!filter.matches(&person("Alicia Tan", "1A", &[])));
    }

    #[test]
    fn test_name_filter_empty_keywords_match_nothing() {
        let filter = PersonFilter::NameContainsKeywords(Vec::new());
        assert!(!filter.matches(&person("Alice Pauline", "1A", &[])));
    }

    #[test]
    fn test_class_id_filter_matches_substrings() {
        let filter = PersonFilter::ClassIdContainsKeywords(keywords(&["1a"]));

        assert!(filter.matches(&person("Alice Pauline", "1A", &[])));
        assert!(filter.matches(&person("Bob Choo", "X1A2", &[])));
        assert!(!filter.matches(&person("Carl Kurz", "2B", &[])));
    }

    #[test]
    fn test_name_and_class_id_requires_both() {
        let filter = PersonFilter::NameAndClassIdContainsKeywords {
            name_keywords: keywords(&["Alice"]),
            class_id_keywords: keywords(&["1A"]),
        };

        assert!(filter.matches(&person("Alice Pauline", "1A", &[])));
        assert!(!filter.matches(&person("Alice Pauline", "2B", &[])));
        assert!(!filter.matches(&person("Bob Choo", "1A", &[])));
    }

    #[test]
    fn test_name_and_class_id_with_empty_side_matches_nothing() {
        let filter = PersonFilter::NameAndClassIdContainsKeywords {
            name_keywords: Vec::new(),
            class_id_keywords: keywords(&["1A"]),
        };
        assert!(!filter.matches(&person("Alice Pauline", "1A", &[])));
    }

    #[test]
    fn test_month_paid_filter_and_negation() {
        let paid = person("Alice Pauline", "1A", &["2024-01", "2024-02"]);
        let unpaid = person("Bob Choo", "1A", &[]);

        let filter = PersonFilter::MonthPaidContainsKeywords(keywords(&["2024-01"]));
        assert!(filter.matches(&paid));
        assert!(!filter.matches(&unpaid));

        let negated = PersonFilter::NotMonthPaidContainsKeywords(keywords(&["2024-01"]));
        assert!(!negated.matches(&paid));
        assert!(negated.matches(&unpaid));
    }

    #[test]
    fn test_month_paid_filter_matches_year_prefix() {
        let paid = person("Alice Pauline", "1A", &["2024-03"]);
        let filter = PersonFilter::MonthPaidContainsKeywords(keywords(&["2024"]));
        assert!(filter.matches(&paid));
    }
}
