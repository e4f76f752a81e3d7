//! Prefix tokenizer for command argument text.
//!
//! Splits a raw argument string like ` 1 n/John Doe t/friend t/colleague`
//! into a preamble (`1`) and per-prefix value lists (`n/` → `["John Doe"]`,
//! `t/` → `["friend", "colleague"]`). A prefix occurrence counts only when
//! preceded by whitespace; each value runs from the end of its prefix to the
//! start of the next one. Values and the preamble are trimmed.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::parser::syntax::Prefix;

/// Mapping from field prefix to the ordered values supplied for it, plus the
/// free text preceding the first prefix.
///
/// Built once per parse call by [`tokenize`]; immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Free text before the first recognized prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value supplied for the prefix, if any.
    ///
    /// For prefixes that allow repetition the last occurrence wins; parsers
    /// that forbid repetition reject duplicates before reading values.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values supplied for the prefix, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// Whether the prefix appeared at least once.
    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Rejects repetition of any of the given prefixes, reporting the first
    /// duplicated one found.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        for &prefix in prefixes {
            if self.all_values(prefix).len() > 1 {
                return Err(ParseError::DuplicatePrefix(prefix.token()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct PrefixHit {
    prefix: Prefix,
    start: usize,
}

/// Tokenizes `args` against the given prefixes.
///
/// `args` is the raw argument tail of an input line and is expected to keep
/// its leading whitespace; a prefix at the very start of the string is not
/// recognized (there is nothing before it to separate it from the command
/// word).
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut hits = Vec::new();
    for &prefix in prefixes {
        collect_hits(args, prefix, &mut hits);
    }
    hits.sort_by_key(|hit| hit.start);

    let mut map = ArgumentMultimap::default();
    let first_start = hits.first().map_or(args.len(), |hit| hit.start);
    map.preamble = args[..first_start].trim().to_string();

    for (position, hit) in hits.iter().enumerate() {
        let value_start = hit.start + hit.prefix.token().len();
        let value_end = hits.get(position + 1).map_or(args.len(), |next| next.start);
        let value = args[value_start..value_end].trim().to_string();
        map.values.entry(hit.prefix).or_default().push(value);
    }
    map
}

fn collect_hits(args: &str, prefix: Prefix, hits: &mut Vec<PrefixHit>) {
    let token = prefix.token();
    let mut from = 0;
    while let Some(found) = args[from..].find(token) {
        let start = from + found;
        if preceded_by_whitespace(args, start) {
            hits.push(PrefixHit { prefix, start });
        }
        from = start + token.len();
    }
}

fn preceded_by_whitespace(args: &str, start: usize) -> bool {
    args[..start].chars().next_back().is_some_and(char::is_whitespace)
}
