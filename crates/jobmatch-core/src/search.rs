//! Search-term matching and occupation aggregation.
//!
//! This is the core routine: a raw comma-separated search string is split
//! into terms, each term is matched case-insensitively as a whole word
//! against every record's description, matches are grouped by occupation,
//! and per-term groups are merged into one ranked result set.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::dataset::JobRecord;

/// One occupation in the ranked result set.
///
/// Titles are unique within a result set: when several search terms hit the
/// same occupation, their counts are summed and the first-seen SSYK code is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedOccupation {
    /// Occupation display title.
    pub title: String,
    /// Total number of matching records across all search terms.
    pub count: usize,
    /// SSYK code of the first matching record in table order.
    pub ssyk_code: String,
}

/// Aggregate matches for a comma-separated search string over the dataset.
///
/// Terms are processed independently, in the order given, each trimmed of
/// surrounding whitespace. An empty term (from `""`, a trailing comma, or
/// repeated commas) matches nothing but is otherwise accepted. The result
/// is sorted descending by count with a stable sort, so occupations with
/// equal counts keep their first-insertion order. Zero matches yield an
/// empty vector, never an error.
#[tracing::instrument(skip(table), fields(records = table.len()))]
pub fn aggregate(search_terms: &str, table: &[JobRecord]) -> Vec<RankedOccupation> {
    let mut results: Vec<RankedOccupation> = Vec::new();
    let mut by_title: HashMap<String, usize> = HashMap::new();

    for term in search_terms.split(',').map(str::trim) {
        for group in group_matches(term, table) {
            match by_title.get(&group.title) {
                Some(&i) => {
                    // Same title seen under an earlier term: sum counts,
                    // keep the code the first term discovered.
                    results[i].count += group.count;
                }
                None => {
                    by_title.insert(group.title.clone(), results.len());
                    results.push(group);
                }
            }
        }
    }

    // Vec::sort_by is stable: equal counts retain discovery order.
    results.sort_by(|a, b| b.count.cmp(&a.count));

    tracing::debug!(occupations = results.len(), "aggregation complete");
    results
}

/// Match one term against the table and group hits by occupation.
///
/// Groups come back in order of first appearance in the table, each with
/// the SSYK code of its first matching record.
fn group_matches(term: &str, table: &[JobRecord]) -> Vec<RankedOccupation> {
    // An empty pattern inside \b..\b would match at every word boundary;
    // an empty term matches nothing instead.
    if term.is_empty() {
        return Vec::new();
    }

    let matcher = whole_word_matcher(term);
    let mut groups: Vec<RankedOccupation> = Vec::new();
    let mut by_title: HashMap<&str, usize> = HashMap::new();

    for record in table {
        let matched = record
            .description
            .as_deref()
            .is_some_and(|description| matcher.is_match(description));
        if !matched {
            continue;
        }

        match by_title.get(record.occupation.as_str()) {
            Some(&i) => groups[i].count += 1,
            None => {
                by_title.insert(record.occupation.as_str(), groups.len());
                groups.push(RankedOccupation {
                    title: record.occupation.clone(),
                    count: 1,
                    ssyk_code: record.ssyk_code.clone(),
                });
            }
        }
    }

    groups
}

/// Build a case-insensitive whole-word matcher for a literal term.
///
/// The term is escaped, so user input is always matched literally and can
/// never inject regex syntax.
fn whole_word_matcher(term: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is a valid regex")
}
