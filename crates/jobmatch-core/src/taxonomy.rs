//! SSYK taxonomy definitions.
//!
//! Ranked occupations are enriched with a short official definition fetched
//! from the JobTech taxonomy service. The lookup contract is deliberately
//! blunt: given a code, return a string. Any failure — network, non-success
//! status, empty response, missing field — degrades to a fixed fallback
//! text and is never propagated to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::search::RankedOccupation;

/// Shown when no real definition can be retrieved for a code.
pub const FALLBACK_DEFINITION: &str = "Ingen beskrivning tillgänglig";

/// Default base URL of the JobTech taxonomy service.
pub const DEFAULT_TAXONOMY_BASE_URL: &str = "https://taxonomy.api.jobtechdev.se";

/// A source of occupation definitions keyed by SSYK code.
///
/// Implementations must be total: always return a usable string, falling
/// back to [`FALLBACK_DEFINITION`] rather than erroring. Lookups must be
/// idempotent so callers can memoize them freely.
pub trait DefinitionSource {
    /// Return the definition for `ssyk_code`, or the fallback text.
    fn lookup(&self, ssyk_code: &str) -> String;
}

/// A source that always answers with [`FALLBACK_DEFINITION`].
///
/// Used for offline runs where no taxonomy service should be contacted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackOnly;

impl DefinitionSource for FallbackOnly {
    fn lookup(&self, _ssyk_code: &str) -> String {
        FALLBACK_DEFINITION.to_string()
    }
}

/// A [`RankedOccupation`] joined with its taxonomy definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribedOccupation {
    /// Occupation display title.
    pub title: String,
    /// Total number of matching records across all search terms.
    pub count: usize,
    /// SSYK code carried from the aggregation step.
    pub ssyk_code: String,
    /// Definition text; never empty (fallback on lookup failure).
    pub definition: String,
}

/// Attach a definition to every ranked occupation, preserving order.
#[tracing::instrument(skip_all, fields(entries = ranked.len()))]
pub fn enrich(
    ranked: Vec<RankedOccupation>,
    source: &dyn DefinitionSource,
) -> Vec<DescribedOccupation> {
    ranked
        .into_iter()
        .map(|entry| {
            let definition = source.lookup(&entry.ssyk_code);
            DescribedOccupation {
                title: entry.title,
                count: entry.count,
                ssyk_code: entry.ssyk_code,
                definition,
            }
        })
        .collect()
}

/// One concept record in a taxonomy service response.
#[derive(Debug, Deserialize)]
struct ConceptRecord {
    #[serde(rename = "taxonomy/definition")]
    definition: Option<String>,
}

/// Pick the usable definition out of a taxonomy response, if any.
///
/// The service answers with a JSON array; the definition lives under the
/// `taxonomy/definition` key of the first element. Blank text counts as
/// absent.
fn definition_from_response(records: &[ConceptRecord]) -> Option<String> {
    records
        .first()
        .and_then(|record| record.definition.as_deref())
        .map(str::trim)
        .filter(|definition| !definition.is_empty())
        .map(str::to_string)
}

/// HTTP client for the JobTech taxonomy service.
///
/// Synchronous by design: one aggregation call runs to completion before
/// its result is used, and a failed or slow request degrades to the
/// fallback text instead of blocking the search itself indefinitely.
#[derive(Debug)]
pub struct TaxonomyClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl TaxonomyClient {
    /// Build a client against the given service base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("jobmatch/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn fetch_definition(&self, ssyk_code: &str) -> reqwest::Result<Option<String>> {
        let url = format!("{}/v1/taxonomy/specific/concepts/ssyk", self.base_url);
        let records: Vec<ConceptRecord> = self
            .http
            .get(url)
            .query(&[("ssyk-code-2012", ssyk_code)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(definition_from_response(&records))
    }
}

impl DefinitionSource for TaxonomyClient {
    fn lookup(&self, ssyk_code: &str) -> String {
        match self.fetch_definition(ssyk_code) {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                tracing::debug!(ssyk_code, "taxonomy response held no definition");
                FALLBACK_DEFINITION.to_string()
            }
            Err(error) => {
                tracing::warn!(ssyk_code, error = %error, "taxonomy lookup failed");
                FALLBACK_DEFINITION.to_string()
            }
        }
    }
}
