//! Outbound job-listing links.

use url::Url;

/// Base URL of the Arbetsförmedlingen job-ad search.
pub const PLATSBANKEN_SEARCH_URL: &str = "https://arbetsformedlingen.se/platsbanken/annonser";

/// Build a Platsbanken search link for an occupation title.
///
/// The title goes into the `q` query parameter with standard form encoding.
pub fn listings_url(title: &str) -> Url {
    Url::parse_with_params(PLATSBANKEN_SEARCH_URL, &[("q", title)])
        .expect("valid base URL with encoded query")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_appended_as_query() {
        let url = listings_url("Nurse");
        assert_eq!(
            url.as_str(),
            "https://arbetsformedlingen.se/platsbanken/annonser?q=Nurse"
        );
    }

    #[test]
    fn spaces_and_diacritics_are_encoded() {
        let url = listings_url("Backend Developer");
        assert_eq!(url.query(), Some("q=Backend+Developer"));

        let url = listings_url("Sjuksköterska");
        assert_eq!(url.query(), Some("q=Sjuksk%C3%B6terska"));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let url = listings_url("R&D Engineer");
        assert_eq!(url.query(), Some("q=R%26D+Engineer"));
    }
}
