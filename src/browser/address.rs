//! Address bar input resolution.
//!
//! The history core never inspects locations, so everything the user types
//! is turned into a loadable URL here: scheme passthrough, default-protocol
//! insertion for host-like input, and a search fallback for free text.

use url::Url;

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Resolve raw address bar input into a URL, or `None` for empty input.
pub fn resolve(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if (input.starts_with("http://") || input.starts_with("https://"))
        && Url::parse(input).is_ok()
    {
        return Some(input.to_string());
    }

    if looks_like_host(input) {
        let with_scheme = format!("https://{}", input);
        if Url::parse(&with_scheme).is_ok() {
            return Some(with_scheme);
        }
    }

    Some(format!("{}{}", SEARCH_URL, urlencoding::encode(input)))
}

/// Heuristic: dotted names and localhost are addresses, anything with a
/// space is a search.
fn looks_like_host(input: &str) -> bool {
    if input.contains(' ') {
        return false;
    }
    input.contains('.') || input.starts_with("localhost")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_urls_pass_through() {
        assert_eq!(
            resolve("https://example.com/path?q=1"),
            Some("https://example.com/path?q=1".to_string())
        );
        assert_eq!(
            resolve("http://example.com"),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn bare_domains_get_https() {
        assert_eq!(
            resolve("example.com"),
            Some("https://example.com".to_string())
        );
        assert_eq!(
            resolve("docs.rs/serde"),
            Some("https://docs.rs/serde".to_string())
        );
    }

    #[test]
    fn localhost_with_port_is_an_address() {
        assert_eq!(
            resolve("localhost:8080"),
            Some("https://localhost:8080".to_string())
        );
    }

    #[test]
    fn free_text_falls_back_to_search() {
        assert_eq!(
            resolve("rust navigation history"),
            Some(format!("{}rust%20navigation%20history", SEARCH_URL))
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            resolve("  example.com  "),
            Some("https://example.com".to_string())
        );
    }
}
