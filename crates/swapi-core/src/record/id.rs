use super::{CharacterId, RecordError};

/// Extract the numeric id from a URL of the form `.../<digits>/`.
///
/// Splits on `/` and parses the second-to-last segment, so the trailing
/// slash is required.
pub fn extract_id(url: &str) -> Result<CharacterId, RecordError> {
    let malformed = || RecordError::MalformedUrl(url.to_string());

    let mut parts = url.rsplit('/');
    let last = parts.next().ok_or_else(malformed)?;
    if !last.is_empty() {
        return Err(malformed());
    }
    let segment = parts.next().ok_or_else(malformed)?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    segment.parse::<CharacterId>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_from_character_url() {
        assert_eq!(extract_id("https://swapi.dev/api/people/1/").unwrap(), 1);
        assert_eq!(extract_id("https://swapi.dev/api/people/83/").unwrap(), 83);
        assert_eq!(extract_id("http://127.0.0.1:4000/api/people/007/").unwrap(), 7);
    }

    #[test]
    fn id_requires_trailing_slash() {
        assert!(matches!(
            extract_id("https://swapi.dev/api/people/1"),
            Err(RecordError::MalformedUrl(_))
        ));
    }

    #[test]
    fn id_rejects_non_digits() {
        for url in [
            "https://swapi.dev/api/people/",
            "https://swapi.dev/api/people/abc/",
            "https://swapi.dev/api/people/-3/",
            "https://swapi.dev/api/people/1x/",
            "https://swapi.dev/api/people/1//",
            "/",
            "",
        ] {
            assert!(extract_id(url).is_err(), "{url:?} should be rejected");
        }
    }

    #[test]
    fn id_overflow_is_rejected() {
        assert!(extract_id("https://swapi.dev/api/people/99999999999999999999/").is_err());
    }
}
