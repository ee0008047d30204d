use url::form_urlencoded;

use crate::codec::Registry;
use crate::dispatch::Request;
use crate::types::Mode;

/// Flags checked in priority order when more than one is present.
const MODE_FLAGS: [(&str, Mode); 3] = [("jmp", Mode::Jump), ("dec", Mode::Decode), ("enc", Mode::Encode)];

/// Builds a [`Request`] from a raw query string such as `enc&Base64=SGk%3D`.
///
/// The mode is whichever of `jmp`, `dec`, `enc` is present (in that order of
/// priority). The scheme is the first other key naming a registered scheme,
/// and its value, percent-decoded once, is the input.
pub fn parse_query(query: &str, registry: &Registry) -> Request {
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();

    let mode = MODE_FLAGS
        .iter()
        .find(|(flag, _)| pairs.iter().any(|(key, _)| key == flag))
        .map(|&(_, mode)| mode);

    // `dec` would otherwise resolve to the Dec scheme
    let (scheme, input) = match pairs
        .into_iter()
        .find(|(key, _)| !is_mode_flag(key) && registry.contains(key))
    {
        Some((key, value)) => (Some(key), Some(value)),
        None => (None, None),
    };

    Request { mode, scheme, input }
}

fn is_mode_flag(key: &str) -> bool {
    MODE_FLAGS.iter().any(|(flag, _)| *flag == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Request {
        parse_query(query, Registry::global())
    }

    #[test]
    fn test_parse_encode() {
        let request = parse("enc&Base64=hello%20world");
        assert_eq!(request, Request::new(Mode::Encode, "Base64", "hello world"));
    }

    #[test]
    fn test_mode_priority() {
        assert_eq!(parse("enc&dec&Hex=41").mode, Some(Mode::Decode));
        assert_eq!(parse("enc&jmp&URL=x").mode, Some(Mode::Jump));
        assert_eq!(parse("Hex=41").mode, None);
    }

    #[test]
    fn test_first_scheme_key_wins() {
        let request = parse("dec&foo=bar&Hex=41&Base64=QQ==");
        assert_eq!(request.scheme.as_deref(), Some("Hex"));
        assert_eq!(request.input.as_deref(), Some("41"));
    }

    #[test]
    fn test_scheme_key_case_insensitive() {
        let request = parse("enc&morse=sos");
        assert_eq!(request.scheme.as_deref(), Some("morse"));
    }

    #[test]
    fn test_value_decoded_once() {
        let request = parse("dec&URL=%2541");
        assert_eq!(request.input.as_deref(), Some("%41"));
    }

    #[test]
    fn test_mode_flag_is_not_a_scheme_key() {
        let request = parse("dec&Base64=SGVsbG8=");
        assert_eq!(request, Request::new(Mode::Decode, "Base64", "SGVsbG8="));

        let request = parse("enc&Dec=A");
        assert_eq!(request.scheme.as_deref(), Some("Dec"));
    }

    #[test]
    fn test_plus_is_space() {
        assert_eq!(parse("enc&Hex=a+b").input.as_deref(), Some("a b"));
    }

    #[test]
    fn test_no_scheme() {
        let request = parse("enc&Nope=1");
        assert_eq!(request.mode, Some(Mode::Encode));
        assert_eq!(request.scheme, None);
        assert_eq!(request.input, None);
    }

    #[test]
    fn test_empty_value_is_present() {
        assert_eq!(parse("enc&Hex").input.as_deref(), Some(""));
    }
}
