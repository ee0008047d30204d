//! Request dispatch: resolve the scheme, run the requested direction, and in
//! jump mode validate the decoded text as a redirect target.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::codec::{Registry, Scheme};
use crate::error::{Result, TranscodeError};
use crate::types::Mode;

/// Input a lossy codec could not carry through the transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialLoss {
    pub dropped: Vec<String>,
}

impl PartialLoss {
    fn from_chars(chars: Vec<char>) -> Self {
        Self {
            dropped: chars.into_iter().map(String::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dropped.len()
    }
}

/// An absolute URL that is safe to place in a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    raw: String,
    url: Url,
}

impl RedirectTarget {
    pub fn parse(candidate: &str) -> Result<Self> {
        if candidate.is_empty() || candidate.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TranscodeError::invalid_redirect(candidate));
        }

        let url = Url::parse(candidate).map_err(|_| TranscodeError::invalid_redirect(candidate))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(TranscodeError::invalid_redirect(candidate));
        }

        Ok(Self {
            raw: candidate.to_string(),
            url,
        })
    }

    /// The decoded text, unchanged.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Serialize for RedirectTarget {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Transcoded {
    pub scheme: Scheme,
    pub mode: Mode,
    pub value: String,
    pub partial_loss: PartialLoss,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    Text(Transcoded),
    Redirect { scheme: Scheme, target: RedirectTarget },
}

impl Outcome {
    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Text(t) => Some(&t.value),
            Outcome::Redirect { .. } => None,
        }
    }

    pub fn redirect(&self) -> Option<&RedirectTarget> {
        match self {
            Outcome::Text(_) => None,
            Outcome::Redirect { target, .. } => Some(target),
        }
    }
}

/// Runs `scheme` over `input` in the given mode against the global registry.
pub fn transcode(mode: Mode, scheme: &str, input: &str) -> Result<Outcome> {
    transcode_with(Registry::global(), mode, scheme, input)
}

pub fn transcode_with(registry: &Registry, mode: Mode, scheme_name: &str, input: &str) -> Result<Outcome> {
    let scheme = registry.lookup(scheme_name)?;
    let codec = scheme.codec();
    debug!(scheme = %scheme, mode = %mode, input_len = input.len(), "dispatching");

    match mode {
        Mode::Encode => {
            let value = codec.encode(input)?;
            Ok(Outcome::Text(Transcoded {
                scheme,
                mode,
                value,
                partial_loss: PartialLoss::from_chars(codec.encode_losses(input)),
            }))
        }
        Mode::Decode => {
            let value = codec.decode(input)?;
            Ok(Outcome::Text(Transcoded {
                scheme,
                mode,
                value,
                partial_loss: PartialLoss {
                    dropped: codec.decode_losses(input),
                },
            }))
        }
        Mode::Jump => {
            let decoded = codec.decode(input)?;
            let target = RedirectTarget::parse(&decoded)?;
            debug!(scheme = %scheme, target = target.as_str(), "redirect target accepted");
            Ok(Outcome::Redirect { scheme, target })
        }
    }
}

/// A request as it arrives from a boundary, where any part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub mode: Option<Mode>,
    pub scheme: Option<String>,
    pub input: Option<String>,
}

impl Request {
    pub fn new(mode: Mode, scheme: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            mode: Some(mode),
            scheme: Some(scheme.into()),
            input: Some(input.into()),
        }
    }

    pub fn dispatch(&self) -> Result<Outcome> {
        self.dispatch_with(Registry::global())
    }

    /// Checks mode, then scheme, then input, and runs the transform.
    pub fn dispatch_with(&self, registry: &Registry) -> Result<Outcome> {
        let mode = self.mode.ok_or_else(|| TranscodeError::missing("mode"))?;
        let scheme = self
            .scheme
            .as_deref()
            .ok_or_else(|| TranscodeError::unknown_codec("<none>"))?;
        registry.lookup(scheme)?;
        let input = self.input.as_deref().ok_or_else(|| TranscodeError::missing("input"))?;
        transcode_with(registry, mode, scheme, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_encode_samples() {
        let cases = [
            ("Hex", "41313233343536"),
            ("Base64", "QTEyMzQ1Ng=="),
            ("Base32", "IEYTEMZUGU3A===="),
            ("Base16", "41313233343536"),
            ("URL", "A123456"),
            ("CodePoint", "65,49,50,51,52,53,54"),
        ];
        for (scheme, expected) in cases {
            let outcome = transcode(Mode::Encode, scheme, "A123456").unwrap();
            assert_eq!(outcome.text(), Some(expected), "scheme {}", scheme);
        }
    }

    #[test]
    fn test_every_scheme_roundtrips_ascii() {
        let text = "Hello World 2024";
        for &scheme in Scheme::ALL {
            let encoded = transcode(Mode::Encode, scheme.name(), text).unwrap();
            let decoded = transcode(Mode::Decode, scheme.name(), encoded.text().unwrap()).unwrap();
            let expected = if scheme == Scheme::MorseCode {
                text.to_lowercase()
            } else {
                text.to_string()
            };
            assert_eq!(decoded.text(), Some(expected.as_str()), "scheme {}", scheme);
        }
    }

    #[test]
    fn test_lossless_schemes_roundtrip_unicode() {
        let text = "Grüße, 世界! 🦀";
        for name in [
            "Base64",
            "Base32",
            "Hex",
            "Dec",
            "Bin",
            "UnicodeEscapeLong",
            "DecEntity",
            "HexEntity",
            "URL",
            "CodePoint",
        ] {
            let encoded = transcode(Mode::Encode, name, text).unwrap();
            let decoded = transcode(Mode::Decode, name, encoded.text().unwrap()).unwrap();
            assert_eq!(decoded.text(), Some(text), "scheme {}", name);
        }
    }

    #[test]
    fn test_unknown_scheme() {
        let err = transcode(Mode::Encode, "Base65", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCodec);
    }

    #[test]
    fn test_decode_error_propagates() {
        let err = transcode(Mode::Decode, "Bin", "0101").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodecError);
        let err = transcode(Mode::Decode, "Dec", "12ab").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodecError);
    }

    #[test]
    fn test_jump_url_scheme() {
        let outcome = transcode(Mode::Jump, "URL", "https://example.com").unwrap();
        assert_eq!(outcome.redirect().unwrap().as_str(), "https://example.com");
        assert!(outcome.text().is_none());
    }

    #[test]
    fn test_jump_base64_target() {
        let outcome = transcode(Mode::Jump, "Base64", "aHR0cHM6Ly9leGFtcGxlLmNvbS9wYXRoP3E9MQ==").unwrap();
        assert_eq!(outcome.redirect().unwrap().as_str(), "https://example.com/path?q=1");
        assert_eq!(outcome.redirect().unwrap().url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_jump_rejects_non_url() {
        for input in ["hello", "/relative/path", "javascript:alert(1)", "mailto:a@b.c", ""] {
            let err = transcode(Mode::Jump, "URL", input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRedirectTarget, "input {:?}", input);
        }
    }

    #[test]
    fn test_jump_rejects_header_injection() {
        let err = transcode(Mode::Jump, "URL", "https://example.com/%0D%0ASet-Cookie:%20a=b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRedirectTarget);
    }

    #[test]
    fn test_jump_decode_failure_is_codec_error() {
        let err = transcode(Mode::Jump, "Base64", "not base64!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CodecError);
    }

    #[test]
    fn test_partial_loss_reported() {
        let outcome = transcode(Mode::Encode, "MorseCode", "hi, there!").unwrap();
        match outcome {
            Outcome::Text(t) => {
                assert_eq!(t.value, ".... .. / - .... . .-. .");
                assert_eq!(t.partial_loss.dropped, vec![",".to_string(), "!".to_string()]);
            }
            Outcome::Redirect { .. } => panic!("expected text"),
        }

        let outcome = transcode(Mode::Encode, "Base64", "hi, there!").unwrap();
        assert!(matches!(outcome, Outcome::Text(ref t) if t.partial_loss.is_empty()));
    }

    #[test]
    fn test_request_missing_parts() {
        let request = Request {
            mode: None,
            scheme: Some("Base64".into()),
            input: Some("x".into()),
        };
        assert_eq!(request.dispatch().unwrap_err().kind(), ErrorKind::MissingParameter);

        let request = Request {
            mode: Some(Mode::Encode),
            scheme: None,
            input: Some("x".into()),
        };
        assert_eq!(request.dispatch().unwrap_err().kind(), ErrorKind::UnknownCodec);

        let request = Request {
            mode: Some(Mode::Encode),
            scheme: Some("Base64".into()),
            input: None,
        };
        assert!(matches!(
            request.dispatch().unwrap_err(),
            TranscodeError::MissingParameter { name: "input" }
        ));
    }

    #[test]
    fn test_request_unknown_scheme_before_missing_input() {
        let request = Request {
            mode: Some(Mode::Decode),
            scheme: Some("Rot13".into()),
            input: None,
        };
        assert_eq!(request.dispatch().unwrap_err().kind(), ErrorKind::UnknownCodec);
    }

    #[test]
    fn test_concurrent_dispatch() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    s.spawn(move || {
                        for j in 0..200 {
                            let text = format!("thread {} iteration {}", i, j);
                            let encoded = transcode(Mode::Encode, "Base32", &text).unwrap();
                            let decoded = transcode(Mode::Decode, "Base32", encoded.text().unwrap()).unwrap();
                            assert_eq!(decoded.text(), Some(text.as_str()));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    }
}
