use data_encoding::{Encoding, Specification};
use std::sync::OnceLock;

use super::util;
use super::Codec;
use crate::error::{TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const RFC4648_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

static BASE32_PAD: OnceLock<Encoding> = OnceLock::new();
static BASE32_NOPAD: OnceLock<Encoding> = OnceLock::new();

fn make_encoding(padding: bool) -> Encoding {
    let mut spec = Specification::new();
    spec.symbols.push_str(RFC4648_UPPER);
    if padding {
        spec.padding = Some('=');
    }
    // trailing bits are dropped on decode rather than rejected
    spec.check_trailing_bits = false;
    spec.encoding().expect("static base32 specification is valid")
}

fn padded() -> &'static Encoding {
    BASE32_PAD.get_or_init(|| make_encoding(true))
}

fn unpadded() -> &'static Encoding {
    BASE32_NOPAD.get_or_init(|| make_encoding(false))
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Base32",
            aliases: &[],
            alphabet: RFC4648_UPPER,
            padding: PaddingRule::Optional,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "RFC 4648 Base32 of the UTF-8 bytes; decoding accepts lower case and missing padding",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(padded().encode(input.as_bytes()))
    }

    fn decode(&self, input: &str) -> Result<String> {
        let normalized = input.trim_end_matches('=').to_ascii_uppercase();
        util::validate_alphabet(&normalized, RFC4648_UPPER)?;

        // 1, 3 and 6 leftover symbols cannot come out of any byte sequence
        if matches!(normalized.len() % 8, 1 | 3 | 6) {
            return Err(TranscodeError::invalid_length(
                crate::error::LengthConstraint::MultipleOf(8),
                normalized.len(),
            ));
        }

        let bytes = unpadded()
            .decode(normalized.as_bytes())
            .map_err(|e| TranscodeError::invalid_input(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
