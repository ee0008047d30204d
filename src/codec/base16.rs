use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use super::{util, Codec};
use crate::error::{LengthConstraint, TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const HEX_ALPHABET: &str = "0123456789abcdefABCDEF";

fn check_hex_pairs(input: &str) -> Result<()> {
    util::validate_alphabet(input, HEX_ALPHABET)?;
    if input.len() % 2 != 0 {
        return Err(TranscodeError::invalid_length(LengthConstraint::MultipleOf(2), input.len()));
    }
    Ok(())
}

/// Hex of the UTF-8 bytes. Correct for every Unicode character.
pub struct Hex;

impl Codec for Hex {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Hex",
            aliases: &[],
            alphabet: HEX_ALPHABET,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "Lowercase hex of the UTF-8 bytes",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(HEXLOWER.encode(input.as_bytes()))
    }

    fn decode(&self, input: &str) -> Result<String> {
        check_hex_pairs(input)?;
        let bytes = HEXLOWER_PERMISSIVE
            .decode(input.as_bytes())
            .map_err(|e| TranscodeError::invalid_input(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Hex of each character's first UTF-16 code unit, two digits minimum.
///
/// Unlike [`Hex`] this only round-trips for U+0000..=U+00FF: wider code
/// units produce more than two digits, and decoding reads fixed pairs.
pub struct Base16;

impl Codec for Base16 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Base16",
            aliases: &[],
            alphabet: HEX_ALPHABET,
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodeUnit,
            lossy: true,
            description: "Per-character hex of the UTF-16 code unit; only U+0000-U+00FF round-trip",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input
            .chars()
            .map(|c| format!("{:02x}", util::first_code_unit(c)))
            .collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        check_hex_pairs(input)?;
        input
            .as_bytes()
            .chunks(2)
            .map(|pair| {
                // both bytes were checked to be ASCII hex digits
                let digits = std::str::from_utf8(pair).map_err(|_| TranscodeError::invalid_input("invalid UTF-8"))?;
                let value = u8::from_str_radix(digits, 16)
                    .map_err(|_| TranscodeError::invalid_input(format!("invalid hex pair: {}", digits)))?;
                Ok(char::from(value))
            })
            .collect()
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        util::code_units_above(input, 0xff)
    }
}
