use num_bigint::BigUint;
use num_traits::Zero;

use super::{util, Codec};
use crate::error::{LengthConstraint, TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

/// The UTF-8 bytes read as one big-endian unsigned integer, in decimal.
///
/// Leading NUL characters have no weight in the integer and do not survive
/// a round trip.
pub struct Dec;

impl Codec for Dec {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Dec",
            aliases: &[],
            alphabet: "0123456789",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "UTF-8 bytes as an arbitrary-precision decimal integer",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Ok(String::new());
        }
        Ok(BigUint::from_bytes_be(input.as_bytes()).to_str_radix(10))
    }

    fn decode(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Ok(String::new());
        }
        util::validate_alphabet(input, "0123456789")?;

        let value = BigUint::parse_bytes(input.as_bytes(), 10)
            .ok_or_else(|| TranscodeError::invalid_input(format!("not a decimal integer: {}", input)))?;

        let bytes = if value.is_zero() {
            vec![0]
        } else {
            value.to_bytes_be()
        };
        Ok(String::from_utf8(bytes)?)
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        let mut leading: Vec<char> = input.chars().take_while(|&c| c == '\0').collect();
        // an all-NUL input still decodes back to a single NUL
        if leading.len() == input.chars().count() {
            leading.pop();
        }
        leading
    }
}

/// Each UTF-8 byte as eight binary digits.
pub struct Bin;

impl Codec for Bin {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Bin",
            aliases: &[],
            alphabet: "01",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "UTF-8 bytes as concatenated 8-bit binary groups",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input.bytes().map(|b| format!("{:08b}", b)).collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::validate_alphabet(input, "01")?;

        if input.len() % 8 != 0 {
            return Err(TranscodeError::invalid_length(LengthConstraint::MultipleOf(8), input.len()));
        }

        let bytes = input
            .as_bytes()
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit - b'0')))
            .collect();
        Ok(String::from_utf8(bytes)?)
    }
}
