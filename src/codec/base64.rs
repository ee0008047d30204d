use base64::prelude::*;
use base64::Engine;

use super::util;
use super::Codec;
use crate::error::{TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const STANDARD_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn validate_padding(input: &str) -> Result<()> {
    let body = input.trim_end_matches('=');
    let pad_count = input.len() - body.len();

    if pad_count > 2 {
        return Err(TranscodeError::invalid_padding("too many padding characters"));
    }
    if pad_count > 0 && input.len() % 4 != 0 {
        return Err(TranscodeError::invalid_padding("padded input must be a multiple of 4"));
    }
    if body.contains('=') {
        return Err(TranscodeError::invalid_padding("padding inside data"));
    }
    Ok(())
}

pub struct Base64;

impl Codec for Base64 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Base64",
            aliases: &[],
            alphabet: STANDARD_ALPHABET,
            padding: PaddingRule::Required,
            case_sensitivity: CaseSensitivity::Sensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "RFC 4648 Base64 of the UTF-8 bytes, with = padding",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(BASE64_STANDARD.encode(input.as_bytes()))
    }

    fn decode(&self, input: &str) -> Result<String> {
        validate_padding(input)?;
        util::validate_alphabet(input.trim_end_matches('='), STANDARD_ALPHABET)?;

        let bytes = BASE64_STANDARD
            .decode(input)
            .map_err(|e| TranscodeError::invalid_input(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
