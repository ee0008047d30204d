use super::Codec;
use crate::error::{TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

/// Characters `encodeURIComponent` leaves untouched.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

pub struct Url;

impl Codec for Url {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "URL",
            aliases: &["urlencoding", "percent"],
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.!~*'()%",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::Utf8Bytes,
            lossy: false,
            description: "URI component percent-encoding of the UTF-8 bytes",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len());
        for byte in input.bytes() {
            if is_unreserved(byte) {
                result.push(byte as char);
            } else {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
        Ok(result)
    }

    fn decode(&self, input: &str) -> Result<String> {
        let mut result = Vec::with_capacity(input.len());
        let mut chars = input.chars();

        while let Some(c) = chars.next() {
            if c == '%' {
                let hex1 = chars.next();
                let hex2 = chars.next();
                let byte = match (hex1.and_then(hex_value), hex2.and_then(hex_value)) {
                    (Some(hi), Some(lo)) => (hi << 4) | lo,
                    _ => {
                        let seq: String = ['%'].into_iter().chain(hex1).chain(hex2).collect();
                        return Err(TranscodeError::invalid_input(format!("malformed percent sequence: {}", seq)));
                    }
                };
                result.push(byte);
            } else {
                let mut buf = [0u8; 4];
                result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }

        Ok(String::from_utf8(result)?)
    }
}
