use super::{util, Codec};
use crate::error::{TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

pub struct CodePoint;

impl Codec for CodePoint {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "CodePoint",
            aliases: &["codepoints"],
            alphabet: "0123456789,",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodePoint,
            lossy: false,
            description: "Comma-separated decimal code points",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        let codepoints: Vec<String> = input.chars().map(|c| u32::from(c).to_string()).collect();
        Ok(codepoints.join(","))
    }

    fn decode(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Ok(String::new());
        }

        input
            .split(',')
            .map(|part| {
                let token = part.trim();
                if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(TranscodeError::invalid_input(format!("invalid code point: {:?}", part)));
                }
                let value = token
                    .parse::<u32>()
                    .map_err(|_| TranscodeError::invalid_input(format!("code point out of range: {}", token)))?;
                util::scalar(value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoint_encode() {
        assert_eq!(CodePoint.encode("A123456").unwrap(), "65,49,50,51,52,53,54");
        assert_eq!(CodePoint.encode("😀").unwrap(), "128512");
        assert_eq!(CodePoint.encode("").unwrap(), "");
    }

    #[test]
    fn test_codepoint_decode() {
        assert_eq!(CodePoint.decode("72,105").unwrap(), "Hi");
        assert_eq!(CodePoint.decode(" 72, 105 ").unwrap(), "Hi");
        assert_eq!(CodePoint.decode("").unwrap(), "");
    }

    #[test]
    fn test_codepoint_roundtrip() {
        let text = "a,b 中 🎉";
        assert_eq!(CodePoint.decode(&CodePoint.encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_codepoint_invalid() {
        assert!(CodePoint.decode("72,,105").is_err());
        assert!(CodePoint.decode("0x41").is_err());
        assert!(CodePoint.decode("+65").is_err());
        assert!(CodePoint.decode("55296").is_err());
        assert!(CodePoint.decode("1114112").is_err());
        assert!(CodePoint.decode("99999999999").is_err());
    }
}
