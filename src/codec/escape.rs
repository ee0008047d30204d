//! Backslash escapes: `\uXXXX`, `\UXXXXXXXX`, `\xHH` and `\ooo`.
//!
//! Decoding replaces well-formed tokens and leaves all other text as it is.

use super::util::{self, Piece, TokenRule, Width};
use super::Codec;
use crate::error::{TranscodeError, Result};
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const SHORT: TokenRule = TokenRule {
    prefix: "\\u",
    radix: 16,
    width: Width::Exact(4),
    suffix: "",
};

const LONG: TokenRule = TokenRule {
    prefix: "\\U",
    radix: 16,
    width: Width::Exact(8),
    suffix: "",
};

const HEX: TokenRule = TokenRule {
    prefix: "\\x",
    radix: 16,
    width: Width::Exact(2),
    suffix: "",
};

const OCTAL: TokenRule = TokenRule {
    prefix: "\\",
    radix: 8,
    width: Width::Exact(3),
    suffix: "",
};

fn encode_short(input: &str) -> String {
    input
        .chars()
        .map(|c| format!("\\u{:04x}", util::first_code_unit(c)))
        .collect()
}

/// Replaces `\uXXXX` tokens. A high surrogate immediately followed by a low
/// surrogate token combines into one character; an unpaired surrogate is an
/// error.
fn decode_short(input: &str) -> Result<String> {
    let pieces = util::scan_tokens(input, &SHORT)?;
    let mut out = String::with_capacity(input.len());
    let mut iter = pieces.into_iter().peekable();

    while let Some(piece) = iter.next() {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Token(high @ 0xd800..=0xdbff) => match iter.peek() {
                Some(&Piece::Token(low @ 0xdc00..=0xdfff)) => {
                    iter.next();
                    let value = 0x10000 + ((high - 0xd800) << 10) + (low - 0xdc00);
                    out.push(util::scalar(value)?);
                }
                _ => {
                    return Err(TranscodeError::invalid_input(format!(
                        "unpaired surrogate escape \\u{:04x}",
                        high
                    )))
                }
            },
            Piece::Token(value) => out.push(util::scalar(value)?),
        }
    }
    Ok(out)
}

pub struct UnicodeEscapeShort;

impl Codec for UnicodeEscapeShort {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "UnicodeEscapeShort",
            aliases: &[],
            alphabet: "\\u0123456789abcdefABCDEF",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodeUnit,
            lossy: true,
            description: "\\uXXXX per character; characters above U+FFFF keep only their high surrogate",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(encode_short(input))
    }

    fn decode(&self, input: &str) -> Result<String> {
        decode_short(input)
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        input.chars().filter(|&c| u32::from(c) > 0xffff).collect()
    }
}

/// Same transform as [`UnicodeEscapeShort`] under its older name.
pub struct Unicode;

impl Codec for Unicode {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "Unicode",
            description: "Alias transform of UnicodeEscapeShort (\\uXXXX per character)",
            ..UnicodeEscapeShort.meta()
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(encode_short(input))
    }

    fn decode(&self, input: &str) -> Result<String> {
        decode_short(input)
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        UnicodeEscapeShort.encode_losses(input)
    }
}

pub struct UnicodeEscapeLong;

impl Codec for UnicodeEscapeLong {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "UnicodeEscapeLong",
            aliases: &[],
            alphabet: "\\U0123456789abcdefABCDEF",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodePoint,
            lossy: false,
            description: "\\UXXXXXXXX of the full code point; covers every plane",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input.chars().map(|c| format!("\\U{:08x}", u32::from(c))).collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::replace_tokens(input, &LONG)
    }
}

pub struct HexEscape;

impl Codec for HexEscape {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "HexEscape",
            aliases: &[],
            alphabet: "\\x0123456789abcdefABCDEF",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodeUnit,
            lossy: true,
            description: "\\xHH per character; only U+0000-U+00FF round-trip",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input
            .chars()
            .map(|c| format!("\\x{:02x}", util::first_code_unit(c)))
            .collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::replace_tokens(input, &HEX)
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        util::code_units_above(input, 0xff)
    }
}

pub struct OctalEscape;

impl Codec for OctalEscape {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "OctalEscape",
            aliases: &[],
            alphabet: "\\01234567",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Sensitive,
            unit: TextUnit::CodeUnit,
            lossy: true,
            description: "\\ooo per character; only U+0000-U+01FF round-trip",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input
            .chars()
            .map(|c| format!("\\{:03o}", util::first_code_unit(c)))
            .collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::replace_tokens(input, &OCTAL)
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        util::code_units_above(input, 0o777)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_encode() {
        assert_eq!(
            UnicodeEscapeShort.encode("A123456").unwrap(),
            "\\u0041\\u0031\\u0032\\u0033\\u0034\\u0035\\u0036"
        );
        assert_eq!(UnicodeEscapeShort.encode("中").unwrap(), "\\u4e2d");
    }

    #[test]
    fn test_short_decode_keeps_surrounding_text() {
        assert_eq!(UnicodeEscapeShort.decode("x\\u0041y\\u00").unwrap(), "xAy\\u00");
        assert_eq!(UnicodeEscapeShort.decode("\\u4E2D").unwrap(), "中");
    }

    #[test]
    fn test_short_astral_keeps_high_surrogate() {
        assert_eq!(UnicodeEscapeShort.encode("😀").unwrap(), "\\ud83d");
        assert_eq!(UnicodeEscapeShort.encode_losses("a😀"), vec!['😀']);
        assert!(UnicodeEscapeShort.decode("\\ud83d").is_err());
    }

    #[test]
    fn test_short_decodes_surrogate_pair() {
        assert_eq!(UnicodeEscapeShort.decode("\\ud83d\\ude00").unwrap(), "😀");
        assert!(UnicodeEscapeShort.decode("\\ude00").is_err());
    }

    #[test]
    fn test_unicode_matches_short() {
        let text = "héllo 中文";
        assert_eq!(Unicode.encode(text).unwrap(), UnicodeEscapeShort.encode(text).unwrap());
        assert_eq!(Unicode.decode(&Unicode.encode(text).unwrap()).unwrap(), text);
        assert_eq!(Unicode.meta().name, "Unicode");
    }

    #[test]
    fn test_long_all_planes() {
        assert_eq!(UnicodeEscapeLong.encode("A").unwrap(), "\\U00000041");
        assert_eq!(UnicodeEscapeLong.encode("😀").unwrap(), "\\U0001f600");
        let text = "a中😀𝄞";
        assert_eq!(UnicodeEscapeLong.decode(&UnicodeEscapeLong.encode(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn test_long_rejects_non_scalar() {
        assert!(UnicodeEscapeLong.decode("\\U00110000").is_err());
        assert!(UnicodeEscapeLong.decode("\\U0000d800").is_err());
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(HexEscape.encode("A123456").unwrap(), "\\x41\\x31\\x32\\x33\\x34\\x35\\x36");
        assert_eq!(HexEscape.decode("\\x41\\x31 ok").unwrap(), "A1 ok");
        assert_eq!(HexEscape.decode(&HexEscape.encode("ÿé").unwrap()).unwrap(), "ÿé");
    }

    #[test]
    fn test_hex_escape_wide_code_unit() {
        assert_eq!(HexEscape.encode("中").unwrap(), "\\x4e2d");
        assert_eq!(HexEscape.decode("\\x4e2d").unwrap(), "N2d");
        assert_eq!(HexEscape.encode_losses("中a"), vec!['中']);
    }

    #[test]
    fn test_octal_escape() {
        assert_eq!(OctalEscape.encode("A123456").unwrap(), "\\101\\061\\062\\063\\064\\065\\066");
        assert_eq!(OctalEscape.decode("\\101\\061").unwrap(), "A1");
        assert_eq!(OctalEscape.decode("\\18").unwrap(), "\\18");
    }

    #[test]
    fn test_octal_escape_range() {
        assert_eq!(OctalEscape.decode(&OctalEscape.encode("ſ").unwrap()).unwrap(), "ſ");
        assert!(OctalEscape.encode_losses("ſ").is_empty());
        assert_eq!(OctalEscape.encode_losses("Ā中"), vec!['中']);
    }
}
