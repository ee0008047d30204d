use super::util::{self, TokenRule, Width};
use super::Codec;
use crate::error::Result;
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const DECIMAL: TokenRule = TokenRule {
    prefix: "&#",
    radix: 10,
    width: Width::Variable,
    suffix: ";",
};

const HEXADECIMAL: TokenRule = TokenRule {
    prefix: "&#x",
    radix: 16,
    width: Width::Variable,
    suffix: ";",
};

pub struct DecEntity;

impl Codec for DecEntity {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "DecEntity",
            aliases: &[],
            alphabet: "&#;0123456789",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Sensitive,
            unit: TextUnit::CodePoint,
            lossy: false,
            description: "HTML decimal character references (&#65;)",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input.chars().map(|c| format!("&#{};", u32::from(c))).collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::replace_tokens(input, &DECIMAL)
    }
}

pub struct HexEntity;

impl Codec for HexEntity {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "HexEntity",
            aliases: &[],
            alphabet: "&#x;0123456789abcdefABCDEF",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodePoint,
            lossy: false,
            description: "HTML hexadecimal character references (&#x41;)",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        Ok(input.chars().map(|c| format!("&#x{:x};", u32::from(c))).collect())
    }

    fn decode(&self, input: &str) -> Result<String> {
        util::replace_tokens(input, &HEXADECIMAL)
    }
}
