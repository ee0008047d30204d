use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::codec::Registry;
use crate::error::TranscodeError;

pub struct Context {
    pub registry: &'static Registry,
}

impl Context {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Registry::global())
    }
}

/// Which direction a request runs a codec in. `Jump` decodes and then
/// treats the result as a redirect target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
    Jump,
}

impl Mode {
    /// Short form used on the query string and in response headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Encode => "enc",
            Mode::Decode => "dec",
            Mode::Jump => "jmp",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TranscodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enc" | "encode" => Ok(Mode::Encode),
            "dec" | "decode" => Ok(Mode::Decode),
            "jmp" | "jump" => Ok(Mode::Jump),
            _ => Err(TranscodeError::invalid_input(format!("unknown mode: {}", s))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => InputSource::Literal(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaddingRule {
    None,
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// The view of the text a codec works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextUnit {
    /// Unicode scalar values.
    CodePoint,
    /// The first UTF-16 code unit of each character; characters above the
    /// BMP are not addressable.
    CodeUnit,
    /// The UTF-8 encoding of the whole string.
    Utf8Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodecMeta {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub alphabet: &'static str,
    pub padding: PaddingRule,
    pub case_sensitivity: CaseSensitivity,
    pub unit: TextUnit,
    pub lossy: bool,
    pub description: &'static str,
}
