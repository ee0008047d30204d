use crate::error::{TranscodeError, Result};

/// First UTF-16 code unit of `c`. For characters above the BMP this is the
/// high surrogate.
pub fn first_code_unit(c: char) -> u16 {
    let mut buf = [0u16; 2];
    c.encode_utf16(&mut buf)[0]
}

/// Characters whose first code unit exceeds `max`.
pub fn code_units_above(input: &str, max: u16) -> Vec<char> {
    input.chars().filter(|&c| first_code_unit(c) > max).collect()
}

pub fn validate_alphabet(input: &str, alphabet: &str) -> Result<()> {
    for (pos, ch) in input.chars().enumerate() {
        if !alphabet.contains(ch) {
            return Err(TranscodeError::invalid_char(ch, pos));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Exact(usize),
    Variable,
}

/// Shape of an inline numeric token such as `\x41` or `&#65;`.
#[derive(Debug, Clone, Copy)]
pub struct TokenRule {
    pub prefix: &'static str,
    pub radix: u32,
    pub width: Width,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Token(u32),
}

/// Splits `input` into literal text and recognised tokens. Anything that
/// looks like the start of a token but is not well formed stays literal.
pub fn scan_tokens<'a>(input: &'a str, rule: &TokenRule) -> Result<Vec<Piece<'a>>> {
    let mut pieces = Vec::new();
    let mut pos = 0;
    let mut text_start = 0;

    while let Some(offset) = input[pos..].find(rule.prefix) {
        let start = pos + offset;
        let digits_start = start + rule.prefix.len();
        let available = input[digits_start..]
            .chars()
            .take_while(|c| c.is_digit(rule.radix))
            .count();

        let digits_len = match rule.width {
            Width::Exact(n) if available >= n => Some(n),
            Width::Variable if available > 0 => Some(available),
            _ => None,
        };

        let matched = digits_len.filter(|&len| input[digits_start + len..].starts_with(rule.suffix));

        match matched {
            Some(len) => {
                if text_start < start {
                    pieces.push(Piece::Text(&input[text_start..start]));
                }
                let digits = &input[digits_start..digits_start + len];
                let value = u32::from_str_radix(digits, rule.radix).map_err(|_| {
                    TranscodeError::invalid_input(format!("numeric token out of range: {}{}", rule.prefix, digits))
                })?;
                pieces.push(Piece::Token(value));
                pos = digits_start + len + rule.suffix.len();
                text_start = pos;
            }
            // prefixes are ASCII, so one byte forward is a char boundary
            None => pos = start + 1,
        }
    }

    if text_start < input.len() {
        pieces.push(Piece::Text(&input[text_start..]));
    }
    Ok(pieces)
}

/// Replaces every token with the character at its value.
pub fn replace_tokens(input: &str, rule: &TokenRule) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    for piece in scan_tokens(input, rule)? {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Token(value) => out.push(scalar(value)?),
        }
    }
    Ok(out)
}

pub fn scalar(value: u32) -> Result<char> {
    char::from_u32(value).ok_or_else(|| TranscodeError::invalid_input(format!("not a Unicode scalar value: {:#x}", value)))
}
