use std::collections::HashMap;
use std::sync::OnceLock;

use super::Codec;
use crate::error::Result;
use crate::types::{CaseSensitivity, CodecMeta, PaddingRule, TextUnit};

const MORSE_TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
];

static FORWARD: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
static REVERSE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();

fn morse_table() -> &'static HashMap<char, &'static str> {
    FORWARD.get_or_init(|| MORSE_TABLE.iter().copied().collect())
}

fn reverse_morse_table() -> &'static HashMap<&'static str, char> {
    REVERSE.get_or_init(|| MORSE_TABLE.iter().map(|&(k, v)| (v, k)).collect())
}

/// International Morse code for letters, digits and the word gap.
///
/// Lossy in both directions: characters without a code are dropped on
/// encode, unknown sequences are dropped on decode, and case is not kept.
pub struct MorseCode;

impl Codec for MorseCode {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            name: "MorseCode",
            aliases: &["morse"],
            alphabet: ".-/ ",
            padding: PaddingRule::None,
            case_sensitivity: CaseSensitivity::Insensitive,
            unit: TextUnit::CodePoint,
            lossy: true,
            description: "International Morse code (A-Z, 0-9, space as /), space-separated",
        }
    }

    fn encode(&self, input: &str) -> Result<String> {
        let table = morse_table();
        let codes: Vec<&str> = input
            .chars()
            .filter_map(|c| table.get(&c.to_ascii_uppercase()).copied())
            .collect();
        Ok(codes.join(" "))
    }

    fn decode(&self, input: &str) -> Result<String> {
        let table = reverse_morse_table();
        let text: String = input
            .split_whitespace()
            .filter_map(|code| table.get(code).copied())
            .collect();
        Ok(text.to_lowercase())
    }

    fn encode_losses(&self, input: &str) -> Vec<char> {
        let table = morse_table();
        input
            .chars()
            .filter(|c| !table.contains_key(&c.to_ascii_uppercase()))
            .collect()
    }

    fn decode_losses(&self, input: &str) -> Vec<String> {
        let table = reverse_morse_table();
        input
            .split_whitespace()
            .filter(|code| !table.contains_key(*code))
            .map(str::to_string)
            .collect()
    }
}
