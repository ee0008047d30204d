use std::fs;
use std::io::{self, Read};

use textcodec::error::Result;
use textcodec::types::InputSource;

/// Reads the whole input as text. Stdin and file input lose one trailing
/// line ending so that `echo foo | textcodec enc ...` encodes `foo`.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(strip_line_ending(buf))
        }
        InputSource::File(path) => Ok(strip_line_ending(fs::read_to_string(path)?)),
        InputSource::Literal(text) => Ok(text.clone()),
    }
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
