use std::io::{self, Write};

use is_terminal::IsTerminal;
use serde::Serialize;

use textcodec::error::Result;

/// Writes `text` to stdout, adding a newline only for an interactive terminal
/// so piped output stays byte-exact.
pub fn write_text(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    if interactive {
        handle.write_all(b"\n")?;
    }
    handle.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut handle = io::stdout().lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(io::Error::from)?;
    handle.write_all(b"\n")?;
    Ok(())
}
