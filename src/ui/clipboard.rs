use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::{self, Write};

/// Ask the terminal to put `text` on the system clipboard (OSC 52).
pub fn copy_to_clipboard(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
    out.flush()
}
