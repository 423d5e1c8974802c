//! Tag-stripping text renderer.
//!
//! Scans the body one character at a time and streams everything outside
//! `<...>` to the writer. Entities are not decoded, and a `>` inside a quoted
//! attribute value ends the tag early.

use std::io::{self, BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagState {
    Outside,
    InsideTag,
}

/// Writes the visible text of `body` to `out`.
pub fn render_to<W: Write>(body: &str, out: &mut W) -> io::Result<()> {
    let mut state = TagState::Outside;
    let mut utf8 = [0u8; 4];
    for c in body.chars() {
        state = match (state, c) {
            (_, '<') => TagState::InsideTag,
            (TagState::InsideTag, '>') => TagState::Outside,
            (TagState::InsideTag, _) => TagState::InsideTag,
            (TagState::Outside, _) => {
                out.write_all(c.encode_utf8(&mut utf8).as_bytes())?;
                TagState::Outside
            }
        };
    }
    out.flush()
}

/// Renders `body` to stdout. Output failures are logged, not returned.
pub fn render(body: &str) {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = render_to(body, &mut out) {
        tracing::warn!("writing rendered text failed: {}", e);
    }
}
