//! JSON output of an entry list
//!
//! The list is written as one line: a JSON array of strings with `", "`
//! between elements, followed by a newline.
//!
//! ```text
//! ["pluginA", "pluginB"]
//! []
//! ```
//!
//! Strings carry the raw UTF-8 entry names; only the escapes JSON requires
//! (quotes, backslashes, control characters) are applied.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::ListingError;
use crate::listing::EntryList;

/// Compact formatter with a space after each array separator
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Encode the entries as a single-line JSON array (no trailing newline)
pub fn encode_entries(entries: &EntryList) -> Result<String, ListingError> {
    let mut buf = Vec::with_capacity(entries.iter().map(|n| n.len() + 4).sum::<usize>() + 2);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    entries.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| {
        use serde::ser::Error as _;
        ListingError::Serialization(serde_json::Error::custom(e))
    })
}

/// Write the encoded entries plus a newline to `writer`
///
/// The whole line is encoded before anything is written, so an encoding
/// failure leaves the writer untouched.
pub fn write_entries<W: Write>(mut writer: W, entries: &EntryList) -> Result<(), ListingError> {
    let mut line = encode_entries(entries)?;
    line.push('\n');

    writer
        .write_all(line.as_bytes())
        .map_err(ListingError::Write)?;
    writer.flush().map_err(ListingError::Write)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
