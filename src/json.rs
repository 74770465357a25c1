//! The JSON text format of the echoed line.
//!
//! Items are separated by `", "`, keys from values by `": "`, and every
//! character outside printable ASCII is written as a `\uXXXX` escape:
//!
//! ```
//! use echo_fixture::json::to_line;
//! use std::collections::BTreeMap;
//!
//! let mut value = BTreeMap::new();
//! value.insert("args", vec!["a", "ü"]);
//! assert_eq!(to_line(&value).unwrap(), "{\"args\": [\"a\", \"\\u00fc\"]}\n");
//! ```

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // serde_json escapes quotes, backslashes and control characters below
    // 0x20 itself; fragments contain everything else.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, character) in fragment.char_indices() {
            if is_printable_ascii(character) {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0; 2];
            for unit in character.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + character.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

fn is_printable_ascii(character: char) -> bool {
    (' '..='~').contains(&character)
}

/// Serializes `value` into `writer` as a single line, including the
/// trailing newline. The line reaches `writer` in a single `write_all`.
pub fn write_line<W, T>(writer: &mut W, value: &T) -> io::Result<()>
where
    W: ?Sized + Write,
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    value.serialize(&mut Serializer::with_formatter(
        &mut buffer,
        SpacedAsciiFormatter,
    ))?;
    buffer.push(b'\n');
    writer.write_all(&buffer)
}

pub fn to_line<T>(value: &T) -> io::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    write_line(&mut buffer, value)?;
    // Everything outside printable ASCII is escaped.
    Ok(buffer.into_iter().map(char::from).collect())
}
