//! Line-oriented input and brace-delimited output.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::Context;

use crate::generator::Generator;

/// Read up to (and consume) the next `delimiter` byte.
///
/// Returns the text without the delimiter, or `None` once the reader has
/// nothing left. Repeated calls at end of input keep returning `None`.
pub fn getline<R: BufRead>(reader: &mut R, delimiter: u8) -> io::Result<Option<String>> {
    let mut buffer = Vec::new();
    if reader.read_until(delimiter, &mut buffer)? == 0 {
        return Ok(None);
    }
    if buffer.last() == Some(&delimiter) {
        buffer.pop();
    }
    String::from_utf8(buffer)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Lazily read `\n`-separated lines from `reader`.
///
/// A line is only read when the generator is advanced, so pairing this with
/// `take` reads no more of the input than needed. Read errors end the
/// sequence with a producer error that names the failing line.
pub fn lines<'a, R: BufRead + 'a>(mut reader: R) -> Generator<'a, String> {
    let mut line_no = 0usize;
    Generator::try_from_fn(move || {
        line_no += 1;
        getline(&mut reader, b'\n').with_context(|| format!("failed to read line {line_no}"))
    })
}

/// Write `items` as `{ a, b, c }`. An empty input renders as `{  }`.
pub fn print<W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    out.write_all(b"{ ")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            out.write_all(b", ")?;
        }
        write!(out, "{item}")?;
    }
    out.write_all(b" }")
}
