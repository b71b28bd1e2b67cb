//! Logical line reading with mixed line-ending support
//!
//! `BufRead::read_line` only recognizes LF. Golden files get checked in
//! from different platforms and tools, so they end lines with LF, CRLF,
//! or occasionally bare CR, and a text comparison must not fail on
//! terminator style alone. The boundary scan here is an explicit state
//! machine over all three conventions instead.

use std::io::{self, BufRead};

/// Read one logical line from `reader`, with the terminator stripped.
///
/// LF, CR, and CRLF each delimit exactly one line: a lone CR is a
/// complete boundary, and CR immediately followed by LF is one boundary,
/// not two. This holds even when the CRLF pair is split across buffer
/// refills.
///
/// Content after the last terminator is returned as a final line, so
/// `"a\nb"` yields `"a"`, then `"b"`, then `None`. An exhausted reader
/// yields `Ok(None)`. Bytes are decoded as UTF-8, replacing invalid
/// sequences.
///
/// # Example
/// ```
/// use goldcheck::line::read_logical_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("one\r\ntwo");
/// assert_eq!(read_logical_line(&mut input).unwrap(), Some("one".to_string()));
/// assert_eq!(read_logical_line(&mut input).unwrap(), Some("two".to_string()));
/// assert_eq!(read_logical_line(&mut input).unwrap(), None);
/// ```
pub fn read_logical_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line: Vec<u8> = Vec::new();
    let mut saw_input = false;

    loop {
        // Scan the buffered bytes for the next boundary, remembering how
        // much to consume; the borrow of `reader` must end before consume.
        let (terminator, used) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            saw_input = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    line.extend_from_slice(&available[..pos]);
                    (Some(available[pos]), pos + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };
        reader.consume(used);

        match terminator {
            Some(b'\r') => {
                // CRLF is a single boundary: swallow an immediately
                // following LF, which may not be buffered yet.
                loop {
                    let next_is_lf = match reader.fill_buf() {
                        Ok(buf) => buf.first() == Some(&b'\n'),
                        Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => return Err(e),
                    };
                    if next_is_lf {
                        reader.consume(1);
                    }
                    break;
                }
                return Ok(Some(into_line(line)));
            }
            Some(_) => return Ok(Some(into_line(line))),
            None => {}
        }
    }

    // End of input: pending content becomes the final, unterminated line.
    if saw_input {
        Ok(Some(into_line(line)))
    } else {
        Ok(None)
    }
}

fn into_line(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}
