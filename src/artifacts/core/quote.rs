//! C-style quoting of paths, as git prints them with `core.quotePath` on
//!
//! A path containing a control byte, `"`, `\` or any byte outside ASCII is
//! wrapped in double quotes. Inside the quotes, the common control characters
//! use their backslash letter and every other such byte becomes a three-digit
//! octal escape (`é` is `\303\251`). Other paths are printed as they are.

use std::borrow::Cow;
use std::fmt::Write;

fn needs_quoting(byte: u8) -> bool {
    byte < 0x20 || byte == b'"' || byte == b'\\' || byte >= 0x7f
}

pub fn quote_path(path: &str) -> Cow<'_, str> {
    if !path.bytes().any(needs_quoting) {
        return Cow::Borrowed(path);
    }

    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');
    for byte in path.bytes() {
        match byte {
            0x07 => quoted.push_str("\\a"),
            0x08 => quoted.push_str("\\b"),
            b'\t' => quoted.push_str("\\t"),
            b'\n' => quoted.push_str("\\n"),
            0x0b => quoted.push_str("\\v"),
            0x0c => quoted.push_str("\\f"),
            b'\r' => quoted.push_str("\\r"),
            b'"' => quoted.push_str("\\\""),
            b'\\' => quoted.push_str("\\\\"),
            byte if needs_quoting(byte) => {
                let _ = write!(quoted, "\\{byte:03o}");
            }
            byte => quoted.push(byte as char),
        }
    }
    quoted.push('"');

    Cow::Owned(quoted)
}
