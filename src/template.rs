//! Output template: `%h`, `%w`, `%p`, `%a` placeholders plus C-style escapes.

use crate::format::{Field, FormattedKey, OutputRequest};

const PLACEHOLDERS: [(&str, Field); 4] = [
    ("%h", Field::Hex),
    ("%w", Field::Wif),
    ("%p", Field::Pubkey),
    ("%a", Field::Address),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    request: OutputRequest,
}

impl Template {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let request = PLACEHOLDERS
            .iter()
            .filter(|(tag, _)| raw.contains(tag))
            .map(|(_, field)| *field)
            .collect();
        Self { raw, request }
    }

    /// Fields referenced by the template.
    pub fn request(&self) -> OutputRequest {
        self.request
    }

    /// Substitute every placeholder, then decode escapes. The result may hold
    /// arbitrary bytes (`\xff`), so it is not a `String`.
    pub fn render(&self, values: &FormattedKey) -> Vec<u8> {
        let mut line = self.raw.clone();
        for (tag, field) in PLACEHOLDERS {
            if let Some(v) = values.get(field) {
                line = line.replace(tag, v);
            }
        }
        unescape(&line)
    }
}

/// Decode backslash escapes: `\\ \' \" \a \b \f \n \r \t \v`, octal `\ooo`
/// and `\xHH`. An escaped newline is dropped; unknown escapes stay as written.
pub fn unescape(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let Some(&c) = bytes.get(i) else {
            out.push(b'\\');
            break;
        };
        i += 1;
        match c {
            b'\\' | b'\'' | b'"' => out.push(c),
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0b),
            b'\n' => {}
            b'0'..=b'7' => {
                let mut value = u32::from(c - b'0');
                for _ in 0..2 {
                    match bytes.get(i) {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            i += 1;
                        }
                        _ => break,
                    }
                }
                out.push((value & 0xff) as u8);
            }
            b'x' => match bytes.get(i..i + 2).and_then(parse_hex_pair) {
                Some(v) => {
                    out.push(v);
                    i += 2;
                }
                None => out.extend_from_slice(b"\\x"),
            },
            other => {
                out.push(b'\\');
                out.push(other);
            }
        }
    }
    out
}

fn parse_hex_pair(pair: &[u8]) -> Option<u8> {
    if !pair.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let s = std::str::from_utf8(pair).ok()?;
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use crate::derive::Backend;
    use crate::format::format_key;
    use crate::key::decode_private_key;

    #[test]
    fn request_follows_placeholders() {
        let t = Template::parse("%a:%w");
        assert_eq!(t.request(), OutputRequest { address: true, wif: true, ..Default::default() });
        assert!(!Template::parse("%h %w").request().needs_point());
        assert_eq!(Template::parse("no vars").request(), OutputRequest::default());
    }

    #[test]
    fn renders_vanitygen_style() {
        let curve = Curve::secp256k1();
        let k = decode_private_key(&format!("{}1", "0".repeat(63))).unwrap();
        let t = Template::parse("Address: %a\\nPrivkey: %w");
        let values = format_key(&curve, Backend::default(), &k, t.request()).unwrap();
        assert_eq!(
            String::from_utf8(t.render(&values)).unwrap(),
            "Address: 1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm\n\
             Privkey: 5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf"
        );
    }

    #[test]
    fn repeated_placeholders() {
        let curve = Curve::secp256k1();
        let k = decode_private_key(&"11".repeat(32)).unwrap();
        let t = Template::parse("%h-%h");
        let values = format_key(&curve, Backend::default(), &k, t.request()).unwrap();
        let hex = "11".repeat(32);
        assert_eq!(t.render(&values), format!("{hex}-{hex}").into_bytes());
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unescape(r#"a\tb\\c\'d\"e"#), b"a\tb\\c'd\"e");
        assert_eq!(unescape(r"\a\b\f\v\r\n"), vec![7, 8, 12, 11, b'\r', b'\n']);
    }

    #[test]
    fn octal_and_hex_escapes() {
        assert_eq!(unescape(r"\0\101\1019"), vec![0, b'A', b'A', b'9']);
        assert_eq!(unescape(r"\x41\xff\x4"), vec![b'A', 0xff, b'\\', b'x', b'4']);
    }

    #[test]
    fn unknown_escape_and_trailing_backslash_are_kept() {
        assert_eq!(unescape(r"\q"), b"\\q");
        assert_eq!(unescape("end\\"), b"end\\");
        assert_eq!(unescape("a\\\nb"), b"ab");
    }
}
