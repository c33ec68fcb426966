/// If `line` is `"{name} {value}"`, returns `value`.
pub(crate) fn header<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    if line.contains(&b' ') {
        let (maybe_name, value) = split_once(line, &b' ');
        if maybe_name == name {
            Some(value)
        } else {
            None
        }
    } else {
        None
    }
}

pub(crate) fn split_once<'a>(s: &'a [u8], c: &u8) -> (&'a [u8], &'a [u8]) {
    match s.iter().position(|b| b == c) {
        Some(n) => (&s[0..n], &s[n + 1..]),
        None => (s, &[]),
    }
}

/// Splits off the next `\n`-terminated line.
///
/// Returns `None` if `s` has no newline left.
pub(crate) fn next_line(s: &[u8]) -> Option<(&[u8], &[u8])> {
    s.iter()
        .position(|b| *b == b'\n')
        .map(|n| (&s[0..n], &s[n + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fn() {
        assert_eq!(header(b"parent abc", b"parent").unwrap(), b"abc");
        assert_eq!(header(b"parent ", b"parent").unwrap(), b"");

        assert_eq!(header(b"parenx abc", b"parent"), None);
        assert_eq!(header(b"parent", b"parent"), None);
        assert_eq!(header(b"parentx abc", b"parent"), None);
    }

    #[test]
    fn next_line_fn() {
        assert_eq!(next_line(b"one\ntwo\n"), Some((&b"one"[..], &b"two\n"[..])));
        assert_eq!(next_line(b"\nrest"), Some((&b""[..], &b"rest"[..])));
        assert_eq!(next_line(b"no newline"), None);
    }
}
