use std::fmt;
use std::str::{self, FromStr};

use chrono::{Local, Offset};

use super::parse_utils::split_once;

/// The name and e-mail address of a person who authors or commits a change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: &str, email: &str) -> Identity {
        Identity {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// An `Attribution` combines a person's identity (name and e-mail address)
/// with the timestamp for a particular action.
///
/// Attributions appear as the `author` and `committer` lines of a commit.
///
/// The `timestamp` value is in seconds relative to the Unix epoch;
/// `tz_offset` is in minutes relative to GMT.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribution {
    name: String,
    email: String,
    timestamp: i64,
    tz_offset: i16,
}

impl Attribution {
    /// Creates a new attribution.
    ///
    /// `name` and `email` are stored in the form they are written to a commit:
    /// trimmed, with angle brackets and control characters other than CR removed.
    ///
    /// Panics if `tz_offset` lies outside GMT-12:00 ..= GMT+14:00.
    pub fn new(name: &str, email: &str, timestamp: i64, tz_offset: i16) -> Attribution {
        if !is_legal_tz_offset(tz_offset) {
            panic!("Illegal time zone offset: {}", tz_offset);
        }

        Attribution {
            name: sanitize(name),
            email: sanitize(email),
            timestamp,
            tz_offset,
        }
    }

    /// Stamps `identity` with the current wall-clock time (whole seconds)
    /// and the local time zone offset.
    pub fn now(identity: &Identity) -> Attribution {
        let now = Local::now();
        let tz_offset = (now.offset().fix().local_minus_utc() / 60) as i16;

        Attribution::new(&identity.name, &identity.email, now.timestamp(), tz_offset)
    }

    /// Parse an author or committer value into an `Attribution` struct.
    ///
    /// Returns `None` unless the value ends in a decimal timestamp and a
    /// `+hhmm`/`-hhmm` offset within GMT-12:00 ..= GMT+14:00.
    pub fn parse(line: &[u8]) -> Option<Attribution> {
        let line = drop_last_newline(line);
        let (name, line) = split_once(line, &b'<');
        let name = drop_last_space(name);
        let name = match str::from_utf8(name) {
            Ok(name_str) => name_str.to_string(),
            _ => return None,
        };

        if !line.contains(&b'>') {
            return None;
        }

        let (email, line) = split_once(line, &b'>');
        let email = match str::from_utf8(email) {
            Ok(email_str) => email_str.to_string(),
            _ => return None,
        };

        let line = drop_last_space(line);
        let (tz_offset, line) = last_word(line);
        let tz_offset = tz_from_str(tz_offset.as_str()).filter(|tz| is_legal_tz_offset(*tz))?;

        let (timestamp, line) = last_word(line);
        if !line.is_empty() {
            return None;
        }
        let timestamp = i64::from_str(timestamp.as_str()).ok()?;

        Some(Attribution::new(&name, &email, timestamp, tz_offset))
    }

    /// Returns the person's human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the identity half of this attribution.
    pub fn identity(&self) -> Identity {
        Identity::new(&self.name, &self.email)
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the timezone offset (minutes relative to GMT).
    pub fn tz_offset(&self) -> i16 {
        self.tz_offset
    }

    /// Returns the timezone formatted in human readable offset from GMT.
    pub fn format_tz(&self) -> String {
        let sign = if self.tz_offset < 0 { "-" } else { "+" };

        let offset = self.tz_offset.abs();
        let hours = offset / 60;
        let min = offset % 60;

        format!("{}{:02}{:02}", sign, hours, min)
    }
}

fn drop_last_newline(s: &[u8]) -> &[u8] {
    match s.last() {
        Some(b'\n') => &s[0..s.len() - 1],
        _ => s,
    }
}

fn drop_last_space(s: &[u8]) -> &[u8] {
    match s.last() {
        Some(b' ') => &s[0..s.len() - 1],
        _ => s,
    }
}

fn last_word(s: &[u8]) -> (String, &[u8]) {
    let s = match s.iter().position(|b| b != &b' ') {
        Some(n) => &s[n..],
        None => s,
    };

    let (word, line) = rsplit_once(s, &b' ');
    let word = str::from_utf8(word).unwrap_or("").to_string();

    (word, line)
}

fn rsplit_once<'a>(s: &'a [u8], c: &u8) -> (&'a [u8], &'a [u8]) {
    match s.iter().rev().position(|b| b == c) {
        Some(n) => (&s[s.len() - n..], &s[0..s.len() - n - 1]),
        None => (s, &[]),
    }
}

fn tz_from_str(s: &str) -> Option<i16> {
    let s = s.as_bytes();

    if s.len() != 5 {
        return None;
    }

    let sign: i16 = match s[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let hh = from_digit(s[1])? * 10 + from_digit(s[2])?;
    let mm = from_digit(s[3])? * 10 + from_digit(s[4])?;
    if mm > 59 {
        return None;
    }

    Some(sign * (hh * 60 + mm))
}

fn from_digit(digit: u8) -> Option<i16> {
    if digit.is_ascii_digit() {
        Some(i16::from(digit - b'0'))
    } else {
        None
    }
}

fn is_legal_tz_offset(tz_offset: i16) -> bool {
    (-720..=840).contains(&tz_offset)
}

fn sanitize(s: &str) -> String {
    let mut result = String::new();
    for c in s.trim().chars() {
        // Remove control characters except for CR and angle brackets.
        match c as u32 {
            0..=12 => (),
            14..=31 => (),
            60 | 62 => (),
            _ => result.push(c),
        }
    }
    result
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} {}",
            self.name, self.email,
            self.timestamp,
            self.format_tz()
        )
    }
}
