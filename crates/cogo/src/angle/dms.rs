//! `DDD.MMSS` entry text and `DDD°MM'SS"` display.

use std::fmt;
use std::str::FromStr;

use super::Angle;
use crate::error::CogoError;

impl FromStr for Angle {
    type Err = CogoError;

    /// Parse the surveyor entry format `DDD.MMSS`.
    ///
    /// `"123.4530"` is 123°45'30", `"90.3"` is 90°30'00", a leading `-`
    /// negates the whole value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| CogoError::InvalidDms {
            input: s.to_string(),
            reason,
        };
        let text = s.trim();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (deg_text, frac_text) = body.split_once('.').unwrap_or((body, ""));
        if deg_text.is_empty() && frac_text.is_empty() {
            return Err(invalid("empty"));
        }
        if !deg_text.bytes().chain(frac_text.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected digits"));
        }
        if frac_text.len() > 4 {
            return Err(invalid("more than four MMSS digits"));
        }
        let degrees: i64 = if deg_text.is_empty() {
            0
        } else {
            deg_text
                .parse()
                .map_err(|_| invalid("degrees out of range"))?
        };
        let mut frac = frac_text.as_bytes().to_vec();
        frac.resize(4, b'0');
        let digit = |i: usize| (frac[i] - b'0') as i64;
        let minutes = digit(0) * 10 + digit(1);
        let seconds = digit(2) * 10 + digit(3);
        if minutes >= 60 {
            return Err(invalid("minutes must be below 60"));
        }
        if seconds >= 60 {
            return Err(invalid("seconds must be below 60"));
        }
        let total = degrees
            .checked_mul(3600)
            .and_then(|d| d.checked_add(minutes * 60 + seconds))
            .filter(|t| *t <= i32::MAX as i64 * 3600)
            .ok_or_else(|| invalid("degrees out of range"))?;
        let angle = Angle::from_total_seconds(total);
        Ok(if negative { -angle } else { angle })
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_seconds();
        let sign = if total < 0 { "-" } else { "" };
        let abs = total.unsigned_abs();
        write!(
            f,
            "{sign}{}°{:02}'{:02}\"",
            abs / 3600,
            (abs % 3600) / 60,
            abs % 60
        )
    }
}
