use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateTimeParseError;

/// Precision levels for FHIR date values.
///
/// FHIR dates allow year-only and year-month values alongside full dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimePrecision {
    /// hh:mm:ss
    Second,
    /// hh:mm:ss.fff (any number of fraction digits)
    Fraction,
}

/// Precision levels for FHIR dateTime values.
///
/// A dateTime either stops at a date component or carries a full time of
/// day with seconds and a zone offset. FHIR R4 has no hour-only or
/// minute-only dateTime form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with time to seconds (YYYY-MM-DDThh:mm:ss+zz:zz)
    Second,
    /// Date with fractional seconds (YYYY-MM-DDThh:mm:ss.fff+zz:zz)
    Fraction,
}

/// Byte cursor over a lexical date/time value.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Reads exactly `count` ASCII digits.
    fn digits(&mut self, count: usize) -> Option<u32> {
        let end = self.pos + count;
        let slice = self.bytes.get(self.pos..end)?;
        if !slice.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos = end;
        Some(slice.iter().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
    }

    /// Reads one or more fraction digits as nanoseconds. Digits past the
    /// ninth are accepted and dropped.
    fn fraction(&mut self) -> Option<u32> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() {
            return None;
        }
        let mut nanos = 0u32;
        for i in 0..9 {
            let digit = digits.get(i).map_or(0, |b| u32::from(b - b'0'));
            nanos = nanos * 10 + digit;
        }
        Some(nanos)
    }
}

struct DateParts {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

fn parse_date_parts(cursor: &mut Cursor<'_>) -> Result<DateParts, &'static str> {
    let year = cursor.digits(4).ok_or("expected a four digit year")?;
    if year == 0 {
        return Err("year must be between 0001 and 9999");
    }
    let mut parts = DateParts {
        year: year as i32,
        month: None,
        day: None,
    };
    if !cursor.eat(b'-') {
        return Ok(parts);
    }
    let month = cursor.digits(2).ok_or("expected a two digit month")?;
    if !(1..=12).contains(&month) {
        return Err("month out of range");
    }
    parts.month = Some(month);
    if !cursor.eat(b'-') {
        return Ok(parts);
    }
    let day = cursor.digits(2).ok_or("expected a two digit day")?;
    if NaiveDate::from_ymd_opt(parts.year, month, day).is_none() {
        return Err("day out of range for month");
    }
    parts.day = Some(day);
    Ok(parts)
}

struct TimeParts {
    hour: u32,
    minute: u32,
    second: u32,
    nanos: Option<u32>,
}

fn parse_time_parts(cursor: &mut Cursor<'_>) -> Result<TimeParts, &'static str> {
    let hour = cursor.digits(2).ok_or("expected a two digit hour")?;
    if hour > 23 {
        return Err("hour out of range");
    }
    if !cursor.eat(b':') {
        return Err("expected `:` after hour");
    }
    let minute = cursor.digits(2).ok_or("expected a two digit minute")?;
    if minute > 59 {
        return Err("minute out of range");
    }
    if !cursor.eat(b':') {
        return Err("seconds are required");
    }
    let second = cursor.digits(2).ok_or("expected two digit seconds")?;
    if second > 60 {
        return Err("second out of range");
    }
    let nanos = if cursor.eat(b'.') {
        Some(cursor.fraction().ok_or("expected digits after `.`")?)
    } else {
        None
    };
    Ok(TimeParts {
        hour,
        minute,
        second,
        nanos,
    })
}

/// Parses `Z` or `(+|-)hh:mm` into an offset in seconds east of UTC.
fn parse_offset(cursor: &mut Cursor<'_>) -> Result<i32, &'static str> {
    if cursor.eat(b'Z') {
        return Ok(0);
    }
    let sign = match cursor.peek() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err("a time zone (`Z` or `+hh:mm`) is required"),
    };
    cursor.pos += 1;
    let hours = cursor.digits(2).ok_or("expected a two digit zone hour")?;
    if !cursor.eat(b':') {
        return Err("expected `:` in zone offset");
    }
    let minutes = cursor.digits(2).ok_or("expected two digit zone minutes")?;
    if minutes > 59 || hours > 14 || (hours == 14 && minutes != 0) {
        return Err("zone offset out of range");
    }
    Ok(sign * (hours * 3600 + minutes * 60) as i32)
}

fn naive_time(hour: u32, minute: u32, second: u32, nanos: u32) -> Option<NaiveTime> {
    // chrono models a leap second as nanos past 1_000_000_000 on second 59
    if second == 60 {
        NaiveTime::from_hms_nano_opt(hour, minute, 59, 1_000_000_000 + nanos)
    } else {
        NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
    }
}

/// A FHIR `date`: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
///
/// The lexical form is kept so that a decoded value re-encodes exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    original_string: Arc<str>,
}

impl PrecisionDate {
    pub fn from_year(year: i32) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        Some(Self {
            year,
            month: None,
            day: None,
            original_string: Arc::from(format!("{year:04}")),
        })
    }

    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self {
            year,
            month: Some(month),
            day: None,
            original_string: Arc::from(format!("{year:04}-{month:02}")),
        })
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=9999).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self {
            year,
            month: Some(month),
            day: Some(day),
            original_string: Arc::from(format!("{year:04}-{month:02}-{day:02}")),
        })
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.month, self.day) {
            (None, _) => DatePrecision::Year,
            (Some(_), None) => DatePrecision::YearMonth,
            (Some(_), Some(_)) => DatePrecision::Full,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// The first day covered by this value (`2024` maps to 2024-01-01).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Compares two dates of the same precision. Values of different
    /// precision are not ordered.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.precision() != other.precision() {
            return None;
        }
        Some(
            (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)),
        )
    }
}

impl FromStr for PrecisionDate {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let parts =
            parse_date_parts(&mut cursor).map_err(|reason| DateTimeParseError::new("date", s, reason))?;
        if !cursor.is_done() {
            return Err(DateTimeParseError::new("date", s, "unexpected trailing characters"));
        }
        Ok(Self {
            year: parts.year,
            month: parts.month,
            day: parts.day,
            original_string: Arc::from(s),
        })
    }
}

impl From<NaiveDate> for PrecisionDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
            original_string: Arc::from(date.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A FHIR `time`: `hh:mm:ss` with optional fractional seconds, no zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    nanos: Option<u32>,
    original_string: Arc<str>,
}

impl PrecisionTime {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        naive_time(hour, minute, second, 0)?;
        Some(Self {
            hour,
            minute,
            second,
            nanos: None,
            original_string: Arc::from(format!("{hour:02}:{minute:02}:{second:02}")),
        })
    }

    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Option<Self> {
        if millisecond > 999 {
            return None;
        }
        naive_time(hour, minute, second, millisecond * 1_000_000)?;
        Some(Self {
            hour,
            minute,
            second,
            nanos: Some(millisecond * 1_000_000),
            original_string: Arc::from(format!(
                "{hour:02}:{minute:02}:{second:02}.{millisecond:03}"
            )),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        if self.nanos.is_some() {
            TimePrecision::Fraction
        } else {
            TimePrecision::Second
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        naive_time(self.hour, self.minute, self.second, self.nanos.unwrap_or(0))
    }

    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.precision() != other.precision() {
            return None;
        }
        self.to_naive_time()?.partial_cmp(&other.to_naive_time()?)
    }
}

impl FromStr for PrecisionTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor::new(s);
        let parts =
            parse_time_parts(&mut cursor).map_err(|reason| DateTimeParseError::new("time", s, reason))?;
        if !cursor.is_done() {
            return Err(DateTimeParseError::new("time", s, "unexpected trailing characters"));
        }
        Ok(Self {
            hour: parts.hour,
            minute: parts.minute,
            second: parts.second,
            nanos: parts.nanos,
            original_string: Arc::from(s),
        })
    }
}

/// A FHIR `dateTime`.
///
/// Either a partial or full date (`2024`, `2024-03`, `2024-03-15`), or a full
/// date with a time of day and zone (`2024-03-15T08:30:00+01:00`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    offset_seconds: Option<i32>,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    pub fn from_date(date: PrecisionDate) -> Self {
        let original_string = date.original_string.clone();
        Self {
            date,
            time: None,
            offset_seconds: None,
            original_string,
        }
    }

    pub fn precision(&self) -> DateTimePrecision {
        match (&self.time, self.date.precision()) {
            (Some(time), _) => match time.precision() {
                TimePrecision::Second => DateTimePrecision::Second,
                TimePrecision::Fraction => DateTimePrecision::Fraction,
            },
            (None, DatePrecision::Year) => DateTimePrecision::Year,
            (None, DatePrecision::YearMonth) => DateTimePrecision::YearMonth,
            (None, DatePrecision::Full) => DateTimePrecision::Date,
        }
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    /// Zone offset in seconds east of UTC, present whenever a time is.
    pub fn offset_seconds(&self) -> Option<i32> {
        self.offset_seconds
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    /// The instant this value starts at, in UTC. Date-only values start at
    /// midnight UTC on their first day.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let date = self.date.to_naive_date()?;
        let Some(time) = &self.time else {
            return Some(date.and_time(NaiveTime::MIN).and_utc());
        };
        let offset = FixedOffset::east_opt(self.offset_seconds.unwrap_or(0))?;
        let local = date.and_time(time.to_naive_time()?);
        let fixed = local.and_local_timezone(offset).single()?;
        Some(fixed.with_timezone(&Utc))
    }

    /// Orders two values of the same precision. Timed values are compared
    /// on the UTC timeline.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.precision() != other.precision() {
            return None;
        }
        match (&self.time, &other.time) {
            (Some(_), Some(_)) => self
                .to_chrono_datetime()?
                .partial_cmp(&other.to_chrono_datetime()?),
            _ => self.date.compare(&other.date),
        }
    }

    fn parse_with_kind(s: &str, kind: &'static str) -> Result<Self, DateTimeParseError> {
        let mut cursor = Cursor::new(s);
        let parts =
            parse_date_parts(&mut cursor).map_err(|reason| DateTimeParseError::new(kind, s, reason))?;
        let date_end = cursor.pos;
        let date = PrecisionDate {
            year: parts.year,
            month: parts.month,
            day: parts.day,
            original_string: Arc::from(&s[..date_end]),
        };

        if cursor.is_done() {
            return Ok(Self::from_date(PrecisionDate {
                original_string: Arc::from(s),
                ..date
            }));
        }
        if !cursor.eat(b'T') {
            return Err(DateTimeParseError::new(kind, s, "expected `T` before the time"));
        }
        if date.precision() != DatePrecision::Full {
            return Err(DateTimeParseError::new(kind, s, "a time needs a full date"));
        }
        let time_start = cursor.pos;
        let time_parts =
            parse_time_parts(&mut cursor).map_err(|reason| DateTimeParseError::new(kind, s, reason))?;
        let time_end = cursor.pos;
        let offset =
            parse_offset(&mut cursor).map_err(|reason| DateTimeParseError::new(kind, s, reason))?;
        if !cursor.is_done() {
            return Err(DateTimeParseError::new(kind, s, "unexpected trailing characters"));
        }

        Ok(Self {
            date,
            time: Some(PrecisionTime {
                hour: time_parts.hour,
                minute: time_parts.minute,
                second: time_parts.second,
                nanos: time_parts.nanos,
                original_string: Arc::from(&s[time_start..time_end]),
            }),
            offset_seconds: Some(offset),
            original_string: Arc::from(s),
        })
    }
}

impl FromStr for PrecisionDateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_kind(s, "dateTime")
    }
}

impl From<PrecisionDate> for PrecisionDateTime {
    fn from(date: PrecisionDate) -> Self {
        Self::from_date(date)
    }
}

impl From<ChronoDateTime<Utc>> for PrecisionDateTime {
    fn from(value: ChronoDateTime<Utc>) -> Self {
        PrecisionInstant::from(value).0
    }
}

/// A FHIR `instant`: a dateTime that always carries seconds and a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrecisionInstant(PrecisionDateTime);

impl PrecisionInstant {
    pub fn original_string(&self) -> &str {
        self.0.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.0
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.0.to_chrono_datetime()
    }
}

impl FromStr for PrecisionInstant {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = PrecisionDateTime::parse_with_kind(s, "instant")?;
        if value.time.is_none() {
            return Err(DateTimeParseError::new(
                "instant",
                s,
                "an instant needs a full date, time and zone",
            ));
        }
        Ok(Self(value))
    }
}

impl From<ChronoDateTime<Utc>> for PrecisionInstant {
    fn from(value: ChronoDateTime<Utc>) -> Self {
        let text = value.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
        let date = PrecisionDate {
            year: value.year(),
            month: Some(value.month()),
            day: Some(value.day()),
            original_string: Arc::from(&text[..text.len().min(10)]),
        };
        let millis = value.timestamp_subsec_millis().min(999);
        let time = PrecisionTime {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
            nanos: Some(millis * 1_000_000),
            original_string: Arc::from(format!(
                "{:02}:{:02}:{:02}.{millis:03}",
                value.hour(),
                value.minute(),
                value.second()
            )),
        };
        Self(PrecisionDateTime {
            date,
            time: Some(time),
            offset_seconds: Some(0),
            original_string: Arc::from(text),
        })
    }
}

macro_rules! lexical_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.original_string())
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.serialize_str(self.original_string())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(de::Error::custom)
                }
            }
        )*
    };
}

lexical_serde!(PrecisionDate, PrecisionTime, PrecisionDateTime, PrecisionInstant);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_keeps_partial_precision() {
        let year: PrecisionDate = "2024".parse().unwrap();
        assert_eq!(year.precision(), DatePrecision::Year);
        assert_eq!(year.month(), None);

        let month: PrecisionDate = "2024-02".parse().unwrap();
        assert_eq!(month.precision(), DatePrecision::YearMonth);
        assert_eq!(month.to_naive_date(), NaiveDate::from_ymd_opt(2024, 2, 1));

        let full: PrecisionDate = "2024-02-29".parse().unwrap();
        assert_eq!(full.precision(), DatePrecision::Full);
        assert_eq!(full.to_string(), "2024-02-29");
    }

    #[test]
    fn date_rejects_malformed_values() {
        for input in ["24", "2024-13", "2023-02-29", "2024-1-01", "2024/01/01", "0000", "2024-01-01T"] {
            assert!(input.parse::<PrecisionDate>().is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn date_time_requires_zone_with_time() {
        assert!("2015-02-07T13:28:17".parse::<PrecisionDateTime>().is_err());
        assert!("2015-02-07T13:28".parse::<PrecisionDateTime>().is_err());
        assert!("2015-02T13:28:17Z".parse::<PrecisionDateTime>().is_err());

        let value: PrecisionDateTime = "2015-02-07T13:28:17.239+02:00".parse().unwrap();
        assert_eq!(value.precision(), DateTimePrecision::Fraction);
        assert_eq!(value.offset_seconds(), Some(7200));
        assert_eq!(value.time().map(PrecisionTime::hour), Some(13));
        assert_eq!(value.to_string(), "2015-02-07T13:28:17.239+02:00");
    }

    #[test]
    fn date_time_compares_on_utc_timeline() {
        let a: PrecisionDateTime = "2020-01-01T10:00:00+02:00".parse().unwrap();
        let b: PrecisionDateTime = "2020-01-01T09:00:00Z".parse().unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        let coarse: PrecisionDateTime = "2020".parse().unwrap();
        assert_eq!(a.compare(&coarse), None);
    }

    #[test]
    fn instant_needs_time() {
        assert!("2024-05-01".parse::<PrecisionInstant>().is_err());
        let instant: PrecisionInstant = "2024-05-01T12:00:00Z".parse().unwrap();
        assert_eq!(
            instant.to_chrono_datetime().map(|dt| dt.timestamp()),
            Some(1_714_564_800)
        );
    }

    #[test]
    fn time_parses_fractions_and_leap_seconds() {
        let time: PrecisionTime = "23:59:60.5".parse().unwrap();
        assert_eq!(time.precision(), TimePrecision::Fraction);
        assert!(time.to_naive_time().is_some());
        assert!("24:00:00".parse::<PrecisionTime>().is_err());
        assert!("10:00".parse::<PrecisionTime>().is_err());
    }
}
