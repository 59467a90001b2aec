//! Date-only wrapper
//!
//! `Date` hanya membawa bagian tanggal, tanpa jam dan timezone.
//! Format teks selalu ISO `YYYY-MM-DD`, baik untuk `Display`, `FromStr`,
//! maupun JSON.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

/// Tanggal kalender. Urutan (`Ord`) mengikuti kalender.
///
/// Nilai nol (`Default`) adalah `0001-01-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(NaiveDate);

impl Date {
    /// Nilai nol, `0001-01-01`
    pub fn zero() -> Self {
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }

    /// Parse tanggal `YYYY-MM-DD`
    pub fn parse(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input, FORMAT)
            .map(Self)
            .map_err(|source| Error::InvalidDate {
                input: input.to_string(),
                source,
            })
    }

    /// Tanggal hari ini menurut timezone lokal
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Bulan 1..=12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Hari 1..=31
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Menambah `delta`; hanya hari penuh yang dihitung.
    ///
    /// Hasil yang keluar dari jangkauan chrono di-clamp ke batas tanggal.
    pub fn add_delta(&self, delta: TimeDelta) -> Self {
        match self.0.checked_add_signed(delta) {
            Some(date) => Self(date),
            None if delta < TimeDelta::zero() => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// `self - other` dalam hari penuh
    pub fn duration_between(&self, other: Date) -> TimeDelta {
        self.0.signed_duration_since(other.0)
    }

    /// `Less` jika tanggal ini sebelum `other`, `Greater` jika sesudah
    pub fn compare(&self, other: &Date) -> Ordering {
        self.cmp(other)
    }

    pub fn before(&self, other: &Date) -> bool {
        self < other
    }

    pub fn after(&self, other: &Date) -> bool {
        self > other
    }

    /// Umur dalam tahun penuh pada tanggal `reference`.
    ///
    /// Negatif jika `reference` sebelum tanggal ini.
    pub fn age_on(&self, reference: Date) -> i32 {
        let mut years = reference.year() - self.year();
        if (reference.month(), reference.day()) < (self.month(), self.day()) {
            years -= 1;
        }
        years
    }

    /// Umur dalam tahun penuh per hari ini
    pub fn age(&self) -> i32 {
        self.age_on(Self::today())
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.date_naive())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// String kosong di-deserialisasi menjadi [`Date::zero`].
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(Self::zero());
        }
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
