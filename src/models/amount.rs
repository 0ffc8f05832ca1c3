use crate::consts::SCALE;
use crate::errors::AmountParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed-point money value with four decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(pub i64);

impl Amount {
    #[inline]
    pub fn zero() -> Self {
        Amount(0)
    }

    /// Builds an amount from a whole number of units.
    #[inline]
    pub fn from_units(units: i64) -> Option<Amount> {
        units.checked_mul(SCALE).map(Amount)
    }

    #[inline]
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Parse decimal with up to 4 dp; rounds the 5th dp half-up.
    pub fn parse_4dp(s: &str) -> Result<Amount, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let neg = s.starts_with('-');
        let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);

        let (int_src, frac_src) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
        if int_src.is_empty() || !int_src.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::MalformedInt);
        }
        if frac_src.is_empty() || !frac_src.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::MalformedFrac);
        }

        let int_part: i64 = int_src.parse().map_err(|_| AmountParseError::Overflow)?;

        let (keep, rest) = if frac_src.len() > 4 {
            frac_src.split_at(4)
        } else {
            (frac_src, "")
        };
        let mut frac: i64 = format!("{keep:0<4}")
            .parse()
            .map_err(|_| AmountParseError::MalformedFrac)?;

        // round half-up based on first dropped digit, if any
        if rest.as_bytes().first().is_some_and(|d| *d >= b'5') {
            frac += 1;
        }

        let val = int_part
            .checked_mul(SCALE)
            .and_then(|base| base.checked_add(frac))
            .ok_or(AmountParseError::Overflow)?;
        Ok(if neg { Amount(-val) } else { Amount(val) })
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse_4dp(s)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE.unsigned_abs();
        write!(f, "{sign}{}.{:04}", abs / scale, abs % scale)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
