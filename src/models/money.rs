//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that costs computed at two
//! decimal places never drift. On disk an amount is written as a decimal
//! number of currency units (`962.5`), which keeps profile records readable
//! and compatible with records that stored plain floats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a float, rounding to the nearest cent
    ///
    /// Halves round away from zero. Non-finite input yields `None`.
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// assert_eq!(Money::from_f64(5300.125).unwrap().cents(), 530013);
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a float number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a weight and round back to cents
    ///
    /// Halves round away from zero, so 0.125 becomes 0.13 rather than the
    /// banker's 0.12.
    pub fn scale(&self, weight: f64) -> Self {
        Self::from_f64(self.as_f64() * weight).unwrap_or_default()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "$1,050.50", "10".
    /// Digits past the second decimal place round half up.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol and thousands separators
        let s = s.strip_prefix('$').unwrap_or(s);
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();

        let cents = parse_unsigned_cents(&cleaned)
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse user input typed into an editable money cell
    ///
    /// Input containing letters or more than one decimal point is rejected
    /// outright. Everything that is not a digit or `.` is then stripped, so
    /// `"$1,200.5"` becomes 1200.50. An input that leaves nothing numeric
    /// behind is rejected.
    pub fn parse_input(input: &str) -> Result<Self, MoneyParseError> {
        let input = input.trim();

        if input.chars().any(|c| c.is_alphabetic()) {
            return Err(MoneyParseError::ContainsLetters(input.to_string()));
        }

        if input.matches('.').count() > 1 {
            return Err(MoneyParseError::MultipleDecimalPoints(input.to_string()));
        }

        let digits: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        parse_unsigned_cents(&digits)
            .map(Self)
            .ok_or_else(|| MoneyParseError::InvalidFormat(input.to_string()))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }
}

/// Parse "123", "123.4", "123.456" or ".5" into non-negative cents
fn parse_unsigned_cents(s: &str) -> Option<i64> {
    if s.is_empty() || s == "." {
        return None;
    }

    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };

    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let dollars: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
    let tenths = fraction_digits.next().unwrap_or(0);
    let hundredths = fraction_digits.next().unwrap_or(0);
    let round_up = fraction_digits.next().map(|d| d >= 5).unwrap_or(false);

    let cents = dollars
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths)?;
    if round_up {
        cents.checked_add(1)
    } else {
        Some(cents)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.as_f64()
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Money::from_f64(value).ok_or(MoneyParseError::NotFinite)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    ContainsLetters(String),
    MultipleDecimalPoints(String),
    NotFinite,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::ContainsLetters(s) => {
                write!(f, "Money amount cannot contain letters: {}", s)
            }
            MoneyParseError::MultipleDecimalPoints(s) => {
                write!(f, "Money amount has more than one decimal point: {}", s)
            }
            MoneyParseError::NotFinite => write!(f, "Money amount must be a finite number"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::from_f64(1375.0000000000002).unwrap().cents(), 137500);
        assert_eq!(Money::from_f64(0.005).unwrap().cents(), 1);
        assert_eq!(Money::from_f64(-2.35).unwrap().cents(), -235);
        assert!(Money::from_f64(f64::NAN).is_none());
        assert!(Money::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "$1,234,567.89");
    }

    #[test]
    fn test_scale() {
        let allocated = Money::from_cents(137500);
        assert_eq!(allocated.scale(0.7).cents(), 96250);
        assert_eq!(allocated.scale(0.05).cents(), 6875);
    }

    #[test]
    fn test_scale_rounds_exact_halves_away_from_zero() {
        // 0.25 × 0.5 = 0.125 is exact in binary
        assert_eq!(Money::from_cents(25).scale(0.5).cents(), 13);
        assert_eq!(Money::from_cents(-25).scale(0.5).cents(), -13);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("5300.").unwrap().cents(), 530000);
        assert_eq!(Money::parse("5300.123").unwrap().cents(), 530012);
        assert_eq!(Money::parse("$100,000.50").unwrap().cents(), 10000050);
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_input_accepts_cell_formats() {
        assert_eq!(Money::parse_input("$1,200.5").unwrap().cents(), 120050);
        assert_eq!(Money::parse_input(" 75 ").unwrap().cents(), 7500);
        assert_eq!(Money::parse_input("0.999").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_input_rejects_invalid() {
        assert_eq!(
            Money::parse_input("12abc"),
            Err(MoneyParseError::ContainsLetters("12abc".into()))
        );
        assert_eq!(
            Money::parse_input("1.2.3"),
            Err(MoneyParseError::MultipleDecimalPoints("1.2.3".into()))
        );
        assert!(Money::parse_input("").is_err());
        assert!(Money::parse_input("$").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization_as_decimal_units() {
        let m = Money::from_cents(96250);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "962.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(from_int.cents(), 500000);
    }

    #[test]
    fn test_serialization_round_trip_is_lossless() {
        for cents in [1, 7, 99, 1001, 96250, 33333, 123456789] {
            let m = Money::from_cents(cents);
            let json = serde_json::to_string(&m).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m, "cents {} did not survive", cents);
        }
    }
}
