//! # Money Module
//!
//! Provides the `Money` type for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Vendors type prices into a form: "19.99"                              │
//! │  As a float that is 19.989999999999998...                              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" is parsed digit by digit into 1999 cents                    │
//! │    No float ever touches a price                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//!
//! let typed = Money::parse("129.5").unwrap();
//! assert_eq!(typed.cents(), 12950);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Vendor form "49.99" ──► coerce_price ──► Money ──► Product.price_cents
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal amount as typed into a form.
    ///
    /// ## Accepted Input
    /// - Optional sign, digits, optional `.` and fraction: `"49.99"`,
    ///   `"-5"`, `".5"`, `"24."`
    /// - Optional exponent with its own sign: `"1e3"`, `"2.5E-1"`
    /// - Surrounding whitespace is ignored
    /// - Fractions beyond cents round half-up on the first dropped digit
    ///
    /// Anything else (empty, letters, several dots, overflow) returns `None`.
    ///
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// assert_eq!(Money::parse("49.99"), Some(Money::from_cents(4999)));
    /// assert_eq!(Money::parse("1.005"), Some(Money::from_cents(101)));
    /// assert_eq!(Money::parse("1e3"), Some(Money::from_cents(100_000)));
    /// assert_eq!(Money::parse("-5"), Some(Money::from_cents(-500)));
    /// assert_eq!(Money::parse("abc"), None);
    /// assert_eq!(Money::parse(""), None);
    /// ```
    pub fn parse(input: &str) -> Option<Money> {
        let s = input.trim();
        let (negative, unsigned) = split_sign(s);

        let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
            Some((m, e)) => (m, parse_exponent(e)?),
            None => (unsigned, 0),
        };

        let (whole, frac) = match mantissa.split_once('.') {
            Some((w, f)) => (w, f),
            None => (mantissa, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        // Significant digits, with the decimal point `point` places from
        // the left of the first one.
        let all: Vec<i64> = whole
            .bytes()
            .chain(frac.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();
        let leading = all.iter().take_while(|&&d| d == 0).count();
        let digits = &all[leading..];
        if digits.is_empty() {
            return Some(Money(0));
        }

        let point = i64::try_from(whole.len())
            .ok()?
            .checked_sub(i64::try_from(leading).ok()?)?
            .checked_add(exponent)?;

        // Digits kept as whole cents. A leading non-zero digit this far
        // left of the point is past i64.
        let cut = point.checked_add(2)?;
        if cut > 19 {
            return None;
        }

        let mut cents: i64 = 0;
        for i in 0..cut.max(0) {
            let d = usize::try_from(i).ok().and_then(|i| digits.get(i)).copied().unwrap_or(0);
            cents = cents.checked_mul(10)?.checked_add(d)?;
        }

        let round_up = usize::try_from(cut)
            .ok()
            .and_then(|i| digits.get(i))
            .is_some_and(|&d| d >= 5);
        cents = cents.checked_add(i64::from(round_up))?;

        Some(Money(if negative { -cents } else { cents }))
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// `"3"`, `"+3"`, `"-2"`; at least one digit.
fn parse_exponent(input: &str) -> Option<i64> {
    let (negative, digits) = split_sign(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
    }
    Some(if negative { -value } else { value })
}

// =============================================================================
// Unit Tests
// =============================================================================
