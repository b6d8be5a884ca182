use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};

use crate::solver::EPSILON;
use crate::system::Rational;

pub const DEFAULT_MAX_DENOMINATOR: u64 = 100_000_000;

const MAX_EXPANSION_TERMS: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Inserted every three digits from the right; `None` disables grouping.
    pub separator: Option<char>,
    pub max_denominator: u64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            separator: Some(','),
            max_denominator: DEFAULT_MAX_DENOMINATOR,
        }
    }
}

impl FormatOptions {
    /// Ungrouped output, readable back by the parser.
    pub fn plain() -> Self {
        FormatOptions {
            separator: None,
            ..FormatOptions::default()
        }
    }
}

/// Render `value` as a grouped integer when it sits within `EPSILON` of one, and as
/// a reduced `numerator/denominator` otherwise.
pub fn format_value(value: f64) -> String {
    format_value_with(value, &FormatOptions::default())
}

pub fn format_value_with(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        let n = BigInt::from_f64(rounded).unwrap_or_default();
        return group_digits(&n, options.separator);
    }

    show_rational(&approximate_rational(value, options.max_denominator), options.separator)
}

pub fn format_values(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format_value(*v)).collect()
}

pub fn exact_text(value: f64) -> String {
    format_value_with(value, &FormatOptions::plain())
}

/// Best rational approximation of `value` from its continued-fraction expansion.
///
/// Expansion stops at the first convergent that converts back to exactly `value`,
/// before the denominator would exceed `max_denominator`, or after
/// `MAX_EXPANSION_TERMS` terms.
pub fn approximate_rational(value: f64, max_denominator: u64) -> Rational {
    if !value.is_finite() {
        return Rational::zero();
    }

    let target = value.abs();
    let limit = BigInt::from(max_denominator.max(1));

    let whole = target.floor();
    let mut frac = target - whole;
    let (mut h_prev, mut h) = (BigInt::one(), BigInt::from_f64(whole).unwrap_or_default());
    let (mut k_prev, mut k) = (BigInt::zero(), BigInt::one());

    for _ in 0..MAX_EXPANSION_TERMS {
        if frac == 0.0 || ratio_f64(&h, &k) == target {
            break;
        }
        let x = 1.0 / frac;
        let a = x.floor();
        frac = x - a;
        let Some(a) = BigInt::from_f64(a) else {
            break;
        };

        let k_next = &a * &k + &k_prev;
        if k_next > limit {
            break;
        }
        let h_next = &a * &h + &h_prev;
        h_prev = std::mem::replace(&mut h, h_next);
        k_prev = std::mem::replace(&mut k, k_next);
    }

    let r = Rational::new(h, k);
    if value < 0.0 { -r } else { r }
}

// Correctly rounded, so an exact decimal input compares equal to its own convergent.
fn ratio_f64(n: &BigInt, d: &BigInt) -> f64 {
    Rational::new(n.clone(), d.clone()).to_f64().unwrap_or(f64::NAN)
}

/// Digits of `n` with `separator` between each group of three, sign kept in front.
pub fn group_digits(n: &BigInt, separator: Option<char>) -> String {
    let digits = n.magnitude().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n.is_negative() {
        out.push('-');
    }
    match separator {
        None => out.push_str(&digits),
        Some(sep) => {
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(sep);
                }
                out.push(ch);
            }
        }
    }
    out
}

fn show_rational(r: &Rational, separator: Option<char>) -> String {
    if r.denom().is_one() {
        group_digits(r.numer(), separator)
    } else {
        format!(
            "{}/{}",
            group_digits(r.numer(), separator),
            group_digits(r.denom(), separator)
        )
    }
}
