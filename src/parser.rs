//! Reads a single cell of text as a decimal (`-1.25`, `.5`) or a fraction (`-3/4`).

use crate::error::ParseError;
use crate::system::Rational;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{delimited, pair, preceded, separated_pair};
use num_bigint::{BigInt, ParseBigIntError};
use num_traits::{Num, ToPrimitive, Zero};

enum Literal {
    Fraction(BigInt, BigInt),
    Decimal(Rational),
}

/// Parse `input` as an exact rational number.
pub fn parse_rational(input: &str) -> Result<Rational, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let literal = match all_consuming(ws(alt((parse_fraction, parse_decimal))))(input) {
        Ok((_, literal)) => literal,
        Err(_) => return Err(ParseError::Malformed(input.to_string())),
    };

    match literal {
        Literal::Fraction(_, d) if d.is_zero() => Err(ParseError::ZeroDenominator(input.to_string())),
        Literal::Fraction(n, d) => Ok(Rational::new(n, d)),
        Literal::Decimal(r) => Ok(r),
    }
}

/// Parse `input` as an `f64`. Fractions are divided exactly before rounding to the
/// nearest double.
pub fn parse_value(input: &str) -> Result<f64, ParseError> {
    let exact = parse_rational(input)?;
    match exact.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::OutOfRange(input.to_string())),
    }
}

fn parse_fraction(input: &str) -> IResult<&str, Literal, VerboseError<&str>> {
    map(
        separated_pair(parse_int, ws(char('/')), parse_natural),
        |(n, d)| Literal::Fraction(n, d),
    )(input)
}

fn parse_decimal(input: &str) -> IResult<&str, Literal, VerboseError<&str>> {
    map_res(
        pair(
            opt(one_of("+-")),
            alt((
                pair(digit1, opt(preceded(char('.'), digit0))),
                pair(digit0, map(preceded(char('.'), digit1), Some)),
            )),
        ),
        |(sign, (whole, frac))| {
            decimal_rational(sign == Some('-'), whole, frac.unwrap_or("")).map(Literal::Decimal)
        },
    )(input)
}

fn decimal_rational(negative: bool, whole: &str, frac: &str) -> Result<Rational, ParseBigIntError> {
    let numer = BigInt::from_str_radix(&format!("{whole}{frac}"), 10)?;
    let denom = num_traits::pow(BigInt::from(10u32), frac.len());
    let value = Rational::new(numer, denom);
    Ok(if negative { -value } else { value })
}

fn parse_int(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        BigInt::from_str_radix(s, 10)
    })(input)
}

fn parse_natural(input: &str) -> IResult<&str, BigInt, VerboseError<&str>> {
    map_res(digit1, |s: &str| BigInt::from_str_radix(s, 10))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
