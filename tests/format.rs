use linsys::{
    FormatOptions, Rational, approximate_rational, exact_text, format_value, format_value_with,
};
use num_bigint::BigInt;

#[test]
fn integers_are_grouped() {
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(42.0), "42");
    assert_eq!(format_value(1234.0), "1,234");
    assert_eq!(format_value(-1234567.0), "-1,234,567");
    assert_eq!(format_value(1e21), "1,000,000,000,000,000,000,000");
}

#[test]
fn near_integers_snap() {
    assert_eq!(format_value(2.9999999999), "3");
    assert_eq!(format_value(3.0000000001), "3");
    assert_eq!(format_value(-4.99999999999), "-5");
}

#[test]
fn fractions_are_reduced() {
    assert_eq!(format_value(0.5), "1/2");
    assert_eq!(format_value(-2.5), "-5/2");
    assert_eq!(format_value(1.0 / 3.0), "1/3");
    assert_eq!(format_value(2.0 / 3.0), "2/3");
    assert_eq!(format_value(22.0 / 7.0), "22/7");
    assert_eq!(format_value(0.1), "1/10");
}

#[test]
fn fraction_parts_are_grouped() {
    assert_eq!(format_value(1234567.5), "2,469,135/2");
    assert_eq!(format_value(-1234.567), "-1,234,567/1,000");
}

#[test]
fn large_decimals_keep_every_digit() {
    assert_eq!(format_value(98765.123), "98,765,123/1,000");
    assert_eq!(format_value(-98765.333), "-98,765,333/1,000");
    assert_eq!(format_value(1234.98761), "123,498,761/100,000");
    assert_eq!(format_value(4096.0625), "65,537/16");
}

#[test]
fn plain_options_skip_grouping() {
    assert_eq!(format_value_with(1234567.5, &FormatOptions::plain()), "2469135/2");
    assert_eq!(exact_text(-1234.0), "-1234");
}

#[test]
fn custom_separator() {
    let options = FormatOptions {
        separator: Some('.'),
        ..FormatOptions::default()
    };
    assert_eq!(format_value_with(1234567.0, &options), "1.234.567");
}

#[test]
fn small_denominator_cap() {
    let options = FormatOptions {
        max_denominator: 10,
        ..FormatOptions::default()
    };
    assert_eq!(format_value_with(std::f64::consts::PI, &options), "22/7");
}

#[test]
fn approximation_is_in_lowest_terms() {
    let r = approximate_rational(0.75, 1_000);
    assert_eq!(r, Rational::new(3.into(), 4.into()));
    assert_eq!(r.numer(), &BigInt::from(3));
    assert_eq!(r.denom(), &BigInt::from(4));
}

#[test]
fn non_finite_values() {
    assert_eq!(format_value(f64::NAN), "NaN");
    assert_eq!(format_value(f64::INFINITY), "inf");
    assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
}
