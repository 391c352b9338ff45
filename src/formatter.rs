//! Renders a kernel-selected `(d, k)` pair into the canonical ASCII
//! decimal string.
//!
//! The kernel's raw `d` generically still carries trailing zeros (e.g.
//! `1.0` arrives as a 17-digit `d` for binary64): the normalization
//! below strips them first, then the shape dispatch below follows the
//! grammar exactly: leading-zero plain form, zero-padded or
//! point-inserted plain form, or scientific form, each leaving at least
//! one fractional digit.

use alloc::string::String;
use core::fmt::Write as _;

use crate::kernel::Decimal;

/// Formats a selected decimal with its sign into the final string.
///
/// `-3 <= e < 0`: `"0." + zeros + digits`.
/// `0 <= e < 7`: the decimal point lands inside (or just after, padded
/// with zeros) the digit string.
/// otherwise: scientific notation, always with at least one fractional
/// digit.
pub(crate) fn format_decimal(mut d: Decimal, sign: bool) -> String {
    // Strip trailing zeros, compensating the exponent: d*10^k is
    // invariant under (d/10, k+1) whenever d is a multiple of ten. The
    // kernel leaves some results with redundant trailing zeros; this is
    // the only place shortest-digit-count minimization happens for them.
    while d.digits % 10 == 0 && d.digits >= 10 {
        d.digits /= 10;
        d.exp10 += 1;
    }

    let mut digits = String::new();
    write!(digits, "{}", d.digits).expect("writing to a String cannot fail");
    let ds = digits.as_bytes();
    let n = ds.len() as i32;
    let e = d.exp10 + n - 1;

    let mut out = String::with_capacity(24);
    if sign {
        out.push('-');
    }

    if (-3..0).contains(&e) {
        out.push_str("0.");
        for _ in 0..(-e - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else if (0..7).contains(&e) {
        let point_at = (e + 1) as usize;
        if (n as usize) < point_at + 1 {
            out.push_str(&digits);
            for _ in 0..(point_at - n as usize) {
                out.push('0');
            }
            out.push_str(".0");
        } else {
            out.push_str(&digits[..point_at]);
            out.push('.');
            out.push_str(&digits[point_at..]);
        }
    } else {
        out.push((ds[0]) as char);
        out.push('.');
        if n == 1 {
            out.push('0');
        } else {
            out.push_str(&digits[1..]);
        }
        out.push('E');
        write!(out, "{}", e).expect("writing to a String cannot fail");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(digits: u64, exp10: i32) -> Decimal {
        Decimal { digits, exp10 }
    }

    #[test]
    fn plain_no_leading_zeros() {
        assert_eq!(format_decimal(d(1, 0), false), "1.0");
        assert_eq!(format_decimal(d(12, -1), false), "1.2");
        assert_eq!(format_decimal(d(1200000000000000000, -15), false), "1200.0");
    }

    #[test]
    fn plain_leading_zeros() {
        assert_eq!(format_decimal(d(1, -1), false), "0.1");
        assert_eq!(format_decimal(d(1234, -6), false), "0.001234");
    }

    #[test]
    fn scientific() {
        assert_eq!(format_decimal(d(1, 23), false), "1.0E23");
        assert_eq!(format_decimal(d(1234, -35), false), "1.234E-32");
    }

    #[test]
    fn negative_sign_is_prepended() {
        assert_eq!(format_decimal(d(3, 0), true), "-3.0");
    }

    #[test]
    fn two_digit_tiny_case_keeps_forced_length() {
        // s=7 binary32 tiny case: (70, -46) represents 7.0e-45. Stripping
        // the trailing zero down to (7, -45) and re-applying the `n == 1`
        // rule in the scientific branch must still print "7.0E-45".
        assert_eq!(format_decimal(d(70, -46), false), "7.0E-45");
    }
}
