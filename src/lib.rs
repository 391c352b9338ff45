//! Shortest round-trip decimal formatting of IEEE 754 `f32`/`f64`.
//!
//! This crate implements the Schubfach algorithm (due to Raffaello
//! Giulietti): given a finite binary floating-point value, it finds the
//! decimal string with the fewest significant digits that, parsed back
//! under round-to-nearest-even, reproduces the exact original value.
//! Digit selection is done with fixed-width integer multiplications and
//! shifts only — no arbitrary-precision arithmetic and no runtime
//! division.
//!
//! The functionality of this crate is provided through the two free
//! functions [`format_double`] and [`format_float`], and through the
//! [`FloatExt`] trait for method-call ergonomics.
//!
//! # Example
//!
//! ```
//! use schubfach::FloatExt as _;
//!
//! assert_eq!(schubfach::format_double(1.0), "1.0");
//! assert_eq!(schubfach::format_double(0.1), "0.1");
//! assert_eq!(schubfach::format_double(1.0e23), "1.0E23");
//! assert_eq!(schubfach::format_double(f64::NAN), "NaN");
//!
//! assert_eq!((-1200.0f64).to_shortest_string(), "-1200.0");
//! assert_eq!(1.4e-45f32.to_shortest_string(), "1.4E-45");
//! ```

#![deny(
    rust_2018_idioms,
    trivial_numeric_casts,
    unreachable_pub,
    unused_must_use,
    unused_qualifications
)]
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod formatter;
mod int_math;
mod kernel;
mod mul_hi;
mod pow10_table;

#[cfg(test)]
mod tests;

use alloc::string::String;

use decode::{Classified, DecodableFloat};

mod sealed {
    pub trait Sealed {}
}

/// Converts `v` to the shortest decimal string that round-trips back to
/// `v` under round-to-nearest-even parsing.
///
/// # Example
///
/// ```
/// assert_eq!(schubfach::format_double(1200.0), "1200.0");
/// assert_eq!(schubfach::format_double(-0.0), "-0.0");
/// assert_eq!(schubfach::format_double(f64::INFINITY), "Infinity");
/// ```
pub fn format_double(v: f64) -> String {
    format_generic(v)
}

/// Converts `v` to the shortest decimal string that round-trips back to
/// `v` under round-to-nearest-even parsing.
///
/// # Example
///
/// ```
/// assert_eq!(schubfach::format_float(0.1f32), "0.1");
/// assert_eq!(schubfach::format_float(3.4028235e38f32), "3.4028235E38");
/// ```
pub fn format_float(v: f32) -> String {
    format_generic(v)
}

fn format_generic<T: DecodableFloat>(v: T) -> String {
    match v.classify() {
        Classified::Nan => String::from("NaN"),
        Classified::Inf { sign } => {
            String::from(if sign { "-Infinity" } else { "Infinity" })
        }
        Classified::Zero { sign } => String::from(if sign { "-0.0" } else { "0.0" }),
        Classified::Finite { sign, q, c } => {
            let decimal = kernel::select_decimal(q, c, &T::PARAMS);
            formatter::format_decimal(decimal, sign)
        }
    }
}

/// Extends `f32` and `f64` with a method-call form of [`format_double`]
/// and [`format_float`].
pub trait FloatExt: sealed::Sealed + Sized {
    /// Formats `self` as the shortest decimal string that round-trips
    /// back to `self` under round-to-nearest-even parsing.
    ///
    /// # Example
    ///
    /// ```
    /// use schubfach::FloatExt as _;
    ///
    /// assert_eq!(12.34f64.to_shortest_string(), "12.34");
    /// assert_eq!(0.00401f64.to_shortest_string(), "0.00401");
    /// assert_eq!(330.0f64.to_shortest_string(), "330.0");
    /// assert_eq!(4.58e31f64.to_shortest_string(), "4.58E31");
    /// ```
    fn to_shortest_string(self) -> String;
}

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}

impl FloatExt for f32 {
    fn to_shortest_string(self) -> String {
        format_float(self)
    }
}

impl FloatExt for f64 {
    fn to_shortest_string(self) -> String {
        format_double(self)
    }
}
