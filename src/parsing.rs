//! # Parsing Utilities
//!
//! Small nom token parsers shared by the sentence classifier and the stock
//! field coercions.

use std::str::FromStr;

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit1},
    combinator::map_res,
    sequence::preceded,
};

/// Returns `true` for the characters allowed in talker, listener, sentence type
/// and manufacturer codes: ASCII letters, digits and `_`.
pub(crate) fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Matches exactly `n` code characters.
///
/// ```ignore
/// let res: IResult<_, _> = code(2).parse("GPGGA");
/// assert_eq!(res, Ok(("GGA", "GP")));
/// ```
pub(crate) fn code<'a>(
    n: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    take_while_m_n(n, n, is_word)
}

/// Matches exactly `n` ASCII digits and converts them to `T`.
pub(crate) fn fixed_digits<'a, T>(
    n: usize,
) -> impl Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>
where
    T: FromStr,
{
    map_res(take_while_m_n(n, n, |c: char| c.is_ascii_digit()), |s: &str| {
        s.parse::<T>()
    })
}

/// Matches a `.` followed by one or more digits and returns the digits.
pub(crate) fn fraction(i: &str) -> IResult<&str, &str> {
    preceded(char('.'), digit1).parse(i)
}

/// Converts the digits after a decimal point into nanoseconds.
///
/// Digits beyond nanosecond precision are truncated.
pub(crate) fn fraction_nanos(digits: &str) -> u32 {
    digits
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(9)
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code() {
        let res: IResult<_, _> = code(2).parse("GPGGA");
        assert_eq!(res, Ok(("GGA", "GP")));

        let res: IResult<_, _> = code(3).parse("G,GA");
        assert!(res.is_err());

        let res: IResult<_, _> = code(3).parse("a_1,");
        assert_eq!(res, Ok((",", "a_1")));
    }

    #[test]
    fn test_fixed_digits() {
        let res: IResult<_, u8> = fixed_digits(2).parse("184353");
        assert_eq!(res, Ok(("4353", 18)));

        let res: IResult<_, u8> = fixed_digits(2).parse("1a");
        assert!(res.is_err());
    }

    #[test]
    fn test_fraction_nanos() {
        assert_eq!(fraction_nanos("07"), 70_000_000);
        assert_eq!(fraction_nanos("3341"), 334_100_000);
        assert_eq!(fraction_nanos("1234567891"), 123_456_789);
    }
}
