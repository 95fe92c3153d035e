//! Fixed-point division
//!
//! Every division in the engine produces exactly `SCALE` fractional digits,
//! rounded half-up (ties away from zero). Multiplications and additions
//! stay exact; only division rounds.
//!
//! The quotient is computed by long division on the unsigned mantissas:
//!
//! ```text
//! a·10^-sa / b·10^-sb · 10^s  =  a · 10^(s + sb - sa) / b
//! ```
//!
//! One digit past the last kept place is enough to round half-up exactly.
//! A quotient too large to carry `SCALE` places in a `Decimal` keeps as many
//! places as fit.

use gbce_ports::{MarketError, MarketResult};
use rust_decimal::Decimal;

/// Digits kept after the decimal point by every division
pub const SCALE: u32 = 16;

/// Divide and round half-up to `SCALE` places
pub fn div_half_up(dividend: Decimal, divisor: Decimal) -> MarketResult<Decimal> {
    if divisor.is_zero() {
        return Err(MarketError::DivisionByZero);
    }

    let negative = (dividend.mantissa() < 0) != (divisor.mantissa() < 0);
    let a = dividend.mantissa().unsigned_abs();
    let b = divisor.mantissa().unsigned_abs();
    let shift = divisor.scale() as i32 - dividend.scale() as i32;

    for scale in (0..=SCALE).rev() {
        let Some(mantissa) = rounded_quotient(a, b, scale as i32 + shift)
            .and_then(|m| i128::try_from(m).ok())
        else {
            continue;
        };
        let signed = if negative { -mantissa } else { mantissa };
        if let Ok(quotient) = Decimal::try_from_i128_with_scale(signed, scale) {
            return Ok(quotient);
        }
    }

    Err(MarketError::ArithmeticOverflow)
}

/// `a · 10^exponent / b` rounded half-up, `None` when it outgrows `u128`
fn rounded_quotient(a: u128, b: u128, exponent: i32) -> Option<u128> {
    let digits = exponent + 1;
    let truncated = if digits >= 0 {
        // remainder < b < 2^96, so remainder * 10 cannot overflow
        let mut quotient = a / b;
        let mut remainder = a % b;
        for _ in 0..digits {
            remainder *= 10;
            quotient = quotient.checked_mul(10)?.checked_add(remainder / b)?;
            remainder %= b;
        }
        quotient
    } else {
        // floor(floor(a / m) / b) == floor(a / (m * b))
        a / 10u128.checked_pow(digits.unsigned_abs())? / b
    };

    Some(truncated / 10 + u128::from(truncated % 10 >= 5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_terminating_division() {
        assert_eq!(div_half_up(dec!(8), dec!(10)).unwrap(), dec!(0.8));
        assert_eq!(div_half_up(dec!(10), dec!(0.8)).unwrap(), dec!(12.5));
        assert_eq!(div_half_up(dec!(60), dec!(5)).unwrap(), dec!(12));
    }

    #[test]
    fn test_result_carries_sixteen_places() {
        let q = div_half_up(dec!(1), dec!(4)).unwrap();
        assert_eq!(q.scale(), SCALE);
        assert_eq!(q, dec!(0.25));
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(
            div_half_up(dec!(1), dec!(3)).unwrap(),
            dec!(0.3333333333333333)
        );
    }

    #[test]
    fn test_rounds_up_above_half() {
        assert_eq!(
            div_half_up(dec!(2), dec!(3)).unwrap(),
            dec!(0.6666666666666667)
        );
    }

    #[test]
    fn test_signs() {
        assert_eq!(
            div_half_up(dec!(-2), dec!(3)).unwrap(),
            dec!(-0.6666666666666667)
        );
        assert_eq!(
            div_half_up(dec!(2), dec!(-3)).unwrap(),
            dec!(-0.6666666666666667)
        );
        assert_eq!(
            div_half_up(dec!(-2), dec!(-3)).unwrap(),
            dec!(0.6666666666666667)
        );
    }

    #[test]
    fn test_exact_tie_rounds_away_from_zero() {
        // 0.00000000000000005 is exactly half a unit in the last place
        assert_eq!(
            div_half_up(dec!(0.00000000000000005), dec!(1)).unwrap(),
            dec!(0.0000000000000001)
        );
        assert_eq!(
            div_half_up(dec!(-0.00000000000000005), dec!(1)).unwrap(),
            dec!(-0.0000000000000001)
        );
        // half-even would give ...2 here
        assert_eq!(
            div_half_up(dec!(0.00000000000000025), dec!(1)).unwrap(),
            dec!(0.0000000000000003)
        );
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        // 1.0000000000000000 49999999999999999...
        let q = div_half_up(dec!(1.00000000000000015), dec!(1.0000000000000001)).unwrap();
        assert_eq!(q, dec!(1.0000000000000000));
        assert_eq!(q.scale(), SCALE);
    }

    #[test]
    fn test_many_significant_digits_in_divisor() {
        // 8 / 99.999999 = 0.0800000008000000 08...
        let dividend_yield = div_half_up(dec!(8), dec!(99.999999)).unwrap();
        assert_eq!(dividend_yield, dec!(0.0800000008000000));
        // 99.999999 / 0.0800000008 = 1249.9999750000002499 999975...
        assert_eq!(
            div_half_up(dec!(99.999999), dividend_yield).unwrap(),
            dec!(1249.9999750000002500)
        );
    }

    #[test]
    fn test_large_quotient_keeps_the_places_that_fit() {
        let q = div_half_up(dec!(200000000000000000000), dec!(3)).unwrap();
        assert_eq!(q, dec!(66666666666666666666.666666667));
        assert_eq!(q.scale(), 9);

        assert_eq!(
            div_half_up(Decimal::MAX, dec!(7)).unwrap(),
            dec!(11318308930609191084791992905)
        );
        assert_eq!(
            div_half_up(dec!(1), dec!(0.0000000000000000000000000003)).unwrap(),
            dec!(3333333333333333333333333333.3)
        );
    }

    #[test]
    fn test_unrepresentable_quotient_overflows() {
        assert_eq!(
            div_half_up(Decimal::MAX, dec!(0.5)),
            Err(MarketError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_zero_dividend_is_zero() {
        assert_eq!(div_half_up(dec!(0), dec!(7)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_divisor_fails() {
        assert_eq!(
            div_half_up(dec!(1), Decimal::ZERO),
            Err(MarketError::DivisionByZero)
        );
    }
}
