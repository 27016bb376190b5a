//! Property-based tests for the rational to decimal bridge.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::prelude::*;

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)]
    }

    fn exact(x: &BigDecimal) -> Rational {
        let exponent = x.exponent().to_i64().unwrap();
        let scale = Integer::pow10(usize::try_from(exponent.unsigned_abs()).unwrap());
        if exponent >= 0 {
            Rational::from_integer(x.coefficient() * &scale)
        } else {
            Rational::new(x.coefficient().clone(), scale)
        }
    }

    proptest! {
        #[test]
        fn rounding_error_is_within_half_a_last_place(n in -1_000_000i64..1_000_000i64, d in non_zero_int()) {
            let ctx = DecimalContext::default().with_precision(60);
            let value = Rational::from_i64(n, d);
            let decimal = to_decimal(&value, &ctx).unwrap();

            let error = (&exact(&decimal) - &value).abs();
            let last_place = exact(&BigDecimal::new(Integer::one(), decimal.exponent().clone()));
            prop_assert!(&error * &Rational::from(2) <= last_place);
            let terminated = error.is_zero();
            prop_assert!(terminated || *decimal.exponent() <= Integer::new(-40));
        }

        #[test]
        fn terminating_fractions_are_exact(n in -1_000_000i64..1_000_000i64, twos in 0u32..20, fives in 0u32..20) {
            let denominator = Integer::new(2).pow(twos) * Integer::new(5).pow(fives);
            let value = Rational::new(Integer::new(n), denominator.clone());
            let decimal = to_decimal(&value, &DecimalContext::default()).unwrap();

            let divisor = BigDecimal::from_integer(denominator);
            prop_assert_eq!(&decimal * &divisor, BigDecimal::from(n));
            prop_assert_eq!(BigDecimal::from(n).checked_div(&divisor).unwrap(), decimal);
        }
    }
}
