//! Property-based tests for scaled decimals.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{BigDecimal, DecimalContext};
    use exacta_integers::Integer;

    // Decimals with up to six fractional digits, built from their parts.
    fn decimal() -> impl Strategy<Value = (i64, i64)> {
        (-1_000_000_000i64..1_000_000_000i64, -6i64..6i64)
    }

    fn build((coefficient, exponent): (i64, i64)) -> BigDecimal {
        BigDecimal::new(Integer::new(coefficient), Integer::new(exponent))
    }

    // Value scaled by 10^6, exact for the strategy above.
    fn micros((coefficient, exponent): (i64, i64)) -> i128 {
        let coefficient = i128::from(coefficient);
        let shift = u32::try_from(exponent + 6).unwrap();
        coefficient * 10i128.pow(shift)
    }

    proptest! {
        #[test]
        fn construction_is_canonical(parts in decimal()) {
            let d = build(parts);
            let ten = Integer::new(10);
            if d.is_zero() {
                prop_assert!(d.exponent().is_zero());
            } else {
                prop_assert!(!(d.coefficient() % &ten).is_zero());
            }
            prop_assert_eq!(BigDecimal::new(d.coefficient().clone(), d.exponent().clone()), d);
        }

        #[test]
        fn add_sub_are_exact(a in decimal(), b in decimal()) {
            let (x, y) = (build(a), build(b));
            let sum = &x + &y;
            let difference = &x - &y;
            prop_assert_eq!(&sum - &y, x.clone());
            prop_assert_eq!(&difference + &y, x.clone());
            prop_assert_eq!(sum.cmp(&difference), micros(b).cmp(&0));
        }

        #[test]
        fn ordering_matches_values(a in decimal(), b in decimal()) {
            prop_assert_eq!(build(a).cmp(&build(b)), micros(a).cmp(&micros(b)));
        }

        #[test]
        fn mul_then_div_recovers(a in decimal(), b in decimal()) {
            let (x, y) = (build(a), build(b));
            prop_assume!(!y.is_zero());
            let product = &x * &y;
            prop_assert_eq!(product.checked_div(&y).unwrap(), x);
        }

        #[test]
        fn division_is_within_one_ulp(
            n in -100_000i64..100_000i64,
            d in prop_oneof![(-999i64..=-1i64), (1i64..=999i64)],
            precision in 1usize..40,
            chunk in 1usize..12,
        ) {
            let ctx = DecimalContext::default().with_precision(precision).with_chunk_digits(chunk);
            let (x, y) = (BigDecimal::from(n), BigDecimal::from(d));
            let q = x.div_with(&y, &ctx).unwrap();

            // Digits are counted from the quotient of the coefficients, so
            // the last retained place is 10^(ex - ey - precision).
            let error = (&(&q * &y) - &x).abs();
            let last_place = x.exponent() - y.exponent() - Integer::from(precision);
            let bound = BigDecimal::new(
                Integer::new(d.abs()) * Integer::new(5),
                last_place - Integer::new(1),
            );
            prop_assert!(error <= bound, "{} / {} = {}", n, d, q);
        }

        #[test]
        fn text_round_trip(parts in decimal()) {
            let d = build(parts);
            let parsed: BigDecimal = d.to_string().parse().unwrap();
            prop_assert_eq!(parsed, d);
        }
    }
}
