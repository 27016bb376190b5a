//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;
    use exacta_integers::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn finite() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn any_rational() -> impl Strategy<Value = Rational> {
        prop_oneof![
            8 => finite(),
            1 => Just(Rational::nan()),
            1 => Just(Rational::infinity()),
            1 => Just(Rational::neg_infinity()),
        ]
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(n in any::<i64>(), d in any::<i64>()) {
            let r = Rational::from_i64(n, d);
            if d != 0 {
                let (num, den) = (r.numerator(), r.denominator());
                prop_assert!(num.gcd(&den).is_one());
                prop_assert!(den.is_positive());

                // n/d reduced by hand matches
                let g = Integer::new(n).gcd(&Integer::new(d));
                let sign = if d < 0 { Integer::new(-1) } else { Integer::one() };
                prop_assert_eq!(num, Integer::new(n) / g.clone() * sign.clone());
                prop_assert_eq!(den, Integer::new(d) / g * sign);
            }
        }

        #[test]
        fn reduction_is_idempotent(r in any_rational()) {
            let again = Rational::new(r.numerator(), r.denominator());
            prop_assert_eq!(again, r);
        }

        // Field axioms on finite values

        #[test]
        fn add_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn distributive(a in finite(), b in finite(), c in finite()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }

        // Sentinels

        #[test]
        fn nan_absorbs(x in any_rational()) {
            let nan = Rational::nan();
            prop_assert!((&nan + &x).is_nan());
            prop_assert!((&x - &nan).is_nan());
            prop_assert!((&nan * &x).is_nan());
            prop_assert!((&x / &nan).is_nan());
            prop_assert!((&nan % &x).is_nan());
        }

        #[test]
        fn finite_over_zero_is_signed_infinity(a in finite()) {
            let q = &a / &Rational::zero();
            match a.signum().unwrap() {
                1 => prop_assert_eq!(q, Rational::infinity()),
                -1 => prop_assert_eq!(q, Rational::neg_infinity()),
                _ => prop_assert!(q.is_nan()),
            }
        }

        // Floored division

        #[test]
        fn div_rem_reconstructs(a in finite(), b in finite()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b);
            prop_assert!(q.is_integer());
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.is_zero() || r.signum() == b.signum());
            prop_assert!(r.abs() < b.abs());
            prop_assert_eq!(q, (&a / &b).floor());
        }

        #[test]
        fn pow_matches_repeated_product(a in finite(), n in 0i64..12) {
            let expected: Rational = std::iter::repeat(a.clone()).take(n as usize).product();
            prop_assert_eq!(a.pow(n).unwrap(), expected);
        }

        // Ordering

        #[test]
        fn ordering_is_total_and_consistent(a in any_rational(), b in any_rational()) {
            let lt = a < b;
            let eq = a == b;
            let gt = a > b;
            prop_assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
            if a.is_finite() && b.is_finite() {
                prop_assert_eq!(lt, (&a - &b).is_negative());
            }
        }

        #[test]
        fn sorting_restores_known_order(
            shuffled in Just(vec![
                Rational::nan(),
                Rational::neg_infinity(),
                Rational::from_i64(-1000, 3),
                Rational::from_i64(-1, 2),
                Rational::zero(),
                Rational::from_i64(1, 1000),
                Rational::from_i64(2, 3),
                Rational::one(),
                Rational::from_i64(1001, 1000),
                Rational::from(1_000_000),
                Rational::infinity(),
            ]).prop_shuffle()
        ) {
            let mut sorted = shuffled.clone();
            sorted.sort();
            for pair in sorted.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            prop_assert!(sorted[0].is_nan());
            prop_assert_eq!(sorted.len(), shuffled.len());
        }

        // Text form

        #[test]
        fn text_round_trip(r in any_rational()) {
            let parsed: Rational = r.to_string().parse().unwrap();
            prop_assert_eq!(parsed, r);
        }

        #[test]
        fn float_conversion_is_exact(k in -1_000_000_000i64..1_000_000_000i64, shift in 0i32..40) {
            #[allow(clippy::cast_precision_loss)]
            let x = k as f64 / 2f64.powi(shift);
            let r = Rational::from(x);
            prop_assert_eq!(r.clone(), Rational::new(Integer::new(k), Integer::new(2).pow(shift.unsigned_abs())));
            prop_assert_eq!(r.to_f64(), x);
        }
    }
}
