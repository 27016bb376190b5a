//! Property-based tests for continued fractions.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::ContinuedFraction;
    use exacta_integers::Integer;
    use exacta_rational::Rational;

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
    }

    fn non_square() -> impl Strategy<Value = i64> {
        (2i64..1_000_000i64).prop_filter("perfect square", |n| {
            !Integer::new(*n).is_perfect_square()
        })
    }

    proptest! {
        #[test]
        fn rational_round_trip(n in -1_000_000i64..1_000_000i64, d in non_zero_int()) {
            let value = Rational::from_i64(n, d);
            let cf = ContinuedFraction::from_rational(&value).unwrap();
            prop_assert!(cf.non_periodic().iter().all(Integer::is_positive));
            prop_assert_eq!(cf.to_rational().unwrap(), value.clone());
            prop_assert_eq!(cf.floor(), &value.floor().to_integer().unwrap());
        }

        #[test]
        fn convergents_alternate_around_value(n in 1i64..1_000_000i64, d in 1i64..100_000i64) {
            let value = Rational::from_i64(n, d);
            let cf = ContinuedFraction::from_rational(&value).unwrap();
            let convergents: Vec<_> = cf.convergents().collect();
            for (i, c) in convergents.iter().enumerate() {
                let expected = if i == convergents.len() - 1 {
                    std::cmp::Ordering::Equal
                } else if i % 2 == 0 {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Greater
                };
                prop_assert_eq!(c.cmp(&value), expected, "convergent {} = {}", i, c);
            }
        }

        #[test]
        fn consecutive_convergents_are_adjacent(n in non_square()) {
            // h_n k_{n-1} - h_{n-1} k_n = (-1)^(n-1)
            let cf = ContinuedFraction::sqrt(&Integer::new(n)).unwrap();
            let convergents: Vec<_> = cf.convergents().take(12).collect();
            for (i, pair) in convergents.windows(2).enumerate() {
                let det = pair[1].numerator() * pair[0].denominator()
                    - pair[0].numerator() * pair[1].denominator();
                let expected = if i % 2 == 0 { Integer::one() } else { Integer::new(-1) };
                prop_assert_eq!(det, expected);
            }
        }

        #[test]
        fn sqrt_convergents_solve_pell_like_equations(n in non_square()) {
            let n = Integer::new(n);
            let cf = ContinuedFraction::sqrt(&n).unwrap();
            let bound = cf.floor() * &Integer::new(2);
            let mut previous_error: Option<Rational> = None;

            for (i, c) in cf.convergents().take(16).enumerate() {
                let (p, q) = (c.numerator(), c.denominator());
                let residue = &(&p * &p) - &(&n * &(&q * &q));

                // Sign alternates: below the root on even steps, above on odd.
                let expected_sign = if i % 2 == 0 { -1 } else { 1 };
                prop_assert_eq!(residue.signum(), expected_sign);
                prop_assert!(residue.abs() <= bound);

                // (p/q)^2 approaches n.
                let error = (c.pow(2).unwrap() - Rational::from_integer(n.clone())).abs();
                if let Some(previous) = previous_error {
                    prop_assert!(error < previous);
                    prop_assert!(error.is_finite() && !error.is_zero());
                }
                previous_error = Some(error);
            }
        }
    }
}
