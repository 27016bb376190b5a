//! Property-based tests for arbitrary precision integers.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        // Floored division

        #[test]
        fn div_rem_floor_reconstructs(a in small_int(), b in non_zero_int()) {
            let (q, r) = Integer::new(a).div_rem_floor(&Integer::new(b));
            prop_assert_eq!(q.clone() * Integer::new(b) + r.clone(), Integer::new(a));
            prop_assert!(r.is_zero() || r.signum() == Integer::new(b).signum());
            prop_assert!(r.abs() < Integer::new(b).abs());
            prop_assert_eq!(q.to_i64(), Some(a.div_euclid(b) - i64::from(b < 0 && a.rem_euclid(b) != 0)));
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g.clone()).is_zero());
            prop_assert!(g.is_positive());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Square roots

        #[test]
        fn sqrt_floor_brackets(n in 0u64..u64::MAX) {
            let n = Integer::from(n);
            let root = n.sqrt_floor().unwrap();
            let next = root.clone() + Integer::new(1);
            prop_assert!(&root * &root <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn square_is_perfect(n in 0i64..3_000_000_000i64) {
            let n = Integer::new(n);
            prop_assert!((&n * &n).is_perfect_square());
        }

        // Text form and digit counts

        #[test]
        fn decimal_digits_match_rendering(digits in "[1-9][0-9]{0,300}", negative: bool) {
            let text = if negative { format!("-{digits}") } else { digits.clone() };
            let n: Integer = text.parse().unwrap();
            prop_assert_eq!(n.to_string(), text);
            prop_assert_eq!(n.decimal_digits(), digits.len());
        }

        #[test]
        fn malformed_text_is_rejected(body in "[0-9]{1,8}", junk in "[-+_ .xe]") {
            let text = format!("{body}{junk}{body}");
            prop_assert!(text.parse::<Integer>().is_err());
        }
    }
}
