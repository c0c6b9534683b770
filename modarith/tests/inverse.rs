//! Modular inversion property tests.

use modarith::{
    Error, gcd, mod_inverse,
    num_bigint::{BigInt, Sign},
    reduce,
};
use proptest::prelude::*;

prop_compose! {
    fn modulus()(bytes in any::<[u8; 24]>()) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &bytes) + 2
    }
}

prop_compose! {
    fn value()(bytes in any::<[u8; 32]>(), negative in any::<bool>()) -> BigInt {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_bytes_be(sign, &bytes)
    }
}

proptest! {
    #[test]
    fn inverse_multiplies_to_one(k in value(), m in modulus()) {
        match mod_inverse(&k, &m) {
            Ok(inverse) => {
                prop_assert!(inverse >= BigInt::from(0));
                prop_assert!(inverse < m);
                prop_assert_eq!(reduce(&(&k * &inverse), &m).unwrap(), BigInt::from(1));
            }
            Err(err) => {
                prop_assert_eq!(err, Error::NoModularInverse);
                prop_assert_ne!(gcd(&k, &m), BigInt::from(1));
            }
        }
    }

    #[test]
    fn gcd_with_zero_is_identity(a in any::<u64>()) {
        prop_assert_eq!(gcd(&BigInt::from(a), &BigInt::from(0)), BigInt::from(a));
    }

    #[test]
    fn gcd_divides_both(a in any::<u64>(), b in 1..u64::MAX) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let d = gcd(&a, &b);
        prop_assert_eq!(&a % &d, BigInt::from(0));
        prop_assert_eq!(&b % &d, BigInt::from(0));
    }

    #[test]
    fn reduce_lands_in_range(x in value(), m in modulus()) {
        let r = reduce(&x, &m).unwrap();
        prop_assert!(r >= BigInt::from(0));
        prop_assert!(r < m);
        prop_assert_eq!((&x - &r) % &m, BigInt::from(0));
    }
}
