//! P-192 group law tests.

use hex_literal::hex;
use num_bigint::BigUint;
use p192_ecdsa::{AffinePoint, NistP192, WeierstrassCurve};
use proptest::prelude::*;

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn n() -> &'static BigUint {
    NistP192::params().n()
}

#[test]
fn generator_has_order_n() {
    let g = AffinePoint::generator();
    assert!(g.mul(n()).unwrap().is_identity());
    assert_eq!(g.mul(&(n() + 1u8)).unwrap(), g);
}

#[test]
fn small_scalars() {
    let g = AffinePoint::generator();
    assert!(g.mul(&BigUint::default()).unwrap().is_identity());
    assert_eq!(g.mul(&BigUint::from(1u8)).unwrap(), g);
    assert!(AffinePoint::identity().mul(n()).unwrap().is_identity());
}

#[test]
fn double_generator() {
    let expected = AffinePoint::new(
        uint(&hex!("dafebf5828783f2ad35534631588a3f629a70fb16982a888")),
        uint(&hex!("dd6bda0d993da0fa46b27bbc141b868f59331afa5c7e93ab")),
    )
    .unwrap();

    let g = AffinePoint::generator();
    assert_eq!(g.double().unwrap(), expected);
    assert_eq!(g.add(&g).unwrap(), expected);
    assert_eq!(g.mul(&BigUint::from(2u8)).unwrap(), expected);
}

#[test]
fn inverse_cancels() {
    let g = AffinePoint::generator();
    let (x, y) = g.coordinates().unwrap();
    let p = NistP192::params().p();

    let neg = AffinePoint::new(x.clone(), p - y).unwrap();
    assert_eq!(neg, -&g);
    assert!(g.add(&neg).unwrap().is_identity());
    assert_eq!(g.mul(&(n() - 1u8)).unwrap(), neg);
}

#[test]
fn identity_is_neutral() {
    let g = AffinePoint::generator();
    let o = AffinePoint::identity();
    assert_eq!(g.add(&o).unwrap(), g);
    assert_eq!(o.add(&g).unwrap(), g);
    assert!(o.add(&o).unwrap().is_identity());
    assert!(o.double().unwrap().is_identity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_multiplication_distributes(a in any::<u64>(), b in any::<u64>()) {
        let g = AffinePoint::generator();
        let (a, b) = (BigUint::from(a), BigUint::from(b));

        let lhs = g.mul(&(&a + &b)).unwrap();
        let rhs = g.mul(&a).unwrap().add(&g.mul(&b).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}
