//! Affine arithmetic tests on the textbook curve `y² = x³ + 2x + 2 (mod 17)`.

use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use proptest::prelude::*;
use weierstrass::{AffinePoint, CurveParams, Error, WeierstrassCurve, modarith};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Toy17;

static TOY17: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new(
        BigUint::from(17u8),
        BigUint::from(2u8),
        BigUint::from(2u8),
        (BigUint::from(5u8), BigUint::from(1u8)),
        BigUint::from(19u8),
    )
    .expect("valid curve")
});

impl WeierstrassCurve for Toy17 {
    fn params() -> &'static CurveParams {
        &TOY17
    }
}

/// `y² = x³ + x + 10 (mod 15)`: the modulus is composite, so some slopes are
/// not invertible.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Composite15;

static COMPOSITE15: Lazy<CurveParams> = Lazy::new(|| {
    CurveParams::new_unchecked(
        BigUint::from(15u8),
        BigUint::from(1u8),
        BigUint::from(10u8),
        (BigUint::from(0u8), BigUint::from(5u8)),
        BigUint::from(7u8),
    )
});

impl WeierstrassCurve for Composite15 {
    fn params() -> &'static CurveParams {
        &COMPOSITE15
    }
}

type Point = AffinePoint<Toy17>;

/// `k·G` for `k = 1..=18`.
const MULTIPLES: [(u8, u8); 18] = [
    (5, 1),
    (6, 3),
    (10, 6),
    (3, 1),
    (9, 16),
    (16, 13),
    (0, 6),
    (13, 7),
    (7, 6),
    (7, 11),
    (13, 10),
    (0, 11),
    (16, 4),
    (9, 1),
    (3, 16),
    (10, 11),
    (6, 14),
    (5, 16),
];

fn point(x: u8, y: u8) -> Point {
    Point::new(BigUint::from(x), BigUint::from(y)).unwrap()
}

fn all_points() -> impl Iterator<Item = Point> {
    core::iter::once(Point::identity()).chain(MULTIPLES.iter().map(|&(x, y)| point(x, y)))
}

#[test]
fn generator_matches_params() {
    assert_eq!(Point::generator(), point(5, 1));
    assert!(!Point::generator().is_identity());
    assert!(Point::identity().is_identity());
    assert_eq!(Point::default(), Point::identity());
}

#[test]
fn identity_addition() {
    for p in all_points() {
        assert_eq!(p.add(&Point::identity()).unwrap(), p);
        assert_eq!(Point::identity().add(&p).unwrap(), p);
    }
}

#[test]
fn inverse_point_sums_to_identity() {
    for &(x, y) in &MULTIPLES {
        let p = point(x, y);
        let inverse = point(x, 17 - y);
        assert!(p.add(&inverse).unwrap().is_identity());
        assert_eq!(-&p, inverse);
    }
}

#[test]
fn negation_of_identity() {
    assert!((-Point::identity()).is_identity());
}

#[test]
fn test_vector_repeated_add() {
    let generator = Point::generator();
    let mut p = generator.clone();

    for &(x, y) in &MULTIPLES {
        assert_eq!(p, point(x, y));
        p = p.add(&generator).unwrap();
    }

    assert!(p.is_identity());
}

#[test]
fn test_vector_scalar_mult() {
    let generator = Point::generator();

    for (k, &(x, y)) in MULTIPLES.iter().enumerate() {
        let p = generator.mul(&BigUint::from(k + 1)).unwrap();
        assert_eq!(p, point(x, y));
    }
}

#[test]
fn scalar_mult_boundaries() {
    let generator = Point::generator();
    assert!(generator.mul(&BigUint::from(0u8)).unwrap().is_identity());
    assert_eq!(generator.mul(&BigUint::from(1u8)).unwrap(), generator);
    assert!(generator.mul(&BigUint::from(19u8)).unwrap().is_identity());
    assert_eq!(generator.mul(&BigUint::from(20u8)).unwrap(), generator);
    assert!(Point::identity().mul(&BigUint::from(7u8)).unwrap().is_identity());
}

#[test]
fn add_vs_double() {
    for p in all_points() {
        assert_eq!(p.add(&p).unwrap(), p.double().unwrap());
    }
}

#[test]
fn rejects_invalid_points() {
    assert_eq!(
        Point::new(BigUint::from(5u8), BigUint::from(2u8)),
        Err(Error::PointNotOnCurve)
    );
    assert_eq!(
        Point::new(BigUint::from(22u8), BigUint::from(1u8)),
        Err(Error::CoordinateOutOfRange)
    );
}

#[test]
fn sec1_round_trip() {
    for p in all_points() {
        let bytes = p.to_sec1_bytes();
        assert_eq!(Point::from_sec1_bytes(&bytes).unwrap(), p);
    }

    assert_eq!(Point::generator().to_sec1_bytes(), hex!("040501"));
    assert_eq!(Point::identity().to_sec1_bytes(), [0x00]);
}

#[test]
fn sec1_rejects_malformed() {
    assert_eq!(Point::from_sec1_bytes(&[]), Err(Error::InvalidEncoding));
    assert_eq!(Point::from_sec1_bytes(&[0x02, 5]), Err(Error::InvalidEncoding));
    assert_eq!(Point::from_sec1_bytes(&[0x04, 5]), Err(Error::InvalidEncoding));
    assert_eq!(Point::from_sec1_bytes(&[0x00, 0]), Err(Error::InvalidEncoding));
    assert_eq!(
        Point::from_sec1_bytes(&[0x04, 5, 2]),
        Err(Error::PointNotOnCurve)
    );
}

#[test]
fn curve_validation() {
    let (p, a, b) = (BigUint::from(17u8), BigUint::from(2u8), BigUint::from(2u8));
    let g = (BigUint::from(5u8), BigUint::from(1u8));
    let n = BigUint::from(19u8);

    assert_eq!(
        CurveParams::new(BigUint::from(16u8), a.clone(), b.clone(), g.clone(), n.clone()),
        Err(Error::InvalidCurveModulus)
    );
    assert_eq!(
        CurveParams::new(p.clone(), BigUint::from(17u8), b.clone(), g.clone(), n.clone()),
        Err(Error::CoordinateOutOfRange)
    );
    assert_eq!(
        CurveParams::new(
            p.clone(),
            BigUint::from(0u8),
            BigUint::from(0u8),
            (BigUint::from(0u8), BigUint::from(0u8)),
            n.clone()
        ),
        Err(Error::SingularCurve)
    );
    assert_eq!(
        CurveParams::new(
            p.clone(),
            a.clone(),
            b.clone(),
            (BigUint::from(5u8), BigUint::from(2u8)),
            n.clone()
        ),
        Err(Error::PointNotOnCurve)
    );
    assert_eq!(
        CurveParams::new(p.clone(), a.clone(), b.clone(), g.clone(), BigUint::from(18u8)),
        Err(Error::InvalidGeneratorOrder)
    );
    assert_eq!(
        CurveParams::new(p.clone(), a.clone(), b.clone(), g.clone(), BigUint::from(1u8)),
        Err(Error::InvalidGeneratorOrder)
    );

    let params = CurveParams::new(p, a, b, g, n).unwrap();
    assert_eq!(params.field_bytes(), 1);
    assert_eq!(params.scalar_bytes(), 1);
}

#[test]
fn composite_modulus_surfaces_arithmetic_error() {
    let g = AffinePoint::<Composite15>::generator();
    assert_eq!(
        g.double(),
        Err(Error::Arithmetic(modarith::Error::NoModularInverse))
    );
}

proptest! {
    #[test]
    fn addition_is_commutative(i in 0usize..19, j in 0usize..19) {
        let p = all_points().nth(i).unwrap();
        let q = all_points().nth(j).unwrap();
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn addition_is_associative(i in 0usize..19, j in 0usize..19, k in 0usize..19) {
        let p = all_points().nth(i).unwrap();
        let q = all_points().nth(j).unwrap();
        let r = all_points().nth(k).unwrap();
        prop_assert_eq!(
            p.add(&q).unwrap().add(&r).unwrap(),
            p.add(&q.add(&r).unwrap()).unwrap()
        );
    }

    #[test]
    fn scalar_mult_is_additive(a in any::<u32>(), b in any::<u32>()) {
        let g = Point::generator();
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let lhs = g.mul(&(&a + &b)).unwrap();
        let rhs = g.mul(&a).unwrap().add(&g.mul(&b).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }
}
