//! Elligator2 mapping for Edwards25519 (RFC 9380 §G.2).
//!
//! A field element is first mapped onto curve25519 with the straight-line
//! Elligator2 procedure (Z = 2, J = 486662), then carried to Edwards form
//! through the birational map. Every branch is a constant-time selection,
//! so the routine is uniform regardless of which candidate square root
//! survives.

use subtle::{ConditionallySelectable, ConstantTimeEq};

use super::field25519::FieldElement;

/// Montgomery coefficient J = 486662 of curve25519.
const J: FieldElement = FieldElement([486_662, 0, 0, 0, 0]);

/// 2^((p+3)/8), the square-root candidate multiplier.
const C2: FieldElement = FieldElement([
    1_718_705_420_411_057,
    234_908_883_556_509,
    2_233_514_472_574_048,
    2_117_202_627_021_982,
    765_476_049_583_133,
]);

/// sqrt(-486664) with even parity, the curve25519 -> edwards25519 scaling
/// constant.
const SQRT_NEG_486664: FieldElement = FieldElement([
    1_693_982_333_959_686,
    608_509_411_481_997,
    2_235_573_344_831_311,
    947_681_270_984_193,
    266_558_006_233_600,
]);

/// Map a field element to an affine edwards25519 point.
///
/// The result lies on the curve but not necessarily in the prime-order
/// subgroup; callers clear the cofactor.
pub fn map_to_edwards(u: &FieldElement) -> (FieldElement, FieldElement) {
    let (xmn, xmd, ymn) = map_to_curve25519(u);
    // yMd = 1, so the Edwards denominators are xMd * yMn and xMn + xMd.
    let mut xn = xmn * SQRT_NEG_486664;
    let mut xd = xmd * ymn;
    let mut yn = xmn - xmd;
    let mut yd = xmn + xmd;

    // Exceptional cases (yM = 0 or xM = -1) land on the neutral element.
    let degenerate = (xd * yd).is_zero();
    xn = FieldElement::conditional_select(&xn, &FieldElement::ZERO, degenerate);
    xd = FieldElement::conditional_select(&xd, &FieldElement::ONE, degenerate);
    yn = FieldElement::conditional_select(&yn, &FieldElement::ONE, degenerate);
    yd = FieldElement::conditional_select(&yd, &FieldElement::ONE, degenerate);

    (xn * xd.invert(), yn * yd.invert())
}

/// Straight-line Elligator2 onto curve25519 (RFC 9380 §G.2.1).
///
/// Returns the fraction (xn : xd) of the Montgomery x-coordinate together
/// with the y-coordinate (denominator 1).
fn map_to_curve25519(u: &FieldElement) -> (FieldElement, FieldElement, FieldElement) {
    let mut tv1 = u.square();
    tv1 = tv1 + tv1;
    let xd = tv1 + FieldElement::ONE;
    let x1n = -J;
    let mut tv2 = xd.square();
    let gxd = tv2 * xd;
    let mut gx1 = J * tv1;
    gx1 = gx1 * x1n;
    gx1 = gx1 + tv2;
    gx1 = gx1 * x1n;
    let mut tv3 = gxd.square();
    tv2 = tv3.square();
    tv3 = tv3 * gxd;
    tv3 = tv3 * gx1;
    tv2 = tv2 * tv3;
    let mut y11 = tv2.pow_p58();
    y11 = y11 * tv3;
    let y12 = y11 * FieldElement::SQRT_M1;
    tv2 = y11.square() * gxd;
    let e1 = tv2.ct_eq(&gx1);
    let y1 = FieldElement::conditional_select(&y12, &y11, e1);
    let x2n = x1n * tv1;
    let mut y21 = y11 * *u;
    y21 = y21 * C2;
    let y22 = y21 * FieldElement::SQRT_M1;
    let gx2 = gx1 * tv1;
    tv2 = y21.square() * gxd;
    let e2 = tv2.ct_eq(&gx2);
    let y2 = FieldElement::conditional_select(&y22, &y21, e2);
    tv2 = y1.square() * gxd;
    let e3 = tv2.ct_eq(&gx1);
    let xn = FieldElement::conditional_select(&x2n, &x1n, e3);
    let mut y = FieldElement::conditional_select(&y2, &y1, e3);
    // gx1 is square exactly when y must be negative
    let e4 = y.is_negative();
    let y_neg = -y;
    y = FieldElement::conditional_select(&y, &y_neg, e3 ^ e4);
    (xn, xd, y)
}
