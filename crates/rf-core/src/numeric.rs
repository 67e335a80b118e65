use crate::RfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. `-0.0` is accepted.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, RfError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(RfError::InvalidArg { what });
    }
    Ok(v)
}

/// `a * b / c` for finite `a, b >= 0` and `c > 0`, without spurious
/// overflow or underflow in the intermediate product.
///
/// Saturates to `inf` or `0.0` only when the true result is out of range.
pub fn mul_div(a: Real, b: Real, c: Real) -> Real {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let (ma, ea) = split_exponent(a);
    let (mb, eb) = split_exponent(b);
    let (mc, ec) = split_exponent(c);
    scale_by_pow2(ma * mb / mc, ea + eb - ec)
}

/// Positive finite `x` as `m * 2^e` with `m` in `[1, 2)`.
fn split_exponent(x: Real) -> (Real, i32) {
    const SUBNORMAL_SHIFT: i32 = 64;
    const EXP_MASK: u64 = 0x7ff << 52;

    let (x, shift) = if x < Real::MIN_POSITIVE {
        (x * 2.0_f64.powi(SUBNORMAL_SHIFT), SUBNORMAL_SHIFT)
    } else {
        (x, 0)
    };
    let bits = x.to_bits();
    let e = ((bits & EXP_MASK) >> 52) as i32 - 1023;
    let m = Real::from_bits((bits & !EXP_MASK) | (1023_u64 << 52));
    (m, e - shift)
}

// Multiplies in steps so no power of two leaves the normal range.
fn scale_by_pow2(mut m: Real, mut e: i32) -> Real {
    const STEP: i32 = 1000;
    while e > STEP && m.is_finite() {
        m *= 2.0_f64.powi(STEP);
        e -= STEP;
    }
    while e < -STEP && m != 0.0 {
        m *= 2.0_f64.powi(-STEP);
        e += STEP;
    }
    m * 2.0_f64.powi(e)
}
