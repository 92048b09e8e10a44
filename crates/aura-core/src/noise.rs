//! 3D simplex noise.
//!
//! Gradient selection uses the mod-289 permutation polynomial, so no lookup
//! table or seed is needed and the field is identical on every platform. The
//! output stays within roughly \[-1, 1\].

use glam::Vec3;

const SKEW: f32 = 1.0 / 3.0;
const UNSKEW: f32 = 1.0 / 6.0;
const FALLOFF: f32 = 0.6;
const OUTPUT_SCALE: f32 = 42.0;

#[inline]
fn mod289(x: f32) -> f32 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: f32) -> f32 {
    mod289((x * 34.0 + 1.0) * x)
}

#[inline]
fn taylor_inv_sqrt(r: f32) -> f32 {
    1.792_842_9 - 0.853_734_7 * r
}

/// 1.0 when `x >= edge`, else 0.0.
#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

/// Simplex noise at `v`.
pub fn simplex3(v: Vec3) -> f32 {
    // first corner
    let i = (v + Vec3::splat(v.dot(Vec3::splat(SKEW)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(UNSKEW)));

    // the other two inner corners of the simplex
    let g = Vec3::new(step(x0.y, x0.x), step(x0.z, x0.y), step(x0.x, x0.z));
    let l = Vec3::ONE - g;
    let l_zxy = Vec3::new(l.z, l.x, l.y);
    let i1 = g.min(l_zxy);
    let i2 = g.max(l_zxy);

    let corners = [
        x0,
        x0 - i1 + Vec3::splat(UNSKEW),
        x0 - i2 + Vec3::splat(SKEW),
        x0 - Vec3::splat(0.5),
    ];
    let offsets = [Vec3::ZERO, i1, i2, Vec3::ONE];

    let i = Vec3::new(mod289(i.x), mod289(i.y), mod289(i.z));

    // 7x7 points over a square, mapped onto an octahedron
    let ns = Vec3::new(2.0 / 7.0, 0.5 / 7.0 - 1.0, 1.0 / 7.0);

    let mut sum = 0.0;
    for (x, o) in corners.iter().zip(offsets.iter()) {
        let p = permute(permute(permute(i.z + o.z) + i.y + o.y) + i.x + o.x);
        let j = p - 49.0 * (p * ns.z * ns.z).floor();
        let gx_ = (j * ns.z).floor();
        let gy_ = (j - 7.0 * gx_).floor();
        let gx = gx_ * ns.x + ns.y;
        let gy = gy_ * ns.x + ns.y;
        let h = 1.0 - gx.abs() - gy.abs();
        let sh = -step(h, 0.0);
        let grad = Vec3::new(
            gx + ((gx.floor() * 2.0) + 1.0) * sh,
            gy + ((gy.floor() * 2.0) + 1.0) * sh,
            h,
        );
        let grad = grad * taylor_inv_sqrt(grad.length_squared());

        let m = (FALLOFF - x.length_squared()).max(0.0);
        let m2 = m * m;
        sum += m2 * m2 * grad.dot(*x);
    }
    OUTPUT_SCALE * sum
}
