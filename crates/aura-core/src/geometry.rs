//! Procedural point clouds for every [`ShapeKind`].
//!
//! Generation is pure apart from the random source: calling it twice yields
//! two different, statistically equivalent clouds. The distributions below are
//! part of the visual contract, so the constants are not tuning knobs.

use std::f32::consts::{PI, TAU};
use std::ops::Range;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::glyphs::GlyphTable;
use crate::shape::ShapeKind;

pub const SPHERE_RADIUS: f32 = 2.5;

pub const HEART_SCALE: f32 = 0.12;
pub const HEART_FILL_EXPONENT: f32 = 1.0 / 3.0;

pub const FLOWER_SCALE: f32 = 2.0;

pub const SATURN_RING_PROBABILITY: f32 = 0.7;
pub const SATURN_RING_INNER: f32 = 3.0;
pub const SATURN_RING_OUTER: f32 = 4.5;
pub const SATURN_RING_THICKNESS: f32 = 0.2;
pub const SATURN_TILT: f32 = PI / 6.0;
pub const SATURN_BODY_RADIUS: f32 = 1.5;

pub const NAME_TEXT: &str = "PRASAMSHA";
pub const NAME_HEART_FRACTION: f64 = 0.25;
pub const NAME_TEXT_FRACTION: f64 = 0.40;
pub const NAME_HEART_SCALE: f32 = 0.08;
pub const NAME_HEART_SHELL_SHARE: f32 = 0.85;
pub const NAME_HEART_OFFSET_X: f32 = 5.8;
pub const NAME_HEART_OFFSET_Y: f32 = 0.1;
pub const NAME_LETTER_SLOT: f32 = 0.95;
pub const NAME_LETTER_WIDTH: f32 = 0.75;
pub const NAME_LETTER_HEIGHT: f32 = 1.3;
pub const NAME_STROKE_THICKNESS: f32 = 0.07;
pub const NAME_STROKE_DEPTH: f32 = 0.05;
pub const NAME_BLOB_RADIUS: f32 = 0.1;
pub const NAME_HALO_INNER: f32 = 3.5;
pub const NAME_HALO_OUTER: f32 = 6.0;
pub const NAME_HALO_FLATTEN: f32 = 0.3;
pub const NAME_HALO_LIFT: f32 = 0.5;
pub const NAME_HALO_DEPTH: f32 = -1.0;

/// Generate `count` points for `shape`.
pub fn generate<R: Rng + ?Sized>(shape: ShapeKind, count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut out = vec![Vec3::ZERO; count];
    generate_into(shape, &mut out, rng);
    out
}

/// Same as [`generate`] but draws from the thread-local generator.
pub fn generate_with_thread_rng(shape: ShapeKind, count: usize) -> Vec<Vec3> {
    generate(shape, count, &mut rand::thread_rng())
}

/// Generate by shape name. Names that do not parse leave every point at the
/// origin.
pub fn generate_named<R: Rng + ?Sized>(name: &str, count: usize, rng: &mut R) -> Vec<Vec3> {
    match name.parse::<ShapeKind>() {
        Ok(shape) => generate(shape, count, rng),
        Err(e) => {
            log::warn!("[geometry] {e}; placing {count} points at the origin");
            vec![Vec3::ZERO; count]
        }
    }
}

/// Fill `out` with a fresh cloud for `shape`, one point per element.
pub fn generate_into<R: Rng + ?Sized>(shape: ShapeKind, out: &mut [Vec3], rng: &mut R) {
    match shape {
        ShapeKind::Sphere => out
            .iter_mut()
            .for_each(|p| *p = sphere_surface(rng, SPHERE_RADIUS)),
        ShapeKind::Heart => out.iter_mut().for_each(|p| *p = heart(rng)),
        ShapeKind::Flower => out.iter_mut().for_each(|p| *p = flower(rng)),
        ShapeKind::Saturn => out.iter_mut().for_each(|p| *p = saturn(rng)),
        ShapeKind::NameComposite => name_composite(out, rng),
    }
}

/// Uniform sample on the surface of a sphere via inverse CDF on the polar angle.
pub fn sphere_surface<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// The classic parametric heart, unscaled: x in \[-16, 16\], y in \[-17, ~12\].
#[inline]
pub fn heart_curve(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec2::new(x, y)
}

fn heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let fill = rng.gen::<f32>().powf(HEART_FILL_EXPONENT);
    let h = heart_curve(t) * HEART_SCALE * fill;
    // shallower near the cusp, deepest at the lobes
    let depth_scale = t.sin() * 0.5 + 0.5;
    let z = (rng.gen::<f32>() - 0.5) * 2.0 * HEART_SCALE * fill * depth_scale;
    Vec3::new(h.x, h.y, z)
}

/// Radius of the five-petal rose with two higher-harmonic ripples.
#[inline]
pub fn rose_radius(t: f32) -> f32 {
    1.0 + 0.28 * (5.0 * t + 0.4).sin()
        + 0.13 * (10.0 * t - 0.8).sin()
        + 0.07 * (15.0 * t + 1.9).sin()
}

fn flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let r = rose_radius(t) * rng.gen::<f32>() * FLOWER_SCALE;
    Vec3::new(r * t.cos(), r * t.sin(), 0.0)
}

fn saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() > 1.0 - SATURN_RING_PROBABILITY {
        let angle = rng.gen::<f32>() * TAU;
        let r = SATURN_RING_INNER + rng.gen::<f32>() * (SATURN_RING_OUTER - SATURN_RING_INNER);
        let x = r * angle.cos();
        let z = r * angle.sin();
        let y = (rng.gen::<f32>() - 0.5) * SATURN_RING_THICKNESS;
        let (s, c) = SATURN_TILT.sin_cos();
        Vec3::new(x, y * c - z * s, y * s + z * c)
    } else {
        sphere_surface(rng, SATURN_BODY_RADIUS)
    }
}

/// Index ranges of the four parts of the name composite.
///
/// Together they partition `0..count` in order, with no gaps or overlaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeSegments {
    pub left_heart: Range<usize>,
    pub text: Range<usize>,
    pub right_heart: Range<usize>,
    pub halo: Range<usize>,
}

/// Segment boundaries by cumulative truncation: left heart, then text, then
/// right heart; the halo takes whatever remains.
pub fn name_composite_segments(count: usize) -> CompositeSegments {
    let heart_len = (count as f64 * NAME_HEART_FRACTION) as usize;
    let text_len = (count as f64 * NAME_TEXT_FRACTION) as usize;
    let left_end = heart_len;
    let text_end = left_end + text_len;
    let right_end = (text_end + heart_len).min(count);
    CompositeSegments {
        left_heart: 0..left_end,
        text: left_end..text_end,
        right_heart: text_end..right_end,
        halo: right_end..count,
    }
}

fn name_composite<R: Rng + ?Sized>(out: &mut [Vec3], rng: &mut R) {
    let segments = name_composite_segments(out.len());

    let left = Vec2::new(-NAME_HEART_OFFSET_X, NAME_HEART_OFFSET_Y);
    let right = Vec2::new(NAME_HEART_OFFSET_X, NAME_HEART_OFFSET_Y);
    for p in &mut out[segments.left_heart.clone()] {
        *p = heart_cluster(rng, left);
    }

    text_points(NAME_TEXT, &mut out[segments.text.clone()], rng);

    for p in &mut out[segments.right_heart.clone()] {
        *p = heart_cluster(rng, right);
    }

    for p in &mut out[segments.halo.clone()] {
        *p = halo(rng);
    }
}

fn heart_cluster<R: Rng + ?Sized>(rng: &mut R, center: Vec2) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let scale = if rng.gen::<f32>() < NAME_HEART_SHELL_SHARE {
        NAME_HEART_SCALE
    } else {
        NAME_HEART_SCALE * rng.gen::<f32>().sqrt()
    };
    let h = heart_curve(t) * scale + center;
    let z = (rng.gen::<f32>() - 0.5) * NAME_HEART_SCALE;
    Vec3::new(h.x, h.y, z)
}

/// Spell `text` out of `out`, centred on the origin. Points are split evenly
/// across the letters in order; a character the stroke font lacks becomes a
/// small blob at its slot.
pub fn text_points<R: Rng + ?Sized>(text: &str, out: &mut [Vec3], rng: &mut R) {
    let glyphs = GlyphTable::shared();
    let letters: Vec<char> = text.chars().collect();
    let len = out.len();
    for (local, p) in out.iter_mut().enumerate() {
        let letter = local * letters.len() / len.max(1);
        *p = text_particle(rng, glyphs, &letters, letter);
    }
}

/// Horizontal centre of letter slot `index` when `count` letters are centred
/// on the origin.
#[inline]
pub fn letter_slot_center(index: usize, count: usize) -> f32 {
    (index as f32 - (count as f32 - 1.0) * 0.5) * NAME_LETTER_SLOT
}

fn text_particle<R: Rng + ?Sized>(
    rng: &mut R,
    glyphs: &GlyphTable,
    letters: &[char],
    index: usize,
) -> Vec3 {
    let center_x = letter_slot_center(index, letters.len().max(1));
    let depth = (rng.gen::<f32>() - 0.5) * 2.0 * NAME_STROKE_DEPTH;
    let strokes = letters.get(index).and_then(|c| glyphs.strokes(*c));
    match strokes {
        Some(strokes) if !strokes.is_empty() => {
            let stroke = strokes[rng.gen_range(0..strokes.len())];
            let along = stroke.point_at(rng.gen::<f32>());
            let across = stroke.normal() * (rng.gen::<f32>() - 0.5) * NAME_STROKE_THICKNESS;
            let g = along + across / Vec2::new(NAME_LETTER_WIDTH, NAME_LETTER_HEIGHT);
            Vec3::new(
                center_x + (g.x - 0.5) * NAME_LETTER_WIDTH,
                (g.y - 0.5) * NAME_LETTER_HEIGHT,
                depth,
            )
        }
        _ => {
            let r = NAME_BLOB_RADIUS * rng.gen::<f32>().cbrt();
            let blob = sphere_surface(rng, r);
            Vec3::new(center_x + blob.x, blob.y, depth + blob.z)
        }
    }
}

fn halo<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = NAME_HALO_INNER + rng.gen::<f32>() * (NAME_HALO_OUTER - NAME_HALO_INNER);
    let d = sphere_surface(rng, 1.0) * r;
    Vec3::new(
        d.x,
        d.y * NAME_HALO_FLATTEN + NAME_HALO_LIFT,
        d.z * NAME_HALO_FLATTEN + NAME_HALO_DEPTH,
    )
}
