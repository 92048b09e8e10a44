// Host-side tests for the shape point-cloud generators.

use aura_core::geometry::*;
use aura_core::glyphs::GlyphTable;
use aura_core::ShapeKind;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn every_shape_returns_exactly_count_finite_points() {
    let mut rng = rng();
    for shape in ShapeKind::ALL {
        for count in [1usize, 7, 9, 1000] {
            let points = generate(shape, count, &mut rng);
            assert_eq!(points.len(), count, "{shape} with count {count}");
            for p in &points {
                assert!(p.is_finite(), "{shape} produced non-finite point {p:?}");
            }
        }
    }
}

#[test]
fn sphere_points_lie_on_the_shell() {
    let points = generate(ShapeKind::Sphere, 5000, &mut rng());
    for p in points {
        assert!(
            (p.length() - SPHERE_RADIUS).abs() < 1e-4,
            "point {p:?} has radius {}",
            p.length()
        );
    }
}

#[test]
fn sphere_shell_is_not_biased_toward_the_poles() {
    // uniform on the sphere => z is uniform on [-r, r], so its mean is ~0
    let points = generate(ShapeKind::Sphere, 20_000, &mut rng());
    let mean_z = points.iter().map(|p| p.z).sum::<f32>() / points.len() as f32;
    assert!(mean_z.abs() < 0.1, "mean z {mean_z}");
    let upper = points.iter().filter(|p| p.z > SPHERE_RADIUS * 0.5).count() as f32;
    // a uniform shell puts a quarter of its area above z = r/2
    let share = upper / points.len() as f32;
    assert!((share - 0.25).abs() < 0.02, "upper cap share {share}");
}

#[test]
fn heart_points_stay_inside_the_scaled_curve_bounds() {
    let points = generate(ShapeKind::Heart, 5000, &mut rng());
    let eps = 1e-4;
    for p in points {
        assert!(p.x.abs() <= 16.0 * HEART_SCALE + eps, "x out of bounds: {p:?}");
        assert!(p.y >= -17.0 * HEART_SCALE - eps, "y below cusp: {p:?}");
        assert!(p.y <= 12.5 * HEART_SCALE, "y above lobes: {p:?}");
        assert!(p.z.abs() <= HEART_SCALE + eps, "z too deep: {p:?}");
    }
}

#[test]
fn heart_curve_matches_known_points() {
    let top = heart_curve(0.0);
    assert!(top.x.abs() < 1e-6);
    assert!((top.y - 5.0).abs() < 1e-5);
    let cusp = heart_curve(std::f32::consts::PI);
    assert!((cusp.y + 17.0).abs() < 1e-4);
    let side = heart_curve(std::f32::consts::FRAC_PI_2);
    assert!((side.x - 16.0).abs() < 1e-4);
}

#[test]
fn flower_is_flat_and_inside_the_rose() {
    let points = generate(ShapeKind::Flower, 5000, &mut rng());
    let max_radius = (1.0 + 0.28 + 0.13 + 0.07) * FLOWER_SCALE;
    for p in points {
        assert_eq!(p.z, 0.0);
        let r = p.truncate().length();
        assert!(r <= max_radius + 1e-4, "radius {r} exceeds {max_radius}");
        let t = p.y.atan2(p.x);
        assert!(
            r <= rose_radius(t) * FLOWER_SCALE + 1e-3,
            "point {p:?} outside petal at angle {t}"
        );
    }
}

#[test]
fn saturn_ring_to_body_ratio_converges() {
    let n = 20_000;
    let points = generate(ShapeKind::Saturn, n, &mut rng());
    let ring = points.iter().filter(|p| p.length() > 2.0).count();
    let ratio = ring as f32 / n as f32;
    assert!(
        (ratio - SATURN_RING_PROBABILITY).abs() < 0.02,
        "ring share {ratio}"
    );
}

#[test]
fn saturn_parts_have_expected_radii() {
    let points = generate(ShapeKind::Saturn, 5000, &mut rng());
    let ring_max = (SATURN_RING_OUTER.powi(2) + 0.1f32.powi(2)).sqrt();
    for p in points {
        let r = p.length();
        if r > 2.0 {
            assert!(r >= SATURN_RING_INNER - 1e-3 && r <= ring_max + 1e-3, "ring radius {r}");
        } else {
            assert!((r - SATURN_BODY_RADIUS).abs() < 1e-4, "body radius {r}");
        }
    }
}

#[test]
fn saturn_ring_is_tilted() {
    // an untilted ring would keep |y| <= 0.1
    let points = generate(ShapeKind::Saturn, 5000, &mut rng());
    let max_ring_y = points
        .iter()
        .filter(|p| p.length() > 2.0)
        .map(|p| p.y.abs())
        .fold(0.0f32, f32::max);
    assert!(max_ring_y > 1.5, "ring y extent {max_ring_y}");
}

#[test]
fn name_composite_segments_match_truncation_order() {
    let s = name_composite_segments(4000);
    assert_eq!(s.left_heart, 0..1000);
    assert_eq!(s.text, 1000..2600);
    assert_eq!(s.right_heart, 2600..3600);
    assert_eq!(s.halo, 3600..4000);

    let s = name_composite_segments(10);
    assert_eq!(s.left_heart, 0..2);
    assert_eq!(s.text, 2..6);
    assert_eq!(s.right_heart, 6..8);
    assert_eq!(s.halo, 8..10);
}

#[test]
fn name_composite_segments_partition_every_count() {
    let letters = NAME_TEXT.chars().count();
    for count in letters..3000 {
        let s = name_composite_segments(count);
        assert_eq!(s.left_heart.start, 0);
        assert_eq!(s.left_heart.end, s.text.start, "count {count}");
        assert_eq!(s.text.end, s.right_heart.start, "count {count}");
        assert_eq!(s.right_heart.end, s.halo.start, "count {count}");
        assert_eq!(s.halo.end, count);
        assert!(s.left_heart.start <= s.left_heart.end);
        assert!(s.text.start <= s.text.end);
        assert!(s.right_heart.start <= s.right_heart.end);
        assert!(s.halo.start <= s.halo.end);
    }
}

#[test]
fn name_composite_places_each_segment_in_its_region() {
    let count = 4000;
    let points = generate(ShapeKind::NameComposite, count, &mut rng());
    let s = name_composite_segments(count);
    for p in &points[s.left_heart.clone()] {
        assert!(p.x < -4.0, "left heart point {p:?}");
    }
    for p in &points[s.right_heart.clone()] {
        assert!(p.x > 4.0, "right heart point {p:?}");
    }
    let text_half_width = letter_slot_center(NAME_TEXT.len() - 1, NAME_TEXT.len())
        + NAME_LETTER_WIDTH * 0.5
        + NAME_STROKE_THICKNESS;
    for p in &points[s.text.clone()] {
        assert!(p.x.abs() <= text_half_width, "text point {p:?}");
        assert!(p.y.abs() <= NAME_LETTER_HEIGHT * 0.5 + NAME_STROKE_THICKNESS);
    }
    for p in &points[s.halo.clone()] {
        let flat_extent = NAME_HALO_OUTER * NAME_HALO_FLATTEN + 1e-3;
        assert!((p.y - NAME_HALO_LIFT).abs() <= flat_extent, "halo y {p:?}");
        assert!((p.z - NAME_HALO_DEPTH).abs() <= flat_extent, "halo z {p:?}");
        assert!(p.x.abs() <= NAME_HALO_OUTER + 1e-3);
    }
}

#[test]
fn name_hearts_keep_most_points_on_the_outline() {
    let count = 40_000;
    let points = generate(ShapeKind::NameComposite, count, &mut rng());
    let s = name_composite_segments(count);
    let center = glam::Vec2::new(-NAME_HEART_OFFSET_X, NAME_HEART_OFFSET_Y);

    let on_curve = points[s.left_heart.clone()]
        .iter()
        .filter(|p| {
            let rel = (p.truncate() - center) / NAME_HEART_SCALE;
            let a = (rel.x / 16.0).cbrt().clamp(-1.0, 1.0).asin();
            [a, std::f32::consts::PI - a]
                .iter()
                .any(|&t| (heart_curve(t).y - rel.y).abs() < 0.1)
        })
        .count();
    let share = on_curve as f32 / s.left_heart.len() as f32;
    assert!((0.83..=0.88).contains(&share), "outline share {share}");
}

#[test]
fn halo_sits_behind_the_text() {
    let count = 40_000;
    let points = generate(ShapeKind::NameComposite, count, &mut rng());
    let s = name_composite_segments(count);
    let mean_z = points[s.halo.clone()].iter().map(|p| p.z).sum::<f32>() / s.halo.len() as f32;
    assert!((mean_z - NAME_HALO_DEPTH).abs() < 0.1, "halo mean z {mean_z}");
    let text_back = points[s.text.clone()]
        .iter()
        .map(|p| p.z)
        .fold(f32::INFINITY, f32::min);
    assert!(mean_z < text_back);
}

#[test]
fn glyphless_character_falls_back_to_a_blob() {
    let mut out = vec![Vec3::ZERO; 300];
    text_points("P#A", &mut out, &mut rng());
    let slot = letter_slot_center(1, 3);
    for p in &out[100..200] {
        let xy = glam::Vec2::new(p.x - slot, p.y).length();
        assert!(xy <= NAME_BLOB_RADIUS + 1e-4, "blob point {p:?}");
        assert!(p.z.abs() <= NAME_BLOB_RADIUS + NAME_STROKE_DEPTH + 1e-4);
    }
    // neighbours still draw their strokes
    assert!(out[..100].iter().any(|p| (p.x - slot).abs() > 0.3));
    assert!(out[200..].iter().any(|p| (p.x - slot).abs() > 0.3));
}

#[test]
fn empty_outputs_and_text_are_harmless() {
    let mut none: [Vec3; 0] = [];
    text_points(NAME_TEXT, &mut none, &mut rng());

    let mut out = vec![Vec3::ONE; 8];
    text_points("", &mut out, &mut rng());
    let reach = NAME_BLOB_RADIUS + NAME_STROKE_DEPTH + 1e-4;
    assert!(out.iter().all(|p| p.is_finite() && p.length() <= reach));
}

#[test]
fn every_letter_of_the_name_has_a_glyph() {
    let glyphs = GlyphTable::shared();
    assert!(std::ptr::eq(glyphs, GlyphTable::shared()));
    for c in NAME_TEXT.chars() {
        let strokes = glyphs.strokes(c).unwrap_or_else(|| panic!("missing glyph {c}"));
        assert!(!strokes.is_empty());
        for s in strokes {
            for v in s.from.iter().chain(s.to.iter()) {
                assert!((0.0..=1.0).contains(v), "glyph {c} leaves the unit box");
            }
        }
    }
    assert!(glyphs.strokes('p').is_some(), "lookup is case-insensitive");
    assert!(glyphs.strokes('#').is_none());
}

#[test]
fn letter_slots_are_centred_on_the_origin() {
    let n = NAME_TEXT.len();
    let first = letter_slot_center(0, n);
    let last = letter_slot_center(n - 1, n);
    assert!((first + last).abs() < 1e-5);
    assert!((letter_slot_center(1, n) - first - NAME_LETTER_SLOT).abs() < 1e-5);
}

#[test]
fn unknown_shape_name_falls_back_to_the_origin() {
    let points = generate_named("dodecahedron", 64, &mut rng());
    assert_eq!(points.len(), 64);
    assert!(points.iter().all(|p| *p == Vec3::ZERO));

    let sphere = generate_named("sphere", 64, &mut rng());
    assert!(sphere.iter().all(|p| (p.length() - SPHERE_RADIUS).abs() < 1e-4));
}

#[test]
fn repeated_generation_gives_a_different_cloud() {
    let a = generate_with_thread_rng(ShapeKind::Sphere, 100);
    let b = generate_with_thread_rng(ShapeKind::Sphere, 100);
    assert_ne!(a, b);
}

#[test]
fn shape_names_round_trip_and_cycle() {
    for shape in ShapeKind::ALL {
        assert_eq!(shape.name().parse::<ShapeKind>(), Ok(shape));
    }
    assert_eq!("Heart3D".parse::<ShapeKind>(), Ok(ShapeKind::Heart));
    assert!("cube".parse::<ShapeKind>().is_err());
    assert_eq!(ShapeKind::Saturn.next(), ShapeKind::NameComposite);
    assert_eq!(ShapeKind::NameComposite.next(), ShapeKind::Sphere);
}
