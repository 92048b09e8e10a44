//! Line-segment stroke font used to spell text out of particles.
//!
//! Every glyph lives in a unit box: x grows to the right, y grows upward and
//! both run over \[0, 1\]. A glyph is a handful of straight strokes; particles
//! are scattered along them, so the strokes only need to read well once they
//! are thickened by jitter.

use std::sync::OnceLock;

use fnv::FnvHashMap;
use glam::Vec2;

/// A straight stroke between two points in glyph space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

impl Stroke {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            from: [x0, y0],
            to: [x1, y1],
        }
    }

    /// Point at parameter `t` in \[0, 1\] along the stroke.
    pub fn point_at(&self, t: f32) -> Vec2 {
        Vec2::from(self.from).lerp(Vec2::from(self.to), t)
    }

    /// Unit normal to the stroke; +Y for a zero-length stroke.
    pub fn normal(&self) -> Vec2 {
        let d = Vec2::from(self.to) - Vec2::from(self.from);
        d.perp().try_normalize().unwrap_or(Vec2::Y)
    }
}

const GLYPH_P: &[Stroke] = &[
    Stroke::new(0.0, 0.0, 0.0, 1.0),
    Stroke::new(0.0, 1.0, 0.7, 1.0),
    Stroke::new(0.7, 1.0, 0.9, 0.85),
    Stroke::new(0.9, 0.85, 0.9, 0.65),
    Stroke::new(0.9, 0.65, 0.7, 0.5),
    Stroke::new(0.7, 0.5, 0.0, 0.5),
];

const GLYPH_R: &[Stroke] = &[
    Stroke::new(0.0, 0.0, 0.0, 1.0),
    Stroke::new(0.0, 1.0, 0.7, 1.0),
    Stroke::new(0.7, 1.0, 0.9, 0.85),
    Stroke::new(0.9, 0.85, 0.9, 0.65),
    Stroke::new(0.9, 0.65, 0.7, 0.5),
    Stroke::new(0.7, 0.5, 0.0, 0.5),
    Stroke::new(0.4, 0.5, 0.95, 0.0),
];

const GLYPH_A: &[Stroke] = &[
    Stroke::new(0.0, 0.0, 0.5, 1.0),
    Stroke::new(0.5, 1.0, 1.0, 0.0),
    Stroke::new(0.25, 0.45, 0.75, 0.45),
];

const GLYPH_S: &[Stroke] = &[
    Stroke::new(0.95, 0.88, 0.75, 1.0),
    Stroke::new(0.75, 1.0, 0.25, 1.0),
    Stroke::new(0.25, 1.0, 0.05, 0.85),
    Stroke::new(0.05, 0.85, 0.05, 0.65),
    Stroke::new(0.05, 0.65, 0.25, 0.5),
    Stroke::new(0.25, 0.5, 0.75, 0.5),
    Stroke::new(0.75, 0.5, 0.95, 0.35),
    Stroke::new(0.95, 0.35, 0.95, 0.15),
    Stroke::new(0.95, 0.15, 0.75, 0.0),
    Stroke::new(0.75, 0.0, 0.25, 0.0),
    Stroke::new(0.25, 0.0, 0.05, 0.12),
];

const GLYPH_M: &[Stroke] = &[
    Stroke::new(0.0, 0.0, 0.0, 1.0),
    Stroke::new(0.0, 1.0, 0.5, 0.45),
    Stroke::new(0.5, 0.45, 1.0, 1.0),
    Stroke::new(1.0, 1.0, 1.0, 0.0),
];

const GLYPH_H: &[Stroke] = &[
    Stroke::new(0.0, 0.0, 0.0, 1.0),
    Stroke::new(1.0, 0.0, 1.0, 1.0),
    Stroke::new(0.0, 0.5, 1.0, 0.5),
];

/// Lookup from uppercase character to its strokes.
#[derive(Clone, Debug)]
pub struct GlyphTable {
    glyphs: FnvHashMap<char, &'static [Stroke]>,
}

impl GlyphTable {
    /// The built-in stroke font. Covers every letter of the name composite.
    pub fn builtin() -> Self {
        let mut glyphs = FnvHashMap::default();
        glyphs.insert('P', GLYPH_P);
        glyphs.insert('R', GLYPH_R);
        glyphs.insert('A', GLYPH_A);
        glyphs.insert('S', GLYPH_S);
        glyphs.insert('M', GLYPH_M);
        glyphs.insert('H', GLYPH_H);
        Self { glyphs }
    }

    /// Process-wide built-in table, built on first use.
    pub fn shared() -> &'static GlyphTable {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(Self::builtin)
    }

    /// Strokes for `c` (case-insensitive), `None` when the font lacks it.
    pub fn strokes(&self, c: char) -> Option<&'static [Stroke]> {
        self.glyphs.get(&c.to_ascii_uppercase()).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.strokes(c).is_some()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::builtin()
    }
}
