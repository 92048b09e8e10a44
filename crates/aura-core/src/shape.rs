use std::fmt;
use std::str::FromStr;

/// The target shapes a particle cloud can be arranged into.
///
/// Declaration order is the cycle order used by the pinch gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Sphere,
    Heart,
    Flower,
    Saturn,
    /// Two heart clusters around the word "PRASAMSHA", with a soft halo.
    NameComposite,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Sphere,
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::NameComposite,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The shape after `self` in cycle order, wrapping at the end.
    pub fn next(self) -> ShapeKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Heart => "Heart",
            ShapeKind::Flower => "Flower",
            ShapeKind::Saturn => "Saturn",
            ShapeKind::NameComposite => "Prasamsha",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape `{0}` (expected one of sphere, heart, flower, saturn, prasamsha)")]
pub struct ParseShapeError(pub String);

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(ShapeKind::Sphere),
            "heart" | "heart3d" => Ok(ShapeKind::Heart),
            "flower" | "rose" => Ok(ShapeKind::Flower),
            "saturn" => Ok(ShapeKind::Saturn),
            "prasamsha" | "name" | "namecomposite" => Ok(ShapeKind::NameComposite),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}
