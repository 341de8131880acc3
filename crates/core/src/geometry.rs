//! Geometric types and routines.
//!
//! Provides the canonical axis-aligned bounding box used throughout the
//! library, plus center/distance computation. Coordinates are in page-space
//! units with a top-left origin: y increases downward.
//!
//! Upstream extraction output is not uniform - bounding boxes arrive as flat
//! four-number lists, as 2- or 4-point polygons, or as stringified lists -
//! so all conversions to the canonical rectangle live here, behind one typed
//! parse error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AlignError, Result};

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// An axis-aligned rectangle where (x0, y0) is the top-left corner and
/// (x1, y1) the bottom-right corner (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BBox {
    /// Creates a bounding box, validating the coordinate ordering invariant.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self> {
        let malformed = |reason| AlignError::MalformedBBox {
            raw: format!("({x0}, {y0}, {x1}, {y1})"),
            reason,
        };
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return Err(malformed("non-finite coordinate"));
        }
        if x0 > x1 || y0 > y1 {
            return Err(malformed("coordinates out of order"));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Point {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Euclidean distance between the centers of two rectangles.
    pub fn distance(&self, other: &Self) -> f64 {
        let (cx0, cy0) = self.center();
        let (cx1, cy1) = other.center();
        (cx1 - cx0).hypot(cy1 - cy0)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Builds the envelope of a set of corner points (2-point rectangles and
    /// 4-point polygons from upstream both normalize this way).
    fn from_points(raw: &str, points: &[Point]) -> Result<Self> {
        if points.len() != 2 && points.len() != 4 {
            return Err(AlignError::MalformedBBox {
                raw: raw.to_owned(),
                reason: "expected two or four corner points",
            });
        }
        let mut x0 = f64::INFINITY;
        let mut y0 = f64::INFINITY;
        let mut x1 = f64::NEG_INFINITY;
        let mut y1 = f64::NEG_INFINITY;
        for &(x, y) in points {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
        Self::new(x0, y0, x1, y1)
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.x0, self.y0, self.x1, self.y1
        )
    }
}

/// A bounding box as it appears in upstream extraction output, before
/// normalization to [`BBox`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawBBox {
    /// Flat coordinate list: `[x0, y0, x1, y1]`.
    Flat(Vec<f64>),
    /// Corner point list: `[[x, y], ...]` with 2 or 4 points.
    Points(Vec<Point>),
    /// Stringified list, bracketed or parenthesized: `"[x0, y0, x1, y1]"`.
    Text(String),
}

impl TryFrom<RawBBox> for BBox {
    type Error = AlignError;

    fn try_from(raw: RawBBox) -> Result<Self> {
        match raw {
            RawBBox::Flat(coords) => match coords[..] {
                [x0, y0, x1, y1] => Self::new(x0, y0, x1, y1),
                _ => Err(AlignError::MalformedBBox {
                    raw: format!("{coords:?}"),
                    reason: "expected four coordinates",
                }),
            },
            RawBBox::Points(points) => Self::from_points(&format!("{points:?}"), &points),
            RawBBox::Text(text) => text.parse(),
        }
    }
}

impl FromStr for BBox {
    type Err = AlignError;

    /// Parses a stringified bounding box. Python-style tuple reprs
    /// (`"(1.0, 2.0, 3.0, 4.0)"`) are normalized to JSON list syntax first,
    /// then decoded through the same representations as structured input.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('(', "[").replace(')', "]");
        match serde_json::from_str::<RawBBox>(&normalized) {
            Ok(RawBBox::Text(_)) | Err(_) => Err(AlignError::MalformedBBox {
                raw: s.to_owned(),
                reason: "not a bracketed list of numbers",
            }),
            Ok(raw) => Self::try_from(raw),
        }
    }
}

impl Serialize for BBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.x0, self.y0, self.x1, self.y1).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawBBox::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let bbox = BBox::new(0.0, 0.0, 10.0, 20.0).unwrap();
        assert_eq!(bbox.center(), (5.0, 10.0));
    }

    #[test]
    fn test_distance_symmetric() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = BBox::new(30.0, 40.0, 50.0, 60.0).unwrap();
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_distance_value() {
        let a = BBox::new(0.0, 0.0, 2.0, 2.0).unwrap();
        let b = BBox::new(3.0, 4.0, 5.0, 6.0).unwrap();
        // centers (1, 1) and (4, 5)
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_new_rejects_out_of_order() {
        assert!(BBox::new(10.0, 0.0, 0.0, 5.0).is_err());
        assert!(BBox::new(0.0, 10.0, 5.0, 0.0).is_err());
        assert!(BBox::new(0.0, f64::NAN, 5.0, 5.0).is_err());
    }

    #[test]
    fn test_parse_bracketed_string() {
        let bbox: BBox = "[125.9, 85.78, 197.89, 133.78]".parse().unwrap();
        assert_eq!(bbox, BBox::new(125.9, 85.78, 197.89, 133.78).unwrap());
    }

    #[test]
    fn test_parse_parenthesized_string() {
        let bbox: BBox = "(1.0, 2.0, 3.0, 4.0)".parse().unwrap();
        assert_eq!(bbox, BBox::new(1.0, 2.0, 3.0, 4.0).unwrap());
    }

    #[test]
    fn test_parse_malformed_string() {
        assert!("".parse::<BBox>().is_err());
        assert!("[1.0, 2.0]".parse::<BBox>().is_err());
        assert!("[1.0, 2.0, 3.0, oops]".parse::<BBox>().is_err());
        assert!("not a bbox".parse::<BBox>().is_err());
    }

    #[test]
    fn test_from_flat() {
        let bbox = BBox::try_from(RawBBox::Flat(vec![1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(bbox, BBox::new(1.0, 2.0, 3.0, 4.0).unwrap());
        assert!(BBox::try_from(RawBBox::Flat(vec![1.0, 2.0, 3.0])).is_err());
    }

    #[test]
    fn test_from_polygon() {
        // clockwise quad
        let points = vec![(1.0, 2.0), (3.0, 2.0), (3.0, 4.0), (1.0, 4.0)];
        let bbox = BBox::try_from(RawBBox::Points(points)).unwrap();
        assert_eq!(bbox, BBox::new(1.0, 2.0, 3.0, 4.0).unwrap());

        // two corners, any order
        let bbox = BBox::try_from(RawBBox::Points(vec![(3.0, 4.0), (1.0, 2.0)])).unwrap();
        assert_eq!(bbox, BBox::new(1.0, 2.0, 3.0, 4.0).unwrap());

        assert!(BBox::try_from(RawBBox::Points(vec![(1.0, 2.0)])).is_err());
    }

    #[test]
    fn test_deserialize_heterogeneous() {
        let flat: BBox = serde_json::from_str("[1.0, 2.0, 3.0, 4.0]").unwrap();
        let poly: BBox = serde_json::from_str("[[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]]")
            .unwrap();
        let text: BBox = serde_json::from_str("\"[1.0, 2.0, 3.0, 4.0]\"").unwrap();
        assert_eq!(flat, poly);
        assert_eq!(flat, text);
    }

    #[test]
    fn test_serialize_flat() {
        let bbox = BBox::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(
            serde_json::to_string(&bbox).unwrap(),
            "[1.0,2.0,3.0,4.0]"
        );
    }
}
