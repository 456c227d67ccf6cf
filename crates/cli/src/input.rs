//! Measurement parsing for the command line: coordinate pairs and traverse
//! files.

use anyhow::{Context, Result};
use cogo::traverse::{
    angle_traverse_from, bearing_traverse, ReferenceDirection, RotationDirection,
    TraverseAngleLeg, TraverseLeg,
};
use cogo::{Angle, CogoError, Point2, Point3};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

fn parse_coords(s: &str) -> Result<Vec<f64>, CogoError> {
    s.split(',')
        .map(|c| {
            let c = c.trim();
            c.parse::<f64>()
                .map_err(|_| CogoError::InvalidNumber(c.to_string()))
        })
        .collect()
}

/// `X,Y`
pub fn parse_point2(s: &str) -> Result<Point2<f64>, CogoError> {
    match parse_coords(s)?.as_slice() {
        [x, y] => Ok(Point2::new(*x, *y)),
        _ => Err(CogoError::InvalidNumber(s.to_string())),
    }
}

/// `X,Y` or `X,Y,Z` (Z defaults to 0).
pub fn parse_point3(s: &str) -> Result<Point3<f64>, CogoError> {
    match parse_coords(s)?.as_slice() {
        [x, y] => Ok(Point3::new(*x, *y, 0.0)),
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(CogoError::InvalidNumber(s.to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct BearingLegIn {
    /// `DDD.MMSS`
    pub bearing: String,
    pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct AngleLegIn {
    /// `DDD.MMSS`; omitted or empty continues straight.
    #[serde(default)]
    pub angle: String,
    pub distance: f64,
    #[serde(default)]
    pub reference: ReferenceDirection,
    #[serde(default)]
    pub rotation: RotationDirection,
}

/// Traverse file. Angles are entry text so a file reads like a field book.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TraverseDoc {
    Bearing {
        base: [f64; 2],
        legs: Vec<BearingLegIn>,
    },
    Angle {
        base: [f64; 2],
        #[serde(default)]
        start_bearing: Option<String>,
        legs: Vec<AngleLegIn>,
    },
}

fn parse_entry(text: &str) -> Result<Angle, CogoError> {
    if text.trim().is_empty() {
        Ok(Angle::ZERO)
    } else {
        text.parse()
    }
}

impl TraverseDoc {
    pub fn leg_count(&self) -> usize {
        match self {
            TraverseDoc::Bearing { legs, .. } => legs.len(),
            TraverseDoc::Angle { legs, .. } => legs.len(),
        }
    }

    /// Reduce to coordinates (base point first).
    pub fn solve(&self) -> Result<Vec<Point2<f64>>, CogoError> {
        match self {
            TraverseDoc::Bearing { base, legs } => {
                let legs = legs
                    .iter()
                    .map(|l| Ok(TraverseLeg::new(l.bearing.parse()?, l.distance)))
                    .collect::<Result<Vec<_>, CogoError>>()?;
                Ok(bearing_traverse(&legs, Point2::new(base[0], base[1])))
            }
            TraverseDoc::Angle {
                base,
                start_bearing,
                legs,
            } => {
                let start = parse_entry(start_bearing.as_deref().unwrap_or(""))?;
                let legs = legs
                    .iter()
                    .map(|l| {
                        Ok(TraverseAngleLeg::new(
                            parse_entry(&l.angle)?,
                            l.distance,
                            l.reference,
                            l.rotation,
                        ))
                    })
                    .collect::<Result<Vec<_>, CogoError>>()?;
                Ok(angle_traverse_from(&legs, Point2::new(base[0], base[1]), start))
            }
        }
    }
}

/// Read a traverse document from `path`, or stdin when `path` is `-`.
pub fn read_traverse(path: &Path) -> Result<TraverseDoc> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading traverse from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing traverse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn points_from_text() {
        assert_eq!(parse_point2("1.5, -2").unwrap(), Point2::new(1.5, -2.0));
        assert_eq!(parse_point3("1,2").unwrap(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(parse_point3("1,2,3.25").unwrap(), Point3::new(1.0, 2.0, 3.25));
        assert!(parse_point2("1,2,3").is_err());
        assert!(parse_point3("1").is_err());
        assert!(matches!(
            parse_point2("1,north"),
            Err(CogoError::InvalidNumber(s)) if s == "north"
        ));
    }

    #[test]
    fn angle_traverse_file_closes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        fs::write(
            &path,
            r#"{
                "kind": "angle",
                "base": [100.0, 200.0],
                "legs": [
                    {"angle": "90.0000", "distance": 10},
                    {"angle": "90", "distance": 10, "reference": "forward", "rotation": "positive"},
                    {"angle": "90", "distance": 10},
                    {"angle": "90", "distance": 10}
                ]
            }"#,
        )
        .unwrap();
        let doc = read_traverse(&path).unwrap();
        assert_eq!(doc.leg_count(), 4);
        let pts = doc.solve().unwrap();
        assert_eq!(pts.len(), 5);
        assert!((pts[4] - Point2::new(100.0, 200.0)).norm() < 1e-9);
    }

    #[test]
    fn bearing_traverse_file_and_bad_angle() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("open.json");
        fs::write(
            &good,
            r#"{"kind":"bearing","base":[0,0],"legs":[{"bearing":"90.0000","distance":3},{"bearing":"0","distance":4}]}"#,
        )
        .unwrap();
        let pts = read_traverse(&good).unwrap().solve().unwrap();
        assert_eq!(pts[2], Point2::new(3.0, 4.0));

        let bad = dir.path().join("bad.json");
        fs::write(
            &bad,
            r#"{"kind":"bearing","base":[0,0],"legs":[{"bearing":"90.6000","distance":3}]}"#,
        )
        .unwrap();
        let err = read_traverse(&bad).unwrap().solve().unwrap_err();
        assert!(matches!(err, CogoError::InvalidDms { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_traverse(Path::new("/nonexistent/legs.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/legs.json"));
    }
}
