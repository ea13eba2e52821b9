//! Plain descriptions of the bodies handed to the physics engine.
//!
//! Positions are the centre of the body in world space, with y growing downwards.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

use crate::errors::*;
use crate::units::{UnitHeight, UnitWidth};

#[derive(Serialize, Deserialize, Eq, PartialEq, Copy, Clone, Debug, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BodyLabel {
    /// An interior maze wall. These collapse when the game is won.
    Wall,
    /// One of the four walls round the edge of the world. These never collapse.
    Boundary,
    Goal,
    Ball,
}

impl BodyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyLabel::Wall => "wall",
            BodyLabel::Boundary => "boundary",
            BodyLabel::Goal => "goal",
            BodyLabel::Ball => "ball",
        }
    }
}

impl fmt::Display for BodyLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug)]
pub struct Body {
    pub label: BodyLabel,
    pub shape: Shape,
    pub is_static: bool,
}

impl Body {
    pub fn static_rectangle(label: BodyLabel, rect: Rectangle) -> Body {
        Body {
            label,
            shape: Shape::Rectangle(rect),
            is_static: true,
        }
    }

    pub fn dynamic_circle(label: BodyLabel, circle: Circle) -> Body {
        Body {
            label,
            shape: Shape::Circle(circle),
            is_static: false,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Copy, Clone, Debug, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// The world space size of one maze cell.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellUnit {
    width: UnitWidth,
    height: UnitHeight,
}

impl CellUnit {
    /// Fails unless both sizes are positive and finite.
    pub fn new(width: UnitWidth, height: UnitHeight) -> Result<CellUnit> {
        let (UnitWidth(w), UnitHeight(h)) = (width, height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ErrorKind::InvalidUnitSize(w, h).into());
        }
        Ok(CellUnit { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width.0
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height.0
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn unit_sizes_must_be_positive() {
        assert!(CellUnit::new(UnitWidth(10.0), UnitHeight(20.0)).is_ok());
        assert!(CellUnit::new(UnitWidth(0.0), UnitHeight(20.0)).is_err());
        assert!(CellUnit::new(UnitWidth(10.0), UnitHeight(-1.0)).is_err());
        assert!(CellUnit::new(UnitWidth(::std::f64::NAN), UnitHeight(1.0)).is_err());
        assert!(CellUnit::new(UnitWidth(::std::f64::INFINITY), UnitHeight(1.0)).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(BodyLabel::Wall.as_str(), "wall");
        assert_eq!(BodyLabel::Ball.to_string(), "ball");
        assert_eq!(serde_json::to_string(&BodyLabel::Goal).unwrap(), "\"goal\"");
    }

    #[test]
    fn shapes_serialise_with_a_kind_tag() {
        let body = Body::dynamic_circle(BodyLabel::Ball, Circle { x: 1.0, y: 2.0, radius: 0.5 });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["label"], "ball");
        assert_eq!(json["shape"]["kind"], "circle");
        assert_eq!(json["shape"]["radius"], 0.5);
        assert_eq!(json["is_static"], false);
    }
}
