use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use crate::common::{Result, ShapeError};

/// Two-dimensional point `(x, y)`.
///
/// `Point` is a plain value: assignment copies it. Use
/// [`SharedPoint`](crate::math::SharedPoint) when several holders must see
/// each other's mutations.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new Point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a Point from an `(x, y)` pair.
    pub fn from_tuple(coords: (f64, f64)) -> Self {
        Self::new(coords.0, coords.1)
    }

    /// Creates a Point from a slice that must hold exactly two coordinates.
    pub fn try_from_slice(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(ShapeError::MalformedPair { found: coords.len() }),
        }
    }

    /// Overwrites both coordinates from an `(x, y)` pair.
    pub fn loc_from_tuple(&mut self, coords: (f64, f64)) {
        self.x = coords.0;
        self.y = coords.1;
    }

    /// Overwrites both coordinates from a slice. On error the point is left untouched.
    pub fn try_loc_from_slice(&mut self, coords: &[f64]) -> Result<()> {
        *self = Self::try_from_slice(coords)?;
        Ok(())
    }

    /// Returns the coordinates as an `(x, y)` tuple.
    pub fn to_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Length of the vector from the origin to this point.
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from(coords: (f64, f64)) -> Self {
        Self::from_tuple(coords)
    }
}

impl From<[f64; 2]> for Point {
    fn from(coords: [f64; 2]) -> Self {
        Self::new(coords[0], coords[1])
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        p.to_tuple()
    }
}

// Yields x then y, so `let [x, y]`-style destructuring works through iteration.
impl IntoIterator for Point {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

// Point * f64
impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Point
impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point at ({}, {})", self.x, self.y)
    }
}
