use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign};

use tracing::{debug, trace};

use crate::common::{Result, ShapeError};
use crate::math::{Point, SharedPoint};

/// A circle defined by a center point and a non-negative radius.
///
/// The center is held through a [`SharedPoint`], not copied. Passing an
/// existing handle to [`Circle::new`] or [`Circle::set_center`] makes the
/// circle follow every later mutation of that point:
///
/// ```
/// use shapes::{Circle, SharedPoint};
///
/// let p = SharedPoint::at(2.0, 3.0);
/// let c = Circle::new(&p, 1.5).unwrap();
/// p.set_x(6.0);
/// assert_eq!(c.center().x(), 6.0);
/// ```
///
/// The center must be a point handle. A bare coordinate pair is rejected:
///
/// ```compile_fail
/// use shapes::Circle;
///
/// let c = Circle::new((1.0, 2.0), 3.0);
/// ```
///
/// A plain [`Point`] is a copied value, so it is not accepted by
/// [`Circle::new`] either:
///
/// ```compile_fail
/// use shapes::{Circle, Point};
///
/// let c = Circle::new(Point::new(1.0, 2.0), 3.0);
/// ```
///
/// [`Circle::from_point`] takes one explicitly and
/// copies it into a fresh handle. Cloning a circle clones the handle, so the
/// clone shares its center.
#[derive(Clone)]
pub struct Circle {
    center: SharedPoint,
    radius: f64,
}

impl Circle {
    pub const DEFAULT_RADIUS: f64 = 1.0;

    /// Creates a circle around `center`. Fails if `radius` is negative or NaN.
    pub fn new(center: impl Into<SharedPoint>, radius: f64) -> Result<Self> {
        let radius = validate_radius(radius)?;
        let center = center.into();
        trace!(radius, "circle created");
        Ok(Self { center, radius })
    }

    /// Creates a circle around a copy of `center`. Later changes to the
    /// caller's `Point` do not move the circle.
    pub fn from_point(center: Point, radius: f64) -> Result<Self> {
        Self::new(SharedPoint::new(center), radius)
    }

    /// Creates a circle with the given radius around a fresh point at the origin.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::new(SharedPoint::new(Point::ORIGIN), radius)
    }

    /// Uses `center` when given, otherwise a fresh point at the origin.
    pub fn with_optional_center(center: Option<SharedPoint>, radius: f64) -> Result<Self> {
        match center {
            Some(center) => Self::new(center, radius),
            None => Self::with_radius(radius),
        }
    }

    /// Creates a circle whose center is a new point built from `(x, y)`.
    pub fn from_tuple(center: (f64, f64), radius: f64) -> Result<Self> {
        Self::from_point(Point::from_tuple(center), radius)
    }

    /// Same as [`Circle::from_tuple`] with the default radius.
    pub fn from_tuple_unit(center: (f64, f64)) -> Self {
        Self {
            center: SharedPoint::new(Point::from_tuple(center)),
            radius: Self::DEFAULT_RADIUS,
        }
    }

    /// Handle to the center point, shared with the circle.
    pub fn center(&self) -> SharedPoint {
        self.center.clone()
    }

    /// Copy of the center's current coordinates.
    pub fn center_point(&self) -> Point {
        self.center.get()
    }

    /// Replaces the center handle. The previous point is not modified.
    pub fn set_center(&mut self, center: impl Into<SharedPoint>) {
        self.center = center.into();
    }

    /// Replaces the center handle, or resets it to a fresh origin point on `None`.
    pub fn set_optional_center(&mut self, center: Option<SharedPoint>) {
        self.center = center.unwrap_or_else(|| SharedPoint::new(Point::ORIGIN));
    }

    /// Moves the existing center point in place, so every holder of the
    /// center handle sees the new coordinates.
    pub fn center_from_tuple(&self, center: (f64, f64)) {
        self.center.loc_from_tuple(center);
    }

    /// Slice form of [`Circle::center_from_tuple`]. On error the center is untouched.
    pub fn try_center_from_slice(&self, center: &[f64]) -> Result<()> {
        let point = Point::try_from_slice(center).map_err(|err| {
            debug!(found = center.len(), "rejected center pair");
            err
        })?;
        self.center.set(point);
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<()> {
        // Negated comparison so NaN is rejected too.
        if !(diameter >= 0.0) {
            debug!(diameter, "rejected diameter");
            return Err(ShapeError::NegativeDiameter(diameter));
        }
        self.radius = diameter / 2.0;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

fn validate_radius(radius: f64) -> Result<f64> {
    if radius >= 0.0 {
        Ok(radius)
    } else {
        debug!(radius, "rejected radius");
        Err(ShapeError::NegativeRadius(radius))
    }
}

impl Default for Circle {
    /// Unit circle around a newly allocated origin point.
    fn default() -> Self {
        Self {
            center: SharedPoint::new(Point::ORIGIN),
            radius: Self::DEFAULT_RADIUS,
        }
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center.get() == other.center.get() && self.radius == other.radius
    }
}

impl Add for &Circle {
    type Output = Circle;

    fn add(self, other: &Circle) -> Circle {
        Circle {
            center: SharedPoint::new(self.center.get() + other.center.get()),
            radius: self.radius + other.radius,
        }
    }
}

impl Add for Circle {
    type Output = Circle;

    fn add(self, other: Circle) -> Circle {
        &self + &other
    }
}

impl AddAssign<&Circle> for Circle {
    fn add_assign(&mut self, other: &Circle) {
        // Read first: both circles may share one center.
        let offset = other.center.get();
        self.center.add_assign_point(offset);
        self.radius += other.radius;
    }
}

impl fmt::Debug for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.center.get();
        write!(f, "Circle(center=Point({}, {}), radius={})", c.x, c.y, self.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.center.get();
        write!(
            f,
            "Circle with center at ({}, {}) and radius {}",
            c.x, c.y, self.radius
        )
    }
}
