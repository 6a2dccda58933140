//! Reference-counted handle to a mutable [`Point`].
//!
//! Cloning a `SharedPoint` hands out another handle to the *same* point, so a
//! mutation through any handle is visible through all of them. A
//! [`Circle`](crate::shapes::Circle) keeps its center this way: the caller
//! that passed the center in can move the circle by moving the point.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::point::Point;

#[derive(Clone, Default)]
pub struct SharedPoint(Rc<RefCell<Point>>);

impl SharedPoint {
    /// Allocates a new shared point.
    pub fn new(point: Point) -> Self {
        Self(Rc::new(RefCell::new(point)))
    }

    /// Allocates a new shared point at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }

    /// True if both handles refer to the same underlying point.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Copy of the current value.
    pub fn get(&self) -> Point {
        *self.0.borrow()
    }

    pub fn set(&self, point: Point) {
        *self.0.borrow_mut() = point;
    }

    pub fn x(&self) -> f64 {
        self.0.borrow().x
    }

    pub fn y(&self) -> f64 {
        self.0.borrow().y
    }

    pub fn set_x(&self, x: f64) {
        self.0.borrow_mut().x = x;
    }

    pub fn set_y(&self, y: f64) {
        self.0.borrow_mut().y = y;
    }

    /// Edits the point through `f` and stores the result.
    ///
    /// `f` works on a copy, so no borrow of the shared cell is held while it
    /// runs and other holders can still read the point from inside it.
    pub fn update<R>(&self, f: impl FnOnce(&mut Point) -> R) -> R {
        let mut point = self.get();
        let out = f(&mut point);
        self.set(point);
        out
    }

    /// Overwrites both coordinates of the shared point in place.
    pub fn loc_from_tuple(&self, coords: (f64, f64)) {
        self.0.borrow_mut().loc_from_tuple(coords);
    }

    /// Translates the shared point in place by `offset`.
    pub fn add_assign_point(&self, offset: Point) {
        *self.0.borrow_mut() += offset;
    }
}

impl From<&SharedPoint> for SharedPoint {
    fn from(handle: &SharedPoint) -> Self {
        handle.clone()
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

impl fmt::Display for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.borrow(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_point_clone_aliases() {
        let a = SharedPoint::at(2.0, 3.0);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        b.set_x(6.0);
        assert_eq!(a.x(), 6.0);
        a.update(|p| p.y = -1.0);
        assert_eq!(b.get(), Point::new(6.0, -1.0));
    }

    #[test]
    fn test_shared_point_distinct_allocations() {
        let a = SharedPoint::new(Point::ORIGIN);
        let b = SharedPoint::new(Point::ORIGIN);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.get(), b.get());
    }

    #[test]
    fn test_shared_point_in_place_updates() {
        let a = SharedPoint::at(1.0, 2.0);
        a.add_assign_point(Point::new(2.0, 3.0));
        assert_eq!(a.get(), Point::new(3.0, 5.0));
        a.loc_from_tuple((7.0, 8.0));
        assert_eq!(a.get(), Point::new(7.0, 8.0));
        a.set(Point::ORIGIN);
        assert_eq!((a.x(), a.y()), (0.0, 0.0));
    }

    #[test]
    fn test_shared_point_update_holds_no_borrow() {
        let a = SharedPoint::at(2.0, 3.0);
        let b = a.clone();
        let seen = a.update(|p| {
            p.x = 6.0;
            // Readable and writable through another handle mid-update.
            let seen = b.to_string();
            b.set_y(9.0);
            seen
        });
        assert_eq!(seen, "Point at (2, 3)");
        // The closure's copy is written back last.
        assert_eq!(a.get(), Point::new(6.0, 3.0));
    }

    #[test]
    fn test_shared_point_formatting() {
        let a = SharedPoint::at(2.0, 3.0);
        assert_eq!(format!("{:?}", a), "Point(x=2, y=3)");
        assert_eq!(a.to_string(), "Point at (2, 3)");
    }
}
