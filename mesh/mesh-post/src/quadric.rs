//! Quadric error metrics for edge collapse.
//!
//! A quadric accumulates squared distances to a set of planes as
//! `Q(p) = p^T A p + 2 b . p + c`, which stays cheap to evaluate and to sum
//! no matter how many planes fed it.

use nalgebra::{Matrix3, Point3, Vector3};

/// Determinants below this are treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Quadric {
    a: Matrix3<f64>,
    b: Vector3<f64>,
    c: f64,
}

impl Quadric {
    /// Quadric of the plane through `point` with unit normal `normal`.
    pub fn from_plane(normal: Vector3<f64>, point: Point3<f64>) -> Self {
        let d = -normal.dot(&point.coords);
        Self {
            a: normal * normal.transpose(),
            b: normal * d,
            c: d * d,
        }
    }

    /// Sum of squared plane distances at `p`.
    pub fn error(&self, p: Point3<f64>) -> f64 {
        let v = p.coords;
        v.dot(&(self.a * v)) + 2.0 * self.b.dot(&v) + self.c
    }

    /// The point minimizing this quadric, if the planes constrain all three
    /// axes. Near-singular quadrics (coplanar neighborhoods) return `None`
    /// and the caller falls back to a midpoint.
    pub fn minimizer(&self) -> Option<Point3<f64>> {
        if self.a.determinant().abs() < SINGULAR_EPS {
            return None;
        }
        self.a.try_inverse().map(|inv| Point3::from(-(inv * self.b)))
    }
}

impl std::ops::Add for Quadric {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            c: self.c + rhs.c,
        }
    }
}

impl std::ops::AddAssign for Quadric {
    fn add_assign(&mut self, rhs: Self) {
        self.a += rhs.a;
        self.b += rhs.b;
        self.c += rhs.c;
    }
}
