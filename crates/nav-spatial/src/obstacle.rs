//! Obstacle volumes consumed by the grid builder.
//!
//! The grid builder only ever asks an obstacle for its world-space
//! axis-aligned bounding box. Richer shapes are the caller's concern: a mesh,
//! a scene node, or a collider implements [`Obstacle`] by reporting the box
//! that encloses it.
//!
//! # Example
//!
//! ```
//! use nav_spatial::{Aabb, Obstacle};
//! use nalgebra::Point3;
//!
//! struct Crate {
//!     position: Point3<f64>,
//! }
//!
//! impl Obstacle for Crate {
//!     fn bounding_box(&self) -> Option<Aabb> {
//!         let half = nalgebra::Vector3::new(0.5, 0.5, 0.5);
//!         Some(Aabb::from_center(self.position, half))
//!     }
//! }
//!
//! let c = Crate { position: Point3::new(1.0, 0.0, 1.0) };
//! assert_eq!(c.bounding_box().unwrap().min, Point3::new(0.5, -0.5, 0.5));
//! ```

use nalgebra::{Point3, Vector3};

/// An axis-aligned bounding box in world coordinates.
///
/// # Example
///
/// ```
/// use nav_spatial::Aabb;
/// use nalgebra::Point3;
///
/// // Corners can be given in any order
/// let aabb = Aabb::new(Point3::new(10.0, 10.0, 10.0), Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3<f64>,
    /// Maximum corner of the bounding box.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates a new AABB from two opposite corners.
    ///
    /// The corners are reordered so that `min <= max` on every axis.
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates an AABB centered at a point with the given half-extents.
    #[must_use]
    pub fn from_center(center: Point3<f64>, half_extents: Vector3<f64>) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns the center point of the AABB.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the full size of the AABB along each axis.
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Returns `true` if every corner coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min
            .coords
            .iter()
            .chain(self.max.coords.iter())
            .all(|v| v.is_finite())
    }

    /// Checks if a point is inside the AABB. Boundary points are inside.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Returns the smallest AABB containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

/// Anything the grid builder can rasterize as a blocked region.
///
/// Returning `None` means the object has no bounding shape; the builder skips
/// it without error.
pub trait Obstacle {
    /// Returns the world-space axis-aligned bounding box, if there is one.
    fn bounding_box(&self) -> Option<Aabb>;
}

impl Obstacle for Aabb {
    fn bounding_box(&self) -> Option<Aabb> {
        Some(*self)
    }
}

impl Obstacle for Option<Aabb> {
    fn bounding_box(&self) -> Option<Aabb> {
        *self
    }
}

impl<T: Obstacle + ?Sized> Obstacle for &T {
    fn bounding_box(&self) -> Option<Aabb> {
        (**self).bounding_box()
    }
}

impl<T: Obstacle + ?Sized> Obstacle for Box<T> {
    fn bounding_box(&self) -> Option<Aabb> {
        (**self).bounding_box()
    }
}
