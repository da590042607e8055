//! Axis-aligned bounds in grid space.

use crate::voxel::VoxelCoord;

/// Axis-aligned bounds in grid (voxel) space.
///
/// Both corners are inclusive.
///
/// # Example
///
/// ```
/// use nav_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(9, 9, 9));
///
/// assert!(bounds.contains(VoxelCoord::new(5, 5, 5)));
/// assert!(!bounds.contains(VoxelCoord::new(10, 5, 5)));
/// assert_eq!(bounds.volume(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates bounds from two corners, ordering them so `min <= max` per axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a cube of `cells_per_axis` cells per side starting at `min`.
    ///
    /// Returns `None` if `cells_per_axis` is zero or the far corner overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_spatial::{GridBounds, VoxelCoord};
    ///
    /// let cube = GridBounds::cube(VoxelCoord::new(-2, -2, -2), 4).unwrap();
    /// assert_eq!(cube.max, VoxelCoord::new(1, 1, 1));
    /// assert!(GridBounds::cube(VoxelCoord::origin(), 0).is_none());
    /// ```
    #[must_use]
    pub fn cube(min: VoxelCoord, cells_per_axis: u32) -> Option<Self> {
        let span = i32::try_from(cells_per_axis.checked_sub(1)?).ok()?;
        let max = min.checked_add(VoxelCoord::new(span, span, span))?;
        Some(Self { min, max })
    }

    /// Returns the size of the bounds as (width, height, depth) in cells.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Returns the total number of cells in the bounds.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (w, h, d) = self.size();
        u64::from(w)
            .saturating_mul(u64::from(h))
            .saturating_mul(u64::from(d))
    }

    /// Checks if the bounds contain a coordinate.
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Returns the intersection of two bounds, or `None` if they don't overlap.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_spatial::{GridBounds, VoxelCoord};
    ///
    /// let a = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(10, 10, 10));
    /// let b = GridBounds::new(VoxelCoord::new(5, -5, 5), VoxelCoord::new(15, 5, 15));
    ///
    /// let clipped = a.intersection(&b).unwrap();
    /// assert_eq!(clipped.min, VoxelCoord::new(5, 0, 5));
    /// assert_eq!(clipped.max, VoxelCoord::new(10, 5, 10));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = VoxelCoord::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.min.z.max(other.min.z),
        );
        let max = VoxelCoord::new(
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
            self.max.z.min(other.max.z),
        );

        if min.x <= max.x && min.y <= max.y && min.z <= max.z {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns an iterator over all coordinates in the bounds.
    ///
    /// Iterates in Z-Y-X order (X varies fastest).
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            current: Some(self.min),
        }
    }
}

impl IntoIterator for GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all coordinates in a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    current: Option<VoxelCoord>,
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        // Compare before stepping so a corner at i32::MAX never overflows.
        let mut next = current;
        if next.x < self.bounds.max.x {
            next.x += 1;
        } else {
            next.x = self.bounds.min.x;
            if next.y < self.bounds.max.y {
                next.y += 1;
            } else {
                next.y = self.bounds.min.y;
                if next.z < self.bounds.max.z {
                    next.z += 1;
                } else {
                    self.current = None;
                    return Some(current);
                }
            }
        }
        self.current = Some(next);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.map_or(0, |current| {
            let remaining_x = u64::from(self.bounds.max.x.abs_diff(current.x)) + 1;
            let remaining_y = u64::from(self.bounds.max.y.abs_diff(current.y));
            let remaining_z = u64::from(self.bounds.max.z.abs_diff(current.z));

            let size_x = u64::from(self.bounds.max.x.abs_diff(self.bounds.min.x)) + 1;
            let size_y = u64::from(self.bounds.max.y.abs_diff(self.bounds.min.y)) + 1;

            remaining_x
                .saturating_add(remaining_y.saturating_mul(size_x))
                .saturating_add(remaining_z.saturating_mul(size_x).saturating_mul(size_y))
        });

        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridBoundsIter {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_new_auto_order() {
        let bounds = GridBounds::new(VoxelCoord::new(10, 0, 10), VoxelCoord::new(0, 10, 0));
        assert_eq!(bounds.min, VoxelCoord::new(0, 0, 0));
        assert_eq!(bounds.max, VoxelCoord::new(10, 10, 10));
    }

    #[test]
    fn test_bounds_cube() {
        let cube = GridBounds::cube(VoxelCoord::origin(), 80).unwrap();
        assert_eq!(cube.max, VoxelCoord::new(79, 79, 79));
        assert_eq!(cube.size(), (80, 80, 80));
        assert_eq!(cube.volume(), 512_000);
    }

    #[test]
    fn test_bounds_cube_overflow() {
        assert!(GridBounds::cube(VoxelCoord::new(i32::MAX, 0, 0), 2).is_none());
        assert!(GridBounds::cube(VoxelCoord::new(i32::MAX, 0, 0), 1).is_some());
    }

    #[test]
    fn test_bounds_contains_inclusive() {
        let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(4, 4, 4));
        assert!(bounds.contains(VoxelCoord::new(0, 0, 0)));
        assert!(bounds.contains(VoxelCoord::new(4, 4, 4)));
        assert!(!bounds.contains(VoxelCoord::new(-1, 0, 0)));
        assert!(!bounds.contains(VoxelCoord::new(0, 5, 0)));
    }

    #[test]
    fn test_bounds_intersection_none() {
        let a = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(4, 4, 4));
        let b = GridBounds::new(VoxelCoord::new(5, 0, 0), VoxelCoord::new(9, 4, 4));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_bounds_iter_order_and_len() {
        let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 1, 1));
        let iter = bounds.iter();
        assert_eq!(iter.len(), 8);

        let coords: Vec<_> = iter.collect();
        assert_eq!(coords.len(), 8);
        assert_eq!(coords[0], VoxelCoord::new(0, 0, 0));
        assert_eq!(coords[1], VoxelCoord::new(1, 0, 0));
        assert_eq!(coords[2], VoxelCoord::new(0, 1, 0));
        assert_eq!(coords[7], VoxelCoord::new(1, 1, 1));
    }

    #[test]
    fn test_bounds_iter_at_i32_max() {
        let corner = VoxelCoord::new(i32::MAX, i32::MAX, i32::MAX);
        let bounds = GridBounds::new(corner, corner);
        let coords: Vec<_> = bounds.into_iter().collect();
        assert_eq!(coords, vec![corner]);
    }

    #[test]
    fn test_bounds_ref_into_iter() {
        let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(2, 0, 0));
        let mut count = 0;
        for _ in &bounds {
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
