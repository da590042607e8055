//! Voxel coordinate types.

use nalgebra::Vector3;

/// Offsets of the six face-adjacent voxels, in expansion order.
///
/// The order is `+x, -x, +y, -y, +z, -z`. Search code iterates neighbors in
/// this order, so it also fixes the order in which equal-cost cells are
/// discovered.
pub const FACE_OFFSETS: [VoxelCoord; 6] = [
    VoxelCoord::new(1, 0, 0),
    VoxelCoord::new(-1, 0, 0),
    VoxelCoord::new(0, 1, 0),
    VoxelCoord::new(0, -1, 0),
    VoxelCoord::new(0, 0, 1),
    VoxelCoord::new(0, 0, -1),
];

/// A discrete 3D coordinate in voxel/grid space.
///
/// A coordinate is the identity of a grid cell: two cells are the same cell
/// exactly when their coordinates are equal.
///
/// # Example
///
/// ```
/// use nav_spatial::VoxelCoord;
///
/// let coord = VoxelCoord::new(1, 2, 3);
/// assert_eq!(coord.x, 1);
/// assert_eq!(coord.as_array(), [1, 2, 3]);
///
/// // Negative coordinates are representable, even if a grid never stores them
/// let neg = VoxelCoord::new(-5, -10, -15);
/// assert_eq!(neg.x, -5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to a floating-point vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Returns the 6 face-adjacent neighbors (von Neumann neighborhood).
    ///
    /// Neighbors whose coordinate would overflow `i32` are omitted.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_spatial::VoxelCoord;
    ///
    /// let neighbors: Vec<_> = VoxelCoord::new(0, 0, 0).face_neighbors().collect();
    /// assert_eq!(neighbors.len(), 6);
    /// assert_eq!(neighbors[0], VoxelCoord::new(1, 0, 0));
    /// assert_eq!(neighbors[1], VoxelCoord::new(-1, 0, 0));
    /// ```
    pub fn face_neighbors(self) -> impl Iterator<Item = Self> {
        FACE_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }

    /// Returns `true` if `other` differs by exactly one step along one axis.
    #[must_use]
    pub const fn is_face_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Computes the Manhattan distance to another coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_spatial::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(0, 0, 0);
    /// let b = VoxelCoord::new(3, 4, 5);
    /// assert_eq!(a.manhattan_distance(b), 12);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.saturating_add(dy).saturating_add(dz)
    }

    /// Computes the Euclidean distance to another coordinate, in grid units.
    #[must_use]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        let dz = f64::from(self.z.abs_diff(other.z));
        dx.mul_add(dx, dy.mul_add(dy, dz * dz)).sqrt()
    }

    /// Adds an offset to this coordinate, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
            self.z.checked_add(other.z)?,
        ))
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<VoxelCoord> for [i32; 3] {
    fn from(coord: VoxelCoord) -> Self {
        coord.as_array()
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl std::ops::Sub for VoxelCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl std::fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_face_neighbors_order() {
        let coord = VoxelCoord::new(5, 5, 5);
        let neighbors: Vec<_> = coord.face_neighbors().collect();
        assert_eq!(
            neighbors,
            vec![
                VoxelCoord::new(6, 5, 5),
                VoxelCoord::new(4, 5, 5),
                VoxelCoord::new(5, 6, 5),
                VoxelCoord::new(5, 4, 5),
                VoxelCoord::new(5, 5, 6),
                VoxelCoord::new(5, 5, 4),
            ]
        );
    }

    #[test]
    fn test_face_neighbors_skip_overflow() {
        let coord = VoxelCoord::new(i32::MAX, 0, 0);
        let neighbors: Vec<_> = coord.face_neighbors().collect();
        assert_eq!(neighbors.len(), 5);
        assert!(!neighbors.iter().any(|n| n.x == i32::MIN));
    }

    #[test]
    fn test_face_adjacent() {
        let a = VoxelCoord::new(0, 0, 0);
        assert!(a.is_face_adjacent(VoxelCoord::new(0, -1, 0)));
        assert!(!a.is_face_adjacent(VoxelCoord::new(1, 1, 0)));
        assert!(!a.is_face_adjacent(a));
    }

    #[test]
    fn test_manhattan_distance_negative() {
        let a = VoxelCoord::new(-5, -5, -5);
        let b = VoxelCoord::new(5, 5, 5);
        assert_eq!(a.manhattan_distance(b), 30);
        assert_eq!(b.manhattan_distance(a), 30);
    }

    #[test]
    fn test_euclidean_distance() {
        let a = VoxelCoord::new(0, 0, 0);
        assert_eq!(a.euclidean_distance(VoxelCoord::new(3, 4, 0)), 5.0);
        assert_eq!(a.euclidean_distance(VoxelCoord::new(0, 0, -1)), 1.0);
    }

    #[test]
    fn test_checked_add_overflow() {
        let coord = VoxelCoord::new(i32::MAX, 0, 0);
        assert_eq!(coord.checked_add(VoxelCoord::new(1, 0, 0)), None);
        assert_eq!(
            VoxelCoord::new(5, 5, 5).checked_add(VoxelCoord::new(1, 2, 3)),
            Some(VoxelCoord::new(6, 7, 8))
        );
    }

    #[test]
    fn test_operators() {
        let a = VoxelCoord::new(1, 2, 3);
        let b = VoxelCoord::new(4, 5, 6);
        assert_eq!(a + b, VoxelCoord::new(5, 7, 9));
        assert_eq!(b - a, VoxelCoord::new(3, 3, 3));
    }

    #[test]
    fn test_conversions() {
        let coord: VoxelCoord = (1, 2, 3).into();
        assert_eq!(coord, VoxelCoord::new(1, 2, 3));
        let coord: VoxelCoord = [1, 2, 3].into();
        let array: [i32; 3] = coord.into();
        assert_eq!(array, [1, 2, 3]);
        assert_eq!(coord.to_vector().z, 3.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(VoxelCoord::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VoxelCoord::new(1, 2, 3));
        set.insert(VoxelCoord::new(1, 2, 3));
        set.insert(VoxelCoord::new(4, 5, 6));
        assert_eq!(set.len(), 2);
    }
}
