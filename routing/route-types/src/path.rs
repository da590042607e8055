//! Path representations for routing.
//!
//! - [`VoxelPath`]: the discrete cell sequence a search produces
//! - [`WorldPath`]: the same route as world-space waypoints (voxel centers)
//!
//! # Example
//!
//! ```
//! use route_types::{VoxelPath, WorldPath};
//! use nav_spatial::VoxelCoord;
//! use nalgebra::Point3;
//!
//! let voxel_path = VoxelPath::new(vec![
//!     VoxelCoord::new(0, 0, 0),
//!     VoxelCoord::new(1, 0, 0),
//!     VoxelCoord::new(2, 0, 0),
//! ]);
//! assert_eq!(voxel_path.step_count(), 2);
//!
//! let world_path = WorldPath::new(vec![
//!     Point3::new(0.5, 0.5, 0.5),
//!     Point3::new(1.5, 0.5, 0.5),
//! ]);
//! assert!((world_path.length() - 1.0).abs() < 1e-10);
//! ```

use nalgebra::Point3;
use nav_spatial::VoxelCoord;

/// A path through voxel space.
///
/// Consecutive coordinates of a path produced by the search are face
/// neighbors; [`VoxelPath::is_face_connected`] checks this.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelPath {
    /// The sequence of voxel coordinates, start first.
    coords: Vec<VoxelCoord>,
    /// Total length in voxel units.
    length: f64,
}

impl VoxelPath {
    /// Creates a voxel path from a sequence of coordinates.
    ///
    /// The length is the sum of Euclidean segment lengths in voxel units.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::VoxelPath;
    /// use nav_spatial::VoxelCoord;
    ///
    /// let path = VoxelPath::new(vec![
    ///     VoxelCoord::new(0, 0, 0),
    ///     VoxelCoord::new(0, 1, 0),
    ///     VoxelCoord::new(0, 1, 1),
    /// ]);
    /// assert!((path.length() - 2.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn new(coords: Vec<VoxelCoord>) -> Self {
        let length = coords
            .windows(2)
            .map(|w| w[0].euclidean_distance(w[1]))
            .sum();
        Self { coords, length }
    }

    /// Creates an empty voxel path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            coords: Vec::new(),
            length: 0.0,
        }
    }

    /// Creates a path from a single coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::VoxelPath;
    /// use nav_spatial::VoxelCoord;
    ///
    /// let path = VoxelPath::from_single(VoxelCoord::origin());
    /// assert_eq!(path.len(), 1);
    /// assert_eq!(path.step_count(), 0);
    /// ```
    #[must_use]
    pub fn from_single(coord: VoxelCoord) -> Self {
        Self {
            coords: vec![coord],
            length: 0.0,
        }
    }

    /// Returns the number of coordinates in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if the path has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the number of moves, one less than the number of coordinates.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// Returns the total path length in voxel units.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn coords(&self) -> &[VoxelCoord] {
        &self.coords
    }

    /// Returns the first coordinate, if any.
    #[must_use]
    pub fn first(&self) -> Option<&VoxelCoord> {
        self.coords.first()
    }

    /// Returns the last coordinate, if any.
    #[must_use]
    pub fn last(&self) -> Option<&VoxelCoord> {
        self.coords.last()
    }

    /// Returns an iterator over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &VoxelCoord> {
        self.coords.iter()
    }

    /// Returns an iterator over consecutive coordinate pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&VoxelCoord, &VoxelCoord)> {
        self.coords.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns `true` if every move is a single face step.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::VoxelPath;
    /// use nav_spatial::VoxelCoord;
    ///
    /// let stepped = VoxelPath::new(vec![VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 0, 0)]);
    /// assert!(stepped.is_face_connected());
    ///
    /// let jumped = VoxelPath::new(vec![VoxelCoord::new(0, 0, 0), VoxelCoord::new(1, 1, 0)]);
    /// assert!(!jumped.is_face_connected());
    /// ```
    #[must_use]
    pub fn is_face_connected(&self) -> bool {
        self.segments().all(|(a, b)| a.is_face_adjacent(*b))
    }

    /// Consumes the path and returns its coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<VoxelCoord> {
        self.coords
    }
}

impl<'a> IntoIterator for &'a VoxelPath {
    type Item = &'a VoxelCoord;
    type IntoIter = std::slice::Iter<'a, VoxelCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// An ordered sequence of world-space waypoints.
///
/// Waypoints produced by a search are voxel centers; the path from
/// [`WorldPath::direct`] holds the literal endpoints instead.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPath {
    points: Vec<Point3<f64>>,
}

impl WorldPath {
    /// Creates a path from waypoints.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Creates an empty path, the result of an unsuccessful search.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a two-point path straight from `start` to `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::WorldPath;
    /// use nalgebra::Point3;
    ///
    /// let path = WorldPath::direct(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
    /// assert_eq!(path.len(), 2);
    /// assert!((path.length() - 5.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn direct(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::new(vec![start, end])
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of segments between waypoints.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the waypoints as a slice.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Returns the first waypoint, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// Returns the last waypoint, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// Returns an iterator over the waypoints.
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.points.iter()
    }

    /// Returns the total polyline length in world units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum()
    }

    /// Consumes the path and returns its waypoints.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl From<Vec<Point3<f64>>> for WorldPath {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::new(points)
    }
}

impl From<WorldPath> for Vec<Point3<f64>> {
    fn from(path: WorldPath) -> Self {
        path.points
    }
}

impl FromIterator<Point3<f64>> for WorldPath {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for WorldPath {
    type Item = Point3<f64>;
    type IntoIter = std::vec::IntoIter<Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a WorldPath {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight(n: i32) -> VoxelPath {
        VoxelPath::new((0..n).map(|x| VoxelCoord::new(x, 0, 0)).collect())
    }

    #[test]
    fn test_voxel_path_length_and_steps() {
        let path = straight(5);
        assert_eq!(path.len(), 5);
        assert_eq!(path.step_count(), 4);
        assert_relative_eq!(path.length(), 4.0);
        assert_eq!(path.first(), Some(&VoxelCoord::new(0, 0, 0)));
        assert_eq!(path.last(), Some(&VoxelCoord::new(4, 0, 0)));
        assert!(path.is_face_connected());
    }

    #[test]
    fn test_voxel_path_empty() {
        let path = VoxelPath::empty();
        assert!(path.is_empty());
        assert_eq!(path.step_count(), 0);
        assert_eq!(path.length(), 0.0);
        assert!(path.first().is_none());
        assert!(path.is_face_connected());
        assert_eq!(path, VoxelPath::default());
    }

    #[test]
    fn test_voxel_path_segments() {
        let path = straight(4);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], (&VoxelCoord::new(0, 0, 0), &VoxelCoord::new(1, 0, 0)));

        let collected: Vec<_> = (&path).into_iter().copied().collect();
        assert_eq!(collected, path.clone().into_coords());
    }

    #[test]
    fn test_voxel_path_not_face_connected() {
        let path = VoxelPath::new(vec![
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(1, 0, 0),
            VoxelCoord::new(3, 0, 0),
        ]);
        assert!(!path.is_face_connected());
        assert_relative_eq!(path.length(), 3.0);
    }

    #[test]
    fn test_world_path_length() {
        let path: WorldPath = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ]
        .into();
        assert_eq!(path.len(), 3);
        assert_eq!(path.step_count(), 2);
        assert_relative_eq!(path.length(), 3.0);
        assert_eq!(path.last(), Some(&Point3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_world_path_empty() {
        let path = WorldPath::empty();
        assert!(path.is_empty());
        assert_eq!(path.step_count(), 0);
        assert_eq!(path.length(), 0.0);
        assert_eq!(path, WorldPath::default());
    }

    #[test]
    fn test_world_path_direct_and_conversions() {
        let start = Point3::new(1.0, 1.0, 1.0);
        let end = Point3::new(1.0, 1.0, 4.0);
        let path = WorldPath::direct(start, end);
        assert_relative_eq!(path.length(), 3.0);

        let doubled: WorldPath = path.iter().map(|p| Point3::from(p.coords * 2.0)).collect();
        assert_relative_eq!(doubled.length(), 6.0);

        let points: Vec<Point3<f64>> = doubled.into();
        assert_eq!(points, vec![Point3::new(2.0, 2.0, 2.0), Point3::new(2.0, 2.0, 8.0)]);
    }
}
