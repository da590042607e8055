//! Property-based tests for grid pathfinding.
//!
//! These tests use proptest to generate random obstacle scenes and query
//! points, and verify invariants of the produced paths.
//!
//! Run with: cargo test -p route-pathfind -- proptest

#![allow(
    missing_docs,
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

use nav_spatial::{Aabb, CoordinateMapper, NavGrid, Point3, VoxelCoord};
use proptest::prelude::*;
use route_pathfind::{Pathfinder, find_path};
use route_types::{PathfinderConfig, Termination};

const EXTENT: f64 = 5.0;

fn unit_config() -> PathfinderConfig {
    PathfinderConfig::default().with_voxel_size(1.0).with_extent(EXTENT)
}

// =============================================================================
// Strategies
// =============================================================================

/// Generate a point inside the default corner-layout cube [0, 10).
fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(0.0..(2.0 * EXTENT - 1e-6)).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Generate a small box, possibly poking out of the grid.
fn arb_obstacle() -> impl Strategy<Value = Aabb> {
    (
        prop::array::uniform3(-2.0..12.0f64),
        prop::array::uniform3(0.0..3.0f64),
    )
        .prop_map(|([x, y, z], [w, h, d])| {
            Aabb::new(Point3::new(x, y, z), Point3::new(x + w, y + h, z + d))
        })
}

fn arb_scene() -> impl Strategy<Value = Vec<Aabb>> {
    prop::collection::vec(arb_obstacle(), 0..8)
}

// =============================================================================
// Property Tests: Coordinate Mapping
// =============================================================================

proptest! {
    /// Mapping a cell to its center and back returns the same cell.
    #[test]
    fn grid_world_grid_roundtrip(
        x in -1000..1000i32,
        y in -1000..1000i32,
        z in -1000..1000i32,
        size in prop::sample::select(vec![0.1, 0.25, 0.5, 1.0, 2.0, 3.7]),
    ) {
        let mapper = CoordinateMapper::new(size);
        let coord = VoxelCoord::new(x, y, z);
        prop_assert_eq!(mapper.world_to_grid(&mapper.grid_to_world(coord)), coord);
    }
}

// =============================================================================
// Property Tests: Search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Without obstacles the path is as long as the Manhattan distance.
    #[test]
    fn empty_scene_path_is_manhattan(start in arb_point(), end in arb_point()) {
        let pathfinder = Pathfinder::new(unit_config(), &[] as &[Aabb]).unwrap();
        let route = pathfinder.route(start, end).unwrap();

        let a = pathfinder.grid().world_to_grid(&start);
        let b = pathfinder.grid().world_to_grid(&end);

        prop_assert_eq!(route.termination(), Termination::Reached);
        prop_assert_eq!(route.voxel_path().step_count() as u32, a.manhattan_distance(b));
    }

    /// Found paths step between walkable face neighbors from start to end.
    #[test]
    fn paths_are_walkable_and_connected(
        scene in arb_scene(),
        start in arb_point(),
        end in arb_point(),
    ) {
        let pathfinder = Pathfinder::new(unit_config(), &scene).unwrap();
        let route = pathfinder.route(start, end).unwrap();
        let grid: &NavGrid = pathfinder.grid();

        if route.is_found() {
            let voxels = route.voxel_path();
            prop_assert!(voxels.is_face_connected());
            prop_assert_eq!(voxels.first().copied(), Some(grid.world_to_grid(&start)));
            prop_assert_eq!(voxels.last().copied(), Some(grid.world_to_grid(&end)));
            // The start cell may be blocked; every later cell is walkable
            for &cell in voxels.iter().skip(1) {
                prop_assert!(grid.is_walkable(cell));
            }
            prop_assert_eq!(voxels.len(), route.world_path().len());
        } else {
            prop_assert!(route.world_path().is_empty());
        }
    }

    /// A path is never shorter than the straight line between its endpoints.
    #[test]
    fn path_not_shorter_than_straight_line(
        scene in arb_scene(),
        start in arb_point(),
        end in arb_point(),
    ) {
        let pathfinder = Pathfinder::new(unit_config(), &scene).unwrap();
        let path = pathfinder.find_path(start, end).unwrap();

        if !path.is_empty() {
            let mapper = pathfinder.grid().mapper();
            let straight = nalgebra::distance(&mapper.snap(&start), &mapper.snap(&end));
            prop_assert!(path.length() >= straight - 1e-9);
        }
    }

    /// Identical inputs always produce identical outputs.
    #[test]
    fn search_is_idempotent(scene in arb_scene(), start in arb_point(), end in arb_point()) {
        let first = find_path(start, end, &scene, &unit_config()).unwrap();
        let second = find_path(start, end, &scene, &unit_config()).unwrap();
        prop_assert_eq!(first, second);
    }
}
