use crate::common::{cube, cube_sdf};
use approx::assert_relative_eq;
use na::Point3;
use sdfgen3d::math::Real;
use sdfgen3d::sdf::{DistanceField, SdfConfig, SweepRelaxation};

fn check_cube_distances(relaxation: SweepRelaxation) {
    let mesh = cube(0.5);
    let config = SdfConfig::default().with_relaxation(relaxation);
    let field = DistanceField::from_mesh_with_padding(&mesh, 0.1, 1, config).unwrap();
    let grid = field.grid();
    let [ni, nj, nk] = grid.dims();
    let mut num_on_faces = 0;

    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                let expected = cube_sdf(&grid.point_at(i, j, k), 0.5);
                let value = field.value_at(i, j, k);

                if expected.abs() > 1.0e-3 {
                    assert_eq!(
                        value.is_sign_negative(),
                        expected < 0.0,
                        "wrong sign at ({}, {}, {})",
                        i,
                        j,
                        k
                    );
                    assert_relative_eq!(value, expected, max_relative = 1.0e-4);
                } else {
                    // Grid points lying on a face of the cube.
                    assert!(value.abs() < 1.0e-5);
                    num_on_faces += 1;
                }
            }
        }
    }

    // The faces are sampled by 11 x 11 grid points each.
    assert_eq!(num_on_faces, 11 * 11 * 11 - 9 * 9 * 9);
}

#[test]
fn cube_distances_with_closest_triangle_relaxation() {
    check_cube_distances(SweepRelaxation::ClosestTriangle);
}

#[test]
fn cube_distances_with_unit_step_relaxation() {
    check_cube_distances(SweepRelaxation::UnitStep);
}

#[test]
fn unit_cube_end_to_end() {
    let mesh = cube(0.5);
    let field = DistanceField::from_mesh_with_padding(&mesh, 0.1, 1, SdfConfig::default()).unwrap();
    let grid = field.grid();

    assert_relative_eq!(grid.dx(), 0.1);
    assert_relative_eq!(grid.origin(), Point3::new(-0.6, -0.6, -0.6), epsilon = 1.0e-6);
    assert_eq!(field.values().len(), grid.num_points());

    // The grid point at the center of the cube.
    let center = grid.grid_coords(&Point3::origin()).map(|e| e.round() as usize);
    assert_relative_eq!(grid.point_at(center.x, center.y, center.z), Point3::origin(), epsilon = 1.0e-5);
    assert_relative_eq!(field.value_at(center.x, center.y, center.z), -0.5, epsilon = 1.0e-5);

    // The grid corners lie in the padding band, outside of the cube.
    let [ni, nj, nk] = grid.dims();
    for (i, j, k) in [(0, 0, 0), (ni - 1, 0, 0), (0, nj - 1, nk - 1), (ni - 1, nj - 1, nk - 1)] {
        let pt = grid.point_at(i, j, k);
        let cube_corner = pt.map(|e| if e < 0.0 { -0.5 } else { 0.5 });
        let value = field.value_at(i, j, k);

        assert!(value > 0.0);
        assert_relative_eq!(value, na::distance(&pt, &cube_corner), max_relative = 1.0e-4);
    }

    assert_relative_eq!(field.value_at(0, 0, 0), (3.0 as Real).sqrt() * 0.1, max_relative = 1.0e-4);
    assert_relative_eq!(field.min_value(), -0.5, epsilon = 1.0e-5);
}

#[test]
fn cube_interpolation_between_grid_points() {
    let mesh = cube(0.5);
    let field = DistanceField::from_mesh_with_padding(&mesh, 0.1, 1, SdfConfig::default()).unwrap();

    // The field is linear along the normal of a face, away from the edges.
    let pt = Point3::new(0.55, 0.0, 0.0);
    assert_relative_eq!(field.interpolate(&pt).unwrap(), 0.05, epsilon = 1.0e-4);
    let pt = Point3::new(0.0, -0.45, 0.0);
    assert_relative_eq!(field.interpolate(&pt).unwrap(), -0.05, epsilon = 1.0e-4);
    assert_eq!(field.interpolate(&Point3::new(2.0, 0.0, 0.0)), None);
}
