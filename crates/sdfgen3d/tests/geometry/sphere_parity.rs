use crate::common::uv_sphere;
use sdfgen3d::math::Real;
use sdfgen3d::sdf::{Axis, DistanceField, GridSpec, SdfBuilder, SdfConfig};

#[test]
fn sphere_inside_volume_converges() {
    let mesh = uv_sphere(1.0, 24, 48);
    let sphere_volume = 4.0 / 3.0 * core::f64::consts::PI as Real;
    let mut errors = vec![];

    for dx in [0.2, 0.1, 0.05] {
        let grid = GridSpec::from_aabb(mesh.local_aabb(), dx, 1).unwrap();
        // Only the signs are needed here.
        let config = SdfConfig::default().with_exact_band(0);
        let signs = SdfBuilder::new(&mesh, grid, config)
            .compute_exact_distances()
            .unwrap()
            .compute_signs()
            .unwrap();

        let volume = signs.num_inside() as Real * dx * dx * dx;
        errors.push((volume - sphere_volume).abs() / sphere_volume);
    }

    assert!(errors[0] > errors[1] && errors[1] > errors[2], "{:?}", errors);
    assert!(errors[2] < 0.02, "{:?}", errors);
}

#[test]
fn sphere_signs_along_each_axis() {
    let mesh = uv_sphere(1.0, 24, 48);

    // With dx = 0.125, the poles of the sphere lie exactly on grid columns parallel to `z`.
    for dx in [0.125, 0.1] {
        for axis in Axis::ALL {
            let config = SdfConfig::default().with_parity_axis(axis);
            let field = DistanceField::from_mesh_with_padding(&mesh, dx, 1, config).unwrap();
            let grid = field.grid();
            let [ni, nj, nk] = grid.dims();

            for k in 0..nk {
                for j in 0..nj {
                    for i in 0..ni {
                        let r = grid.point_at(i, j, k).coords.norm();

                        if r < 0.98 {
                            assert!(field.is_inside(i, j, k), "{:?} ({}, {}, {})", axis, i, j, k);
                        } else if r > 1.0 {
                            assert!(!field.is_inside(i, j, k), "{:?} ({}, {}, {})", axis, i, j, k);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn sphere_distances_are_close_to_the_radial_distance() {
    let mesh = uv_sphere(1.0, 24, 48);
    let field = DistanceField::from_mesh_with_padding(&mesh, 0.2, 3, SdfConfig::default()).unwrap();
    let grid = field.grid();
    let [ni, nj, nk] = grid.dims();

    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                let r = grid.point_at(i, j, k).coords.norm();
                let value = field.value_at(i, j, k);
                // The tessellation lies at most ~0.01 inside of the sphere.
                assert!((value - (r - 1.0)).abs() < 0.02, "({}, {}, {}): {} vs {}", i, j, k, value, r - 1.0);
            }
        }
    }
}
