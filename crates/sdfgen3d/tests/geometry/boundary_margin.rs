use crate::common::{cube, uv_sphere};
use sdfgen3d::sdf::{DistanceField, SdfConfig};
use sdfgen3d::shape::TriMesh;

fn check_margin(mesh: &TriMesh, dx: sdfgen3d::math::Real, padding: u32) {
    let field = DistanceField::from_mesh_with_padding(mesh, dx, padding, SdfConfig::default()).unwrap();
    let [ni, nj, nk] = field.grid().dims();
    let margin = padding as usize - 1;

    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                let to_boundary = [i, j, k, ni - 1 - i, nj - 1 - j, nk - 1 - k]
                    .into_iter()
                    .min()
                    .unwrap();

                if to_boundary <= margin {
                    assert!(field.value_at(i, j, k) > 0.0, "({}, {}, {})", i, j, k);
                }
            }
        }
    }
}

#[test]
fn padding_band_is_outside() {
    for padding in [1, 2, 3] {
        check_margin(&cube(0.5), 0.1, padding);
        check_margin(&uv_sphere(1.0, 12, 24), 0.2, padding);
    }
}

#[test]
fn zero_padding_is_raised_to_one_cell() {
    let mesh = cube(0.5);
    let field = DistanceField::from_mesh_with_padding(&mesh, 0.25, 0, SdfConfig::default()).unwrap();
    let [ni, nj, nk] = field.grid().dims();

    assert!(field.value_at(0, 0, 0) > 0.0);
    assert!(field.value_at(ni - 1, nj - 1, nk - 1) > 0.0);
    assert!(field.num_inside() > 0);
}
