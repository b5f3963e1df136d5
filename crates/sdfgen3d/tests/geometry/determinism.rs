use crate::common::{cube, uv_sphere};
use na::{Point3, Vector3};
use sdfgen3d::math::Real;
use sdfgen3d::sdf::{Axis, DistanceField, GridSpec, SdfConfig};
use sdfgen3d::shape::TriMesh;

#[test]
fn identical_inputs_give_bit_identical_fields() {
    let mesh = uv_sphere(0.8, 16, 32);

    for config in [
        SdfConfig::default(),
        SdfConfig::default().with_exact_band(2).with_parity_axis(Axis::Y),
    ] {
        let field1 = DistanceField::from_mesh_with_padding(&mesh, 0.1, 2, config).unwrap();
        let field2 = DistanceField::from_mesh_with_padding(&mesh, 0.1, 2, config).unwrap();

        let bits1: Vec<_> = field1.values().iter().map(|v| v.to_bits()).collect();
        let bits2: Vec<_> = field2.values().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits1, bits2);
    }
}

#[test]
fn parity_axis_does_not_change_signs() {
    // A randomly shifted cube, so that no grid point lies on its surface.
    let mut rng = oorandom::Rand32::new(7);
    let shift: Vector3<Real> = Vector3::new(
        rng.rand_float() as Real,
        rng.rand_float() as Real,
        rng.rand_float() as Real,
    );
    let base = cube(0.4);
    let vertices = base.vertices().iter().map(|v| v + shift * 0.05).collect();
    let mesh = TriMesh::new(vertices, base.indices().to_vec()).unwrap();
    let grid = GridSpec::new(Point3::new(-0.7, -0.7, -0.7), 0.07, [21, 21, 21]).unwrap();

    let fields: Vec<_> = Axis::ALL
        .iter()
        .map(|axis| {
            let config = SdfConfig::default().with_parity_axis(*axis);
            DistanceField::from_trimesh(&mesh, grid, config).unwrap()
        })
        .collect();

    for field in &fields[1..] {
        for (v0, v) in fields[0].values().iter().zip(field.values()) {
            if v0.abs() > 1.0e-4 {
                assert_eq!(v0.is_sign_negative(), v.is_sign_negative());
            }
        }
    }

    assert!(fields[0].num_inside() > 0);
}
