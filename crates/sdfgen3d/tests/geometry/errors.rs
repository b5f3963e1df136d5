use crate::common::cube;
use na::Point3;
use sdfgen3d::math::Real;
use sdfgen3d::sdf::{Axis, DistanceField, GridSpec, GridSpecError, SdfConfig, SdfError};
use sdfgen3d::shape::TriMeshBuilderError;

#[test]
fn invalid_spacing_is_rejected() {
    let mesh = cube(0.5);

    for dx in [0.0, -0.1, Real::NAN, Real::INFINITY] {
        let err = DistanceField::from_mesh_with_padding(&mesh, dx, 1, SdfConfig::default()).unwrap_err();
        assert!(
            matches!(err, SdfError::InvalidGridSpec(GridSpecError::InvalidSpacing(_))),
            "{:?}",
            err
        );
    }
}

#[test]
fn empty_grid_is_rejected() {
    let err = GridSpec::new(Point3::origin(), 0.1, [4, 4, 0]).unwrap_err();
    assert_eq!(
        err,
        SdfError::InvalidGridSpec(GridSpecError::EmptyDimension(Axis::Z))
    );
    assert!(err.to_string().contains("Z"));
}

#[test]
fn oversized_grids_are_reported() {
    let mesh = cube(0.5);

    // The number of grid points overflows.
    let err = DistanceField::from_mesh_with_padding(&mesh, 1.0e-7, 1, SdfConfig::default()).unwrap_err();
    assert!(matches!(err, SdfError::ResourceExhaustion { .. }), "{:?}", err);

    // The number of grid points is representable, but the working arrays are too large.
    let dims = [1 << 20, 1 << 20, 1 << 20];
    let err = GridSpec::new(Point3::origin(), 1.0, dims)
        .and_then(|grid| DistanceField::from_trimesh(&mesh, grid, SdfConfig::default()))
        .unwrap_err();
    assert_eq!(err, SdfError::ResourceExhaustion { dims });
}

#[test]
fn invalid_buffers_are_rejected() {
    let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];

    let err = DistanceField::from_buffers(vertices.clone(), vec![], 0.1, 1, SdfConfig::default())
        .unwrap_err();
    assert_eq!(err, SdfError::InvalidMesh(TriMeshBuilderError::EmptyIndices));

    let err = DistanceField::from_buffers(vertices, vec![[0, 1, 2]], 0.1, 1, SdfConfig::default())
        .unwrap_err();
    assert_eq!(
        err,
        SdfError::InvalidMesh(TriMeshBuilderError::IndexOutOfBounds {
            triangle: 0,
            index: 2
        })
    );
}

#[test]
fn degenerate_triangles_do_not_abort() {
    let mut vertices = cube(0.5).vertices().to_vec();
    let mut indices = cube(0.5).indices().to_vec();
    // A zero-area triangle and a single-point triangle.
    vertices.push(Point3::new(0.0, 0.0, 0.0));
    indices.push([0, 7, 8]);
    indices.push([8, 8, 8]);

    let field = DistanceField::from_buffers(vertices, indices, 0.1, 1, SdfConfig::default()).unwrap();
    assert!(field.values().iter().all(|v| v.is_finite()));
}
