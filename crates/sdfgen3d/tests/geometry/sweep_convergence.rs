use crate::common::{cube, uv_sphere};
use sdfgen3d::math::Real;
use sdfgen3d::sdf::{GridSpec, SdfBuilder, SdfConfig, SweepRelaxation};
use sdfgen3d::shape::TriMesh;

fn sweep_changes(mesh: &TriMesh, dx: Real, padding: u32, config: SdfConfig) -> Vec<Real> {
    let grid = GridSpec::from_aabb(mesh.local_aabb(), dx, padding).unwrap();
    let (_, report) = SdfBuilder::new(mesh, grid, config)
        .compute_exact_distances()
        .unwrap()
        .compute_signs()
        .unwrap()
        .propagate_with_report()
        .unwrap();
    report.pass_max_changes
}

#[test]
fn default_sweeps_converge_on_a_cube() {
    let changes = sweep_changes(&cube(0.5), 0.1, 1, SdfConfig::default());
    assert_eq!(changes.len(), 2);
    assert!(changes[0] > 0.0);
    assert!(changes[1] < 0.1 * 1.0e-3, "{:?}", changes);
}

#[test]
fn sweeps_converge_far_from_a_sphere() {
    for relaxation in [SweepRelaxation::ClosestTriangle, SweepRelaxation::UnitStep] {
        let config = SdfConfig::default()
            .with_sweep_passes(3)
            .with_relaxation(relaxation);
        let changes = sweep_changes(&uv_sphere(1.0, 24, 48), 0.2, 3, config);

        assert_eq!(changes.len(), 3);
        assert!(changes[1] < 0.2 * 1.0e-3, "{:?}", changes);
        assert!(changes[2] < 0.2 * 1.0e-3, "{:?}", changes);
    }
}

#[test]
fn no_sweep_leaves_unknown_distances() {
    let mesh = cube(0.5);
    let grid = GridSpec::from_aabb(mesh.local_aabb(), 0.1, 4).unwrap();
    let config = SdfConfig::default().with_sweep_passes(0);
    let (field, report) = SdfBuilder::new(&mesh, grid, config)
        .compute_exact_distances()
        .unwrap()
        .compute_signs()
        .unwrap()
        .propagate_with_report()
        .unwrap();

    assert!(report.pass_max_changes.is_empty());
    // The grid corners are farther than the band of any triangle.
    assert_eq!(field.value_at(0, 0, 0), grid.unknown_distance());
    assert!(field.values().iter().all(|v| v.is_finite()));
}
