use na::Point3;
use sdfgen3d::math::Real;
use sdfgen3d::shape::TriMesh;

/// An axis-aligned cube centered at the origin, with outward-facing triangles.
pub fn cube(half_width: Real) -> TriMesh {
    let h = half_width;
    let vertices = (0..8)
        .map(|i| {
            Point3::new(
                if i & 1 == 0 { -h } else { h },
                if i & 2 == 0 { -h } else { h },
                if i & 4 == 0 { -h } else { h },
            )
        })
        .collect();
    let faces: [&[u32]; 6] = [
        &[0, 2, 3, 1],
        &[4, 5, 7, 6],
        &[0, 1, 5, 4],
        &[2, 6, 7, 3],
        &[0, 4, 6, 2],
        &[1, 3, 7, 5],
    ];

    TriMesh::from_polygons(vertices, &faces).unwrap()
}

/// The exact signed distance from `pt` to the cube built by [`cube`].
pub fn cube_sdf(pt: &Point3<Real>, half_width: Real) -> Real {
    let q = pt.coords.abs().add_scalar(-half_width);
    q.sup(&na::zero()).norm() + q.max().min(0.0)
}

/// A latitude/longitude tessellation of the sphere of radius `radius` centered at the origin.
pub fn uv_sphere(radius: Real, nlat: u32, nlon: u32) -> TriMesh {
    let pi = core::f64::consts::PI;
    let mut vertices = vec![Point3::new(0.0, 0.0, radius)];

    for a in 1..nlat {
        let theta = pi * a as f64 / nlat as f64;
        for b in 0..nlon {
            let phi = 2.0 * pi * b as f64 / nlon as f64;
            vertices.push(Point3::new(
                radius * (theta.sin() * phi.cos()) as Real,
                radius * (theta.sin() * phi.sin()) as Real,
                radius * theta.cos() as Real,
            ));
        }
    }

    vertices.push(Point3::new(0.0, 0.0, -radius));
    let south = vertices.len() as u32 - 1;
    let ring = |a: u32, b: u32| 1 + (a - 1) * nlon + b % nlon;

    let mut faces = vec![];
    for b in 0..nlon {
        faces.push(vec![0, ring(1, b), ring(1, b + 1)]);
        faces.push(vec![south, ring(nlat - 1, b + 1), ring(nlat - 1, b)]);
    }
    for a in 1..nlat - 1 {
        for b in 0..nlon {
            faces.push(vec![ring(a, b), ring(a + 1, b), ring(a + 1, b + 1), ring(a, b + 1)]);
        }
    }

    let faces: Vec<&[u32]> = faces.iter().map(|f| &f[..]).collect();
    TriMesh::from_polygons(vertices, &faces).unwrap()
}
