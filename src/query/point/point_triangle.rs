use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{SegmentPointLocation, Triangle, TrianglePointLocation};

#[inline]
fn compute_result(pt: &Point<Real>, proj: Point<Real>) -> PointProjection {
    PointProjection::new(relative_eq!(proj, *pt), proj)
}

impl PointQuery for Triangle {
    #[inline]
    fn project_local_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_local_point_and_get_location(pt).0
    }
}

impl PointQueryWithLocation for Triangle {
    type Location = TrianglePointLocation;

    #[inline]
    fn project_local_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (PointProjection, Self::Location) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let _1 = 1.0;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return (compute_result(pt, a), TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return (compute_result(pt, b), TrianglePointLocation::OnVertex(1));
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return (compute_result(pt, c), TrianglePointLocation::OnVertex(2));
        }

        enum ProjectionInfo {
            OnAB,
            OnAC,
            OnBC,
            // The usize indicates if we are on the CW side (0) or CCW side (1) of the face.
            OnFace(usize, Real, Real, Real),
        }

        // Checks on which edge voronoï region the point is.
        // Uses explicit cross products that are more numerically stable.
        fn stable_check_edges_voronoi(
            ab: &Vector<Real>,
            ac: &Vector<Real>,
            bc: &Vector<Real>,
            ap: &Vector<Real>,
            bp: &Vector<Real>,
            cp: &Vector<Real>,
            ab_ap: Real,
            ab_bp: Real,
            ac_ap: Real,
            ac_cp: Real,
            ac_bp: Real,
            ab_cp: Real,
        ) -> ProjectionInfo {
            let n = ab.cross(ac);

            let vc = n.dot(&ab.cross(ap));
            if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
                return ProjectionInfo::OnAB;
            }

            let vb = -n.dot(&ac.cross(cp));
            if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
                return ProjectionInfo::OnAC;
            }

            let va = n.dot(&bc.cross(bp));
            if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
                return ProjectionInfo::OnBC;
            }

            let clockwise = if n.dot(ap) >= 0.0 { 0 } else { 1 };

            ProjectionInfo::OnFace(clockwise, va, vb, vc)
        }

        let bc = c - b;
        match stable_check_edges_voronoi(
            &ab, &ac, &bc, &ap, &bp, &cp, ab_ap, ab_bp, ac_ap, ac_cp, ac_bp, ab_cp,
        ) {
            ProjectionInfo::OnAB => {
                // Voronoï region of `ab`.
                let v = ab_ap / ab.norm_squared();
                let bcoords = [_1 - v, v];

                let res = a + ab * v;
                (
                    compute_result(pt, res),
                    TrianglePointLocation::OnEdge(0, bcoords),
                )
            }
            ProjectionInfo::OnAC => {
                // Voronoï region of `ac`.
                let w = ac_ap / ac.norm_squared();
                let bcoords = [_1 - w, w];

                let res = a + ac * w;
                (
                    compute_result(pt, res),
                    TrianglePointLocation::OnEdge(2, bcoords),
                )
            }
            ProjectionInfo::OnBC => {
                // Voronoï region of `bc`.
                let w = bc.dot(&bp) / bc.norm_squared();
                let bcoords = [_1 - w, w];

                let res = b + bc * w;
                (
                    compute_result(pt, res),
                    TrianglePointLocation::OnEdge(1, bcoords),
                )
            }
            ProjectionInfo::OnFace(face_side, va, vb, vc) => {
                // Voronoï region of the face.
                let sum = va + vb + vc;

                if sum != 0.0 {
                    let denom = _1 / sum;
                    let v = vb * denom;
                    let w = vc * denom;
                    let bcoords = [_1 - v - w, v, w];
                    let res = a + ab * v + ac * w;

                    (
                        compute_result(pt, res),
                        TrianglePointLocation::OnFace(face_side as u32, bcoords),
                    )
                } else {
                    // The triangle has no area (collinear or coincident vertices):
                    // the closest point lies on one of its (possibly degenerate) edges.
                    self.project_on_closest_edge(pt)
                }
            }
        }
    }
}

impl Triangle {
    /// Projects `pt` on each clamped edge of this triangle and keeps the closest projection.
    ///
    /// This never divides by zero, even if some edges have a zero length.
    fn project_on_closest_edge(&self, pt: &Point<Real>) -> (PointProjection, TrianglePointLocation) {
        let mut best = None;
        let mut best_dist = Real::MAX;

        for (eid, edge) in self.edges().iter().enumerate() {
            let (proj, loc) = edge.project_local_point_and_get_location(pt);
            let dist = na::distance_squared(pt, &proj.point);

            if dist < best_dist || best.is_none() {
                best_dist = dist;
                best = Some((proj, eid, loc));
            }
        }

        // The vertex ids of each edge, matching `Triangle::edges`.
        const EDGE_VERTICES: [[u32; 2]; 3] = [[0, 1], [1, 2], [0, 2]];

        match best {
            Some((proj, eid, SegmentPointLocation::OnVertex(i))) => {
                (proj, TrianglePointLocation::OnVertex(EDGE_VERTICES[eid][i as usize]))
            }
            Some((proj, eid, SegmentPointLocation::OnEdge(bcoords))) => {
                (proj, TrianglePointLocation::OnEdge(eid as u32, bcoords))
            }
            None => (
                compute_result(pt, self.a),
                TrianglePointLocation::OnVertex(0),
            ),
        }
    }
}
