use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Triangle;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which does not exist.")]
    IndexOutOfBounds {
        /// The faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
    /// Only triangles and quads can be split into triangles.
    #[error("the face {face} has {num_vertices} vertices; only triangles and quads are supported.")]
    UnsupportedPolygon {
        /// The faulty face.
        face: u32,
        /// The number of vertices of the faulty face.
        num_vertices: usize,
    },
}

/// A triangle mesh, described by its vertex and index buffers.
///
/// The mesh is expected to be closed and consistently oriented (outward-facing triangles)
/// when used to build a signed distance field. These properties are not checked: violating
/// them produces a deterministic but meaningless sign field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// Fails if `indices` is empty, or if any index does not address an element of `vertices`.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (tid, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|&&i| i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: tid as u32,
                    index: *bad,
                });
            }
        }

        let aabb = Aabb::from_points(vertices.iter().copied());

        Ok(Self {
            vertices,
            indices,
            aabb,
        })
    }

    /// Creates a new triangle mesh from faces with three or four vertices each.
    ///
    /// A quad `[a, b, c, d]` is split into the triangles `[a, b, c]` and `[c, d, a]`, which
    /// preserves its orientation.
    pub fn from_polygons(
        vertices: Vec<Point<Real>>,
        faces: &[&[u32]],
    ) -> Result<Self, TriMeshBuilderError> {
        let mut indices = Vec::with_capacity(faces.len() * 2);

        for (fid, face) in faces.iter().enumerate() {
            match **face {
                [a, b, c] => indices.push([a, b, c]),
                [a, b, c, d] => {
                    indices.push([a, b, c]);
                    indices.push([c, d, a]);
                }
                _ => {
                    return Err(TriMeshBuilderError::UnsupportedPolygon {
                        face: fid as u32,
                        num_vertices: face.len(),
                    })
                }
            }
        }

        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles forming this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the `i`-th triangle of this mesh.
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The AABB of the vertices of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }
}
