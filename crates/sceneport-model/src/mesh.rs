use bitflags::bitflags;
use glam::Vec3;

use crate::material::DEFAULT_MATERIAL_INDEX;

bitflags! {
    /// Kinds of primitives present in a mesh.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PrimitiveType: u32 {
        const TRIANGLE = 1 << 0;
        /// At least one face has more than three corners.
        const POLYGON = 1 << 1;
    }
}

/// Face of an expanded mesh: 3 or 4 sequential indices private to the face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<u32>,
}

impl Face {
    pub fn new(indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() == 3 || indices.len() == 4);
        Self { indices }
    }

    pub fn is_triangle(&self) -> bool {
        self.indices.len() == 3
    }
}

/// Non-indexed polygon mesh. Faces never share vertices, even where the
/// source polygons shared points.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
    pub primitive_types: PrimitiveType,
    pub material_index: u32,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>, primitive_types: PrimitiveType) -> Self {
        Mesh {
            vertices,
            faces,
            primitive_types,
            material_index: DEFAULT_MATERIAL_INDEX,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.faces.iter().filter(|face| face.is_triangle()).count()
    }

    pub fn num_quads(&self) -> usize {
        self.num_faces() - self.num_triangles()
    }

    pub fn has_polygons(&self) -> bool {
        self.primitive_types.contains(PrimitiveType::POLYGON)
    }

    pub fn face_vertices<'a>(&'a self, face: &'a Face) -> impl Iterator<Item = Vec3> + 'a {
        face.indices.iter().map(|&i| self.vertices[i as usize])
    }

    /// Checks that the faces, taken in order, cover `0..num_vertices()` with
    /// consecutive runs and that no index is used twice.
    pub fn is_fully_expanded(&self) -> bool {
        let mut next = 0u32;
        for face in &self.faces {
            for &index in &face.indices {
                if index != next {
                    return false;
                }
                next += 1;
            }
        }
        next as usize == self.vertices.len()
    }
}
