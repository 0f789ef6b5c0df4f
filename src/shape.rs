use crate::{Index, Mesh};

const X: f32 = 0.525731112119133606;
const Z: f32 = 0.850650808352039932;

/// Regular icosahedron inscribed in the unit sphere.
///
/// Every vertex already has unit length. All faces share the same winding.
pub struct Icosahedron {
    pub vertices: [[f32; 3]; 12],
    pub triangles: [[u16; 3]; 20],
}

impl Icosahedron {
    pub fn new() -> Self {
        // https://schneide.blog/2016/07/15/generating-an-icosphere-in-c/
        Self {
            vertices: [
                [-X, 0.0, Z],
                [X, 0.0, Z],
                [-X, 0.0, -Z],
                [X, 0.0, -Z],
                [0.0, Z, X],
                [0.0, Z, -X],
                [0.0, -Z, X],
                [0.0, -Z, -X],
                [Z, X, 0.0],
                [-Z, X, 0.0],
                [Z, -X, 0.0],
                [-Z, -X, 0.0],
            ],
            triangles: [
                [0, 4, 1],
                [0, 9, 4],
                [9, 5, 4],
                [4, 5, 8],
                [4, 8, 1],
                [8, 10, 1],
                [8, 3, 10],
                [5, 3, 8],
                [5, 2, 3],
                [2, 7, 3],
                [7, 10, 3],
                [7, 6, 10],
                [7, 11, 6],
                [11, 0, 6],
                [0, 1, 6],
                [6, 1, 10],
                [9, 0, 11],
                [9, 11, 2],
                [9, 2, 5],
                [7, 2, 11],
            ],
        }
    }

    /// Depth-0 mesh with the requested index width.
    pub fn into_mesh<I: Index>(self) -> Mesh<I> {
        let vertices = self.vertices.iter().map(|&v| glam::Vec3::from(v)).collect();
        let triangles = self
            .triangles
            .iter()
            .map(|t| t.map(I::from))
            .collect();
        Mesh::from_parts(vertices, triangles)
    }
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}
