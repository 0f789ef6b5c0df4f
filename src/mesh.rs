use std::collections::BTreeSet;

use crate::{EdgeKey, Index, IndexWidth};

/// Indexed triangle mesh on the unit sphere.
///
/// Immutable once built: rebuilding at another depth produces a new mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<I> {
    vertices: Vec<glam::Vec3>,
    triangles: Vec<[I; 3]>,
}

impl<I: Index> Mesh<I> {
    pub(crate) fn from_parts(vertices: Vec<glam::Vec3>, triangles: Vec<[I; 3]>) -> Self {
        debug_assert!(triangles
            .iter()
            .flatten()
            .all(|i| i.to_usize() < vertices.len()));
        Self {
            vertices,
            triangles,
        }
    }

    pub fn vertices(&self) -> &[glam::Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[I; 3]] {
        &self.triangles
    }

    pub fn into_parts(self) -> (Vec<glam::Vec3>, Vec<[I; 3]>) {
        (self.vertices, self.triangles)
    }

    /// Vertex buffer contents, tightly packed `f32` triples.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents, three indices per triangle.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = mint::Point3<f32>> + '_ {
        self.vertices.iter().map(|&v| v.into())
    }

    /// Unique undirected edges as `[min, max]` pairs, sorted.
    ///
    /// Suitable for a line list when drawing the mesh as a wireframe.
    pub fn edges(&self) -> Vec<[I; 2]> {
        let mut edges = BTreeSet::new();
        for &[a, b, c] in &self.triangles {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                edges.insert(EdgeKey::new(p, q));
            }
        }
        edges
            .into_iter()
            .map(|key| {
                let (lo, hi) = key.ends();
                [lo, hi]
            })
            .collect()
    }
}

/// Mesh whose index width was picked at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyMesh {
    U16(Mesh<u16>),
    U32(Mesh<u32>),
}

impl AnyMesh {
    pub fn width(&self) -> IndexWidth {
        match *self {
            Self::U16(_) => IndexWidth::U16,
            Self::U32(_) => IndexWidth::U32,
        }
    }

    pub fn vertices(&self) -> &[glam::Vec3] {
        match *self {
            Self::U16(ref mesh) => mesh.vertices(),
            Self::U32(ref mesh) => mesh.vertices(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        match *self {
            Self::U16(ref mesh) => mesh.triangles().len(),
            Self::U32(ref mesh) => mesh.triangles().len(),
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        match *self {
            Self::U16(ref mesh) => mesh.vertex_bytes(),
            Self::U32(ref mesh) => mesh.vertex_bytes(),
        }
    }

    pub fn index_bytes(&self) -> &[u8] {
        match *self {
            Self::U16(ref mesh) => mesh.index_bytes(),
            Self::U32(ref mesh) => mesh.index_bytes(),
        }
    }
}

impl From<Mesh<u16>> for AnyMesh {
    fn from(mesh: Mesh<u16>) -> Self {
        Self::U16(mesh)
    }
}

impl From<Mesh<u32>> for AnyMesh {
    fn from(mesh: Mesh<u32>) -> Self {
        Self::U32(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyMesh, Mesh};
    use crate::Icosahedron;
    use std::mem;

    #[test]
    fn buffer_sizes() {
        let mesh: Mesh<u16> = Icosahedron::new().into_mesh();
        assert_eq!(mesh.vertex_bytes().len(), 12 * mem::size_of::<[f32; 3]>());
        assert_eq!(mesh.index_bytes().len(), 20 * mem::size_of::<[u16; 3]>());

        let wide = AnyMesh::from(Icosahedron::new().into_mesh::<u32>());
        assert_eq!(wide.index_bytes().len(), 20 * mem::size_of::<[u32; 3]>());
        assert_eq!(wide.vertex_bytes(), mesh.vertex_bytes());
    }

    #[test]
    fn index_bytes_layout() {
        let mesh: Mesh<u16> = Icosahedron::new().into_mesh();
        assert_eq!(&mesh.index_bytes()[..6], &[0, 0, 4, 0, 1, 0]);
    }

    #[test]
    fn icosahedron_edges() {
        let mesh: Mesh<u16> = Icosahedron::new().into_mesh();
        let edges = mesh.edges();
        assert_eq!(edges.len(), 30);
        assert!(edges.iter().all(|e| e[0] < e[1]));
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn points_match_vertices() {
        let mesh: Mesh<u16> = Icosahedron::new().into_mesh();
        let first = mesh.points().next().unwrap();
        assert_eq!([first.x, first.y, first.z], mesh.vertices()[0].to_array());
        assert_eq!(mesh.points().len(), 12);
    }
}
