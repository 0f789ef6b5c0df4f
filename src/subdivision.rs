use std::collections::HashMap;

use crate::{BuildError, Index};

/// Undirected edge, smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey<I>(I, I);

impl<I: Index> EdgeKey<I> {
    pub fn new(a: I, b: I) -> Self {
        if a < b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn ends(self) -> (I, I) {
        (self.0, self.1)
    }
}

/// Midpoint vertices created during one subdivision pass.
pub struct EdgeMidpointCache<I> {
    midpoints: HashMap<EdgeKey<I>, I>,
}

impl<I: Index> EdgeMidpointCache<I> {
    pub fn new() -> Self {
        Self {
            midpoints: HashMap::new(),
        }
    }

    pub fn with_capacity(edges: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(edges),
        }
    }

    /// Returns the midpoint vertex of edge `(a, b)`, appending it on first use.
    ///
    /// `a` and `b` must be distinct, existing vertex indices.
    pub fn lookup(
        &mut self,
        vertices: &mut Vec<glam::Vec3>,
        a: I,
        b: I,
    ) -> Result<I, BuildError> {
        debug_assert_ne!(a, b, "degenerate edge");
        debug_assert!(a.to_usize() < vertices.len() && b.to_usize() < vertices.len());

        let key = EdgeKey::new(a, b);
        if let Some(&index) = self.midpoints.get(&key) {
            return Ok(index);
        }
        let index = I::from_usize(vertices.len()).ok_or(BuildError::IndexOverflow {
            vertex_count: vertices.len() + 1,
            index_type: I::NAME,
        })?;
        let point = (vertices[a.to_usize()] + vertices[b.to_usize()]).normalize();
        vertices.push(point);
        self.midpoints.insert(key, index);
        Ok(index)
    }

    /// Number of midpoints created so far.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

impl<I: Index> Default for EdgeMidpointCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits every triangle into four, extending `vertices` with edge midpoints.
///
/// Corner triangles come first, followed by the center one.
/// All of them keep the winding of their source triangle.
pub fn subdivide<I: Index>(
    vertices: &mut Vec<glam::Vec3>,
    triangles: &[[I; 3]],
) -> Result<Vec<[I; 3]>, BuildError> {
    // closed meshes have 3/2 edges per face
    let mut cache = EdgeMidpointCache::with_capacity(triangles.len() * 3 / 2);
    let mut result = Vec::with_capacity(triangles.len() * 4);
    vertices.reserve(triangles.len() * 3 / 2);

    for &[v0, v1, v2] in triangles {
        let m01 = cache.lookup(vertices, v0, v1)?;
        let m12 = cache.lookup(vertices, v1, v2)?;
        let m20 = cache.lookup(vertices, v2, v0)?;

        result.push([v0, m01, m20]);
        result.push([v1, m12, m01]);
        result.push([v2, m20, m12]);
        result.push([m01, m12, m20]);
    }

    log::debug!(
        "Subdivided {} triangles into {}, adding {} midpoints",
        triangles.len(),
        result.len(),
        cache.len()
    );
    Ok(result)
}
