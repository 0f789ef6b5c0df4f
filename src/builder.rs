use crate::{subdivide, AnyMesh, BuildError, Icosahedron, Index, IndexWidth, Mesh};

/// Vertex count of an icosphere at `depth`: `10 * 4^depth + 2`.
///
/// Returns `None` if the count does not fit `u64`.
pub fn vertex_count(depth: u32) -> Option<u64> {
    quad_power(depth)?.checked_mul(10)?.checked_add(2)
}

/// Triangle count of an icosphere at `depth`: `20 * 4^depth`.
pub fn triangle_count(depth: u32) -> Option<u64> {
    quad_power(depth)?.checked_mul(20)
}

fn quad_power(depth: u32) -> Option<u64> {
    1u64.checked_shl(depth.checked_mul(2)?)
}

/// Deepest level whose vertices are all addressable by `I`.
pub fn max_depth<I: Index>() -> u32 {
    let mut depth = 0;
    while vertex_count(depth + 1).map_or(false, |count| count <= I::MAX_VERTICES) {
        depth += 1;
    }
    depth
}

/// Builds the icosphere at `depth` from scratch.
///
/// Identical depths yield identical meshes. Fails without doing any work if the
/// vertex count would exceed the range of `I`.
pub fn build<I: Index>(depth: u32) -> Result<Mesh<I>, BuildError> {
    let vertex_total = vertex_count(depth);
    let fits = vertex_total.map_or(false, |count| count <= I::MAX_VERTICES);
    if !fits {
        return Err(BuildError::DepthTooLarge {
            depth,
            vertex_count: vertex_total,
            index_type: I::NAME,
        });
    }

    let (mut vertices, mut triangles) = Icosahedron::new().into_mesh::<I>().into_parts();
    if let Some(count) = vertex_total.and_then(|count| usize::try_from(count).ok()) {
        vertices.reserve_exact(count - vertices.len());
    }
    for pass in 0..depth {
        triangles = subdivide(&mut vertices, &triangles)?;
        log::debug!(
            "Pass {}: {} vertices, {} triangles",
            pass + 1,
            vertices.len(),
            triangles.len()
        );
    }

    log::info!(
        "Built icosphere of depth {} with {} vertices and {} {} triangles",
        depth,
        vertices.len(),
        triangles.len(),
        I::NAME,
    );
    Ok(Mesh::from_parts(vertices, triangles))
}

/// Builds the icosphere at `depth` with a runtime-selected index width.
pub fn build_any(depth: u32, width: IndexWidth) -> Result<AnyMesh, BuildError> {
    Ok(match width {
        IndexWidth::U16 => build::<u16>(depth)?.into(),
        IndexWidth::U32 => build::<u32>(depth)?.into(),
    })
}
