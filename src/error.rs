/// Failures of a single mesh build.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The vertex count at this depth does not fit the index type
    #[error("depth {depth} needs {} vertices, more than {index_type} indices can address", DisplayCount(.vertex_count))]
    DepthTooLarge {
        depth: u32,
        /// `None` when the count itself overflows `u64`
        vertex_count: Option<u64>,
        index_type: &'static str,
    },
    /// A subdivision pass ran out of index space
    #[error("vertex #{vertex_count} can not be addressed by {index_type} indices")]
    IndexOverflow {
        vertex_count: usize,
        index_type: &'static str,
    },
    /// A controller was configured with a depth bound its index type can not serve
    #[error("max depth {max_depth} exceeds {supported}, the limit for {index_type} indices")]
    MaxDepthUnsupported {
        max_depth: u32,
        supported: u32,
        index_type: &'static str,
    },
}

struct DisplayCount<'a>(&'a Option<u64>);

impl std::fmt::Display for DisplayCount<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self.0 {
            Some(count) => write!(f, "{}", count),
            None => write!(f, "over {}", u64::MAX),
        }
    }
}
