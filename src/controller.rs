use crate::{build, max_depth, BuildError, Index, Mesh};

pub struct ControllerParameters {
    pub initial_depth: u32,
    /// Increments past this depth are ignored.
    pub max_depth: u32,
}

impl ControllerParameters {
    /// Starts at depth 0 with the deepest level `I` can address.
    pub fn for_index<I: Index>() -> Self {
        Self {
            initial_depth: 0,
            max_depth: max_depth::<I>(),
        }
    }
}

/// Current subdivision depth together with the mesh built for it.
///
/// Every change rebuilds from scratch, and the stored mesh is replaced
/// only when the new build succeeds.
pub struct DepthController<I> {
    depth: u32,
    max_depth: u32,
    mesh: Mesh<I>,
    generation: u64,
}

impl<I: Index> DepthController<I> {
    pub fn new(params: &ControllerParameters) -> Result<Self, BuildError> {
        let supported = max_depth::<I>();
        if params.max_depth > supported {
            return Err(BuildError::MaxDepthUnsupported {
                max_depth: params.max_depth,
                supported,
                index_type: I::NAME,
            });
        }
        let depth = params.initial_depth.min(params.max_depth);
        Ok(Self {
            depth,
            max_depth: params.max_depth,
            mesh: build(depth)?,
            generation: 0,
        })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn mesh(&self) -> &Mesh<I> {
        &self.mesh
    }

    /// Bumped every time a new mesh is installed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if a new mesh was installed.
    pub fn increase(&mut self) -> Result<bool, BuildError> {
        if self.depth >= self.max_depth {
            log::debug!("Depth {} is already at the limit", self.depth);
            return Ok(false);
        }
        self.rebuild(self.depth + 1)
    }

    pub fn decrease(&mut self) -> Result<bool, BuildError> {
        match self.depth.checked_sub(1) {
            Some(depth) => self.rebuild(depth),
            None => Ok(false),
        }
    }

    /// Moves to `depth`, clamped to the configured bound.
    pub fn set_depth(&mut self, depth: u32) -> Result<bool, BuildError> {
        let depth = depth.min(self.max_depth);
        if depth == self.depth {
            return Ok(false);
        }
        self.rebuild(depth)
    }

    fn rebuild(&mut self, depth: u32) -> Result<bool, BuildError> {
        self.install(depth, build(depth))
    }

    fn install(
        &mut self,
        depth: u32,
        result: Result<Mesh<I>, BuildError>,
    ) -> Result<bool, BuildError> {
        match result {
            Ok(mesh) => {
                self.depth = depth;
                self.mesh = mesh;
                self.generation += 1;
                Ok(true)
            }
            Err(e) => {
                log::warn!("Keeping depth {}: {}", self.depth, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ControllerParameters, DepthController};
    use crate::BuildError;

    fn controller(initial_depth: u32, max_depth: u32) -> DepthController<u16> {
        DepthController::new(&ControllerParameters {
            initial_depth,
            max_depth,
        })
        .unwrap()
    }

    #[test]
    fn step_up_and_down() {
        let mut c = controller(0, 3);
        assert!(c.increase().unwrap());
        assert_eq!(c.depth(), 1);
        assert_eq!(c.mesh().vertices().len(), 42);
        assert!(c.decrease().unwrap());
        assert_eq!(c.mesh().vertices().len(), 12);
        assert_eq!(c.generation(), 2);
    }

    #[test]
    fn clamps_at_zero() {
        let mut c = controller(0, 3);
        assert!(!c.decrease().unwrap());
        assert_eq!(c.depth(), 0);
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn ignores_past_max() {
        let mut c = controller(2, 2);
        assert!(!c.increase().unwrap());
        assert_eq!(c.depth(), 2);
        assert_eq!(c.mesh().triangles().len(), 320);
    }

    #[test]
    fn set_depth_clamps() {
        let mut c = controller(0, 4);
        assert!(c.set_depth(100).unwrap());
        assert_eq!(c.depth(), 4);
        assert!(!c.set_depth(4).unwrap());
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn initial_depth_clamped() {
        let c = controller(9, 2);
        assert_eq!(c.depth(), 2);
        assert_eq!(c.mesh().vertices().len(), 162);
    }

    #[test]
    fn failed_build_keeps_previous_mesh() {
        let mut c = controller(1, 3);
        let before = c.mesh().clone();
        let err = BuildError::DepthTooLarge {
            depth: 2,
            vertex_count: Some(162),
            index_type: "u16",
        };
        assert_eq!(c.install(2, Err(err.clone())).unwrap_err(), err);
        assert_eq!(c.depth(), 1);
        assert_eq!(c.generation(), 0);
        assert_eq!(c.mesh(), &before);

        // the next successful change still goes through
        assert!(c.increase().unwrap());
        assert_eq!(c.depth(), 2);
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn rejects_unsupported_bound() {
        let err = DepthController::<u16>::new(&ControllerParameters {
            initial_depth: 0,
            max_depth: 7,
        })
        .err()
        .unwrap();
        assert_eq!(
            err,
            BuildError::MaxDepthUnsupported {
                max_depth: 7,
                supported: 6,
                index_type: "u16",
            }
        );
    }

    #[test]
    fn default_bound_follows_index() {
        let params = ControllerParameters::for_index::<u16>();
        assert_eq!(params.max_depth, 6);
        let c = DepthController::<u16>::new(&params).unwrap();
        assert_eq!(c.depth(), 0);
    }
}
