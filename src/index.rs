use std::{fmt, hash::Hash};

use crate::{builder, BuildError};

/// Integer type used for triangle indices.
///
/// Implemented for `u16` and `u32`, the two index formats graphics APIs accept.
pub trait Index:
    Copy + Eq + Ord + Hash + fmt::Debug + bytemuck::Pod + From<u16> + Send + Sync + 'static
{
    /// Name used in error messages.
    const NAME: &'static str;
    /// Number of distinct vertices addressable by this type.
    const MAX_VERTICES: u64;

    fn from_usize(value: usize) -> Option<Self>;
    fn to_usize(self) -> usize;
}

impl Index for u16 {
    const NAME: &'static str = "u16";
    const MAX_VERTICES: u64 = u16::MAX as u64 + 1;

    fn from_usize(value: usize) -> Option<Self> {
        u16::try_from(value).ok()
    }
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl Index for u32 {
    const NAME: &'static str = "u32";
    const MAX_VERTICES: u64 = u32::MAX as u64 + 1;

    fn from_usize(value: usize) -> Option<Self> {
        u32::try_from(value).ok()
    }
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// Index width chosen at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexWidth {
    U16,
    U32,
}

impl IndexWidth {
    /// Picks the narrowest width able to address every vertex up to `max_depth`.
    pub fn select(max_depth: u32) -> Result<Self, BuildError> {
        if max_depth <= builder::max_depth::<u16>() {
            Ok(Self::U16)
        } else if max_depth <= builder::max_depth::<u32>() {
            Ok(Self::U32)
        } else {
            Err(BuildError::DepthTooLarge {
                depth: max_depth,
                vertex_count: builder::vertex_count(max_depth),
                index_type: u32::NAME,
            })
        }
    }

    pub fn max_depth(self) -> u32 {
        match self {
            Self::U16 => builder::max_depth::<u16>(),
            Self::U32 => builder::max_depth::<u32>(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U16 => u16::NAME,
            Self::U32 => u32::NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Index, IndexWidth};

    #[test]
    fn conversion_limits() {
        assert_eq!(u16::from_usize(65535), Some(u16::MAX));
        assert_eq!(u16::from_usize(65536), None);
        assert_eq!(u32::from_usize(65536), Some(65536));
        assert_eq!(40000u16.to_usize(), 40000);
    }

    #[test]
    fn select_narrowest() {
        assert_eq!(IndexWidth::select(0).unwrap(), IndexWidth::U16);
        assert_eq!(IndexWidth::select(6).unwrap(), IndexWidth::U16);
        assert_eq!(IndexWidth::select(7).unwrap(), IndexWidth::U32);
        assert_eq!(IndexWidth::select(14).unwrap(), IndexWidth::U32);
        assert!(IndexWidth::select(15).is_err());
    }

    #[test]
    fn width_limits() {
        assert_eq!(IndexWidth::U16.max_depth(), 6);
        assert_eq!(IndexWidth::U32.max_depth(), 14);
    }
}
