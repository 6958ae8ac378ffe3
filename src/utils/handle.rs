use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::category::HandleCategory;

/// Copyable token naming one slot of a [`HandleStorage`](super::HandleStorage).
///
/// The slot id sits in the upper 16 bits and the generation in the lower 16.
/// A handle is only meaningful to the storage that issued it.
pub struct Handle<C> {
    raw: u32,
    phantom: PhantomData<fn() -> C>,
}

impl<C> Handle<C> {
    pub const MAX_ID: u16 = u16::MAX;
    pub const MAX_GENERATION: u16 = u16::MAX;

    pub const fn new(id: u16, generation: u16) -> Self {
        Self {
            raw: ((id as u32) << 16) | generation as u32,
            phantom: PhantomData,
        }
    }

    /// Rebuilds a handle from [`Handle::to_raw`]. No validation happens here,
    /// the issuing storage rejects garbage on lookup.
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            phantom: PhantomData,
        }
    }

    pub const fn to_raw(self) -> u32 {
        self.raw
    }

    pub const fn id(self) -> u16 {
        (self.raw >> 16) as u16
    }

    pub const fn generation(self) -> u16 {
        (self.raw & 0xFFFF) as u16
    }

    pub(crate) fn slot(self) -> usize {
        self.id() as usize
    }
}

impl<C> PartialEq for Handle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<C> Eq for Handle<C> {}

impl<C> Clone for Handle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Handle<C> {}

impl<C> Hash for Handle<C> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<C> Default for Handle<C> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<C: HandleCategory> fmt::Debug for Handle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Handle<{}>(id: {}, gen: {})",
            C::NAME,
            self.id(),
            self.generation()
        )
    }
}
