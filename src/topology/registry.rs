//! Identifier registry: allocation, liveness and deterministic iteration.
//!
//! The registry hands out monotonically increasing handles and never recycles
//! one, so a stale handle can always be detected instead of silently aliasing
//! a newer entity. Iteration follows allocation order, which the OBJ writer
//! and the tests rely on for reproducible output.

use crate::mesh_error::TopoMeshError;
use crate::topology::handles::Handle;
use std::num::NonZeroU64;

/// Monotonic handle allocator with a live set.
#[derive(Clone, Debug)]
pub struct HandleRegistry<H> {
    next: u64,
    order: Vec<H>,
    live: hashbrown::HashSet<H>,
}

impl<H: Handle> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self {
            next: 0,
            order: Vec::new(),
            live: hashbrown::HashSet::new(),
        }
    }
}

impl<H: Handle> HandleRegistry<H> {
    /// Allocates a fresh handle. Freed handles are never handed out again.
    pub fn allocate(&mut self) -> H {
        self.next += 1;
        // next started at 0 and only ever increments
        let raw = NonZeroU64::new(self.next).expect("allocation counter overflowed to zero");
        let handle = H::from_raw(raw);
        self.order.push(handle);
        self.live.insert(handle);
        handle
    }

    /// Invalidates a handle. Freeing a handle that is not live is a
    /// programming error and reports `InvalidHandle`.
    pub fn free(&mut self, handle: H) -> Result<(), TopoMeshError> {
        if self.live.remove(&handle) {
            Ok(())
        } else {
            Err(TopoMeshError::InvalidHandle(handle.to_string()))
        }
    }

    /// Membership test for live handles.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.live.contains(&handle)
    }

    /// Live handles in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.order.iter().copied().filter(|h| self.live.contains(h))
    }

    /// Number of live handles.
    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True if no handle is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
