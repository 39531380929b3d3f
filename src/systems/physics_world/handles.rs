use rapier2d::prelude::RigidBodyHandle;

use crate::domain::BridgeError;
use crate::domain::error::OutOfMemoryErr;

/// Id handed to the host. `0` is never issued, so hosts can treat it as "none".
pub type BodyId = u32;

/// Maps host-facing ids to engine handles.
///
/// Ids are `index + 1` into `handles`. Bodies are never removed through the
/// bridge, so ids stay dense and are never reused. The table holds at most
/// `u32::MAX` bodies; past that no new id is issued.
pub(crate) struct BodyTable {
    handles: Vec<RigidBodyHandle>,
    max_ids: usize,
}

impl BodyTable {
    /// Reserve room up front; a failed reservation is the bridge's only
    /// construction error.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, BridgeError> {
        let mut handles = Vec::new();
        handles
            .try_reserve(capacity)
            .map_err(|_| OutOfMemoryErr { requested: capacity }.build())?;
        Ok(Self { handles, max_ids: BodyId::MAX as usize })
    }

    #[cfg(test)]
    pub(crate) fn with_limit(max_ids: usize) -> Self {
        Self { handles: Vec::new(), max_ids }
    }

    /// The id the next `insert` would hand out, or `None` once the table is full.
    pub(crate) fn next_id(&self) -> Option<BodyId> {
        if self.handles.len() >= self.max_ids {
            return None;
        }
        BodyId::try_from(self.handles.len() + 1).ok()
    }

    /// Returns `None` without storing the handle when no id is left.
    pub(crate) fn insert(&mut self, handle: RigidBodyHandle) -> Option<BodyId> {
        let id = self.next_id()?;
        self.handles.push(handle);
        Some(id)
    }

    pub(crate) fn get(&self, id: BodyId) -> Option<RigidBodyHandle> {
        let idx = (id as usize).checked_sub(1)?;
        self.handles.get(idx).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}
