//! User skill rules: readable by anyone, mutable by the owner.
//!
//! The skill catalogue itself has no rule: anyone may read it and any
//! authenticated user may add to it.

use uuid::Uuid;

use super::{PolicyError, PolicyResult};

/// Only the owning user may insert, update or delete a user skill row.
pub fn can_modify(actor: Uuid, owner: Uuid) -> PolicyResult {
    if actor == owner {
        Ok(())
    } else {
        Err(PolicyError::NotSkillOwner)
    }
}
