//! Profile rules: public or owner may read, owner may write.

use uuid::Uuid;

use skillswap_entity::profile::Profile;

use super::{PolicyError, PolicyResult};

/// Anyone may read a public profile; the owner may always read their own.
pub fn can_read(actor: Uuid, profile: &Profile) -> PolicyResult {
    if profile.is_public || profile.user_id == actor {
        Ok(())
    } else {
        Err(PolicyError::ProfileHidden)
    }
}

/// Only the owner may insert or update a profile.
pub fn can_write(actor: Uuid, owner: Uuid) -> PolicyResult {
    if actor == owner {
        Ok(())
    } else {
        Err(PolicyError::NotProfileOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile(owner: Uuid, is_public: bool) -> Profile {
        Profile {
            user_id: owner,
            name: "Ben".into(),
            location: None,
            profile_photo_url: None,
            availability: None,
            is_public,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_public_profile_readable_by_anyone() {
        assert!(can_read(Uuid::new_v4(), &profile(Uuid::new_v4(), true)).is_ok());
    }

    #[test]
    fn test_private_profile_readable_by_owner_only() {
        let owner = Uuid::new_v4();
        let p = profile(owner, false);
        assert!(can_read(owner, &p).is_ok());
        assert_eq!(can_read(Uuid::new_v4(), &p), Err(PolicyError::ProfileHidden));
    }

    #[test]
    fn test_write_owner_only() {
        let owner = Uuid::new_v4();
        assert!(can_write(owner, owner).is_ok());
        assert_eq!(
            can_write(Uuid::new_v4(), owner),
            Err(PolicyError::NotProfileOwner)
        );
    }
}
