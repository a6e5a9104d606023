//! Avatar bucket rules: public read, owner-folder write.

use uuid::Uuid;

use super::{PolicyError, PolicyResult};

/// An object may be written only when its first path segment is the
/// acting user's id.
pub fn can_write(actor: Uuid, object_path: &str) -> PolicyResult {
    let first = object_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    match Uuid::parse_str(first) {
        Ok(owner) if owner == actor => Ok(()),
        _ => Err(PolicyError::AvatarOutsideOwnFolder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_folder() {
        let me = Uuid::new_v4();
        assert!(can_write(me, &format!("{me}/avatar.png")).is_ok());
        assert!(can_write(me, &format!("/{me}/avatar.png")).is_ok());
    }

    #[test]
    fn test_other_folder_or_root() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert!(can_write(me, &format!("{other}/avatar.png")).is_err());
        assert!(can_write(me, "avatar.png").is_err());
        assert!(can_write(me, "").is_err());
    }
}
