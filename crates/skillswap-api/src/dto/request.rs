//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use skillswap_entity::profile::UpdateProfile;
use skillswap_entity::skill::SkillType;
use skillswap_service::feedback::service::NewFeedback;
use skillswap_service::search::SearchScope;
use skillswap_service::skill::service::AddSkill;
use skillswap_service::swap::service::NewSwapRequest;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password; strength rules are applied by the account service.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Location.
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Availability text.
    #[validate(length(max = 200))]
    pub availability: Option<String>,
    /// Whether the profile is visible to other users.
    pub is_public: bool,
}

impl From<UpdateProfileRequest> for UpdateProfile {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            location: req.location,
            availability: req.availability,
            is_public: req.is_public,
        }
    }
}

/// Add a skill to the caller's offered or wanted list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddSkillRequest {
    /// Skill name; matched exactly against the catalogue.
    #[validate(length(min = 1, max = 100, message = "Skill name must be 1-100 characters"))]
    pub name: String,
    /// Category used when the skill is new.
    #[validate(length(max = 100))]
    pub category: Option<String>,
    /// Offered or wanted.
    pub skill_type: SkillType,
}

impl From<AddSkillRequest> for AddSkill {
    fn from(req: AddSkillRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            skill_type: req.skill_type,
        }
    }
}

/// Search query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Substring of a skill name. Missing or blank yields no results.
    #[serde(default)]
    pub q: String,
    /// Which skill lists to match against.
    #[serde(default)]
    pub scope: SearchScope,
}

/// Swap proposal body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSwapRequestBody {
    /// The user receiving the proposal.
    pub recipient_id: Uuid,
    /// Skill the requester offers.
    pub offered_skill_id: Uuid,
    /// Skill the requester wants from the recipient.
    pub wanted_skill_id: Uuid,
    /// Optional note.
    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

impl From<CreateSwapRequestBody> for NewSwapRequest {
    fn from(req: CreateSwapRequestBody) -> Self {
        Self {
            recipient_id: req.recipient_id,
            offered_skill_id: req.offered_skill_id,
            wanted_skill_id: req.wanted_skill_id,
            message: req.message,
        }
    }
}

/// Feedback submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitFeedbackRequest {
    /// The accepted swap being reviewed.
    pub swap_request_id: Uuid,
    /// Star rating.
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    /// Optional comment.
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl From<SubmitFeedbackRequest> for NewFeedback {
    fn from(req: SubmitFeedbackRequest) -> Self {
        Self {
            swap_request_id: req.swap_request_id,
            rating: req.rating,
            comment: req.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".into(),
            password: "secret123".into(),
            name: "Ana".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_accepts_single_label_domain() {
        let req = RegisterRequest {
            email: "ana@localhost".into(),
            password: "secret123".into(),
            name: "Ana".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let req = RegisterRequest {
            email: "ana@example.com".into(),
            password: "secret123".into(),
            name: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rating_range() {
        let mut req = SubmitFeedbackRequest {
            swap_request_id: Uuid::new_v4(),
            rating: 6,
            comment: None,
        };
        assert!(req.validate().is_err());
        req.rating = 5;
        assert!(req.validate().is_ok());
        req.rating = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_query_defaults() {
        let q: SearchQuery = serde_json::from_str("{}").unwrap();
        assert!(q.q.is_empty());
        assert_eq!(q.scope, SearchScope::Offered);
    }

    #[test]
    fn test_add_skill_parses_type() {
        let req: AddSkillRequest =
            serde_json::from_str(r#"{"name":"Guitar","skill_type":"offered"}"#).unwrap();
        assert_eq!(req.skill_type, SkillType::Offered);
        assert!(req.validate().is_ok());
    }
}
