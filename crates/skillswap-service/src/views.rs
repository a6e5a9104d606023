//! View records returned to clients, assembled from several tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use skillswap_entity::feedback::Feedback;
use skillswap_entity::profile::Profile;
use skillswap_entity::skill::{Skill, SkillType, UserSkill};
use skillswap_entity::swap::{SwapRequest, SwapStatus};

use crate::join::Lookup;

/// The parts of a profile shown next to another record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Owner.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Location, if set.
    pub location: Option<String>,
    /// Avatar URL, if set.
    pub profile_photo_url: Option<String>,
}

impl From<&Profile> for ProfileSummary {
    fn from(p: &Profile) -> Self {
        Self {
            user_id: p.user_id,
            name: p.name.clone(),
            location: p.location.clone(),
            profile_photo_url: p.profile_photo_url.clone(),
        }
    }
}

/// A skill reference for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRef {
    /// Skill id.
    pub id: Uuid,
    /// Skill name.
    pub name: String,
    /// Category, if set.
    pub category: Option<String>,
}

impl From<&Skill> for SkillRef {
    fn from(s: &Skill) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            category: s.category.clone(),
        }
    }
}

/// One of the acting user's skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSkillView {
    /// User skill row id (used for removal).
    pub id: Uuid,
    /// The referenced skill.
    pub skill: SkillRef,
    /// Offered or wanted.
    pub skill_type: SkillType,
    /// When it was added.
    pub created_at: DateTime<Utc>,
}

/// The acting user's skills split by type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MySkills {
    /// Skills the user offers.
    pub offered: Vec<UserSkillView>,
    /// Skills the user wants.
    pub wanted: Vec<UserSkillView>,
}

/// One search hit: a user and everything they offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matching user's profile.
    pub profile: ProfileSummary,
    /// Availability text.
    pub availability: Option<String>,
    /// The user's offered skills, without duplicates.
    pub offered_skills: Vec<SkillRef>,
}

/// A swap request with names and skills resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequestView {
    /// Request id.
    pub id: Uuid,
    /// Current state.
    pub status: SwapStatus,
    /// Note from the requester.
    pub message: Option<String>,
    /// Sender id.
    pub requester_id: Uuid,
    /// Receiver id.
    pub recipient_id: Uuid,
    /// Sender profile, absent when not visible.
    pub requester: Option<ProfileSummary>,
    /// Receiver profile, absent when not visible.
    pub recipient: Option<ProfileSummary>,
    /// Skill offered by the sender.
    pub offered_skill: Option<SkillRef>,
    /// Skill wanted from the receiver.
    pub wanted_skill: Option<SkillRef>,
    /// When the request was sent.
    pub created_at: DateTime<Utc>,
    /// When the request last changed.
    pub updated_at: DateTime<Utc>,
}

impl SwapRequestView {
    /// Project a swap row through profile and skill lookups.
    pub fn project(
        swap: &SwapRequest,
        profiles: &Lookup<Profile>,
        skills: &Lookup<Skill>,
    ) -> Self {
        Self {
            id: swap.id,
            status: swap.status,
            message: swap.message.clone(),
            requester_id: swap.requester_id,
            recipient_id: swap.recipient_id,
            requester: profiles.get(&swap.requester_id).map(ProfileSummary::from),
            recipient: profiles.get(&swap.recipient_id).map(ProfileSummary::from),
            offered_skill: skills.get(&swap.offered_skill_id).map(SkillRef::from),
            wanted_skill: skills.get(&swap.wanted_skill_id).map(SkillRef::from),
            created_at: swap.created_at,
            updated_at: swap.updated_at,
        }
    }
}

/// Swap requests of the acting user split by direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapOverview {
    /// Requests the user received, newest first.
    pub incoming: Vec<SwapRequestView>,
    /// Requests the user sent, newest first.
    pub outgoing: Vec<SwapRequestView>,
}

/// A feedback row with both parties resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackView {
    /// Feedback id.
    pub id: Uuid,
    /// Reviewed swap.
    pub swap_request_id: Uuid,
    /// Author profile, absent when not visible.
    pub reviewer: Option<ProfileSummary>,
    /// Subject profile, absent when not visible.
    pub reviewee: Option<ProfileSummary>,
    /// Score.
    pub rating: i32,
    /// Comment.
    pub comment: Option<String>,
    /// When it was written.
    pub created_at: DateTime<Utc>,
}

impl FeedbackView {
    /// Project a feedback row through a profile lookup.
    pub fn project(feedback: &Feedback, profiles: &Lookup<Profile>) -> Self {
        Self {
            id: feedback.id,
            swap_request_id: feedback.swap_request_id,
            reviewer: profiles.get(&feedback.reviewer_id).map(ProfileSummary::from),
            reviewee: profiles.get(&feedback.reviewee_id).map(ProfileSummary::from),
            rating: feedback.rating,
            comment: feedback.comment.clone(),
            created_at: feedback.created_at,
        }
    }
}

/// An accepted swap the acting user has not reviewed yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingFeedback {
    /// The swap, enriched.
    pub swap: SwapRequestView,
    /// Who would be reviewed.
    pub reviewee_id: Uuid,
}

/// Everything the feedback page shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackOverview {
    /// Swaps awaiting the user's review.
    pub pending: Vec<PendingFeedback>,
    /// Feedback about the user.
    pub received: Vec<FeedbackView>,
    /// Feedback written by the user.
    pub given: Vec<FeedbackView>,
    /// Mean of received ratings, absent when none.
    pub average_rating: Option<f64>,
}

/// Project a user skill through a skill lookup.
///
/// Rows whose skill was not fetched are dropped.
pub fn project_user_skill(row: &UserSkill, skills: &Lookup<Skill>) -> Option<UserSkillView> {
    skills.get(&row.skill_id).map(|skill| UserSkillView {
        id: row.id,
        skill: SkillRef::from(skill),
        skill_type: row.skill_type,
        created_at: row.created_at,
    })
}
