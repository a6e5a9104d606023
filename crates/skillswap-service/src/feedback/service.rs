//! Feedback eligibility and submission.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skillswap_auth::policy;
use skillswap_core::error::AppError;
use skillswap_database::repositories::{
    FeedbackRepository, ProfileRepository, SkillRepository, SwapRequestRepository,
};
use skillswap_entity::feedback::{CreateFeedback, Feedback, Rating};
use skillswap_entity::profile::Profile;

use crate::context::RequestContext;
use crate::join::{self, Lookup};
use crate::swap::service::resolve_swap_refs;
use crate::views::{FeedbackOverview, FeedbackView, PendingFeedback, SwapRequestView};

/// Maximum comment length in characters.
pub const MAX_COMMENT_LEN: usize = 2000;

/// Feedback submitted by the acting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedback {
    /// The accepted swap being reviewed.
    pub swap_request_id: Uuid,
    /// Score from 1 to 5.
    pub rating: i32,
    /// Optional comment.
    pub comment: Option<String>,
}

/// Feedback operations for the acting user.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    /// Feedback repository.
    feedback_repo: Arc<FeedbackRepository>,
    /// Swap request repository.
    swap_repo: Arc<SwapRequestRepository>,
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Catalogue repository.
    skill_repo: Arc<SkillRepository>,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(
        feedback_repo: Arc<FeedbackRepository>,
        swap_repo: Arc<SwapRequestRepository>,
        profile_repo: Arc<ProfileRepository>,
        skill_repo: Arc<SkillRepository>,
    ) -> Self {
        Self {
            feedback_repo,
            swap_repo,
            profile_repo,
            skill_repo,
        }
    }

    /// Pending reviews plus feedback received and given.
    pub async fn overview(&self, ctx: &RequestContext) -> Result<FeedbackOverview, AppError> {
        let awaiting = self.swap_repo.find_awaiting_feedback(ctx.user_id).await?;
        let received =
            readable_by(ctx.user_id, self.feedback_repo.find_by_reviewee(ctx.user_id).await?);
        let given =
            readable_by(ctx.user_id, self.feedback_repo.find_by_reviewer(ctx.user_id).await?);

        let (swap_profiles, skills) =
            resolve_swap_refs(&self.profile_repo, &self.skill_repo, ctx.user_id, &awaiting)
                .await?;

        let pending = awaiting
            .iter()
            .filter_map(|swap| {
                swap.counterpart_of(ctx.user_id).map(|reviewee_id| PendingFeedback {
                    swap: SwapRequestView::project(swap, &swap_profiles, &skills),
                    reviewee_id,
                })
            })
            .collect();

        let all: Vec<&Feedback> = received.iter().chain(given.iter()).collect();
        let user_ids = join::distinct_ids(&all, |f| [f.reviewer_id, f.reviewee_id]);
        let profile_repo = self.profile_repo.clone();
        let viewer = ctx.user_id;
        let profiles: Lookup<Profile> = join::batch_join(user_ids, |ids| async move {
            profile_repo.find_visible_by_user_ids(&ids, viewer).await
        })
        .await?;

        Ok(FeedbackOverview {
            pending,
            average_rating: average_rating(&received),
            received: received
                .iter()
                .map(|f| FeedbackView::project(f, &profiles))
                .collect(),
            given: given
                .iter()
                .map(|f| FeedbackView::project(f, &profiles))
                .collect(),
        })
    }

    /// Leave feedback on an accepted swap about the other participant.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        req: NewFeedback,
    ) -> Result<FeedbackView, AppError> {
        let rating = Rating::new(req.rating)?;
        let comment = normalize_comment(req.comment)?;

        let swap = self
            .swap_repo
            .find_by_id(req.swap_request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Swap request not found"))?;
        policy::feedback::can_review_swap(ctx.user_id, &swap)?;

        let reviewee_id = swap
            .counterpart_of(ctx.user_id)
            .ok_or_else(|| AppError::internal("Participant without counterpart"))?;

        let data = CreateFeedback {
            swap_request_id: swap.id,
            reviewer_id: ctx.user_id,
            reviewee_id,
            rating,
            comment,
        };
        policy::feedback::can_insert(ctx.user_id, data.reviewer_id)?;

        let feedback = self.feedback_repo.create(&data).await?;

        info!(
            user_id = %ctx.user_id,
            swap_request_id = %swap.id,
            reviewee_id = %reviewee_id,
            rating = feedback.rating,
            "Feedback submitted"
        );

        let profiles = Lookup::from_rows(
            self.profile_repo
                .find_visible_by_user_ids(&[ctx.user_id, reviewee_id], ctx.user_id)
                .await?,
        );
        Ok(FeedbackView::project(&feedback, &profiles))
    }
}

/// Keep the rows `actor` is a party to.
pub fn readable_by(actor: Uuid, rows: Vec<Feedback>) -> Vec<Feedback> {
    rows.into_iter()
        .filter(|f| policy::feedback::can_read(actor, f).is_ok())
        .collect()
}

/// Mean rating, absent when there is no feedback.
pub fn average_rating(feedback: &[Feedback]) -> Option<f64> {
    if feedback.is_empty() {
        return None;
    }
    let total: i64 = feedback.iter().map(|f| i64::from(f.rating)).sum();
    Some(total as f64 / feedback.len() as f64)
}

/// Trim the comment; blank becomes `None`.
pub fn normalize_comment(comment: Option<String>) -> Result<Option<String>, AppError> {
    let Some(comment) = comment else {
        return Ok(None);
    };
    let comment = comment.trim();
    if comment.is_empty() {
        return Ok(None);
    }
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(AppError::validation(format!(
            "Comment must be at most {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(Some(comment.to_string()))
}
