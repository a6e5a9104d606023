//! Swap request lifecycle.
//!
//! `pending` moves to `accepted` or `rejected` exactly once. The status
//! write is conditional on the row still being pending, so when two
//! decisions race only the first one applies and the second is reported as
//! a policy denial.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use skillswap_auth::policy::{self, PolicyError};
use skillswap_core::error::AppError;
use skillswap_database::repositories::{
    ProfileRepository, SkillRepository, SwapRequestRepository, UserSkillRepository,
};
use skillswap_entity::profile::Profile;
use skillswap_entity::skill::{Skill, SkillType};
use skillswap_entity::swap::{CreateSwapRequest, SwapRequest, SwapStatus};

use crate::context::RequestContext;
use crate::join::{self, Lookup};
use crate::views::{SwapOverview, SwapRequestView};

/// Maximum swap message length in characters.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Request to send a swap proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSwapRequest {
    /// Receiver.
    pub recipient_id: Uuid,
    /// One of the sender's offered skills.
    pub offered_skill_id: Uuid,
    /// One of the receiver's offered skills.
    pub wanted_skill_id: Uuid,
    /// Optional note.
    pub message: Option<String>,
}

/// Swap request operations for the acting user.
#[derive(Debug, Clone)]
pub struct SwapService {
    /// Swap request repository.
    swap_repo: Arc<SwapRequestRepository>,
    /// Profile repository.
    profile_repo: Arc<ProfileRepository>,
    /// Catalogue repository.
    skill_repo: Arc<SkillRepository>,
    /// User skill repository.
    user_skill_repo: Arc<UserSkillRepository>,
}

impl SwapService {
    /// Creates a new swap service.
    pub fn new(
        swap_repo: Arc<SwapRequestRepository>,
        profile_repo: Arc<ProfileRepository>,
        skill_repo: Arc<SkillRepository>,
        user_skill_repo: Arc<UserSkillRepository>,
    ) -> Self {
        Self {
            swap_repo,
            profile_repo,
            skill_repo,
            user_skill_repo,
        }
    }

    /// Incoming and outgoing requests of the acting user, newest first.
    pub async fn overview(&self, ctx: &RequestContext) -> Result<SwapOverview, AppError> {
        let swaps = self.swap_repo.find_for_participant(ctx.user_id).await?;
        let views = self.enrich(ctx, &swaps).await?;
        Ok(partition(ctx.user_id, views))
    }

    /// One request the acting user takes part in.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<SwapRequestView, AppError> {
        let swap = self.load(id).await?;
        policy::swap::can_read(ctx.user_id, &swap)?;
        self.enrich_one(ctx, &swap).await
    }

    /// Send a new request from the acting user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: NewSwapRequest,
    ) -> Result<SwapRequestView, AppError> {
        let data = CreateSwapRequest {
            requester_id: ctx.user_id,
            recipient_id: req.recipient_id,
            offered_skill_id: req.offered_skill_id,
            wanted_skill_id: req.wanted_skill_id,
            message: normalize_message(req.message)?,
        };
        policy::swap::can_insert(ctx.user_id, data.requester_id)?;

        if data.recipient_id == data.requester_id {
            return Err(AppError::validation(
                "You cannot send a swap request to yourself",
            ));
        }
        if self
            .profile_repo
            .find_by_user_id(data.recipient_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Recipient not found"));
        }
        if !self
            .user_skill_repo
            .exists(data.requester_id, data.offered_skill_id, SkillType::Offered)
            .await?
        {
            return Err(AppError::validation(
                "The offered skill must be one of your offered skills",
            ));
        }
        if !self
            .user_skill_repo
            .exists(data.recipient_id, data.wanted_skill_id, SkillType::Offered)
            .await?
        {
            return Err(AppError::validation(
                "The wanted skill must be one the recipient offers",
            ));
        }

        let swap = self.swap_repo.create(&data).await?;

        info!(
            user_id = %ctx.user_id,
            swap_request_id = %swap.id,
            recipient_id = %swap.recipient_id,
            "Swap request sent"
        );

        self.enrich_one(ctx, &swap).await
    }

    /// Accept a pending request.
    pub async fn accept(&self, ctx: &RequestContext, id: Uuid) -> Result<SwapRequestView, AppError> {
        self.decide(ctx, id, SwapStatus::Accepted).await
    }

    /// Reject a pending request.
    pub async fn reject(&self, ctx: &RequestContext, id: Uuid) -> Result<SwapRequestView, AppError> {
        self.decide(ctx, id, SwapStatus::Rejected).await
    }

    /// Delete a pending request the acting user sent.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let swap = self.load(id).await?;
        policy::swap::can_delete(ctx.user_id, &swap)?;

        if !self.swap_repo.delete_pending(id, ctx.user_id).await? {
            // Decided or deleted between the read and the delete.
            let current = self.load(id).await?;
            policy::swap::can_delete(ctx.user_id, &current)?;
            return Err(PolicyError::SwapNotPending(current.status).into());
        }

        info!(user_id = %ctx.user_id, swap_request_id = %id, "Swap request deleted");
        Ok(())
    }

    async fn decide(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: SwapStatus,
    ) -> Result<SwapRequestView, AppError> {
        let swap = self.load(id).await?;
        policy::swap::can_update_status(ctx.user_id, &swap, next)?;

        let updated = match self
            .swap_repo
            .update_status_if_pending(id, ctx.user_id, next)
            .await?
        {
            Some(updated) => updated,
            None => {
                let current = self.load(id).await?;
                policy::swap::can_update_status(ctx.user_id, &current, next)?;
                return Err(PolicyError::SwapNotPending(current.status).into());
            }
        };

        info!(
            user_id = %ctx.user_id,
            swap_request_id = %id,
            status = %updated.status,
            "Swap request decided"
        );

        self.enrich_one(ctx, &updated).await
    }

    async fn load(&self, id: Uuid) -> Result<SwapRequest, AppError> {
        self.swap_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Swap request not found"))
    }

    async fn enrich_one(
        &self,
        ctx: &RequestContext,
        swap: &SwapRequest,
    ) -> Result<SwapRequestView, AppError> {
        let mut views = self.enrich(ctx, std::slice::from_ref(swap)).await?;
        views
            .pop()
            .ok_or_else(|| AppError::internal("Swap request could not be resolved"))
    }

    /// Resolve participant profiles and skills for `swaps` in two queries.
    pub(crate) async fn enrich(
        &self,
        ctx: &RequestContext,
        swaps: &[SwapRequest],
    ) -> Result<Vec<SwapRequestView>, AppError> {
        let (profiles, skills) =
            resolve_swap_refs(&self.profile_repo, &self.skill_repo, ctx.user_id, swaps).await?;
        Ok(swaps
            .iter()
            .map(|s| SwapRequestView::project(s, &profiles, &skills))
            .collect())
    }
}

/// Batch-fetch the profiles and skills referenced by `swaps`.
///
/// Profiles the viewer may not read are left out of the lookup.
pub(crate) async fn resolve_swap_refs(
    profile_repo: &Arc<ProfileRepository>,
    skill_repo: &Arc<SkillRepository>,
    viewer: Uuid,
    swaps: &[SwapRequest],
) -> Result<(Lookup<Profile>, Lookup<Skill>), AppError> {
    let user_ids = join::distinct_ids(swaps, |s| [s.requester_id, s.recipient_id]);
    let skill_ids = join::distinct_ids(swaps, |s| [s.offered_skill_id, s.wanted_skill_id]);

    let profile_repo = profile_repo.clone();
    let profiles: Lookup<Profile> = join::batch_join(user_ids, |ids| async move {
        profile_repo.find_visible_by_user_ids(&ids, viewer).await
    })
    .await?;

    let skill_repo = skill_repo.clone();
    let skills: Lookup<Skill> = join::batch_join(skill_ids, |ids| async move {
        skill_repo.find_by_ids(&ids).await
    })
    .await?;

    Ok((profiles, skills))
}

/// Split enriched requests by direction relative to `user_id`.
///
/// Input order is preserved within each side.
pub fn partition(user_id: Uuid, views: Vec<SwapRequestView>) -> SwapOverview {
    let mut overview = SwapOverview::default();
    for view in views {
        if view.recipient_id == user_id {
            overview.incoming.push(view);
        } else if view.requester_id == user_id {
            overview.outgoing.push(view);
        }
    }
    overview
}

/// Trim the message; blank becomes `None`.
pub fn normalize_message(message: Option<String>) -> Result<Option<String>, AppError> {
    let Some(message) = message else {
        return Ok(None);
    };
    let message = message.trim();
    if message.is_empty() {
        return Ok(None);
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(AppError::validation(format!(
            "Message must be at most {MAX_MESSAGE_LEN} characters"
        )));
    }
    Ok(Some(message.to_string()))
}
