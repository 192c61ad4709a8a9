use std::sync::Arc;

use architecture::repository::{MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use chrono::Utc;
use domain_ledger::{
    model::vo::StockDetail,
    repository::{ResourceRepo, StockRepo},
};
use domain_notice::{
    model::entity::{Notification, NotificationType},
    repository::NotificationRepo,
};
use domain_request::{
    exception::{RequestException, RequestResult},
    model::{
        entity::{Request, RequestStatus, TransitionPolicy},
        vo::{NewRequest, RequestDetail, RequestFilter, RequestStats, StatusUpdate},
    },
    repository::RequestRepo,
    service::RequestService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct RequestServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    resource_repo: Arc<dyn ResourceRepo>,
    stock_repo: Arc<dyn StockRepo>,
    notification_repo: Arc<dyn NotificationRepo>,
    #[builder(default)]
    policy: TransitionPolicy,
    #[builder(default)]
    user_id: Option<Uuid>,
}

impl RequestServiceImpl {
    async fn find(&self, id: Uuid) -> RequestResult<Request> {
        self.request_repo
            .find_by_id(id)
            .await?
            .ok_or(RequestException::NoSuchRequest { id })
    }

    /// Tells the requester about a status change. Queued on the same unit of work as the
    /// request update.
    async fn notify_requester(&self, old: &Request, new: &Request) -> anyhow::Result<()> {
        let notification = Notification::new(
            new.user_id,
            NotificationType::RequestUpdate,
            format!("Request {}", new.status),
            format!(
                "Your request for {} unit(s) moved from {} to {}.",
                new.quantity, old.status, new.status
            ),
            Some(format!("/requests/{}", new.id)),
        );
        self.notification_repo.insert(&notification).await?;
        Ok(())
    }
}

#[async_trait]
impl RequestService for RequestServiceImpl {
    async fn create(&self, request: NewRequest) -> RequestResult<Request> {
        let user_id = self.user_id.ok_or(RequestException::Unauthenticated)?;
        if request.quantity <= 0 {
            return Err(RequestException::NonPositiveQuantity {
                value: request.quantity,
            });
        }
        if self.resource_repo.find_by_id(request.resource_id).await?.is_none() {
            return Err(RequestException::NoSuchResource {
                id: request.resource_id,
            });
        }
        let now = Utc::now();
        let request = Request {
            id: Uuid::new_v4(),
            user_id,
            resource_id: request.resource_id,
            quantity: request.quantity,
            status: RequestStatus::Pending,
            urgency: request.urgency,
            city: request.city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            approved_by: None,
            estimated_delivery_date: None,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };
        self.request_repo.insert(&request).await?;
        self.request_repo.save_changed().await?;
        tracing::info!(
            "Request {} for {} unit(s) of {} filed by {}.",
            request.id,
            request.quantity,
            request.resource_id,
            user_id
        );
        Ok(request)
    }

    async fn list(&self, filter: RequestFilter) -> RequestResult<Vec<RequestDetail>> {
        Ok(self.request_repo.get_all_detailed(filter).await?)
    }

    async fn get(&self, id: Uuid) -> RequestResult<Request> {
        self.find(id).await
    }

    async fn update_status(
        &self,
        id: Uuid,
        update: StatusUpdate,
    ) -> RequestResult<(Request, Request)> {
        let old = self.find(id).await?;
        if !self.policy.allows(old.status, update.status) {
            return Err(RequestException::InvalidTransition {
                from: old.status,
                to: update.status,
            });
        }
        let mut new = old.clone();
        new.status = update.status;
        if update.notes.is_some() {
            new.notes = update.notes;
        }
        if update.estimated_delivery_date.is_some() {
            new.estimated_delivery_date = update.estimated_delivery_date;
        }
        if update.status == RequestStatus::Approved {
            new.approved_by = self.user_id;
        }
        new.updated_at = Utc::now();
        self.request_repo.update(&new).await?;
        if old.status != new.status {
            self.notify_requester(&old, &new).await?;
        }
        self.request_repo.save_changed().await?;
        tracing::info!("Request {} moved from {} to {}.", id, old.status, new.status);
        Ok((old, new))
    }

    async fn matching_stocks(&self, id: Uuid) -> RequestResult<Vec<StockDetail>> {
        let request = self.find(id).await?;
        Ok(self
            .stock_repo
            .get_by_resource_with_min_quantity(request.resource_id, request.quantity)
            .await?)
    }

    async fn stats(&self) -> RequestResult<RequestStats> {
        let mut stats = RequestStats::default();
        for (status, count) in self.request_repo.count_by_status().await? {
            stats.add(status, count);
        }
        Ok(stats)
    }
}
