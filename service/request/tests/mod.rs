use std::sync::Arc;

use chrono::Utc;
use domain_ledger::{
    mock::{MockResourceRepo, MockStockRepo},
    model::entity::{Resource, ResourceType},
};
use domain_notice::{
    mock::MockNotificationRepo,
    model::entity::{Notification, NotificationType},
};
use domain_request::{
    exception::RequestException,
    mock::MockRequestRepo,
    model::{
        entity::{Request, RequestStatus, TransitionPolicy, Urgency},
        vo::{NewRequest, StatusUpdate},
    },
    service::RequestService,
};
use service_request::RequestServiceImpl;
use uuid::Uuid;

fn request(status: RequestStatus, quantity: i32) -> Request {
    Request {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        resource_id: Uuid::new_v4(),
        quantity,
        status,
        urgency: Urgency::High,
        city: Some("Bordeaux".to_string()),
        approved_by: None,
        estimated_delivery_date: None,
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn update(status: RequestStatus) -> StatusUpdate {
    StatusUpdate {
        status,
        notes: None,
        estimated_delivery_date: None,
    }
}

struct Repos {
    request: MockRequestRepo,
    resource: MockResourceRepo,
    stock: MockStockRepo,
    notification: MockNotificationRepo,
}

impl Repos {
    fn new() -> Self {
        Self {
            request: MockRequestRepo::new(),
            resource: MockResourceRepo::new(),
            stock: MockStockRepo::new(),
            notification: MockNotificationRepo::new(),
        }
    }

    fn with_existing(existing: Request) -> Self {
        let mut repos = Self::new();
        repos
            .request
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repos
    }

    fn service(self, policy: TransitionPolicy, user_id: Option<Uuid>) -> RequestServiceImpl {
        RequestServiceImpl::builder()
            .request_repo(Arc::new(self.request))
            .resource_repo(Arc::new(self.resource))
            .stock_repo(Arc::new(self.stock))
            .notification_repo(Arc::new(self.notification))
            .policy(policy)
            .user_id(user_id)
            .build()
    }
}

#[tokio::test]
async fn create_starts_pending_for_the_actor() {
    let actor = Uuid::new_v4();
    let mut repos = Repos::new();
    repos.resource.expect_find_by_id().returning(|id| {
        Ok(Some(Resource {
            id,
            name: "Infirmier(e)".to_string(),
            r#type: ResourceType::Staff,
            description: None,
            critical_level: Some(10),
            recommended_stock: Some(50),
            created_at: Utc::now(),
        }))
    });
    repos
        .request
        .expect_insert()
        .withf(move |r: &Request| r.status == RequestStatus::Pending && r.user_id == actor)
        .times(1)
        .returning(|r: &Request| Ok(r.id));
    repos.request.expect_save_changed().returning(|| Ok(true));
    let service = repos.service(TransitionPolicy::Strict, Some(actor));
    let created = service
        .create(NewRequest {
            resource_id: Uuid::new_v4(),
            quantity: 3,
            urgency: Urgency::default(),
            city: None,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.urgency, Urgency::Medium);
}

#[tokio::test]
async fn create_rejects_non_positive_quantity() {
    for quantity in [0, -5] {
        let service = Repos::new().service(TransitionPolicy::Strict, Some(Uuid::new_v4()));
        let result = service
            .create(NewRequest {
                resource_id: Uuid::new_v4(),
                quantity,
                urgency: Urgency::Low,
                city: None,
                notes: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(RequestException::NonPositiveQuantity { value }) if value == quantity
        ));
    }
}

#[tokio::test]
async fn create_needs_an_actor() {
    let service = Repos::new().service(TransitionPolicy::Strict, None);
    let result = service
        .create(NewRequest {
            resource_id: Uuid::new_v4(),
            quantity: 1,
            urgency: Urgency::Low,
            city: None,
            notes: None,
        })
        .await;
    assert!(matches!(result, Err(RequestException::Unauthenticated)));
}

#[tokio::test]
async fn strict_policy_refuses_skipping_approval() {
    let existing = request(RequestStatus::Pending, 1);
    let service =
        Repos::with_existing(existing).service(TransitionPolicy::Strict, Some(Uuid::new_v4()));
    let result = service
        .update_status(Uuid::new_v4(), update(RequestStatus::Fulfilled))
        .await;
    assert!(matches!(
        result,
        Err(RequestException::InvalidTransition {
            from: RequestStatus::Pending,
            to: RequestStatus::Fulfilled
        })
    ));
}

#[tokio::test]
async fn unconstrained_policy_allows_skipping_approval() {
    let existing = request(RequestStatus::Pending, 1);
    let mut repos = Repos::with_existing(existing);
    repos.request.expect_update().times(1).returning(|_| Ok(()));
    repos
        .notification
        .expect_insert()
        .times(1)
        .returning(|n: &Notification| Ok(n.id));
    repos.request.expect_save_changed().times(1).returning(|| Ok(true));
    let service = repos.service(TransitionPolicy::Unconstrained, Some(Uuid::new_v4()));
    let (old, new) = service
        .update_status(Uuid::new_v4(), update(RequestStatus::Fulfilled))
        .await
        .unwrap();
    assert_eq!(old.status, RequestStatus::Pending);
    assert_eq!(new.status, RequestStatus::Fulfilled);
}

#[tokio::test]
async fn approval_records_approver_and_notifies_requester() {
    let existing = request(RequestStatus::Pending, 12);
    let requester = existing.user_id;
    let approver = Uuid::new_v4();
    let mut repos = Repos::with_existing(existing);
    repos
        .request
        .expect_update()
        .withf(move |r: &Request| {
            r.status == RequestStatus::Approved
                && r.approved_by == Some(approver)
                && r.notes.as_deref() == Some("Livraison lundi")
        })
        .times(1)
        .returning(|_| Ok(()));
    repos
        .notification
        .expect_insert()
        .withf(move |n: &Notification| {
            n.user_id == requester && n.r#type == NotificationType::RequestUpdate && !n.read
        })
        .times(1)
        .returning(|n: &Notification| Ok(n.id));
    repos.request.expect_save_changed().returning(|| Ok(true));
    let service = repos.service(TransitionPolicy::Strict, Some(approver));
    let (_, new) = service
        .update_status(
            Uuid::new_v4(),
            StatusUpdate {
                status: RequestStatus::Approved,
                notes: Some("Livraison lundi".to_string()),
                estimated_delivery_date: Some(Utc::now()),
            },
        )
        .await
        .unwrap();
    assert!(new.estimated_delivery_date.is_some());
}

#[tokio::test]
async fn matches_use_request_quantity_as_minimum() {
    let existing = request(RequestStatus::Pending, 50);
    let resource_id = existing.resource_id;
    let mut repos = Repos::with_existing(existing);
    repos
        .stock
        .expect_get_by_resource_with_min_quantity()
        .withf(move |id, min| *id == resource_id && *min == 50)
        .times(1)
        .returning(|_, _| Ok(vec![]));
    let service = repos.service(TransitionPolicy::Strict, None);
    assert!(service.matching_stocks(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn matches_for_unknown_request_is_not_found() {
    let mut repos = Repos::new();
    repos.request.expect_find_by_id().returning(|_| Ok(None));
    let service = repos.service(TransitionPolicy::Strict, None);
    assert!(matches!(
        service.matching_stocks(Uuid::new_v4()).await,
        Err(RequestException::NoSuchRequest { .. })
    ));
}

#[tokio::test]
async fn stats_fill_missing_statuses_with_zero() {
    let mut repos = Repos::new();
    repos.request.expect_count_by_status().returning(|| {
        Ok(vec![
            (RequestStatus::Pending, 4),
            (RequestStatus::Fulfilled, 2),
        ])
    });
    let stats = repos
        .service(TransitionPolicy::Strict, None)
        .stats()
        .await
        .unwrap();
    assert_eq!(stats.pending, 4);
    assert_eq!(stats.fulfilled, 2);
    assert_eq!(stats.approved, 0);
    assert_eq!(stats.cancelled, 0);
}
