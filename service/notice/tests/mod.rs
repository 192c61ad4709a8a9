use std::sync::Arc;

use chrono::Utc;
use domain_ledger::mock::MockResourceRepo;
use domain_notice::{
    exception::NoticeException,
    mock::{MockAlertRepo, MockAuditLogRepo, MockNotificationRepo},
    model::{
        entity::{Alert, AlertSeverity, AlertType, AuditAction, AuditLog, Notification, NotificationType},
        vo::{AuditEntry, NewAlert},
    },
    service::{AlertService, AuditService, NotificationService},
};
use service_notice::{AlertServiceImpl, AuditServiceImpl, NotificationServiceImpl};
use uuid::Uuid;

fn alert(active: bool) -> Alert {
    Alert {
        id: Uuid::new_v4(),
        r#type: AlertType::Epidemic,
        severity: AlertSeverity::Medium,
        message: "Pic de grippe en Île-de-France".to_string(),
        city: Some("Paris".to_string()),
        resource_id: None,
        active,
        created_by: None,
        created_at: Utc::now(),
        resolved_at: None,
    }
}

#[tokio::test]
async fn alert_for_unknown_resource_is_rejected() {
    let mut resource_repo = MockResourceRepo::new();
    resource_repo.expect_find_by_id().returning(|_| Ok(None));
    let service = AlertServiceImpl::builder()
        .alert_repo(Arc::new(MockAlertRepo::new()))
        .resource_repo(Arc::new(resource_repo))
        .build();
    let resource_id = Uuid::new_v4();
    let result = service
        .create(NewAlert {
            r#type: AlertType::Shortage,
            severity: AlertSeverity::High,
            message: "Pénurie".to_string(),
            city: None,
            resource_id: Some(resource_id),
        })
        .await;
    assert!(matches!(result, Err(NoticeException::NoSuchResource { id }) if id == resource_id));
}

#[tokio::test]
async fn new_alert_is_active() {
    let mut alert_repo = MockAlertRepo::new();
    alert_repo
        .expect_insert()
        .withf(|a: &Alert| a.active && a.resolved_at.is_none() && a.city.is_none())
        .times(1)
        .returning(|a: &Alert| Ok(a.id));
    alert_repo.expect_save_changed().returning(|| Ok(true));
    let service = AlertServiceImpl::builder()
        .alert_repo(Arc::new(alert_repo))
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .build();
    let created = service
        .create(NewAlert {
            r#type: AlertType::Info,
            severity: AlertSeverity::Low,
            message: " Maintenance ".to_string(),
            city: Some(String::new()),
            resource_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.message, "Maintenance");
}

#[tokio::test]
async fn listing_defaults_to_active_only() {
    let mut alert_repo = MockAlertRepo::new();
    alert_repo
        .expect_get_all_filtered()
        .withf(|active_only| *active_only)
        .times(1)
        .returning(|_| Ok(vec![alert(true)]));
    let service = AlertServiceImpl::builder()
        .alert_repo(Arc::new(alert_repo))
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .build();
    assert_eq!(service.list(false).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deactivating_an_alert_persists_resolution() {
    let existing = alert(true);
    let id = existing.id;
    let mut alert_repo = MockAlertRepo::new();
    alert_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    alert_repo
        .expect_update()
        .withf(|a: &Alert| !a.active && a.resolved_at.is_some())
        .times(1)
        .returning(|_| Ok(()));
    alert_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = AlertServiceImpl::builder()
        .alert_repo(Arc::new(alert_repo))
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .build();
    let (old, new) = service.set_active(id, false).await.unwrap();
    assert!(old.active);
    assert!(!new.active);
}

#[tokio::test]
async fn missing_alert_is_not_found() {
    let mut alert_repo = MockAlertRepo::new();
    alert_repo.expect_find_by_id().returning(|_| Ok(None));
    let service = AlertServiceImpl::builder()
        .alert_repo(Arc::new(alert_repo))
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .build();
    assert!(matches!(
        service.set_active(Uuid::new_v4(), false).await,
        Err(NoticeException::NoSuchAlert { .. })
    ));
}

#[tokio::test]
async fn notifications_of_other_users_are_hidden() {
    let owner = Uuid::new_v4();
    let notification = Notification::new(
        owner,
        NotificationType::RequestUpdate,
        "Request approved",
        "Your request was approved",
        None,
    );
    let id = notification.id;
    let mut repo = MockNotificationRepo::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(notification.clone())));
    let service = NotificationServiceImpl::builder()
        .notification_repo(Arc::new(repo))
        .user_id(Some(Uuid::new_v4()))
        .build();
    assert!(matches!(
        service.mark_read(id, true).await,
        Err(NoticeException::NoSuchNotification { .. })
    ));
}

#[tokio::test]
async fn owner_can_mark_notification_read() {
    let owner = Uuid::new_v4();
    let notification = Notification::new(owner, NotificationType::Info, "t", "m", None);
    let id = notification.id;
    let mut repo = MockNotificationRepo::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(notification.clone())));
    repo.expect_update()
        .withf(|n: &Notification| n.read)
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_save_changed().returning(|| Ok(true));
    let service = NotificationServiceImpl::builder()
        .notification_repo(Arc::new(repo))
        .user_id(Some(owner))
        .build();
    assert!(service.mark_read(id, true).await.unwrap().read);
}

#[tokio::test]
async fn notifications_need_an_actor() {
    let service = NotificationServiceImpl::builder()
        .notification_repo(Arc::new(MockNotificationRepo::new()))
        .build();
    assert!(matches!(
        service.list(false).await,
        Err(NoticeException::Unauthenticated)
    ));
}

#[tokio::test]
async fn audit_entries_carry_actor_and_address() {
    let actor = Uuid::new_v4();
    let entity_id = Uuid::new_v4();
    let mut repo = MockAuditLogRepo::new();
    repo.expect_insert()
        .withf(move |log: &AuditLog| {
            log.user_id == Some(actor)
                && log.ip_address.as_deref() == Some("10.0.0.7")
                && log.action == AuditAction::Update
                && log.entity == "alert"
                && log.old_value == Some(serde_json::json!({ "active": true }))
        })
        .times(1)
        .returning(|log: &AuditLog| Ok(log.id));
    repo.expect_save_changed().returning(|| Ok(true));
    let service = AuditServiceImpl::builder()
        .audit_repo(Arc::new(repo))
        .user_id(Some(actor))
        .ip_address(Some("10.0.0.7".to_string()))
        .build();
    let log = service
        .record(AuditEntry::updated(
            "alert",
            entity_id,
            &serde_json::json!({ "active": true }),
            &serde_json::json!({ "active": false }),
        ))
        .await
        .unwrap();
    assert_eq!(log.entity_id, Some(entity_id));
}

#[tokio::test]
async fn audit_window_must_be_positive() {
    let service = AuditServiceImpl::builder()
        .audit_repo(Arc::new(MockAuditLogRepo::new()))
        .build();
    assert!(matches!(
        service.list(None, Some(-3)).await,
        Err(NoticeException::InvalidWindow { value: -3 })
    ));
}

#[tokio::test]
async fn oversized_audit_window_has_no_lower_bound() {
    let mut repo = MockAuditLogRepo::new();
    repo.expect_get_filtered()
        .withf(|filter| filter.entity.as_deref() == Some("stock") && filter.since.is_none())
        .times(1)
        .returning(|_| Ok(vec![]));
    let service = AuditServiceImpl::builder().audit_repo(Arc::new(repo)).build();
    let logs = service
        .list(Some("stock".to_string()), Some(100_000_000))
        .await
        .unwrap();
    assert!(logs.is_empty());
}
