use std::sync::Arc;

use chrono::{Duration, Utc};
use domain_account::model::entity::{User, UserRole};
use domain_ledger::{
    mock::{MockResourceRepo, MockStockHistoryRepo, MockStockRepo},
    model::{
        entity::{ChangeReason, Resource, ResourceType, Stock, StockHistory},
        vo::StockDetail,
    },
};
use domain_notice::{
    mock::MockAlertRepo,
    model::entity::{Alert, AlertSeverity, AlertType},
};
use domain_report::{
    exception::ReportException,
    model::{ExportFormat, TrendQuery},
    service::{ExportService, ReportService},
};
use domain_request::{
    mock::MockRequestRepo,
    model::{
        entity::{Request, RequestStatus, Urgency},
        vo::RequestDetail,
    },
};
use service_report::{ExportServiceImpl, ReportServiceImpl};
use uuid::Uuid;

fn resource(name: &str, r#type: ResourceType, critical_level: Option<i32>) -> Resource {
    Resource {
        id: Uuid::new_v4(),
        name: name.to_string(),
        r#type,
        description: None,
        critical_level,
        recommended_stock: None,
        created_at: Utc::now(),
    }
}

fn detail(resource: &Resource, city: &str, quantity: i32) -> StockDetail {
    StockDetail {
        stock: Stock {
            id: Uuid::new_v4(),
            resource_id: resource.id,
            city: city.to_string(),
            postal_code: "75001".to_string(),
            quantity,
            last_restock_date: None,
            updated_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
        resource: resource.clone(),
    }
}

fn alert(active: bool) -> Alert {
    Alert {
        id: Uuid::new_v4(),
        r#type: AlertType::Shortage,
        severity: AlertSeverity::High,
        message: "Rupture".to_string(),
        city: None,
        resource_id: None,
        active,
        created_by: None,
        created_at: Utc::now(),
        resolved_at: None,
    }
}

struct Repos {
    resource: MockResourceRepo,
    stock: MockStockRepo,
    history: MockStockHistoryRepo,
    request: MockRequestRepo,
    alert: MockAlertRepo,
}

impl Repos {
    fn new() -> Self {
        Self {
            resource: MockResourceRepo::new(),
            stock: MockStockRepo::new(),
            history: MockStockHistoryRepo::new(),
            request: MockRequestRepo::new(),
            alert: MockAlertRepo::new(),
        }
    }

    fn report(self) -> ReportServiceImpl {
        ReportServiceImpl::builder()
            .resource_repo(Arc::new(self.resource))
            .stock_repo(Arc::new(self.stock))
            .history_repo(Arc::new(self.history))
            .request_repo(Arc::new(self.request))
            .alert_repo(Arc::new(self.alert))
            .build()
    }

    fn export(self) -> ExportServiceImpl {
        ExportServiceImpl::builder()
            .stock_repo(Arc::new(self.stock))
            .request_repo(Arc::new(self.request))
            .build()
    }
}

#[tokio::test]
async fn summary_counts_current_state() {
    let masks = resource("Masques FFP2", ResourceType::Equipment, None);
    let insulin = resource("Insuline", ResourceType::Medication, Some(20));
    let mut repos = Repos::new();
    let (r1, r2) = (masks.clone(), insulin.clone());
    repos
        .resource
        .expect_get_all_by_type()
        .returning(move |_| Ok(vec![r1.clone(), r2.clone()]));
    let stocks = vec![
        detail(&masks, "Paris", 10),
        detail(&masks, "Lyon", 11),
        detail(&insulin, "Paris", 20),
    ];
    repos
        .stock
        .expect_get_all_with_resource()
        .returning(move |_| Ok(stocks.clone()));
    repos.request.expect_count_by_status().returning(|| {
        Ok(vec![
            (RequestStatus::Pending, 4),
            (RequestStatus::Approved, 2),
        ])
    });
    repos
        .alert
        .expect_get_all_filtered()
        .withf(|active_only| *active_only)
        .returning(|_| Ok(vec![alert(true), alert(true)]));

    let summary = repos.report().summary().await.unwrap();
    assert_eq!(summary.total_resources, 2);
    assert_eq!(summary.critical_shortages, 2);
    assert_eq!(summary.pending_requests, 4);
    assert_eq!(summary.active_alerts, 2);
}

#[tokio::test]
async fn summary_of_empty_system_is_zero() {
    let mut repos = Repos::new();
    repos.resource.expect_get_all_by_type().returning(|_| Ok(vec![]));
    repos.stock.expect_get_all_with_resource().returning(|_| Ok(vec![]));
    repos.request.expect_count_by_status().returning(|| Ok(vec![]));
    repos.alert.expect_get_all_filtered().returning(|_| Ok(vec![]));

    let summary = repos.report().summary().await.unwrap();
    assert_eq!(summary.total_resources, 0);
    assert_eq!(summary.pending_requests, 0);
}

#[tokio::test]
async fn trends_are_oldest_first_with_resource_names() {
    let masks = resource("Masques FFP2", ResourceType::Equipment, None);
    let mut repos = Repos::new();
    let r = masks.clone();
    repos
        .resource
        .expect_get_all_by_type()
        .returning(move |_| Ok(vec![r.clone()]));
    let now = Utc::now();
    let history = |quantity: i32, age: i64| StockHistory {
        id: Uuid::new_v4(),
        resource_id: masks.id,
        city: "Paris".to_string(),
        previous_quantity: None,
        new_quantity: quantity,
        change_reason: ChangeReason::Restock,
        updated_by: None,
        created_at: now - Duration::days(age),
    };
    let newest_first = vec![history(30, 1), history(20, 2), history(10, 3)];
    repos
        .history
        .expect_get_history()
        .withf(|filter| {
            filter.city.as_deref() == Some("Paris")
                && filter
                    .since
                    .is_some_and(|since| since < Utc::now() - Duration::days(6))
        })
        .returning(move |_| Ok(newest_first.clone()));

    let points = repos
        .report()
        .stock_trends(TrendQuery {
            resource_id: None,
            city: Some("Paris".to_string()),
            days: Some(7),
        })
        .await
        .unwrap();
    let quantities = points.iter().map(|p| p.quantity).collect::<Vec<_>>();
    assert_eq!(quantities, vec![10, 20, 30]);
    assert!(points.iter().all(|p| p.resource_name == "Masques FFP2"));
}

#[tokio::test]
async fn trends_reject_non_positive_window() {
    let result = Repos::new()
        .report()
        .stock_trends(TrendQuery {
            days: Some(0),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(ReportException::InvalidWindow { value: 0 })));
}

#[tokio::test]
async fn oversized_trend_window_has_no_lower_bound() {
    let mut repos = Repos::new();
    repos.resource.expect_get_all_by_type().returning(|_| Ok(vec![]));
    repos
        .history
        .expect_get_history()
        .withf(|filter| filter.since.is_none())
        .times(1)
        .returning(|_| Ok(vec![]));
    let points = repos
        .report()
        .stock_trends(TrendQuery {
            days: Some(i64::MAX),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(points.is_empty());
}

#[tokio::test]
async fn distribution_groups_by_city_and_type() {
    let masks = resource("Masques", ResourceType::Equipment, None);
    let gloves = resource("Gants", ResourceType::Equipment, None);
    let insulin = resource("Insuline", ResourceType::Medication, None);
    let stocks = vec![
        detail(&masks, "Paris", 100),
        detail(&gloves, "Paris", 5),
        detail(&insulin, "Paris", 40),
        detail(&masks, "Lyon", 50),
    ];
    let mut repos = Repos::new();
    repos
        .stock
        .expect_get_all_with_resource()
        .returning(move |_| Ok(stocks.clone()));

    let entries = repos.report().distribution().await.unwrap();
    let keys = entries
        .iter()
        .map(|e| (e.city.as_str(), e.resource_type, e.total_quantity, e.critical_count))
        .collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            ("Lyon", ResourceType::Equipment, 50, 0),
            ("Paris", ResourceType::Medication, 40, 0),
            ("Paris", ResourceType::Equipment, 105, 1),
        ]
    );
}

#[tokio::test]
async fn stocks_export_as_csv() {
    let masks = resource("Masques FFP2", ResourceType::Equipment, None);
    let row = detail(&masks, "Paris", 120);
    let id = row.stock.id;
    let mut repos = Repos::new();
    repos
        .stock
        .expect_get_all_with_resource()
        .returning(move |_| Ok(vec![row.clone()]));

    let file = repos.export().export_stocks(ExportFormat::Csv).await.unwrap();
    assert_eq!(file.content_type, "text/csv");
    assert_eq!(file.file_name, "stocks.csv");
    let body = String::from_utf8(file.body).unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Resource,City,Postal Code,Quantity,Updated At")
    );
    let line = lines.next().unwrap();
    assert!(line.starts_with(&format!("{id},Masques FFP2,Paris,75001,120,")));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn requests_export_names_the_requester() {
    let insulin = resource("Insuline", ResourceType::Medication, None);
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        email: "marie@example.org".to_string(),
        username: "marie".to_string(),
        password_hash: String::new(),
        role: UserRole::Professional,
        city: None,
        postal_code: None,
        first_name: Some("Marie".to_string()),
        last_name: Some("Curie".to_string()),
        profile_image_url: None,
        is_professional: true,
        department: None,
        phone: None,
        created_at: now,
        updated_at: now,
    };
    let request = Request {
        id: Uuid::new_v4(),
        user_id: user.id,
        resource_id: insulin.id,
        quantity: 15,
        status: RequestStatus::Pending,
        urgency: Urgency::High,
        city: None,
        approved_by: None,
        estimated_delivery_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };
    let detail = RequestDetail {
        request,
        resource: Some(insulin),
        user: Some(user),
    };
    let mut repos = Repos::new();
    repos
        .request
        .expect_get_all_detailed()
        .returning(move |_| Ok(vec![detail.clone()]));

    let file = repos.export().export_requests(ExportFormat::Csv).await.unwrap();
    assert_eq!(file.file_name, "requests.csv");
    let body = String::from_utf8(file.body).unwrap();
    let row = body.lines().nth(1).unwrap();
    assert!(row.contains(",Marie Curie,Insuline,15,pending,high,"));
}

#[tokio::test]
async fn stocks_export_as_json() {
    let masks = resource("Masques FFP2", ResourceType::Equipment, None);
    let row = detail(&masks, "Lyon", 3);
    let mut repos = Repos::new();
    repos
        .stock
        .expect_get_all_with_resource()
        .returning(move |_| Ok(vec![row.clone()]));

    let file = repos.export().export_stocks(ExportFormat::Json).await.unwrap();
    assert_eq!(file.content_type, "application/json");
    let value: serde_json::Value = serde_json::from_slice(&file.body).unwrap();
    assert_eq!(value[0]["city"], "Lyon");
    assert_eq!(value[0]["resource"]["name"], "Masques FFP2");
}
