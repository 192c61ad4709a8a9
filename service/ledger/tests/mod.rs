use std::sync::Arc;

use chrono::Utc;
use domain_ledger::{
    exception::LedgerException,
    mock::{MockDistributionPlanRepo, MockResourceRepo, MockStockHistoryRepo, MockStockRepo},
    model::{
        entity::{ChangeReason, Resource, ResourceType, Stock, StockHistory},
        vo::{NewDistributionPlan, NewResource, StockChange, StockDetail, StockFilter},
    },
    service::{DistributionPlanService, ResourceService, StockLedgerService},
};
use service_ledger::{DistributionPlanServiceImpl, ResourceServiceImpl, StockLedgerServiceImpl};
use uuid::Uuid;

fn resource(critical_level: Option<i32>) -> Resource {
    Resource {
        id: Uuid::new_v4(),
        name: "Doliprane 1000mg".to_string(),
        r#type: ResourceType::Medication,
        description: None,
        critical_level,
        recommended_stock: Some(500),
        created_at: Utc::now(),
    }
}

fn stock(resource_id: Uuid, city: &str, quantity: i32) -> Stock {
    Stock {
        id: Uuid::new_v4(),
        resource_id,
        city: city.to_string(),
        postal_code: "13001".to_string(),
        quantity,
        last_restock_date: None,
        updated_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn resource_repo_with(resource: Option<Resource>) -> MockResourceRepo {
    let mut repo = MockResourceRepo::new();
    repo.expect_find_by_id().returning(move |_| Ok(resource.clone()));
    repo
}

fn change(resource_id: Uuid, quantity: i32, reason: Option<ChangeReason>) -> StockChange {
    StockChange {
        resource_id,
        city: "Marseille".to_string(),
        postal_code: "13001".to_string(),
        quantity,
        change_reason: reason,
    }
}

#[tokio::test]
async fn first_write_creates_stock_and_history_without_previous() {
    let resource = resource(None);
    let resource_id = resource.id;
    let user_id = Uuid::new_v4();
    let mut stock_repo = MockStockRepo::new();
    stock_repo
        .expect_find_by_resource_and_city()
        .withf(move |id, city| *id == resource_id && city == "Marseille")
        .returning(|_, _| Ok(None));
    stock_repo
        .expect_insert()
        .withf(|s: &Stock| s.quantity == 150 && s.last_restock_date.is_some())
        .times(1)
        .returning(|s: &Stock| Ok(s.id));
    stock_repo.expect_save_changed().times(1).returning(|| Ok(true));
    let mut history_repo = MockStockHistoryRepo::new();
    history_repo
        .expect_insert()
        .withf(|h: &StockHistory| h.previous_quantity.is_none() && h.new_quantity == 150)
        .times(1)
        .returning(|h: &StockHistory| Ok(h.id));

    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(resource_repo_with(Some(resource))))
        .stock_repo(Arc::new(stock_repo))
        .history_repo(Arc::new(history_repo))
        .user_id(Some(user_id))
        .build();
    let movement = service.record(change(resource_id, 150, None)).await.unwrap();
    assert_eq!(movement.stock.quantity, 150);
    assert_eq!(movement.stock.updated_by, Some(user_id));
    assert_eq!(movement.history.change_reason, ChangeReason::Restock);
    assert_eq!(movement.history.new_quantity, movement.stock.quantity);
}

#[tokio::test]
async fn later_write_keeps_row_identity_and_records_previous_quantity() {
    let resource = resource(Some(50));
    let resource_id = resource.id;
    let existing = stock(resource_id, "Marseille", 40);
    let existing_id = existing.id;
    let mut stock_repo = MockStockRepo::new();
    stock_repo
        .expect_find_by_resource_and_city()
        .returning(move |_, _| Ok(Some(existing.clone())));
    stock_repo
        .expect_insert()
        .withf(move |s: &Stock| s.id == existing_id && s.quantity == 25)
        .times(1)
        .returning(|s: &Stock| Ok(s.id));
    stock_repo.expect_save_changed().returning(|| Ok(true));
    let mut history_repo = MockStockHistoryRepo::new();
    history_repo
        .expect_insert()
        .withf(|h: &StockHistory| h.previous_quantity == Some(40) && h.new_quantity == 25)
        .times(1)
        .returning(|h: &StockHistory| Ok(h.id));

    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(resource_repo_with(Some(resource))))
        .stock_repo(Arc::new(stock_repo))
        .history_repo(Arc::new(history_repo))
        .build();
    let movement = service
        .record(change(resource_id, 25, Some(ChangeReason::Consumption)))
        .await
        .unwrap();
    assert_eq!(movement.stock.id, existing_id);
    // consumption leaves the restock date alone
    assert_eq!(movement.stock.last_restock_date, None);
}

#[tokio::test]
async fn write_against_unknown_resource_is_rejected() {
    let resource_id = Uuid::new_v4();
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(resource_repo_with(None)))
        .stock_repo(Arc::new(MockStockRepo::new()))
        .history_repo(Arc::new(MockStockHistoryRepo::new()))
        .build();
    let result = service.record(change(resource_id, 10, None)).await;
    assert!(matches!(result, Err(LedgerException::NoSuchResource { id }) if id == resource_id));
}

#[tokio::test]
async fn negative_quantity_and_blank_city_are_validation_errors() {
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .stock_repo(Arc::new(MockStockRepo::new()))
        .history_repo(Arc::new(MockStockHistoryRepo::new()))
        .build();
    let negative = service.record(change(Uuid::new_v4(), -1, None)).await.unwrap_err();
    assert!(negative.is_validation());
    let mut blank_city = change(Uuid::new_v4(), 1, None);
    blank_city.city = "  ".to_string();
    let blank = service.record(blank_city).await.unwrap_err();
    assert!(matches!(blank, LedgerException::EmptyField { field: "city" }));
}

#[tokio::test]
async fn critical_filter_keeps_stocks_at_or_below_threshold() {
    let with_level = resource(Some(100));
    let without_level = resource(None);
    let details = vec![
        StockDetail {
            stock: stock(with_level.id, "Paris", 100),
            resource: with_level.clone(),
        },
        StockDetail {
            stock: stock(with_level.id, "Lyon", 101),
            resource: with_level,
        },
        StockDetail {
            stock: stock(without_level.id, "Lille", 10),
            resource: without_level.clone(),
        },
        StockDetail {
            stock: stock(without_level.id, "Bordeaux", 11),
            resource: without_level,
        },
    ];
    let mut stock_repo = MockStockRepo::new();
    stock_repo
        .expect_get_all_with_resource()
        .returning(move |_| Ok(details.clone()));
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .stock_repo(Arc::new(stock_repo))
        .history_repo(Arc::new(MockStockHistoryRepo::new()))
        .build();

    let critical = service
        .list(StockFilter {
            city: None,
            critical_only: true,
        })
        .await
        .unwrap();
    let cities: Vec<_> = critical.iter().map(|d| d.stock.city.as_str()).collect();
    assert_eq!(cities, vec!["Paris", "Lille"]);

    let all = service.list(StockFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn history_window_must_be_positive() {
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .stock_repo(Arc::new(MockStockRepo::new()))
        .history_repo(Arc::new(MockStockHistoryRepo::new()))
        .build();
    let result = service.history(Uuid::new_v4(), None, Some(0)).await;
    assert!(matches!(result, Err(LedgerException::InvalidWindow { value: 0 })));
}

#[tokio::test]
async fn history_passes_window_to_repository() {
    let resource = resource(None);
    let resource_id = resource.id;
    let mut history_repo = MockStockHistoryRepo::new();
    history_repo
        .expect_get_history()
        .withf(move |f| {
            f.resource_id == Some(resource_id)
                && f.city.as_deref() == Some("Paris")
                && f.since.is_some_and(|since| since < Utc::now())
        })
        .times(1)
        .returning(|_| Ok(vec![]));
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(resource_repo_with(Some(resource))))
        .stock_repo(Arc::new(MockStockRepo::new()))
        .history_repo(Arc::new(history_repo))
        .build();
    let rows = service
        .history(resource_id, Some("Paris".to_string()), Some(7))
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn oversized_history_window_has_no_lower_bound() {
    let resource = resource(None);
    let resource_id = resource.id;
    let mut history_repo = MockStockHistoryRepo::new();
    history_repo
        .expect_get_history()
        .withf(move |f| f.resource_id == Some(resource_id) && f.since.is_none())
        .times(2)
        .returning(|_| Ok(vec![]));
    let service = StockLedgerServiceImpl::builder()
        .resource_repo(Arc::new(resource_repo_with(Some(resource))))
        .stock_repo(Arc::new(MockStockRepo::new()))
        .history_repo(Arc::new(history_repo))
        .build();
    for days in [100_000_000, i64::MAX] {
        let rows = service.history(resource_id, None, Some(days)).await;
        assert!(rows.is_ok_and(|rows| rows.is_empty()));
    }
}

#[tokio::test]
async fn resource_creation_fills_default_thresholds() {
    let mut repo = MockResourceRepo::new();
    repo.expect_insert()
        .withf(|r: &Resource| r.critical_level == Some(10) && r.recommended_stock == Some(100))
        .times(1)
        .returning(|r: &Resource| Ok(r.id));
    repo.expect_save_changed().times(1).returning(|| Ok(true));
    let service = ResourceServiceImpl::builder().resource_repo(Arc::new(repo)).build();
    let created = service
        .create(NewResource {
            name: " Masques FFP2 ".to_string(),
            r#type: ResourceType::Equipment,
            description: None,
            critical_level: None,
            recommended_stock: None,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Masques FFP2");
    assert_eq!(created.critical_threshold(), 10);
}

#[tokio::test]
async fn resource_with_negative_critical_level_is_rejected() {
    let service = ResourceServiceImpl::builder()
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .build();
    let result = service
        .create(NewResource {
            name: "Respirateur".to_string(),
            r#type: ResourceType::Equipment,
            description: None,
            critical_level: Some(-1),
            recommended_stock: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(LedgerException::Negative {
            field: "criticalLevel",
            value: -1
        })
    ));
}

#[tokio::test]
async fn distribution_plan_between_same_city_is_rejected() {
    let service = DistributionPlanServiceImpl::builder()
        .resource_repo(Arc::new(MockResourceRepo::new()))
        .plan_repo(Arc::new(MockDistributionPlanRepo::new()))
        .build();
    let result = service
        .create(NewDistributionPlan {
            resource_id: Uuid::new_v4(),
            from_city: "Paris".to_string(),
            to_city: "Paris".to_string(),
            quantity: 10,
            estimated_arrival: None,
        })
        .await;
    assert!(matches!(result, Err(LedgerException::SameCity { .. })));
}
