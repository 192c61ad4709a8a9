//! Demo data loaded into an empty database.
use std::sync::Arc;

use domain_ledger::{
    model::{
        entity::ResourceType,
        vo::{NewResource, StockChange},
    },
    service::{ResourceService, StockLedgerService},
};
use domain_notice::{
    model::{
        entity::{AlertSeverity, AlertType},
        vo::NewAlert,
    },
    service::AlertService,
};
use uuid::Uuid;

use super::service_provider::{IServiceProvider, ServiceProvider};

fn resource(name: &str, r#type: ResourceType, description: &str) -> NewResource {
    NewResource {
        name: name.to_string(),
        r#type,
        description: Some(description.to_string()),
        critical_level: None,
        recommended_stock: None,
    }
}

fn stock(resource_id: Uuid, city: &str, postal_code: &str, quantity: i32) -> StockChange {
    StockChange {
        resource_id,
        city: city.to_string(),
        postal_code: postal_code.to_string(),
        quantity,
        change_reason: None,
    }
}

fn alert(
    r#type: AlertType,
    severity: AlertSeverity,
    message: &str,
    city: &str,
    resource_id: Option<Uuid>,
) -> NewAlert {
    NewAlert {
        r#type,
        severity,
        message: message.to_string(),
        city: Some(city.to_string()),
        resource_id,
    }
}

/// Seeds resources, stocks and alerts. Does nothing when any resource exists.
/// Returns whether data was written.
pub async fn seed_database(sp: &ServiceProvider) -> anyhow::Result<bool> {
    let scoped = sp.scoped(None, None);
    let resources: Arc<dyn ResourceService> = scoped.provide();
    if !resources.list(None).await?.is_empty() {
        return Ok(false);
    }
    tracing::info!("Seeding database...");

    let masks = resources
        .create(resource(
            "Masques FFP2",
            ResourceType::Equipment,
            "Masques de protection respiratoire",
        ))
        .await?;
    let paracetamol = resources
        .create(resource("Doliprane 1000mg", ResourceType::Medication, "Paracétamol"))
        .await?;
    let nurses = resources
        .create(resource("Infirmier(e)", ResourceType::Staff, "Personnel soignant diplômé"))
        .await?;
    let ventilators = resources
        .create(resource("Respirateur", ResourceType::Equipment, "Ventilateur médical"))
        .await?;

    let ledger: Arc<dyn StockLedgerService> = scoped.provide();
    for change in [
        stock(masks.id, "Paris", "75001", 5000),
        stock(masks.id, "Lyon", "69001", 2000),
        stock(paracetamol.id, "Marseille", "13001", 150),
        stock(paracetamol.id, "Paris", "75001", 40),
        stock(nurses.id, "Bordeaux", "33000", 5),
        stock(ventilators.id, "Lille", "59000", 8),
    ] {
        ledger.record(change).await?;
    }

    let alerts: Arc<dyn AlertService> = scoped.provide();
    for new_alert in [
        alert(
            AlertType::Shortage,
            AlertSeverity::High,
            "Pénurie de Doliprane à Marseille",
            "Marseille",
            Some(paracetamol.id),
        ),
        alert(
            AlertType::Epidemic,
            AlertSeverity::Medium,
            "Pic de grippe en Île-de-France",
            "Paris",
            None,
        ),
        alert(
            AlertType::Maintenance,
            AlertSeverity::Low,
            "Maintenance des respirateurs prévue",
            "Lille",
            Some(ventilators.id),
        ),
    ] {
        alerts.create(new_alert).await?;
    }

    tracing::info!("Database seeded.");
    Ok(true)
}
