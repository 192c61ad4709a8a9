use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use domain_ledger::repository::StockRepo;
use domain_report::{
    exception::ReportResult,
    model::{ExportFile, ExportFormat},
    service::ExportService,
};
use domain_request::{model::vo::RequestFilter, repository::RequestRepo};
use typed_builder::TypedBuilder;

const STOCK_HEADERS: [&str; 6] = ["ID", "Resource", "City", "Postal Code", "Quantity", "Updated At"];
const REQUEST_HEADERS: [&str; 7] = [
    "ID",
    "User",
    "Resource",
    "Quantity",
    "Status",
    "Urgency",
    "Created At",
];

#[derive(TypedBuilder)]
pub struct ExportServiceImpl {
    stock_repo: Arc<dyn StockRepo>,
    request_repo: Arc<dyn RequestRepo>,
}

fn write_csv<const N: usize>(
    headers: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    Ok(writer.into_inner()?)
}

fn file(name: &str, format: ExportFormat, body: Vec<u8>) -> ExportFile {
    let (content_type, extension) = match format {
        ExportFormat::Csv => ("text/csv", "csv"),
        ExportFormat::Json => ("application/json", "json"),
    };
    ExportFile {
        content_type,
        file_name: format!("{name}.{extension}"),
        body,
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(&serde_json::to_value(value)?)?)
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn export_stocks(&self, format: ExportFormat) -> ReportResult<ExportFile> {
        let stocks = self.stock_repo.get_all_with_resource(None).await?;
        let body = match format {
            ExportFormat::Csv => write_csv(
                STOCK_HEADERS,
                stocks.into_iter().map(|s| {
                    [
                        s.stock.id.to_string(),
                        s.resource.name,
                        s.stock.city,
                        s.stock.postal_code,
                        s.stock.quantity.to_string(),
                        s.stock.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                    ]
                }),
            )?,
            ExportFormat::Json => to_json(&stocks)?,
        };
        Ok(file("stocks", format, body))
    }

    async fn export_requests(&self, format: ExportFormat) -> ReportResult<ExportFile> {
        let requests = self
            .request_repo
            .get_all_detailed(RequestFilter::default())
            .await?;
        let body = match format {
            ExportFormat::Csv => write_csv(
                REQUEST_HEADERS,
                requests.into_iter().map(|r| {
                    let user = r
                        .user
                        .map(|u| {
                            let full_name = format!(
                                "{} {}",
                                u.first_name.unwrap_or_default(),
                                u.last_name.unwrap_or_default()
                            );
                            match full_name.trim() {
                                "" => u.username,
                                name => name.to_string(),
                            }
                        })
                        .unwrap_or_default();
                    [
                        r.request.id.to_string(),
                        user,
                        r.resource.map(|res| res.name).unwrap_or_default(),
                        r.request.quantity.to_string(),
                        r.request.status.to_string(),
                        r.request.urgency.as_str().to_string(),
                        r.request.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                    ]
                }),
            )?,
            ExportFormat::Json => to_json(&requests)?,
        };
        Ok(file("requests", format, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_fields_with_commas() {
        let body = write_csv(["ID", "Resource"], [["1".to_string(), "Gants, nitrile".to_string()]])
            .unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "ID,Resource\n1,\"Gants, nitrile\"\n"
        );
    }

    #[test]
    fn file_name_follows_format() {
        assert_eq!(file("stocks", ExportFormat::Csv, vec![]).file_name, "stocks.csv");
        let json = file("requests", ExportFormat::Json, vec![]);
        assert_eq!(json.file_name, "requests.json");
        assert_eq!(json.content_type, "application/json");
    }
}
