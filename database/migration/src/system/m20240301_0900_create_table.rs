use database_model::system::prelude::*;
use sea_orm_migration::{
    prelude::*,
    sea_orm::{DbBackend, EntityTrait, Schema},
};
pub struct Migration;

fn get_seaorm_create_stmt<E: EntityTrait>(backend: DbBackend, e: E) -> TableCreateStatement {
    let schema = Schema::new(backend);
    schema.create_table_from_entity(e).if_not_exists().to_owned()
}

fn get_seaorm_drop_stmt<E: EntityTrait>(e: E) -> TableDropStatement {
    Table::drop().table(e).if_exists().to_owned()
}

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240301_0900_create_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let stmts = vec![
            get_seaorm_create_stmt(backend, UserEntity),
            get_seaorm_create_stmt(backend, ResourceEntity),
            get_seaorm_create_stmt(backend, StockEntity),
            get_seaorm_create_stmt(backend, StockHistoryEntity),
            get_seaorm_create_stmt(backend, RequestEntity),
            get_seaorm_create_stmt(backend, AlertEntity),
            get_seaorm_create_stmt(backend, NotificationEntity),
            get_seaorm_create_stmt(backend, AuditLogEntity),
            get_seaorm_create_stmt(backend, DistributionPlanEntity),
        ];
        for stmt in stmts {
            manager.create_table(stmt).await?;
        }
        // 库存 upsert 依赖该唯一约束
        manager
            .create_index(
                Index::create()
                    .name("UQ_Stock_Resource_City")
                    .table(StockEntity)
                    .col(StockColumn::ResourceId)
                    .col(StockColumn::City)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("IDX_StockHistory_Resource_CreatedAt")
                    .table(StockHistoryEntity)
                    .col(StockHistoryColumn::ResourceId)
                    .col(StockHistoryColumn::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let stmts = vec![
            get_seaorm_drop_stmt(DistributionPlanEntity),
            get_seaorm_drop_stmt(AuditLogEntity),
            get_seaorm_drop_stmt(NotificationEntity),
            get_seaorm_drop_stmt(AlertEntity),
            get_seaorm_drop_stmt(RequestEntity),
            get_seaorm_drop_stmt(StockHistoryEntity),
            get_seaorm_drop_stmt(StockEntity),
            get_seaorm_drop_stmt(ResourceEntity),
            get_seaorm_drop_stmt(UserEntity),
        ];
        for stmt in stmts {
            manager.drop_table(stmt).await?;
        }
        Ok(())
    }
}
