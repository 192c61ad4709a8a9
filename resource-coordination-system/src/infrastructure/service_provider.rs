use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use domain_account::{repository::SessionStore, service::AccountService};
use domain_ledger::service::{DistributionPlanService, ResourceService, StockLedgerService};
use domain_notice::service::{AlertService, AuditService, NotificationService};
use domain_report::service::{ExportService, ReportService};
use domain_request::service::RequestService;
use service_account::AccountServiceImpl;
use service_ledger::{DistributionPlanServiceImpl, ResourceServiceImpl, StockLedgerServiceImpl};
use service_notice::{AlertServiceImpl, AuditServiceImpl, NotificationServiceImpl};
use service_report::{ExportServiceImpl, ReportServiceImpl};
use service_request::RequestServiceImpl;
use uuid::Uuid;

use super::{
    config::{CommonConfig, CoordinationConfig},
    database::{Database, OrmRepo},
    middleware::authentication::UserInfo,
    session::MemorySessionStore,
};
use crate::api::error::ApiError;

/// Hands out a dependency of type `T`.
pub trait IServiceProvider<T> {
    fn provide(&self) -> T;
}

/// Process-wide singletons.
#[derive(Clone)]
pub struct ServiceProvider {
    config: CoordinationConfig,
    database: Arc<Database>,
    session_store: Arc<MemorySessionStore>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config: CoordinationConfig = config.try_deserialize()?;
        let database = Arc::new(Database::new(&config.common.db.url).await?);
        Ok(Self::new(config, database))
    }

    pub fn new(config: CoordinationConfig, database: Arc<Database>) -> Self {
        let session_store = Arc::new(MemorySessionStore::new(config.session.ttl_secs));
        Self {
            config,
            database,
            session_store,
        }
    }

    /// Dependencies for one request acting as `user`.
    pub fn scoped(&self, user: Option<UserInfo>, ip_address: Option<String>) -> ServiceProviderScoped {
        ServiceProviderScoped {
            repo: Arc::new(OrmRepo::builder().db(self.database.clone()).build()),
            sp: self.clone(),
            user,
            ip_address,
        }
    }
}

impl IServiceProvider<CoordinationConfig> for ServiceProvider {
    fn provide(&self) -> CoordinationConfig {
        self.config.clone()
    }
}

impl IServiceProvider<CommonConfig> for ServiceProvider {
    fn provide(&self) -> CommonConfig {
        self.config.common.clone()
    }
}

impl IServiceProvider<Arc<Database>> for ServiceProvider {
    fn provide(&self) -> Arc<Database> {
        self.database.clone()
    }
}

impl IServiceProvider<Arc<MemorySessionStore>> for ServiceProvider {
    fn provide(&self) -> Arc<MemorySessionStore> {
        self.session_store.clone()
    }
}

impl IServiceProvider<Arc<dyn SessionStore>> for ServiceProvider {
    fn provide(&self) -> Arc<dyn SessionStore> {
        self.session_store.clone()
    }
}

/// Dependencies of one request. Every service built from it shares the same [`OrmRepo`],
/// so their writes land in one unit of work.
pub struct ServiceProviderScoped {
    sp: ServiceProvider,
    repo: Arc<OrmRepo>,
    user: Option<UserInfo>,
    ip_address: Option<String>,
}

impl ServiceProviderScoped {
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|u| u.user_id)
    }

    /// The acting user, or 401.
    pub fn require_user(&self) -> Result<Uuid, ApiError> {
        self.user_id().ok_or_else(ApiError::unauthenticated)
    }

    pub fn config(&self) -> &CoordinationConfig {
        &self.sp.config
    }
}

impl FromRequest for ServiceProviderScoped {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(sp) = req.app_data::<web::Data<ServiceProvider>>() else {
            return ready(Err(ApiError::Internal(anyhow::anyhow!(
                "ServiceProvider is not registered as app data."
            ))));
        };
        let user = req.extensions().get::<UserInfo>().cloned();
        let ip_address = req.connection_info().realip_remote_addr().map(str::to_string);
        ready(Ok(sp.scoped(user, ip_address)))
    }
}

impl IServiceProvider<Arc<dyn ResourceService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn ResourceService> {
        Arc::new(ResourceServiceImpl::builder().resource_repo(self.repo.clone()).build())
    }
}

impl IServiceProvider<Arc<dyn StockLedgerService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn StockLedgerService> {
        Arc::new(
            StockLedgerServiceImpl::builder()
                .resource_repo(self.repo.clone())
                .stock_repo(self.repo.clone())
                .history_repo(self.repo.clone())
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn DistributionPlanService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn DistributionPlanService> {
        Arc::new(
            DistributionPlanServiceImpl::builder()
                .resource_repo(self.repo.clone())
                .plan_repo(self.repo.clone())
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn RequestService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn RequestService> {
        Arc::new(
            RequestServiceImpl::builder()
                .request_repo(self.repo.clone())
                .resource_repo(self.repo.clone())
                .stock_repo(self.repo.clone())
                .notification_repo(self.repo.clone())
                .policy(self.sp.config.request.transition_policy)
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn AlertService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn AlertService> {
        Arc::new(
            AlertServiceImpl::builder()
                .alert_repo(self.repo.clone())
                .resource_repo(self.repo.clone())
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn NotificationService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn NotificationService> {
        Arc::new(
            NotificationServiceImpl::builder()
                .notification_repo(self.repo.clone())
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn AuditService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn AuditService> {
        Arc::new(
            AuditServiceImpl::builder()
                .audit_repo(self.repo.clone())
                .user_id(self.user_id())
                .ip_address(self.ip_address.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn AccountService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn AccountService> {
        Arc::new(
            AccountServiceImpl::builder()
                .user_repo(self.repo.clone())
                .session_store(self.sp.session_store.clone())
                .user_id(self.user_id())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn ReportService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn ReportService> {
        Arc::new(
            ReportServiceImpl::builder()
                .resource_repo(self.repo.clone())
                .stock_repo(self.repo.clone())
                .history_repo(self.repo.clone())
                .request_repo(self.repo.clone())
                .alert_repo(self.repo.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn ExportService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn ExportService> {
        Arc::new(
            ExportServiceImpl::builder()
                .stock_repo(self.repo.clone())
                .request_repo(self.repo.clone())
                .build(),
        )
    }
}
