use std::{sync::Arc, time::Duration};

use actix_web::web;
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{
    config::{build_config, CommonConfig, CoordinationConfig},
    database::Database,
    middleware::authentication::Authentication,
    seed::seed_database,
    service_provider::IServiceProvider,
    session::MemorySessionStore,
    telemetry::initialize_telemetry,
    ServiceProvider,
};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

pub fn run() {
    match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(async_run()),
        Err(e) => eprintln!("{}: {}", "Cannot build tokio runtime".red(), e),
    }
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    let config: CoordinationConfig = service_provider.provide();
    if let Err(e) = initialize_telemetry(&config.common.telemetry) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    if config.common.db.migrate {
        let database: Arc<Database> = service_provider.provide();
        if let Err(e) = database.migrate().await {
            return error!("Cannot migrate database: {e:?}");
        }
    }
    if config.seed {
        match seed_database(&service_provider).await {
            Ok(true) => info!("Database seeded."),
            Ok(false) => info!("Database already holds data, seeding skipped."),
            Err(e) => return error!("Cannot seed database: {e:?}"),
        }
    }

    let session_store: Arc<MemorySessionStore> = service_provider.provide();
    let purge = tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            session_store.purge_expired();
        }
    });

    tokio::select! {
        _ = initialize_web_host(service_provider) => {
            purge.abort();
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping services (ctrl-c handling).");
            purge.abort();
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let config: CoordinationConfig = sp.provide();
    let common_config: CommonConfig = sp.provide();
    let cookie_name = config.session.cookie_name.clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(Authentication::new(sp.provide(), cookie_name.clone()))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(web::Data::from(sp.clone()))
            .configure(api::configure)
    })
    .bind((
        common_config.host.bind_address.to_owned(),
        common_config.host.bind_port,
    ));
    let server = match server {
        Ok(x) => x,
        Err(e) => {
            return error!(
                "Cannot bind {}:{}: {}",
                common_config.host.bind_address, common_config.host.bind_port, e
            );
        }
    };
    info!(
        "Listening on {}:{}.",
        common_config.host.bind_address, common_config.host.bind_port
    );
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
