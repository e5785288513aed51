use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use storage_connect::cache::structs::cache_service::CacheService;
use storage_connect::common::common::setup_logging;
use storage_connect::config::structs::configuration::Configuration;
use storage_connect::connector::structs::adapter_pool::AdapterPool;
use storage_connect::connector::structs::connector_registry::ConnectorRegistry;
use storage_connect::factory::structs::connection_factory::ConnectionFactory;
use storage_connect::filesystem::structs::memory_filesystem::MemoryFilesystem;
use storage_connect::filesystem::traits::filesystem::Filesystem;
use storage_connect::manager::structs::connection_manager::ConnectionManager;
use storage_connect::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        })))
    } else {
        None
    };

    let adapters = Arc::new(AdapterPool::new());
    adapters.insert("memory", Arc::new(MemoryFilesystem::new()));
    let caches = Arc::new(CacheService::with_array_store());
    let registry = Arc::new(ConnectorRegistry::with_defaults(adapters, caches));

    if args.list_drivers {
        for driver in registry.drivers() {
            println!("{}", driver);
        }
        return Ok(());
    }

    let manager = ConnectionManager::from_configuration(ConnectionFactory::new(registry), &config);
    let names: Vec<String> = match &args.connection {
        Some(name) => vec![name.clone()],
        None => config.connections.keys().cloned().collect(),
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let mut failed = false;
            for name in names.iter() {
                match manager.connection(Some(name)).await {
                    Ok(filesystem) => {
                        info!("[Main] Connection {} ready ({})", name, filesystem.name());
                    }
                    Err(e) => {
                        error!("[Main] Connection {} failed: {}", name, e);
                        failed = true;
                    }
                }
            }
            if failed {
                exit(1);
            }
            info!("[Main] Opened: {}", manager.opened().join(", "));
        });

    Ok(())
}
