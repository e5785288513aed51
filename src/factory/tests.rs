#[cfg(test)]
mod factory_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use crate::config::structs::connection_config::ConnectionConfig;
    use crate::connector::errors::ConnectorError;
    use crate::connector::structs::connector_registry::ConnectorRegistry;
    use crate::connector::traits::connector::Connector;
    use crate::factory::structs::connection_factory::ConnectionFactory;
    use crate::filesystem::structs::memory_filesystem::MemoryFilesystem;
    use crate::filesystem::traits::filesystem::Filesystem;

    struct RecordingConnector {
        seen: Arc<Mutex<Vec<ConnectionConfig>>>,
        filesystem: Arc<dyn Filesystem>,
    }

    #[async_trait]
    impl Connector for RecordingConnector {
        async fn connect(&self, config: &ConnectionConfig) -> Result<Arc<dyn Filesystem>, ConnectorError> {
            self.seen.lock().push(config.clone());
            Ok(self.filesystem.clone())
        }
    }

    struct Recorder {
        constructed: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<ConnectionConfig>>>,
        filesystem: Arc<dyn Filesystem>,
    }

    impl Recorder {
        fn new() -> Recorder {
            Recorder {
                constructed: Arc::new(AtomicUsize::new(0)),
                seen: Arc::new(Mutex::new(Vec::new())),
                filesystem: Arc::new(MemoryFilesystem::new()),
            }
        }

        fn register(&self, registry: &ConnectorRegistry, name: &str) {
            let constructed = self.constructed.clone();
            let seen = self.seen.clone();
            let filesystem = self.filesystem.clone();
            registry.register(name, move || {
                constructed.fetch_add(1, Ordering::SeqCst);
                Box::new(RecordingConnector {
                    seen: seen.clone(),
                    filesystem: filesystem.clone(),
                })
            });
        }
    }

    mod driver_validation_tests {
        use std::sync::Arc;
        use std::sync::atomic::Ordering;
        use super::Recorder;
        use crate::config::structs::connection_config::ConnectionConfig;
        use crate::connector::structs::connector_registry::ConnectorRegistry;
        use crate::factory::errors::FactoryError;
        use crate::factory::structs::connection_factory::ConnectionFactory;

        fn factory_with_recorder() -> (ConnectionFactory, Recorder) {
            let registry = ConnectorRegistry::new();
            let recorder = Recorder::new();
            recorder.register(&registry, "memory");
            (ConnectionFactory::new(Arc::new(registry)), recorder)
        }

        #[tokio::test]
        async fn test_missing_driver() {
            let (factory, recorder) = factory_with_recorder();
            let result = factory.make(&ConnectionConfig::new()).await;
            assert!(matches!(result, Err(FactoryError::EmptyDriver)));
            assert_eq!(recorder.constructed.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_empty_driver() {
            let (factory, recorder) = factory_with_recorder();
            let result = factory.make(&ConnectionConfig::new().with("driver", "")).await;
            assert!(matches!(result, Err(FactoryError::EmptyDriver)));
            assert_eq!(recorder.constructed.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_non_string_driver() {
            let (factory, _recorder) = factory_with_recorder();
            let result = factory.make(&ConnectionConfig::new().with("driver", 7i64)).await;
            assert!(matches!(result, Err(FactoryError::EmptyDriver)));
        }

        #[tokio::test]
        async fn test_unsupported_driver() {
            let (factory, recorder) = factory_with_recorder();
            let result = factory.make(&ConnectionConfig::new().with("driver", "unsupported")).await;
            match result {
                Err(FactoryError::UnsupportedDriver(driver)) => assert_eq!(driver, "unsupported"),
                _ => panic!("expected UnsupportedDriver"),
            }
            assert_eq!(recorder.constructed.load(Ordering::SeqCst), 0);
        }

        #[tokio::test]
        async fn test_create_connector_checks_driver() {
            let (factory, recorder) = factory_with_recorder();
            assert!(matches!(factory.create_connector(&ConnectionConfig::new()), Err(FactoryError::EmptyDriver)));
            assert!(factory.create_connector(&ConnectionConfig::new().with("driver", "memory")).is_ok());
            assert_eq!(recorder.constructed.load(Ordering::SeqCst), 1);
            assert!(recorder.seen.lock().is_empty());
        }
    }

    mod make_tests {
        use std::sync::Arc;
        use std::sync::atomic::Ordering;
        use super::Recorder;
        use crate::config::structs::connection_config::ConnectionConfig;
        use crate::connector::structs::connector_registry::ConnectorRegistry;
        use crate::factory::errors::FactoryError;
        use crate::factory::structs::connection_factory::ConnectionFactory;
        use crate::filesystem::traits::filesystem::Filesystem;

        #[tokio::test]
        async fn test_make_passes_full_config() {
            let registry = ConnectorRegistry::new();
            let recorder = Recorder::new();
            recorder.register(&registry, "illuminate");
            let factory = ConnectionFactory::new(Arc::new(registry));
            let config = ConnectionConfig::new()
                .with("driver", "illuminate")
                .with("connector", "redis")
                .with("name", "foo");

            let filesystem = factory.make(&config).await.unwrap();

            assert!(Arc::ptr_eq(&filesystem, &recorder.filesystem));
            assert_eq!(*recorder.seen.lock(), vec![config]);
            assert_eq!(recorder.constructed.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_make_with_cache_decorates() {
            let registry = ConnectorRegistry::new();
            let primary = Recorder::new();
            let cache = Recorder::new();
            primary.register(&registry, "adapter");
            cache.register(&registry, "illuminate");
            let factory = ConnectionFactory::new(Arc::new(registry));
            let cache_config = ConnectionConfig::new()
                .with("driver", "illuminate")
                .with("connector", "redis");
            let config = ConnectionConfig::new()
                .with("driver", "adapter")
                .with("adapter", "local")
                .with("cache", cache_config.clone());

            let filesystem = factory.make(&config).await.unwrap();

            assert_eq!(filesystem.name(), "cached");
            assert_eq!(*primary.seen.lock(), vec![config]);
            assert_eq!(*cache.seen.lock(), vec![cache_config]);
        }

        #[tokio::test]
        async fn test_invalid_cache_section() {
            let registry = ConnectorRegistry::new();
            let primary = Recorder::new();
            primary.register(&registry, "memory");
            let factory = ConnectionFactory::new(Arc::new(registry));
            let config = ConnectionConfig::new()
                .with("driver", "memory")
                .with("cache", "redis");

            let result = factory.make(&config).await;

            assert!(matches!(result, Err(FactoryError::InvalidCacheConfig(found)) if found == "string"));
            assert!(primary.seen.lock().is_empty());
        }

        #[tokio::test]
        async fn test_unsupported_cache_driver_fails_before_connecting() {
            let registry = ConnectorRegistry::new();
            let primary = Recorder::new();
            primary.register(&registry, "memory");
            let factory = ConnectionFactory::new(Arc::new(registry));
            let config = ConnectionConfig::new()
                .with("driver", "memory")
                .with("cache", ConnectionConfig::new().with("driver", "memcached"));

            let result = factory.make(&config).await;

            assert!(matches!(result, Err(FactoryError::UnsupportedDriver(driver)) if driver == "memcached"));
            assert!(primary.seen.lock().is_empty());
        }

        #[tokio::test]
        async fn test_cache_section_without_driver() {
            let registry = ConnectorRegistry::new();
            let primary = Recorder::new();
            primary.register(&registry, "memory");
            let factory = ConnectionFactory::new(Arc::new(registry));
            let config = ConnectionConfig::new()
                .with("driver", "memory")
                .with("cache", ConnectionConfig::new().with("ttl", 60i64));

            assert!(matches!(factory.make(&config).await, Err(FactoryError::EmptyDriver)));
        }
    }

    #[tokio::test]
    async fn test_factory_is_stateless_between_calls() {
        let registry = ConnectorRegistry::new();
        registry.register("memory", || Box::new(crate::connector::structs::memory_connector::MemoryConnector::new()));
        let factory = ConnectionFactory::new(Arc::new(registry));
        let config = ConnectionConfig::new().with("driver", "memory");

        let first = factory.make(&config).await.unwrap();
        let second = factory.make(&config).await.unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        first.write("a.txt", b"1").await.unwrap();
        assert!(!second.has("a.txt").await.unwrap());
    }
}
