mod common;

use std::collections::BTreeMap;
use std::sync::Arc;
use storage_connect::config::structs::connection_config::ConnectionConfig;
use storage_connect::filesystem::traits::filesystem::Filesystem;
use storage_connect::manager::errors::ManagerError;
use storage_connect::manager::structs::connection_manager::ConnectionManager;

fn create_manager() -> (common::TestEnvironment, ConnectionManager) {
    let env = common::create_test_environment();
    let mut configurations = BTreeMap::new();
    configurations.insert("scratch".to_string(), ConnectionConfig::new().with("driver", "memory"));
    configurations.insert("void".to_string(), ConnectionConfig::new().with("driver", "null"));
    configurations.insert("typo".to_string(), ConnectionConfig::new().with("driver", "memroy"));
    let manager = ConnectionManager::new(env.factory(), "scratch", configurations);
    (env, manager)
}

#[tokio::test]
async fn test_connection_is_reused() {
    let (_env, manager) = create_manager();

    let first = manager.connection(Some("scratch")).await.unwrap();
    let second = manager.connection(Some("scratch")).await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(manager.opened(), vec!["scratch".to_string()]);
}

#[tokio::test]
async fn test_default_connection() {
    let (_env, manager) = create_manager();
    assert_eq!(manager.default_connection(), "scratch");

    let default = manager.connection(None).await.unwrap();
    assert_eq!(default.name(), "memory");

    manager.set_default_connection("void");
    let default = manager.connection(None).await.unwrap();
    assert_eq!(default.name(), "null");
    assert_eq!(manager.opened(), vec!["scratch".to_string(), "void".to_string()]);
}

#[tokio::test]
async fn test_reconnect_opens_fresh_handle() {
    let (_env, manager) = create_manager();
    let first = manager.connection(Some("scratch")).await.unwrap();
    first.write("notes.txt", b"draft").await.unwrap();

    let second = manager.reconnect(Some("scratch")).await.unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!second.has("notes.txt").await.unwrap());
}

#[tokio::test]
async fn test_disconnect() {
    let (_env, manager) = create_manager();
    manager.connection(Some("void")).await.unwrap();

    assert!(manager.disconnect(Some("void")));
    assert!(!manager.disconnect(Some("void")));
    assert!(manager.opened().is_empty());
}

#[tokio::test]
async fn test_unknown_connection() {
    let (_env, manager) = create_manager();
    let result = manager.connection(Some("archive")).await;
    assert!(matches!(result, Err(ManagerError::UnknownConnection(name)) if name == "archive"));
    assert!(manager.opened().is_empty());
}

#[tokio::test]
async fn test_failed_connection_is_not_kept() {
    let (_env, manager) = create_manager();
    let result = manager.connection(Some("typo")).await;
    assert!(matches!(result, Err(ManagerError::Factory(_))));
    assert!(manager.opened().is_empty());
}

#[tokio::test]
async fn test_concurrent_connections_share_one_handle() {
    let (_env, manager) = create_manager();
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..8).map(|_| {
        let manager = manager.clone();
        tokio::spawn(async move { manager.connection(Some("scratch")).await.unwrap() })
    }).collect();
    let mut connections = Vec::new();
    for handle in handles {
        connections.push(handle.await.unwrap());
    }

    let kept = manager.connection(Some("scratch")).await.unwrap();
    assert!(connections.iter().all(|connection| Arc::ptr_eq(connection, &kept)));
}
