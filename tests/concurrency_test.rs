//! Concurrent operations against shared registry and log state.

mod common;

use common::{gated_service, instant_service};
use edusim::domain::models::{OperationKind, ServiceStatus};
use edusim::services::operation_catalog;
use edusim::AiService;
use futures::future::join_all;
use std::collections::HashSet;

#[tokio::test(start_paused = true)]
async fn test_concurrent_calls_on_same_key() {
    let service = AiService::builder().build();
    let key = operation_catalog::descriptor(OperationKind::ScreenCandidates).service_key;

    let calls = (0..8).map(|i| {
        let service = service.clone();
        async move { service.screen_candidates(10 + i).await }
    });
    let results = join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    let logs = service.logs().await;
    assert_eq!(logs.len(), 8);
    assert!(logs.iter().all(|e| e.module == "HR_AI"));
    assert_eq!(service.registry().get(key).await.unwrap(), ServiceStatus::Idle);
    assert_eq!(service.stats().await.total_requests, 8);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_calls_across_threads() {
    let service = instant_service();

    let handles: Vec<_> = (0..60)
        .map(|i| {
            let service = service.clone();
            let kind = OperationKind::ALL[i % OperationKind::ALL.len()];
            tokio::spawn(async move { service.run(kind, &Default::default()).await })
        })
        .collect();

    for handle in join_all(handles).await {
        handle.unwrap().unwrap();
    }

    let logs = service.logs().await;
    assert_eq!(logs.len(), 60);

    let ids: HashSet<u64> = logs.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 60, "log ids must be unique");
    assert!(logs.windows(2).all(|w| w[0].id > w[1].id), "newest first");

    assert!(service
        .service_statuses()
        .await
        .iter()
        .filter(|e| !operation_catalog::ALWAYS_ON_SERVICES.contains(&e.key.as_str()))
        .all(|e| e.status == ServiceStatus::Idle));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_respect_capacity() {
    let service = AiService::builder().instant().log_capacity(25).build();

    let calls = (0..100).map(|_| {
        let service = service.clone();
        async move { service.analyze_attendance().await }
    });
    join_all(calls).await;

    let logs = service.logs().await;
    assert_eq!(logs.len(), 25);
    assert_eq!(logs[0].id, 100);
    assert_eq!(service.stats().await.total_requests, 100);
}

#[tokio::test]
async fn test_key_stays_processing_while_any_call_in_flight_starts() {
    let (service, gate) = gated_service();
    let key = operation_catalog::descriptor(OperationKind::AnalyzeGrades).service_key;

    let first = {
        let service = service.clone();
        tokio::spawn(async move { service.analyze_grades("Mathematics").await })
    };
    let second = {
        let service = service.clone();
        tokio::spawn(async move { service.analyze_grades("Physics").await })
    };

    gate.wait_entered().await;
    gate.wait_entered().await;
    assert_eq!(service.registry().get(key).await.unwrap(), ServiceStatus::Processing);

    gate.open(2);
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    assert_eq!(service.registry().get(key).await.unwrap(), ServiceStatus::Idle);
    assert_eq!(service.logs().await.len(), 2);
}
