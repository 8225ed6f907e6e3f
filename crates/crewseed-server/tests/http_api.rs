use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use tower::ServiceExt;

use crewseed_core::{Shift, Skill, Superior, Technician};
use crewseed_server::{AppState, router};
use crewseed_store::{RecordStore, SUPERIORS_PARTITION, TECHNICS_PARTITION};

fn seeded_state() -> (TempDir, AppState) {
    let dir = TempDir::new().expect("temp dir");
    let store = RecordStore::open(&dir.path().join("crewseed.redb")).expect("open store");

    let superiors = vec![Superior {
        superior_id: 42,
        name: "Ada Lovelace".to_string(),
        phone: "555-0100".to_string(),
    }];
    let technicians = vec![Technician {
        technician_id: 500,
        name: "Grace Hopper".to_string(),
        superior_id: 42,
        shift: Shift {
            date: Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap(),
            capacity: "AD".to_string(),
            skills: [
                Skill {
                    code: "yJg".to_string(),
                },
                Skill {
                    code: "DBa".to_string(),
                },
                Skill {
                    code: "bec".to_string(),
                },
            ],
            route_area: "990res".to_string(),
        },
    }];
    store.save_all(&superiors, SUPERIORS_PARTITION).expect("save superiors");
    store.save_all(&technicians, TECHNICS_PARTITION).expect("save technicians");

    let state = AppState {
        store: Arc::new(store),
        read_timeout: Duration::from_secs(5),
    };
    (dir, state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn superiors_endpoint_returns_persisted_records() {
    let (_dir, state) = seeded_state();
    let response = router(state)
        .oneshot(Request::builder().uri("/superiors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["SuperiorID"], 42);
    assert_eq!(body[0]["Name"], "Ada Lovelace");
}

#[tokio::test]
async fn technicians_endpoint_serves_both_route_names() {
    let (_dir, state) = seeded_state();
    for uri in ["/technicians", "/technics"] {
        let response = router(state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body[0]["TechnicID"], 500);
        assert_eq!(body[0]["SuperiorID"], 42);
        assert_eq!(body[0]["Shift"]["Skill"].as_array().unwrap().len(), 3);
    }
}

#[tokio::test]
async fn missing_partition_maps_to_server_error() {
    let dir = TempDir::new().expect("temp dir");
    let store = RecordStore::open(&dir.path().join("empty.redb")).expect("open store");
    let state = AppState {
        store: Arc::new(store),
        read_timeout: Duration::from_secs(5),
    };
    let response = router(state)
        .oneshot(Request::builder().uri("/superiors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("partition not found"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let (_dir, state) = seeded_state();
    let response = router(state)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
