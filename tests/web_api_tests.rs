use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use sssp_suite::graph::Arc;
use sssp_suite::web::api::{
    compare_algorithms, create_graph, generate_graph, get_graph, get_session, health_check,
    list_sessions, run_algorithm, run_apsp, AppState,
};
use sssp_suite::web::models::{
    AlgorithmRequest, ApspRequest, ApspVariant, CompareRequest, CreateGraphRequest,
    GraphGenerationRequest,
};
use sssp_suite::web::ServerConfig;

fn diamond_request(extra: Option<Arc<i64>>) -> CreateGraphRequest {
    let mut arcs = vec![
        Arc::new(1, 2, 4),
        Arc::new(1, 3, 1),
        Arc::new(3, 2, 1),
        Arc::new(2, 4, 1),
        Arc::new(3, 4, 5),
    ];
    arcs.extend(extra);
    CreateGraphRequest {
        node_count: 4,
        arcs,
    }
}

async fn new_session(state: &AppState, request: CreateGraphRequest) -> Uuid {
    let Json(session) = create_graph(State(state.clone()), Json(request)).await.unwrap();
    session.id
}

#[tokio::test]
async fn test_create_and_run() {
    let state = AppState::new(ServerConfig::default());
    let id = new_session(&state, diamond_request(None)).await;

    let Json(summary) = get_graph(State(state.clone()), Path(id)).await.unwrap();
    assert_eq!(summary.node_count, 4);
    assert_eq!(summary.arc_count, 5);
    assert!(!summary.has_negative_arcs);

    let request = AlgorithmRequest {
        algorithm: "dial".to_string(),
        source: 1,
    };
    let Json(response) = run_algorithm(State(state.clone()), Path(id), Json(request))
        .await
        .unwrap();
    assert_eq!(response.algorithm, "dial");
    assert_eq!(response.reachable, 4);
    assert_eq!(response.distances.get(&4), Some(&3));
    assert_eq!(response.predecessors.get(&4), Some(&2));

    let Json(session) = get_session(State(state.clone()), Path(id)).await.unwrap();
    let last = session.last_result.unwrap();
    assert_eq!(last.execution_id, response.execution_id);
}

#[tokio::test]
async fn test_invalid_graph_is_bad_request() {
    let state = AppState::new(ServerConfig::default());
    let request = CreateGraphRequest {
        node_count: 2,
        arcs: vec![Arc::new(1, 3, 1)],
    };
    let (status, Json(body)) = create_graph(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "invalid_graph");
}

#[tokio::test]
async fn test_run_errors_map_to_statuses() {
    let state = AppState::new(ServerConfig::default());
    let id = new_session(&state, diamond_request(Some(Arc::new(2, 4, -10)))).await;

    let run = |algorithm: &str, source: usize| {
        run_algorithm(
            State(state.clone()),
            Path(id),
            Json(AlgorithmRequest {
                algorithm: algorithm.to_string(),
                source,
            }),
        )
    };

    let (status, _) = run("dijkstra", 1).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, Json(body)) = run("astar", 1).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "invalid_algorithm");

    let (status, _) = run("spfa", 9).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let Json(response) = run("spfa", 1).await.unwrap();
    assert_eq!(response.distances.get(&4), Some(&-8));
}

#[tokio::test]
async fn test_huge_distance_is_rejected_not_fatal() {
    let state = AppState::new(ServerConfig::default());
    let request = CreateGraphRequest {
        node_count: 2,
        arcs: vec![Arc::new(1, 2, 1i64 << 42)],
    };
    let id = new_session(&state, request).await;

    let run = |algorithm: &str| {
        run_algorithm(
            State(state.clone()),
            Path(id),
            Json(AlgorithmRequest {
                algorithm: algorithm.to_string(),
                source: 1,
            }),
        )
    };

    let (status, Json(body)) = run("dial").await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "bucket_limit");

    let Json(response) = run("dijkstra").await.unwrap();
    assert_eq!(response.distances.get(&2), Some(&(1i64 << 42)));
}

#[tokio::test]
async fn test_compare_reports_failures_separately() {
    let state = AppState::new(ServerConfig::default());
    let id = new_session(&state, diamond_request(Some(Arc::new(2, 4, -10)))).await;

    let request = CompareRequest {
        source: 1,
        algorithms: Vec::new(),
    };
    let Json(response) = compare_algorithms(State(state), Path(id), Json(request)).await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.errors.len(), 2);
    assert!(response.errors.contains_key("dijkstra"));
    assert!(response.errors.contains_key("dial"));
    assert!(response.agree);
}

#[tokio::test]
async fn test_apsp_endpoint_and_limit() {
    let config = ServerConfig {
        max_apsp_nodes: 10,
        ..ServerConfig::default()
    };
    let state = AppState::new(config);
    let id = new_session(&state, diamond_request(None)).await;

    let Json(response) = run_apsp(
        State(state.clone()),
        Path(id),
        Json(ApspRequest {
            variant: ApspVariant::Graphical,
        }),
    )
    .await
    .unwrap();
    assert_eq!(response.node_count, 4);
    assert_eq!(response.distances[0][3], Some(3));
    assert_eq!(response.distances[3][0], None);

    let generated = GraphGenerationRequest {
        graph_type: "random".to_string(),
        node_count: 50,
        arcs_per_node: 3,
        max_length: 20,
        min_length: 1,
        grid_dimensions: None,
        seed: Some(1),
    };
    let Json(session) = generate_graph(State(state.clone()), Json(generated)).await.unwrap();
    let (status, Json(body)) = run_apsp(
        State(state),
        Path(session.id),
        Json(ApspRequest {
            variant: ApspVariant::Algebraic,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body.error, "graph_too_large");
}

#[tokio::test]
async fn test_generate_graph_types() {
    let state = AppState::new(ServerConfig::default());

    for graph_type in ["random", "grid", "dag"] {
        let request = GraphGenerationRequest {
            graph_type: graph_type.to_string(),
            node_count: 36,
            arcs_per_node: 2,
            max_length: 10,
            min_length: -5,
            grid_dimensions: None,
            seed: Some(3),
        };
        let Json(session) = generate_graph(State(state.clone()), Json(request)).await.unwrap();
        assert_eq!(session.summary.node_count, 36, "{}", graph_type);
    }

    let request = GraphGenerationRequest {
        graph_type: "hypercube".to_string(),
        node_count: 8,
        arcs_per_node: 2,
        max_length: 10,
        min_length: 1,
        grid_dimensions: None,
        seed: None,
    };
    let (status, _) = generate_graph(State(state.clone()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let Json(ids) = list_sessions(State(state)).await.unwrap();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_unknown_session() {
    let state = AppState::new(ServerConfig::default());
    let (status, _) = get_graph(State(state.clone()), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = AlgorithmRequest {
        algorithm: "spfa".to_string(),
        source: 1,
    };
    let (status, _) = run_algorithm(State(state), Path(Uuid::new_v4()), Json(request))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oldest_session_evicted() {
    let config = ServerConfig {
        max_sessions: 2,
        ..ServerConfig::default()
    };
    let state = AppState::new(config);
    let first = new_session(&state, diamond_request(None)).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = new_session(&state, diamond_request(None)).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let third = new_session(&state, diamond_request(None)).await;

    let Json(ids) = list_sessions(State(state.clone())).await.unwrap();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&first));
    assert!(ids.contains(&second));
    assert!(ids.contains(&third));
}

#[tokio::test]
async fn test_health_check() {
    let Json(body) = health_check().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["algorithms"].as_array().map(Vec::len), Some(4));
}
