use super::*;
use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use shared::domain::{Bounds, Coordinate};
use tokio::net::TcpListener;

async fn handle_points(Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    let count = payload["points"].as_array().map_or(0, Vec::len);
    if count == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "No points provided." })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": format!("Received {count} points."),
            "result": {
                "bounds": {
                    "north": 40.7128,
                    "south": 34.0522,
                    "east": -74.006,
                    "west": -118.2437
                },
                "centroid": { "lat": 37.3825, "lng": -96.12485 }
            }
        })),
    )
}

async fn spawn_service() -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new().route("/points", post(handle_points));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn settings_for(api_base_url: String) -> ClientSettings {
    ClientSettings {
        api_base_url,
        ..ClientSettings::default()
    }
}

#[tokio::test]
async fn submission_round_trip_updates_map_view() {
    let server_url = spawn_service().await.expect("spawn service");
    let workflow = connect(&settings_for(server_url)).expect("connect");

    workflow.set_input(
        r#"{"points":[{"lat":40.7128,"lng":-74.006},{"lat":34.0522,"lng":-118.2437}]}"#,
    );
    let status = workflow.submit_input().await;

    assert_eq!(
        status,
        SubmissionStatus::Succeeded("Points submitted successfully!".into())
    );
    let view = MapView::from_state(&workflow.store().snapshot());
    let expected = Bounds([[34.0522, -118.2437], [40.7128, -74.006]]);
    assert_eq!(view.viewport, Viewport::FitBounds { bounds: expected });
    assert_eq!(view.markers.len(), 2);
    assert_eq!(view.rectangle, Some(expected));
    assert_eq!(
        view.centroid.map(|m| m.position),
        Some(Coordinate::new(37.3825, -96.12485))
    );
}

#[tokio::test]
async fn server_rejection_surfaces_in_status() {
    let server_url = spawn_service().await.expect("spawn service");
    let workflow = connect(&settings_for(server_url)).expect("connect");

    let status = workflow.submit("[]").await;

    assert_eq!(
        status,
        SubmissionStatus::Failed("Server error: 400 - No points provided.".into())
    );
    assert!(workflow.store().snapshot().is_empty());
}

#[test]
fn connect_rejects_invalid_base_url() {
    let err = connect(&settings_for("localhost:5000/api".into()))
        .err()
        .expect("must fail");
    assert!(err.to_string().contains("invalid api base url"));
}
