/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App, Error,
};
use driver_registry_service::{
    domain::api,
    environment::{AppConfig, AppState},
    tools::{
        error::AppError,
        logger::{LogLevel, LoggerConfig},
    },
};
use serde_json::{json, Value};

fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        workers: 1,
        logger_cfg: LoggerConfig {
            level: LogLevel::OFF,
            log_to_file: false,
        },
        request_timeout: 9000,
    }
}

async fn test_app() -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(test_config())))
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _| AppError::UnprocessibleRequest(err.to_string()).into()),
            )
            .configure(api::handler),
    )
    .await
}

async fn update_position(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    driver_id: &str,
    x: i64,
    y: i64,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/ui/driver/location")
        .set_json(json!({"driverId": driver_id, "position": {"x": x, "y": y}}))
        .to_request();
    test::call_service(app, req).await
}

async fn stop_tracking(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    driver_id: &str,
) -> ServiceResponse {
    let req = test::TestRequest::delete()
        .uri(&format!("/ui/driver/location/{driver_id}"))
        .to_request();
    test::call_service(app, req).await
}

async fn nearest_driver(
    app: &impl Service<Request, Response = ServiceResponse, Error = Error>,
    x: i64,
    y: i64,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/internal/drivers/nearest")
        .set_json(json!({"position": {"x": x, "y": y}}))
        .to_request();
    test::call_service(app, req).await
}

#[tokio::test]
async fn create_driver_success() {
    let app = test_app().await;

    let resp = update_position(&app, "d1", 0, 0).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "Driver created");
}

#[tokio::test]
async fn update_driver_success() {
    let app = test_app().await;

    update_position(&app, "d2", 1, 1).await;
    let resp = update_position(&app, "d2", 2, 2).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "Driver updated");
}

#[tokio::test]
async fn update_driver_empty_id_is_rejected() {
    let app = test_app().await;

    let resp = update_position(&app, "", 1, 1).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorCode"], "INVALID_REQUEST");
}

#[tokio::test]
async fn update_driver_malformed_position_is_unprocessible() {
    let app = test_app().await;

    let req = test::TestRequest::post()
        .uri("/ui/driver/location")
        .set_json(json!({"driverId": "d4", "position": {"x": "a", "y": "b"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_driver_missing_position_is_unprocessible() {
    let app = test_app().await;

    let req = test::TestRequest::post()
        .uri("/ui/driver/location")
        .set_json(json!({"driverId": "d3"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_body_is_unprocessible() {
    let app = test_app().await;

    let req = test::TestRequest::post()
        .uri("/ui/driver/location")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn stop_tracking_existing_driver() {
    let app = test_app().await;

    update_position(&app, "d5", 5, 5).await;
    let resp = stop_tracking(&app, "d5").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "Driver deleted");
}

#[tokio::test]
async fn stop_tracking_unknown_driver_is_not_found() {
    let app = test_app().await;

    let resp = stop_tracking(&app, "nonexistent").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errorCode"], "DRIVER_NOT_FOUND");
}

#[tokio::test]
async fn repeated_stop_tracking_fails_the_second_time() {
    let app = test_app().await;

    update_position(&app, "drepeat", 1, 1).await;

    let first = stop_tracking(&app, "drepeat").await;
    let second = stop_tracking(&app, "drepeat").await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn nearest_driver_on_empty_registry_is_driver_less() {
    let app = test_app().await;

    let resp = nearest_driver(&app, 0, 0).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["driver"], Value::Null);
}

#[tokio::test]
async fn nearest_driver_picks_the_closest() {
    let app = test_app().await;

    update_position(&app, "dc1", 1, 1).await;
    update_position(&app, "dc2", 10, 10).await;

    let resp = nearest_driver(&app, 2, 2).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["driver"]["driverId"], "dc1");
    let distance = body["driver"]["distance"].as_f64().unwrap();
    assert!((distance - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[tokio::test]
async fn nearest_driver_tie_break_is_deterministic() {
    let app = test_app().await;

    // Both drivers sit symmetric around the query point.
    update_position(&app, "tie-b", 0, 2).await;
    update_position(&app, "tie-a", 2, 0).await;

    for _ in 0..10 {
        let resp = nearest_driver(&app, 1, 1).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["driver"]["driverId"], "tie-a");
    }
}

#[tokio::test]
async fn nearest_driver_far_query_succeeds() {
    let app = test_app().await;

    update_position(&app, "dc3", 0, 0).await;

    let resp = nearest_driver(&app, 10000, 10000).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn history_grows_per_update_and_dies_with_the_driver() {
    let app = test_app().await;
    let driver_id = "dmult";

    for i in 0..5i64 {
        let resp = update_position(&app, driver_id, i, i).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/internal/driver/{driver_id}/history"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4]["position"], json!({"x": 4, "y": 4}));

    stop_tracking(&app, driver_id).await;

    let req = test::TestRequest::get()
        .uri(&format!("/internal/driver/{driver_id}/history"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn create_driver_with_special_id_chars() {
    let app = test_app().await;

    let resp = update_position(&app, "driver-abc_123.x", 1, 1).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_reports_service_up() {
    let app = test_app().await;

    let req = test::TestRequest::get().uri("/healthcheck").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["result"], "Service Is Up");
}

#[tokio::test]
async fn concurrent_create_then_delete_storm() {
    let app = test_app().await;

    let ids = (0..10).map(|i| format!("concur{i}")).collect::<Vec<String>>();

    let creates = futures::future::join_all(
        ids.iter()
            .enumerate()
            .map(|(i, id)| update_position(&app, id, i as i64, i as i64)),
    )
    .await;
    for resp in creates {
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // Every driver landed: each one has exactly one history entry.
    for i in 0..10 {
        let req = test::TestRequest::get()
            .uri(&format!("/internal/driver/concur{i}/history"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    }

    let deletes =
        futures::future::join_all(ids.iter().map(|id| stop_tracking(&app, id))).await;
    for resp in deletes {
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = nearest_driver(&app, 0, 0).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["driver"], Value::Null);
}
