//! End-to-end aggregation against mock supplier endpoints.

#![allow(clippy::unwrap_used)]

use ride_aggregator::application::ApplicationError;
use ride_aggregator::application::services::RideAggregationEngine;
use ride_aggregator::config::Settings;
use ride_aggregator::domain::entities::RideQuery;
use ride_aggregator::domain::value_objects::CarCategory;
use serde_json::{Value, json};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PICKUP: &str = "51.470020,-0.454295";
const DROPOFF: &str = "51.00000,1.0000";

fn body(supplier: &str, options: &[(&str, u64)]) -> Value {
    let options: Vec<_> = options
        .iter()
        .map(|(car_type, price)| json!({"car_type": car_type, "price": price}))
        .collect();
    json!({
        "supplier_id": supplier.to_uppercase(),
        "pickup": PICKUP,
        "dropoff": DROPOFF,
        "options": options,
    })
}

async fn mount(server: &MockServer, supplier: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{supplier}")))
        .and(query_param("pickup", PICKUP))
        .and(query_param("dropoff", DROPOFF))
        .respond_with(template)
        .mount(server)
        .await;
}

fn engine(server: &MockServer, timeout_ms: u64) -> RideAggregationEngine {
    RideAggregationEngine::from_settings(&Settings {
        base_url: server.uri(),
        timeout_ms,
        ..Settings::default()
    })
    .unwrap()
}

fn query(passengers: Option<u32>) -> RideQuery {
    RideQuery::new(PICKUP, DROPOFF, passengers).unwrap()
}

fn lines<T: ToString>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn single_supplier_single_option() {
    let server = MockServer::start().await;
    mount(
        &server,
        "dave",
        ResponseTemplate::new(200).set_body_json(body("dave", &[("EXECUTIVE", 279_000)])),
    )
    .await;

    let options = engine(&server, 2000)
        .supplier_options("dave", &query(None))
        .await
        .unwrap();
    assert_eq!(lines(&options), vec!["EXECUTIVE - 279000"]);
}

#[tokio::test]
async fn single_supplier_invalid_payload_is_empty() {
    let server = MockServer::start().await;
    mount(
        &server,
        "eric",
        ResponseTemplate::new(200).set_body_string("Invalid Payload"),
    )
    .await;

    let options = engine(&server, 2000)
        .supplier_options("eric", &query(None))
        .await
        .unwrap();
    assert!(options.is_empty());
}

#[tokio::test]
async fn cheapest_minibus_across_three_suppliers() {
    let server = MockServer::start().await;
    mount(
        &server,
        "dave",
        ResponseTemplate::new(200).set_body_json(body("dave", &[("MINIBUS", 665_975)])),
    )
    .await;
    mount(
        &server,
        "eric",
        ResponseTemplate::new(200).set_body_json(body("eric", &[("MINIBUS", 103_801)])),
    )
    .await;
    mount(
        &server,
        "jeff",
        ResponseTemplate::new(200).set_body_json(body("jeff", &[("MINIBUS", 113_801)])),
    )
    .await;

    let options = engine(&server, 2000).cheapest_per_category(&query(None)).await;
    assert_eq!(lines(&options), vec!["MINIBUS - eric - 103801"]);
}

#[tokio::test]
async fn too_many_passengers_yields_nothing() {
    let server = MockServer::start().await;
    mount(
        &server,
        "dave",
        ResponseTemplate::new(200).set_body_json(body("dave", &[("PEOPLE_CARRIER", 616_051)])),
    )
    .await;
    mount(&server, "eric", ResponseTemplate::new(500)).await;
    mount(&server, "jeff", ResponseTemplate::new(500)).await;

    let options = engine(&server, 2000).cheapest_per_category(&query(Some(7))).await;
    assert!(options.is_empty());
}

#[tokio::test]
async fn mixed_failures_keep_healthy_suppliers() {
    let server = MockServer::start().await;
    mount(&server, "dave", ResponseTemplate::new(400)).await;
    mount(
        &server,
        "eric",
        ResponseTemplate::new(200)
            .set_body_json(body("eric", &[("LUXURY", 235_868), ("STANDARD", 150_000)]))
            .set_delay(Duration::from_secs(5)),
    )
    .await;
    mount(
        &server,
        "jeff",
        ResponseTemplate::new(200)
            .set_body_json(body("jeff", &[("STANDARD", 120_000), ("HOVERCRAFT", 1)])),
    )
    .await;

    let started = Instant::now();
    let options = engine(&server, 300).cheapest_per_category(&query(Some(2))).await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(lines(&options), vec!["STANDARD - jeff - 120000"]);
}

#[tokio::test]
async fn cheapest_per_category_across_full_catalogues() {
    let server = MockServer::start().await;
    mount(
        &server,
        "dave",
        ResponseTemplate::new(200).set_body_json(body(
            "dave",
            &[
                ("STANDARD", 392_299),
                ("LUXURY", 810_777),
                ("PEOPLE_CARRIER", 616_051),
                ("MINIBUS", 665_975),
            ],
        )),
    )
    .await;
    mount(
        &server,
        "eric",
        ResponseTemplate::new(200).set_body_json(body(
            "eric",
            &[
                ("EXECUTIVE", 272_905),
                ("LUXURY", 235_868),
                ("PEOPLE_CARRIER", 387_596),
                ("LUXURY_PEOPLE_CARRIER", 695_553),
                ("MINIBUS", 103_801),
            ],
        )),
    )
    .await;
    mount(
        &server,
        "jeff",
        ResponseTemplate::new(200).set_body_json(body("jeff", &[("MINIBUS", 113_801)])),
    )
    .await;

    let options = engine(&server, 2000).cheapest_per_category(&query(None)).await;
    assert_eq!(
        lines(&options),
        vec![
            "LUXURY_PEOPLE_CARRIER - eric - 695553",
            "STANDARD - dave - 392299",
            "PEOPLE_CARRIER - eric - 387596",
            "EXECUTIVE - eric - 272905",
            "LUXURY - eric - 235868",
            "MINIBUS - eric - 103801",
        ]
    );

    let seated: Vec<_> = engine(&server, 2000)
        .cheapest_per_category(&query(Some(5)))
        .await
        .iter()
        .map(|o| o.category())
        .collect();
    assert_eq!(
        seated,
        vec![
            CarCategory::LuxuryPeopleCarrier,
            CarCategory::PeopleCarrier,
            CarCategory::Minibus,
        ]
    );
}

#[tokio::test]
async fn every_supplier_down_is_empty_not_an_error() {
    let server = MockServer::start().await;
    for supplier in ["dave", "eric", "jeff"] {
        mount(&server, supplier, ResponseTemplate::new(500)).await;
    }

    let options = engine(&server, 2000).cheapest_per_category(&query(None)).await;
    assert!(options.is_empty());
}

#[tokio::test]
async fn unknown_supplier_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = engine(&server, 2000)
        .supplier_options("bob", &query(None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::UnknownSupplier(_)));
}

#[test]
fn malformed_coordinates_are_rejected_before_any_request() {
    let err = RideQuery::new("not-a-coordinate", DROPOFF, None).unwrap_err();
    assert!(err.to_string().contains("pickup"));

    let err = RideQuery::new(PICKUP, "51.0;1.0", None).unwrap_err();
    assert!(err.to_string().contains("dropoff"));
}

#[tokio::test]
async fn json_output_tags_supplier_and_car_type() {
    let server = MockServer::start().await;
    mount(
        &server,
        "jeff",
        ResponseTemplate::new(200).set_body_json(body("jeff", &[("MINIBUS", 113_801)])),
    )
    .await;
    mount(&server, "dave", ResponseTemplate::new(500)).await;
    mount(&server, "eric", ResponseTemplate::new(500)).await;

    let options = engine(&server, 2000).cheapest_per_category(&query(None)).await;
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        json!([{"supplier": "jeff", "car_type": "MINIBUS", "price": 113801}])
    );
}
