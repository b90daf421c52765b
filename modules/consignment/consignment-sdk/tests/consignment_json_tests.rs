#![allow(clippy::unwrap_used, clippy::expect_used)]

//! JSON shape of the wire types, as loaded by the CLI from disk.

use consignment_sdk::{Consignment, Container};

#[test]
fn minimal_document_parses_with_defaults() {
    let c: Consignment = serde_json::from_str(
        r#"{"description":"box of widgets","weight":100,"destination":"Nairobi"}"#,
    )
    .unwrap();

    assert_eq!(c.description, "box of widgets");
    assert_eq!(c.weight, 100);
    assert_eq!(c.destination, "Nairobi");
    assert!(c.id.is_empty());
    assert!(c.vessel_id.is_empty());
    assert!(c.containers.is_empty());
}

#[test]
fn full_document_parses_containers() {
    let c: Consignment = serde_json::from_str(
        r#"{
            "description": "This is a test consignment",
            "weight": 550,
            "containers": [
                {"customer_id": "cust001", "user_id": "user001", "origin": "Manchester, United Kingdom"}
            ],
            "vessel_id": "vessel001"
        }"#,
    )
    .unwrap();

    assert_eq!(c.vessel_id, "vessel001");
    assert_eq!(
        c.containers,
        vec![Container {
            id: String::new(),
            customer_id: "cust001".to_owned(),
            origin: "Manchester, United Kingdom".to_owned(),
            user_id: "user001".to_owned(),
        }]
    );
}

#[test]
fn wrong_field_type_is_rejected() {
    let result: Result<Consignment, _> =
        serde_json::from_str(r#"{"description":"x","weight":"heavy"}"#);
    assert!(result.is_err());
}
