mod common;

use common::{parse_body, TestApp};
use greenhouse_backend::api::contract::{self, build_path};
use serde_json::{json, Value};

/// A valid sample input for each contract operation, against the
/// seeded data set.
fn sample_input(name: &str) -> Option<Value> {
    match name {
        "login" => Some(json!({"username": "user", "password": "password"})),
        "updateProfile" => Some(json!({"organization": "Contract Org"})),
        "toggleTask" => Some(json!({"isCompleted": true})),
        "sendChatMessage" => Some(json!({"content": "Hello Olivia"})),
        _ => None,
    }
}

/// Drives every declared route against the live router and checks the
/// response body against the shape the contract declares for the
/// returned status. This is the drift check: a route edited in only
/// one place fails here.
#[tokio::test]
async fn every_contract_route_answers_with_its_declared_shape() {
    let app = TestApp::new().await;

    for route in contract::ROUTES {
        let uri = build_path(route.path, &[("id", "1")]);
        let input = sample_input(route.name);

        let response = match input {
            Some(body) => {
                // Request bodies must satisfy the shape the contract
                // declares for the operation.
                let input_shape = route.input.unwrap_or_else(|| {
                    panic!("route {} takes a body but declares no input shape", route.name)
                });
                input_shape
                    .validate(&body)
                    .unwrap_or_else(|e| panic!("route {} input mismatch: {:?}", route.name, e));
                app.send_json(route.method.as_str(), &uri, body).await
            }
            None => app.get(&uri).await,
        };

        let status = response.status().as_u16();
        let shape = route
            .expected_shape(status)
            .unwrap_or_else(|| panic!("route {} answered undeclared status {}", route.name, status));

        let body = parse_body(response).await;
        shape
            .validate(&body)
            .unwrap_or_else(|e| panic!("route {} body mismatch: {:?}", route.name, e));
    }
}

#[test]
fn declared_input_shapes_accept_well_formed_payloads_and_reject_bad_ones() {
    contract::LOGIN_INPUT
        .validate(&json!({"username": "user", "password": "password"}))
        .unwrap();
    assert!(contract::LOGIN_INPUT.validate(&json!({"username": "user"})).is_err());

    contract::UPDATE_PROFILE_INPUT.validate(&json!({"organization": "New Org"})).unwrap();
    contract::UPDATE_PROFILE_INPUT.validate(&json!({})).unwrap();

    contract::TOGGLE_TASK_INPUT.validate(&json!({"isCompleted": true})).unwrap();
    assert!(contract::TOGGLE_TASK_INPUT.validate(&json!({"isCompleted": "yes"})).is_err());

    // listTrends carries its optional input in the query string.
    let query_shape = contract::LIST_TRENDS.input.unwrap();
    query_shape.validate(&json!({"search": "vertical"})).unwrap();
    query_shape.validate(&json!({})).unwrap();
    assert!(query_shape.validate(&json!({"search": 7})).is_err());
}

#[tokio::test]
async fn declared_error_statuses_also_match_their_shapes() {
    let app = TestApp::new().await;

    // 404 paths.
    for (route, uri) in [
        (&contract::GET_USER, build_path(contract::GET_USER.path, &[("id", "99")])),
        (&contract::GET_PLANT, build_path(contract::GET_PLANT.path, &[("id", "99")])),
    ] {
        let response = app.get(&uri).await;
        assert_eq!(response.status().as_u16(), 404);
        let shape = route.expected_shape(404).unwrap();
        shape.validate(&parse_body(response).await).unwrap();
    }

    // 401 on a bad password.
    let response = app
        .send_json(
            contract::LOGIN.method.as_str(),
            contract::LOGIN.path,
            json!({"username": "user", "password": "wrong"}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
    let shape = contract::LOGIN.expected_shape(401).unwrap();
    shape.validate(&parse_body(response).await).unwrap();
}
