//! Integration tests for the directory HTTP client against a mock server

use pinpad_client::{ClientConfig, ClientError, DirectoryApi, PinChangeRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn employee_json(emp_id: i64, first_name: &str, level: i64, pin: &str) -> serde_json::Value {
    json!({
        "empId": emp_id,
        "empFirstName": first_name,
        "empMiddleName": "M",
        "empLastName": "Doe",
        "empEmail": format!("{}@example.com", first_name.to_lowercase()),
        "pin": pin,
        "role": {
            "roleId": 1,
            "roleName": "Staff",
            "level": level,
            "createDate": "2024-01-01T00:00:00",
            "createBy": 1,
            "updateDate": "2024-01-01T00:00:00",
            "updateBy": 1,
            "isActive": true
        },
        "createDate": "2024-01-01T00:00:00",
        "createBy": 1,
        "updateDate": "2024-01-01T00:00:00",
        "updateBy": 1,
        "isActive": true
    })
}

fn request(emp_id: i64, emp_pin: &str) -> PinChangeRequest {
    PinChangeRequest {
        emp_id,
        emp_pin: emp_pin.to_string(),
        manager_id: 10007,
        manager_pin: "55555".to_string(),
    }
}

fn client_for(server: &MockServer) -> pinpad_client::HttpDirectoryClient {
    ClientConfig::new(server.uri()).build_http_client()
}

#[tokio::test]
async fn fetches_employee_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employees/10021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(employee_json(10021, "Dana", 2, "1234")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let employee = client.employee(10021).await.unwrap();

    assert_eq!(employee.emp_id, 10021);
    assert_eq!(employee.emp_first_name, "Dana");
    assert_eq!(employee.role.level, 2);
}

#[tokio::test]
async fn lists_employees_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            employee_json(10007, "Avery", 4, "55555"),
            employee_json(10021, "Dana", 2, "1234"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let employees = client.employees().await.unwrap();

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].emp_id, 10007);
    assert_eq!(employees[1].emp_id, 10021);
}

#[tokio::test]
async fn missing_employee_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employees/99999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such employee"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.employee(99999).await.unwrap_err();

    match err {
        ClientError::NotFound(message) => assert_eq!(message, "no such employee"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_pin_sends_wire_body_and_parses_json_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/employees/update-pin"))
        .and(body_json(json!({
            "empId": 10021,
            "empPin": "4321",
            "managerId": 10007,
            "managerPin": "55555"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "PIN updated successfully"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.update_pin(&request(10021, "4321")).await.unwrap();

    assert_eq!(response.message, "PIN updated successfully");
    assert!(response.is_success());
}

#[tokio::test]
async fn update_pin_accepts_bare_text_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/employees/update-pin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Update successful"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.update_pin(&request(10021, "4321")).await.unwrap();

    assert_eq!(response.message, "Update successful");
    assert!(response.is_success());
}

#[tokio::test]
async fn forbidden_update_maps_to_forbidden_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/employees/update-pin"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Manager PIN incorrect"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.update_pin(&request(10021, "4321")).await.unwrap_err();

    match err {
        ClientError::Forbidden(message) => assert_eq!(message, "Manager PIN incorrect"),
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_carries_message_field() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/employees/update-pin"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.update_pin(&request(10021, "4321")).await.unwrap_err();

    match err {
        ClientError::Internal(message) => assert_eq!(message, "database unavailable"),
        other => panic!("expected Internal, got {other:?}"),
    }
}
