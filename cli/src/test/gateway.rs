#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::Method;
use broker_core::{
    models::sms::{SendSmsRequest, TemplateRequest},
    ContractSearchFilter, Lenient, ListFilter, SmsListFilter,
};
use serde_json::json;

use super::stub_api::{closed_port_url, Route, StubApi};
use crate::{api::ApiClient, messages};

fn client(stub: &StubApi) -> ApiClient {
    ApiClient::new(stub.url(), Some("secret".to_string()), Some(Duration::from_secs(5))).unwrap()
}

fn contract_page() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "content": [{
                "id": 11,
                "propertyId": 3,
                "propertyAddress": "서울시 강남구 역삼동 1-1",
                "customerId": 7,
                "customerName": "홍길동",
                "contractType": "SALE",
                "contractStatus": "COMPLETED",
                "salePrice": 900000000
            }],
            "pagination": { "currentPage": 1, "totalPages": 4, "totalElements": 31, "size": 10 }
        }
    })
}

#[test]
fn test_list_success_sends_only_present_constraints() {
    let stub = StubApi::start(vec![Route::json(Method::GET, "/contracts", 200, contract_page())]);

    let mut filter = ContractSearchFilter::with_size(10);
    filter.set_field("status", Some("COMPLETED")).unwrap();

    let response = client(&stub).get_contracts(&filter);

    assert!(response.success);
    let page = response.data.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.pagination.unwrap().total_pages, 4);

    let request = stub.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.query, "page=1&size=10&status=COMPLETED");
    assert_eq!(request.authorization.as_deref(), Some("Bearer secret"));
}

#[test]
fn test_error_status_envelope_is_passed_through() {
    let stub = StubApi::start(vec![Route::json(
        Method::POST,
        "/contracts",
        409,
        json!({ "success": false, "error": "이미 등록된 계약입니다." }),
    )]);

    let request = serde_json::from_value(json!({
        "propertyId": 3,
        "customerId": 7,
        "contractType": "SALE",
        "contractStatus": "AVAILABLE"
    }))
    .unwrap();
    let response = client(&stub).register_contract(&request);

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("이미 등록된 계약입니다."));
    assert_eq!(stub.last_request().body_json()["contractType"], json!("SALE"));
}

#[test]
fn test_unknown_status_keeps_the_page() {
    let mut body = contract_page();
    body["data"]["content"][0]["contractStatus"] = json!("CANCELED");
    let stub = StubApi::start(vec![Route::json(Method::GET, "/contracts", 200, body)]);

    let response = client(&stub).get_contracts(&ContractSearchFilter::with_size(10));

    assert!(response.success);
    assert!(response.error.is_none());
    let page = response.data.unwrap();
    assert_eq!(page.content[0].id, 11);
    assert_eq!(page.content[0].contract_status, Lenient::Unknown("CANCELED".to_string()));
    assert_eq!(page.pagination.unwrap().total_elements, 31);
}

#[test]
fn test_non_envelope_body_uses_fallback() {
    let stub = StubApi::start(vec![Route::raw(
        Method::GET,
        "/contracts",
        502,
        "<html>Bad Gateway</html>",
    )]);

    let response = client(&stub).get_contracts(&ContractSearchFilter::default());

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error.as_deref(), Some(messages::CONTRACT_LIST));
}

#[test]
fn test_transport_failure_uses_fallback() {
    let api = ApiClient::new(&closed_port_url(), None, Some(Duration::from_secs(2))).unwrap();

    let response = api.get_customer(1);

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(messages::CUSTOMER_DETAIL));
}

#[test]
fn test_delete_yields_unit_payload() {
    let stub = StubApi::start(vec![Route::json(
        Method::DELETE,
        "/properties/5",
        200,
        json!({ "success": true, "data": null, "message": "삭제되었습니다." }),
    )]);

    let response = client(&stub).delete_property(5);

    assert!(response.is_success());
    assert_eq!(response.data, Some(()));
    assert_eq!(response.message.as_deref(), Some("삭제되었습니다."));
}

#[test]
fn test_sms_failure_is_an_envelope() {
    let stub = StubApi::start(vec![Route::json(
        Method::POST,
        "/sms/send",
        500,
        json!({ "success": false, "message": "발신 번호가 등록되지 않았습니다." }),
    )]);

    let request = SendSmsRequest {
        receiver: "01012345678".to_string(),
        msg: "안녕하세요".to_string(),
        msg_type: None,
        title: None,
        rdate: None,
        rtime: None,
    };
    let response = client(&stub).send_sms(&request);

    assert!(!response.success);
    assert_eq!(response.error_message(), Some("발신 번호가 등록되지 않았습니다."));
}

#[test]
fn test_sms_transport_failure_uses_fallback() {
    let api = ApiClient::new(&closed_port_url(), None, Some(Duration::from_secs(2))).unwrap();

    let response = api.get_all_sms(&SmsListFilter::default());

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some(messages::SMS_LIST));
}

#[test]
fn test_template_update_path() {
    let stub = StubApi::start(vec![Route::json(
        Method::PUT,
        "/sms/templates/7",
        200,
        json!({ "success": true, "data": { "id": 7, "title": "안내", "content": "내일 방문 예정입니다." } }),
    )]);

    let request = TemplateRequest {
        title: "안내".to_string(),
        content: "내일 방문 예정입니다.".to_string(),
    };
    let response = client(&stub).update_template(7, &request);

    assert!(response.is_success());
    assert_eq!(stub.last_request().path, "/sms/templates/7");
}
