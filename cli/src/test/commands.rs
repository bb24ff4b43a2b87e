#![allow(clippy::unwrap_used)]

use axum::http::Method;
use predicates::prelude::{predicate::str::contains, PredicateBooleanExt};
use serde_json::json;

use super::{
    stub_api::{Route, StubApi},
    test_context::TestContext,
};
use crate::messages;

fn contract_page(current_page: u32, total_pages: u32) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "content": [{
                "id": 11,
                "propertyId": 3,
                "propertyAddress": "역삼동 1-1",
                "customerId": 7,
                "customerName": "홍길동",
                "contractType": "JEONSE",
                "contractStatus": "IN_PROGRESS",
                "jeonsePrice": 300000000
            }],
            "pagination": {
                "currentPage": current_page,
                "totalPages": total_pages,
                "totalElements": 12,
                "size": 10
            }
        }
    })
}

#[test]
fn test_config_masks_token() {
    let context = TestContext::new();

    context
        .command()
        .env("BROKER_API_TOKEN", "very-secret")
        .arg("config")
        .assert()
        .success()
        .stdout(contains("********").and(contains("very-secret").not()));
}

#[test]
fn test_init_writes_profile_once() {
    let context = TestContext::new();

    context
        .command()
        .args(["init", "--url", "http://admin.example.com/api", "--page-size", "20"])
        .assert()
        .success();

    let written = std::fs::read_to_string(context.profile_path()).unwrap();
    assert!(written.contains(r#"api_url = "http://admin.example.com/api""#));
    assert!(written.contains("page_size = 20"));

    context
        .command()
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));
}

#[test]
fn test_profile_use_creates_profile() {
    let context = TestContext::new();

    context
        .command()
        .args(["profile", "use", "office"])
        .assert()
        .success()
        .stdout(contains("Created new profile: office"));

    context
        .command()
        .env_remove("BROKER_PROFILE")
        .args(["profile", "current"])
        .assert()
        .success()
        .stdout(contains("Current profile: office"));
}

#[test]
fn test_contract_list_prints_rows_and_footer() {
    let stub = StubApi::start(vec![Route::json(Method::GET, "/contracts", 200, contract_page(1, 2))]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["contract", "list", "-f", "contractType=jeonse"])
        .assert()
        .success()
        .stdout(
            contains("홍길동")
                .and(contains("전세 300000000"))
                .and(contains("1/2 페이지, 총 12건")),
        );

    let request = stub.last_request();
    assert_eq!(request.query, "page=1&size=10&contractType=JEONSE");
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
}

#[test]
fn test_contract_list_failure_toasts_and_exits_non_zero() {
    let stub = StubApi::start(vec![Route::raw(Method::GET, "/contracts", 500, "oops")]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["contract", "list", "-f", "status=COMPLETED"])
        .assert()
        .failure()
        .stdout(contains("검색 조건에 맞는 계약이 없습니다."))
        .stderr(contains(messages::CONTRACT_LIST).and(contains("Error:").not()));
}

#[test]
fn test_unknown_filter_field_is_rejected() {
    let stub = StubApi::start(vec![]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["contract", "list", "-f", "color=red"])
        .assert()
        .failure()
        .stderr(contains("unknown filter field 'color'"));

    assert!(stub.requests().is_empty());
}

#[test]
fn test_browse_next_page_fetches_again() {
    let stub = StubApi::start(vec![Route::json(Method::GET, "/contracts", 200, contract_page(1, 2))]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["contract", "browse"])
        .write_stdin("set customerName 홍길동\nnext\nquit\n")
        .assert()
        .success()
        .stdout(contains("(search 로 적용)"));

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query, "page=1&size=10");
    // edited constraints travel with the next fetch
    assert!(requests[1].query.starts_with("page=2&size=10&customerName="));
}

#[test]
fn test_browse_reset_refetches_defaults() {
    let stub = StubApi::start(vec![Route::json(Method::GET, "/contracts", 200, contract_page(1, 1))]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["contract", "browse", "-f", "status=COMPLETED"])
        .write_stdin("reset\n")
        .assert()
        .success();

    let queries: Vec<String> = stub.requests().into_iter().map(|r| r.query).collect();
    assert_eq!(queries, vec!["page=1&size=10&status=COMPLETED", "page=1&size=10"]);
}

#[test]
fn test_delete_reports_success() {
    let stub = StubApi::start(vec![Route::json(
        Method::DELETE,
        "/customers/3",
        200,
        json!({ "success": true }),
    )]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["customer", "delete", "3"])
        .assert()
        .success()
        .stderr(contains("고객이 삭제되었습니다."));
}

#[test]
fn test_update_failure_shows_server_message() {
    let stub = StubApi::start(vec![Route::json(
        Method::PUT,
        "/consultations/8",
        400,
        json!({ "success": false, "error": "상담 일시가 올바르지 않습니다." }),
    )]);
    let context = TestContext::with_api(stub.url());
    let payload = context.temp_dir.path().join("consultation.json");
    std::fs::write(
        &payload,
        json!({
            "agentId": 1,
            "customerId": 2,
            "consultationType": "PHONE",
            "status": "RESERVED"
        })
        .to_string(),
    )
    .unwrap();

    context
        .command()
        .args(["consultation", "update", "8", "--file"])
        .arg(&payload)
        .assert()
        .failure()
        .stderr(contains("상담 일시가 올바르지 않습니다."));

    assert_eq!(stub.last_request().body_json()["consultationType"], json!("PHONE"));
}

#[test]
fn test_sms_list_shows_delivery_summary() {
    let stub = StubApi::start(vec![Route::json(
        Method::GET,
        "/sms/",
        200,
        json!({
            "success": true,
            "data": {
                "content": [
                    { "id": 1, "receiver": "01012345678", "status": "SUCCESS", "createdAt": "2025-03-01T10:00:00" },
                    { "id": 2, "receiver": "01087654321", "status": "FAIL", "createdAt": "2025-03-01T10:05:00" }
                ]
            }
        }),
    )]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["sms", "list"])
        .assert()
        .success()
        .stdout(
            contains("010-8765-4321")
                .and(contains("성공 1건 / 실패 1건"))
                .and(contains("1/1 페이지, 총 2건")),
        );
}

#[test]
fn test_sms_send_strips_receiver_formatting() {
    let stub = StubApi::start(vec![Route::json(
        Method::POST,
        "/sms/send",
        200,
        json!({ "success": true, "data": { "id": 9, "receiver": "01012345678", "status": "SUCCESS" } }),
    )]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["sms", "send", "--receiver", "010-1234-5678", "--msg", "방문 예약 안내"])
        .assert()
        .success()
        .stderr(contains("문자가 발송되었습니다."));

    assert_eq!(stub.last_request().body_json()["receiver"], json!("01012345678"));
}

#[test]
fn test_sms_history_zero_size_uses_profile_size() {
    let stub = StubApi::start(vec![Route::json(
        Method::GET,
        "/sms/history",
        200,
        json!({ "success": true, "data": [] }),
    )]);
    let context = TestContext::with_api(stub.url());

    context
        .command()
        .args(["sms", "history", "--size", "0"])
        .assert()
        .success()
        .stdout(contains("문자 발송 이력이 없습니다."));

    assert_eq!(stub.last_request().query, "page=1&size=10");
}
