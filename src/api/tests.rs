use httpmock::prelude::*;
use serde_json::json;

use super::*;

fn employee_body(index: usize) -> serde_json::Value {
    json!({
        "id": format!("emp-{}", index),
        "full_name": format!("Employee {}", index),
        "email": format!("employee{}@example.com", index),
        "department": "engineering",
        "permissions": []
    })
}

fn employee_page(range: std::ops::Range<usize>, count: u64) -> serde_json::Value {
    json!({
        "count": count,
        "results": range.map(employee_body).collect::<Vec<_>>()
    })
}

#[tokio::test]
async fn path_params_are_substituted_into_the_url() {
    let server = MockServer::start_async().await;
    let detail = server.mock(|when, then| {
        when.method(GET).path("/api/hrm/employees/emp-42/");
        then.status(200).header("content-type", "application/json").json_body(employee_body(42));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let employee = client.get_employee("emp-42").await.unwrap();
    assert_eq!(employee.id, "emp-42");
    detail.assert_async().await;
}

#[tokio::test]
async fn missing_path_param_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let any = server.mock(|when, then| {
        when.any_request();
        then.status(200).header("content-type", "application/json").json_body(json!({}));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let error = client
        .invoke::<serde_json::Value>(&routes::leaves::DETAIL, CallOptions::new())
        .await
        .unwrap_err();
    assert_eq!(error.code, "MISSING_PATH_PARAM");
    assert_eq!(any.hits_async().await, 0);
}

#[tokio::test]
async fn bearer_token_comes_from_the_injected_provider() {
    let server = MockServer::start_async().await;
    let current = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/current/")
            .header("authorization", "Bearer session-token-9");
        then.status(200).header("content-type", "application/json").json_body(employee_body(1));
    });

    let client = ApiClient::new_with_base_url(server.base_url())
        .with_token_provider(std::rc::Rc::new(StaticTokenProvider::new("session-token-9")));
    client.current_employee().await.unwrap();
    current.assert_async().await;
}

#[tokio::test]
async fn pagination_walks_every_offset_until_count() {
    let server = MockServer::start_async().await;
    let page0 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("limit", "14")
            .query_param("offset", "0");
        then.status(200).header("content-type", "application/json").json_body(employee_page(0..14, 30));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("limit", "14")
            .query_param("offset", "14");
        then.status(200).header("content-type", "application/json").json_body(employee_page(14..28, 30));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("limit", "14")
            .query_param("offset", "28");
        then.status(200).header("content-type", "application/json").json_body(employee_page(28..30, 30));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let all = client
        .list_employees(&EmployeeListFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.count, 30);
    assert_eq!(all.results.len(), 30);
    assert_eq!(all.results[0].id, "emp-0");
    assert_eq!(all.results[29].id, "emp-29");
    assert_eq!(page0.hits_async().await, 1);
    assert_eq!(page1.hits_async().await, 1);
    assert_eq!(page2.hits_async().await, 1);
}

#[tokio::test]
async fn page_cap_stops_after_one_fetch() {
    let server = MockServer::start_async().await;
    let page0 = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("offset", "0");
        then.status(200).header("content-type", "application/json").json_body(employee_page(0..14, 30));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let first = client
        .list_employees(&EmployeeListFilter::default(), PageRequest::first_page())
        .await
        .unwrap();
    assert_eq!(first.count, 30);
    assert_eq!(first.results.len(), 14);
    assert_eq!(page0.hits_async().await, 1);
}

#[tokio::test]
async fn empty_page_stops_an_overstated_count() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("offset", "0");
        then.status(200).header("content-type", "application/json").json_body(employee_page(0..14, 99));
    });
    let empty = server.mock(|when, then| {
        when.method(GET)
            .path("/api/hrm/employees/")
            .query_param("offset", "14");
        then.status(200).header("content-type", "application/json").json_body(json!({ "count": 99, "results": [] }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let all = client
        .list_employees(&EmployeeListFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.results.len(), 14);
    assert_eq!(empty.hits_async().await, 1);
}

#[tokio::test]
async fn debounced_search_issues_one_network_call() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/hrm/employees/");
        then.status(200).header("content-type", "application/json").json_body(employee_page(0..1, 1));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let debouncer = Debouncer::new();
    let first_filter = EmployeeListFilter::search("a");
    let second_filter = EmployeeListFilter::search("ad");
    let first = client.search_employees(&debouncer, &first_filter);
    let second = client.search_employees(&debouncer, &second_filter);
    let (first, second) = futures::join!(first, second);

    assert!(first.unwrap().is_none());
    assert_eq!(second.unwrap().unwrap().results.len(), 1);
    assert_eq!(list.hits_async().await, 1);
}

#[tokio::test]
async fn validation_failure_keeps_the_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/hrm/leaves/");
        then.status(422)
            .json_body(json!({ "start_date": ["This field is required."] }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let payload = LeaveRequestPayload {
        employee: None,
        leave_type: "lt-1".into(),
        start_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
        days_requested: None,
        reason: None,
    };
    let error = client.create_leave(&payload).await.unwrap_err();
    assert_eq!(error.status, Some(422));
    assert_eq!(
        error.cause,
        Some(json!({ "start_date": ["This field is required."] }))
    );
    assert_eq!(error.error, "start_date: This field is required.");
}

#[tokio::test]
async fn csv_export_returns_raw_bytes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/hrm/employees/export/");
        then.status(200)
            .header("content-type", "text/csv")
            .body("id,full_name\nemp-1,Ada Lovelace\n");
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let bytes = client.export_employees().await.unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "id,full_name\nemp-1,Ada Lovelace\n"
    );
}
