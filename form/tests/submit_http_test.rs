use std::sync::Arc;
use std::time::Duration;

use client::HttpMetadataBackend;
use form::{FormController, SubmitOutcome};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wizard_core::{FieldValue, Operation};

fn http_form() -> FormController {
    let backend = HttpMetadataBackend::new(Duration::from_secs(5)).unwrap();
    FormController::new(Arc::new(backend))
}

fn fill_table(form: &FormController) {
    form.apply_raw_edit("client_settings", "project_id", FieldValue::text("proj-x"))
        .unwrap();
    form.apply_raw_edit("client_settings", "llm_location", FieldValue::text("us-central1"))
        .unwrap();
    form.apply_raw_edit("table_settings", "project_id", FieldValue::text("proj-x"))
        .unwrap();
    form.apply_raw_edit("table_settings", "dataset_id", FieldValue::text("ds-y"))
        .unwrap();
    form.apply_raw_edit("table_settings", "table_id", FieldValue::text("orders"))
        .unwrap();
    form.apply_raw_edit(
        "client_options_settings",
        "use_data_quality",
        FieldValue::Flag(true)
    )
    .unwrap();
}

#[tokio::test]
async fn test_submit_posts_full_configuration() {
    let mock_server = MockServer::start().await;
    let form = http_form();
    fill_table(&form);
    form.set_endpoint_base(mock_server.uri());

    let expected_body = serde_json::json!({
        "client_options_settings": {
            "use_lineage_tables": false,
            "use_lineage_processes": false,
            "use_profile": false,
            "use_data_quality": true,
            "use_ext_documents": false
        },
        "client_settings": {
            "project_id": "proj-x",
            "llm_location": "us-central1",
            "dataplex_location": ""
        },
        "table_settings": {
            "project_id": "proj-x",
            "dataset_id": "ds-y",
            "table_id": "orders",
            "documentation_uri": ""
        },
        "dataset_settings": {
            "project_id": "proj-x",
            "dataset_id": "ds-y",
            "documentation_csv_uri": "",
            "strategy": "1"
        }
    });
    let response = serde_json::json!({ "table": "proj-x.ds-y.orders", "description": "Orders" });

    Mock::given(method("POST"))
        .and(path("/generate_table_description"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = form.submit(Operation::GenerateTableDescription).await;
    assert_eq!(outcome, SubmitOutcome::Success(response.clone()));
    assert_eq!(form.last_response(), Some(response));
}

#[tokio::test]
async fn test_each_operation_targets_its_own_path() {
    let mock_server = MockServer::start().await;
    let form = http_form();
    form.set_endpoint_base(format!("{}/", mock_server.uri()));

    for operation in [
        Operation::GenerateTableDescription,
        Operation::GenerateColumnsDescriptions,
        Operation::GenerateDatasetTablesDescriptions
    ] {
        Mock::given(method("POST"))
            .and(path(format!("/{operation}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "op": operation }))
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    for operation in [
        Operation::GenerateTableDescription,
        Operation::GenerateColumnsDescriptions,
        Operation::GenerateDatasetTablesDescriptions
    ] {
        let outcome = form.submit(operation).await;
        assert_eq!(
            outcome.display_value(),
            serde_json::json!({ "op": operation.to_string() })
        );
    }
}

#[tokio::test]
async fn test_error_status_shows_generic_failure() {
    let mock_server = MockServer::start().await;
    let form = http_form();
    fill_table(&form);
    form.set_endpoint_base(mock_server.uri());

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Table not found"))
        .mount(&mock_server)
        .await;

    let before = form.configuration();
    let outcome = form.submit(Operation::GenerateColumnsDescriptions).await;
    assert_eq!(outcome, SubmitOutcome::failure());
    assert_eq!(
        form.last_response(),
        Some(serde_json::json!({ "error": "Network Error or API issue" }))
    );
    assert_eq!(*form.configuration(), *before);
}

#[tokio::test]
async fn test_transport_error_shows_generic_failure() {
    let form = http_form();
    fill_table(&form);
    form.set_endpoint_base("http://127.0.0.1:9");

    let before = form.configuration();
    let outcome = form.submit(Operation::GenerateTableDescription).await;
    assert_eq!(
        outcome.display_value(),
        serde_json::json!({ "error": "Network Error or API issue" })
    );
    assert_eq!(*form.configuration(), *before);
}

#[tokio::test]
async fn test_malformed_endpoint_shows_generic_failure() {
    let form = http_form();
    form.set_endpoint_base("api.local without scheme");
    let outcome = form.submit(Operation::GenerateTableDescription).await;
    assert_eq!(outcome, SubmitOutcome::failure());
}
