//! Wire-level tests for [`DorarClient`] against a mock HTTP server.

use serde_json::json;
use wiremock::{
  Mock, MockServer, ResponseTemplate,
  matchers::{method, path, path_regex, query_param},
};

use durar_core::source::{DataCategory, HadithSource};

use crate::{ApiConfig, ApiError, DorarClient};

fn client_for(server: &MockServer) -> DorarClient {
  DorarClient::new(ApiConfig { base_url: server.uri() }).unwrap()
}

fn hadith_json() -> serde_json::Value {
  json!({
    "hadith": "إنما الأعمال بالنيات",
    "rawi": "عمر بن الخطاب",
    "mohdith": "البخاري",
    "book": "صحيح البخاري",
    "numberOrPage": "1",
    "grade": "صحيح",
    "hadithId": "12345",
    "hasSimilarHadith": "true"
  })
}

#[tokio::test]
async fn search_sends_query_page_and_removehtml() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/hadith/search"))
    .and(query_param("value", "إنما الأعمال بالنيات"))
    .and(query_param("page", "2"))
    .and(query_param("removehtml", "true"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "metadata": { "length": "10", "page": "2" },
      "data": [hadith_json()]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let envelope = client.search_hadiths("إنما الأعمال بالنيات", 2).await.unwrap();
  assert_eq!(envelope.metadata.length.as_deref(), Some("10"));
  assert_eq!(envelope.data.len(), 1);
  assert_eq!(envelope.data[0].hadith_id.as_deref(), Some("12345"));
}

#[tokio::test]
async fn get_hadith_decodes_envelope() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/hadith/12345"))
    .and(query_param("removehtml", "true"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({ "metadata": {}, "data": hadith_json() })),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let envelope = client.get_hadith("12345").await.unwrap();
  assert_eq!(envelope.data.grade, "صحيح");
  assert!(envelope.data.has_similar());
}

#[tokio::test]
async fn http_error_status_is_surfaced_with_body() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/hadith/404404"))
    .respond_with(ResponseTemplate::new(404).set_body_string("no such hadith"))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.get_hadith("404404").await.unwrap_err();
  match err {
    ApiError::HttpStatus { status, body } => {
      assert_eq!(status, 404);
      assert_eq!(body, "no such hadith");
    }
    other => panic!("expected HttpStatus, got {other:?}"),
  }
}

#[tokio::test]
async fn html_body_with_success_status_is_invalid_response() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/hadith/1"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string("<html>maintenance</html>")
        .insert_header("content-type", "text/html"),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.get_hadith("1").await.unwrap_err();
  match err {
    ApiError::InvalidResponse { detail, .. } => {
      assert!(detail.contains("<html>"), "detail should carry a body snippet: {detail}");
    }
    other => panic!("expected InvalidResponse, got {other:?}"),
  }
}

#[tokio::test]
async fn sharh_by_text_percent_encodes_the_path_segment() {
  let server = MockServer::start().await;
  // One path segment; the embedded space must not split the path.
  Mock::given(method("GET"))
    .and(path_regex("^/v1/site/sharh/text/[^/]+$"))
    .and(query_param("removehtml", "true"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "metadata": {},
      "data": {
        "hadith": "",
        "sharhMetadata": {
          "id": "4870",
          "isContainSharh": "true",
          "urlToGetSharh": "/v1/site/sharh/4870",
          "sharh": "شرح الحديث"
        }
      }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let envelope = client.get_sharh_by_text("إنما الأعمال بالنيات").await.unwrap();
  let sharh = envelope.data.sharh_metadata.unwrap().sharh.unwrap();
  assert_eq!(sharh, "شرح الحديث");
}

#[tokio::test]
async fn mohdith_endpoint_has_no_removehtml() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/site/mohdith/256"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "metadata": {},
      "data": { "name": "البخاري", "mohdithId": "256", "info": "إمام المحدثين" }
    })))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let envelope = client.get_mohdith("256").await.unwrap();
  assert_eq!(envelope.data.name, "البخاري");
}

#[tokio::test]
async fn data_list_is_a_bare_array() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/data/degree"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      { "key": "صحيح", "value": "1" },
      { "key": "حسن", "value": "2" }
    ])))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let items = client.get_data_list(DataCategory::Degree).await.unwrap();
  assert_eq!(items.len(), 2);
  assert_eq!(items[0].key, "صحيح");
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
  // Nothing listens on port 1.
  let client = DorarClient::new(ApiConfig { base_url: "http://127.0.0.1:1".into() }).unwrap();
  let err = client.get_hadith("1").await.unwrap_err();
  assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn rejects_unusable_base_url() {
  let err = DorarClient::new(ApiConfig { base_url: "not a url".into() }).unwrap_err();
  assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
}
