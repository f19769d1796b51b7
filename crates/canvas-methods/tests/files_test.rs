//! Wire-level tests for the files and folders bindings

use std::net::SocketAddr;
use std::time::Duration;

use canvas_core::RequestContext;
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use canvas_methods::files;
use canvas_mock::RecordedRequest;
use chrono::{TimeZone, Utc};
use tokio::net::TcpListener;

/// Start the echo server and return its address
async fn start_mock_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(canvas_mock::run(listener));
    tokio::time::sleep(Duration::from_millis(10)).await;

    addr
}

fn client_for(addr: SocketAddr, per_page: u32) -> CanvasClient {
    let ctx =
        RequestContext::with_per_page(format!("http://{}", addr), "test-token", per_page).unwrap();
    CanvasClient::new(ctx)
}

/// Context pointing nowhere, for checks that must fail before any I/O
fn offline_client() -> CanvasClient {
    let ctx = RequestContext::new("https://example.test/api", "test-token").unwrap();
    CanvasClient::new(ctx)
}

async fn echo_of(response: reqwest::Response) -> RecordedRequest {
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod listing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_list_files_courses_applies_context_per_page() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 25);

        let response = files::list_files_courses(
            &client,
            "42",
            None,
            None,
            None,
            None,
            None,
            None,
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.method, "GET");
        assert_eq!(echo.path, "/v1/courses/42/files");
        assert_eq!(echo.query, owned(&[("per_page", "25")]));
    }

    #[tokio::test]
    async fn test_explicit_per_page_overrides_context_default() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 25);

        let response = files::list_files_courses(
            &client,
            "42",
            None,
            None,
            None,
            None,
            None,
            Some(100),
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.query, owned(&[("per_page", "100")]));
    }

    #[tokio::test]
    async fn test_list_files_full_parameter_set() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::list_files_folders(
            &client,
            "7",
            Some("image/jpeg"),
            Some("essay"),
            Some("user"),
            Some("size"),
            Some("desc"),
            Some(50),
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.path, "/v1/folders/7/files");
        assert_eq!(
            echo.query,
            owned(&[
                ("content_types", "image/jpeg"),
                ("search_term", "essay"),
                ("include", "user"),
                ("sort", "size"),
                ("order", "desc"),
                ("per_page", "50"),
            ])
        );
    }

    #[tokio::test]
    async fn test_bad_sort_fails_before_any_request() {
        let err = files::list_files_courses(
            &offline_client(),
            "42",
            None,
            None,
            None,
            Some("bogus"),
            None,
            None,
            RequestOptions::default(),
        )
        .await
        .unwrap_err();

        match err {
            CanvasHttpError::ValidationError(invalid) => {
                assert_eq!(invalid.value, "bogus");
                assert_eq!(
                    invalid.acceptable,
                    vec!["name", "size", "created_at", "updated_at", "content_type", "user"]
                );
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bad_order_fails_before_any_request() {
        let err = files::list_files_folders(
            &offline_client(),
            "7",
            None,
            None,
            None,
            None,
            Some("sideways"),
            None,
            RequestOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CanvasHttpError::ValidationError(_)));
    }
}

mod quota_and_files {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_quota_urls_per_context() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);
        let options = RequestOptions::default;

        let echo = echo_of(
            files::get_quota_information_courses(&client, "42", options())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/courses/42/files/quota");
        assert!(echo.query.is_empty());

        let echo = echo_of(
            files::get_quota_information_groups(&client, "9", options())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/groups/9/files/quota");

        let echo = echo_of(
            files::get_quota_information_users(&client, "self", options())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/users/self/files/quota");
    }

    #[tokio::test]
    async fn test_get_public_url() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::get_public_url(&client, "160", RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.path, "/v1/files/160/public_url");
        assert_eq!(echo.authorization.as_deref(), Some("Bearer test-token"));
    }

    #[tokio::test]
    async fn test_get_file_include_is_optional() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::get_file(&client, "160", None, RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.path, "/v1/files/160");
        assert!(echo.query.is_empty());

        let response = files::get_file(&client, "160", Some("user"), RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.query, owned(&[("include", "user")]));
    }

    #[tokio::test]
    async fn test_update_file_form_encodes_all_fields() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let lock_at = Utc.with_ymd_and_hms(2015, 9, 1, 12, 0, 0).unwrap();
        let unlock_at = Utc.with_ymd_and_hms(2015, 9, 8, 12, 0, 0).unwrap();

        let response = files::update_file(
            &client,
            "160",
            "final-draft.docx",
            "12",
            lock_at,
            unlock_at,
            true,
            false,
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.method, "PUT");
        assert_eq!(echo.path, "/v1/files/160");
        assert!(echo.query.is_empty());
        assert_eq!(
            echo.form,
            owned(&[
                ("name", "final-draft.docx"),
                ("parent_folder_id", "12"),
                ("lock_at", "2015-09-01T12:00:00Z"),
                ("unlock_at", "2015-09-08T12:00:00Z"),
                ("locked", "true"),
                ("hidden", "false"),
            ])
        );
    }

    #[tokio::test]
    async fn test_delete_file() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::delete_file(&client, "160", RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.method, "DELETE");
        assert_eq!(echo.path, "/v1/files/160");
    }
}

mod folders {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_resolve_path_substitutes_both_placeholders() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::resolve_path_courses_full_path(
            &client,
            "42",
            "unit-1/week-3",
            None,
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.path, "/v1/courses/42/folders/by_path/unit-1/week-3");
        assert!(!echo.path.contains('{'));
        assert_eq!(echo.query, owned(&[("per_page", "10")]));
    }

    #[tokio::test]
    async fn test_resolve_path_without_full_path() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let echo = echo_of(
            files::resolve_path_users(&client, "self", None, RequestOptions::default())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/users/self/folders/by_path");

        let echo = echo_of(
            files::resolve_path_groups(&client, "9", Some(5), RequestOptions::default())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/groups/9/folders/by_path");
        assert_eq!(echo.query, owned(&[("per_page", "5")]));
    }

    #[tokio::test]
    async fn test_get_folder_accepts_root_alias() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let echo = echo_of(
            files::get_folder_courses(&client, "42", "root", RequestOptions::default())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/courses/42/folders/root");

        let echo = echo_of(
            files::get_folder_folders(&client, "2937", RequestOptions::default())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(echo.path, "/v1/folders/2937");
    }

    #[tokio::test]
    async fn test_create_folder_posts_form_body() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let lock_at = Utc.with_ymd_and_hms(2016, 1, 11, 8, 0, 0).unwrap();
        let unlock_at = Utc.with_ymd_and_hms(2016, 1, 18, 8, 0, 0).unwrap();

        let response = files::create_folder_courses(
            &client,
            "42",
            "week-3",
            "12",
            "unit-1",
            lock_at,
            unlock_at,
            false,
            false,
            2,
            RequestOptions::default(),
        )
        .await
        .unwrap();

        let echo = echo_of(response).await;
        assert_eq!(echo.method, "POST");
        assert_eq!(echo.path, "/v1/courses/42/folders");
        assert_eq!(
            echo.form,
            owned(&[
                ("name", "week-3"),
                ("parent_folder_id", "12"),
                ("parent_folder_path", "unit-1"),
                ("lock_at", "2016-01-11T08:00:00Z"),
                ("unlock_at", "2016-01-18T08:00:00Z"),
                ("locked", "false"),
                ("hidden", "false"),
                ("position", "2"),
            ])
        );
    }

    #[tokio::test]
    async fn test_delete_folder_sends_force_in_query() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::delete_folder(&client, "2937", true, RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.method, "DELETE");
        assert_eq!(echo.path, "/v1/folders/2937");
        assert_eq!(echo.query, owned(&[("force", "true")]));
        assert!(echo.form.is_empty());
    }

    #[tokio::test]
    async fn test_upload_file_is_a_bare_post() {
        let addr = start_mock_server().await;
        let client = client_for(addr, 10);

        let response = files::upload_file(&client, "2937", RequestOptions::default())
            .await
            .unwrap();
        let echo = echo_of(response).await;
        assert_eq!(echo.method, "POST");
        assert_eq!(echo.path, "/v1/folders/2937/files");
        assert!(echo.form.is_empty());
    }
}
