//! Course content export endpoints

use canvas_core::{validate_attr_is_acceptable, Payload};
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use reqwest::Response;

const EXPORT_TYPES: &[&str] = &["common_cartridge", "qti"];

/// List the content exports created for a course
pub async fn list_content_exports(
    client: &CanvasClient,
    course_id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/content_exports",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Get the details of one content export
pub async fn show_content_export(
    client: &CanvasClient,
    course_id: &str,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/content_exports/{}",
        client.context().base_api_url(),
        course_id,
        id
    );
    client.get(&url, None, options).await
}

/// Begin exporting a course's content
///
/// `export_type` picks the package format: a full common cartridge or a QTI
/// package of quizzes only. The export runs asynchronously on the server;
/// poll [`show_content_export`] for completion.
///
/// # Errors
///
/// Fails before any request when `export_type` is not in its acceptable set.
pub async fn export_course_content(
    client: &CanvasClient,
    course_id: &str,
    export_type: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(Some(export_type), EXPORT_TYPES)?;

    let mut payload = Payload::new();
    payload.set("export_type", export_type);

    let url = format!(
        "{}/v1/courses/{}/content_exports",
        client.context().base_api_url(),
        course_id
    );
    client.post(&url, Some(&payload), options).await
}
