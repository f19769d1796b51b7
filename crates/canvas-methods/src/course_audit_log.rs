//! Course audit log endpoint

use canvas_core::Payload;
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use chrono::{DateTime, Utc};
use reqwest::Response;

/// List the audit events recorded for a course
///
/// `start_time` and `end_time` bound the search window; either side may be
/// left open.
pub async fn query_by_course(
    client: &CanvasClient,
    course_id: &str,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set_opt("start_time", start_time);
    payload.set_opt("end_time", end_time);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/audit/course/courses/{}",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}
