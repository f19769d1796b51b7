//! Course and group tab endpoints

use canvas_core::{validate_attr_is_acceptable, Payload};
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use reqwest::Response;

const INCLUDE_TYPES: &[&str] = &["external"];

/// List the navigation tabs of a course
///
/// `include="external"` adds tabs contributed by external tools.
pub async fn list_available_tabs_for_course_or_group_courses(
    client: &CanvasClient,
    course_id: &str,
    include: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(Some(include), INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set("include", include);

    let url = format!(
        "{}/v1/courses/{}/tabs",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List the navigation tabs of a group
pub async fn list_available_tabs_for_course_or_group_groups(
    client: &CanvasClient,
    group_id: &str,
    include: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(Some(include), INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set("include", include);

    let url = format!(
        "{}/v1/groups/{}/tabs",
        client.context().base_api_url(),
        group_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Change a course tab's position or hide it
///
/// `position` is 1-based within the tab bar.
pub async fn update_tab_for_course(
    client: &CanvasClient,
    course_id: &str,
    tab_id: &str,
    position: u32,
    hidden: bool,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("position", position);
    payload.set("hidden", hidden);

    let url = format!(
        "{}/v1/courses/{}/tabs/{}",
        client.context().base_api_url(),
        course_id,
        tab_id
    );
    client.put(&url, Some(&payload), options).await
}
