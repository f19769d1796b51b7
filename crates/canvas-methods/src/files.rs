//! Files and folders endpoints
//!
//! Storage quota, file listing and metadata, folder trees, and the first step
//! of the upload workflow. Folder endpoints exist per context (course, user,
//! group) plus a context-free form addressed by bare folder id; the bindings
//! carry the context name as a suffix.

use canvas_core::{validate_attr_is_acceptable, Payload};
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use chrono::{DateTime, Utc};
use reqwest::Response;

const INCLUDE_TYPES: &[&str] = &["user"];
const SORT_TYPES: &[&str] = &[
    "name",
    "size",
    "created_at",
    "updated_at",
    "content_type",
    "user",
];
const ORDER_TYPES: &[&str] = &["asc", "desc"];

/// Get the total and used storage quota for a course
pub async fn get_quota_information_courses(
    client: &CanvasClient,
    course_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/files/quota",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, None, options).await
}

/// Get the total and used storage quota for a group
pub async fn get_quota_information_groups(
    client: &CanvasClient,
    group_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/groups/{}/files/quota",
        client.context().base_api_url(),
        group_id
    );
    client.get(&url, None, options).await
}

/// Get the total and used storage quota for a user
pub async fn get_quota_information_users(
    client: &CanvasClient,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/users/{}/files/quota",
        client.context().base_api_url(),
        user_id
    );
    client.get(&url, None, options).await
}

/// List the files in a course
///
/// `content_types` filters by type/subtype pairs (`image/jpeg`) or bare types
/// (`image`); `search_term` matches partial file names. Sorting defaults to
/// `name` ascending on the server; note that `sort="user"` implies
/// `include=user`.
///
/// # Errors
///
/// Fails before any request when `include`, `sort`, or `order` is not in its
/// acceptable set.
#[allow(clippy::too_many_arguments)]
pub async fn list_files_courses(
    client: &CanvasClient,
    course_id: &str,
    content_types: Option<&str>,
    search_term: Option<&str>,
    include: Option<&str>,
    sort: Option<&str>,
    order: Option<&str>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(include, INCLUDE_TYPES)?;
    validate_attr_is_acceptable(sort, SORT_TYPES)?;
    validate_attr_is_acceptable(order, ORDER_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("content_types", content_types);
    payload.set_opt("search_term", search_term);
    payload.set_opt("include", include);
    payload.set_opt("sort", sort);
    payload.set_opt("order", order);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/files",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List the files in a folder
///
/// Same filtering and sorting parameters as [`list_files_courses`].
#[allow(clippy::too_many_arguments)]
pub async fn list_files_folders(
    client: &CanvasClient,
    id: &str,
    content_types: Option<&str>,
    search_term: Option<&str>,
    include: Option<&str>,
    sort: Option<&str>,
    order: Option<&str>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(include, INCLUDE_TYPES)?;
    validate_attr_is_acceptable(sort, SORT_TYPES)?;
    validate_attr_is_acceptable(order, ORDER_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("content_types", content_types);
    payload.set_opt("search_term", search_term);
    payload.set_opt("include", include);
    payload.set_opt("sort", sort);
    payload.set_opt("order", order);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/folders/{}/files",
        client.context().base_api_url(),
        id
    );
    client.get(&url, Some(&payload), options).await
}

/// Get the URL to use for inline preview of a file
pub async fn get_public_url(
    client: &CanvasClient,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/files/{}/public_url",
        client.context().base_api_url(),
        id
    );
    client.get(&url, None, options).await
}

/// Get the attachment object for a file
///
/// `include="user"` adds the user who uploaded the file or last edited its
/// content.
pub async fn get_file(
    client: &CanvasClient,
    id: &str,
    include: Option<&str>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(include, INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("include", include);

    let url = format!("{}/v1/files/{}", client.context().base_api_url(), id);
    client.get(&url, Some(&payload), options).await
}

/// Update settings on a file
///
/// `parent_folder_id` moves the file; the new folder must be in the same
/// context as the original parent folder.
#[allow(clippy::too_many_arguments)]
pub async fn update_file(
    client: &CanvasClient,
    id: &str,
    name: &str,
    parent_folder_id: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);

    let url = format!("{}/v1/files/{}", client.context().base_api_url(), id);
    client.put(&url, Some(&payload), options).await
}

/// Remove a file
pub async fn delete_file(
    client: &CanvasClient,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!("{}/v1/files/{}", client.context().base_api_url(), id);
    client.delete(&url, None, options).await
}

/// List the folders in a folder
pub async fn list_folders(
    client: &CanvasClient,
    id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/folders/{}/folders",
        client.context().base_api_url(),
        id
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve a full folder path within a course
///
/// Returns every folder in the hierarchy from the context root folder down to
/// the requested one. The path is relative to the root folder and does not
/// include the root folder's name.
pub async fn resolve_path_courses_full_path(
    client: &CanvasClient,
    course_id: &str,
    full_path: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/folders/by_path/{}",
        client.context().base_api_url(),
        course_id,
        full_path
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve the empty path within a course, returning its root folder
pub async fn resolve_path_courses(
    client: &CanvasClient,
    course_id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/folders/by_path",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve a full folder path within a user's files
pub async fn resolve_path_users_full_path(
    client: &CanvasClient,
    user_id: &str,
    full_path: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/users/{}/folders/by_path/{}",
        client.context().base_api_url(),
        user_id,
        full_path
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve the empty path within a user's files, returning the root folder
pub async fn resolve_path_users(
    client: &CanvasClient,
    user_id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/users/{}/folders/by_path",
        client.context().base_api_url(),
        user_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve a full folder path within a group
pub async fn resolve_path_groups_full_path(
    client: &CanvasClient,
    group_id: &str,
    full_path: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/groups/{}/folders/by_path/{}",
        client.context().base_api_url(),
        group_id,
        full_path
    );
    client.get(&url, Some(&payload), options).await
}

/// Resolve the empty path within a group, returning its root folder
pub async fn resolve_path_groups(
    client: &CanvasClient,
    group_id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/groups/{}/folders/by_path",
        client.context().base_api_url(),
        group_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Get the details for a folder in a course
///
/// Pass `"root"` as the id to get the context's root folder.
pub async fn get_folder_courses(
    client: &CanvasClient,
    course_id: &str,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/folders/{}",
        client.context().base_api_url(),
        course_id,
        id
    );
    client.get(&url, None, options).await
}

/// Get the details for a folder in a user's files
pub async fn get_folder_users(
    client: &CanvasClient,
    user_id: &str,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/users/{}/folders/{}",
        client.context().base_api_url(),
        user_id,
        id
    );
    client.get(&url, None, options).await
}

/// Get the details for a folder in a group
pub async fn get_folder_groups(
    client: &CanvasClient,
    group_id: &str,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/groups/{}/folders/{}",
        client.context().base_api_url(),
        group_id,
        id
    );
    client.get(&url, None, options).await
}

/// Get the details for a folder by bare id
pub async fn get_folder_folders(
    client: &CanvasClient,
    id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!("{}/v1/folders/{}", client.context().base_api_url(), id);
    client.get(&url, None, options).await
}

/// Update a folder
#[allow(clippy::too_many_arguments)]
pub async fn update_folder(
    client: &CanvasClient,
    id: &str,
    name: &str,
    parent_folder_id: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    position: u32,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);
    payload.set("position", position);

    let url = format!("{}/v1/folders/{}", client.context().base_api_url(), id);
    client.put(&url, Some(&payload), options).await
}

/// Create a folder in a course
///
/// The server rejects requests carrying both `parent_folder_id` and
/// `parent_folder_path`; when neither selects a parent it falls back to a
/// default folder.
#[allow(clippy::too_many_arguments)]
pub async fn create_folder_courses(
    client: &CanvasClient,
    course_id: &str,
    name: &str,
    parent_folder_id: &str,
    parent_folder_path: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    position: u32,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("parent_folder_path", parent_folder_path);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);
    payload.set("position", position);

    let url = format!(
        "{}/v1/courses/{}/folders",
        client.context().base_api_url(),
        course_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Create a folder in a user's files
#[allow(clippy::too_many_arguments)]
pub async fn create_folder_users(
    client: &CanvasClient,
    user_id: &str,
    name: &str,
    parent_folder_id: &str,
    parent_folder_path: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    position: u32,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("parent_folder_path", parent_folder_path);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);
    payload.set("position", position);

    let url = format!(
        "{}/v1/users/{}/folders",
        client.context().base_api_url(),
        user_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Create a folder in a group
#[allow(clippy::too_many_arguments)]
pub async fn create_folder_groups(
    client: &CanvasClient,
    group_id: &str,
    name: &str,
    parent_folder_id: &str,
    parent_folder_path: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    position: u32,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("parent_folder_path", parent_folder_path);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);
    payload.set("position", position);

    let url = format!(
        "{}/v1/groups/{}/folders",
        client.context().base_api_url(),
        group_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Create a folder inside another folder
#[allow(clippy::too_many_arguments)]
pub async fn create_folder_folders(
    client: &CanvasClient,
    folder_id: &str,
    name: &str,
    parent_folder_id: &str,
    parent_folder_path: &str,
    lock_at: DateTime<Utc>,
    unlock_at: DateTime<Utc>,
    locked: bool,
    hidden: bool,
    position: u32,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("name", name);
    payload.set("parent_folder_id", parent_folder_id);
    payload.set("parent_folder_path", parent_folder_path);
    payload.set("lock_at", lock_at);
    payload.set("unlock_at", unlock_at);
    payload.set("locked", locked);
    payload.set("hidden", hidden);
    payload.set("position", position);

    let url = format!(
        "{}/v1/folders/{}/folders",
        client.context().base_api_url(),
        folder_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Remove a folder
///
/// Only empty folders can be deleted unless `force` is set.
pub async fn delete_folder(
    client: &CanvasClient,
    id: &str,
    force: bool,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let mut payload = Payload::new();
    payload.set("force", force);

    let url = format!("{}/v1/folders/{}", client.context().base_api_url(), id);
    client.delete(&url, Some(&payload), options).await
}

/// Start the upload of a file into a folder
///
/// This is the first step of the upload workflow; the response tells the
/// caller where to send the actual bytes. Requires the "Manage Files"
/// permission on the course or group owning the folder.
pub async fn upload_file(
    client: &CanvasClient,
    folder_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/folders/{}/files",
        client.context().base_api_url(),
        folder_id
    );
    client.post(&url, None, options).await
}
