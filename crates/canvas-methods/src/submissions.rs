//! Assignment submission endpoints
//!
//! Submitting work, listing and fetching submissions, grading and commenting
//! (singly or in bulk), gradeable-student listings, and read/unread state.
//! Every operation exists twice, addressed through a course or through a
//! section; the bindings carry the context name as a suffix.

use canvas_core::{validate_attr_is_acceptable, Payload};
use canvas_http::{CanvasClient, CanvasHttpError, RequestOptions};
use reqwest::Response;

const SUBMISSION_TYPES: &[&str] = &[
    "online_text_entry",
    "online_url",
    "online_upload",
    "media_recording",
    "basic_lti_launch",
];
const MEDIA_COMMENT_TYPES: &[&str] = &["audio", "video"];
const LIST_INCLUDE_TYPES: &[&str] = &[
    "submission_history",
    "submission_comments",
    "rubric_assessment",
    "assignment",
    "visibility",
    "course",
    "user",
    "group",
];
const MULTI_INCLUDE_TYPES: &[&str] = &[
    "submission_history",
    "submission_comments",
    "rubric_assessment",
    "assignment",
    "total_scores",
    "visibility",
    "course",
    "user",
];
const SINGLE_INCLUDE_TYPES: &[&str] = &[
    "submission_history",
    "submission_comments",
    "rubric_assessment",
    "visibility",
    "course",
    "user",
];
const ORDER_TYPES: &[&str] = &["id", "graded_at"];
const ORDER_DIRECTION_TYPES: &[&str] = &["ascending", "descending"];

/// Submit an assignment through its course
///
/// The caller must be enrolled as a student. `submission_type` decides which
/// of the other submission parameters the server reads: `online_text_entry`
/// uses `body`, `online_url` and `basic_lti_launch` use `url`,
/// `online_upload` uses `file_ids`, `media_recording` uses the media comment
/// pair. The assignment's own allowed submission types must include the one
/// given or the server answers 400.
///
/// # Errors
///
/// Fails before any request when `submission_submission_type` or
/// `submission_media_comment_type` is not in its acceptable set.
#[allow(clippy::too_many_arguments)]
pub async fn submit_assignment_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    submission_submission_type: &str,
    comment_text_comment: Option<&str>,
    submission_body: Option<&str>,
    submission_url: Option<&str>,
    submission_file_ids: Option<&[&str]>,
    submission_media_comment_id: Option<&str>,
    submission_media_comment_type: Option<&str>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(Some(submission_submission_type), SUBMISSION_TYPES)?;
    validate_attr_is_acceptable(submission_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("comment[text_comment]", comment_text_comment);
    payload.set("submission[submission_type]", submission_submission_type);
    payload.set_opt("submission[body]", submission_body);
    payload.set_opt("submission[url]", submission_url);
    payload.set_opt("submission[file_ids]", submission_file_ids);
    payload.set_opt("submission[media_comment_id]", submission_media_comment_id);
    payload.set_opt("submission[media_comment_type]", submission_media_comment_type);

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions",
        client.context().base_api_url(),
        course_id,
        assignment_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Submit an assignment through its section
///
/// Same parameters and validation as [`submit_assignment_courses`].
#[allow(clippy::too_many_arguments)]
pub async fn submit_assignment_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    submission_submission_type: &str,
    comment_text_comment: Option<&str>,
    submission_body: Option<&str>,
    submission_url: Option<&str>,
    submission_file_ids: Option<&[&str]>,
    submission_media_comment_id: Option<&str>,
    submission_media_comment_type: Option<&str>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(Some(submission_submission_type), SUBMISSION_TYPES)?;
    validate_attr_is_acceptable(submission_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("comment[text_comment]", comment_text_comment);
    payload.set("submission[submission_type]", submission_submission_type);
    payload.set_opt("submission[body]", submission_body);
    payload.set_opt("submission[url]", submission_url);
    payload.set_opt("submission[file_ids]", submission_file_ids);
    payload.set_opt("submission[media_comment_id]", submission_media_comment_id);
    payload.set_opt("submission[media_comment_type]", submission_media_comment_type);

    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions",
        client.context().base_api_url(),
        section_id,
        assignment_id
    );
    client.post(&url, Some(&payload), options).await
}

/// List all submissions for an assignment, through its course
///
/// `grouped` groups the response by student groups.
pub async fn list_assignment_submissions_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    include: Option<&[&str]>,
    grouped: Option<bool>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(include.unwrap_or_default(), LIST_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("include", include);
    payload.set_opt("grouped", grouped);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions",
        client.context().base_api_url(),
        course_id,
        assignment_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List all submissions for an assignment, through its section
pub async fn list_assignment_submissions_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    include: Option<&[&str]>,
    grouped: Option<bool>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(include.unwrap_or_default(), LIST_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("include", include);
    payload.set_opt("grouped", grouped);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions",
        client.context().base_api_url(),
        section_id,
        assignment_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List submissions for a set of students and assignments in a course
///
/// With `student_ids` omitted, returns the calling user's own submissions;
/// students may only list their own, observers only those of associated
/// students. The special id `"all"` covers every student in the course.
/// Omitting `assignment_ids` returns submissions for all assignments.
///
/// # Errors
///
/// Fails before any request when `order`, `order_direction`, or an `include`
/// element is not in its acceptable set.
#[allow(clippy::too_many_arguments)]
pub async fn list_submissions_for_multiple_assignments_courses(
    client: &CanvasClient,
    course_id: &str,
    student_ids: Option<&[&str]>,
    assignment_ids: Option<&[&str]>,
    grouped: Option<bool>,
    grading_period_id: Option<u64>,
    order: Option<&str>,
    order_direction: Option<&str>,
    include: Option<&[&str]>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(order, ORDER_TYPES)?;
    validate_attr_is_acceptable(order_direction, ORDER_DIRECTION_TYPES)?;
    validate_attr_is_acceptable(include.unwrap_or_default(), MULTI_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("student_ids", student_ids);
    payload.set_opt("assignment_ids", assignment_ids);
    payload.set_opt("grouped", grouped);
    payload.set_opt("grading_period_id", grading_period_id);
    payload.set_opt("order", order);
    payload.set_opt("order_direction", order_direction);
    payload.set_opt("include", include);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/students/submissions",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List submissions for a set of students and assignments in a section
#[allow(clippy::too_many_arguments)]
pub async fn list_submissions_for_multiple_assignments_sections(
    client: &CanvasClient,
    section_id: &str,
    student_ids: Option<&[&str]>,
    assignment_ids: Option<&[&str]>,
    grouped: Option<bool>,
    grading_period_id: Option<u64>,
    order: Option<&str>,
    order_direction: Option<&str>,
    include: Option<&[&str]>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());
    validate_attr_is_acceptable(order, ORDER_TYPES)?;
    validate_attr_is_acceptable(order_direction, ORDER_DIRECTION_TYPES)?;
    validate_attr_is_acceptable(include.unwrap_or_default(), MULTI_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("student_ids", student_ids);
    payload.set_opt("assignment_ids", assignment_ids);
    payload.set_opt("grouped", grouped);
    payload.set_opt("grading_period_id", grading_period_id);
    payload.set_opt("order", order);
    payload.set_opt("order_direction", order_direction);
    payload.set_opt("include", include);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/sections/{}/students/submissions",
        client.context().base_api_url(),
        section_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Get a single user's submission for an assignment, through its course
pub async fn get_single_submission_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    user_id: &str,
    include: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(include.unwrap_or_default(), SINGLE_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("include", include);

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/{}",
        client.context().base_api_url(),
        course_id,
        assignment_id,
        user_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Get a single user's submission for an assignment, through its section
pub async fn get_single_submission_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    user_id: &str,
    include: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(include.unwrap_or_default(), SINGLE_INCLUDE_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("include", include);

    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/{}",
        client.context().base_api_url(),
        section_id,
        assignment_id,
        user_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Start the upload of a submission file, through the course
///
/// First step of the upload workflow; the response tells the caller where to
/// send the actual bytes.
pub async fn upload_file_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/{}/files",
        client.context().base_api_url(),
        course_id,
        assignment_id,
        user_id
    );
    client.post(&url, None, options).await
}

/// Start the upload of a submission file, through the section
pub async fn upload_file_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/{}/files",
        client.context().base_api_url(),
        section_id,
        assignment_id,
        user_id
    );
    client.post(&url, None, options).await
}

/// Grade or comment on one submission, through its course
///
/// `submission_posted_grade` takes points, a percentage, a letter grade, or
/// `"pass"`/`"fail"` depending on the assignment's grading type;
/// `submission_excuse` excuses the assignment instead. `rubric_assessment`
/// is an open structure and passed through opaquely.
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_submission_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    user_id: &str,
    comment_text_comment: Option<&str>,
    comment_group_comment: Option<bool>,
    comment_media_comment_id: Option<&str>,
    comment_media_comment_type: Option<&str>,
    comment_file_ids: Option<&[&str]>,
    include_visibility: Option<&str>,
    submission_posted_grade: Option<&str>,
    submission_excuse: Option<bool>,
    rubric_assessment: Option<&str>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(comment_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("comment[text_comment]", comment_text_comment);
    payload.set_opt("comment[group_comment]", comment_group_comment);
    payload.set_opt("comment[media_comment_id]", comment_media_comment_id);
    payload.set_opt("comment[media_comment_type]", comment_media_comment_type);
    payload.set_opt("comment[file_ids]", comment_file_ids);
    payload.set_opt("include[visibility]", include_visibility);
    payload.set_opt("submission[posted_grade]", submission_posted_grade);
    payload.set_opt("submission[excuse]", submission_excuse);
    payload.set_opt("rubric_assessment", rubric_assessment);

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/{}",
        client.context().base_api_url(),
        course_id,
        assignment_id,
        user_id
    );
    client.put(&url, Some(&payload), options).await
}

/// Grade or comment on one submission, through its section
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_submission_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    user_id: &str,
    comment_text_comment: Option<&str>,
    comment_group_comment: Option<bool>,
    comment_media_comment_id: Option<&str>,
    comment_media_comment_type: Option<&str>,
    comment_file_ids: Option<&[&str]>,
    include_visibility: Option<&str>,
    submission_posted_grade: Option<&str>,
    submission_excuse: Option<bool>,
    rubric_assessment: Option<&str>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(comment_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt("comment[text_comment]", comment_text_comment);
    payload.set_opt("comment[group_comment]", comment_group_comment);
    payload.set_opt("comment[media_comment_id]", comment_media_comment_id);
    payload.set_opt("comment[media_comment_type]", comment_media_comment_type);
    payload.set_opt("comment[file_ids]", comment_file_ids);
    payload.set_opt("include[visibility]", include_visibility);
    payload.set_opt("submission[posted_grade]", submission_posted_grade);
    payload.set_opt("submission[excuse]", submission_excuse);
    payload.set_opt("rubric_assessment", rubric_assessment);

    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/{}",
        client.context().base_api_url(),
        section_id,
        assignment_id,
        user_id
    );
    client.put(&url, Some(&payload), options).await
}

/// List the students eligible to be graded for an assignment
pub async fn list_gradeable_students(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/gradeable_students",
        client.context().base_api_url(),
        course_id,
        assignment_id
    );
    client.get(&url, Some(&payload), options).await
}

/// List gradeable students across several assignments at once
pub async fn list_multiple_assignments_gradeable_students(
    client: &CanvasClient,
    course_id: &str,
    assignment_ids: Option<&[&str]>,
    per_page: Option<u32>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let per_page = per_page.unwrap_or_else(|| client.context().per_page());

    let mut payload = Payload::new();
    payload.set_opt("assignment_ids", assignment_ids);
    payload.set("per_page", per_page);

    let url = format!(
        "{}/v1/courses/{}/assignments/gradeable_students",
        client.context().base_api_url(),
        course_id
    );
    client.get(&url, Some(&payload), options).await
}

/// Grade or comment on several submissions across a course at once
///
/// The server answers with a `Progress` object to poll; grades are applied
/// asynchronously on its side.
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_multiple_submissions_courses_submissions(
    client: &CanvasClient,
    course_id: &str,
    grade_data_student_id_posted_grade: Option<&str>,
    grade_data_student_id_excuse: Option<bool>,
    grade_data_student_id_rubric_assessment: Option<&str>,
    grade_data_student_id_text_comment: Option<&str>,
    grade_data_student_id_group_comment: Option<bool>,
    grade_data_student_id_media_comment_id: Option<&str>,
    grade_data_student_id_media_comment_type: Option<&str>,
    grade_data_student_id_file_ids: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(grade_data_student_id_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt(
        "grade_data[student_id][posted_grade]",
        grade_data_student_id_posted_grade,
    );
    payload.set_opt("grade_data[student_id][excuse]", grade_data_student_id_excuse);
    payload.set_opt(
        "grade_data[student_id][rubric_assessment]",
        grade_data_student_id_rubric_assessment,
    );
    payload.set_opt(
        "grade_data[student_id][text_comment]",
        grade_data_student_id_text_comment,
    );
    payload.set_opt(
        "grade_data[student_id][group_comment]",
        grade_data_student_id_group_comment,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_id]",
        grade_data_student_id_media_comment_id,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_type]",
        grade_data_student_id_media_comment_type,
    );
    payload.set_opt(
        "grade_data[student_id][file_ids]",
        grade_data_student_id_file_ids,
    );

    let url = format!(
        "{}/v1/courses/{}/submissions/update_grades",
        client.context().base_api_url(),
        course_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Grade or comment on several submissions of one course assignment at once
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_multiple_submissions_courses_assignments(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    grade_data_student_id_posted_grade: Option<&str>,
    grade_data_student_id_excuse: Option<bool>,
    grade_data_student_id_rubric_assessment: Option<&str>,
    grade_data_student_id_text_comment: Option<&str>,
    grade_data_student_id_group_comment: Option<bool>,
    grade_data_student_id_media_comment_id: Option<&str>,
    grade_data_student_id_media_comment_type: Option<&str>,
    grade_data_student_id_file_ids: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(grade_data_student_id_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt(
        "grade_data[student_id][posted_grade]",
        grade_data_student_id_posted_grade,
    );
    payload.set_opt("grade_data[student_id][excuse]", grade_data_student_id_excuse);
    payload.set_opt(
        "grade_data[student_id][rubric_assessment]",
        grade_data_student_id_rubric_assessment,
    );
    payload.set_opt(
        "grade_data[student_id][text_comment]",
        grade_data_student_id_text_comment,
    );
    payload.set_opt(
        "grade_data[student_id][group_comment]",
        grade_data_student_id_group_comment,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_id]",
        grade_data_student_id_media_comment_id,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_type]",
        grade_data_student_id_media_comment_type,
    );
    payload.set_opt(
        "grade_data[student_id][file_ids]",
        grade_data_student_id_file_ids,
    );

    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/update_grades",
        client.context().base_api_url(),
        course_id,
        assignment_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Grade or comment on several submissions across a section at once
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_multiple_submissions_sections_submissions(
    client: &CanvasClient,
    section_id: &str,
    grade_data_student_id_posted_grade: Option<&str>,
    grade_data_student_id_excuse: Option<bool>,
    grade_data_student_id_rubric_assessment: Option<&str>,
    grade_data_student_id_text_comment: Option<&str>,
    grade_data_student_id_group_comment: Option<bool>,
    grade_data_student_id_media_comment_id: Option<&str>,
    grade_data_student_id_media_comment_type: Option<&str>,
    grade_data_student_id_file_ids: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(grade_data_student_id_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt(
        "grade_data[student_id][posted_grade]",
        grade_data_student_id_posted_grade,
    );
    payload.set_opt("grade_data[student_id][excuse]", grade_data_student_id_excuse);
    payload.set_opt(
        "grade_data[student_id][rubric_assessment]",
        grade_data_student_id_rubric_assessment,
    );
    payload.set_opt(
        "grade_data[student_id][text_comment]",
        grade_data_student_id_text_comment,
    );
    payload.set_opt(
        "grade_data[student_id][group_comment]",
        grade_data_student_id_group_comment,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_id]",
        grade_data_student_id_media_comment_id,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_type]",
        grade_data_student_id_media_comment_type,
    );
    payload.set_opt(
        "grade_data[student_id][file_ids]",
        grade_data_student_id_file_ids,
    );

    let url = format!(
        "{}/v1/sections/{}/submissions/update_grades",
        client.context().base_api_url(),
        section_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Grade or comment on several submissions of one section assignment at once
#[allow(clippy::too_many_arguments)]
pub async fn grade_or_comment_on_multiple_submissions_sections_assignments(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    grade_data_student_id_posted_grade: Option<&str>,
    grade_data_student_id_excuse: Option<bool>,
    grade_data_student_id_rubric_assessment: Option<&str>,
    grade_data_student_id_text_comment: Option<&str>,
    grade_data_student_id_group_comment: Option<bool>,
    grade_data_student_id_media_comment_id: Option<&str>,
    grade_data_student_id_media_comment_type: Option<&str>,
    grade_data_student_id_file_ids: Option<&[&str]>,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    validate_attr_is_acceptable(grade_data_student_id_media_comment_type, MEDIA_COMMENT_TYPES)?;

    let mut payload = Payload::new();
    payload.set_opt(
        "grade_data[student_id][posted_grade]",
        grade_data_student_id_posted_grade,
    );
    payload.set_opt("grade_data[student_id][excuse]", grade_data_student_id_excuse);
    payload.set_opt(
        "grade_data[student_id][rubric_assessment]",
        grade_data_student_id_rubric_assessment,
    );
    payload.set_opt(
        "grade_data[student_id][text_comment]",
        grade_data_student_id_text_comment,
    );
    payload.set_opt(
        "grade_data[student_id][group_comment]",
        grade_data_student_id_group_comment,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_id]",
        grade_data_student_id_media_comment_id,
    );
    payload.set_opt(
        "grade_data[student_id][media_comment_type]",
        grade_data_student_id_media_comment_type,
    );
    payload.set_opt(
        "grade_data[student_id][file_ids]",
        grade_data_student_id_file_ids,
    );

    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/update_grades",
        client.context().base_api_url(),
        section_id,
        assignment_id
    );
    client.post(&url, Some(&payload), options).await
}

/// Mark a submission as read, through its course
pub async fn mark_submission_as_read_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/{}/read",
        client.context().base_api_url(),
        course_id,
        assignment_id,
        user_id
    );
    client.put(&url, None, options).await
}

/// Mark a submission as read, through its section
pub async fn mark_submission_as_read_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/{}/read",
        client.context().base_api_url(),
        section_id,
        assignment_id,
        user_id
    );
    client.put(&url, None, options).await
}

/// Mark a submission as unread, through its course
pub async fn mark_submission_as_unread_courses(
    client: &CanvasClient,
    course_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/courses/{}/assignments/{}/submissions/{}/read",
        client.context().base_api_url(),
        course_id,
        assignment_id,
        user_id
    );
    client.delete(&url, None, options).await
}

/// Mark a submission as unread, through its section
pub async fn mark_submission_as_unread_sections(
    client: &CanvasClient,
    section_id: &str,
    assignment_id: &str,
    user_id: &str,
    options: RequestOptions,
) -> Result<Response, CanvasHttpError> {
    let url = format!(
        "{}/v1/sections/{}/assignments/{}/submissions/{}/read",
        client.context().base_api_url(),
        section_id,
        assignment_id,
        user_id
    );
    client.delete(&url, None, options).await
}
