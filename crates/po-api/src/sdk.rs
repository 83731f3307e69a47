use crate::client::PoApiClient;
use crate::errors::{Result, StatusError};
use crate::transport::ApiResponse;
use log::{debug, error};
use po_core::{
    Assessment, AssessmentToLoMapping, ChatReply, Course, CourseDetail, Grade, LearningOutcome,
    LoToPoMapping, NewAssessment, NewAssessmentToLoMapping, NewCourse, NewGrade,
    NewLearningOutcome, NewLoToPoMapping, NewProgramOutcome, NewStudent, ProgramOutcome, Student,
    StudentPoScores,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;

/// Typed front end over [`PoApiClient`].
///
/// Same one-request-per-call behaviour, but non-2xx answers become
/// [`StatusError`]s and bodies are decoded into the `po_core` schemas.
#[derive(Debug, Clone)]
pub struct PoManager {
    api_client: PoApiClient,
}

impl PoManager {
    pub fn new(api_client: PoApiClient) -> Self {
        Self { api_client }
    }

    /// Create from environment variable
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(PoApiClient::from_env()?))
    }

    /// The raw facade, for callers that need status codes or headers
    pub fn client(&self) -> &PoApiClient {
        &self.api_client
    }

    /// List courses
    pub async fn courses(&self) -> Result<Vec<Course>> {
        decode(self.api_client.get_courses().await?)
    }

    pub async fn course(&self, id: impl Display) -> Result<Course> {
        decode(self.api_client.get_course(id).await?)
    }

    pub async fn course_detail(&self, id: impl Display) -> Result<CourseDetail> {
        decode(self.api_client.get_course_detail(id).await?)
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Course> {
        decode(self.api_client.create_course(course).await?)
    }

    pub async fn delete_course(&self, id: impl Display) -> Result<()> {
        expect_empty(self.api_client.delete_course(id).await?)
    }

    pub async fn course_learning_outcomes(&self, id: impl Display) -> Result<Vec<LearningOutcome>> {
        decode(self.api_client.get_course_learning_outcomes(id).await?)
    }

    /// List program outcomes
    pub async fn program_outcomes(&self) -> Result<Vec<ProgramOutcome>> {
        decode(self.api_client.get_program_outcomes().await?)
    }

    pub async fn create_program_outcome(&self, outcome: &NewProgramOutcome) -> Result<ProgramOutcome> {
        decode(self.api_client.create_program_outcome(outcome).await?)
    }

    /// Partial update; `changes` is sent as-is
    pub async fn update_program_outcome<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        changes: &B,
    ) -> Result<ProgramOutcome> {
        decode(self.api_client.update_program_outcome(id, changes).await?)
    }

    pub async fn delete_program_outcome(&self, id: impl Display) -> Result<()> {
        expect_empty(self.api_client.delete_program_outcome(id).await?)
    }

    /// List learning outcomes
    pub async fn learning_outcomes(&self) -> Result<Vec<LearningOutcome>> {
        decode(self.api_client.get_learning_outcomes().await?)
    }

    pub async fn learning_outcome(&self, id: impl Display) -> Result<LearningOutcome> {
        decode(self.api_client.get_learning_outcome(id).await?)
    }

    pub async fn create_learning_outcome(
        &self,
        outcome: &NewLearningOutcome,
    ) -> Result<LearningOutcome> {
        decode(self.api_client.create_learning_outcome(outcome).await?)
    }

    pub async fn update_learning_outcome<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        changes: &B,
    ) -> Result<LearningOutcome> {
        decode(self.api_client.update_learning_outcome(id, changes).await?)
    }

    pub async fn delete_learning_outcome(&self, id: impl Display) -> Result<()> {
        expect_empty(self.api_client.delete_learning_outcome(id).await?)
    }

    pub async fn lo_mappings(&self, lo_id: impl Display) -> Result<Vec<LoToPoMapping>> {
        decode(self.api_client.get_lo_mappings(lo_id).await?)
    }

    pub async fn create_lo_mapping(
        &self,
        lo_id: impl Display,
        mapping: &NewLoToPoMapping,
    ) -> Result<LoToPoMapping> {
        decode(self.api_client.create_lo_mapping(lo_id, mapping).await?)
    }

    /// List every LO -> PO mapping
    pub async fn lo_to_po_mappings(&self) -> Result<Vec<LoToPoMapping>> {
        decode(self.api_client.get_mappings().await?)
    }

    pub async fn create_lo_to_po_mapping(&self, mapping: &NewLoToPoMapping) -> Result<LoToPoMapping> {
        decode(self.api_client.create_mapping(mapping).await?)
    }

    pub async fn update_lo_to_po_mapping<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        changes: &B,
    ) -> Result<LoToPoMapping> {
        decode(self.api_client.update_mapping(id, changes).await?)
    }

    pub async fn delete_lo_to_po_mapping(&self, id: impl Display) -> Result<()> {
        expect_empty(self.api_client.delete_mapping(id).await?)
    }

    /// List students
    pub async fn students(&self) -> Result<Vec<Student>> {
        decode(self.api_client.get_students().await?)
    }

    pub async fn student(&self, id: impl Display) -> Result<Student> {
        decode(self.api_client.get_student(id).await?)
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<Student> {
        decode(self.api_client.create_student(student).await?)
    }

    pub async fn student_po_scores(&self, student_id: impl Display) -> Result<StudentPoScores> {
        decode(self.api_client.get_student_po_scores(student_id).await?)
    }

    pub async fn student_grades(&self, student_id: impl Display) -> Result<Vec<Grade>> {
        decode(self.api_client.get_student_grades(student_id).await?)
    }

    /// List assessments
    pub async fn assessments(&self) -> Result<Vec<Assessment>> {
        decode(self.api_client.get_assessments().await?)
    }

    pub async fn create_assessment(&self, assessment: &NewAssessment) -> Result<Assessment> {
        decode(self.api_client.create_assessment(assessment).await?)
    }

    /// List assessment -> LO mappings
    pub async fn assessment_to_lo_mappings(&self) -> Result<Vec<AssessmentToLoMapping>> {
        decode(self.api_client.get_assessment_to_lo_mappings().await?)
    }

    pub async fn create_assessment_to_lo_mapping(
        &self,
        mapping: &NewAssessmentToLoMapping,
    ) -> Result<AssessmentToLoMapping> {
        decode(self.api_client.create_assessment_to_lo_mapping(mapping).await?)
    }

    pub async fn update_assessment_to_lo_mapping<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        changes: &B,
    ) -> Result<AssessmentToLoMapping> {
        decode(
            self.api_client
                .update_assessment_to_lo_mapping(id, changes)
                .await?,
        )
    }

    pub async fn delete_assessment_to_lo_mapping(&self, id: impl Display) -> Result<()> {
        expect_empty(self.api_client.delete_assessment_to_lo_mapping(id).await?)
    }

    /// List grades
    pub async fn grades(&self) -> Result<Vec<Grade>> {
        decode(self.api_client.get_grades().await?)
    }

    pub async fn create_grade(&self, grade: &NewGrade) -> Result<Grade> {
        decode(self.api_client.create_grade(grade).await?)
    }

    /// Send a chat message and return the assistant's answer text
    pub async fn chat(&self, message: &str) -> Result<String> {
        let reply: ChatReply = decode(self.api_client.chat_with_gemini(message).await?)?;
        Ok(reply.response)
    }
}

/// Turn non-2xx answers into errors
fn ensure_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        debug!("Request successful with status: {}", response.status);
        return Ok(response);
    }

    error!("Request failed with status: {}", response.status);
    debug!("Error response body: {}", response.body);

    let status_error = match response.status {
        400 => StatusError::BadRequest(response.body),
        401 => StatusError::AuthenticationFailed,
        403 => StatusError::Forbidden,
        404 => StatusError::NotFound,
        503 => StatusError::ServiceUnavailable,
        status => StatusError::HttpError {
            status,
            message: response.body,
        },
    };

    Err(status_error.into())
}

fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T> {
    let response = ensure_success(response)?;
    Ok(response.json()?)
}

fn expect_empty(response: ApiResponse) -> Result<()> {
    ensure_success(response).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;

    #[test]
    fn test_ensure_success_passes_2xx() {
        let response = ApiResponse::new(201, "{}");
        assert!(ensure_success(response).is_ok());
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (401, StatusError::AuthenticationFailed),
            (403, StatusError::Forbidden),
            (404, StatusError::NotFound),
            (503, StatusError::ServiceUnavailable),
        ];
        for (status, expected) in cases {
            match ensure_success(ApiResponse::new(status, "")) {
                Err(ApiError::Status(actual)) => assert_eq!(actual, expected),
                other => panic!("unexpected result for {}: {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_bad_request_keeps_body() {
        let body = r#"{"code": ["course with this code already exists."]}"#;
        match ensure_success(ApiResponse::new(400, body)) {
            Err(ApiError::Status(StatusError::BadRequest(message))) => assert_eq!(message, body),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_other_status_is_generic_http_error() {
        match ensure_success(ApiResponse::new(500, "boom")) {
            Err(ApiError::Status(StatusError::HttpError { status, message })) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_reports_malformed_body() {
        let result: Result<Vec<Course>> = decode(ApiResponse::new(200, "not json"));
        assert!(matches!(result, Err(ApiError::Json(_))));
    }
}
