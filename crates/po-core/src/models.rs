use crate::errors::{CoreError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Response schemas mirror the server serializers. Read-only convenience
// fields (`course_code`, `lo_code`, ...) default when a deployment omits them.

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub instructor: Option<i64>,
    #[serde(default)]
    pub instructor_name: Option<String>,
}

/// Course with its learning outcomes and assessments inlined (`courses/{id}/detail/`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CourseDetail {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub instructor: Option<i64>,
    #[serde(default)]
    pub learning_outcomes: Vec<LearningOutcome>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProgramOutcome {
    pub id: i64,
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LearningOutcome {
    pub id: i64,
    pub course: i64,
    #[serde(default)]
    pub course_code: String,
    pub code: String,
    pub description: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoToPoMapping {
    pub id: i64,
    pub learning_outcome: i64,
    #[serde(default)]
    pub lo_code: String,
    pub program_outcome: i64,
    #[serde(default)]
    pub po_code: String,
    pub contribution_weight: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssessmentToLoMapping {
    pub id: i64,
    pub assessment: i64,
    #[serde(default)]
    pub assessment_name: String,
    pub learning_outcome: i64,
    #[serde(default)]
    pub lo_code: String,
    pub contribution_weight: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub student_number: String,
    pub student_no: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    #[default]
    Quiz,
    Midterm,
    Final,
    Project,
    Homework,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 5] = [
        AssessmentType::Quiz,
        AssessmentType::Midterm,
        AssessmentType::Final,
        AssessmentType::Project,
        AssessmentType::Homework,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Quiz => "quiz",
            AssessmentType::Midterm => "midterm",
            AssessmentType::Final => "final",
            AssessmentType::Project => "project",
            AssessmentType::Homework => "homework",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        AssessmentType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "Unknown assessment type '{}', expected one of: quiz, midterm, final, project, homework",
                    s
                ))
            })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Assessment {
    pub id: i64,
    pub course: i64,
    #[serde(default)]
    pub course_code: String,
    pub name: String,
    #[serde(default)]
    pub assessment_type: AssessmentType,
    pub total_points: f64,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub learning_outcomes: Vec<i64>,
    #[serde(default)]
    pub learning_outcome_codes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub assessment: i64,
    #[serde(default)]
    pub assessment_name: String,
    pub student: i64,
    #[serde(default)]
    pub student_no: String,
    pub points: f64,
    /// Computed server-side as points / total_points * 100
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PoScore {
    pub po_code: String,
    #[serde(default)]
    pub po_description: String,
    pub score: f64,
}

/// Body of `students/{id}/po_scores/`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StudentPoScores {
    /// Student number, not the numeric id
    pub student: String,
    pub po_scores: Vec<PoScore>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

// Create payloads. Unset optionals are skipped so the server applies its
// own defaults.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewProgramOutcome {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewLearningOutcome {
    pub course: i64,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// `learning_outcome` may be left unset when posting to
/// `learning-outcomes/{id}/mappings/`; the server fills it from the path.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewLoToPoMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_outcome: Option<i64>,
    pub program_outcome: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewAssessmentToLoMapping {
    pub assessment: i64,
    pub learning_outcome: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewStudent {
    pub username: String,
    pub student_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewAssessment {
    pub course: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<AssessmentType>,
    pub total_points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub learning_outcomes: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewGrade {
    pub assessment: i64,
    pub student: i64,
    pub points: f64,
}
