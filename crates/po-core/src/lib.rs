//! # PO Core
//!
//! Core domain types for the PO Manager REST API.
//!
//! This crate contains pure data definitions with no I/O dependencies:
//! - Endpoint descriptors (method + relative path)
//! - Typed request and response schemas
//! - Error definitions
//!
//! ## Design Principles
//!
//! - **Pure Data**: Nothing here touches the network
//! - **Wire-Exact**: Paths render with the trailing slash the server router expects
//! - **Pass-Through Friendly**: Payload schemas omit unset fields instead of inventing defaults

pub mod endpoints;
pub mod errors;
pub mod models;

// Re-export commonly used types
pub use endpoints::{Action, ApiPath, Endpoint, HttpMethod, Resource};
pub use errors::{CoreError, Result};
pub use models::{
    Assessment, AssessmentToLoMapping, AssessmentType, ChatReply, ChatRequest, Course,
    CourseDetail, Grade, LearningOutcome, LoToPoMapping, NewAssessment, NewAssessmentToLoMapping,
    NewCourse, NewGrade, NewLearningOutcome, NewLoToPoMapping, NewProgramOutcome, NewStudent,
    PoScore, ProgramOutcome, Student, StudentPoScores, User,
};
