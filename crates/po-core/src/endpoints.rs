use std::fmt;

/// HTTP verbs spoken by the PO Manager API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level collections registered under the API root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Courses,
    ProgramOutcomes,
    LearningOutcomes,
    LoToPoMappings,
    Students,
    Assessments,
    AssessmentToLoMappings,
    Grades,
    Chat,
}

impl Resource {
    /// Path segment as registered on the server router
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Courses => "courses",
            Resource::ProgramOutcomes => "program-outcomes",
            Resource::LearningOutcomes => "learning-outcomes",
            Resource::LoToPoMappings => "mappings",
            Resource::Students => "students",
            Resource::Assessments => "assessments",
            Resource::AssessmentToLoMappings => "assessment-to-lo-mappings",
            Resource::Grades => "grades",
            Resource::Chat => "chat",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail routes hanging off a single item (`courses/{id}/detail/` and friends)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Detail,
    LearningOutcomes,
    Mappings,
    PoScores,
    Grades,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Detail => "detail",
            Action::LearningOutcomes => "learning_outcomes",
            Action::Mappings => "mappings",
            Action::PoScores => "po_scores",
            Action::Grades => "grades",
        }
    }
}

/// Path relative to the API root.
///
/// Kept as raw segments so the transport layer can percent-encode each one
/// independently; an identifier containing `/` stays a single segment.
/// Rendering always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// `resource/`
    pub fn collection(resource: Resource) -> Self {
        Self {
            segments: vec![resource.as_str().to_string()],
        }
    }

    /// `resource/{id}/`
    pub fn item(resource: Resource, id: impl fmt::Display) -> Self {
        Self {
            segments: vec![resource.as_str().to_string(), id.to_string()],
        }
    }

    /// Append a detail route, e.g. `courses/{id}/` -> `courses/{id}/detail/`
    pub fn with_action(mut self, action: Action) -> Self {
        self.segments.push(action.as_str().to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}/", segment)?;
        }
        Ok(())
    }
}

/// Method + path pair describing one server operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: ApiPath,
}

impl Endpoint {
    pub fn new(method: HttpMethod, path: ApiPath) -> Self {
        Self { method, path }
    }

    pub fn get(path: ApiPath) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: ApiPath) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn patch(path: ApiPath) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: ApiPath) -> Self {
        Self::new(HttpMethod::Delete, path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
