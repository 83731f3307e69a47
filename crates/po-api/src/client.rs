use crate::config::{ApiConfig, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::errors::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use log::{debug, error, trace};
use po_core::{Action, ApiPath, ChatRequest, Endpoint, Resource};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Display};
use std::sync::Arc;

/// HTTP client for the PO Manager REST API.
///
/// One method per server operation. Every call sends exactly one request and
/// hands back the raw [`ApiResponse`], non-2xx statuses included; only a
/// failed exchange produces an error. Cloning is cheap and clones share the
/// same configuration and connection pool.
#[derive(Clone)]
pub struct PoApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for PoApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoApiClient")
            .field("base_url", &self.config.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl PoApiClient {
    /// Create a new API client over reqwest
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        debug!("Creating PoApiClient");
        debug!("  Base URL: {}", base_url);

        let config = ClientConfig::new(&base_url)?;
        Ok(Self::with_transport(config, ReqwestTransport::new()))
    }

    /// Create API client with custom base URL
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        debug!("Creating PoApiClient with custom base URL: {}", base_url);
        Self::new(Some(base_url.to_string()))
    }

    /// Create API client from environment variable, falling back to the default base URL
    pub fn from_env() -> Result<Self> {
        debug!("Creating PoApiClient from environment variable");
        let base_url = std::env::var(BASE_URL_ENV).ok();

        if base_url.is_some() {
            debug!("Found {} in environment", BASE_URL_ENV);
        }

        Self::new(base_url)
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
        C::Error: From<ApiError>,
    {
        debug!("Creating PoApiClient from config");
        let base_url = config.get_base_url()?;

        if let Some(ref url) = base_url {
            debug!("Got custom base URL from config: {}", url);
        } else {
            debug!("Using default base URL");
        }

        Ok(Self::new(base_url)?)
    }

    /// Create API client over any transport (mock, recording, custom reqwest setup)
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the endpoint and hand one request to the transport
    async fn execute(&self, endpoint: Endpoint, body: Option<Value>) -> Result<ApiResponse> {
        let url = self.config.url_for(&endpoint.path)?;

        debug!("HTTP {} request to: {}", endpoint.method, url);
        trace!("Request headers: {:?}", self.config.default_headers());
        if let Some(ref body) = body {
            trace!("Request body: {}", body);
        }

        let request = ApiRequest {
            method: endpoint.method,
            url,
            headers: self.config.default_headers().to_vec(),
            body,
        };

        let response = self.transport.send(request).await.map_err(|e| {
            error!("{} failed: {}", endpoint, e);
            ApiError::Transport(e)
        })?;

        debug!("Response status: {}", response.status);

        Ok(response)
    }

    async fn get(&self, path: ApiPath) -> Result<ApiResponse> {
        self.execute(Endpoint::get(path), None).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: ApiPath, data: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(data)?;
        self.execute(Endpoint::post(path), Some(body)).await
    }

    async fn patch<B: Serialize + ?Sized>(&self, path: ApiPath, data: &B) -> Result<ApiResponse> {
        let body = serde_json::to_value(data)?;
        self.execute(Endpoint::patch(path), Some(body)).await
    }

    async fn delete(&self, path: ApiPath) -> Result<ApiResponse> {
        self.execute(Endpoint::delete(path), None).await
    }

    // Courses

    pub async fn get_courses(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::Courses)).await
    }

    pub async fn get_course(&self, id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Courses, id)).await
    }

    /// Course with learning outcomes and assessments inlined
    pub async fn get_course_detail(&self, id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Courses, id).with_action(Action::Detail))
            .await
    }

    pub async fn create_course<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::Courses), data).await
    }

    pub async fn delete_course(&self, id: impl Display) -> Result<ApiResponse> {
        self.delete(ApiPath::item(Resource::Courses, id)).await
    }

    /// Learning outcomes belonging to one course
    pub async fn get_course_learning_outcomes(&self, id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Courses, id).with_action(Action::LearningOutcomes))
            .await
    }

    // Program outcomes

    pub async fn get_program_outcomes(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::ProgramOutcomes)).await
    }

    pub async fn create_program_outcome<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::ProgramOutcomes), data)
            .await
    }

    pub async fn update_program_outcome<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<ApiResponse> {
        self.patch(ApiPath::item(Resource::ProgramOutcomes, id), data)
            .await
    }

    pub async fn delete_program_outcome(&self, id: impl Display) -> Result<ApiResponse> {
        self.delete(ApiPath::item(Resource::ProgramOutcomes, id)).await
    }

    // Learning outcomes

    pub async fn get_learning_outcomes(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::LearningOutcomes)).await
    }

    pub async fn get_learning_outcome(&self, id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::LearningOutcomes, id)).await
    }

    pub async fn create_learning_outcome<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::LearningOutcomes), data)
            .await
    }

    pub async fn update_learning_outcome<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<ApiResponse> {
        self.patch(ApiPath::item(Resource::LearningOutcomes, id), data)
            .await
    }

    pub async fn delete_learning_outcome(&self, id: impl Display) -> Result<ApiResponse> {
        self.delete(ApiPath::item(Resource::LearningOutcomes, id))
            .await
    }

    /// PO mappings of a single learning outcome
    pub async fn get_lo_mappings(&self, lo_id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::LearningOutcomes, lo_id).with_action(Action::Mappings))
            .await
    }

    /// The server sets `learning_outcome` from `lo_id`, overriding the payload
    pub async fn create_lo_mapping<B: Serialize + ?Sized>(
        &self,
        lo_id: impl Display,
        data: &B,
    ) -> Result<ApiResponse> {
        self.post(
            ApiPath::item(Resource::LearningOutcomes, lo_id).with_action(Action::Mappings),
            data,
        )
        .await
    }

    // LO -> PO mappings

    pub async fn get_mappings(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::LoToPoMappings)).await
    }

    /// Same request as [`get_mappings`](Self::get_mappings)
    pub async fn get_lo_to_po_mappings(&self) -> Result<ApiResponse> {
        self.get_mappings().await
    }

    pub async fn create_mapping<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::LoToPoMappings), data)
            .await
    }

    /// Same request as [`create_mapping`](Self::create_mapping)
    pub async fn create_lo_to_po_mapping<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResponse> {
        self.create_mapping(data).await
    }

    pub async fn update_mapping<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<ApiResponse> {
        self.patch(ApiPath::item(Resource::LoToPoMappings, id), data)
            .await
    }

    pub async fn delete_mapping(&self, id: impl Display) -> Result<ApiResponse> {
        self.delete(ApiPath::item(Resource::LoToPoMappings, id)).await
    }

    // Students

    pub async fn get_students(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::Students)).await
    }

    pub async fn get_student(&self, id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Students, id)).await
    }

    pub async fn create_student<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::Students), data).await
    }

    /// Weighted program outcome scores computed by the server
    pub async fn get_student_po_scores(&self, student_id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Students, student_id).with_action(Action::PoScores))
            .await
    }

    pub async fn get_student_grades(&self, student_id: impl Display) -> Result<ApiResponse> {
        self.get(ApiPath::item(Resource::Students, student_id).with_action(Action::Grades))
            .await
    }

    // Assessments

    pub async fn get_assessments(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::Assessments)).await
    }

    pub async fn create_assessment<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::Assessments), data)
            .await
    }

    // Assessment -> LO mappings

    pub async fn get_assessment_to_lo_mappings(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::AssessmentToLoMappings))
            .await
    }

    pub async fn create_assessment_to_lo_mapping<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::AssessmentToLoMappings), data)
            .await
    }

    pub async fn update_assessment_to_lo_mapping<B: Serialize + ?Sized>(
        &self,
        id: impl Display,
        data: &B,
    ) -> Result<ApiResponse> {
        self.patch(ApiPath::item(Resource::AssessmentToLoMappings, id), data)
            .await
    }

    pub async fn delete_assessment_to_lo_mapping(&self, id: impl Display) -> Result<ApiResponse> {
        self.delete(ApiPath::item(Resource::AssessmentToLoMappings, id))
            .await
    }

    // Grades

    pub async fn get_grades(&self) -> Result<ApiResponse> {
        self.get(ApiPath::collection(Resource::Grades)).await
    }

    pub async fn create_grade<B: Serialize + ?Sized>(&self, data: &B) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::Grades), data).await
    }

    // Chat

    /// Ask the course assistant; the message is wrapped as `{"message": ...}`
    pub async fn chat_with_gemini(&self, message: &str) -> Result<ApiResponse> {
        self.post(ApiPath::collection(Resource::Chat), &ChatRequest::new(message))
            .await
    }
}
