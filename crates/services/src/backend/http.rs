use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use wikiquiz_core::model::{HistoryStats, Quiz, QuizId, QuizSummary, UrlCheck};

use super::{QuizBackend, clamp_page};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::observer::{LogObserver, RequestObserver};
use crate::wire::{
    DeleteResponse, ErrorBody, HealthResponse, HistoryStatsDto, QuizResponse, QuizSummaryDto,
    UrlRequest, ValidateUrlResponse,
};

/// `QuizBackend` over the REST API.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
    observer: Arc<dyn RequestObserver>,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            config,
            observer: Arc::new(LogObserver),
        })
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&UrlRequest<'_>>,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        self.observer.on_request(method.as_str(), &url);

        let result = self.execute(method.clone(), &url, body).await;
        if let Err(err) = &result {
            self.observer.on_error(method.as_str(), &url, err);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&UrlRequest<'_>>,
    ) -> Result<T, ApiError> {
        let mut builder = self.client.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        self.observer.on_response(method.as_str(), url, status.as_u16());

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail_text());
            return Err(ApiError::Status { status, detail });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl QuizBackend for HttpBackend {
    async fn generate_quiz(&self, url: &str) -> Result<Quiz, ApiError> {
        let dto: QuizResponse = self
            .request(Method::POST, "/quiz/generate", Some(&UrlRequest { url }))
            .await?;
        Quiz::try_from(dto)
    }

    async fn validate_url(&self, url: &str) -> Result<UrlCheck, ApiError> {
        let dto: ValidateUrlResponse = self
            .request(Method::POST, "/quiz/validate-url", Some(&UrlRequest { url }))
            .await?;
        Ok(dto.into())
    }

    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError> {
        let dto: QuizResponse = self
            .request(Method::GET, &format!("/quiz/{id}"), None)
            .await?;
        Quiz::try_from(dto)
    }

    async fn list_history(&self, page: u32, limit: u32) -> Result<Vec<QuizSummary>, ApiError> {
        let (page, limit) = clamp_page(page, limit);
        let rows: Vec<QuizSummaryDto> = self
            .request(
                Method::GET,
                &format!("/history/?page={page}&limit={limit}"),
                None,
            )
            .await?;
        rows.into_iter().map(QuizSummary::try_from).collect()
    }

    async fn get_history_detail(&self, id: QuizId) -> Result<Quiz, ApiError> {
        let dto: QuizResponse = self
            .request(Method::GET, &format!("/history/{id}"), None)
            .await?;
        Quiz::try_from(dto)
    }

    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError> {
        let ack: DeleteResponse = self
            .request(Method::DELETE, &format!("/history/{id}"), None)
            .await?;
        log::debug!("delete acknowledged: {}", ack.message);
        Ok(())
    }

    async fn stats(&self) -> Result<HistoryStats, ApiError> {
        let dto: HistoryStatsDto = self
            .request(Method::GET, "/history/stats/summary", None)
            .await?;
        Ok(dto.into())
    }

    async fn health(&self) -> Result<bool, ApiError> {
        let dto: HealthResponse = self.request(Method::GET, "/health", None).await?;
        Ok(dto.status == "healthy")
    }
}
