use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::SearchResult;
use crate::models::requests::{DetectFacesParams, SearchFaceParams};
use crate::models::{DetectFacesResult, ImageInput, MatchedPerson, SearchFaceResult, SearchOptions};
use crate::services::rpc::{check_for_errors, encode_request, into_result};
use crate::services::transport::Transport;

pub const METHOD_RATE_LIMIT: &str = "rateLimit";
pub const METHOD_DETECT_FACES: &str = "detectFaces";
pub const METHOD_SEARCH_FACE: &str = "searchFace";

/// Request pipeline shared by the blocking and async clients
///
/// # Pipeline Stages
/// 1. Resolve the image (download it when given a URL)
/// 2. `detectFaces` on the base64-encoded image
/// 3. `searchFace` with the first detected face
/// 4. Map the returned profiles to `MatchedPerson`
#[derive(Debug)]
pub struct SearchCore<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> SearchCore<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one RPC call and return the error-checked body
    pub async fn call_raw<P: Serialize>(&self, method: &str, params: Option<P>) -> SearchResult<Value> {
        let body = encode_request(&self.config, method, params)?;

        tracing::debug!("Calling {} at {}", method, self.config.endpoint);

        let reply = self
            .transport
            .post_rpc(&self.config.endpoint, &self.config.token, body)
            .await?;

        check_for_errors(reply)
    }

    /// Send one RPC call and return its `result` member
    pub async fn call<P: Serialize>(&self, method: &str, params: Option<P>) -> SearchResult<Value> {
        let body = self.call_raw(method, params).await?;
        into_result(body, method)
    }

    /// Token and quota check run when a client is constructed
    pub async fn probe(&self) -> SearchResult<()> {
        self.call_raw::<Value>(METHOD_RATE_LIMIT, None).await?;
        Ok(())
    }

    /// Current quota information as reported by `rateLimit`
    pub async fn rate_limit(&self) -> SearchResult<Value> {
        self.call::<Value>(METHOD_RATE_LIMIT, None).await
    }

    pub async fn load_image(&self, image: ImageInput) -> SearchResult<Vec<u8>> {
        match image {
            ImageInput::Bytes(bytes) => Ok(bytes),
            ImageInput::Url(url) => self.transport.fetch_image(&url).await,
        }
    }

    pub async fn detect_faces(&self, image: &[u8]) -> SearchResult<DetectFacesResult> {
        let encoded = STANDARD.encode(image);
        let result = self
            .call(METHOD_DETECT_FACES, Some(DetectFacesParams { image: &encoded }))
            .await?;

        let detected = DetectFacesResult::from_result(result)?;
        tracing::debug!("Detected {} face(s)", detected.faces.len());

        Ok(detected)
    }

    pub async fn search_face(
        &self,
        detected: &DetectFacesResult,
        options: &SearchOptions,
    ) -> SearchResult<Vec<MatchedPerson>> {
        let params = SearchFaceParams {
            image: &detected.image,
            face: detected.first_face()?,
            source: &options.source,
            hidden: options.show_hidden,
            results: options.results_limit,
            lang: &self.config.lang,
        };

        let result = self.call(METHOD_SEARCH_FACE, Some(params)).await?;
        Ok(SearchFaceResult::from_result(result)?.profiles)
    }

    /// Find profiles whose photos match the most prominent face in `image`
    pub async fn find_similar(
        &self,
        image: ImageInput,
        options: &SearchOptions,
    ) -> SearchResult<Vec<MatchedPerson>> {
        let bytes = self.load_image(image).await?;
        let detected = self.detect_faces(&bytes).await?;
        let matches = self.search_face(&detected, options).await?;

        tracing::info!(
            "Found {} match(es) in {} (limit: {})",
            matches.len(),
            options.source,
            options.results_limit
        );

        Ok(matches)
    }
}
