use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::SearchResult;
use crate::models::{ImageInput, MatchedPerson, SearchOptions};
use crate::services::search::SearchCore;
use crate::services::transport::{BlockingHttpTransport, HttpTransport};

/// Blocking Search4Faces API client
///
/// Every call runs on the calling thread. Use [`AsyncSearchClient`] from
/// inside an async runtime.
///
/// ```no_run
/// use search4faces::{SearchClient, SearchOptions};
///
/// let client = SearchClient::new("abcdef-ghiklm-nopqrs-tuvxyz-xxxxxx")?;
/// let matches = client.find_similar("https://example.com/face.jpg", &SearchOptions::default())?;
/// for person in matches {
///     println!("{} {}: {}", person.first_name, person.last_name, person.profile);
/// }
/// # Ok::<(), search4faces::SearchError>(())
/// ```
#[derive(Debug)]
pub struct SearchClient {
    core: SearchCore<BlockingHttpTransport>,
}

impl SearchClient {
    /// Create a client and validate `token` with a `rateLimit` call
    pub fn new(token: impl Into<String>) -> SearchResult<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> SearchResult<Self> {
        let transport = BlockingHttpTransport::new(config.timeout)?;
        let core = SearchCore::new(transport, config);

        pollster::block_on(core.probe())?;
        tracing::info!("Search4Faces client ready (endpoint: {})", core.config().endpoint);

        Ok(Self { core })
    }

    pub fn find_similar(
        &self,
        image: impl Into<ImageInput>,
        options: &SearchOptions,
    ) -> SearchResult<Vec<MatchedPerson>> {
        pollster::block_on(self.core.find_similar(image.into(), options))
    }

    pub fn rate_limit(&self) -> SearchResult<Value> {
        pollster::block_on(self.core.rate_limit())
    }

    pub fn config(&self) -> &ClientConfig {
        self.core.config()
    }
}

/// Async Search4Faces API client
///
/// Same operations as [`SearchClient`]; every network round trip is an
/// `.await` point.
#[derive(Debug)]
pub struct AsyncSearchClient {
    core: SearchCore<HttpTransport>,
}

impl AsyncSearchClient {
    /// Create a client and validate `token` with a `rateLimit` call
    pub async fn new(token: impl Into<String>) -> SearchResult<Self> {
        Self::with_config(ClientConfig::new(token)).await
    }

    pub async fn with_config(config: ClientConfig) -> SearchResult<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        let core = SearchCore::new(transport, config);

        core.probe().await?;
        tracing::info!("Search4Faces async client ready (endpoint: {})", core.config().endpoint);

        Ok(Self { core })
    }

    pub async fn find_similar(
        &self,
        image: impl Into<ImageInput>,
        options: &SearchOptions,
    ) -> SearchResult<Vec<MatchedPerson>> {
        self.core.find_similar(image.into(), options).await
    }

    pub async fn rate_limit(&self) -> SearchResult<Value> {
        self.core.rate_limit().await
    }

    pub fn config(&self) -> &ClientConfig {
        self.core.config()
    }
}
