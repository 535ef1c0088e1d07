use serde::Serialize;
use serde_json::Value;

use crate::models::domain::Source;

/// Default number of profiles requested per search
pub const DEFAULT_RESULTS_LIMIT: u32 = 10;

/// Image to search with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    /// Raw encoded image (JPEG, PNG, ...)
    Bytes(Vec<u8>),
    /// Remote image, downloaded before the search starts
    Url(String),
}

impl From<Vec<u8>> for ImageInput {
    fn from(bytes: Vec<u8>) -> Self {
        ImageInput::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageInput {
    fn from(bytes: &[u8]) -> Self {
        ImageInput::Bytes(bytes.to_vec())
    }
}

impl From<String> for ImageInput {
    fn from(url: String) -> Self {
        ImageInput::Url(url)
    }
}

impl From<&str> for ImageInput {
    fn from(url: &str) -> Self {
        ImageInput::Url(url.to_string())
    }
}

/// Parameters of a face search
///
/// `results_limit` is not range-checked here; the API accepts 1 to 500 and
/// reports anything else as an API error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub source: Source,
    pub show_hidden: bool,
    pub results_limit: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            show_hidden: true,
            results_limit: DEFAULT_RESULTS_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn source(mut self, source: impl Into<Source>) -> Self {
        self.source = source.into();
        self
    }

    pub fn show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn results_limit(mut self, results_limit: u32) -> Self {
        self.results_limit = results_limit;
        self
    }
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'a str,
    pub id: &'a str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<P>,
}

/// Params of `detectFaces`
#[derive(Debug, Serialize)]
pub struct DetectFacesParams<'a> {
    /// Base64-encoded image
    pub image: &'a str,
}

/// Params of `searchFace`
#[derive(Debug, Serialize)]
pub struct SearchFaceParams<'a> {
    pub image: &'a Value,
    pub face: &'a Value,
    pub source: &'a Source,
    pub hidden: bool,
    pub results: u32,
    pub lang: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.source, Source::VkWall);
        assert!(options.show_hidden);
        assert_eq!(options.results_limit, 10);
    }

    #[test]
    fn test_envelope_omits_missing_params() {
        let request: RpcRequest<'_, Value> = RpcRequest {
            jsonrpc: "2.0",
            id: "some-id",
            method: "rateLimit",
            params: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jsonrpc": "2.0", "id": "some-id", "method": "rateLimit"})
        );
    }

    #[test]
    fn test_search_face_params_shape() {
        let image = json!("img-ref");
        let face = json!([1, 2, 3, 4]);
        let source = Source::from("tt_avatar");
        let params = SearchFaceParams {
            image: &image,
            face: &face,
            source: &source,
            hidden: false,
            results: 500,
            lang: "ru",
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "image": "img-ref",
                "face": [1, 2, 3, 4],
                "source": "tt_avatar",
                "hidden": false,
                "results": 500,
                "lang": "ru"
            })
        );
    }

    #[test]
    fn test_image_input_conversions() {
        assert_eq!(ImageInput::from("https://x/y.jpg"), ImageInput::Url("https://x/y.jpg".into()));
        assert_eq!(ImageInput::from(&b"abc"[..]), ImageInput::Bytes(b"abc".to_vec()));
    }
}
