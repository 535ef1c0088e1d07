// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchedPerson, Source};
pub use requests::{ImageInput, RpcRequest, SearchOptions, DEFAULT_RESULTS_LIMIT};
pub use responses::{DetectFacesResult, SearchFaceResult};
