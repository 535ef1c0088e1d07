// Service exports
pub mod client;
pub mod rpc;
pub mod search;
pub mod transport;

pub use client::{AsyncSearchClient, SearchClient};
pub use rpc::check_for_errors;
pub use search::SearchCore;
pub use transport::{BlockingHttpTransport, HttpTransport, Transport};
