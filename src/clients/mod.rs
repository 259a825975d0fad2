pub mod result_client;

pub use result_client::ResultClient;
