/// Network module
///
/// This module handles the exchange with the remote analysis service:
/// - Request construction and the endpoint contract (client.rs)

pub mod client;
