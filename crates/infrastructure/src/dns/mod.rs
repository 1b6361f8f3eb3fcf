pub mod client;
pub mod connector;
pub mod forwarding;
pub mod transport;

pub use client::UpstreamResolverClient;
pub use connector::UpstreamConnector;
