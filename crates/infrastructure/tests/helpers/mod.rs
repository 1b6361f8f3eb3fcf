mod stub_dns_server;

pub use feed_server::*;
pub use stub_dns_server::*;
