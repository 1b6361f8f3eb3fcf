mod feed;
mod json_file;
mod public_dns_info;

pub use feed::parse_candidate_records;
pub use json_file::JsonFileSource;
pub use public_dns_info::PublicDnsInfoSource;
