pub mod answer;
pub mod name;
pub mod record;
pub mod record_type;
pub mod resolution;

pub use answer::AnswerRecord;
pub use name::normalize_domain_name;
pub use record::DnsRecord;
pub use record_type::RecordType;
pub use resolution::Resolution;
