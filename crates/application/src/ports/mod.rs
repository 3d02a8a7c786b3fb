mod doh_upstream;
mod record_store;

pub use doh_upstream::DohUpstream;
pub use record_store::RecordStore;
