mod fetch;
mod resolve;

pub use fetch::fetch;
pub use resolve::resolve;
