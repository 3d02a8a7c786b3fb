pub mod builder;

pub use builder::ResolverBuilder;
