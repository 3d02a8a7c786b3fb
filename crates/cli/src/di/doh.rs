use ferrous_doh_application::use_cases::{PinConnectionUseCase, ResolveDomainUseCase};
use ferrous_doh_domain::{Config, ResolveOptions};
use ferrous_doh_infrastructure::dns::ResolverBuilder;
use ferrous_doh_infrastructure::storage::StorageFactory;
use std::sync::Arc;
use tracing::info;

pub struct DohServices {
    pub resolver: Arc<ResolveDomainUseCase>,
    pub pinning: Arc<PinConnectionUseCase>,
    pub options: ResolveOptions,
}

impl DohServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DoH services");

        let options = config.doh.resolve_options()?;
        let store = StorageFactory::create(&config.storage)?;

        let resolver = ResolverBuilder::new(config.doh.clone())
            .with_store(store)
            .build()?;
        let pinning = Arc::new(PinConnectionUseCase::new(
            Arc::clone(&resolver),
            options.clone(),
        ));

        Ok(Self {
            resolver,
            pinning,
            options,
        })
    }
}
