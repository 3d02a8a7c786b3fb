use crate::di::DohServices;

pub async fn resolve(services: &DohServices, host: &str, repeat: u32) -> anyhow::Result<()> {
    for pass in 1..=repeat.max(1) {
        match services.resolver.execute(host, &services.options).await? {
            Some(resolution) => {
                let record = &resolution.record;
                println!(
                    "#{} {} {} {} cache_hit={} ttl={}",
                    pass,
                    record.domain_name(),
                    record.record_type(),
                    record.data().join(","),
                    resolution.cache_hit,
                    resolution
                        .cache_ttl_secs()
                        .unwrap_or_else(|| record.ttl().as_secs()),
                );
            }
            None => println!("#{} {}: no answer", pass, host),
        }
    }
    Ok(())
}
