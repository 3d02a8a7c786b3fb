use crate::di::DohServices;
use anyhow::Context;
use ferrous_doh_infrastructure::http::{annotate_response_headers, pin_client_builder};
use reqwest::header::HeaderMap;
use tracing::info;

pub async fn fetch(services: &DohServices, url: &str) -> anyhow::Result<()> {
    let parsed = reqwest::Url::parse(url).with_context(|| format!("invalid URL '{}'", url))?;
    let host = parsed
        .host_str()
        .with_context(|| format!("URL '{}' has no host", url))?;

    let mut builder = reqwest::Client::builder();
    let plan = services.pinning.execute(host, parsed.port()).await;
    if let Some(plan) = &plan {
        builder = pin_client_builder(builder, plan);
    } else {
        info!(host = %host, "Using system resolver");
    }

    let response = builder.build()?.get(parsed.clone()).send().await?;

    let mut headers = response.headers().clone();
    if let Some(plan) = &plan {
        annotate_response_headers(&mut headers, plan);
    }

    println!("{:?} {}", response.version(), response.status());
    print_doh_headers(&headers);
    Ok(())
}

fn print_doh_headers(headers: &HeaderMap) {
    for (name, value) in headers {
        if name.as_str().starts_with("x-doh-") {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }
}
