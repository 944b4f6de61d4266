use program_loader::{
    config::{self, PUBLIC_BASE},
    storage::write_bundle,
    ui::render_page,
    HostContext, LoaderConfig, PageQuery, ProgramLoader, RenderTarget, ReqwestTransport,
    StdoutTarget, TextSlot,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let loader_config = LoaderConfig::from_env()?;
    let host = HostContext::new(config::resolve_init_data());
    let query = PageQuery::parse(&config::resolve_page_query());
    info!(
        api_base = %loader_config.api_base,
        policy = ?loader_config.token_policy,
        "starting program loader"
    );

    let mut slot = TextSlot::new();
    let outcome = ProgramLoader::new(
        loader_config,
        host,
        query,
        ReqwestTransport::default(),
        &mut slot,
    )
    .run()
    .await;
    if let Err(err) = &outcome {
        info!("load finished without program: {err}");
    }

    let text = slot.into_text().unwrap_or_default();
    StdoutTarget.set_text(&text);

    if let Some(dir) = config::resolve_output_dir() {
        write_bundle(&dir, PUBLIC_BASE, &render_page(&text)).await?;
    }

    Ok(())
}
