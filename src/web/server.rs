use crate::config::Config;
use crate::herbal_guide::context::HerbalContext;
use crate::library::error::HerbalResult;
use crate::web::router::build_router;

pub fn serve(config: &Config, context: HerbalContext) -> HerbalResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config, context))
}

async fn run(config: &Config, context: HerbalContext) -> HerbalResult<()> {
    let app = build_router(context, config.max_upload_bytes);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
