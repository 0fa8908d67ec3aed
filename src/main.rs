#[tokio::main]
async fn main() -> deepseekbot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("deepseekbot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting deepseekbot Discord bot");

    match deepseekbot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
