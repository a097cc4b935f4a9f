use config::{Config, LogOutput, Surface};
use herbal_guide::context::HerbalContext;
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::{init_tracing, LoggerTracing};
use library::logger::interface::Logger;
use std::sync::Arc;

mod config;
mod desktop;
mod herb_table;
mod herbal_guide;
mod image_classifier;
mod library;
mod symptom_matcher;
mod web;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    let logger: Arc<dyn Logger + Send + Sync> = match config.log_output {
        LogOutput::Tracing => Arc::new(LoggerTracing::new()),
        LogOutput::Console => Arc::new(LoggerConsole::new(config.logger_timezone)),
    };

    logger.info(&format!(
        "Starting herbal guide ({:?} surface, {:?} matching)",
        config.surface, config.match_strategy
    ))?;

    let context = HerbalContext::init(&config, logger)?;

    match config.surface {
        Surface::Web => web::server::serve(&config, context)?,
        Surface::Desktop => desktop::window::run(context)?,
    }

    Ok(())
}
