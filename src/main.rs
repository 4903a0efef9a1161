use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use vendo::application::session::VendingMachine;
use vendo::config::{OutputFormat, Settings};
use vendo::domain::ports::{InputSourceBox, PresenterBox};
use vendo::infrastructure::lines::LineSource;
use vendo::interfaces::console::ConsolePresenter;
use vendo::interfaces::json::JsonPresenter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter())
        .with_writer(io::stderr)
        .init();

    let input: InputSourceBox = match &settings.script {
        Some(path) => Box::new(LineSource::open(path).await.into_diagnostic()?),
        None => Box::new(LineSource::stdin()),
    };

    let presenter: PresenterBox = match settings.format {
        OutputFormat::Text => Box::new(ConsolePresenter::new(io::stdout())),
        OutputFormat::Json => Box::new(JsonPresenter::new(io::stdout())),
    };

    let summary = VendingMachine::new(input, presenter)
        .with_max_read_failures(settings.max_read_failures)
        .run()
        .await
        .into_diagnostic()?;

    if settings.format == OutputFormat::Json {
        summary.write_json(io::stdout().lock()).into_diagnostic()?;
    }

    Ok(())
}
