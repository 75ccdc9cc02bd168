use bmi_engine::app::render::{render_json, render_text};
use bmi_engine::core::ConfigProvider;
use bmi_engine::utils::{logger, validation::Validate};
use bmi_engine::{AppConfig, BmiEngine, BmiError, BmiForm, CliConfig, OutputFormat};
use clap::Parser;

fn exit_with(error: &BmiError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", error, error.severity());
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(error.exit_code());
}

fn load_config(cli: &CliConfig) -> Result<AppConfig, BmiError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let engine = BmiEngine::from_config(&config);
    let form = BmiForm::new(
        cli.height.as_str(),
        cli.weight.as_str(),
        config.default_unit_system(),
    );

    let field_errors = form.field_errors(&engine);
    if !field_errors.is_empty() {
        for error in &field_errors {
            tracing::warn!("Rejected input: {}", error);
            eprintln!("❌ {}", error.user_friendly_message());
        }
        std::process::exit(field_errors[0].exit_code());
    }

    let report = match form.submit(&engine, config.result_delay()).await {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => match render_json(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        },
    }
}
