use std::path::Path;

use clap::Parser;
use eyre::Result;

use neuropsy_cli::cli::{Cli, Commands, ConfigAction};
use neuropsy_cli::config::{self, NeuropsyConfig};
use neuropsy_cli::input::load_evaluation;
use neuropsy_cli::output::write_atomic;
use neuropsy_core::files;
use neuropsy_instruments::classification::classify;
use neuropsy_instruments::interpretation::{
    color_for, interpret, is_clinically_significant, percentile_rank, recommendation_for,
};
use neuropsy_instruments::scoring::ScoreType;
use neuropsy_instruments::{all_instruments, get_instrument};
use neuropsy_report::docx::generate_docx;
use neuropsy_report::render::render_template;
use neuropsy_report::session::EvaluationSession;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            input,
            output_dir,
            stdout,
            no_docx,
            strict,
        } => {
            let config = config::load_or_default(&config_path)?;
            let mut session = open_session(&input, strict)?;
            let report = session.generate_report()?.to_string();

            if stdout {
                println!("{report}");
                return Ok(());
            }

            let patient = session
                .patient
                .as_ref()
                .ok_or_else(|| eyre::eyre!("evaluation has no patient"))?;
            let dir = output_dir.unwrap_or_else(|| config.output_dir());

            let markdown_path = dir.join(files::report_markdown(patient));
            write_atomic(&markdown_path, report.as_bytes())?;
            println!("{}", markdown_path.display());

            if config.export_docx && !no_docx {
                let bytes = generate_docx(&report, &config.styles)?;
                let docx_path = dir.join(files::report_docx(patient));
                write_atomic(&docx_path, &bytes)?;
                println!("{}", docx_path.display());
            }
        }

        Commands::Summary {
            input,
            template,
            strict,
        } => {
            let session = open_session(&input, strict)?;
            let summary = session.summary()?;

            match template {
                Some(path) => {
                    let content = std::fs::read_to_string(&path).map_err(|e| {
                        eyre::eyre!("failed to read template {}: {e}", path.display())
                    })?;
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("summary");
                    print!("{}", render_template(name, &content, &summary)?);
                }
                None => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }

        Commands::Classify {
            value,
            score_type,
            domain,
        } => print_classification(value, score_type.into(), &domain),

        Commands::Instruments { id } => match id {
            Some(id) => {
                let instrument = get_instrument(&id)
                    .ok_or_else(|| eyre::eyre!("unknown instrument: {id}"))?;
                println!("{} ({})", instrument.name(), instrument.id());
                for name in instrument.score_ids() {
                    if let Some(spec) = instrument.score_spec(name) {
                        println!(
                            "  {:<40} {:<14} [{}, {}]",
                            spec.id,
                            spec.score_type.label(),
                            spec.range.min,
                            spec.range.max
                        );
                    }
                }
            }
            None => {
                for instrument in all_instruments() {
                    println!(
                        "{:<16} {:<22} {} scores",
                        instrument.id(),
                        instrument.name(),
                        instrument.score_ids().len()
                    );
                }
            }
        },

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_or_default(&config_path)?;
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &NeuropsyConfig::default())?;
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn open_session(input: &Path, strict: bool) -> Result<EvaluationSession> {
    let today = jiff::Zoned::now().date();
    let session = load_evaluation(input)?.into_session(strict, today)?;
    for (kind, count) in session.completed_batteries() {
        tracing::debug!(battery = %kind, scores = count, "battery loaded");
    }
    Ok(session)
}

fn print_classification(value: f64, score_type: ScoreType, domain: &str) {
    let classification = classify(value, score_type);
    println!("{} {value}", score_type.label());
    println!("classification: {}", classification.label);
    if let Some(percentile) = classification.percentile {
        println!("percentile:     {percentile}");
    }
    println!("rang centile:   {}", percentile_rank(value, score_type));
    println!("couleur:        {}", color_for(classification.label, score_type));
    println!(
        "significatif:   {}",
        if is_clinically_significant(value, score_type) {
            "oui"
        } else {
            "non"
        }
    );
    let recommendation = recommendation_for(classification.label);
    if score_type != ScoreType::TScore && !recommendation.is_empty() {
        println!("recommandation: {recommendation}");
    }
    println!();
    println!("{}", interpret(value, score_type, domain));
}
