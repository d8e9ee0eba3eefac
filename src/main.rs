use anyhow::Context;
use bookmarks_ui::config::Command;
use bookmarks_ui::core::ViewHandle;
use bookmarks_ui::domain::model::{Tag, TagField};
use bookmarks_ui::utils::logger::{self, LogFormat};
use bookmarks_ui::utils::validation;
use bookmarks_ui::widgets::{bookmarklet, tagger};
use bookmarks_ui::{
    CliConfig, FragmentRequest, HttpFragmentSource, LoadOutcome, MemoryView, PartialLoader,
    TargetRegistry, UiError,
};
use clap::Parser;
use std::sync::Arc;

fn fail(e: &UiError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let file_config = match config.file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let format = if config.json_logs || file_config.json_logs() {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init(
        format,
        &logger::default_directive(config.verbose, file_config.log_level()),
    );

    tracing::debug!("CLI config: {:?}", config);

    let settings = config.settings(&file_config).unwrap_or_else(|e| fail(&e));

    match config.command {
        Command::Partial {
            endpoint,
            target,
            views,
        } => {
            let source = HttpFragmentSource::from_config(&settings).unwrap_or_else(|e| fail(&e));
            let loader = PartialLoader::new(source, settings);

            let mut registry = TargetRegistry::new();
            let memory_views: Vec<Arc<MemoryView>> =
                (0..views).map(|_| Arc::new(MemoryView::new())).collect();
            for view in &memory_views {
                registry.register(target.clone(), Arc::clone(view) as Arc<dyn ViewHandle>);
            }

            let request = FragmentRequest::new(endpoint, target);
            let report = loader.load_target(&registry, &request).await;

            for (i, view) in memory_views.iter().enumerate() {
                println!("[{} #{}]", request.target, i);
                println!("{}", view.content());
            }

            tracing::info!(
                "Partial {} settled as {:?} in {:?} (spinner shown: {})",
                request.path(),
                report.outcome,
                report.elapsed,
                report.spinner_shown
            );

            if let LoadOutcome::Errored { .. } = report.outcome {
                std::process::exit(2);
            }
        }
        Command::Bookmarklet { key, origin } => {
            let key = validation::validate_required_field("key", &key).unwrap_or_else(|e| fail(&e));
            let origin = origin.as_deref().unwrap_or(&settings.base_url);
            let origin = validation::validate_url("origin", origin).unwrap_or_else(|e| fail(&e));
            let script = bookmarklet::bookmarklet_script(key, &origin)
                .context("building bookmarklet")?;
            println!("{}", script);
        }
        Command::Tags { search, names } => {
            let field = if search {
                TagField::SearchTag
            } else {
                TagField::Tag
            };
            let tags: Vec<Tag> = names
                .into_iter()
                .filter(|name| !name.is_empty())
                .map(|name| Tag { field, name })
                .collect();
            println!("{}", tagger::render_tags(&tags));
        }
    }

    Ok(())
}
