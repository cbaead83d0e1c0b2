use clap::Parser;
use hello_greet::core::git::{self, GitOutcome};
use hello_greet::utils::{logger, validation::Validate};
use hello_greet::{greet, CliConfig, FallbackResolver, GreetEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-greet");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.gui {
        #[cfg(feature = "gui")]
        {
            tracing::info!("Starting GUI mode");
            let settings = config.settings()?;
            hello_greet::gui::run(settings)?;
            return Ok(());
        }
        #[cfg(not(feature = "gui"))]
        {
            tracing::error!("This binary was built without GUI support");
            eprintln!("❌ GUI mode is unavailable; rebuild with `--features gui`");
            std::process::exit(1);
        }
    }

    // The resolver blocks on at most one file read and one bounded network
    // call, so a current-thread runtime is enough.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_cli(config))
}

async fn run_cli(config: CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(message) = config.commit.as_deref() {
        tracing::info!("Performing git commit with message: {}", message);
        match git::commit_and_push(message).await {
            Ok(GitOutcome::Committed) => {
                println!("✅ Changes committed and pushed");
            }
            Ok(GitOutcome::NothingToCommit) => {
                println!("Nothing to commit, working tree clean");
            }
            Err(e) => {
                tracing::error!("❌ Git operation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let message = if config.random_historical {
        let engine = GreetEngine::new(FallbackResolver::new(config.settings()?));
        engine.greet_random().await
    } else {
        greet(config.name.as_deref())
    };

    println!("{}", message);
    tracing::info!("Generated greeting: {}", message);
    Ok(())
}
