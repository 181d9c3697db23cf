use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use cmd::command::browse;
use cmd::command::server;
use cmd::config::Config;
use cmd::error::Error;
use cmd::error::Result;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Clone)]
pub struct Cfg {
    #[arg(long)]
    config: PathBuf,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Run the API server
    Server(Cfg),
    /// Print the demo catalog filtered by query and category
    Browse {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let Some(command) = args.command else {
        return Err(Error::BadRequest("no command specified".to_string()));
    };

    match command {
        Commands::Server(cfg) => {
            let config = config::Config::builder()
                .add_source(config::File::from(cfg.config.clone()))
                .build()?;
            let cfg: Config = config.try_deserialize()?;

            let subscriber = FmtSubscriber::builder()
                .with_max_level(cfg.log.level)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(Error::SetGlobalDefault)?;

            let version = env!("CARGO_PKG_VERSION");
            info!("OpenHaus v{version}");

            server::start(cfg.try_into()?).await?;
        }
        Commands::Browse { query, category } => {
            browse::run(query, category)?;
        }
    }

    Ok(())
}
