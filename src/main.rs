use anyhow::Result;
use rankfuse::cli::{self, Commands, OrderPair};
use rankfuse::commands::{self, CoreConfig, FuseConfig};
use rankfuse::io::{OrderSource, OutputFormat};
use std::path::Path;

// Any error propagates out of main, which prints it to stderr and exits with status 1
fn main() -> Result<()> {
    let cli = cli::parse_args();

    cli::init_logging(cli.verbosity);
    cli::configure_colors(cli.plain);

    match cli.command {
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
        command => run_fusion_command(command, cli.config.as_deref()),
    }
}

fn run_fusion_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    let settings = commands::resolve_config(config_path)?;
    let stdout = std::io::stdout().lock();

    match command {
        Commands::Fuse {
            orders,
            format,
            grouping,
        } => {
            let config = FuseConfig {
                left: OrderSource::from_arg(&orders.left),
                right: OrderSource::from_arg(&orders.right),
                format,
                grouping,
            };
            commands::fuse_command(&config, &settings, stdout)
        }
        Commands::Core { orders, format } => {
            commands::core_command(&core_config(&orders, format), &settings, stdout)
        }
        Commands::Contradictions { orders, format } => {
            commands::contradictions_command(&core_config(&orders, format), &settings, stdout)
        }
        Commands::Matrix { order, format } => {
            commands::matrix_command(&OrderSource::from_arg(&order), format, &settings, stdout)
        }
        Commands::Init { force } => commands::init_config(&std::env::current_dir()?, force),
    }
}

fn core_config(orders: &OrderPair, format: Option<OutputFormat>) -> CoreConfig {
    CoreConfig {
        left: OrderSource::from_arg(&orders.left),
        right: OrderSource::from_arg(&orders.right),
        format,
    }
}
