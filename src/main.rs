use po_manager::cli::run_cli;
use po_manager::display::print_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_logging();

    match run_cli().await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            print_error(&format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}

/// Route `log` records through a stderr subscriber; `POM_LOG` sets the filter
fn init_logging() {
    let filter = EnvFilter::try_from_env("POM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
