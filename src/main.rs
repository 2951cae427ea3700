use clap::Parser;
use log::{debug, error, info};
use std::error::Error;
use std::io;
use std::path::PathBuf;

use subsonic_plugin::config::PluginSettings;
use subsonic_plugin::data::NavigationRequest;
use subsonic_plugin::logging;
use subsonic_plugin::plugin::{ConsoleHost, Plugin};

/// Subsonic music browser, invoked once per listing by the host
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Plugin base URL, e.g. plugin://plugin.audio.subsonic/
    base_url: String,

    /// Listing handle assigned by the host
    #[clap(allow_negative_numbers = true)]
    handle: i32,

    /// Query string of the navigation request, e.g. "?mode=artist_list"
    #[clap(default_value = "")]
    query: String,

    /// Settings file (JSON)
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Logging configuration file (JSON)
    #[clap(long)]
    log_config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,

    /// Subsonic server URL
    #[clap(long, env = "SUBSONIC_URL")]
    url: Option<String>,

    #[clap(long, env = "SUBSONIC_USERNAME")]
    username: Option<String>,

    #[clap(long, env = "SUBSONIC_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

fn load_settings(cli: &Cli) -> Result<PluginSettings, Box<dyn Error>> {
    let mut settings = match &cli.config {
        Some(path) => PluginSettings::from_file(path)?,
        None => {
            debug!("No settings file given, using defaults");
            PluginSettings::default()
        }
    };

    if let Some(url) = &cli.url {
        settings.subsonic_url = url.clone();
    }
    if let Some(username) = &cli.username {
        settings.username = username.clone();
    }
    if let Some(password) = &cli.password {
        settings.password = password.clone();
    }

    Ok(settings)
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let settings = load_settings(cli)?;
    let request = NavigationRequest::parse(&cli.base_url, cli.handle, &cli.query);
    let plugin = Plugin::new(settings, request)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut host = ConsoleHost::new(cli.handle, stdout.lock(), stdin.lock());
    plugin.route(&mut host)?;

    info!("Listing {} finished with {} items", cli.handle, host.items());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::initialize_logging_with_args(cli.log_config.as_deref(), cli.debug) {
        eprintln!("Error: Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        error!("Subsonic plugin failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
