use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::runtime::Runtime;

use wxnow::app::{run_app, App};
use wxnow::cli::Args;
use wxnow::config::Config;
use wxnow::logging::{self, LogTarget};
use wxnow::{Lookup, Outcome, Unit, WeatherApi};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print {
        logging::init(LogTarget::Stderr).context("failed to set up logging")?;
    } else if let Some(path) = args.log_file.clone().or_else(logging::default_log_file) {
        logging::init(LogTarget::File(path)).context("failed to open log file")?;
    }

    let config = Config::load(&args)?;
    let api = WeatherApi::new(&config).context("failed to create HTTP client")?;
    let lookup = Lookup::new(api);
    let runtime = Runtime::new().context("failed to start async runtime")?;

    if args.print {
        print_once(&runtime, lookup, &args, &config)
    } else {
        run_interactive(&runtime, lookup, &args, &config)
    }
}

fn print_once(runtime: &Runtime, mut lookup: Lookup, args: &Args, config: &Config) -> Result<()> {
    let outcome = runtime.block_on(async {
        match (args.query(), args.coords.or(config.home)) {
            (Some(query), _) => Ok(lookup.search(&query).await),
            (None, Some(coords)) => Ok(lookup.search_coordinates(coords).await),
            (None, None) => Err(anyhow::anyhow!(
                "nothing to look up: give a place name, --coords, or a [home] location in the config file"
            )),
        }
    })?;

    let (result, icon) = match outcome {
        Outcome::Displayed { result, icon } => (result, icon),
        Outcome::Failed(err) => return Err(err).context("lookup failed"),
        Outcome::Superseded => bail!("lookup was superseded"),
    };

    if args.fahrenheit {
        lookup.units_mut().set_unit(Unit::Fahrenheit)?;
    }
    println!("{}", result.location_name);
    println!("{}", lookup.units().render());
    println!("{}", result.condition_text);
    println!("{}", icon.id());
    Ok(())
}

fn run_interactive(runtime: &Runtime, lookup: Lookup, args: &Args, config: &Config) -> Result<()> {
    let mut app = App::new(lookup, config.home, runtime.handle().clone());
    if let Some(query) = args.query() {
        app.search(query);
    } else if let Some(coords) = args.coords {
        app.search(coords.to_string());
    }

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.context("terminal error")
}
