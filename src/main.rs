use clap::Parser;
use portfolio_media::{cli, commands, error, interactive, logging};
use cli::{Cli, Commands};
use commands::AddArgs;
use error::Result;
use portfolio_media_common::{Config, ProjectLayout};

fn main() {
    if let Err(err) = run() {
        eprintln!("✖ {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut config = match cli.command {
        // saving defaults would overwrite a config that merely failed to parse
        Commands::Config { .. } => Config::load()?,
        _ => commands::config_or_default(Config::load()),
    };
    let root = config.resolve_root(cli.root.as_deref());
    let layout = ProjectLayout::new(&root);
    tracing::debug!(root = %root.display(), "project root");

    match cli.command {
        Commands::Init => {
            let count = commands::init(&layout)?;
            println!("✔ media directories ready under {}", layout.root.display());
            println!("✔ catalog: {} ({} records)", layout.data_path.display(), count);
        }

        Commands::Add { file, category, title, description, client, results, date, tags } => {
            let mut controller = commands::open_controller(layout, &config)?;
            let args = AddArgs { category, title, description, client, results, date, tags };
            let outcome = commands::add(&mut controller, &file, args)?;
            println!("✔ {}", controller.status());
            println!("  {}", outcome.message());
            println!("  {}", outcome.record.list_line());
        }

        Commands::Interactive { file } => {
            let mut controller = commands::open_controller(layout, &config)?;
            match interactive::run_interactive_add(&mut controller, file.as_deref())? {
                Some(outcome) => {
                    println!("✔ {}", controller.status());
                    println!("  {}", outcome.message());
                }
                None => println!("Nothing added"),
            }
        }

        Commands::List { category, json } => {
            let records = commands::list(&layout, category);
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("No records in {}", layout.data_path.display());
            } else {
                print!("{}", commands::render_list(&records));
            }
        }

        Commands::Check { json } => {
            let report = commands::check(&layout)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", commands::render_report(&report));
            }
            commands::ensure_no_broken_references(&report)?;
        }

        Commands::Config { set_root, set_default_category, show } => {
            let path = Config::config_path()?;
            if commands::update_config(&mut config, &path, set_root, set_default_category)? {
                println!("✔ saved {}", path.display());
            }
            if show {
                let resolved = config.resolve_root(cli.root.as_deref());
                print!("{}", commands::render_config(&config, &resolved));
            }
        }
    }

    Ok(())
}
