use chrono::Local;
use clap::Parser;
use moodlog::application::{
    clear_data, init::init, AddEntryService, BrowseService, ConfigService, DeleteOutcome,
    DetailSession, TextSource, CONFIG_KEYS,
};
use moodlog::cli::{
    confirm, format_detail, format_journal, format_palette, format_today, Cli, Commands,
};
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{EditorSession, FileSystemRepository, JournalRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; `MOODLOG_LOG` sets the filter, `--verbose` forces debug
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("moodlog=debug")
    } else {
        EnvFilter::try_from_env("MOODLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();
}

fn editor_for(repo: &FileSystemRepository) -> Result<EditorSession, MoodlogError> {
    let config = repo.load_config()?;
    Ok(EditorSession::new(config.get_editor()))
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    let Some(command) = cli.command else {
        println!("moodlog - Mood journal for the terminal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => init(&path),
        Commands::Moods => {
            print!("{}", format_palette());
            Ok(())
        }
        Commands::Add { mood, text } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();
            let source = match text {
                Some(text) => TextSource::Given(text),
                None => TextSource::Editor(editor_for(&repo)?),
            };

            let entry = AddEntryService::new(&store).execute(&mood, source)?;
            println!("Saved {} {} entry [{}]", entry.mood, entry.label, entry.id);
            Ok(())
        }
        Commands::Today => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.entry_store();

            let entries = BrowseService::new(&store).today(&Local::now())?;
            let output = format_today(&entries, config.today_preview(), &Local);
            println!("{}", output.trim_end());
            Ok(())
        }
        Commands::List { limit } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.entry_store();

            let entries = BrowseService::new(&store).journal(limit)?;
            let output = format_journal(&entries, config.journal_preview(), &Local);
            println!("{}", output.trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();

            let session = DetailSession::open(&store, &id)?;
            print!("{}", format_detail(session.view(), &Local));
            Ok(())
        }
        Commands::Edit { id, text } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();

            let mut session = DetailSession::open(&store, &id)?;
            session.begin_edit()?;
            let source = match text {
                Some(text) => TextSource::Given(text),
                None => TextSource::Editor(editor_for(&repo)?),
            };
            let draft = source.resolve(session.view().text())?;
            session.set_draft(draft)?;

            if !session.view().is_dirty() {
                session.cancel()?;
                println!("No changes to entry [{}]", id);
                return Ok(());
            }

            if session.save()? {
                println!("Saved entry [{}]", id);
            } else {
                println!("Entry [{}] no longer exists", id);
            }
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();

            let session = DetailSession::open(&store, &id)?;
            let confirmed = yes || confirm("Are you sure you want to delete this entry?")?;

            match session.delete(confirmed)? {
                DeleteOutcome::Deleted => println!("Deleted entry [{}]", id),
                DeleteOutcome::Kept(_) => println!("Kept entry [{}]", id),
            }
            Ok(())
        }
        Commands::Clear { yes } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.entry_store();

            let confirmed = yes || confirm("Are you sure you want to clear all data?")?;
            if clear_data(&store, confirmed)? {
                println!("All entries have been removed.");
            } else {
                println!("Nothing was cleared.");
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("today_preview = {}", config.today_preview);
                println!("journal_preview = {}", config.journal_preview);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
    }
}
