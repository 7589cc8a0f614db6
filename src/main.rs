use clap::Parser;
use newsboard::application::{init, manage_config::ConfigService, migrate_storage, session};
use newsboard::cli::{format_news_item, format_news_list, require_post_text, Cli, Commands};
use newsboard::domain::{DisplayOrder, ImageUpdate};
use newsboard::error::NewsboardError;
use newsboard::infrastructure::{read_image_as_data_url, FileSystemRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NewsboardError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Add {
            title,
            content,
            image,
        } => {
            require_post_text(&title, &content)?;
            let image = image.as_deref().map(read_image_as_data_url).transpose()?;

            let repo = FileSystemRepository::discover()?;
            let mut session = session::open(&repo)?;
            let item = session.store.add(&title, &content, image);

            println!("{}", item.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            image,
            clear_image,
        } => {
            require_post_text(&title, &content)?;
            let image = match (image, clear_image) {
                (Some(path), _) => ImageUpdate::Set(read_image_as_data_url(&path)?),
                (None, true) => ImageUpdate::Clear,
                (None, false) => ImageUpdate::Keep,
            };

            let repo = FileSystemRepository::discover()?;
            let mut session = session::open(&repo)?;
            let id = session.store.resolve_id(&id)?.id.clone();
            session.store.edit(&id, &title, &content, image);

            println!("Updated {}", id);
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            let mut session = session::open(&repo)?;
            let id = session.store.resolve_id(&id)?.id.clone();
            session.store.delete(&id);

            println!("Deleted {}", id);
            Ok(())
        }
        Commands::List {
            oldest_first,
            newest_first,
            full,
        } => {
            let repo = FileSystemRepository::discover()?;
            let session = session::open(&repo)?;

            let order = if oldest_first {
                DisplayOrder::Oldest
            } else if newest_first {
                DisplayOrder::Newest
            } else {
                session.config.order
            };

            let items = order.arrange(session.store.items());
            print!(
                "{}",
                format_news_list(&items, session.config.preview_length, full)
            );
            if items.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let session = session::open(&repo)?;
            let item = session.store.resolve_id(&id)?;

            print!("{}", format_news_item(item));
            Ok(())
        }
        Commands::Migrate => {
            let repo = FileSystemRepository::discover()?;
            let summary = migrate_storage::migrate_storage(&repo)?;

            if summary.rewritten {
                println!("Migrated {} news items", summary.items);
            } else {
                println!("Stored news already up to date ({} items)", summary.items);
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("preview_length = {}", config.preview_length);
                println!("order = {}", config.order.as_str());
                println!("normalize_on_load = {}", config.normalize_on_load);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: newsboard config [--list | <key> [<value>]]");
                println!("Valid keys: preview_length, order, normalize_on_load, created");
                Ok(())
            }
        }
    }
}
