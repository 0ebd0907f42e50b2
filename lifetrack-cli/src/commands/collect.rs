use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;
use lifetrack_core::collection::CollectionItem;
use owo_colors::OwoColorize;

use crate::session::Session;

#[derive(Subcommand)]
pub enum CollectCmd {
    /// Save a bookmark
    Add {
        title: String,

        #[arg(short, long)]
        url: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Category name (see `collect list` for the seeded set)
        #[arg(short, long)]
        category: Option<String>,

        /// Tags (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },
    /// List bookmarks
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a bookmark
    Rm {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run(cmd: CollectCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        CollectCmd::Add {
            title,
            url,
            notes,
            category,
            tags,
        } => {
            let category_id = category
                .as_deref()
                .map(|name| resolve_category(&session, name))
                .transpose()?;

            let mut item = CollectionItem::new(&title);
            item.url = url;
            item.notes = notes;
            item.category = category_id;
            item.tags = tags;

            session.edit(|journal| journal.collection.items.push(item));
            session.commit()?;

            println!("{}", format!("Saved: {}", title).green());
        }

        CollectCmd::List { category } => {
            let filter_id = category
                .as_deref()
                .map(|name| resolve_category(&session, name))
                .transpose()?;

            let journal = &session.journal;
            let category_name = |id: &Option<String>| {
                id.as_ref()
                    .and_then(|id| journal.collection.categories.iter().find(|c| &c.id == id))
                    .map(|c| c.name.clone())
            };

            for item in &journal.collection.items {
                if filter_id.is_some() && item.category != filter_id {
                    continue;
                }

                let mut line = format!("  {}", item.title);
                if let Some(name) = category_name(&item.category) {
                    line.push_str(&format!(" {}", format!("[{}]", name).blue()));
                }
                if let Some(url) = &item.url {
                    line.push_str(&format!(" {}", url.dimmed()));
                }
                println!("{}", line);
                println!("    {}", item.id.dimmed());
            }
        }

        CollectCmd::Rm { id, yes } => {
            let Some(item) = session.journal.collection.items.iter().find(|i| i.id == id) else {
                anyhow::bail!("No bookmark with id '{}'", id);
            };
            let title = item.title.clone();

            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Delete '{}'?", title))
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }

            session.edit(|journal| journal.collection.items.retain(|i| i.id != id));
            session.commit()?;

            println!("{}", format!("Deleted: {}", title).red());
        }
    }

    Ok(())
}

/// Resolve a category name to its id, case-insensitively.
fn resolve_category(session: &Session, name: &str) -> Result<String> {
    session
        .journal
        .collection
        .categories
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .map(|c| c.id.clone())
        .ok_or_else(|| {
            let available: Vec<&str> = session
                .journal
                .collection
                .categories
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            anyhow::anyhow!(
                "Category '{}' not found. Available: {}",
                name,
                available.join(", ")
            )
        })
}
