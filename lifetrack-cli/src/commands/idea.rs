use anyhow::Result;
use clap::Subcommand;
use lifetrack_core::idea::{Idea, IdeaStatus};
use owo_colors::OwoColorize;

use crate::session::Session;

#[derive(Subcommand)]
pub enum IdeaCmd {
    /// Capture an idea
    Add {
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List ideas
    List {
        /// Only this status: backlog, active, done or dropped
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Move an idea to a new status
    Status {
        /// Idea id or title
        idea: String,

        /// backlog, active, done or dropped
        status: String,
    },
    /// Attach a note to an idea
    Note {
        /// Idea id or title
        idea: String,

        text: String,
    },
}

pub fn run(cmd: IdeaCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        IdeaCmd::Add {
            title,
            description,
            category,
        } => {
            let category_id = category
                .as_deref()
                .map(|name| {
                    session
                        .journal
                        .ideas
                        .categories
                        .iter()
                        .find(|c| c.name.eq_ignore_ascii_case(name))
                        .map(|c| c.id.clone())
                        .ok_or_else(|| anyhow::anyhow!("Category '{}' not found", name))
                })
                .transpose()?;

            let mut idea = Idea::new(&title);
            idea.description = description;
            idea.category = category_id;

            session.edit(|journal| journal.ideas.items.push(idea));
            session.commit()?;

            println!("{}", format!("Captured: {}", title).green());
        }

        IdeaCmd::List { status } => {
            let filter = status
                .as_deref()
                .map(|s| {
                    IdeaStatus::parse(s).ok_or_else(|| {
                        anyhow::anyhow!(
                            "Unknown status '{}'. Use backlog, active, done or dropped",
                            s
                        )
                    })
                })
                .transpose()?;

            for idea in &session.journal.ideas.items {
                if let Some(filter) = filter
                    && idea.status != filter
                {
                    continue;
                }

                let status = match idea.status {
                    IdeaStatus::Backlog => idea.status.as_str().dimmed().to_string(),
                    IdeaStatus::Active => idea.status.as_str().yellow().to_string(),
                    IdeaStatus::Done => idea.status.as_str().green().to_string(),
                    IdeaStatus::Dropped => idea.status.as_str().red().to_string(),
                };
                println!("  {} ({})", idea.title, status);
                for note in &idea.notes {
                    println!("      - {}", note.dimmed());
                }
                println!("      {}", idea.id.dimmed());
            }
        }

        IdeaCmd::Status { idea, status } => {
            let Some(new_status) = IdeaStatus::parse(&status) else {
                anyhow::bail!(
                    "Unknown status '{}'. Use backlog, active, done or dropped",
                    status
                );
            };

            let Some(found) = find_idea(&session, &idea) else {
                anyhow::bail!("No idea matching '{}'", idea);
            };
            let title = found.title.clone();
            let id = found.id.clone();

            session.edit(|journal| {
                if let Some(item) = journal.ideas.items.iter_mut().find(|i| i.id == id) {
                    item.status = new_status;
                    item.updated_at = chrono::Utc::now();
                }
            });
            session.commit()?;

            println!("{} is now {}", title, new_status.as_str());
        }

        IdeaCmd::Note { idea, text } => {
            let Some(found) = find_idea(&session, &idea) else {
                anyhow::bail!("No idea matching '{}'", idea);
            };
            let title = found.title.clone();
            let id = found.id.clone();

            session.edit(|journal| {
                if let Some(item) = journal.ideas.items.iter_mut().find(|i| i.id == id) {
                    item.notes.push(text);
                    item.updated_at = chrono::Utc::now();
                }
            });
            session.commit()?;

            println!("{}", format!("Noted on: {}", title).green());
        }
    }

    Ok(())
}

fn find_idea<'a>(session: &'a Session, key: &str) -> Option<&'a Idea> {
    session
        .journal
        .ideas
        .items
        .iter()
        .find(|i| i.id == key || i.title.eq_ignore_ascii_case(key))
}
