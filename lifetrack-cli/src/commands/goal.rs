use anyhow::Result;
use clap::Subcommand;
use lifetrack_core::goal::{Goal, Milestone};
use owo_colors::OwoColorize;

use crate::dateparse;
use crate::render::Render;
use crate::session::Session;

#[derive(Subcommand)]
pub enum GoalCmd {
    /// Add a goal
    Add {
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Target date (YYYY-MM-DD or natural language)
        #[arg(short, long)]
        target: Option<String>,

        /// Milestone labels (repeatable)
        #[arg(short, long = "milestone")]
        milestones: Vec<String>,
    },
    /// List goals
    List {
        /// Include completed goals
        #[arg(long)]
        all: bool,
    },
    /// Mark a goal completed (by id or title)
    Done { goal: String },
    /// Add or toggle milestones on a goal
    Milestone {
        /// Goal id or title
        goal: String,

        /// Add a new milestone with this label
        #[arg(long)]
        add: Option<String>,

        /// Toggle the milestone at this index (from `goal list`)
        #[arg(long)]
        toggle: Option<usize>,
    },
    /// Delete a goal
    Rm { id: String },
}

pub fn run(cmd: GoalCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        GoalCmd::Add {
            title,
            description,
            target,
            milestones,
        } => {
            let mut goal = Goal::new(&title);
            goal.description = description;
            goal.target_date = target
                .as_deref()
                .map(dateparse::parse_date_arg)
                .transpose()?;
            goal.milestones = milestones.into_iter().map(Milestone::new).collect();

            session.edit(|journal| journal.goals.goals.push(goal));
            session.commit()?;

            println!("{}", format!("Added goal: {}", title).green());
        }

        GoalCmd::List { all } => {
            for goal in &session.journal.goals.goals {
                if goal.completed && !all {
                    continue;
                }
                println!("  {}", goal.render());
                for (i, milestone) in goal.milestones.iter().enumerate() {
                    let mark = if milestone.completed { "✓" } else { " " };
                    println!("      {} [{}] {}", i, mark, milestone.label.dimmed());
                }
                println!("      {}", goal.id.dimmed());
            }
        }

        GoalCmd::Done { goal } => {
            let Some(found) = session.journal.goals.find(&goal) else {
                anyhow::bail!("No goal matching '{}'", goal);
            };
            let title = found.title.clone();

            session.edit(|journal| {
                if let Some(goal) = journal.goals.find_mut(&goal) {
                    goal.completed = true;
                }
            });
            session.commit()?;

            println!("{}", format!("✓ {}", title).green());
        }

        GoalCmd::Milestone { goal, add, toggle } => {
            if add.is_none() && toggle.is_none() {
                anyhow::bail!("Nothing to do: pass --add <label> and/or --toggle <index>");
            }

            let Some(found) = session.journal.goals.find(&goal) else {
                anyhow::bail!("No goal matching '{}'", goal);
            };

            // Validate the toggle index against the list as it will be once
            // a new milestone (if any) has been appended.
            let count = found.milestones.len() + usize::from(add.is_some());
            if let Some(index) = toggle
                && index >= count
            {
                anyhow::bail!("Milestone index {} out of range (0..{})", index, count);
            }

            let mut toggled = None;
            session.edit(|journal| {
                let Some(goal) = journal.goals.find_mut(&goal) else {
                    return;
                };
                if let Some(label) = add {
                    goal.milestones.push(Milestone::new(label));
                }
                if let Some(index) = toggle {
                    toggled = goal.toggle_milestone(index).map(|state| (index, state));
                }
            });
            session.commit()?;

            match toggled {
                Some((index, true)) => println!("{}", format!("✓ milestone {}", index).green()),
                Some((index, false)) => println!("Milestone {} unchecked", index),
                None => println!("{}", "Milestone added".green()),
            }
        }

        GoalCmd::Rm { id } => {
            if session.journal.goals.find(&id).is_none() {
                anyhow::bail!("No goal with id '{}'", id);
            }

            session.edit(|journal| {
                journal.goals.remove(&id);
            });
            session.commit()?;

            println!("{}", "Goal deleted".red());
        }
    }

    Ok(())
}
