use anyhow::Result;
use clap::Subcommand;
use dialoguer::Confirm;
use lifetrack_core::date::relative_label;
use lifetrack_core::nutrition::{Meal, MealType};
use owo_colors::OwoColorize;

use crate::dateparse;
use crate::session::Session;

#[derive(Subcommand)]
pub enum MealCmd {
    /// Log a meal
    Add {
        name: String,
        kcal: u32,

        /// breakfast, lunch, dinner or snack
        #[arg(short, long, default_value = "snack")]
        kind: String,

        /// Day to log (default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a day's meals and total
    List {
        /// Date to show (default today)
        date: Option<String>,
    },
    /// Delete a meal
    Rm {
        id: String,

        /// Day the meal was logged on (default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or set the daily kcal target
    Target { kcal: Option<u32> },
}

pub fn run(cmd: MealCmd) -> Result<()> {
    let mut session = Session::open()?;

    match cmd {
        MealCmd::Add {
            name,
            kcal,
            kind,
            date,
        } => {
            let Some(meal_type) = MealType::parse(&kind) else {
                anyhow::bail!("Unknown meal type '{}'. Use breakfast, lunch, dinner or snack", kind);
            };
            let date = dateparse::date_or_today(date.as_deref())?;
            let meal = Meal::new(&name, kcal, meal_type);

            session.edit(|journal| journal.nutrition.add_meal(date, meal));
            session.commit()?;

            let total = session.journal.nutrition.day_total(date);
            let target = session.journal.nutrition.target_kcal;
            println!(
                "{} {}",
                format!("Logged {} ({} kcal).", name, kcal).green(),
                format!("{}/{} kcal today", total, target).dimmed()
            );
        }

        MealCmd::List { date } => {
            let date = dateparse::date_or_today(date.as_deref())?;
            let today = chrono::Local::now().date_naive();
            let nutrition = &session.journal.nutrition;

            println!("{}", relative_label(date, today).bold());

            match nutrition.meals.get(&date) {
                Some(day) if !day.meals.is_empty() => {
                    for meal in &day.meals {
                        println!(
                            "  {:>9}  {} {}",
                            meal.meal_type.as_str().dimmed(),
                            meal.name,
                            format!("{} kcal", meal.kcal).dimmed()
                        );
                        println!("             {}", meal.id.dimmed());
                    }
                }
                _ => println!("  {}", "No meals logged".dimmed()),
            }

            let total = nutrition.day_total(date);
            let target = nutrition.target_kcal;
            let summary = format!("  {}/{} kcal", total, target);
            if total > target {
                println!("{}", summary.red());
            } else {
                println!("{}", summary.green());
            }
        }

        MealCmd::Rm { id, date, yes } => {
            let date = dateparse::date_or_today(date.as_deref())?;

            let Some(meal) = session
                .journal
                .nutrition
                .meals
                .get(&date)
                .and_then(|day| day.meals.iter().find(|m| m.id == id))
            else {
                anyhow::bail!("No meal with id '{}' on {}", id, date);
            };
            let name = meal.name.clone();

            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Delete '{}'?", name))
                    .default(false)
                    .interact()?
            {
                return Ok(());
            }

            session.edit(|journal| {
                journal.nutrition.remove_meal(date, &id);
            });
            session.commit()?;

            println!("{}", format!("Deleted: {}", name).red());
        }

        MealCmd::Target { kcal } => match kcal {
            Some(kcal) => {
                session.edit(|journal| journal.nutrition.target_kcal = kcal);
                session.commit()?;
                println!("{}", format!("Daily target set to {} kcal", kcal).green());
            }
            None => {
                println!("Daily target: {} kcal", session.journal.nutrition.target_kcal);
            }
        },
    }

    Ok(())
}
