use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

use nutriverse_core::config::data_file_from_env_value;
use nutriverse_core::{CoreConfig, Query, Season, SeasonalFood};
use nutriverse_favorites::FavoritesStore;

#[derive(Parser)]
#[command(name = "nutriverse")]
#[command(about = "Nutriverse food nutrition CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all foods, optionally narrowed by category
    List {
        /// Category to filter by (fruit, vegetable, herb)
        #[arg(long)]
        category: Option<String>,
    },
    /// Search foods by free text and optional filters
    Search {
        /// Free-text search term
        query: String,
        /// Category to filter by
        #[arg(long)]
        category: Option<String>,
        /// Season label to filter by
        #[arg(long)]
        season: Option<String>,
        /// Vitamin code the food must contain (e.g. C, B6)
        #[arg(long)]
        vitamin: Option<String>,
        /// Mineral code the food must contain (e.g. iron)
        #[arg(long)]
        mineral: Option<String>,
        /// Health goal the food must support (e.g. immunity)
        #[arg(long)]
        health_goal: Option<String>,
        /// Substring of a vitamin or mineral code name
        #[arg(long)]
        nutrient: Option<String>,
        /// Substring of a benefit category or description
        #[arg(long)]
        benefit: Option<String>,
    },
    /// Show the full record for one food
    Show {
        /// URL-safe food identifier
        slug: String,
    },
    /// Manage locally stored favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    /// List favorited foods
    List,
    /// Toggle a food in the favorites set
    Toggle {
        /// Food id to toggle
        food_id: String,
    },
    /// Remove every favorite
    Clear,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_file = data_file_from_env_value(std::env::var("NUTRIVERSE_DATA_FILE").ok());
    let cfg = CoreConfig::new(data_file)?;
    let store = cfg.load_store()?;
    let month0 = Utc::now().month0();

    match cli.command {
        Some(Commands::List { category }) => {
            let query = Query {
                category,
                ..Query::default()
            };
            print_results(&query.run(&store, month0));
        }
        Some(Commands::Search {
            query,
            category,
            season,
            vitamin,
            mineral,
            health_goal,
            nutrient,
            benefit,
        }) => {
            let query = Query {
                search: Some(query),
                category,
                season,
                vitamin,
                mineral,
                health_goal,
                nutrient,
                benefit,
            };
            print_results(&query.run(&store, month0));
        }
        Some(Commands::Show { slug }) => {
            let food = store.by_slug(&slug)?;
            let current = Season::for_month0(month0);
            let seasonal = SeasonalFood::derive(food.clone(), current);
            println!("{} ({})", seasonal.food.name, seasonal.food.category);
            println!("  {}", seasonal.food.short_description);
            println!("  in season now: {}", if seasonal.is_in_season { "yes" } else { "no" });
            let facts = &seasonal.food.nutritional_facts;
            println!(
                "  per 100g: {} kcal, {}g protein, {}g carbs, {}g fiber, {}g sugar, {}g fat",
                facts.calories, facts.protein, facts.carbs, facts.fiber, facts.sugar, facts.fat
            );
            if !facts.vitamins.is_empty() {
                let codes: Vec<&str> = facts.vitamins.keys().map(String::as_str).collect();
                println!("  vitamins: {}", codes.join(", "));
            }
            if !facts.minerals.is_empty() {
                let codes: Vec<&str> = facts.minerals.keys().map(String::as_str).collect();
                println!("  minerals: {}", codes.join(", "));
            }
            for benefit in &seasonal.food.benefits {
                println!("  benefit [{}]: {}", benefit.category, benefit.description);
            }
            if let Some(fun_fact) = &seasonal.food.fun_fact {
                println!("  fun fact: {}", fun_fact);
            }
        }
        Some(Commands::Favorites { command }) => {
            let dir = std::env::var("NUTRIVERSE_HOME").unwrap_or_else(|_| ".".into());
            let mut favorites = FavoritesStore::open(std::path::Path::new(&dir))?;
            match command {
                FavoritesCommands::List => {
                    if favorites.ids().is_empty() {
                        println!("No favorites saved.");
                    } else {
                        for id in favorites.ids() {
                            match store.all().iter().find(|f| &f.id == id) {
                                Some(food) => println!("{}: {}", food.id, food.name),
                                None => println!("{}: (unknown food)", id),
                            }
                        }
                    }
                }
                FavoritesCommands::Toggle { food_id } => {
                    let now_favorited = favorites.toggle(&food_id)?;
                    if now_favorited {
                        println!("Added {} to favorites.", food_id);
                    } else {
                        println!("Removed {} from favorites.", food_id);
                    }
                }
                FavoritesCommands::Clear => {
                    favorites.clear()?;
                    println!("Cleared all favorites.");
                }
            }
        }
        None => {
            println!("Use --help to see available commands.");
        }
    }

    Ok(())
}

fn print_results(results: &[SeasonalFood]) {
    if results.is_empty() {
        println!("No foods found.");
        return;
    }
    for item in results {
        let marker = if item.is_in_season { " [in season]" } else { "" };
        println!(
            "{} ({}) - {}{}",
            item.food.name, item.food.category, item.food.short_description, marker
        );
    }
}
