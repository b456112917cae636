//! stocklist CLI
//!
//! Command-line interface for managing the drink inventory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stocklist::{CategoryPolicy, CategoryRegistry, Config, Inventory, Item, ItemPatch, StockError};
use tracing_subscriber::{fmt, EnvFilter};

/// stocklist CLI
#[derive(Parser, Debug)]
#[command(name = "stocklist-cli")]
#[command(about = "Manage a small drink inventory")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./stocklist_data")]
    data_dir: PathBuf,

    /// Known categories in display order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    categories: Option<Vec<String>>,

    /// Accept categories that are not in the registry (listed last)
    #[arg(long)]
    allow_unknown_categories: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a drink, or overwrite the one with the same name
    Add {
        name: String,
        category: String,
        price: f64,
        stock: u32,
    },

    /// Change fields of an existing drink
    Edit {
        /// The drink to edit
        name: String,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        stock: Option<u32>,

        /// New name for the drink
        #[arg(long)]
        rename: Option<String>,
    },

    /// Remove a drink
    Remove {
        name: String,
    },

    /// Look up a drink by name (case-insensitive)
    Find {
        name: String,
    },

    /// List all drinks
    List {
        /// Show the sorted view file instead of the working set
        #[arg(long)]
        sorted: bool,
    },

    /// List drinks of one type (case-insensitive)
    Type {
        category: String,
    },

    /// Show a category block, or find a drink inside it
    Search {
        category: String,
        name: Option<String>,
    },

    /// Show the category registry
    Categories,
}

fn main() {
    // Logs go to stderr so tables on stdout stay clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stocklist=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), StockError> {
    let config = build_config(&args)?;
    let mut inventory = Inventory::open(config)?;

    match args.command {
        Commands::Add {
            name,
            category,
            price,
            stock,
        } => {
            let outcome = inventory.upsert(&name, &category, price, stock)?;
            println!("{:?}: {}", outcome, name);
        }

        Commands::Edit {
            name,
            category,
            price,
            stock,
            rename,
        } => {
            let patch = ItemPatch {
                name: rename,
                category,
                price,
                stock,
            };
            let item = inventory.edit(&name, patch)?;
            println!("Updated:");
            print_table(std::iter::once(&item));
        }

        Commands::Remove { name } => {
            if inventory.remove(&name)? {
                println!("Removed: {}", name);
            } else {
                return Err(StockError::ItemNotFound(name));
            }
        }

        Commands::Find { name } => match inventory.find(&name) {
            Some(item) => print_table(std::iter::once(item)),
            None => return Err(StockError::ItemNotFound(name)),
        },

        Commands::List { sorted } => {
            if sorted {
                print_table(&inventory.load_sorted()?);
            } else {
                print_table(inventory.catalog());
            }
        }

        Commands::Type { category } => {
            let items = inventory.by_category(&category);
            if items.is_empty() {
                println!("No drinks found for type {}", category);
            } else {
                print_table(items);
            }
        }

        Commands::Search { category, name } => match name {
            Some(name) => {
                let item = inventory.search(&category, &name)?;
                print_table(std::iter::once(item));
            }
            None => {
                let block = inventory
                    .category_slice(&category)
                    .ok_or(StockError::CategoryNotFound(category))?;
                print_table(block);
            }
        },

        Commands::Categories => {
            for (index, name) in inventory.registry().iter().enumerate() {
                println!("{}. {}", index + 1, name);
            }
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<Config, StockError> {
    let mut builder = Config::builder().data_dir(&args.data_dir);

    if let Some(names) = &args.categories {
        builder = builder.categories(CategoryRegistry::new(names)?);
    }
    if args.allow_unknown_categories {
        builder = builder.category_policy(CategoryPolicy::Trailing);
    }

    Ok(builder.build())
}

fn print_table<'a, I>(items: I)
where
    I: IntoIterator<Item = &'a Item>,
{
    println!("{:<20}{:<15}{:>10}{:>10}", "Name", "Category", "Price", "Stock");
    println!("{}", "-".repeat(55));
    for item in items {
        println!(
            "{:<20}{:<15}{:>10.2}{:>10}",
            item.name, item.category, item.price, item.stock
        );
    }
}
