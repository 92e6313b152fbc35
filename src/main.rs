use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use recipe_browser::render::{render_detail, render_filter_options, render_meals, Format};
use recipe_browser::{
    convert, parse, BrowserConfig, FilterKind, Page, RecipeBrowser, Route, UnitSystem,
};
use std::error::Error;
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "recipe-browser")]
#[command(about = "Browse TheMealDB recipes from the terminal", long_about = None)]
struct Cli {
    /// Unit system for ingredient measures (overrides config)
    #[arg(short, long, global = true)]
    units: Option<UnitsArg>,

    /// Render HTML instead of plain text
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random sample of recipes for inspiration
    Random {
        /// Number of recipes (defaults to the configured sample size)
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Search the full database by meal name
    Search { query: Vec<String> },
    /// List every meal in a category, area or with a main ingredient
    Filter { kind: FilterArg, value: String },
    /// Show one recipe by id or by "#meal=<id>" link
    Show { meal: String },
    /// List the available categories, areas and ingredients
    Filters,
    /// Convert a single ingredient measure, e.g. "300g"
    Convert { measure: String },
    /// Split instruction text into steps and notes (reads stdin when no file is given)
    Parse { file: Option<String> },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Imperial,
    Metric,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Imperial => UnitSystem::Imperial,
            UnitsArg::Metric => UnitSystem::Metric,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    Category,
    Area,
    Ingredient,
}

impl From<FilterArg> for FilterKind {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Category => FilterKind::Category,
            FilterArg::Area => FilterKind::Area,
            FilterArg::Ingredient => FilterKind::Ingredient,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = BrowserConfig::load()?;
    debug!("{:?}", config);

    let format = if cli.html { Format::Html } else { Format::Text };
    let unit_system = cli.units.map(UnitSystem::from).unwrap_or(config.unit_system);
    let mut browser = RecipeBrowser::builder()
        .config(config)
        .unit_system(unit_system)
        .build()?;

    match cli.command {
        Command::Random { count } => {
            let count = count.unwrap_or(browser.random_count());
            browser
                .load_random(count)
                .await
                .map_err(|_| "Failed to load meals.")?;
            print_results(browser.results_info(), render_meals(browser.meals(), format));
        }
        Command::Search { query } => {
            let searched = browser
                .search(&query.join(" "))
                .await
                .map_err(|_| "Search failed.")?;
            if searched {
                print_results(browser.results_info(), render_meals(browser.meals(), format));
            }
        }
        Command::Filter { kind, value } => {
            let filtered = browser
                .filter(kind.into(), &value)
                .await
                .map_err(|_| "Failed to load filtered meals.")?;
            if filtered {
                print_results(browser.results_info(), render_meals(browser.meals(), format));
            }
        }
        Command::Show { meal } => {
            let route = if meal.starts_with('#') {
                Route::from_hash(&meal)
            } else {
                Route::Meal(meal)
            };
            match browser
                .navigate(&route)
                .await
                .map_err(|_| "Failed to load meal.")?
            {
                Page::Detail(detail) => print!("{}", render_detail(&detail, format)),
                Page::List(meals) => println!("{}", render_meals(meals, format)),
            }
        }
        Command::Filters => {
            let options = browser.load_filters().await?;
            println!("{}", render_filter_options(&options));
        }
        Command::Convert { measure } => {
            println!("{}", convert(&measure, unit_system));
        }
        Command::Parse { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    text
                }
            };
            let parsed = parse(&text);
            for (number, step) in parsed.steps.iter().enumerate() {
                println!("{}. {}", number + 1, step);
            }
            if !parsed.notes.is_empty() {
                println!("\nNotes\n{}", parsed.notes.join("\n"));
            }
        }
    }

    Ok(())
}

fn print_results(info: String, grid: String) {
    if !info.is_empty() {
        println!("{}\n", info);
    }
    println!("{}", grid);
}
