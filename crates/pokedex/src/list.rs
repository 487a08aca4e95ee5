use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::config::{self, PaginationArgs};
use crate::pages::format_page_bar;
use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::generation::Generation;
use pokedex_core::pagination::{compute, PageMarker, PaginationConfig};
use pokedex_core::pokemon::{
    Pokemon, PokemonQuery, DEFAULT_EXPERIENCED_MIN, DEFAULT_RARE_MIN, DEFAULT_TALL_MIN,
};
use pokedex_core::sort::SortField;
use pokedex_core::string::{capitalize, pad_left};
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "list")]
#[command(about = "List Pokémon from a dataset file, one page at a time")]
pub struct App {
    /// JSON file holding an array of Pokémon records
    #[arg(short, long, env = "POKEDEX_DATA")]
    pub data: PathBuf,

    /// Only legendary Pokémon
    #[arg(long, conflicts_with = "not_legendary")]
    pub legendary: bool,

    /// Only non-legendary Pokémon
    #[arg(long)]
    pub not_legendary: bool,

    /// Only Pokémon with the flying type
    #[arg(long)]
    pub flying: bool,

    /// Only Pokémon with the intimidate ability
    #[arg(long)]
    pub intimidating: bool,

    /// Positive base experience of at least MIN (defaults to 100)
    #[arg(
        long,
        value_name = "MIN",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPERIENCED_MIN.to_string()
    )]
    pub experienced: Option<i64>,

    /// Base experience of at least MIN (defaults to 200)
    #[arg(
        long,
        value_name = "MIN",
        num_args = 0..=1,
        default_missing_value = DEFAULT_RARE_MIN.to_string()
    )]
    pub rare: Option<i64>,

    /// Height of at least MIN (defaults to 20)
    #[arg(
        long,
        value_name = "MIN",
        num_args = 0..=1,
        default_missing_value = DEFAULT_TALL_MIN.to_string()
    )]
    pub tall: Option<u32>,

    /// Generation number (1-9) or PokeAPI name (generation-iv)
    #[arg(short, long)]
    pub generation: Option<Generation>,

    /// Sort field: id, base_experience, generation, height, name, species, weight
    #[arg(short, long, default_value = "id")]
    pub sort: SortField,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-indexed, clamped to the available pages)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Pokémon per page, at least 1 (defaults to `list.limit` from the config file)
    #[arg(short, long)]
    pub limit: Option<NonZeroUsize>,

    #[clap(flatten)]
    pub pagination: PaginationArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One page of a filtered listing
#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    pub filters: Vec<String>,
    pub items: Vec<&'a Pokemon>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
    pub pages: Vec<PageMarker>,
}

/// Module entry point
pub fn run(app: App, global: crate::Global) -> Result<()> {
    let settings = config::load(global.config.as_deref())?;
    let pagination = app.pagination.resolve(settings.pagination)?;
    let limit = app.limit.unwrap_or(settings.list.limit);

    let pokemons = load_pokemons(&app.data)?;
    let query = build_query(&pokemons, &app);

    debug!(
        "{} of {} Pokémon match [{}]",
        query.len(),
        pokemons.len(),
        query.labels().join(", ")
    );

    let output = list_data(&query, app.page, limit, &pagination);

    if app.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Read and parse the dataset file
pub fn load_pokemons(path: &Path) -> Result<Vec<Pokemon>> {
    if !path.is_file() {
        return Err(Error::DataFileNotFound(path.display().to_string()).into());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| f!("Failed to read data file {}", path.display()))?;

    let pokemons: Vec<Pokemon> = serde_json::from_str(&contents)
        .with_context(|| f!("Failed to parse data file {}", path.display()))?;

    debug!("Loaded {} Pokémon from {}", pokemons.len(), path.display());

    Ok(pokemons)
}

/// Apply the filters selected on the command line, then sort
pub fn build_query<'a>(pokemons: &'a [Pokemon], app: &App) -> PokemonQuery<'a> {
    let mut query = PokemonQuery::new(pokemons);

    if app.legendary {
        query = query.legendary(true);
    }
    if app.not_legendary {
        query = query.legendary(false);
    }
    if app.flying {
        query = query.flying();
    }
    if app.intimidating {
        query = query.intimidating();
    }
    if let Some(min) = app.experienced {
        query = query.experienced(min);
    }
    if let Some(min) = app.rare {
        query = query.rare(min);
    }
    if let Some(min) = app.tall {
        query = query.tall(min);
    }
    if app.generation.is_some() {
        query = query.generation(app.generation);
    }

    query.sort_by(app.sort, app.desc)
}

/// Slice out one page and compute its page bar
///
/// The requested page is clamped into `[1, total_pages]`.
pub fn list_data<'a>(
    query: &PokemonQuery<'a>,
    page: usize,
    limit: NonZeroUsize,
    pagination: &PaginationConfig,
) -> ListOutput<'a> {
    let limit = limit.get();
    let total_pages = query.total_pages(limit);
    let current_page = page.clamp(1, total_pages.max(1));
    let to_i64 = |n: usize| i64::try_from(n).unwrap_or(i64::MAX);

    ListOutput {
        filters: query.labels().to_vec(),
        items: query.page(current_page, limit).to_vec(),
        current_page,
        total_pages,
        total_items: query.len(),
        limit,
        pages: compute(to_i64(current_page), to_i64(total_pages), pagination),
    }
}

pub fn format_list_text(output: &ListOutput<'_>) -> String {
    let mut result = String::new();

    if output.items.is_empty() {
        result.push_str("No Pokémon match the selected filters.\n");
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["#", "Name", "Types", "Gen", "Exp", "Height"]);

        for pokemon in &output.items {
            let types = pokemon
                .types
                .iter()
                .map(|t| capitalize(t))
                .collect::<Vec<_>>()
                .join("/");

            table.add_row(prettytable::row![
                pad_left(pokemon.id, '0', 4),
                capitalize(&pokemon.name),
                types,
                pokemon.generation,
                pokemon.base_experience,
                pokemon.height
            ]);
        }

        result.push_str(&table.to_string());
    }

    if !output.filters.is_empty() {
        result.push_str(&f!(
            "\n{}: {}\n",
            "Filters".green(),
            output.filters.join(", ")
        ));
    }

    result.push_str(&f!(
        "\n{} {} {} {} ({} {})\n",
        "Page".bright_white(),
        output.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        output.total_pages.to_string().bright_cyan().bold(),
        output.total_items.to_string().bright_cyan().bold(),
        "total".bright_white()
    ));

    if !output.pages.is_empty() {
        result.push_str(&f!(
            "{}\n",
            format_page_bar(&output.pages, output.current_page as u64)
        ));
    }

    result
}
