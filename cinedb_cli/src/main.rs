use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cinedb_client_core::{CatalogClient, DiscoverFilter, MediaType, TimeWindow};

mod config;
mod output;

use crate::config::ConfigManager;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cinedb")]
#[command(author, version, about = "Movie catalog viewer with cached request orchestration", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Popular movies
    Popular {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Bypass the cache and refetch
        #[arg(long)]
        refresh: bool,
    },
    /// Top rated movies
    TopRated {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        refresh: bool,
    },
    /// Movies currently in theaters
    NowPlaying {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        refresh: bool,
    },
    /// Upcoming releases
    Upcoming {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        refresh: bool,
    },
    /// Search the catalog
    Search {
        /// Search terms
        query: String,
        /// What to search
        #[arg(short, long, value_enum, default_value = "movie")]
        media: SearchMedia,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Full details for one movie
    Detail {
        /// Movie identifier
        id: u64,
        #[arg(long)]
        refresh: bool,
    },
    /// Reviews for a movie, loaded incrementally
    Reviews {
        /// Movie identifier
        id: u64,
        /// How many pages to accumulate
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Trending titles
    Trending {
        #[arg(short, long, value_enum, default_value = "movie")]
        media: TrendingMedia,
        #[arg(short, long, value_enum, default_value = "week")]
        window: WindowArg,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Genre list
    Genres {
        #[arg(short, long, value_enum, default_value = "movie")]
        media: GenreMedia,
    },
    /// Discover movies with filters
    Discover {
        /// Comma-separated genre identifiers
        #[arg(long)]
        with_genres: Option<String>,
        #[arg(long)]
        year: Option<u32>,
        #[arg(long)]
        sort_by: Option<String>,
        /// Minimum vote average
        #[arg(long)]
        min_rating: Option<f64>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init,
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SearchMedia {
    Movie,
    Tv,
    Person,
    Multi,
    Company,
    Collection,
    Keyword,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrendingMedia {
    Movie,
    Tv,
    Person,
    All,
}

impl From<TrendingMedia> for MediaType {
    fn from(media: TrendingMedia) -> Self {
        match media {
            TrendingMedia::Movie => MediaType::Movie,
            TrendingMedia::Tv => MediaType::Tv,
            TrendingMedia::Person => MediaType::Person,
            TrendingMedia::All => MediaType::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindowArg {
    Day,
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(window: WindowArg) -> Self {
        match window {
            WindowArg::Day => TimeWindow::Day,
            WindowArg::Week => TimeWindow::Week,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenreMedia {
    Movie,
    Tv,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let manager = ConfigManager::new();

    // Config subcommands never need a credential.
    if let Commands::Config { action } = &cli.command {
        return run_config(&manager, action, cli.format);
    }

    let app_config = manager.load()?;
    let client = CatalogClient::new(app_config.client)
        .context("could not construct the catalog client")?;

    run_command(&client, cli.command, cli.format).await
}

fn run_config(manager: &ConfigManager, action: &ConfigAction, format: OutputFormat) -> Result<()> {
    match action {
        ConfigAction::Init => {
            manager.init()?;
            println!("wrote {}", manager.config_path().display());
        }
        ConfigAction::Show => {
            let config = manager.load()?;
            if format == OutputFormat::Json {
                output::print_json(&config)?;
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", manager.config_path().display());
        }
    }
    Ok(())
}

async fn run_command(client: &CatalogClient, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Popular { page, refresh } => {
            let result = client.movies().popular(page, refresh).await?;
            output::print_movie_page(&result, format)?;
        }
        Commands::TopRated { page, refresh } => {
            let result = client.movies().top_rated(page, refresh).await?;
            output::print_movie_page(&result, format)?;
        }
        Commands::NowPlaying { page, refresh } => {
            let result = client.movies().now_playing(page, refresh).await?;
            output::print_movie_page(&result, format)?;
        }
        Commands::Upcoming { page, refresh } => {
            let result = client.movies().upcoming(page, refresh).await?;
            output::print_movie_page(&result, format)?;
        }
        Commands::Search { query, media, page } => match media {
            SearchMedia::Movie => {
                let result = client.search().movies(&query, page).await?;
                output::print_movie_page(&result, format)?;
            }
            SearchMedia::Tv => {
                let result = client.search().tv(&query, page).await?;
                output::print_tv_page(&result, format)?;
            }
            SearchMedia::Person => {
                let result = client.search().people(&query, page).await?;
                output::print_person_page(&result, format)?;
            }
            SearchMedia::Multi => {
                let result = client.search().multi(&query, page).await?;
                output::print_multi_page(&result, format)?;
            }
            SearchMedia::Company => {
                let result = client.search().companies(&query, page).await?;
                output::print_named_page(&result, format)?;
            }
            SearchMedia::Collection => {
                let result = client.search().collections(&query, page).await?;
                output::print_named_page(&result, format)?;
            }
            SearchMedia::Keyword => {
                let result = client.search().keywords(&query, page).await?;
                output::print_named_page(&result, format)?;
            }
        },
        Commands::Detail { id, refresh } => {
            let detail = client.movies().detail(id, refresh).await?;
            output::print_movie_detail(&detail, client.image_base(), format)?;
        }
        Commands::Reviews { id, pages } => {
            let feed = client.review_feed();
            let mut resource = feed.load_first(id).await?;
            for _ in 1..pages {
                if !feed.has_more(id).await {
                    break;
                }
                resource = feed.load_more(id).await?;
            }
            output::print_reviews(&resource, format)?;
        }
        Commands::Trending {
            media,
            window,
            page,
        } => {
            let result = client
                .trending()
                .list(media.into(), window.into(), page)
                .await?;
            output::print_multi_page(&result, format)?;
        }
        Commands::Genres { media } => {
            let genres = match media {
                GenreMedia::Movie => client.genres().movie().await?,
                GenreMedia::Tv => client.genres().tv().await?,
            };
            output::print_genres(&genres, format)?;
        }
        Commands::Discover {
            with_genres,
            year,
            sort_by,
            min_rating,
            page,
        } => {
            let mut filter = DiscoverFilter::new();
            if let Some(genres) = with_genres {
                filter = filter.with_genres(genres);
            }
            if let Some(year) = year {
                filter = filter.year(year);
            }
            if let Some(sort_by) = sort_by {
                filter = filter.sort_by(sort_by);
            }
            if let Some(min_rating) = min_rating {
                filter = filter.vote_average_gte(min_rating);
            }
            let result = client.discover().movies(filter, page).await?;
            output::print_movie_page(&result, format)?;
        }
        Commands::Config { .. } => unreachable!("handled before client construction"),
    }
    Ok(())
}
