//! Terminal rendering for catalog data
//!
//! Text output is intentionally plain: one line per title, page footer with
//! the load-more hint. JSON output pretty-prints the typed models for
//! scripting.

use anyhow::Result;
use cinedb_client_core::images::PosterSize;
use cinedb_client_core::models::{
    Genre, MovieDetail, MovieSummary, MultiResult, NamedResult, Paged, PersonSummary, Review,
    TvSummary,
};
use cinedb_client_core::paged::PagedResource;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn page_footer_text<T>(page: &Paged<T>) -> Option<String> {
    if page.total_pages > page.page {
        Some(format!(
            "page {}/{} - pass --page {} for more",
            page.page,
            page.total_pages,
            page.page + 1
        ))
    } else {
        None
    }
}

fn page_footer<T>(page: &Paged<T>) {
    if let Some(footer) = page_footer_text(page) {
        println!("{}", footer.dimmed());
    }
}

fn review_heading(author: &str) -> String {
    format!("- {author}")
}

pub fn print_movie_page(page: &Paged<MovieSummary>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }
    for movie in &page.results {
        let year = movie
            .release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .unwrap_or("----");
        println!(
            "{:>8}  {} ({year})  {}",
            movie.id.to_string().dimmed(),
            movie.title.bold(),
            format!("{:.1}", movie.vote_average).yellow()
        );
    }
    page_footer(page);
    Ok(())
}

pub fn print_tv_page(page: &Paged<TvSummary>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }
    for show in &page.results {
        println!(
            "{:>8}  {}  {}",
            show.id.to_string().dimmed(),
            show.name.bold(),
            format!("{:.1}", show.vote_average).yellow()
        );
    }
    page_footer(page);
    Ok(())
}

pub fn print_person_page(page: &Paged<PersonSummary>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }
    for person in &page.results {
        let department = person.known_for_department.as_deref().unwrap_or("");
        println!(
            "{:>8}  {}  {}",
            person.id.to_string().dimmed(),
            person.name.bold(),
            department.dimmed()
        );
    }
    page_footer(page);
    Ok(())
}

pub fn print_multi_page(page: &Paged<MultiResult>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }
    for entry in &page.results {
        let kind = entry.media_type.as_deref().unwrap_or("?");
        println!(
            "{:>8}  {}  {}",
            entry.id.to_string().dimmed(),
            entry.label().bold(),
            format!("[{kind}]").dimmed()
        );
    }
    page_footer(page);
    Ok(())
}

pub fn print_named_page(page: &Paged<NamedResult>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(page);
    }
    for entry in &page.results {
        println!("{:>8}  {}", entry.id.to_string().dimmed(), entry.name);
    }
    page_footer(page);
    Ok(())
}

pub fn print_movie_detail(
    detail: &MovieDetail,
    image_base: &str,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(detail);
    }
    println!("{}", detail.title.bold());
    if let Some(tagline) = detail.tagline.as_deref() {
        if !tagline.is_empty() {
            println!("{}", tagline.italic());
        }
    }
    if let Some(date) = detail.release_date.as_deref() {
        println!("released: {date}");
    }
    if let Some(runtime) = detail.runtime {
        println!("runtime:  {runtime} min");
    }
    if !detail.genres.is_empty() {
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        println!("genres:   {}", names.join(", "));
    }
    println!("rating:   {:.1}", detail.vote_average);
    if let Some(url) = cinedb_client_core::image_url(
        image_base,
        PosterSize::W342.as_str(),
        detail.poster_path.as_deref(),
    ) {
        println!("poster:   {}", url.underline());
    }
    if !detail.overview.is_empty() {
        println!("\n{}", detail.overview);
    }
    Ok(())
}

pub fn print_reviews(resource: &PagedResource<Review>, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&resource.items);
    }
    for review in &resource.items {
        println!("{}", review_heading(&review.author).bold());
        println!("{}\n", review.content);
    }
    println!(
        "{}",
        format!(
            "{} review(s), page {}/{}",
            resource.items.len(),
            resource.current_page,
            resource.total_pages
        )
        .dimmed()
    );
    Ok(())
}

pub fn print_genres(genres: &[Genre], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&genres);
    }
    for genre in genres {
        println!("{:>6}  {}", genre.id.to_string().dimmed(), genre.name);
    }
    Ok(())
}
