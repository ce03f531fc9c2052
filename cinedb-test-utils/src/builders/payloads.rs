//! JSON payload builders shaped like real API responses

use serde_json::{json, Value};

/// A movie summary record
pub fn movie(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "overview": format!("Overview of {title}"),
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": format!("/backdrop-{id}.jpg"),
        "release_date": "2024-01-01",
        "vote_average": 7.2,
        "genre_ids": [18]
    })
}

/// One page of movie summaries
pub fn paged_movies(page: u32, total_pages: u32, movies: &[(u64, &str)]) -> Value {
    let results: Vec<Value> = movies.iter().map(|(id, title)| movie(*id, title)).collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * movies.len() as u32
    })
}

/// A review record
pub fn review(id: &str, author: &str) -> Value {
    json!({
        "id": id,
        "author": author,
        "content": format!("{author} thought this was fine."),
        "created_at": "2024-02-02T00:00:00Z",
        "url": format!("https://reviews.example/{id}")
    })
}

/// One page of reviews with `count` entries, authors derived from the page
pub fn review_page(page: u32, total_pages: u32, count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| review(&format!("r{page}-{i}"), &format!("author-{page}-{i}")))
        .collect();
    json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * count as u32
    })
}

/// A movie detail record
pub fn movie_detail(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "overview": format!("Overview of {title}"),
        "tagline": "Every frame a payoff",
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": format!("/backdrop-{id}.jpg"),
        "release_date": "2024-01-01",
        "runtime": 121,
        "vote_average": 7.9,
        "genres": [{"id": 18, "name": "Drama"}],
        "status": "Released"
    })
}

/// A genre list response
pub fn genre_list() -> Value {
    json!({
        "genres": [
            {"id": 18, "name": "Drama"},
            {"id": 28, "name": "Action"},
            {"id": 35, "name": "Comedy"}
        ]
    })
}

/// An image collection response
pub fn image_collection(backdrops: &[&str], posters: &[&str]) -> Value {
    let record = |path: &&str| {
        json!({
            "file_path": path,
            "width": 780,
            "height": 439,
            "vote_average": 5.3
        })
    };
    json!({
        "backdrops": backdrops.iter().map(record).collect::<Vec<_>>(),
        "posters": posters.iter().map(record).collect::<Vec<_>>(),
        "profiles": []
    })
}
