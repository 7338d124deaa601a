use anyhow::Result;
use prettytable::{Cell, Row, Table};
use shared::{
    routes, AppearanceResponse, CreateAppearanceRequest, EpisodeDetail, EpisodeSummary,
    GuestSummary,
};
use tracing::info;

use crate::client::ApiClient;

pub async fn episodes(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url);
    let episodes: Vec<EpisodeSummary> = client.get(routes::EPISODES).await?;

    if episodes.is_empty() {
        println!("No episodes");
        return Ok(());
    }

    episode_table(&episodes).printstd();
    println!("{} episodes", episodes.len());
    Ok(())
}

pub async fn episode(api_url: &str, id: i32) -> Result<()> {
    let client = ApiClient::new(api_url);
    let detail: EpisodeDetail = client.get(&routes::episode(id)).await?;

    println!("Episode #{} ({}), id {}", detail.number, detail.date, detail.id);
    if detail.appearances.is_empty() {
        println!("  no appearances");
        return Ok(());
    }

    appearance_table(&detail).printstd();
    Ok(())
}

pub async fn delete_episode(api_url: &str, id: i32) -> Result<()> {
    let client = ApiClient::new(api_url);
    client.delete(&routes::episode(id)).await?;

    info!("Deleted episode {}", id);
    println!("✓ Episode {} deleted", id);
    Ok(())
}

pub async fn guests(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url);
    let guests: Vec<GuestSummary> = client.get(routes::GUESTS).await?;

    if guests.is_empty() {
        println!("No guests");
        return Ok(());
    }

    guest_table(&guests).printstd();
    println!("{} guests", guests.len());
    Ok(())
}

pub async fn appear(api_url: &str, rating: i32, episode_id: i32, guest_id: i32) -> Result<()> {
    let client = ApiClient::new(api_url);
    let request = CreateAppearanceRequest {
        rating,
        episode_id,
        guest_id,
    };

    let created: AppearanceResponse = client.post(routes::APPEARANCES, &request).await?;

    info!("Created appearance {}", created.id);
    println!("✓ Appearance {} created", created.id);
    println!("  Episode: #{} ({})", created.episode.number, created.episode.date);
    println!("  Guest:   {} ({})", created.guest.name, created.guest.occupation);
    println!("  Rating:  {}", created.rating);
    Ok(())
}

pub(crate) fn episode_table(episodes: &[EpisodeSummary]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("ID"),
        Cell::new("Date"),
        Cell::new("Number"),
    ]));
    for episode in episodes {
        table.add_row(Row::new(vec![
            Cell::new(&episode.id.to_string()),
            Cell::new(&episode.date),
            Cell::new(&episode.number.to_string()),
        ]));
    }
    table
}

pub(crate) fn guest_table(guests: &[GuestSummary]) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("ID"),
        Cell::new("Name"),
        Cell::new("Occupation"),
    ]));
    for guest in guests {
        table.add_row(Row::new(vec![
            Cell::new(&guest.id.to_string()),
            Cell::new(&guest.name),
            Cell::new(&guest.occupation),
        ]));
    }
    table
}

pub(crate) fn appearance_table(detail: &EpisodeDetail) -> Table {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Appearance"),
        Cell::new("Guest"),
        Cell::new("Occupation"),
        Cell::new("Rating"),
    ]));
    for appearance in &detail.appearances {
        table.add_row(Row::new(vec![
            Cell::new(&appearance.id.to_string()),
            Cell::new(&appearance.guest.name),
            Cell::new(&appearance.guest.occupation),
            Cell::new(&appearance.rating.to_string()),
        ]));
    }
    table
}
