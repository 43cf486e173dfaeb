use eventra::{CatalogClient, ClubQuery, ClubSort, DateWindow, EventQuery, EventSort};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eventra::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let search = std::env::args().nth(1).unwrap_or_default();
    let client = CatalogClient::new();

    let landing = client.landing().await?;
    println!(
        "{}+ clubs, {}+ events",
        landing.club_count, landing.event_count
    );
    for event in &landing.upcoming_events {
        println!("  upcoming: {} ({})", event.title, event.date);
    }

    let query = ClubQuery::default()
        .with_search(search.as_str())
        .with_sort(ClubSort::Members);
    let mut clubs = client.clubs(query).await?;
    println!("\n{}", clubs.summary());
    if clubs.is_empty() {
        println!("No clubs found. Showing all clubs instead.");
        clubs = client.clubs(clubs.reset_query()).await?;
    }
    for card in clubs.cards() {
        println!(
            "  {} [{}] {} members {}\n    {}",
            card.name,
            card.category,
            card.members,
            card.social_icons.concat(),
            card.excerpt
        );
    }

    let query = EventQuery::default()
        .with_window(DateWindow::ThisMonth)
        .with_sort(EventSort::Popularity);
    let events = client.events(query).await?;
    println!("\n{}: {}", events.title(), events.summary());
    for card in events.cards() {
        println!(
            "  [{}] {} by {} on {} at {} ({:.0}% full)",
            card.status.label(),
            card.title,
            card.organizer.unwrap_or_default(),
            card.date.full,
            card.time,
            card.progress.fill_percent()
        );
    }

    if let Some(club) = clubs.clubs.first() {
        let listing = client.club_events(club.id, EventQuery::default()).await?;
        println!("\n{}: {}", listing.title(), listing.summary());
    }

    if let Some(first) = events.events.first() {
        if let Some(detail) = client.event_detail(first.id).await? {
            println!("\n{} by {}", detail.event.title, detail.organizer.name());
            println!("  {} at {}", detail.schedule.start_date, detail.schedule.start_time);
            println!("  {}", detail.progress.summary());
            if let Some(heading) = detail.related_heading() {
                println!("  {heading}");
            }
            for related in detail.related_cards() {
                println!(
                    "    {} {}: {} {}",
                    related.date.day, related.date.month, related.title, related.excerpt
                );
            }
        }
    }

    Ok(())
}
