use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::error::{EventraError, Result};
use crate::model::{ClubId, ClubQuery, EventId, EventQuery};
use crate::view::{ClubListing, EventDetail, EventListing, Landing};

/// Simulated fetch latency of listing and detail pages.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// Simulated fetch latency of the landing page.
pub const LANDING_LATENCY: Duration = Duration::from_millis(800);

const CLUBS_FILE: &str = "clubs.json";
const EVENTS_FILE: &str = "events.json";

#[derive(Debug, Clone)]
enum Source {
    Bundled,
    Directory(PathBuf),
    Preloaded(Catalog),
}

/// The asynchronous boundary in front of the [`Catalog`].
///
/// Today every request reads static data after a fixed delay. A real backend
/// can replace the source without changing callers: they already await a
/// `Result`.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> eventra::Result<()> {
/// use eventra::{CatalogClient, ClubQuery};
///
/// let client = CatalogClient::new();
/// let listing = client.clubs(ClubQuery::default().with_search("chess")).await?;
/// println!("{}", listing.summary());
///
/// let landing = client.landing().await?;
/// println!("{} clubs", landing.club_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    source: Source,
    latency: Duration,
    landing_latency: Duration,
    today: Option<NaiveDate>,
    catalog: OnceCell<Catalog>,
}

impl CatalogClient {
    /// Serve the bundled data with the default latencies.
    pub fn new() -> Self {
        Self::with_source(Source::Bundled)
    }

    /// Read `clubs.json` and `events.json` from `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_source(Source::Directory(dir.into()))
    }

    /// Serve an already built catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::with_source(Source::Preloaded(catalog))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            latency: DEFAULT_LATENCY,
            landing_latency: LANDING_LATENCY,
            today: None,
            catalog: OnceCell::new(),
        }
    }

    /// Override the simulated latency of loads, listings and details.
    /// `Duration::ZERO` disables it.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Override the simulated latency of the landing page.
    pub fn with_landing_latency(mut self, latency: Duration) -> Self {
        self.landing_latency = latency;
        self
    }

    /// Pin the day that date windows and statuses are measured against.
    /// Without it the local calendar date is used.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn landing_latency(&self) -> Duration {
        self.landing_latency
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Wait out the simulated latency, then produce a fresh catalog.
    ///
    /// The delay always runs to completion; there is no timeout or retry.
    #[instrument(skip(self), fields(latency_ms = self.latency.as_millis() as u64))]
    pub async fn load(&self) -> Result<Catalog> {
        pause(self.latency).await;
        self.read_source().await
    }

    /// The club listing page.
    #[instrument(skip(self))]
    pub async fn clubs(&self, query: ClubQuery) -> Result<ClubListing<'_>> {
        let catalog = self.fetch(self.latency).await?;
        Ok(ClubListing::build(catalog, query))
    }

    /// The catalog-wide event listing page.
    #[instrument(skip(self))]
    pub async fn events(&self, query: EventQuery) -> Result<EventListing<'_>> {
        let catalog = self.fetch(self.latency).await?;
        Ok(EventListing::all(catalog, query, self.today()))
    }

    /// The event listing of one club. An unknown club is not an error.
    #[instrument(skip(self))]
    pub async fn club_events(
        &self,
        club_id: ClubId,
        query: EventQuery,
    ) -> Result<EventListing<'_>> {
        let catalog = self.fetch(self.latency).await?;
        Ok(EventListing::for_club(catalog, club_id, query, self.today()))
    }

    /// The single event page, `None` when no event has this id.
    #[instrument(skip(self))]
    pub async fn event_detail(&self, id: EventId) -> Result<Option<EventDetail<'_>>> {
        let catalog = self.fetch(self.latency).await?;
        Ok(EventDetail::find(catalog, id, self.today()))
    }

    /// The landing page highlights, served after the landing latency.
    #[instrument(skip(self))]
    pub async fn landing(&self) -> Result<Landing<'_>> {
        let catalog = self.fetch(self.landing_latency).await?;
        Ok(Landing::build(catalog, self.today()))
    }

    /// Wait out `latency`, then hand out the cached catalog, reading the
    /// source on first use.
    async fn fetch(&self, latency: Duration) -> Result<&Catalog> {
        pause(latency).await;
        self.catalog.get_or_try_init(|| self.read_source()).await
    }

    async fn read_source(&self) -> Result<Catalog> {
        let catalog = match &self.source {
            Source::Bundled => Catalog::bundled()?,
            Source::Directory(dir) => {
                let clubs = read_file(&dir.join(CLUBS_FILE)).await?;
                let events = read_file(&dir.join(EVENTS_FILE)).await?;
                Catalog::from_json(&clubs, &events)?
            }
            Source::Preloaded(catalog) => catalog.clone(),
        };

        debug!(
            clubs = catalog.clubs().len(),
            events = catalog.events().len(),
            "catalog ready"
        );
        Ok(catalog)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn pause(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

async fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading data file");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| EventraError::Io {
            path: path.to_owned(),
            source: e,
        })
}
