/// Card generator: runs fixture lookup, composition and saving for one
/// match id and folds the result into an `Outcome`.
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::GenResult;
use crate::fixture::client::FixtureClient;
use crate::net::http::HttpSource;
use crate::render::compositor::Compositor;
use crate::services::storage::StorageService;

/// How a single run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Card written to this path
    Generated(PathBuf),
    /// Input line was empty
    NoMatchId,
    /// API answered without a `data` field
    NoMatchData,
    /// Any failure along the way, rendered as text
    Failed(String),
}

impl Outcome {
    /// Line to show the user, if any. Success stays silent.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Generated(_) => None,
            Outcome::NoMatchId => Some("No Match ID provided.".to_string()),
            Outcome::NoMatchData => Some("No match data found.".to_string()),
            Outcome::Failed(detail) => Some(format!("An unexpected error occurred: {detail}")),
        }
    }
}

pub struct Generator<H: HttpSource> {
    config: GeneratorConfig,
    http: H,
}

impl<H: HttpSource> Generator<H> {
    pub fn new(config: GeneratorConfig, http: H) -> Self {
        Self { config, http }
    }

    /// Generate the card for `match_id`. Never fails; errors come back as
    /// `Outcome::Failed`.
    pub async fn generate(&self, match_id: &str) -> Outcome {
        let match_id = match_id.trim();
        if match_id.is_empty() {
            return Outcome::NoMatchId;
        }

        match self.run(match_id).await {
            Ok(Some(path)) => {
                info!("Generated {}", path.display());
                Outcome::Generated(path)
            }
            Ok(None) => Outcome::NoMatchData,
            Err(e) => {
                warn!("Generation for match {} failed: {}", match_id, e);
                Outcome::Failed(e.to_string())
            }
        }
    }

    async fn run(&self, match_id: &str) -> GenResult<Option<PathBuf>> {
        let client = FixtureClient::new(&self.http, &self.config.endpoints);
        let Some(fixture) = client.fetch(match_id).await? else {
            return Ok(None);
        };

        let card = Compositor::new(&self.http, &self.config)
            .compose(&fixture)
            .await?;

        let storage = StorageService::new(self.config.output_dir.clone());
        let path = storage.save(&card, &fixture.home_team, &fixture.away_team)?;
        Ok(Some(path))
    }
}
