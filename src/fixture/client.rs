/// Fixtures API client.
/// One GET per match id, parsed into a `Fixture`.
use tracing::{debug, info};

use super::model::{Fixture, FixtureEnvelope};
use crate::config::Endpoints;
use crate::error::{GenError, GenResult};
use crate::net::http::HttpSource;

pub struct FixtureClient<'a, H: HttpSource> {
    http: &'a H,
    endpoints: &'a Endpoints,
}

impl<'a, H: HttpSource> FixtureClient<'a, H> {
    pub fn new(http: &'a H, endpoints: &'a Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// Look up a match. `Ok(None)` means the API answered but had no `data`.
    pub async fn fetch(&self, match_id: &str) -> GenResult<Option<Fixture>> {
        let url = self.endpoints.fixture_url(match_id);
        let body = self.http.get(&url).await?;
        let fixture = parse_fixture(&body, self.endpoints)?;

        match &fixture {
            Some(f) => {
                info!(
                    "Fixture {}: {} vs {} ({})",
                    match_id, f.home_team, f.away_team, f.league_name
                );
                debug!("Kickoff {}", f.match_date);
            }
            None => info!("Fixture {}: no data", match_id),
        }
        Ok(fixture)
    }
}

/// Parse a fixtures response body
pub fn parse_fixture(body: &[u8], endpoints: &Endpoints) -> GenResult<Option<Fixture>> {
    let envelope: FixtureEnvelope = serde_json::from_slice(body)
        .map_err(|e| GenError::MalformedResponse(e.to_string()))?;

    Ok(envelope
        .data
        .map(|data| data.into_fixture(|id| endpoints.league_logo_url(id))))
}
