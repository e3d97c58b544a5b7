/// Data model for the fixtures API.
/// Only the fields the card needs are deserialized; everything else in the
/// response is ignored.
use serde::Deserialize;
use std::fmt;

/// Response envelope. `data` is absent (or null) when the id is unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureEnvelope {
    #[serde(default)]
    pub data: Option<MatchData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchData {
    pub teams: Teams,
    pub time: MatchTime,
    pub league: League,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub name: String,
    /// Logo URL
    pub img: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchTime {
    pub datetime: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct League {
    pub name: String,
    pub id: LeagueId,
}

/// League identifiers show up both as numbers and as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LeagueId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueId::Number(n) => write!(f, "{n}"),
            LeagueId::Text(s) => f.write_str(s),
        }
    }
}

/// Everything the compositor needs for one match
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub home_logo_url: String,
    pub away_logo_url: String,
    /// Kickoff as sent by the API; carried along but not drawn
    pub match_date: String,
    pub league_name: String,
    pub league_image_url: String,
}

impl MatchData {
    /// Flatten into a `Fixture`, building the league logo URL with `league_logo_url`.
    pub fn into_fixture(self, league_logo_url: impl FnOnce(&str) -> String) -> Fixture {
        let league_image_url = league_logo_url(&self.league.id.to_string());
        Fixture {
            home_team: self.teams.home.name,
            away_team: self.teams.away.name,
            home_logo_url: self.teams.home.img,
            away_logo_url: self.teams.away.img,
            match_date: self.time.datetime,
            league_name: self.league.name,
            league_image_url,
        }
    }
}
