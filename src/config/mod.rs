use std::path::PathBuf;

pub const DEFAULT_FIXTURES_URL: &str = "https://prosoccer.tv/api/fixtures";
pub const DEFAULT_LEAGUE_LOGO_BASE: &str = "https://cdn.soccersapi.com/images/soccer/leagues/50";

/// Top-level generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding `img/field.png` and `fonts/FiraGO-SemiBold.ttf`
    pub assets_dir: PathBuf,
    /// Where finished cards are written
    pub output_dir: PathBuf,
    pub endpoints: Endpoints,
}

/// Remote endpoints the generator talks to
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Fixtures API, queried as `{fixtures_url}?t=info&id={id}`
    pub fixtures_url: String,
    /// League logo CDN, queried as `{league_logo_base}/{league_id}.png`
    pub league_logo_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fixtures_url: DEFAULT_FIXTURES_URL.to_string(),
            league_logo_base: DEFAULT_LEAGUE_LOGO_BASE.to_string(),
        }
    }
}

impl Endpoints {
    pub fn fixture_url(&self, match_id: &str) -> String {
        format!("{}?t=info&id={}", self.fixtures_url, match_id)
    }

    pub fn league_logo_url(&self, league_id: &str) -> String {
        format!("{}/{}.png", self.league_logo_base.trim_end_matches('/'), league_id)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("generated"),
            endpoints: Endpoints::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn template_path(&self) -> PathBuf {
        self.assets_dir.join("img").join("field.png")
    }

    pub fn font_path(&self) -> PathBuf {
        self.assets_dir.join("fonts").join("FiraGO-SemiBold.ttf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.fixture_url("123"),
            "https://prosoccer.tv/api/fixtures?t=info&id=123"
        );
        assert_eq!(
            endpoints.league_logo_url("7"),
            "https://cdn.soccersapi.com/images/soccer/leagues/50/7.png"
        );
    }

    #[test]
    fn test_asset_paths() {
        let config = GeneratorConfig::default();
        assert_eq!(config.template_path(), PathBuf::from("assets/img/field.png"));
        assert_eq!(
            config.font_path(),
            PathBuf::from("assets/fonts/FiraGO-SemiBold.ttf")
        );
    }
}
