/// Card persistence service.
/// Writes finished cards as PNG under the output directory.
use chrono::{DateTime, Local, TimeZone};
use image::{ImageFormat, RgbaImage};
use std::path::PathBuf;
use tracing::info;

use crate::error::{GenError, GenResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub struct StorageService {
    output_dir: PathBuf,
}

impl StorageService {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Save `card` as `{home}-vs-{away}-{timestamp}.png` and return its path.
    /// A second card for the same matchup within the same second replaces
    /// the first.
    pub fn save(&self, card: &RgbaImage, home_team: &str, away_team: &str) -> GenResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(output_file_name(home_team, away_team, &Local::now()));
        card.save_with_format(&path, ImageFormat::Png)
            .map_err(|e| GenError::Encode(format!("{}: {}", path.display(), e)))?;

        info!("Saved card to {}", path.display());
        Ok(path)
    }
}

/// File name for a card generated at `now`
pub fn output_file_name<Tz: TimeZone>(home_team: &str, away_team: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}-vs-{}-{}.png",
        slugify(home_team),
        slugify(away_team),
        now.format(TIMESTAMP_FORMAT)
    )
}

/// Lowercase ASCII slug: accents transliterated, every run of
/// non-alphanumerics (quotes included) collapsed to a single `-`.
pub fn slugify(s: &str) -> String {
    let ascii = deunicode::deunicode(s).to_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}
