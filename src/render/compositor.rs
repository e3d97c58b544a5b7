/// Card compositor: layers logos and names onto the background template.
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::fixture::model::Fixture;
use crate::net::http::HttpSource;
use crate::render::image::{fetch_image, paste_with_alpha, resize_exact};
use crate::render::layout::{LogoSlot, TextSlot, Layout};
use crate::render::text::TextRenderer;

pub struct Compositor<'a, H: HttpSource> {
    http: &'a H,
    layout: Layout,
    template_path: PathBuf,
    font_path: PathBuf,
}

impl<'a, H: HttpSource> Compositor<'a, H> {
    pub fn new(http: &'a H, config: &GeneratorConfig) -> Self {
        Self {
            http,
            layout: Layout::default(),
            template_path: config.template_path(),
            font_path: config.font_path(),
        }
    }

    /// Build the card for `fixture`. Any fetch, decode or asset failure
    /// aborts the whole composition.
    pub async fn compose(&self, fixture: &Fixture) -> GenResult<RgbaImage> {
        let mut card = load_template(&self.template_path)?;
        let layout = &self.layout;

        let home_logo = self.fetch_logo(&fixture.home_logo_url, &layout.home_logo).await?;
        let away_logo = self.fetch_logo(&fixture.away_logo_url, &layout.away_logo).await?;
        paste_with_alpha(&mut card, &home_logo, layout.home_logo.x, layout.home_logo.y);
        paste_with_alpha(&mut card, &away_logo, layout.away_logo.x, layout.away_logo.y);

        let text = TextRenderer::load(&self.font_path)?;
        draw_text(&text, &mut card, &fixture.home_team, &layout.home_name);
        draw_text(&text, &mut card, &fixture.away_team, &layout.away_name);

        let league_logo = self
            .fetch_logo(&fixture.league_image_url, &layout.league_logo)
            .await?;
        paste_with_alpha(&mut card, &league_logo, layout.league_logo.x, layout.league_logo.y);
        draw_text(&text, &mut card, &fixture.league_name, &layout.league_name);

        info!(
            "Composed card {} vs {} ({}x{})",
            fixture.home_team,
            fixture.away_team,
            card.width(),
            card.height()
        );
        Ok(card)
    }

    async fn fetch_logo(&self, url: &str, slot: &LogoSlot) -> GenResult<RgbaImage> {
        let img = fetch_image(self.http, url).await?;
        Ok(resize_exact(&img, slot.size, slot.size))
    }
}

fn load_template(path: &Path) -> GenResult<RgbaImage> {
    let img = image::open(path)
        .map_err(|e| GenError::Asset(format!("template {}: {}", path.display(), e)))?;
    debug!("Loaded template {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img.to_rgba8())
}

fn draw_text(text: &TextRenderer, card: &mut RgbaImage, s: &str, slot: &TextSlot) {
    text.draw_centered(card, s, slot.font_size, slot.center_x, slot.top_y);
}
