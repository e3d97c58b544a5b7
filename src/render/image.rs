/// Logo fetching and pasting.
/// Downloads remote images, resizes them to their slot and composites them
/// onto the card using their own alpha channel.
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::{GenError, GenResult};
use crate::net::http::HttpSource;

/// GET `url` and decode the body, guessing the format from its bytes.
pub async fn fetch_image<H: HttpSource>(http: &H, url: &str) -> GenResult<DynamicImage> {
    let bytes = http.get(url).await?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| GenError::Decode(format!("{url}: {e}")))?;
    debug!("Decoded {} ({}x{})", url, img.width(), img.height());
    Ok(img)
}

/// Resize to exactly `width`x`height`, ignoring the source aspect ratio.
pub fn resize_exact(img: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(&img.to_rgba8(), width, height, FilterType::Lanczos3)
}

/// Alpha-composite `logo` onto `base` with its top-left corner at (x, y).
/// Parts of the logo outside `base` are dropped.
pub fn paste_with_alpha(base: &mut RgbaImage, logo: &RgbaImage, x: i32, y: i32) {
    imageops::overlay(base, logo, x as i64, y as i64);
}
