//! Texture uploads for event snapshots and thumbnails.
//!
//! Images are fetched and decoded through the query cache; this module
//! turns a decoded image into an egui texture once and keeps the handle
//! until the cache evicts the image.

use frigate_review::core::query::{QueryKey, QueryOptions};

use crate::app::ReviewApp;

impl ReviewApp {
    /// Texture for the image at `url`, requesting it on first use.
    ///
    /// Returns `None` while the image is loading or if it failed.
    pub fn texture_for(&mut self, ctx: &egui::Context, url: &str) -> Option<egui::TextureHandle> {
        let key = QueryKey::image(url);
        // Requesting every frame keeps the entry recently used, so shown
        // images are not evicted. Images never change once written, so
        // focus revalidation is off.
        self.cache
            .request(&key, QueryOptions::default().without_focus_revalidation());
        if let Some(handle) = self.textures.get(url) {
            return Some(handle.clone());
        }

        let decoded = self.cache.image(&key)?;

        let color_image = egui::ColorImage::from_rgba_unmultiplied(decoded.size(), &decoded.rgba);
        let handle = ctx.load_texture(url, color_image, egui::TextureOptions::LINEAR);
        self.textures.insert(url.to_owned(), handle.clone());
        Some(handle)
    }

    /// Drop textures whose decoded image the cache has evicted, so the
    /// texture map stays within the cache's entry cap.
    pub fn release_evicted_textures(&mut self) {
        let evicted = self.cache.take_evicted_images();
        if evicted.is_empty() {
            return;
        }
        let before = self.textures.len();
        for url in &evicted {
            self.textures.remove(url);
        }
        tracing::debug!("Released {} evicted textures", before - self.textures.len());
    }
}
