//! Snapshot and thumbnail handling.
//!
//! Images are fetched and decoded on query worker threads; the UI thread
//! only uploads the finished RGBA buffer as a texture.

use std::path::Path;

use crate::core::api::ApiHost;
use crate::core::event::Event;
use crate::util::error::{FrigateReviewError, Result};

/// Which stored image an event is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Snapshot,
    Thumbnail,
}

impl MediaKind {
    /// Snapshot when one was saved, thumbnail otherwise.
    pub fn for_event(event: &Event) -> Self {
        if event.has_snapshot {
            MediaKind::Snapshot
        } else {
            MediaKind::Thumbnail
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            MediaKind::Snapshot => "snapshot",
            MediaKind::Thumbnail => "thumbnail",
        }
    }
}

/// URL an event's image is displayed from and downloaded from.
pub fn image_url(host: &ApiHost, event: &Event) -> String {
    match MediaKind::for_event(event) {
        MediaKind::Snapshot => host.snapshot_url(&event.id),
        MediaKind::Thumbnail => host.thumbnail_url(&event.id),
    }
}

/// File name offered in the save dialog, e.g. `front_door-1709649000.1-abc-snapshot.jpg`.
pub fn download_file_name(event: &Event) -> String {
    let kind = MediaKind::for_event(event).file_stem();
    if event.camera.is_empty() {
        format!("{}-{kind}.jpg", event.id)
    } else {
        format!("{}-{}-{kind}.jpg", event.camera, event.id)
    }
}

/// Decoded RGBA8 pixels ready for texture upload.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Decode a JPEG or PNG payload.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| FrigateReviewError::Image(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// Write downloaded image bytes to `path`.
pub fn save_download(bytes: &[u8], path: &Path) -> Result<()> {
    if bytes.is_empty() {
        return Err(FrigateReviewError::Download("server returned an empty image".into()));
    }
    std::fs::write(path, bytes)?;
    tracing::info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(has_snapshot: bool) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": "e1",
            "label": "person",
            "camera": "front_door",
            "has_snapshot": has_snapshot,
        }))
        .unwrap()
    }

    #[test]
    fn test_image_url_prefers_snapshot() {
        let host = ApiHost::parse("http://h").unwrap();
        assert_eq!(image_url(&host, &event(true)), "http://h/api/events/e1/snapshot.jpg");
        assert_eq!(image_url(&host, &event(false)), "http://h/api/events/e1/thumbnail.jpg");
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name(&event(true)), "front_door-e1-snapshot.jpg");
        assert_eq!(download_file_name(&event(false)), "front_door-e1-thumbnail.jpg");
    }

    #[test]
    fn test_decode_png() {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        let decoded = decode_image(buf.get_ref()).unwrap();
        assert_eq!(decoded.size(), [3, 2]);
        assert_eq!(decoded.rgba.len(), 3 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_image(b"not an image").unwrap_err();
        assert!(matches!(err, FrigateReviewError::Image(_)));
    }

    #[test]
    fn test_save_download_rejects_empty() {
        let path = std::env::temp_dir().join("frigate-review-empty-download.jpg");
        assert!(save_download(&[], &path).is_err());
    }
}
