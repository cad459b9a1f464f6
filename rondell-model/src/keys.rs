//! Strongly-typed keys for identifying widget instances.

use uuid::Uuid;

/// Unique key for identifying carousel instances throughout an application.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    /// The page's single hero banner rotator.
    HeroBanner,
    /// A drag-scrollable thumbnail strip, by owning section.
    ThumbnailStrip(Uuid),
    /// A rolling card carousel, by owning section.
    Rolling(Uuid),
    /// A translate-percent slideshow, by owning section.
    Slideshow(Uuid),
    /// Ad-hoc instances named at the callsite.
    Custom(&'static str),
}
