/// Errors reported when a carousel cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// The container has no children to turn into slides.
    #[error("carousel requires at least one slide")]
    NoSlides,
    /// `initial_index` does not address an existing slide.
    #[error("initial index {index} is out of range for {count} slides")]
    InvalidIndex { index: usize, count: usize },
}
