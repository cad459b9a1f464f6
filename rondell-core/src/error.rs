use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error("selected index {selected} out of bounds for {total} cards")]
    SelectionOutOfBounds { selected: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
