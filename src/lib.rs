pub mod app;
pub mod catalogue;
pub mod environment;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod selector;

pub use catalogue::{Catalogue, ThumbnailVariant, TopicRecord, THUMBNAIL_VARIANTS};
pub use error::{CatalogueError, GenerationFailure};
pub use pipeline::{assemble, generate, RenderResult};

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_GENERATION: &str = "generation";
