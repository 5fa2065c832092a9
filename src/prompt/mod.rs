// Renderers for the text artifacts of one video.
mod common;
mod script;
mod seo;
mod thumbnail;
mod video;

pub use common::*;
pub use script::script_prompt;
pub use seo::{seo_metadata, SeoMetadata};
pub use thumbnail::{color_split, random_thumbnail_prompt, thumbnail_prompt};
pub use video::video_prompt;
