mod caption;
mod error_report;
mod meme_result;
mod meme_template;

pub use caption::{Caption, CaptionKind};
pub use error_report::{ErrorReport, MISSING_ERROR_MESSAGE};
pub use meme_result::MemeResult;
pub use meme_template::{MemeTemplate, TemplateCatalog};
