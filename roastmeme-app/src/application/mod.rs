mod classify_error;
mod compose_meme;
mod generate_meme;

pub use classify_error::{classify, RoastRule, GENERIC_ROASTS, ROAST_RULES};
pub use compose_meme::{
    select_template, MemeComposer, FALLBACK_TEMPLATE, TEMPLATE_ALLOW_LIST, TOP_TEXT,
};
pub use generate_meme::GenerateMeme;
