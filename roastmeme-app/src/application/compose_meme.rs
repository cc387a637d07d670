use crate::domain::{Caption, MemeResult, MemeTemplate, TemplateCatalog};
use crate::infrastructure::imgflip::{CaptionRequest, CaptionResponse, ImgflipClient};
use crate::infrastructure::random::RandomSource;
use roastmeme_errors::ProviderError;
use std::sync::Arc;

pub const TOP_TEXT: &str = "Bug Detected";

pub const TEMPLATE_ALLOW_LIST: &[&str] = &[
    "Drake Hotline Bling",
    "Two Buttons",
    "Change My Mind",
    "Distracted Boyfriend",
    "UNO Draw 25 Cards",
    "Surprised Pikachu",
    "Mocking Spongebob",
    "Is This A Pigeon",
    "Roll Safe Think About It",
    "One Does Not Simply",
    "This Is Fine",
    "Waiting Skeleton",
    "Left Exit 12 Off Ramp",
    "Boardroom Meeting Suggestion",
];

pub const FALLBACK_TEMPLATE: &str = "One Does Not Simply";

/// Picks uniformly among allow-listed templates, falling back to
/// [`FALLBACK_TEMPLATE`] when none of them are in the catalog.
pub fn select_template<'a>(
    catalog: &'a TemplateCatalog,
    rng: &dyn RandomSource,
) -> Result<&'a MemeTemplate, ProviderError> {
    let candidates: Vec<&MemeTemplate> = catalog
        .iter()
        .filter(|t| TEMPLATE_ALLOW_LIST.contains(&t.name.as_str()))
        .collect();

    if candidates.is_empty() {
        return catalog
            .find_by_name(FALLBACK_TEMPLATE)
            .ok_or(ProviderError::NoSuitableTemplate);
    }

    let index = rng.pick_index(candidates.len()).min(candidates.len() - 1);
    Ok(candidates[index])
}

enum ComposeState {
    Start,
    CatalogFetched(TemplateCatalog),
    TemplateChosen(MemeTemplate),
    CaptionSubmitted {
        template: MemeTemplate,
        response: CaptionResponse,
    },
    Done(MemeResult),
}

/// Turns a caption into a meme image: fetch catalog, choose template,
/// submit caption, read the image url. Any failed step aborts; nothing is retried.
pub struct MemeComposer {
    client: ImgflipClient,
    rng: Arc<dyn RandomSource>,
}

impl MemeComposer {
    pub fn new(client: ImgflipClient, rng: Arc<dyn RandomSource>) -> Self {
        Self { client, rng }
    }

    pub async fn compose(&self, caption: &Caption) -> Result<MemeResult, ProviderError> {
        // Checked up front so missing credentials cost no network calls.
        let credentials = self.client.credentials()?;

        let mut state = ComposeState::Start;
        loop {
            state = match state {
                ComposeState::Start => {
                    let catalog = self.client.get_memes().await?;
                    tracing::debug!("Fetched {} meme templates", catalog.len());
                    ComposeState::CatalogFetched(catalog)
                }
                ComposeState::CatalogFetched(catalog) => {
                    let template = select_template(&catalog, &*self.rng)?.clone();
                    tracing::debug!("Chose template {} ({})", template.name, template.id);
                    ComposeState::TemplateChosen(template)
                }
                ComposeState::TemplateChosen(template) => {
                    let request =
                        CaptionRequest::new(&template, credentials, TOP_TEXT, caption.text());
                    let response = self.client.caption_image(&request).await?;
                    tracing::debug!("Caption submitted, success={}", response.success);
                    ComposeState::CaptionSubmitted { template, response }
                }
                ComposeState::CaptionSubmitted { template, response } => {
                    let url = response.into_image_url()?;
                    ComposeState::Done(MemeResult::new(url, template.name))
                }
                ComposeState::Done(meme) => return Ok(meme),
            };
        }
    }
}
