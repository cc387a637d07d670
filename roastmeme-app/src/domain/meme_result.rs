#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeResult {
    pub url: String,
    pub template_name: String,
}

impl MemeResult {
    pub fn new(url: String, template_name: String) -> Self {
        Self { url, template_name }
    }
}
