use roastmeme_errors::ProviderError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemeTemplate {
    pub id: String,
    pub name: String,
}

impl MemeTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Templates offered by the provider, in provider order. Never empty.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<MemeTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<MemeTemplate>) -> Result<Self, ProviderError> {
        if templates.is_empty() {
            return Err(ProviderError::EmptyCatalog);
        }
        Ok(Self { templates })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MemeTemplate> {
        self.templates.iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MemeTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
