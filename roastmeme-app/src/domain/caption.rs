use std::fmt;

/// Which roast rule produced a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionKind {
    Syntax,
    NullReference,
    Permission,
    Memory,
    Timeout,
    NotFound,
    Generic,
}

/// Bottom text of the meme. Always one of the fixed roast literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    kind: CaptionKind,
    text: &'static str,
}

impl Caption {
    pub const fn new(kind: CaptionKind, text: &'static str) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> CaptionKind {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
