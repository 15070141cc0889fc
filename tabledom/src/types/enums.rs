use std::fmt;

/// Element kind. Table tags mirror their HTML counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Box,
    Text,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Box => "box",
            Tag::Text => "text",
            Tag::Table => "table",
            Tag::THead => "thead",
            Tag::TBody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
