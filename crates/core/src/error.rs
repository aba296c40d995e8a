use crate::kind::CardKind;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no template registered for kind '{0}'")]
    NotRegistered(CardKind),
    #[error("unknown card kind '{0}'")]
    UnknownKind(String),
    #[error("invalid template for kind '{kind}': {reason}")]
    InvalidTemplate { kind: CardKind, reason: String },
    #[error("invalid slot name: {0}")]
    SlotName(#[from] cardkit_types::SlotNameError),
    #[error("template file error: {0}")]
    TemplateFile(String),
    #[error("failed to serialise template: {0}")]
    TemplateSerialization(serde_yaml::Error),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
