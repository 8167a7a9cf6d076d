use thiserror::Error;

/// Reasons a submitted URL or custom code is rejected.
///
/// The `Display` text is the message shown to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("URL é obrigatória")]
    UrlRequired,
    #[error("URL deve começar com http:// ou https://")]
    MissingProtocol,
    #[error("URL inválida")]
    InvalidUrl,
    #[error("URLs localhost e privadas não são permitidas")]
    PrivateAddress,
    #[error("URLs localhost não são permitidas")]
    Localhost,
    #[error("Apenas URLs HTTP e HTTPS são permitidas")]
    UnsupportedScheme,
    #[error("Código personalizado deve ter entre {min} e {max} caracteres")]
    CodeLength { min: usize, max: usize },
    #[error("Código personalizado deve conter apenas letras, números, hífens e sublinhados")]
    CodeCharacters,
    #[error("'{0}' é um código reservado")]
    ReservedCode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpirationParseError {
    #[error("expiration is empty")]
    Empty,
    #[error("expected <number><h|d|w|m>, got '{0}'")]
    Malformed(String),
}
