use thiserror::Error;

const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Errors emitted while handing a link to the platform opener.
#[derive(Debug, Error)]
pub(crate) enum LinkError {
    /// Only web and mail links are opened.
    #[error("unsupported link scheme: {url}")]
    UnsupportedScheme { url: String },
    /// The platform opener could not be launched.
    #[error("failed to open link")]
    Open(#[from] std::io::Error),
}

/// Check that `url` uses a scheme the portfolio is willing to open.
pub(crate) fn validate_link(url: &str) -> Result<(), LinkError> {
    let url = url.trim();
    let allowed = ALLOWED_SCHEMES.iter().any(|scheme| {
        url.len() > scheme.len()
            && url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if allowed {
        Ok(())
    } else {
        Err(LinkError::UnsupportedScheme {
            url: url.to_string(),
        })
    }
}

/// Open `url` in the default browser or mail client without waiting for it.
pub(crate) fn open_link(url: &str) -> Result<(), LinkError> {
    validate_link(url)?;
    open::that_detached(url.trim())?;
    Ok(())
}
