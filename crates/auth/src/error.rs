use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    /// The configured signing secret is empty. Caught when the issuer is
    /// constructed so a misconfigured deployment fails at startup, not on the
    /// first request.
    #[error("signing secret is empty")]
    MissingSecret,

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
