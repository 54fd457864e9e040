use reqwest::header;

/// Credentials attached to a record fetch.
///
/// The two variants reflect two disjoint trust boundaries — a replayed user
/// session versus machine-to-machine trust — and exactly one is ever attached
/// to a call: the enum makes the "both set" and "neither set" states
/// unrepresentable.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A replayed browser session: access, anti-forgery and refresh cookies.
    SessionCookies {
        access: String,
        csrf: String,
        refresh: String,
    },

    /// A signed service-identity token sent in a dedicated header.
    ServiceBearer { token: String },
}

impl Credentials {
    /// Attaches this credential to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::SessionCookies {
                access,
                csrf,
                refresh,
            } => request.header(header::COOKIE, cookie_header(access, csrf, refresh)),
            Credentials::ServiceBearer { token } => request.header("x-service-token", token),
        }
    }
}

/// Formats the three session cookies the backend expects, in the names it
/// knows them by.
fn cookie_header(access: &str, csrf: &str, refresh: &str) -> String {
    format!("accessToken={access}; csrfToken={csrf}; refreshToken={refresh}")
}
