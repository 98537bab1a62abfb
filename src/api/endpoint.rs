use bon::Builder;
use reqwest::Url;

use crate::prelude::*;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Mode {
    /// Development server on the given host, plain HTTP.
    #[default]
    Dev,

    /// Production deployment behind HTTPS.
    Prod,
}

/// Location of the booking server.
#[derive(Clone, Debug, Builder)]
pub struct Endpoint {
    #[builder(default)]
    pub mode: Mode,

    #[builder(into)]
    pub host: String,

    pub port: Option<u16>,
}

impl Endpoint {
    pub const DEV_PORT: u16 = 8000;

    /// Base URL of the API, with a trailing slash so that relative paths join under it.
    pub fn base_url(&self) -> Result<Url> {
        let url = match (self.mode, self.port) {
            (Mode::Dev, port) => {
                format!("http://{}:{}/api/", self.host, port.unwrap_or(Self::DEV_PORT))
            }
            (Mode::Prod, Some(port)) => format!("https://{}:{port}/api/", self.host),
            (Mode::Prod, None) => format!("https://{}/api/", self.host),
        };
        Url::parse(&url).with_context(|| format!("invalid API endpoint: `{url}`"))
    }
}
