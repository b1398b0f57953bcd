//! Opening reference pages in the system browser

use reqwest::Url;

use super::ServiceError;

pub const STROKE_ORDER_URL: &str = "https://www.strokeorder.com/chinese/";
pub const WEB_TRANSLATOR_URL: &str = "https://translate.google.com/";

/// Opens URLs outside the terminal
pub trait Browser {
    fn open(&self, url: &str) -> Result<(), ServiceError>;
}

/// The platform's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ServiceError> {
        tracing::debug!("Opening {}", url);
        open::that(url).map_err(ServiceError::from)
    }
}

/// Stroke-order animation page for a Chinese character
pub fn stroke_order_url(word: &str) -> Result<String, ServiceError> {
    let mut url = parse(STROKE_ORDER_URL)?;
    url.path_segments_mut()
        .map_err(|_| ServiceError::Response("cannot append path".to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url.to_string())
}

/// Web translator page for `word`, from `source` to `target`
pub fn web_translator_url(word: &str, source: &str, target: &str) -> Result<String, ServiceError> {
    let url = Url::parse_with_params(
        WEB_TRANSLATOR_URL,
        &[("sl", source), ("tl", target), ("text", word), ("op", "translate")],
    )
    .map_err(|e| ServiceError::Response(e.to_string()))?;
    Ok(url.to_string())
}

fn parse(url: &str) -> Result<Url, ServiceError> {
    Url::parse(url).map_err(|e| ServiceError::Response(e.to_string()))
}
