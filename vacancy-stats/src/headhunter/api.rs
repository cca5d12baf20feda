use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

use super::types::SearchPage;
use crate::stats::VacancySource;
use crate::{Error, Result};

const SEARCH_URL: &str = "https://api.hh.ru/vacancies";
pub const MOSCOW_AREA: &str = "1";

// hh.ru rejects requests without a client-identifying User-Agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";

pub struct HeadHunter {
    client: Client,
    area: String,
}

impl HeadHunter {
    /// `area` is a HeadHunter region id ([`MOSCOW_AREA`] for Moscow).
    pub fn new(area: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            area: area.into(),
        })
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    type Page = SearchPage;

    fn name(&self) -> &'static str {
        "HeadHunter"
    }

    async fn fetch_page(&self, language: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let text = format!("Программист {}", language);
        let page_param = page.to_string();
        let per_page_param = per_page.to_string();
        log::debug!(
            "requesting vacancies from hh, page: {}, search: {}",
            page,
            text
        );
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("text", text.as_str()),
                ("area", self.area.as_str()),
                ("page", page_param.as_str()),
                ("per_page", per_page_param.as_str()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve hh results for page: {}, search: {}, error resp body: {:?}",
                page,
                text,
                error_body,
            );
            return Err(Error::RequestNotOk(SEARCH_URL.to_owned()));
        }
        let search_page: SearchPage = resp.json().await?;
        Ok(search_page)
    }
}
