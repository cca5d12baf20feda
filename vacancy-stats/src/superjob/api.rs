use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;

use super::types::SearchPage;
use crate::stats::VacancySource;
use crate::{Error, Result};

const SEARCH_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const MOSCOW_TOWN: &str = "Москва";

pub struct SuperJob {
    client: Client,
    town: String,
}

impl SuperJob {
    /// `secret_key` is the application key issued at api.superjob.ru,
    /// sent with every request as the `X-Api-App-Id` header.
    pub fn new(secret_key: &str, town: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("X-Api-App-Id", HeaderValue::from_str(secret_key)?);
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            town: town.into(),
        })
    }
}

#[async_trait]
impl VacancySource for SuperJob {
    type Page = SearchPage;

    fn name(&self) -> &'static str {
        "SuperJob"
    }

    async fn fetch_page(&self, language: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let keyword = format!("Программист {}", language);
        let page_param = page.to_string();
        let count_param = per_page.to_string();
        log::debug!(
            "requesting vacancies from superjob, page: {}, search: {}",
            page,
            keyword
        );
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("keyword", keyword.as_str()),
                ("town", self.town.as_str()),
                ("page", page_param.as_str()),
                ("count", count_param.as_str()),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            let error_body = resp.text().await;
            log::error!(
                "failed to retrieve superjob results for page: {}, search: {}, error resp body: {:?}",
                page,
                keyword,
                error_body,
            );
            return Err(Error::RequestNotOk(SEARCH_URL.to_owned()));
        }
        let search_page: SearchPage = resp.json().await?;
        Ok(search_page)
    }
}
