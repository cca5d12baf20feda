use async_trait::async_trait;

use crate::salary::{predict_rub_salary, Salary};
use crate::Result;

/// One page of search results from a job board.
/// Each source reports its own termination signal, so asking "is there
/// another page after `page_index`?" is delegated to the payload.
pub trait VacancyPage {
    fn total_found(&self) -> u32;
    fn has_more(&self, page_index: u32) -> bool;
    fn salaries(&self) -> Vec<Salary>;
}

/// A job board that can be searched page by page for one language.
#[async_trait]
pub trait VacancySource {
    type Page: VacancyPage;

    fn name(&self) -> &'static str;
    async fn fetch_page(&self, language: &str, page: u32, per_page: u32) -> Result<Self::Page>;
}

/// Immutable run configuration, passed in instead of module globals.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub languages: Vec<String>,
    pub per_page: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let languages = ["JavaScript", "Java", "Python", "Ruby", "PHP", "Go"]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            languages,
            per_page: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStatistic {
    pub vacancies_found: u32,
    pub vacancies_processed: u32,
    pub average_salary: u64,
}

/// Page through all results for one language and fold them into a statistic.
/// Sources repeat the total-matches figure on every page; the last page wins.
pub async fn aggregate<S: VacancySource>(
    source: &S,
    language: &str,
    config: &SearchConfig,
) -> Result<LanguageStatistic> {
    let mut estimates: Vec<f64> = Vec::new();
    let mut vacancies_found = 0;
    let mut page_index = 0;
    loop {
        let page = source.fetch_page(language, page_index, config.per_page).await?;
        vacancies_found = page.total_found();
        estimates.extend(
            page.salaries()
                .iter()
                .filter_map(|salary| predict_rub_salary(salary)),
        );
        if !page.has_more(page_index) {
            break;
        }
        page_index += 1;
    }

    let average_salary = if estimates.is_empty() {
        0
    } else {
        (estimates.iter().sum::<f64>() / estimates.len() as f64) as u64
    };
    Ok(LanguageStatistic {
        vacancies_found,
        vacancies_processed: estimates.len() as u32,
        average_salary,
    })
}

/// Aggregate every configured language for one source, in list order.
/// The returned rows always cover exactly the configured language set.
pub async fn collect_statistics<S: VacancySource>(
    source: &S,
    config: &SearchConfig,
) -> Result<Vec<(String, LanguageStatistic)>> {
    let mut statistics = Vec::with_capacity(config.languages.len());
    for language in &config.languages {
        let statistic = aggregate(source, language, config).await?;
        log::info!(
            "{}: {} vacancies found for {}, {} processed",
            source.name(),
            statistic.vacancies_found,
            language,
            statistic.vacancies_processed
        );
        statistics.push((language.clone(), statistic));
    }
    Ok(statistics)
}
