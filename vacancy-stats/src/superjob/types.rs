use serde::Deserialize;

use crate::salary;
use crate::stats::VacancyPage;

/// SuperJob reports salary fields flat on the vacancy, with `0` standing in
/// for "not specified".
#[derive(Debug, Deserialize)]
pub struct Vacancy {
    pub payment_from: Option<u64>,
    pub payment_to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub objects: Vec<Vacancy>,
    pub total: u32,
    pub more: bool,
}

impl VacancyPage for SearchPage {
    fn total_found(&self) -> u32 {
        self.total
    }

    fn has_more(&self, _page_index: u32) -> bool {
        self.more
    }

    fn salaries(&self) -> Vec<salary::Salary> {
        self.objects
            .iter()
            .map(|vacancy| salary::Salary {
                currency: vacancy.currency.clone(),
                from: vacancy.payment_from,
                to: vacancy.payment_to,
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_search_page() {
        let payload = json!({
            "objects": [
                {
                    "profession": "Программист PHP",
                    "payment_from": 90000,
                    "payment_to": 0,
                    "currency": "rub",
                    "town": {"id": 4, "title": "Москва"}
                }
            ],
            "total": 18,
            "more": false
        });
        let page: SearchPage = serde_json::from_value(payload).unwrap();
        assert_eq!(page.total, 18);
        assert!(!page.more);
        let salaries = page.salaries();
        assert_eq!(salaries[0].from, Some(90_000));
        assert_eq!(salaries[0].to, Some(0));
        assert_eq!(salaries[0].currency.as_deref(), Some("rub"));
    }

    #[test]
    fn test_has_more_follows_flag() {
        let page = SearchPage {
            objects: vec![],
            total: 500,
            more: true,
        };
        // flag decides regardless of the page index
        assert!(page.has_more(0));
        assert!(page.has_more(17));
    }
}
