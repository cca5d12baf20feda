use serde::Deserialize;

use crate::salary;
use crate::stats::VacancyPage;

#[derive(Debug, Deserialize)]
pub struct Salary {
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Vacancy {
    pub salary: Option<Salary>,
}

/// One page of `GET /vacancies` results. `pages` is the index of the last
/// available page, repeated on every page together with `found`.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    pub items: Vec<Vacancy>,
    pub found: u32,
    pub pages: u32,
}

impl VacancyPage for SearchPage {
    fn total_found(&self) -> u32 {
        self.found
    }

    fn has_more(&self, page_index: u32) -> bool {
        page_index < self.pages
    }

    fn salaries(&self) -> Vec<salary::Salary> {
        self.items
            .iter()
            .map(|vacancy| match &vacancy.salary {
                Some(block) => salary::Salary {
                    currency: block.currency.clone(),
                    from: block.from,
                    to: block.to,
                },
                None => salary::Salary::default(),
            })
            .collect()
    }
}
