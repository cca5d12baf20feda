/// Salary fields extracted from one vacancy record, shape-independent.
/// A record without any salary block maps to an all-`None` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Salary {
    pub currency: Option<String>,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

// HeadHunter reports "RUR", SuperJob reports "rub".
const RUB_CURRENCY_CODES: [&str; 2] = ["RUR", "rub"];

/// Predict a single ruble salary for one vacancy.
/// Open-ended postings get a heuristic correction: "from X" pays above X
/// on average, "to Y" below Y. A bound of zero means "not specified".
pub fn predict_rub_salary(salary: &Salary) -> Option<f64> {
    let currency = salary.currency.as_deref()?;
    if !RUB_CURRENCY_CODES.contains(&currency) {
        return None;
    }
    let from = salary.from.filter(|&value| value > 0);
    let to = salary.to.filter(|&value| value > 0);
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) as f64 / 2.0),
        (Some(from), None) => Some(from as f64 * 1.2),
        (None, Some(to)) => Some(to as f64 * 0.8),
        (None, None) => None,
    }
}
