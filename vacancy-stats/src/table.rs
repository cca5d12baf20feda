use crate::stats::LanguageStatistic;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render the statistics of one job board as a titled ASCII table,
/// one body row per language in the order the rows were collected.
pub fn render_statistics(title: &str, statistics: &[(String, LanguageStatistic)]) -> String {
    let rows: Vec<Vec<String>> = statistics
        .iter()
        .map(|(language, statistic)| {
            vec![
                language.clone(),
                statistic.vacancies_found.to_string(),
                statistic.vacancies_processed.to_string(),
                statistic.average_salary.to_string(),
            ]
        })
        .collect();
    render_table(title, &HEADER, &rows)
}

/// ASCII table with the title spliced into the top border, a rule under the
/// header and one at the bottom. Widths are counted in chars, not bytes,
/// since the header labels are Cyrillic.
pub fn render_table(title: &str, header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = header.iter().map(|cell| cell.to_string()).collect();
    let mut lines = vec![
        titled_rule(title, &widths),
        format_row(&header_cells, &widths),
        rule(&widths),
    ];
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.push(rule(&widths));
    lines.join("\n")
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn titled_rule(title: &str, widths: &[usize]) -> String {
    let rule = rule(widths);
    let title_chars = title.chars().count();
    if title_chars + 2 > rule.chars().count() {
        return rule;
    }
    let mut line = String::from("+");
    line.push_str(title);
    line.extend(rule.chars().skip(title_chars + 1));
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, &width) in cells.iter().zip(widths) {
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_table_borders() {
        let rendered = render_table("T", &["a", "bb"], &[vec!["x".to_owned(), "y".to_owned()]]);
        let expected = "\
+T--+----+
| a | bb |
+---+----+
| x | y  |
+---+----+";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_statistics_single_language() {
        let statistics = vec![(
            "Go".to_owned(),
            LanguageStatistic {
                vacancies_found: 10,
                vacancies_processed: 5,
                average_salary: 100_000,
            },
        )];
        let rendered = render_statistics("SuperJob Moscow", &statistics);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("+SuperJob Moscow-"));
        assert_eq!(
            lines[1],
            "| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |"
        );
        // header labels are the widest cells here, so the columns pad to them
        assert_eq!(
            lines[3],
            format!("| {:<21} | {:<16} | {:<19} | {:<16} |", "Go", 10, 5, 100_000)
        );
        let width = lines[1].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_column_grows_past_header_label() {
        let rendered = render_table(
            "T",
            &["a"],
            &[vec!["wide cell".to_owned()], vec!["x".to_owned()]],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "| a         |");
        assert_eq!(lines[3], "| wide cell |");
        assert_eq!(lines[4], "| x         |");
    }

    #[test]
    fn test_oversized_title_falls_back_to_plain_rule() {
        let rendered = render_table("a title longer than the table", &["a"], &[]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+---+");
    }
}
