//! Reading vacancies from a CSV table.

use crate::errors::{self, Result};
use crate::vacancy::VacancyRecord;
use itertools::Itertools;
use log::trace;
use std::io::Read;

/// Columns that every input table must have, in any order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "salary_from",
    "salary_to",
    "salary_currency",
    "area_name",
    "published_at",
];

/// Records read from a table, and how many rows were skipped.
pub struct Ingested {
    pub records: Vec<VacancyRecord>,
    pub skipped: usize,
}

struct Columns {
    width: usize,
    index: [usize; 6],
}

impl Columns {
    fn from_header(header: &csv::StringRecord) -> Result<Columns> {
        let mut index = [0; 6];
        for (i, col) in REQUIRED_COLUMNS.iter().enumerate() {
            index[i] = header
                .iter()
                .position(|h| h == *col)
                .ok_or_else(|| errors::invalid_input(format!("missing column '{col}'")))?;
        }
        Ok(Columns {
            width: header.len(),
            index,
        })
    }

    /// A row is usable only if it is complete: right length, no empty fields.
    fn usable(&self, row: &csv::StringRecord) -> bool {
        row.len() == self.width && row.iter().all(|f| !f.is_empty())
    }

    fn fields<'a>(&self, row: &'a csv::StringRecord) -> [&'a str; 6] {
        self.index.map(|i| &row[i])
    }
}

/// Reads all usable rows. Incomplete rows are skipped; malformed values in complete rows are errors.
pub fn read_vacancies<R: Read>(reader: R) -> Result<Ingested> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let header = csv_reader.headers()?.clone();
    let columns = Columns::from_header(&header)?;
    trace!(
        "header: {}",
        header.iter().map(|h| format!("'{h}'")).join(", ")
    );
    let mut records = vec![];
    let mut skipped = 0;
    for (i, row) in csv_reader.records().enumerate() {
        let row = row?;
        if !columns.usable(&row) {
            trace!("row {}: skipped", i + 2);
            skipped += 1;
            continue;
        }
        let [name, from, to, currency, area, published_at] = columns.fields(&row);
        records.push(VacancyRecord::parse(
            name,
            from,
            to,
            currency,
            area,
            published_at,
        )?);
    }
    Ok(Ingested { records, skipped })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{InvalidInput, MalformedSalary};
    use crate::salary::SalaryRange;

    #[test]
    fn reads_and_skips() {
        let data = "\u{feff}name,key_skills,salary_from,salary_to,salary_currency,area_name,published_at\n\
            Программист,Rust,30000,80000,RUR,Москва,2022-05-31T17:32:31+0300\n\
            Аналитик,,30000,80000,RUR,Москва,2022-05-31T17:32:31+0300\n\
            Аналитик,SQL,30000,80000,RUR,Москва\n\
            Тестировщик,QA,1000.5,2000.9,USD,Казань,2019-01-01T00:00:00+0300\n";
        let ingested = read_vacancies(data.as_bytes()).unwrap();
        assert_eq!(ingested.skipped, 2);
        assert_eq!(
            ingested.records,
            [
                VacancyRecord::new(
                    "Программист",
                    SalaryRange::new(30000, 80000, "RUR"),
                    "Москва",
                    2022
                ),
                VacancyRecord::new(
                    "Тестировщик",
                    SalaryRange::new(1000, 2000, "USD"),
                    "Казань",
                    2019
                ),
            ]
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "published_at,area_name,salary_currency,salary_to,salary_from,name\n\
            2010-01-01,Пермь,EUR,200,100,Инженер\n";
        let ingested = read_vacancies(data.as_bytes()).unwrap();
        assert_eq!(ingested.skipped, 0);
        assert_eq!(
            ingested.records,
            [VacancyRecord::new(
                "Инженер",
                SalaryRange::new(100, 200, "EUR"),
                "Пермь",
                2010
            )]
        );
    }

    #[test]
    fn missing_column() {
        let data = "name,salary_from,salary_to,area_name,published_at\n";
        let e = read_vacancies(data.as_bytes()).err().unwrap();
        assert!(e.downcast_ref::<InvalidInput>().is_some());
    }

    #[test]
    fn malformed_value() {
        let data = "name,salary_from,salary_to,salary_currency,area_name,published_at\n\
            a,lots,100,RUR,b,2020-01-01\n";
        let e = read_vacancies(data.as_bytes()).err().unwrap();
        assert!(e.downcast_ref::<MalformedSalary>().is_some());
    }

    #[test]
    fn header_only() {
        let data = "name,salary_from,salary_to,salary_currency,area_name,published_at\n";
        let ingested = read_vacancies(data.as_bytes()).unwrap();
        assert!(ingested.records.is_empty());
        assert_eq!(ingested.skipped, 0);
    }
}
