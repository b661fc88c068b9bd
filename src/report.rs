//! Spreadsheet report with one sheet per year and one per location.

use crate::errors::Result;
use crate::output::{Statistics, YearStats};
use crate::vacancy::Year;
use itertools::{EitherOrBoth, Itertools};
use log::info;
use rust_xlsxwriter::{ColNum, Format, FormatBorder, RowNum, Workbook, Worksheet};
use std::path::Path;

pub const YEAR_SHEET: &str = "Statistics by year";
pub const LOCATION_SHEET: &str = "Statistics by city";

const LOCATION_HEADERS: [&str; 5] = ["City", "Salary level", "", "City", "Vacancy share"];

/// Column that separates the two location rankings; it has no borders.
const SEPARATOR: ColNum = 2;

fn year_headers(title_filter: &str) -> [String; 5] {
    [
        "Year".to_owned(),
        "Average salary".to_owned(),
        format!("Average salary - {title_filter}"),
        "Vacancies".to_owned(),
        format!("Vacancies - {title_filter}"),
    ]
}

/// Cell formats shared by both sheets.
struct Formats {
    header: Format,
    cell: Format,
    percent: Format,
}

impl Formats {
    fn new() -> Formats {
        let cell = Format::new().set_border(FormatBorder::Thin);
        Formats {
            header: cell.clone().set_bold(),
            percent: cell.clone().set_num_format("0.00%"),
            cell,
        }
    }
}

/// Widest text seen in each column.
#[derive(Default)]
struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    fn note(&mut self, col: ColNum, text: &str) {
        let col = col as usize;
        if self.0.len() <= col {
            self.0.resize(col + 1, 0);
        }
        self.0[col] = self.0[col].max(text.chars().count());
    }

    fn apply(&self, sheet: &mut Worksheet) -> Result<()> {
        for (col, &width) in self.0.iter().enumerate() {
            sheet.set_column_width(col as ColNum, (width + 2) as f64)?;
        }
        Ok(())
    }
}

struct SheetWriter<'a> {
    sheet: &'a mut Worksheet,
    widths: ColumnWidths,
}

impl<'a> SheetWriter<'a> {
    fn new(sheet: &'a mut Worksheet) -> SheetWriter<'a> {
        SheetWriter {
            sheet,
            widths: ColumnWidths::default(),
        }
    }

    fn text(&mut self, row: RowNum, col: ColNum, text: &str, format: &Format) -> Result<()> {
        self.widths.note(col, text);
        self.sheet.write_string_with_format(row, col, text, format)?;
        Ok(())
    }

    fn number(&mut self, row: RowNum, col: ColNum, value: f64, format: &Format) -> Result<()> {
        self.widths.note(col, &value.to_string());
        self.sheet.write_number_with_format(row, col, value, format)?;
        Ok(())
    }

    fn integer(&mut self, row: RowNum, col: ColNum, value: u64, format: &Format) -> Result<()> {
        self.widths.note(col, &value.to_string());
        self.sheet
            .write_number_with_format(row, col, value as f64, format)?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.widths.apply(self.sheet)
    }
}

fn write_year_sheet(
    sheet: &mut Worksheet,
    formats: &Formats,
    title_filter: &str,
    stats: &Statistics,
) -> Result<()> {
    sheet.set_name(YEAR_SHEET)?;
    let mut w = SheetWriter::new(sheet);
    for (col, h) in year_headers(title_filter).iter().enumerate() {
        w.text(0, col as ColNum, h, &formats.header)?;
    }
    let get = |m: &YearStats, y: &Year| m.get(y).copied().unwrap_or(0);
    for (i, year) in stats.year_salary.keys().enumerate() {
        let row = i as RowNum + 1;
        w.integer(row, 0, *year as u64, &formats.cell)?;
        w.integer(row, 1, get(&stats.year_salary, year), &formats.cell)?;
        w.integer(row, 2, get(&stats.year_salary_filtered, year), &formats.cell)?;
        w.integer(row, 3, get(&stats.year_count, year), &formats.cell)?;
        w.integer(row, 4, get(&stats.year_count_filtered, year), &formats.cell)?;
    }
    w.finish()
}

fn write_location_sheet(sheet: &mut Worksheet, formats: &Formats, stats: &Statistics) -> Result<()> {
    sheet.set_name(LOCATION_SHEET)?;
    let mut w = SheetWriter::new(sheet);
    for (col, h) in LOCATION_HEADERS.iter().enumerate() {
        if col as ColNum != SEPARATOR {
            w.text(0, col as ColNum, h, &formats.header)?;
        }
    }
    let rows = stats
        .location_salary
        .iter()
        .zip_longest(stats.location_share.iter());
    for (i, pair) in rows.enumerate() {
        let row = i as RowNum + 1;
        let (salary, share) = match pair {
            EitherOrBoth::Both(a, b) => (Some(a), Some(b)),
            EitherOrBoth::Left(a) => (Some(a), None),
            EitherOrBoth::Right(b) => (None, Some(b)),
        };
        if let Some((loc, value)) = salary {
            w.text(row, 0, loc, &formats.cell)?;
            w.integer(row, 1, *value, &formats.cell)?;
        }
        if let Some((loc, value)) = share {
            w.text(row, 3, loc, &formats.cell)?;
            w.number(row, 4, *value, &formats.percent)?;
        }
    }
    w.finish()
}

/// Lays out both sheets. Values are written exactly as given.
pub fn build_workbook(title_filter: &str, stats: &Statistics) -> Result<Workbook> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    write_year_sheet(workbook.add_worksheet(), &formats, title_filter, stats)?;
    write_location_sheet(workbook.add_worksheet(), &formats, stats)?;
    Ok(workbook)
}

pub fn write_report<P: AsRef<Path>>(path: P, title_filter: &str, stats: &Statistics) -> Result<()> {
    let mut workbook = build_workbook(title_filter, stats)?;
    workbook.save(path.as_ref())?;
    info!(target: "vacstats", "report written: {}", path.as_ref().display());
    Ok(())
}
