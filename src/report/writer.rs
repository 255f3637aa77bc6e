use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use rust_xlsxwriter::{Format, Image, Workbook, Worksheet};

use crate::config::LogoConfig;
use crate::core::{EmptyResult, GenericResult};
use crate::types::Value;
use crate::util;

use super::layout::{BANNER_COLUMNS, BANNER_MERGED_ROWS, Region, ReportLayout};
use super::style::Styles;
use super::table::{ReportTable, TableHeader};

pub const SHEET_NAME: &str = "Report";

/// Renders the tables one below another on a single sheet.
pub fn render(tables: &[ReportTable], logo: Option<&LogoConfig>) -> GenericResult<Workbook> {
    let styles = Styles::new();
    let layout = ReportLayout::new(&tables.iter().map(|table| table.rows.len() as u32).collect::<Vec<_>>());

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_screen_gridlines(false);

    render_banner(sheet, logo, &styles)?;

    for (table, region) in tables.iter().zip(&layout.regions) {
        render_region(sheet, region, table, &styles)?;
    }

    sheet.autofit();
    debug!("Rendered {} tables on {} rows.", tables.len(), layout.height());

    Ok(workbook)
}

fn render_banner(sheet: &mut Worksheet, logo: Option<&LogoConfig>, styles: &Styles) -> EmptyResult {
    sheet.merge_range(0, 0, BANNER_MERGED_ROWS - 1, BANNER_COLUMNS - 1, "", &styles.banner)?;

    if let Some(logo) = logo {
        let image = Image::new(&logo.path).map_err(|e| format!(
            "Unable to load {:?} logo: {}", logo.path, e))?
            .set_scale_to_size(f64::from(logo.width), f64::from(logo.height), false);
        sheet.insert_image(0, 0, &image)?;
    }

    Ok(())
}

fn render_region(sheet: &mut Worksheet, region: &Region, table: &ReportTable, styles: &Styles) -> EmptyResult {
    let last_column = column_id(table.columns.saturating_sub(1))?;

    match &table.header {
        TableHeader::Title(title) if last_column > 0 => {
            sheet.merge_range(region.start, 0, region.start, last_column, title, &styles.header)?;
        },
        TableHeader::Title(title) => {
            sheet.write_string_with_format(region.start, 0, title, &styles.header)?;
        },
        TableHeader::Columns(titles) => {
            for (column, title) in titles.iter().enumerate() {
                sheet.write_string_with_format(region.start, column_id(column)?, title, &styles.header)?;
            }
        },
    }

    for (row_id, row) in table.rows.iter().enumerate() {
        let format = if table.is_highlighted(row_id) {
            &styles.highlight
        } else {
            &styles.body
        };

        let sheet_row = region.first_data_row() + row_id as u32;
        for column in 0..table.columns {
            let value = row.get(column).unwrap_or(&Value::Empty);
            write_value(sheet, sheet_row, column_id(column)?, value, format)?;
        }
    }

    Ok(())
}

fn write_value(sheet: &mut Worksheet, row: u32, column: u16, value: &Value, format: &Format) -> EmptyResult {
    match value {
        Value::Empty => sheet.write_blank(row, column, format)?,
        Value::Text(text) => sheet.write_string_with_format(row, column, text, format)?,
        Value::Number(number) => sheet.write_number_with_format(row, column, util::decimal_to_f64(*number)?, format)?,
    };
    Ok(())
}

fn column_id(column: usize) -> GenericResult<u16> {
    Ok(u16::try_from(column).map_err(|_| format!("Invalid column index: {}", column))?)
}

/// Writes the workbook to a temporary file next to the destination and then renames it, so the
/// destination is never left partially written.
///
/// The report gets the same permissions as a file written in place: an existing report keeps its
/// mode and a new one is created with the default mode limited by umask.
pub fn save(workbook: &mut Workbook, path: &Path) -> EmptyResult {
    let dir = path.parent().ok_or_else(|| format!("Invalid report path: {:?}", path))?;
    let data = workbook.save_to_buffer()?;

    let existing_permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".report-").suffix(".xlsx.tmp");

    #[cfg(unix)]
    if existing_permissions.is_none() {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir)?;
    file.write_all(&data)?;

    if let Some(permissions) = existing_permissions {
        file.as_file().set_permissions(permissions)?;
    }

    file.as_file().sync_all()?;
    file.persist(path)?;

    Ok(())
}
