use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::export::model::{Sheet, Workbook};
use business::domain::export::use_cases::build::ExportKind;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ExportKindDto {
    /// Current prices only
    #[oai(rename = "current_list")]
    CurrentList,
    /// Catalog plus one sheet per history date
    #[oai(rename = "full_backup")]
    FullBackup,
}

impl From<ExportKindDto> for ExportKind {
    fn from(dto: ExportKindDto) -> Self {
        match dto {
            ExportKindDto::CurrentList => ExportKind::CurrentList,
            ExportKindDto::FullBackup => ExportKind::FullBackup,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ColumnResponse {
    pub header: String,
    pub width: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SheetResponse {
    pub name: String,
    pub columns: Vec<ColumnResponse>,
    /// Cells are strings, numbers or null
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl From<Sheet> for SheetResponse {
    fn from(sheet: Sheet) -> Self {
        Self {
            name: sheet.name,
            columns: sheet
                .columns
                .into_iter()
                .map(|c| ColumnResponse {
                    header: c.header,
                    width: c.width,
                })
                .collect(),
            rows: sheet
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| serde_json::to_value(cell).unwrap_or_default())
                        .collect()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct WorkbookResponse {
    pub file_name: String,
    pub sheets: Vec<SheetResponse>,
}

impl From<Workbook> for WorkbookResponse {
    fn from(workbook: Workbook) -> Self {
        Self {
            file_name: workbook.file_name,
            sheets: workbook.sheets.into_iter().map(|s| s.into()).collect(),
        }
    }
}
