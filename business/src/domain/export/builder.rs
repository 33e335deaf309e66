//! Tabular exports of the catalog.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use uuid::Uuid;

use super::model::{Cell, Column, Sheet, Workbook};
use crate::domain::price_history::model::PriceHistoryEntry;
use crate::domain::product::model::Product;

pub const CURRENT_LIST_SHEET: &str = "الاسعار_الحالية";
pub const MAIN_BACKUP_SHEET: &str = "القائمة_الرئيسية_الشاملة";

const NAME_HEADER: &str = "اسم_المنتج";
const CURRENT_PRICE_HEADER: &str = "السعر_الحالي";
const LAST_UPDATE_HEADER: &str = "تاريخ_آخر_تحديث";
const PRICE_ON_DATE_HEADER: &str = "السعر_في_هذا_التاريخ";
const UNPRICED_LABEL: &str = "غير مسعر";
const DELETED_PRODUCT_LABEL: &str = "منتج محذوف";

const MAX_SHEET_NAME_CHARS: usize = 31;

/// Replaces characters spreadsheets reject in sheet names and truncates to
/// the 31 character limit.
pub fn safe_sheet_name(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '*' | '[' | ']' => '-',
            other => other,
        })
        .take(MAX_SHEET_NAME_CHARS)
        .collect()
}

pub fn current_list(products: &[Product], today: NaiveDate) -> Workbook {
    let rows = products
        .iter()
        .map(|product| {
            vec![
                Cell::from(product.name.as_str()),
                product.price.amount().map_or(Cell::Empty, Cell::Number),
            ]
        })
        .collect();

    Workbook {
        file_name: format!("قائمة_الاسعار_{today}.xlsx"),
        sheets: vec![Sheet {
            name: CURRENT_LIST_SHEET.to_string(),
            columns: vec![Column::new(NAME_HEADER, 40), Column::new(CURRENT_PRICE_HEADER, 20)],
            rows,
        }],
    }
}

/// Main sheet with every product, then one sheet per recorded date, newest
/// first. `history` is `None` when it could not be fetched.
pub fn full_backup(
    products: &[Product],
    history: Option<&[PriceHistoryEntry]>,
    today: NaiveDate,
) -> Workbook {
    let main_rows = products
        .iter()
        .map(|product| {
            vec![
                Cell::from(product.name.as_str()),
                product
                    .price
                    .amount()
                    .map_or_else(|| Cell::from(UNPRICED_LABEL), Cell::Number),
                Cell::from(product.last_updated.date_naive().to_string()),
            ]
        })
        .collect();

    let mut sheets = vec![Sheet {
        name: MAIN_BACKUP_SHEET.to_string(),
        columns: vec![
            Column::new(NAME_HEADER, 40),
            Column::new(CURRENT_PRICE_HEADER, 20),
            Column::new(LAST_UPDATE_HEADER, 20),
        ],
        rows: main_rows,
    }];

    let names: HashMap<Uuid, &str> = products
        .iter()
        .map(|product| (product.id, product.name.as_str()))
        .collect();

    let mut by_date: BTreeMap<NaiveDate, Vec<&PriceHistoryEntry>> = BTreeMap::new();
    for entry in history.unwrap_or_default() {
        by_date.entry(entry.recorded_date).or_default().push(entry);
    }

    for (date, entries) in by_date.into_iter().rev() {
        let rows = entries
            .into_iter()
            .map(|entry| {
                let name = names
                    .get(&entry.product_id)
                    .copied()
                    .unwrap_or(DELETED_PRODUCT_LABEL);
                vec![Cell::from(name), Cell::Number(entry.price)]
            })
            .collect();
        sheets.push(Sheet {
            name: safe_sheet_name(&date.to_string()),
            columns: vec![Column::new(NAME_HEADER, 40), Column::new(PRICE_ON_DATE_HEADER, 20)],
            rows,
        });
    }

    Workbook {
        file_name: format!("نسخة_احتياطية_شاملة_{today}.xlsx"),
        sheets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::Price;

    fn product(name: &str, price: Price) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price,
        })
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn should_sanitize_and_truncate_sheet_names() {
        assert_eq!(safe_sheet_name("2024/05/01"), "2024-05-01");
        assert_eq!(safe_sheet_name("a[b]c?d*e\\f"), "a-b-c-d-e-f");
        assert_eq!(safe_sheet_name(&"x".repeat(40)).chars().count(), 31);
    }

    #[test]
    fn should_export_current_list_with_empty_cell_for_unpriced() {
        let products = vec![
            product("Tea", Price::Priced(5000.0)),
            product("Lentils", Price::Unpriced),
        ];

        let workbook = current_list(&products, date(1));

        assert_eq!(workbook.file_name, "قائمة_الاسعار_2024-05-01.xlsx");
        let sheet = &workbook.sheets[0];
        assert_eq!(sheet.name, CURRENT_LIST_SHEET);
        assert_eq!(sheet.rows[0], vec![Cell::from("Tea"), Cell::Number(5000.0)]);
        assert_eq!(sheet.rows[1][1], Cell::Empty);
    }

    #[test]
    fn should_add_one_sheet_per_date_newest_first() {
        let tea = product("Tea", Price::Priced(5500.0));
        let history = vec![
            PriceHistoryEntry::new(tea.id, 5000.0, date(1)),
            PriceHistoryEntry::new(tea.id, 5500.0, date(3)),
            PriceHistoryEntry::new(Uuid::new_v4(), 20.0, date(3)),
        ];

        let workbook = full_backup(std::slice::from_ref(&tea), Some(&history), date(3));

        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![MAIN_BACKUP_SHEET, "2024-05-03", "2024-05-01"]);
        assert_eq!(workbook.sheets[1].rows[1][0], Cell::from(DELETED_PRODUCT_LABEL));
        assert_eq!(workbook.sheets[2].rows[0][1], Cell::Number(5000.0));
    }

    #[test]
    fn should_keep_main_sheet_when_history_is_missing() {
        let products = vec![product("Lentils", Price::Unpriced)];

        let workbook = full_backup(&products, None, date(3));

        assert_eq!(workbook.sheets.len(), 1);
        assert_eq!(workbook.sheets[0].rows[0][1], Cell::from(UNPRICED_LABEL));
        assert_eq!(workbook.sheets[0].columns.len(), 3);
    }
}
