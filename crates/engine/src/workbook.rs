use serde::{Deserialize, Serialize};

use super::sheet::Sheet;

/// Ordered sheet collection with by-name lookup. Sheet names are matched
/// exactly, as Excel stores them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|s| s.name == name)
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_is_exact() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Points Lookup"));
        wb.add_sheet(Sheet::new("Men"));

        assert!(wb.sheet("Men").is_some());
        assert!(wb.sheet("men").is_none());
        assert_eq!(wb.sheet_names(), vec!["Points Lookup", "Men"]);
    }

    #[test]
    fn test_sheet_mut_reaches_stored_sheet() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Women"));

        wb.sheet_mut("Women").unwrap().set_value(0, 0, "Nr");
        assert_eq!(wb.sheet("Women").unwrap().display(0, 0), "Nr");
    }
}
