use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

/// A header-addressed CSV table. No schema is enforced: asking for a column the
/// file does not carry yields `None` rather than an error.
#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        self.rows.get(position).map(|record| Row {
            table: self,
            record,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |record| Row {
            table: self,
            record,
        })
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// Cell value for `column`. Absent columns, short rows and blank cells are all `None`.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.table.column_index(column)?;
        self.record
            .get(idx)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(src: &str) -> Table {
        Table::from_reader(src.as_bytes()).unwrap()
    }

    #[test]
    fn test_lookup_by_header() {
        let t = table("Job_Name,Company_name\nBackend Dev,Acme\nQA,Globex\n");
        assert_eq!(t.len(), 2);
        assert_eq!(t.row(1).unwrap().get("Company_name"), Some("Globex"));
    }

    #[test]
    fn test_missing_column_is_none() {
        let t = table("Job_Name\nBackend Dev\n");
        assert!(!t.has_column("Salary"));
        assert_eq!(t.row(0).unwrap().get("Salary"), None);
    }

    #[test]
    fn test_short_row_and_blank_cell_are_none() {
        let t = table("a,b,c\n1,,\n2\n");
        assert_eq!(t.row(0).unwrap().get("b"), None);
        assert_eq!(t.row(1).unwrap().get("c"), None);
        assert_eq!(t.row(1).unwrap().get("a"), Some("2"));
    }

    #[test]
    fn test_out_of_range_row() {
        let t = table("a\n1\n");
        assert!(t.row(1).is_none());
    }
}
