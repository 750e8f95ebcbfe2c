use serde::{Deserialize, Serialize};

use crate::model::osm::{graph::KeyIndex, OsmError};

/// the attribute values of one entity, one cell per column of its kind's key set.
/// `None` marks a key the entity does not carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow(pub Vec<Option<String>>);

impl AttributeRow {
    /// a row of absent values
    pub fn empty(n_cols: usize) -> AttributeRow {
        AttributeRow(vec![None; n_cols])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.0.get(column).and_then(|c| c.as_deref())
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.0
    }
}

/// column-aligned attribute rows with a parallel sequence of row labels. row
/// position is the join key with the geometry collection of the same kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    columns: Vec<String>,
    row_labels: Vec<String>,
    rows: Vec<AttributeRow>,
}

impl AttributeTable {
    pub const OSM_ID_COLUMN: &'static str = "osm_id";
    pub const ROLE_COLUMN: &'static str = "role";
    pub const NAME_COLUMN: &'static str = "name";

    pub fn new(keys: &KeyIndex) -> AttributeTable {
        AttributeTable::with_columns(keys.keys().to_vec())
    }

    pub fn with_columns(columns: Vec<String>) -> AttributeTable {
        AttributeTable {
            columns,
            row_labels: vec![],
            rows: vec![],
        }
    }

    /// appends a row and its label together
    pub fn push(&mut self, label: String, row: AttributeRow) -> Result<(), OsmError> {
        if row.len() != self.columns.len() {
            return Err(OsmError::StructuralMismatch {
                collection: format!("attribute row '{label}'"),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.row_labels.push(label);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// the value at a row for a named column
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// rearranges the table for presentation: an `osm_id` column first, then a
    /// `role` column when roles are given, then `name` if present, then the
    /// remaining key columns in their original order.
    pub fn restructure(
        &self,
        osm_ids: &[String],
        roles: Option<&[String]>,
    ) -> Result<AttributeTable, OsmError> {
        if osm_ids.len() != self.n_rows() {
            return Err(OsmError::StructuralMismatch {
                collection: String::from("restructured osm_id column"),
                expected: self.n_rows(),
                found: osm_ids.len(),
            });
        }
        if let Some(r) = roles {
            if r.len() != self.n_rows() {
                return Err(OsmError::StructuralMismatch {
                    collection: String::from("restructured role column"),
                    expected: self.n_rows(),
                    found: r.len(),
                });
            }
        }

        let name_col = self.columns.iter().position(|c| c == Self::NAME_COLUMN);
        let key_order: Vec<usize> = name_col
            .into_iter()
            .chain((0..self.n_cols()).filter(|idx| Some(*idx) != name_col))
            .collect();

        let mut columns = vec![String::from(Self::OSM_ID_COLUMN)];
        if roles.is_some() {
            columns.push(String::from(Self::ROLE_COLUMN));
        }
        columns.extend(key_order.iter().map(|idx| self.columns[*idx].clone()));

        let mut result = AttributeTable::with_columns(columns);
        for (idx, (label, row)) in self.row_labels.iter().zip(&self.rows).enumerate() {
            let mut cells = vec![Some(osm_ids[idx].clone())];
            if let Some(r) = roles {
                cells.push(Some(r[idx].clone()));
            }
            cells.extend(key_order.iter().map(|col| row.0[*col].clone()));
            result.push(label.clone(), AttributeRow(cells))?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeRow, AttributeTable};
    use crate::model::osm::{graph::KeyIndex, OsmError};

    fn table() -> AttributeTable {
        let mut table = AttributeTable::new(&KeyIndex::new(vec!["highway", "name", "surface"]));
        table
            .push(
                String::from("7-(no role)"),
                AttributeRow(vec![Some("primary".into()), Some("Main".into()), None]),
            )
            .expect("test invariant: row width matches");
        table
            .push(
                String::from("7-alt"),
                AttributeRow(vec![None, None, Some("gravel".into())]),
            )
            .expect("test invariant: row width matches");
        table
    }

    #[test]
    fn push_rejects_wrong_width() {
        let mut table = table();
        match table.push(String::from("8"), AttributeRow::empty(2)) {
            Err(OsmError::StructuralMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected structural mismatch, found {other:?}"),
        }
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.row_labels().len(), 2);
    }

    #[test]
    fn get_by_column_name() {
        let table = table();
        assert_eq!(table.get(0, "highway"), Some("primary"));
        assert_eq!(table.get(0, "surface"), None);
        assert_eq!(table.get(1, "surface"), Some("gravel"));
        assert_eq!(table.get(2, "surface"), None);
        assert_eq!(table.get(0, "lanes"), None);
    }

    #[test]
    fn restructure_moves_id_role_and_name_first() {
        let table = table();
        let ids = vec![String::from("7"), String::from("7")];
        let roles = vec![String::from(""), String::from("alt")];
        let result = table
            .restructure(&ids, Some(&roles))
            .expect("test invariant: aligned ids and roles");
        assert_eq!(
            result.columns(),
            &["osm_id", "role", "name", "highway", "surface"]
        );
        assert_eq!(result.get(0, "osm_id"), Some("7"));
        assert_eq!(result.get(1, "role"), Some("alt"));
        assert_eq!(result.get(0, "name"), Some("Main"));
        assert_eq!(result.get(1, "surface"), Some("gravel"));
        assert_eq!(result.row_labels(), table.row_labels());
    }

    #[test]
    fn restructure_without_roles_or_name() {
        let mut table = AttributeTable::new(&KeyIndex::new(vec!["building"]));
        table
            .push(String::from("1"), AttributeRow(vec![Some("yes".into())]))
            .expect("test invariant: row width matches");
        let result = table
            .restructure(&[String::from("1")], None)
            .expect("test invariant: aligned ids");
        assert_eq!(result.columns(), &["osm_id", "building"]);
        assert!(table.restructure(&[], None).is_err());
    }
}
