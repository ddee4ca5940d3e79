use std::collections::HashMap;

/// One data line of the export, keyed by the column names of the header row.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Zip `values` positionally with `header`.
    /// Trailing columns without a value stay absent, surplus values are ignored.
    pub fn from_line(header: &[String], values: &[&str]) -> Self {
        let fields = header
            .iter()
            .zip(values.iter())
            .map(|(name, value)| (name.clone(), value.trim().to_string()))
            .collect();

        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
