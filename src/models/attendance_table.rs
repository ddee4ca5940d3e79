use serde::Serialize;

/// The three sub-columns every date contributes, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    In,
    Out,
    Hours,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::In, Field::Out, Field::Hours];

    pub fn label(&self) -> &'static str {
        match self {
            Field::In => "IN",
            Field::Out => "OUT",
            Field::Hours => "Hours",
        }
    }
}

/// Rendered cells of one person on one date. Empty strings mean "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayCells {
    #[serde(rename = "IN")]
    pub in_time: String,
    #[serde(rename = "OUT")]
    pub out_time: String,
    #[serde(rename = "Hours")]
    pub hours: String,
}

impl DayCells {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::In => &self.in_time,
            Field::Out => &self.out_time,
            Field::Hours => &self.hours,
        }
    }
}

/// One person; `days` is aligned index by index with `AttendanceTable::dates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub name: String,
    pub days: Vec<DayCells>,
}

/// Wide per-date attendance table: one row per person, `IN/OUT/Hours` per date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTable {
    pub dates: Vec<String>,
    pub rows: Vec<AttendanceRow>,
}

impl AttendanceTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattened column labels: `Name`, then `"<date> <field>"` grouped by date.
    pub fn headers(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + self.dates.len() * Field::ALL.len());
        out.push("Name".to_string());
        for date in &self.dates {
            for field in Field::ALL {
                out.push(format!("{} {}", date, field.label()));
            }
        }
        out
    }

    /// Every row flattened in the same order as `headers()`.
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut rec = Vec::with_capacity(1 + row.days.len() * Field::ALL.len());
                rec.push(row.name.clone());
                for cells in &row.days {
                    for field in Field::ALL {
                        rec.push(cells.get(field).to_string());
                    }
                }
                rec
            })
            .collect()
    }

    pub fn cell(&self, name: &str, date: &str, field: Field) -> Option<&str> {
        let idx = self.dates.iter().position(|d| d == date)?;
        let row = self.rows.iter().find(|r| r.name == name)?;
        row.days.get(idx).map(|c| c.get(field))
    }
}
