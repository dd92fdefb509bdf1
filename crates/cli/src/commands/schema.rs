//! List the declared backend schema.

use anyhow::Result;
use gateway_client::schema::{ENUM_TYPES, Table};

use super::Output;
use crate::formatters::{SchemaEnum, SchemaOutput, SchemaTable};

pub fn collect() -> SchemaOutput {
    SchemaOutput {
        tables: Table::ALL
            .iter()
            .map(|table| SchemaTable {
                name: table.name(),
                columns: table.columns().to_vec(),
            })
            .collect(),
        enums: ENUM_TYPES
            .iter()
            .map(|&(name, values)| SchemaEnum {
                name,
                values: values.to_vec(),
            })
            .collect(),
    }
}

pub fn run(out: &Output<'_>) -> Result<()> {
    out.emit(&out.formatter().format_schema(&collect())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_lists_every_table_and_enum() {
        let schema = collect();
        assert_eq!(schema.tables.len(), 7);
        assert_eq!(schema.tables[0].name, "gateways");
        assert!(schema.tables[1].columns.contains(&"protocol_type"));
        let severity = schema
            .enums
            .iter()
            .find(|e| e.name == "alarm_severity")
            .unwrap();
        assert_eq!(severity.values, vec!["critical", "high", "medium", "low", "info"]);
    }
}
