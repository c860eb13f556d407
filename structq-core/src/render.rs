//! Result set output
//!
//! Records are written as-is; no filtering or reshaping.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty `Debug` dump
    #[default]
    Debug,
    /// Single-line JSON array
    Json,
    /// Indented JSON array
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Debug => "debug",
            OutputFormat::Json => "json",
            OutputFormat::Pretty => "pretty",
        };
        f.write_str(name)
    }
}

/// Write `records` to `out` followed by a newline, then flush.
pub fn write_records<T, W>(records: &[T], format: OutputFormat, out: &mut W) -> Result<()>
where
    T: fmt::Debug + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Debug => writeln!(out, "{records:#?}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MyComplexStructWithRelations, MyOtherStruct, MyStruct};

    fn record(id: i32) -> MyComplexStructWithRelations {
        MyComplexStructWithRelations {
            id,
            one_id: id * 10,
            two_id: id * 100,
            one: MyStruct {
                id: id * 10,
                one: 1,
                two: 2,
            },
            two: MyOtherStruct {
                id: id * 100,
                value: 3,
            },
        }
    }

    fn render(records: &[MyComplexStructWithRelations], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_records(records, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_result_renders_empty_list_in_every_format() {
        for format in [OutputFormat::Debug, OutputFormat::Json, OutputFormat::Pretty] {
            assert_eq!(render(&[], format), "[]\n", "format {format}");
        }
    }

    #[test]
    fn debug_dump_includes_relations() {
        let out = render(&[record(1)], OutputFormat::Debug);

        assert!(out.contains("MyComplexStructWithRelations"));
        assert!(out.contains("one: MyStruct"));
        assert!(out.contains("two: MyOtherStruct"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn json_contains_every_record() {
        let records: Vec<_> = (1..=3).map(record).collect();
        let out = render(&records, OutputFormat::Json);

        assert_eq!(out.lines().count(), 1);
        let parsed: Vec<MyComplexStructWithRelations> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn pretty_json_is_indented() {
        let out = render(&[record(2)], OutputFormat::Pretty);
        assert!(out.contains("\n  {"));
        assert!(out.contains("\"twoId\": 200"));
    }

    #[test]
    fn format_display_names() {
        assert_eq!(OutputFormat::default().to_string(), "debug");
        assert_eq!(OutputFormat::Pretty.to_string(), "pretty");
    }
}
