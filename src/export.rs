//! Serialization of the full question bank for use in other tools.
//!
//! Exports always cover the whole catalog; filters and session state
//! never narrow them.

use crate::data::Catalog;
use crate::error::ExportError;

const CSV_HEADER: [&str; 11] = [
    "id",
    "topic",
    "difficulty",
    "lecture",
    "question",
    "optA",
    "optB",
    "optC",
    "optD",
    "answerIndex",
    "explanation",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }

    pub fn render(self, catalog: &Catalog) -> Result<String, ExportError> {
        match self {
            ExportFormat::Json => Ok(to_json(catalog)?),
            ExportFormat::Csv => Ok(to_delimited_text(catalog)),
        }
    }
}

/// Pretty-printed JSON array with every field of every question.
pub fn to_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog.questions())
}

/// One header row plus one row per question, in catalog order.
pub fn to_delimited_text(catalog: &Catalog) -> String {
    let mut lines = Vec::with_capacity(catalog.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for q in catalog {
        let [opt_a, opt_b, opt_c, opt_d] = &q.options;
        let row = [
            q.id.to_string(),
            quote(q.topic.label()),
            q.difficulty.label().to_owned(),
            quote(&q.lecture),
            quote(&q.prompt),
            quote(opt_a),
            quote(opt_b),
            quote(opt_c),
            quote(opt_d),
            q.correct_index.to_string(),
            quote(&q.explanation),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
