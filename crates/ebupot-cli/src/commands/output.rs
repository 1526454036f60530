//! Rendering extraction results as JSON, CSV, XML or plain text.

use serde::Serialize;

use ebupot_core::ExtractionResult;

/// Separator used when flattening b7/b8 into a single CSV cell.
const LIST_SEPARATOR: &str = " | ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// XML output
    Xml,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for batch outputs.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty_json: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty_json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Xml => format_xml(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let record = &result.record;
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record([
        "format", "h1", "b1", "b2", "b7", "b8", "c1", "c3", "c4", "dpp", "pph", "warnings",
    ])?;

    // Write data
    wtr.write_record([
        result.format.to_string().as_str(),
        &record.h1,
        &record.b1,
        &record.b2,
        &record.b7.join(LIST_SEPARATOR),
        &record.b8.join(LIST_SEPARATOR),
        &record.c1,
        record.c3.as_deref().unwrap_or(""),
        record.c4.as_deref().unwrap_or(""),
        record.dpp.as_deref().unwrap_or(""),
        record.pph.as_deref().unwrap_or(""),
        &result.warnings.join("; "),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// XML view of a result; the tag is written as its letter code.
#[derive(Serialize)]
struct XmlCertificate<'a> {
    format: String,
    h1: &'a str,
    b1: &'a str,
    b2: &'a str,
    b7: &'a [String],
    b8: &'a [String],
    c1: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    c3: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    c4: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dpp: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pph: Option<&'a str>,
    #[serde(rename = "warning")]
    warnings: &'a [String],
}

fn format_xml(result: &ExtractionResult) -> anyhow::Result<String> {
    let record = &result.record;
    let view = XmlCertificate {
        format: result.format.to_string(),
        h1: &record.h1,
        b1: &record.b1,
        b2: &record.b2,
        b7: &record.b7,
        b8: &record.b8,
        c1: &record.c1,
        c3: record.c3.as_deref(),
        c4: record.c4.as_deref(),
        dpp: record.dpp.as_deref(),
        pph: record.pph.as_deref(),
        warnings: &result.warnings,
    };
    Ok(quick_xml::se::to_string_with_root("certificate", &view)?)
}

fn format_text(result: &ExtractionResult) -> String {
    let record = &result.record;
    let mut output = String::new();

    output.push_str(&format!("Format: {}\n", result.format));
    output.push_str(&format!("H.1: {}\n", record.h1));
    output.push_str(&format!("B.1: {}\n", record.b1));
    output.push_str(&format!("B.2: {}\n", record.b2));

    if !record.b7.is_empty() {
        output.push_str("B.7:\n");
        for entry in &record.b7 {
            output.push_str(&format!("  - {}\n", entry));
        }
    }
    if !record.b8.is_empty() {
        output.push_str("B.8:\n");
        for entry in &record.b8 {
            output.push_str(&format!("  - {}\n", entry));
        }
    }

    output.push_str(&format!("C.1: {}\n", record.c1));
    if let Some(c3) = &record.c3 {
        output.push_str(&format!("C.3: {}\n", c3));
    }
    if let Some(c4) = &record.c4 {
        output.push_str(&format!("C.4: {}\n", c4));
    }
    if let Some(dpp) = &record.dpp {
        output.push_str(&format!("DPP: {}\n", dpp));
    }
    if let Some(pph) = &record.pph {
        output.push_str(&format!("PPh: {}\n", pph));
    }

    if !result.warnings.is_empty() {
        output.push('\n');
        output.push_str("Warnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output
}
