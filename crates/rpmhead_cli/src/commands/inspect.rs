//! Inspect command implementation.

use super::{hex_encode, ValueArgs};
use rpmhead_core::{DataType, EntryTable, Payload, TableState};
use serde::Serialize;

/// Signature table inspection result.
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Number of index records.
    pub entry_count: u32,
    /// Size of the payload area in bytes.
    pub payload_area_size: u32,
    /// Total encoded size in bytes.
    pub encoded_len: u64,
    /// Lifecycle state of the table.
    pub state: TableState,
    /// Index records in wire order.
    pub entries: Vec<EntryInfo>,
}

/// One index record and a preview of its payload.
#[derive(Debug, Serialize)]
pub struct EntryInfo {
    /// Tag value.
    pub tag: u32,
    /// Payload data type.
    pub data_type: DataType,
    /// Offset into the payload area.
    pub offset: u32,
    /// Element count.
    pub count: u32,
    /// Payload size in bytes.
    pub size: u64,
    /// Short rendering of the payload.
    pub preview: String,
}

/// Runs the inspect command.
pub fn run(values: &ValueArgs, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let table = values.build_signature()?;
    let result = inspect(table.table());

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        "text" => print_text(&result),
        other => return Err(format!("unknown format: {other}").into()),
    }

    Ok(())
}

/// Collects the index of `table`.
pub fn inspect(table: &EntryTable) -> InspectResult {
    let entries = table
        .entries()
        .map(|entry| {
            let index = entry.index();
            EntryInfo {
                tag: index.tag().as_u32(),
                data_type: index.data_type(),
                offset: index.offset(),
                count: index.count(),
                size: entry.payload().size(),
                preview: preview(entry.payload()),
            }
        })
        .collect();

    InspectResult {
        entry_count: table.entry_count(),
        payload_area_size: table.payload_area_size(),
        encoded_len: table.encoded_len(),
        state: table.state(),
        entries,
    }
}

fn preview(payload: &Payload) -> String {
    const MAX: usize = 16;
    match payload {
        Payload::UInt32(value) => value.to_string(),
        Payload::String(data) => String::from_utf8_lossy(data).into_owned(),
        Payload::Binary(data) if data.len() > MAX => {
            format!("{}… ({} bytes)", hex_encode(&data[..MAX]), data.len())
        }
        Payload::Binary(data) => hex_encode(data),
    }
}

fn print_text(result: &InspectResult) {
    println!("Signature Table");
    println!("===============");
    println!("Entries:           {}", result.entry_count);
    println!("Payload area:      {} bytes", result.payload_area_size);
    println!("Encoded size:      {} bytes", result.encoded_len);
    println!("State:             {:?}", result.state);
    println!();
    println!(
        "  {:>8}  {:<7}  {:>8}  {:>6}  {}",
        "TAG", "TYPE", "OFFSET", "COUNT", "VALUE"
    );
    for entry in &result.entries {
        println!(
            "  {:>#8x}  {:<7}  {:>8}  {:>6}  {}",
            entry.tag,
            format!("{:?}", entry.data_type),
            entry.offset,
            entry.count,
            entry.preview
        );
    }
}
