use ::csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::doc::{CsvOptions, FormatError, Map, Value};

/// Decode header-keyed CSV into a sequence of string-valued maps.
///
/// The first record names the columns; every following record becomes one
/// map keyed by those names. Input without a header row is rejected.
pub fn decode_csv(bytes: &[u8], options: &CsvOptions) -> Result<Value, FormatError> {
	let mut reader = ReaderBuilder::new()
		.delimiter(options.delimiter)
		.has_headers(true)
		.flexible(options.flexible)
		.trim(if options.trim { Trim::All } else { Trim::None })
		.from_reader(bytes);

	let columns = reader.headers()?.clone();
	if is_blank(&columns) {
		return Err(FormatError::MissingHeader);
	}

	let mut rows = Vec::new();
	for record in reader.records() {
		let record = record?;
		let row: Map = columns
			.iter()
			.zip(record.iter())
			.map(|(column, cell)| (column.to_owned(), Value::String(cell.to_owned())))
			.collect();
		rows.push(Value::Map(row));
	}

	Ok(Value::Sequence(rows))
}

/// Write a header line followed by one line per row map.
///
/// Every cell named by `columns` must be present and hold a `String`.
pub fn encode_csv(columns: &[String], rows: &[Value], options: &CsvOptions) -> Result<Vec<u8>, FormatError> {
	let mut writer = WriterBuilder::new().delimiter(options.delimiter).from_writer(Vec::new());
	writer.write_record(columns)?;

	for (row_index, row) in rows.iter().enumerate() {
		let Value::Map(cells) = row else {
			return Err(FormatError::UnexpectedShape {
				expected: "Map",
				got: row.kind(),
			});
		};

		let mut record = Vec::with_capacity(columns.len());
		for column in columns {
			match cells.get(column) {
				Some(Value::String(text)) => record.push(text.as_str()),
				other => {
					return Err(FormatError::CsvCell {
						row: row_index,
						column: column.clone(),
						got: other.map_or("missing", Value::kind),
					});
				}
			}
		}
		writer.write_record(&record)?;
	}

	writer.into_inner().map_err(|err| FormatError::Io(err.into_error()))
}

/// Derive CSV columns and rows from a map or a sequence of maps.
///
/// A single map becomes one row. For a sequence the first row's keys name
/// the columns.
pub fn split_keys(value: &Value) -> Result<(Vec<String>, Vec<Value>), FormatError> {
	match value {
		Value::Map(map) => Ok((map.keys().cloned().collect(), vec![value.clone()])),
		Value::Sequence(items) => {
			let columns = match items.first() {
				Some(Value::Map(first)) => first.keys().cloned().collect(),
				Some(other) => {
					return Err(FormatError::UnexpectedShape {
						expected: "Map",
						got: other.kind(),
					});
				}
				None => Vec::new(),
			};
			Ok((columns, items.clone()))
		}
		other => Err(FormatError::UnexpectedShape {
			expected: "Map or Sequence",
			got: other.kind(),
		}),
	}
}

fn is_blank(record: &StringRecord) -> bool {
	record.iter().all(str::is_empty)
}

#[cfg(test)]
mod tests;
