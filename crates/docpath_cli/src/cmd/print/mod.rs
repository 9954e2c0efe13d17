use docpath::doc::Value;

/// Output truncation limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single map.
	pub max_fields: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of items printed for sequences.
	pub max_items: usize,
	/// Maximum nesting depth before containers are summarised.
	pub max_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields: 80,
			max_string_len: 200,
			max_items: 16,
			max_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset used for query results, which tend to be small records.
	pub fn for_query() -> Self {
		Self {
			max_fields: 40,
			max_string_len: 160,
			max_items: 32,
			max_depth: 4,
		}
	}
}

/// Render one value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => out.push_str(&format!("{pad}null\n")),
		Value::Bool(_) | Value::Number(_) => out.push_str(&format!("{pad}{value}\n")),
		Value::String(text) => out.push_str(&format!("{pad}\"{}\"\n", truncate(text, options.max_string_len))),
		Value::Sequence(items) => {
			if depth >= options.max_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.iter().take(options.max_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - options.max_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Map(map) => {
			if depth >= options.max_depth {
				out.push_str(&format!("{pad}{{ ... {} fields }}\n", map.len()));
				return;
			}
			out.push_str(&format!("{pad}{{\n"));
			for (key, child) in map.iter().take(options.max_fields) {
				out.push_str(&format!("{pad}  {key} = "));
				if matches!(child, Value::Map(_) | Value::Sequence(_)) {
					out.push('\n');
					write_value(out, child, indent + 4, depth + 1, options);
				} else {
					write_value(out, child, 0, depth + 1, options);
				}
			}
			if map.len() > options.max_fields {
				out.push_str(&format!("{pad}  ... {} more fields\n", map.len() - options.max_fields));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn truncate(text: &str, max: usize) -> String {
	if text.chars().count() <= max {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(max).collect();
	out.push_str("...");
	out
}

#[cfg(test)]
mod tests;
