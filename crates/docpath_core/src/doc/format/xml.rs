use std::collections::btree_map::Entry;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::doc::{FormatError, Map, Value, XmlOptions};

/// Open element collected while reading.
struct Frame {
	name: String,
	children: Map,
	text: String,
}

impl Frame {
	fn open(start: &BytesStart<'_>, options: &XmlOptions) -> Result<Self, FormatError> {
		let name = std::str::from_utf8(start.name().as_ref())?.to_owned();
		let mut children = Map::new();
		for attr in start.attributes() {
			let attr = attr?;
			let key = std::str::from_utf8(attr.key.as_ref())?;
			let value = attr.unescape_value()?;
			children.insert(format!("{}{key}", options.attr_prefix), Value::String(value.into_owned()));
		}

		Ok(Self {
			name,
			children,
			text: String::new(),
		})
	}

	fn close(self, options: &XmlOptions) -> (String, Value) {
		if self.children.is_empty() {
			return (self.name, Value::String(self.text));
		}

		let mut children = self.children;
		if !self.text.is_empty() {
			children.insert(options.text_key.clone(), Value::String(self.text));
		}
		(self.name, Value::Map(children))
	}
}

/// Decode XML into nested maps keyed by tag name.
///
/// The result is a map holding the root element. Leaf elements become
/// strings, attributes become keys carrying `attr_prefix`, repeated sibling
/// tags collapse into a sequence, and character data next to children or
/// attributes is stored under `text_key`.
pub fn decode_xml(bytes: &[u8], options: &XmlOptions) -> Result<Value, FormatError> {
	let mut reader = Reader::from_reader(bytes);
	reader.config_mut().trim_text(options.trim_text);

	let mut document = Map::new();
	let mut stack: Vec<Frame> = Vec::new();
	let mut buf = Vec::new();

	loop {
		match reader.read_event_into(&mut buf)? {
			Event::Start(start) => stack.push(Frame::open(&start, options)?),
			Event::Empty(start) => {
				let (name, value) = Frame::open(&start, options)?.close(options);
				attach(&mut stack, &mut document, name, value);
			}
			Event::End(end) => {
				let Some(frame) = stack.pop() else {
					return Err(FormatError::UnmatchedEnd {
						name: String::from_utf8_lossy(end.name().as_ref()).into_owned(),
					});
				};
				let (name, value) = frame.close(options);
				attach(&mut stack, &mut document, name, value);
			}
			Event::Text(text) => {
				if let Some(frame) = stack.last_mut() {
					frame.text.push_str(&text.unescape()?);
				}
			}
			Event::CData(data) => {
				if let Some(frame) = stack.last_mut() {
					frame.text.push_str(std::str::from_utf8(&data.into_inner())?);
				}
			}
			Event::Eof => break,
			_ => {}
		}
		buf.clear();
	}

	if let Some(frame) = stack.pop() {
		return Err(FormatError::UnclosedElement { name: frame.name });
	}
	if document.is_empty() {
		return Err(FormatError::MissingRoot);
	}

	Ok(Value::Map(document))
}

fn attach(stack: &mut [Frame], document: &mut Map, name: String, value: Value) {
	let target = match stack.last_mut() {
		Some(parent) => &mut parent.children,
		None => document,
	};

	match target.entry(name) {
		Entry::Vacant(slot) => {
			slot.insert(value);
		}
		Entry::Occupied(mut slot) => match slot.get_mut() {
			Value::Sequence(items) => items.push(value),
			existing => {
				let first = std::mem::replace(existing, Value::Null);
				*existing = Value::Sequence(vec![first, value]);
			}
		},
	}
}

/// Encode a map as XML following the decoder's convention.
///
/// Each top-level key becomes an element; the usual document has exactly
/// one. No XML declaration is written.
pub fn encode_xml(value: &Value, options: &XmlOptions) -> Result<String, FormatError> {
	let Value::Map(map) = value else {
		return Err(FormatError::UnexpectedShape {
			expected: "Map",
			got: value.kind(),
		});
	};

	let mut out = String::new();
	for (name, child) in map {
		write_element(&mut out, name, child, options)?;
	}
	Ok(out)
}

/// Encode a sequence as repeated `item_tag` children of `root_tag`.
pub fn encode_xml_array(items: &Value, root_tag: &str, item_tag: &str, options: &XmlOptions) -> Result<String, FormatError> {
	let Value::Sequence(_) = items else {
		return Err(FormatError::UnexpectedShape {
			expected: "Sequence",
			got: items.kind(),
		});
	};

	check_name(root_tag)?;
	check_name(item_tag)?;

	let mut out = String::from("<?xml version=\"1.0\"?>\n");
	out.push_str(&format!("<{root_tag}>"));
	write_element(&mut out, item_tag, items, options)?;
	out.push_str(&format!("</{root_tag}>"));
	Ok(out)
}

/// Whether `name` is usable as an element or attribute name.
fn is_xml_name(name: &str) -> bool {
	let mut chars = name.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	(first.is_alphabetic() || matches!(first, '_' | ':')) && chars.all(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '.' | '_' | ':'))
}

fn check_name(name: &str) -> Result<(), FormatError> {
	if is_xml_name(name) {
		Ok(())
	} else {
		Err(FormatError::InvalidXmlName { name: name.to_owned() })
	}
}

fn write_element(out: &mut String, name: &str, value: &Value, options: &XmlOptions) -> Result<(), FormatError> {
	if let Value::Sequence(items) = value {
		for item in items {
			write_element(out, name, item, options)?;
		}
		return Ok(());
	}

	check_name(name)?;
	match value {
		Value::Map(map) => {
			let is_attr = |key: &str| !options.attr_prefix.is_empty() && key.starts_with(options.attr_prefix.as_str());

			out.push('<');
			out.push_str(name);
			for (key, attr) in map.iter().filter(|(key, _)| is_attr(key.as_str())) {
				let attr_name = &key[options.attr_prefix.len()..];
				check_name(attr_name)?;
				out.push_str(&format!(" {attr_name}=\"{}\"", escape(&attr.render())));
			}

			let text = map.get(&options.text_key);
			let mut children = map.iter().filter(|(key, _)| !is_attr(key.as_str()) && **key != options.text_key).peekable();
			if text.is_none() && children.peek().is_none() {
				out.push_str("/>");
				return Ok(());
			}

			out.push('>');
			if let Some(text) = text {
				out.push_str(&escape(&text.render()));
			}
			for (key, child) in children {
				write_element(out, key, child, options)?;
			}
			out.push_str(&format!("</{name}>"));
		}
		Value::Null => out.push_str(&format!("<{name}/>")),
		scalar => out.push_str(&format!("<{name}>{}</{name}>", escape(&scalar.render()))),
	}
	Ok(())
}
