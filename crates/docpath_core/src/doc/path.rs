use std::fmt;

use crate::doc::Value;

/// Direct-child equality test written as `[field=value]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
	/// Key looked up on the candidate map.
	pub field: String,
	/// Literal compared against the rendered field value.
	pub value: String,
}

impl Predicate {
	/// Parse the bracketed form, returning `None` when `segment` is not a predicate.
	///
	/// The literal runs from the first `=` to the closing bracket, so
	/// `[a=b=c]` tests field `a` against `b=c`.
	pub fn parse(segment: &str) -> Option<Self> {
		let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
		let (field, value) = inner.split_once('=')?;
		if field.is_empty() || field.contains(['[', ']']) {
			return None;
		}

		Some(Self {
			field: field.to_owned(),
			value: value.to_owned(),
		})
	}

	/// Whether `candidate` is a map whose `field` entry renders as the literal.
	pub fn matches(&self, candidate: &Value) -> bool {
		candidate.get(&self.field).is_some_and(|item| item.render() == self.value)
	}
}

impl fmt::Display for Predicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}={}]", self.field, self.value)
	}
}

/// One `.`-delimited unit of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// Select a map key, or a sequence element when the key is all digits.
	Field(String),
	/// Broadcast over children keeping maps that pass the equality test.
	Predicate(Predicate),
	/// Broadcast over every child.
	Wildcard,
}

impl PathSegment {
	fn parse(segment: &str) -> Self {
		if segment.is_empty() {
			return Self::Wildcard;
		}
		match Predicate::parse(segment) {
			Some(predicate) => Self::Predicate(predicate),
			None => Self::Field(segment.to_owned()),
		}
	}
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.write_str(name),
			Self::Predicate(predicate) => write!(f, "{predicate}"),
			Self::Wildcard => Ok(()),
		}
	}
}

/// Parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
	/// Ordered sequence of path segments.
	pub segments: Vec<PathSegment>,
}

impl QueryPath {
	/// Split `input` on `.` and classify every piece.
	///
	/// Parsing never fails: empty pieces become wildcards and any bracketed
	/// text that is not a well-formed predicate is kept as a literal key.
	/// An empty input is a single wildcard.
	pub fn parse(input: &str) -> Self {
		Self {
			segments: input.split('.').map(PathSegment::parse).collect(),
		}
	}
}

impl fmt::Display for QueryPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, segment) in self.segments.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			write!(f, "{segment}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
