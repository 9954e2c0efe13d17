use crate::doc::{PathSegment, Predicate, QueryPath, Value};

/// Evaluate a dotted path expression against `root`.
///
/// Returns `None` when the path cannot be followed: a missing key, a
/// segment applied to the wrong shape, or a broadcast that collected
/// nothing. Callers rendering templates treat `None` as empty text.
pub fn evaluate(root: &Value, path: &str) -> Option<Value> {
	let path = QueryPath::parse(path);
	evaluate_path(root, &path)
}

/// Evaluate an already parsed path against `root`.
pub fn evaluate_path(root: &Value, path: &QueryPath) -> Option<Value> {
	let result = walk(root, &path.segments, None);
	log::debug!("query {path}: {}", if result.is_some() { "found" } else { "absent" });
	result
}

// `pending` is the predicate attached to the broadcast that produced `current`.
fn walk(current: &Value, segments: &[PathSegment], pending: Option<&Predicate>) -> Option<Value> {
	if pending.is_some_and(|predicate| !predicate.matches(current)) {
		return None;
	}

	let Some((segment, rest)) = segments.split_first() else {
		return Some(current.clone());
	};

	match segment {
		PathSegment::Field(name) => select(current, name).and_then(|next| walk(next, rest, None)),
		PathSegment::Predicate(predicate) => broadcast(current, rest, Some(predicate)),
		PathSegment::Wildcard => broadcast(current, rest, None),
	}
}

fn select<'a>(current: &'a Value, name: &str) -> Option<&'a Value> {
	match current {
		Value::Map(map) => map.get(name),
		Value::Sequence(items) if !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_digit()) => {
			name.parse::<usize>().ok().and_then(|index| items.get(index))
		}
		_ => None,
	}
}

fn broadcast(current: &Value, rest: &[PathSegment], pending: Option<&Predicate>) -> Option<Value> {
	let children: Box<dyn Iterator<Item = &Value>> = match current {
		Value::Map(map) => Box::new(map.values()),
		Value::Sequence(items) => Box::new(items.iter()),
		_ => return None,
	};

	// Null results count as nothing found, so they never reach the flatten count.
	let found: Vec<Value> = children
		.filter_map(|child| walk(child, rest, pending))
		.filter(|found| !matches!(found, Value::Null))
		.collect();
	flatten(found)
}

fn flatten(mut found: Vec<Value>) -> Option<Value> {
	match found.len() {
		0 => None,
		1 => found.pop(),
		_ => Some(Value::Sequence(found)),
	}
}
