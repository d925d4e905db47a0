use thiserror::Error;

use crate::domain::value::Variable;

/// Field path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Parsed field path (`SERVICE`, `service.name`, `ports[0]`, `matrix[1][2].cell`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn parse(input: &str) -> Result<Self, FieldPathError> {
        if input.is_empty() {
            return Err(FieldPathError::new(input, "path must not be empty".to_string()));
        }

        let bytes = input.as_bytes();
        let mut cursor = 0;
        let mut segments = Vec::new();

        loop {
            let key_start = cursor;
            while cursor < bytes.len() && bytes[cursor] != b'.' && bytes[cursor] != b'[' {
                cursor += 1;
            }

            if cursor > key_start {
                segments.push(PathSegment::Key(input[key_start..cursor].to_string()));
            } else if cursor >= bytes.len() || bytes[cursor] == b'.' || !segments.is_empty() {
                return Err(FieldPathError::new(
                    input,
                    format!("empty segment at byte {key_start}"),
                ));
            }

            while cursor < bytes.len() && bytes[cursor] == b'[' {
                cursor += 1;
                let index_start = cursor;
                while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
                    cursor += 1;
                }
                if index_start == cursor {
                    return Err(FieldPathError::new(
                        input,
                        format!("expected numeric index at byte {cursor}"),
                    ));
                }
                if cursor >= bytes.len() || bytes[cursor] != b']' {
                    return Err(FieldPathError::new(
                        input,
                        format!("expected `]` at byte {cursor}"),
                    ));
                }
                let index = input[index_start..cursor].parse::<usize>().map_err(|error| {
                    FieldPathError::new(input, format!("invalid index: {error}"))
                })?;
                segments.push(PathSegment::Index(index));
                cursor += 1;
            }

            if cursor >= bytes.len() {
                break;
            }
            if bytes[cursor] != b'.' {
                return Err(FieldPathError::new(
                    input,
                    format!("expected `.` or `[` at byte {cursor}"),
                ));
            }
            cursor += 1;
            if cursor >= bytes.len() {
                return Err(FieldPathError::new(
                    input,
                    "path cannot end with `.`".to_string(),
                ));
            }
        }

        Ok(Self {
            raw: input.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Looks the path up inside `root`.
    ///
    /// A top-level key equal to the whole path wins over dotted traversal, so keys that
    /// themselves contain dots stay reachable. Key segments index into arrays when they are
    /// numeric. `None` means the value is absent.
    pub fn resolve<'a>(&self, root: &'a Variable) -> Option<&'a Variable> {
        if let Variable::Object(map) = root {
            if let Some(value) = map.get(&self.raw) {
                return Some(value);
            }
        }

        let mut current = root;
        for segment in &self.segments {
            current = match (segment, current) {
                (PathSegment::Key(key), Variable::Object(map)) => map.get(key)?,
                (PathSegment::Key(key), Variable::Array(items)) => {
                    items.get(key.parse::<usize>().ok()?)?
                }
                (PathSegment::Index(index), Variable::Array(items)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

/// Resolves `field` against `source`.
///
/// Any non-empty field name is accepted. Names that do not parse as a path (`a.`,
/// `list[x]`) are looked up as a plain top-level key.
pub fn lookup<'a>(source: &'a Variable, field: &str) -> Option<&'a Variable> {
    match FieldPath::parse(field) {
        Ok(path) => path.resolve(source),
        Err(_) => source.as_object()?.get(field),
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid field path `{input}`: {reason}")]
pub struct FieldPathError {
    input: String,
    reason: String,
}

impl FieldPathError {
    fn new(input: &str, reason: String) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
