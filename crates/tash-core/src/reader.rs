//! Reader for `.tashes` task files.
//!
//! A task file holds one or more records separated by `<--->`. Each record is
//! a comma separated list of `key=value` pairs; line breaks are ignored.
//!
//! ```text
//! name="Write report",duration=2:0:0,complexity=4,
//! deadline=2025.5.31.17.0.0
//! <--->
//! name="Inbox zero",duration=0:30:0,complexity=1,duration_inaccuracy=0:10:0
//! ```
//!
//! Values are typed by their shape:
//!
//! | Shape          | Example           | Value              |
//! |----------------|-------------------|--------------------|
//! | digits         | `3`               | [`Value::Integer`] |
//! | quoted         | `"text"`          | [`Value::Text`]    |
//! | `H:M:S`        | `1:30:0`          | [`Value::Span`]    |
//! | `Y.M.D.h.m.s`  | `2025.5.31.8.0.0` | [`Value::Moment`]  |

use std::{fs, path::Path};

use jiff::{civil::DateTime, SignedDuration};
use log::debug;

use crate::{
    error::{IoResultExt, PlannerError, Result},
    models::{Task, TaskBuilder},
};

/// Separator between records in a task file.
pub const RECORD_SEPARATOR: &str = "<--->";

/// A typed value from a task file.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Span(SignedDuration),
    Moment(DateTime),
}

impl Value {
    fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "an integer",
            Value::Text(_) => "a quoted string",
            Value::Span(_) => "a duration (H:M:S)",
            Value::Moment(_) => "a date-time (Y.M.D.h.m.s)",
        }
    }
}

/// Read every task in the file at `path`.
///
/// # Errors
///
/// Returns `PlannerError::FileSystem` if the file cannot be read, and any
/// parse or validation error from its records.
pub fn read_tasks(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_path(path)?;
    let tasks = parse_tasks(&text)?;
    debug!("read {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Read a file containing exactly one task record.
///
/// # Errors
///
/// As [`read_tasks`], plus `PlannerError::Parse` for an empty file.
pub fn read_task(path: impl AsRef<Path>) -> Result<Task> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_path(path)?;
    parse_record(&text)?.ok_or_else(|| {
        PlannerError::parse(path.display().to_string()).with_reason("empty file given")
    })
}

/// Parse all records of a task file. Blank records are skipped.
///
/// # Errors
///
/// Returns the first parse or validation error encountered.
pub fn parse_tasks(text: &str) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for record in text.split(RECORD_SEPARATOR) {
        if let Some(task) = parse_record(record)? {
            tasks.push(task);
        }
    }
    Ok(tasks)
}

/// Parse a single record, returning `None` if it is blank.
///
/// # Errors
///
/// Returns `PlannerError::Parse` for malformed pairs, unknown keys or values
/// of the wrong type, and `PlannerError::InvalidInput` for a missing name or
/// out-of-range ratings.
pub fn parse_record(record: &str) -> Result<Option<Task>> {
    if record.trim().is_empty() {
        return Ok(None);
    }

    let mut name = None;
    let mut builder = TaskBuilder::new("");
    for pair in record.split(',') {
        let pair: String = pair.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| PlannerError::parse(pair).with_reason("expected key=value"))?;
        let key = key.trim();
        let value = parse_value(raw.trim())?;

        builder = match (key, value) {
            ("name", Value::Text(text)) => {
                name = Some(text);
                builder
            }
            ("description", Value::Text(text)) => builder.description(text),
            ("duration", Value::Span(span)) => builder.duration(span),
            ("duration_inaccuracy", Value::Span(span)) => {
                builder.duration_inaccuracy(span)
            }
            ("complexity", Value::Integer(n)) => builder.complexity(n),
            ("priority", Value::Integer(n)) => builder.priority(n),
            ("deadline", Value::Moment(at)) => builder.deadline(at),
            ("min_start_time", Value::Moment(at)) => builder.min_start_time(at),
            ("start", _) => {
                return Err(PlannerError::parse(key).with_reason(
                    "task files describe unpinned tasks; start is assigned by the planner",
                ))
            }
            (key, value) => return Err(mismatch(key, &value)),
        };
    }

    let name = name.ok_or_else(|| {
        PlannerError::invalid_input("name").with_reason("every task needs a name")
    })?;
    builder.name(name).build().map(Some)
}

/// Parse a raw value by its shape.
///
/// # Errors
///
/// Returns `PlannerError::Parse` with reason `Wrong format` when no shape
/// matches, or a more specific reason when a matching shape holds an
/// invalid number or date.
pub fn parse_value(raw: &str) -> Result<Value> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw
            .parse()
            .map(Value::Integer)
            .map_err(|e| PlannerError::parse(raw).with_reason(e.to_string()));
    }

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Ok(Value::Text(raw[1..raw.len() - 1].to_string()));
    }

    let clock: Vec<&str> = raw.split(':').collect();
    if clock.len() == 3 {
        let [hours, minutes, seconds] = numbers::<3>(raw, &clock)?;
        return hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .map(|total| Value::Span(SignedDuration::from_secs(total)))
            .ok_or_else(|| PlannerError::parse(raw).with_reason("duration out of range"));
    }

    let calendar: Vec<&str> = raw.split('.').collect();
    if calendar.len() == 6 {
        let [year, month, day, hour, minute, second] = numbers::<6>(raw, &calendar)?;
        let out_of_range = || PlannerError::parse(raw).with_reason("date-time out of range");
        let moment = DateTime::new(
            i16::try_from(year).map_err(|_| out_of_range())?,
            i8::try_from(month).map_err(|_| out_of_range())?,
            i8::try_from(day).map_err(|_| out_of_range())?,
            i8::try_from(hour).map_err(|_| out_of_range())?,
            i8::try_from(minute).map_err(|_| out_of_range())?,
            i8::try_from(second).map_err(|_| out_of_range())?,
            0,
        )
        .map_err(|e| PlannerError::parse(raw).with_reason(e.to_string()))?;
        return Ok(Value::Moment(moment));
    }

    Err(PlannerError::parse(raw).with_reason("Wrong format"))
}

fn numbers<const N: usize>(raw: &str, parts: &[&str]) -> Result<[i64; N]> {
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| PlannerError::parse(raw).with_reason(format!("'{part}' is not a number")))?;
    }
    Ok(out)
}

fn mismatch(key: &str, value: &Value) -> PlannerError {
    let expected = match key {
        "name" | "description" => "a quoted string",
        "duration" | "duration_inaccuracy" => "a duration (H:M:S)",
        "complexity" | "priority" => "an integer",
        "deadline" | "min_start_time" => "a date-time (Y.M.D.h.m.s)",
        _ => return PlannerError::parse(key).with_reason("unknown key"),
    };
    PlannerError::parse(key).with_reason(format!(
        "expected {expected}, found {}",
        value.kind_name()
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use jiff::civil::date;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_parse_value_kinds() {
        assert_eq!(parse_value("42").unwrap(), Value::Integer(42));
        assert_eq!(parse_value("\"text\"").unwrap(), Value::Text("text".to_string()));
        assert_eq!(
            parse_value("1:30:15").unwrap(),
            Value::Span(SignedDuration::from_secs(5415))
        );
        assert_eq!(
            parse_value("2025.5.31.8.0.0").unwrap(),
            Value::Moment(date(2025, 5, 31).at(8, 0, 0, 0))
        );
    }

    #[test]
    fn test_parse_value_wrong_format() {
        let err = parse_value("invalid_value").unwrap_err();
        assert!(matches!(err, PlannerError::Parse { .. }));
        assert!(err.to_string().contains("Wrong format"));
    }

    #[test]
    fn test_parse_value_invalid_shapes() {
        assert!(parse_value("1:xx:0").is_err());
        assert!(parse_value("2025.13.1.0.0.0").is_err());
        assert!(parse_value("\"").is_err());
        assert!(parse_value("").is_err());
    }

    #[test]
    fn test_parse_record_simple() {
        let task = parse_record("name=\"Task 1\",duration=1:0:0,complexity=3")
            .unwrap()
            .unwrap();
        assert_eq!(task.name(), "Task 1");
        assert_eq!(task.duration(), Some(SignedDuration::from_hours(1)));
        assert_eq!(task.complexity().get(), 3);
    }

    #[test]
    fn test_parse_record_with_datetime() {
        let task = parse_record("name=\"Meeting\",deadline=2025.5.31.15.0.0")
            .unwrap()
            .unwrap();
        assert_eq!(task.name(), "Meeting");
        assert_eq!(task.deadline(), Some(date(2025, 5, 31).at(15, 0, 0, 0)));
        assert_eq!(task.duration(), None);
    }

    #[test]
    fn test_parse_record_ignores_line_breaks() {
        let task = parse_record("name=\"Split\",\nduration=0:45:0,\ncomplexity=2\n")
            .unwrap()
            .unwrap();
        assert_eq!(task.duration(), Some(SignedDuration::from_mins(45)));
        assert_eq!(task.complexity().get(), 2);
    }

    #[test]
    fn test_parse_record_blank() {
        assert!(parse_record("").unwrap().is_none());
        assert!(parse_record(" \n ").unwrap().is_none());
    }

    #[test]
    fn test_parse_record_missing_name() {
        let err = parse_record("duration=1:0:0").unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_parse_record_malformed() {
        assert!(parse_record("name=Task1,duration=invalid").is_err());
        assert!(parse_record("name").is_err());
    }

    #[test]
    fn test_parse_record_type_mismatch_and_unknown_key() {
        let err = parse_record("name=\"x\",complexity=\"high\"").unwrap_err();
        assert!(err.to_string().contains("complexity"));

        let err = parse_record("name=\"x\",colour=3").unwrap_err();
        assert!(err.to_string().contains("unknown key"));
    }

    #[test]
    fn test_parse_record_rejects_start() {
        let err = parse_record("name=\"x\",start=2025.5.31.8.0.0").unwrap_err();
        assert!(err.to_string().contains("start"));
    }

    #[test]
    fn test_parse_record_invalid_complexity() {
        let err = parse_record("name=\"x\",complexity=7").unwrap_err();
        assert_eq!(err.field(), Some("complexity"));
    }

    #[test]
    fn test_read_task_single() {
        let file = write_file("name=\"Single Task\",duration=0:30:0,complexity=2");
        let task = read_task(file.path()).unwrap();
        assert_eq!(task.name(), "Single Task");
        assert_eq!(task.duration(), Some(SignedDuration::from_mins(30)));
        assert_eq!(task.complexity().get(), 2);
    }

    #[test]
    fn test_read_tasks_multiple() {
        let file = write_file(
            "name=\"Task 1\",duration=1:0:0,complexity=3<--->name=\"Task 2\",duration=0:45:0,complexity=1",
        );
        let tasks = read_tasks(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name(), "Task 1");
        assert_eq!(tasks[1].name(), "Task 2");
        assert_eq!(tasks[1].duration(), Some(SignedDuration::from_mins(45)));
    }

    #[test]
    fn test_read_tasks_empty_file() {
        let file = write_file("");
        assert!(read_tasks(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_task_empty_file() {
        let file = write_file("");
        let err = read_task(file.path()).unwrap_err();
        assert!(err.to_string().contains("empty file given"));
    }

    #[test]
    fn test_read_tasks_with_all_fields() {
        let file = write_file(
            "name=\"Full Task\",duration=2:30:0,complexity=5,\
             description=\"Important task\",deadline=2025.6.1.18.0.0,\
             min_start_time=2025.5.31.9.0.0,\
             duration_inaccuracy=0:15:0,priority=4",
        );
        let task = read_task(file.path()).unwrap();
        assert_eq!(task.name(), "Full Task");
        assert_eq!(
            task.duration(),
            Some(SignedDuration::from_hours(2) + SignedDuration::from_mins(30))
        );
        assert_eq!(task.complexity().get(), 5);
        assert_eq!(task.priority().get(), 4);
        assert_eq!(task.description(), "Important task");
        assert_eq!(task.deadline(), Some(date(2025, 6, 1).at(18, 0, 0, 0)));
        assert_eq!(task.min_start_time(), Some(date(2025, 5, 31).at(9, 0, 0, 0)));
        assert_eq!(task.duration_inaccuracy(), SignedDuration::from_mins(15));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let err = read_tasks(dir.path().join("missing.tashes")).unwrap_err();
        assert!(matches!(err, PlannerError::FileSystem { .. }));
    }
}
