use crate::error::ApplicationError;

const CONTINUATION_MARKER: char = '\\';

/// Joins physical lines continued with trailing backslashes into logical lines.
///
/// Blank logical lines are skipped. Input ending inside a continuation is an
/// error.
pub fn join_lines(source: &str) -> Result<Vec<String>, ApplicationError> {
    let mut lines = vec![];
    let mut line = None::<String>;

    for physical_line in source.lines() {
        let current = line.get_or_insert_with(String::new);

        if let Some(part) = physical_line.strip_suffix(CONTINUATION_MARKER) {
            current.push_str(part);
        } else {
            current.push_str(physical_line);

            if let Some(line) = line.take().filter(|line| !line.trim().is_empty()) {
                lines.push(line);
            }
        }
    }

    if let Some(line) = line {
        return Err(ApplicationError::UnterminatedLine(line.trim().into()));
    }

    Ok(lines)
}
