mod error;
mod parser;

pub use self::error::ParseError;
use crate::rule::Rule;

pub fn parse_rule(line: &str) -> Result<Rule<'_>, ParseError> {
    parser::rule(line)
        .map(|(_, rule)| rule)
        .map_err(|_| ParseError::new(format!("invalid dependency rule \"{}\"", line.trim())))
}
