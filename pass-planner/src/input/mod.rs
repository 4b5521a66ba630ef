//! Line-oriented loaders for the planner's two input files.
//!
//! Both formats are whitespace-delimited text. Blank lines and lines
//! starting with `#` are ignored.

mod calendar;
mod error;
mod tickets;

pub use calendar::{load_travel_days, parse_travel_days};
pub use error::InputError;
pub use tickets::{load_ticket_catalog, parse_ticket_catalog};

/// Non-blank, non-comment lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(idx, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some((idx + 1, line.split_whitespace().collect()))
        }
    })
}

fn read_file(path: &std::path::Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
