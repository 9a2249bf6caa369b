//! Reads instances in plain text format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/reader_test.rs"]
mod reader_test;

use expo_core::models::{Attraction, Problem};
use std::io::{BufRead, BufReader, Read};

/// A trait to read an instance in plain text format.
pub trait InstanceProblem {
    /// Reads instance and creates a problem from it.
    fn read_instance(self) -> Result<Problem, String>;
}

impl<R: Read> InstanceProblem for BufReader<R> {
    fn read_instance(self) -> Result<Problem, String> {
        read_instance_format(self)
    }
}

impl InstanceProblem for String {
    fn read_instance(self) -> Result<Problem, String> {
        read_instance_format(BufReader::new(self.as_bytes()))
    }
}

fn read_instance_format<R: Read>(reader: BufReader<R>) -> Result<Problem, String> {
    InstanceReader { buffer: String::new(), reader, line: 0 }.read_problem()
}

struct InstanceReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line: usize,
}

impl<R: Read> InstanceReader<R> {
    fn read_problem(&mut self) -> Result<Problem, String> {
        let spaces = self.read_header("amount of spaces")?;
        let capacity = self.read_header("space capacity")?;
        let themes = self.read_header("amount of themes")?;
        let expected = self.read_header("amount of attractions")?;

        let attractions = self.read_attractions()?;
        if attractions.len() != expected {
            return Err(format!("expected {expected} attractions, got {}", attractions.len()));
        }

        Problem::new(spaces, capacity, themes, attractions).map_err(|err| err.to_string())
    }

    fn read_header(&mut self, name: &str) -> Result<usize, String> {
        if self.read_line()? == 0 {
            return Err(format!("line {}: unexpected end of file, expecting {name}", self.line));
        }

        let value = self.buffer.trim();
        value.parse::<usize>().map_err(|err| format!("line {}: cannot parse {name} from '{value}': {err}", self.line))
    }

    fn read_attractions(&mut self) -> Result<Vec<Attraction>, String> {
        let mut attractions = Vec::new();

        while self.read_line()? > 0 {
            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            let values = line.split_whitespace().map(|value| value.parse::<usize>()).collect::<Result<Vec<_>, _>>();

            match values.as_deref() {
                Ok(&[theme, size]) if theme > 0 && size > 0 => attractions.push(Attraction { theme, size }),
                Ok(&[_, _]) => return Err(format!("line {}: theme and size should be positive: '{line}'", self.line)),
                _ => return Err(format!("line {}: expecting two integers 'theme size', got: '{line}'", self.line)),
            }
        }

        Ok(attractions)
    }

    fn read_line(&mut self) -> Result<usize, String> {
        self.buffer.clear();
        self.line += 1;

        self.reader.read_line(&mut self.buffer).map_err(|err| format!("line {}: {err}", self.line))
    }
}
