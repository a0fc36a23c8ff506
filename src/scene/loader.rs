//! Load a scene from a line-oriented text stream
//!
//! The stream is framed by `begin scene` / `end scene`; every line in between
//! describes one building, house or antenna. [`SceneLoader`] is the state
//! machine behind [`load_from_reader`] and can also be fed line by line.

use std::io::BufRead;
use thiserror::Error;

use crate::core::types::{EntityKind, Identifier};
use crate::scene::decode::decode_line;
use crate::scene::lexer::ParsedLine;
use crate::scene::store::Scene;

/// Exact first line of a scene stream
pub const BEGIN_SCENE: &str = "begin scene";
/// Exact last line of a scene stream
pub const END_SCENE: &str = "end scene";

/// Errors that can occur when loading a scene
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("first line must be exactly 'begin scene'")]
    MalformedFirstLine,

    /// Input ended before `end scene` was read
    #[error("last line must be exactly 'end scene'")]
    UnterminatedStream,

    #[error("line has no token (line #{0})")]
    EmptyLine(usize),

    #[error("unrecognized line (line #{0})")]
    UnrecognizedLine(usize),

    #[error("{kind} line has wrong number of arguments (line #{line})")]
    WrongArgumentCount { kind: EntityKind, line: usize },

    #[error("invalid identifier \"{token}\" (line #{line})")]
    InvalidIdentifier { token: String, line: usize },

    #[error("invalid integer \"{token}\" (line #{line})")]
    InvalidInteger { token: String, line: usize },

    #[error("invalid positive integer \"{token}\" (line #{line})")]
    InvalidPositiveInteger { token: String, line: usize },

    #[error("{kind} identifier {id} is non unique")]
    DuplicateIdentifier { kind: EntityKind, id: Identifier },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoadError {
    /// Line the error was found on, when it is tied to one
    pub fn line_number(&self) -> Option<usize> {
        match self {
            LoadError::EmptyLine(line) | LoadError::UnrecognizedLine(line) => Some(*line),
            LoadError::WrongArgumentCount { line, .. }
            | LoadError::InvalidIdentifier { line, .. }
            | LoadError::InvalidInteger { line, .. }
            | LoadError::InvalidPositiveInteger { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Position of the loader in the stream framing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Waiting for `begin scene`
    ExpectBegin,
    /// Between the sentinels, decoding entity lines
    Reading,
    /// `end scene` was consumed; nothing more is read
    Done,
}

/// Incremental scene loader
#[derive(Debug)]
pub struct SceneLoader {
    state: LoaderState,
    line_number: usize,
    scene: Scene,
}

impl Default for SceneLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLoader {
    pub fn new() -> Self {
        Self {
            state: LoaderState::ExpectBegin,
            line_number: 0,
            scene: Scene::new(),
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    /// Number of the last line fed, 0 before the first one
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Process one physical line, already stripped of its line terminator
    ///
    /// Lines fed after `end scene` are ignored and not counted.
    pub fn feed_line(&mut self, line: &str) -> Result<LoaderState, LoadError> {
        if self.state == LoaderState::Done {
            return Ok(self.state);
        }
        self.line_number += 1;
        match self.state {
            LoaderState::ExpectBegin => {
                if line != BEGIN_SCENE {
                    return Err(LoadError::MalformedFirstLine);
                }
                self.transition(LoaderState::Reading);
            }
            LoaderState::Reading if line == END_SCENE => {
                self.transition(LoaderState::Done);
            }
            LoaderState::Reading => {
                let parsed = ParsedLine::parse(line, self.line_number)
                    .ok_or(LoadError::EmptyLine(self.line_number))?;
                let entity = decode_line(&parsed)?;
                self.scene.insert(entity)?;
            }
            LoaderState::Done => {}
        }
        Ok(self.state)
    }

    fn transition(&mut self, next: LoaderState) {
        tracing::debug!(line = self.line_number, from = ?self.state, to = ?next, "loader state change");
        self.state = next;
    }

    /// Return the loaded scene, failing unless `end scene` was reached
    pub fn finish(self) -> Result<Scene, LoadError> {
        if self.state != LoaderState::Done {
            return Err(LoadError::UnterminatedStream);
        }
        let summary = self.scene.summary();
        tracing::info!(
            buildings = summary.buildings,
            houses = summary.houses,
            antennas = summary.antennas,
            "scene loaded"
        );
        Ok(self.scene)
    }
}

/// Strip one trailing `\n` or `\r\n`
fn trim_terminator(mut raw: &[u8]) -> &[u8] {
    if let Some(rest) = raw.strip_suffix(b"\n") {
        raw = rest;
        if let Some(rest) = raw.strip_suffix(b"\r") {
            raw = rest;
        }
    }
    raw
}

/// Load a scene from a buffered reader, stopping right after `end scene`
///
/// Lines are read as raw bytes. Invalid UTF-8 is replaced with U+FFFD, so a
/// bad byte fails the check of the token that holds it, on its own line.
pub fn load_from_reader<R: BufRead>(mut reader: R) -> Result<Scene, LoadError> {
    let mut loader = SceneLoader::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_terminator(&buf));
        if loader.feed_line(&line)? == LoaderState::Done {
            break;
        }
    }
    loader.finish()
}

/// Load a scene from in-memory text
pub fn load_from_str(text: &str) -> Result<Scene, LoadError> {
    load_from_reader(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_scene() {
        let scene = load_from_str("begin scene\nend scene\n").unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_load_entities() {
        let scene = load_from_str(
            "begin scene\n  building b2 10 10 1 1\nhouse h1 5 -5 2 2\nbuilding b1 0 0 2 2\nantenna a1 0 0 3\nend scene",
        )
        .unwrap();
        let summary = scene.summary();
        assert_eq!((summary.buildings, summary.houses, summary.antennas), (2, 1, 1));
        assert_eq!(scene.buildings()[0].id.as_str(), "b1");
    }

    #[test]
    fn test_first_line_must_be_begin() {
        let err = load_from_str("begin  scene\nend scene\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedFirstLine));
        let err = load_from_str("building b1 0 0 1 1\nend scene\n").unwrap_err();
        assert!(matches!(err, LoadError::MalformedFirstLine));
    }

    #[test]
    fn test_missing_end_is_unterminated() {
        let err = load_from_str("begin scene\nbuilding b1 0 0 1 1\n").unwrap_err();
        assert!(matches!(err, LoadError::UnterminatedStream));
        assert!(matches!(load_from_str("").unwrap_err(), LoadError::UnterminatedStream));
    }

    #[test]
    fn test_lines_after_end_are_ignored() {
        let scene = load_from_str("begin scene\nend scene\nthis is not parsed\n").unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_empty_body_line_is_error() {
        let err = load_from_str("begin scene\n\nend scene\n").unwrap_err();
        assert!(matches!(err, LoadError::EmptyLine(2)));
    }

    #[test]
    fn test_unrecognized_line_number() {
        let err = load_from_str("begin scene\nbuilding b1 0 0 1 1\ntower t 0 0 1\nend scene\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::UnrecognizedLine(3)));
        assert_eq!(err.line_number(), Some(3));
    }

    #[test]
    fn test_padded_end_is_not_a_sentinel() {
        let err = load_from_str("begin scene\n end scene\n").unwrap_err();
        assert!(matches!(err, LoadError::UnrecognizedLine(2)));
    }

    #[test]
    fn test_invalid_positive_integer_reported() {
        let err = load_from_str("begin scene\nbuilding bx 0 0 -1 1\nend scene\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid positive integer \"-1\" (line #2)");
    }

    #[test]
    fn test_duplicate_identifier_message() {
        let err = load_from_str("begin scene\nbuilding b1 0 0 1 1\nbuilding b1 0 0 1 1\nend scene\n")
            .unwrap_err();
        assert_eq!(err.to_string(), "building identifier b1 is non unique");
    }

    #[test]
    fn test_feed_line_states() {
        let mut loader = SceneLoader::new();
        assert_eq!(loader.state(), LoaderState::ExpectBegin);
        assert_eq!(loader.feed_line(BEGIN_SCENE).unwrap(), LoaderState::Reading);
        assert_eq!(loader.feed_line("antenna a 0 0 1").unwrap(), LoaderState::Reading);
        assert_eq!(loader.feed_line(END_SCENE).unwrap(), LoaderState::Done);
        assert_eq!(loader.feed_line("garbage").unwrap(), LoaderState::Done);
        assert_eq!(loader.line_number(), 3);
        assert_eq!(loader.finish().unwrap().antennas().len(), 1);
    }

    #[test]
    fn test_invalid_utf8_token_keeps_its_line() {
        let input: &[u8] = b"begin scene\nbuilding b\xff 0 0 1 1\nend scene\n";
        let err = load_from_reader(input).unwrap_err();
        assert!(matches!(err, LoadError::InvalidIdentifier { line: 2, .. }));
        assert_eq!(err.line_number(), Some(2));

        let input: &[u8] = b"begin scene\nantenna a 0 \xfe1 1\nend scene\n";
        assert!(matches!(
            load_from_reader(input).unwrap_err(),
            LoadError::InvalidInteger { line: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_utf8_first_line_is_malformed() {
        let input: &[u8] = b"begin sc\xe9ne\nend scene\n";
        assert!(matches!(
            load_from_reader(input).unwrap_err(),
            LoadError::MalformedFirstLine
        ));
    }

    #[test]
    fn test_crlf_lines_are_accepted() {
        let scene = load_from_str("begin scene\r\nantenna a 0 0 1\r\nend scene\r\n").unwrap();
        assert_eq!(scene.antennas().len(), 1);
    }
}
