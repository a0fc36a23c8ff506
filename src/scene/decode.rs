//! Entity decoders: turn a tokenized line into a typed entity
//!
//! Each decoder is selected by the line's first token. Fields are checked
//! left to right and the first bad one is reported.

use crate::core::types::{EntityKind, Identifier, Point};
use crate::scene::entity::{Antenna, Entity, Structure, StructureKind};
use crate::scene::lexer::ParsedLine;
use crate::scene::loader::LoadError;

/// Order in which decoders are tried on a line
pub const DECODE_ORDER: [EntityKind; 3] =
    [EntityKind::Building, EntityKind::House, EntityKind::Antenna];

/// Whether `s` fully matches `0|-?[1-9][0-9]*`
pub fn is_valid_integer(s: &str) -> bool {
    if s == "0" {
        return true;
    }
    is_valid_positive_integer(s.strip_prefix('-').unwrap_or(s))
}

/// Whether `s` fully matches `[1-9][0-9]*`
pub fn is_valid_positive_integer(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'1'..=b'9') => bytes[1..].iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn identifier(token: &str, line_number: usize) -> Result<Identifier, LoadError> {
    Identifier::new(token).ok_or_else(|| LoadError::InvalidIdentifier {
        token: token.to_string(),
        line: line_number,
    })
}

fn integer(token: &str, line_number: usize) -> Result<i64, LoadError> {
    let err = || LoadError::InvalidInteger {
        token: token.to_string(),
        line: line_number,
    };
    if !is_valid_integer(token) {
        return Err(err());
    }
    token.parse::<i32>().map(i64::from).map_err(|_| err())
}

fn positive_integer(token: &str, line_number: usize) -> Result<i64, LoadError> {
    let err = || LoadError::InvalidPositiveInteger {
        token: token.to_string(),
        line: line_number,
    };
    if !is_valid_positive_integer(token) {
        return Err(err());
    }
    token.parse::<i32>().map(i64::from).map_err(|_| err())
}

/// Decode `line` as an entity of `kind`
///
/// Returns `Ok(None)` when the keyword does not match, so the caller can try
/// the next decoder.
pub fn decode_as(kind: EntityKind, line: &ParsedLine<'_>) -> Result<Option<Entity>, LoadError> {
    if line.keyword() != kind.keyword() {
        return Ok(None);
    }
    let n = line.line_number();
    if line.token_count() != kind.token_count() {
        return Err(LoadError::WrongArgumentCount { kind, line: n });
    }
    let t = line.tokens();
    let id = identifier(t[1], n)?;
    let center = Point::new(integer(t[2], n)?, integer(t[3], n)?);

    let entity = match kind {
        EntityKind::Building | EntityKind::House => {
            let half_width = positive_integer(t[4], n)?;
            let half_height = positive_integer(t[5], n)?;
            let structure_kind = if kind == EntityKind::Building {
                StructureKind::Building
            } else {
                StructureKind::House
            };
            Entity::Structure(Structure::new(structure_kind, id, center, half_width, half_height))
        }
        EntityKind::Antenna => {
            let radius = positive_integer(t[4], n)?;
            Entity::Antenna(Antenna::new(id, center, radius))
        }
    };
    tracing::debug!(line = n, kind = %kind, id = %entity.id(), "decoded entity");
    Ok(Some(entity))
}

/// Decode a scene body line with the first decoder that recognizes it
pub fn decode_line(line: &ParsedLine<'_>) -> Result<Entity, LoadError> {
    for kind in DECODE_ORDER {
        if let Some(entity) = decode_as(kind, line)? {
            return Ok(entity);
        }
    }
    Err(LoadError::UnrecognizedLine(line.line_number()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Result<Entity, LoadError> {
        decode_line(&ParsedLine::parse(raw, 7).unwrap())
    }

    #[test]
    fn test_integer_syntax() {
        for s in ["0", "1", "-1", "42", "-907"] {
            assert!(is_valid_integer(s), "{s} should be an integer");
        }
        for s in ["", "-", "-0", "00", "01", "+1", "1a", "1.0"] {
            assert!(!is_valid_integer(s), "{s:?} should not be an integer");
        }
    }

    #[test]
    fn test_positive_integer_syntax() {
        assert!(is_valid_positive_integer("1"));
        assert!(is_valid_positive_integer("120"));
        for s in ["", "0", "-1", "05", "1x"] {
            assert!(!is_valid_positive_integer(s), "{s:?} should not be positive");
        }
    }

    #[test]
    fn test_decode_building() {
        let entity = decode("building b1 -3 4 2 5").unwrap();
        match entity {
            Entity::Structure(s) => {
                assert_eq!(s.kind, StructureKind::Building);
                assert_eq!(s.id.as_str(), "b1");
                assert_eq!(s.center, Point::new(-3, 4));
                assert_eq!((s.half_width, s.half_height), (2, 5));
            }
            other => panic!("Expected building, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_house_and_antenna() {
        assert_eq!(decode("house h 0 0 1 1").unwrap().kind(), EntityKind::House);
        match decode("antenna a1 1 2 3").unwrap() {
            Entity::Antenna(a) => {
                assert_eq!(a.position, Point::new(1, 2));
                assert_eq!(a.radius, 3);
            }
            other => panic!("Expected antenna, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_keyword() {
        assert!(matches!(decode("tower t 0 0 1"), Err(LoadError::UnrecognizedLine(7))));
        // Keywords are case-sensitive
        assert!(matches!(decode("Building b 0 0 1 1"), Err(LoadError::UnrecognizedLine(7))));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(matches!(
            decode("building b1 0 0 1"),
            Err(LoadError::WrongArgumentCount { kind: EntityKind::Building, line: 7 })
        ));
        assert!(matches!(
            decode("antenna a1 0 0 1 1"),
            Err(LoadError::WrongArgumentCount { kind: EntityKind::Antenna, line: 7 })
        ));
    }

    #[test]
    fn test_first_bad_field_is_reported() {
        match decode("building 1b x0 0 -1 1") {
            Err(LoadError::InvalidIdentifier { token, line }) => {
                assert_eq!(token, "1b");
                assert_eq!(line, 7);
            }
            other => panic!("Expected invalid identifier, got {:?}", other),
        }
        match decode("building b 0 -0 -1 1") {
            Err(LoadError::InvalidInteger { token, .. }) => assert_eq!(token, "-0"),
            other => panic!("Expected invalid integer, got {:?}", other),
        }
        match decode("house h 0 0 1 0") {
            Err(LoadError::InvalidPositiveInteger { token, .. }) => assert_eq!(token, "0"),
            other => panic!("Expected invalid positive integer, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_integer_rejected() {
        assert!(matches!(
            decode("antenna a 99999999999 0 1"),
            Err(LoadError::InvalidInteger { .. })
        ));
        assert!(matches!(
            decode("antenna a 0 0 99999999999"),
            Err(LoadError::InvalidPositiveInteger { .. })
        ));
    }
}
