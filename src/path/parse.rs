use crate::error::{ChartError, ChartResult};
use crate::path::model::Segment;

/// Tokenizes a path description into commands and their parameters.
///
/// Closing markers (`Z`/`z`) are dropped. Inputs outside the command grammar
/// produce a `PathParse` error; well-formed descriptions round-trip through
/// `Path::stringify` up to the configured rounding.
pub(crate) fn parse_elements(description: &str) -> ChartResult<Vec<(Segment, bool)>> {
    let mut parser = Parser {
        bytes: description.as_bytes(),
        cursor: 0,
    };
    let mut elements = Vec::new();

    loop {
        parser.skip_separators();
        let Some(letter) = parser.advance() else {
            break;
        };
        let relative = letter.is_ascii_lowercase();
        match letter.to_ascii_uppercase() {
            b'M' => {
                let [x, y] = parser.numbers::<2>()?;
                elements.push((Segment::Move { x, y }, relative));
            }
            b'L' => {
                let [x, y] = parser.numbers::<2>()?;
                elements.push((Segment::Line { x, y }, relative));
            }
            b'C' => {
                let [x1, y1, x2, y2, x, y] = parser.numbers::<6>()?;
                elements.push((
                    Segment::Curve {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    },
                    relative,
                ));
            }
            b'A' => {
                let [rx, ry, rotation, large_arc, sweep, x, y] = parser.numbers::<7>()?;
                elements.push((
                    Segment::Arc {
                        rx,
                        ry,
                        rotation,
                        large_arc: large_arc != 0.0,
                        sweep: sweep != 0.0,
                        x,
                        y,
                    },
                    relative,
                ));
            }
            b'Z' => {}
            other => {
                return Err(ChartError::PathParse {
                    position: parser.cursor.saturating_sub(1),
                    message: format!("unknown path command `{}`", other as char),
                });
            }
        }
    }

    Ok(elements)
}

struct Parser<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.cursor += 1;
        Some(byte)
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r' | b',')) {
            self.cursor += 1;
        }
    }

    fn numbers<const N: usize>(&mut self) -> ChartResult<[f64; N]> {
        let mut values = [0.0; N];
        for value in &mut values {
            *value = self.number()?;
        }
        Ok(values)
    }

    fn number(&mut self) -> ChartResult<f64> {
        self.skip_separators();
        let start = self.cursor;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.cursor += 1;
        }
        while matches!(self.peek(), Some(b'0'..=b'9' | b'.')) {
            self.cursor += 1;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.cursor += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.cursor += 1;
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.cursor += 1;
            }
        }

        let text = std::str::from_utf8(&self.bytes[start..self.cursor]).map_err(|_| {
            ChartError::PathParse {
                position: start,
                message: "non-ascii bytes inside number".to_owned(),
            }
        })?;
        text.parse::<f64>().map_err(|_| ChartError::PathParse {
            position: start,
            message: if text.is_empty() {
                "expected a number".to_owned()
            } else {
                format!("`{text}` is not a number")
            },
        })
    }
}
