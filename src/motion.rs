use crate::error::MotionError;
use crate::parser::nom_parse_to_owned;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(dx, dy)`, with `y` growing upwards.
    pub const fn delta(self) -> (i64, i64) {
        use Direction::*;

        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(c: char) -> Result<Direction, char> {
        use Direction::*;

        match c {
            'U' => Ok(Up),
            'D' => Ok(Down),
            'L' => Ok(Left),
            'R' => Ok(Right),
            c => Err(c),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Motion {
    pub direction: Direction,
    pub count: u64,
}

impl Motion {
    /// The unit moves this motion stands for, in order.
    pub fn steps(self) -> impl Iterator<Item = Direction> {
        std::iter::repeat(self.direction).take(self.count as usize)
    }
}

/// Parses one motion per line, keeping input order.
///
/// The first bad line fails the whole input.
pub fn parse_motions(input: &str) -> Result<Vec<Motion>, MotionError> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(line: usize, content: &str) -> Result<Motion, MotionError> {
    let (letter, count) =
        nom_parse_to_owned(parser::raw_motion, content.trim_end()).map_err(|e| {
            MotionError::ParseError {
                line,
                content: content.to_owned(),
                kind: e.code,
            }
        })?;

    let direction =
        Direction::try_from(letter).map_err(|direction| MotionError::InvalidDirection {
            line,
            direction,
            content: content.to_owned(),
        })?;

    Ok(Motion { direction, count })
}

mod parser {
    use crate::parser::base10_numeric;

    use nom::character::complete::{anychar, space1};
    use nom::combinator::{all_consuming, verify};
    use nom::sequence::separated_pair;
    use nom::{IResult, Parser};

    fn count(input: &str) -> IResult<&str, u64> {
        verify(base10_numeric::<u64>, |n: &u64| *n > 0).parse(input)
    }

    // The letter is taken as-is here so an unknown direction can be told apart from a line
    // that has the wrong shape altogether.
    pub(super) fn raw_motion(input: &str) -> IResult<&str, (char, u64)> {
        all_consuming(separated_pair(anychar, space1, count)).parse(input)
    }

}
