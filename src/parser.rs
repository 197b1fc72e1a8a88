use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::data::{Dir, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    Number(String),
    Pos(String),
    Dir(String),
    Wall(String),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Number(ref s) => write!(f, "Invalid number: '{}'", s),
            ParserErr::Pos(ref s) => write!(f, "Invalid position '{}' - expected X,Y", s),
            ParserErr::Dir(ref s) => write!(
                f,
                "Invalid direction '{}' - expected north, east, south or west",
                s
            ),
            ParserErr::Wall(ref s) => write!(f, "Invalid wall '{}' - expected X,Y,DIR", s),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Dir {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Dir::North),
            "e" | "east" => Ok(Dir::East),
            "s" | "south" => Ok(Dir::South),
            "w" | "west" => Ok(Dir::West),
            _ => Err(ParserErr::Dir(s.to_string())),
        }
    }
}

impl FromStr for Pos {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(ParserErr::Pos(s.to_string()));
        }
        Ok(Pos::new(parse_coord(parts[0])?, parse_coord(parts[1])?))
    }
}

/// `X,Y,DIR` - a wall stopping robots leaving the cell toward `DIR`.
pub fn parse_wall(s: &str) -> Result<(Pos, Dir), ParserErr> {
    let parts: Vec<_> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(ParserErr::Wall(s.to_string()));
    }
    let pos = Pos::new(parse_coord(parts[0])?, parse_coord(parts[1])?);
    let dir = parts[2].parse()?;
    Ok((pos, dir))
}

pub fn parse_number<T: FromStr>(s: &str) -> Result<T, ParserErr> {
    s.trim()
        .parse()
        .map_err(|_| ParserErr::Number(s.to_string()))
}

fn parse_coord(s: &str) -> Result<u8, ParserErr> {
    parse_number(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_positions() {
        assert_eq!("3,4".parse(), Ok(Pos::new(3, 4)));
        assert_eq!(" 0, 15".parse(), Ok(Pos::new(0, 15)));
        assert_eq!("3".parse::<Pos>(), Err(ParserErr::Pos("3".to_string())));
        assert_eq!("1,2,3".parse::<Pos>(), Err(ParserErr::Pos("1,2,3".to_string())));
        assert_eq!("-1,2".parse::<Pos>(), Err(ParserErr::Number("-1".to_string())));
        assert_eq!("1,256".parse::<Pos>(), Err(ParserErr::Number("256".to_string())));
    }

    #[test]
    fn parsing_directions() {
        assert_eq!("north".parse(), Ok(Dir::North));
        assert_eq!("E".parse(), Ok(Dir::East));
        assert_eq!("South".parse(), Ok(Dir::South));
        assert_eq!("w".parse(), Ok(Dir::West));
        assert_eq!("up".parse::<Dir>(), Err(ParserErr::Dir("up".to_string())));
        for dir in &["north", "east", "south", "west"] {
            assert_eq!(dir.parse::<Dir>().unwrap().to_string(), *dir);
        }
    }

    #[test]
    fn parsing_walls() {
        assert_eq!(parse_wall("4,3,south"), Ok((Pos::new(4, 3), Dir::South)));
        assert_eq!(parse_wall("4,3"), Err(ParserErr::Wall("4,3".to_string())));
        assert_eq!(parse_wall("4,3,x"), Err(ParserErr::Dir("x".to_string())));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParserErr::Wall("1".to_string()).to_string(),
            "Invalid wall '1' - expected X,Y,DIR"
        );
        assert_eq!(
            ParserErr::Number("a".to_string()).to_string(),
            "Invalid number: 'a'"
        );
    }
}
