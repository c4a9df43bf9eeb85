//! Loading a polymer from a file or stdin

use std::{
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read},
    path::PathBuf,
};

use nom_supreme::{error::ErrorTree, final_parser::Location};
use thiserror::Error;

use crate::polymer::Polymer;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{origin} is unavailable")]
    ResourceUnavailable {
        origin: String,

        #[source]
        error: io::Error,
    },

    #[error("{origin} is not a polymer")]
    Malformed {
        origin: String,

        #[source]
        error: ErrorTree<Location>,
    },
}

/// Where the polymer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "input file '{}'", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}

impl Source {
    pub fn read(&self) -> Result<String, InputError> {
        let mut input = String::new();

        let result = match self {
            Source::File(path) => {
                fs::File::open(path).and_then(|mut file| file.read_to_string(&mut input))
            }
            Source::Stdin => io::stdin().read_to_string(&mut input),
        };

        result
            .map(|_| input)
            .map_err(|error| InputError::ResourceUnavailable {
                origin: self.to_string(),
                error,
            })
    }

    pub fn load(&self, mode: Mode) -> Result<Polymer, InputError> {
        let input = self.read()?;
        mode.parse(&input).map_err(|error| InputError::Malformed {
            origin: self.to_string(),
            error,
        })
    }
}

/// How to treat characters that aren't letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Drop them
    Lenient,

    /// Only allow trailing whitespace
    Strict,
}

impl Mode {
    pub fn parse(self, input: &str) -> Result<Polymer, ErrorTree<Location>> {
        match self {
            Mode::Lenient => Ok(Polymer::from_letters(input)),
            Mode::Strict => Polymer::parse_strict(input),
        }
    }
}
