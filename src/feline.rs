use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Attribute set shared by every feline variant: a body-size proxy and a
/// threat score. Construction is deliberately unvalidated; a size of 0 makes
/// `cuteness` return `f32::INFINITY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feline {
    pub size: u32,
    pub danger: f32,
}

impl Feline {
    pub fn new(size: u32, danger: f32) -> Feline {
        Feline { size, danger }
    }

    /// Dangerous means strictly above the threshold: a danger of exactly 5.0
    /// is not dangerous.
    pub fn is_dangerous(&self) -> bool {
        self.danger > 5.0
    }

    /// `100 / size - danger`, with the integer size widened to f32 before
    /// division so the quotient is never truncated.
    pub fn cuteness(&self) -> f32 {
        100.0 / self.size as f32 - self.danger
    }
}

/// Common contract over the feline variants. Only `noise` differs per variant;
/// danger classification and cuteness scoring are implemented once against the
/// shared `Feline` value.
pub trait Animal {
    fn feline(&self) -> &Feline;

    fn noise(&self) -> &'static str;

    fn make_noise(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.noise())
    }

    fn is_dangerous(&self) -> bool {
        self.feline().is_dangerous()
    }

    fn cuteness(&self) -> f32 {
        self.feline().cuteness()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lion {
    pub feline: Feline,
}

impl Lion {
    pub fn new(feline: Feline) -> Lion {
        Lion { feline }
    }
}

impl Animal for Lion {
    fn feline(&self) -> &Feline {
        &self.feline
    }

    fn noise(&self) -> &'static str {
        "Raaawrr"
    }
}

impl Display for Lion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lion(size: {}, danger: {})", self.feline.size, self.feline.danger)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cat {
    pub feline: Feline,
}

impl Cat {
    pub fn new(feline: Feline) -> Cat {
        Cat { feline }
    }
}

impl Animal for Cat {
    fn feline(&self) -> &Feline {
        &self.feline
    }

    fn noise(&self) -> &'static str {
        "Miau"
    }
}

impl Display for Cat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cat(size: {}, danger: {})", self.feline.size, self.feline.danger)
    }
}
