use std::io::{self, Write};

use crate::feline::{Animal, Cat, Feline, Lion};

mod feline;

fn run(out: &mut impl Write) -> io::Result<()> {
    let l1 = Lion::new(Feline::new(30, 10.0));
    let c1 = Cat::new(Feline::new(10, 2.0));

    writeln!(out, "cuteness Lion: {}", l1.cuteness())?;
    writeln!(out, "Cuteness Cat: {}", c1.cuteness())?;
    l1.make_noise(out)?;
    c1.make_noise(out)?;
    writeln!(out, "Is the Lion dangerous? -> {}", l1.is_dangerous())?;
    writeln!(out, "Is the Cat dangerous? -> {}", c1.is_dangerous())?;

    Ok(())
}

fn main() -> io::Result<()> {
    run(&mut io::stdout().lock())
}
