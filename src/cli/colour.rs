use clap::Args;

use crate::error::Result;
use crate::parser::{parse_color, resolved_by};

/// Resolve colour tokens and print them
#[derive(Args, Debug)]
pub struct ColourArgs {
    /// Colour tokens (name, hex, rgb()/hsl() notation, or R,G,B)
    #[arg(required = true)]
    pub colours: Vec<String>,
}

pub fn run(args: ColourArgs) -> Result<()> {
    for text in &args.colours {
        println!("{}", describe(text)?);
    }
    Ok(())
}

/// One line per token: `<hex> <r>,<g>,<b> (<resolver>)`.
pub fn describe(text: &str) -> Result<String> {
    let colour = parse_color(text)?;
    let via = resolved_by(text).unwrap_or("unknown");
    Ok(format!("{} {},{},{} ({})", colour, colour.r, colour.g, colour.b, via))
}
