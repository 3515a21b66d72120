use std::num::NonZeroU32;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use clock_lib::color::{parse_hex, sRGB};

pub const HELP: &str = "\
commands:
  toggle, t, <enter>   start or stop the clock
  size <px>            set the clock size in pixels
  fg <hex>             set the foreground color
  bg <hex>             set the background color
  status               show the current state
  help                 show this message
  quit, q              stop the clock and exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle,
    Size(NonZeroU32),
    Foreground(sRGB),
    Background(sRGB),
    Status,
    Help,
    Quit,
}

fn argument<'a>(name: &str, words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<&'a str> {
    let arg = words
        .next()
        .ok_or_else(|| anyhow!("`{name}` needs an argument"))?;
    if words.next().is_some() {
        bail!("`{name}` takes one argument");
    }
    Ok(arg)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Toggle);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "toggle" | "t" => Command::Toggle,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            "size" => {
                let arg = argument(name, &mut words)?;
                Command::Size(arg.parse().with_context(|| format!("invalid size `{arg}`"))?)
            }
            "fg" => Command::Foreground(parse_hex(argument(name, &mut words)?)?),
            "bg" => Command::Background(parse_hex(argument(name, &mut words)?)?),
            other => bail!("unknown command `{other}`, try `help`"),
        };

        if words.next().is_some() {
            bail!("`{name}` takes no arguments");
        }
        Ok(command)
    }
}
