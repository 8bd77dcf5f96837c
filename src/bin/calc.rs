//! Calc: The four-function calculator on the command line
use anyhow::Context;
use calcbrain::prelude::*;
use clap::Parser;
use log::{debug, trace};
use std::io::BufRead;

#[derive(Parser, Debug)]
#[clap(name = "calc")]
#[clap(author, version, about = "Calc: The four-function calculator on the command line", long_about = None)]
struct Cli {
    /// Bind a variable before evaluation, e.g. `--let x=3`. May be repeated
    #[clap(long = "let", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// Rebuild the state from this program (in JSON form) before pressing any keys
    #[clap(long, value_name = "JSON")]
    replay: Option<String>,

    /// Print the program, in JSON form, when done
    #[clap(long)]
    program: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The keys to press, e.g. `calc 3 + 4 "*" 2 =`. If none are given,
    /// keys are read from stdin, one line at a time.
    keys: Vec<String>,
}

// ASCII stand-ins for the keys that are hard to type on a terminal
#[rustfmt::skip]
const ALIASES: [(&str, &str); 9] = [
    ("-",     "−"),
    ("*",     "×"),
    ("/",     "÷"),
    ("sqrt",  "√"),
    ("pi",    "π"),
    ("neg",   "±"),
    ("sq",    "x²"),
    ("inv",   "x⁻¹"),
    (">M",    "→M"),
];

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();

    trace!("This is calc");
    debug!("{:#?}", options);

    let brain = Brain::with_variables(options.bindings.iter().cloned().collect());
    let mut keypad = Keypad::with_brain(brain);

    if let Some(json) = &options.replay {
        let program = Program::from_json(json).context("Malformed program given to --replay")?;
        keypad.load(&program);
    }

    if options.keys.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("Cannot read from stdin")?;
            for key in line.split_whitespace() {
                press(&mut keypad, key)?;
            }
            report(&keypad);
        }
    } else {
        for key in &options.keys {
            press(&mut keypad, key)?;
        }
        report(&keypad);
    }

    if options.program {
        println!("{}", keypad.brain().program().to_json()?);
    }
    Ok(())
}

fn report(keypad: &Keypad) {
    println!("{}    {}", keypad.display(), keypad.description_line());
}

fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(format!("expected NAME=VALUE, found {arg:?}"));
    };
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad value for {name}: {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn unalias(key: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, symbol)| *symbol)
}

/// Press one key - or a run of digit keys
fn press(keypad: &mut Keypad, key: &str) -> Result<(), calcbrain::Error> {
    let key = unalias(key);
    match key {
        "C" => keypad.clear(),
        "save" => keypad.save(),
        "restore" => keypad.restore(),
        "→M" => keypad.store_memory()?,
        _ if key.chars().all(|c| c.is_ascii_digit() || c == '.') => {
            for digit in key.chars() {
                keypad.touch_digit(digit)?;
            }
        }
        _ if keypad.brain().is_operation(key) => keypad.perform(key)?,
        _ => keypad.recall(key),
    }
    Ok(())
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(keypad: &mut Keypad, keys: &str) -> Result<(), calcbrain::Error> {
        for key in keys.split_whitespace() {
            press(keypad, key)?;
        }
        Ok(())
    }

    #[test]
    fn keys() -> Result<(), calcbrain::Error> {
        let mut keypad = Keypad::new();
        press_all(&mut keypad, "3 + 4 * 2 =")?;
        assert_eq!(keypad.display(), "14.0");
        assert_eq!(keypad.description_line(), "3.0 + 4.0 × 2.0 =");

        press_all(&mut keypad, "C 2 neg sq - 1.5 =")?;
        assert_eq!(keypad.display(), "2.5");
        assert_eq!(keypad.description_line(), "(-(2.0))² - 1.5 =");

        press_all(&mut keypad, "save C pi / 2 = restore")?;
        assert_eq!(keypad.display(), "2.5");
        Ok(())
    }

    #[test]
    fn memory_key() -> Result<(), calcbrain::Error> {
        let mut keypad = Keypad::new();
        press_all(&mut keypad, "M + 1 = 41 >M")?;
        assert_eq!(keypad.display(), "42.0");
        press_all(&mut keypad, "C M")?;
        assert_eq!(keypad.display(), "0.0");
        Ok(())
    }

    #[test]
    fn bindings() {
        assert_eq!(parse_binding("x=3"), Ok(("x".to_string(), 3.)));
        assert_eq!(parse_binding(" r = -0.5"), Ok(("r".to_string(), -0.5)));
        assert!(parse_binding("x").is_err());
        assert!(parse_binding("x=three").is_err());
    }

    #[test]
    fn aliases() {
        assert_eq!(unalias("*"), "×");
        assert_eq!(unalias("×"), "×");
        assert_eq!(unalias("foo"), "foo");
        for (_, symbol) in ALIASES {
            assert!(calcbrain::symbols().contains(&symbol) || symbol == "→M");
        }
    }
}
