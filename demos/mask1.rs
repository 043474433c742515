//!
//! Drive a masked input from stdin.
//!
//! Every line is a command:
//!
//! * `mask <mask>`: set a new mask
//! * `locale <name>`: localized separators, e.g. `de_DE`
//! * `type <chars>`: type the chars one by one
//! * `back`, `del`: remove before/at the cursor
//! * `go <pos>`: move the cursor
//! * `text <display>`: set the complete text
//! * `raw <value>`: set the raw value
//! * `clear`
//! * `quit`
//!

use anyhow::{Error, anyhow};
use rat_mask::core::{MaskedCore, RawValue};
use rat_mask::{Locale, SeparatorTable};
use std::fs;
use std::io::{BufRead, Write, stdin, stdout};

fn main() -> Result<(), Error> {
    setup_logging()?;

    let mut m = MaskedCore::new().with_mask("00/00/0000");
    show(&m)?;

    for line in stdin().lock().lines() {
        let line = line?;
        let (cmd, arg) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match cmd {
            "mask" => m.set_mask(arg),
            "locale" => {
                let loc = Locale::try_from(arg).map_err(|_| anyhow!("unknown locale {:?}", arg))?;
                m.set_separators(SeparatorTable::from_locale(loc));
            }
            "type" => {
                for c in arg.chars() {
                    if !m.advance_cursor(c) {
                        log::debug!("no slot for {:?}", c);
                    }
                    if !m.insert_char(c) {
                        println!("rejected {:?} at {}", c, m.cursor());
                    }
                }
            }
            "back" => _ = m.remove_prev(),
            "del" => _ = m.remove_next(),
            "go" => _ = m.set_cursor(arg.parse()?),
            "text" => {
                if !m.set_text(arg)? {
                    println!("rejected some input");
                }
            }
            "raw" => {
                if !m.set_raw_value(arg) {
                    println!("rejected some input");
                }
            }
            "clear" => m.clear(),
            "quit" => break,
            "" => {}
            _ => println!("unknown command {:?}", cmd),
        }
        show(&m)?;
    }

    Ok(())
}

fn show(m: &MaskedCore) -> Result<(), Error> {
    let mut out = stdout().lock();
    writeln!(out, "mask   {:?}", m.mask())?;
    writeln!(out, "tokens {:?}", m.tokens())?;
    writeln!(out, "text   {}", m.text())?;
    writeln!(out, "cursor {}{}", " ".repeat(m.cursor() as usize), "^")?;
    writeln!(
        out,
        "raw    {:?} / {:?}",
        m.raw_value(),
        m.raw_value_with(RawValue::Prompt)
    )?;
    writeln!(out, "full   {} range {:?}", m.mask_full(), m.mask_range())?;
    out.flush()?;
    Ok(())
}

fn setup_logging() -> Result<(), Error> {
    let log_file = "mask1.log";
    _ = fs::remove_file(log_file);
    fern::Dispatch::new()
        .format(|out, message, _record| {
            out.finish(format_args!("{}", message)) //
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}
