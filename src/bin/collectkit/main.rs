//! CLI driver for the collectkit building blocks.
//!
//! Usage:
//!   collectkit collection [VALUES..] [--factor N] [--json]
//!   collectkit sum [VALUES..] [--kind int|float]
//!   collectkit tour

mod tour;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use collectkit::{sum_numbers, Collection};

#[derive(Parser, Debug)]
#[command(
    name = "collectkit",
    about = "Run the generic collection and constrained sum drivers",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a collection, display it, map it and print the result
    Collection {
        /// Values to append (defaults to 1 2 3 then 4 5 6)
        values: Vec<i64>,

        /// Multiplier applied by the map step
        #[arg(short, long, default_value_t = 2, env = "COLLECTKIT_FACTOR")]
        factor: i64,

        /// Print the collections as JSON instead of display lines
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Sum numbers with the Number-constrained reduction
    Sum {
        /// Values to sum
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Numeric kind the values are parsed as
        #[arg(short, long, value_enum, default_value_t = Kind::Int)]
        kind: Kind,
    },

    /// Run every example driver in turn
    Tour,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Int,
    Float,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Collection {
            values,
            factor,
            json,
        } => run_collection(&mut out, values, factor, json),
        Command::Sum { values, kind } => run_sum(&mut out, &values, kind),
        Command::Tour => tour::run(&mut out),
    }
}

fn run_collection(out: &mut impl Write, values: Vec<i64>, factor: i64, json: bool) -> Result<()> {
    let mut c = Collection::new();
    if values.is_empty() {
        c.append([1, 2, 3]);
        c.append([4, 5, 6]);
    } else {
        c.append(values);
    }
    log::debug!("built collection of {} values", c.len());

    let mapped = c
        .try_map(|val| val.checked_mul(factor).ok_or(*val))
        .map_err(|val| anyhow::anyhow!("{} * {} overflows i64", val, factor))?;

    if json {
        let doc = serde_json::json!({
            "values": c.to_json_value()?,
            "mapped": mapped.to_json_value()?,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }

    write!(out, "{}", c)?;
    writeln!(out, "map callback")?;
    write!(out, "{}", mapped)?;
    writeln!(out, "result:  {:?}", c.result())?;
    Ok(())
}

fn run_sum(out: &mut impl Write, values: &[String], kind: Kind) -> Result<()> {
    match kind {
        Kind::Int => {
            let parsed = values
                .iter()
                .map(|v| v.parse::<i64>().with_context(|| format!("Invalid integer: {}", v)))
                .collect::<Result<Vec<_>>>()?;
            writeln!(out, "{}", sum_numbers(&parsed))?;
        }
        Kind::Float => {
            let parsed = values
                .iter()
                .map(|v| v.parse::<f64>().with_context(|| format!("Invalid float: {}", v)))
                .collect::<Result<Vec<_>>>()?;
            writeln!(out, "{}", sum_numbers(&parsed))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of<F>(f: F) -> Result<String>
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_collection_default_values() {
        let out = output_of(|w| run_collection(w, Vec::new(), 2, false)).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "current value:  1");
        assert_eq!(lines[5], "current value:  6");
        assert_eq!(lines[6], "map callback");
        assert_eq!(lines[7], "current value:  2");
        assert_eq!(lines[12], "current value:  12");
        assert_eq!(lines[13], "result:  [1, 2, 3, 4, 5, 6]");
    }

    #[test]
    fn test_collection_given_values_and_factor() {
        let out = output_of(|w| run_collection(w, vec![-1, 10], 3, false)).unwrap();
        assert_eq!(
            out,
            "current value:  -1\ncurrent value:  10\nmap callback\n\
             current value:  -3\ncurrent value:  30\nresult:  [-1, 10]\n"
        );
    }

    #[test]
    fn test_collection_overflow_is_error() {
        let mut buf = Vec::new();
        let err = run_collection(&mut buf, vec![1, i64::MAX], 2, false).unwrap_err();

        assert_eq!(err.to_string(), format!("{} * 2 overflows i64", i64::MAX));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_collection_json_document() {
        let out = output_of(|w| run_collection(w, vec![1, 2], 5, true)).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            doc,
            serde_json::json!({
                "values": [1, 2],
                "mapped": [5, 10],
            })
        );
    }

    #[test]
    fn test_sum_int_and_float() {
        let values = vec!["1".to_string(), "2".to_string(), "-3".to_string(), "10".to_string()];
        let out = output_of(|w| run_sum(w, &values, Kind::Int)).unwrap();
        assert_eq!(out, "10\n");

        let values = vec!["1.5".to_string(), "2.25".to_string()];
        let out = output_of(|w| run_sum(w, &values, Kind::Float)).unwrap();
        assert_eq!(out, "3.75\n");

        let out = output_of(|w| run_sum(w, &[], Kind::Int)).unwrap();
        assert_eq!(out, "0\n");
    }

    #[test]
    fn test_sum_overflow_wraps() {
        let values = vec![i64::MAX.to_string(), "1".to_string()];
        let out = output_of(|w| run_sum(w, &values, Kind::Int)).unwrap();
        assert_eq!(out, format!("{}\n", i64::MIN));
    }

    #[test]
    fn test_sum_invalid_values() {
        let mut buf = Vec::new();
        let values = vec!["1".to_string(), "two".to_string()];
        let err = run_sum(&mut buf, &values, Kind::Int).unwrap_err();
        assert_eq!(err.to_string(), "Invalid integer: two");

        let values = vec!["1.0".to_string(), "x1".to_string()];
        let err = run_sum(&mut buf, &values, Kind::Float).unwrap_err();
        assert_eq!(err.to_string(), "Invalid float: x1");

        assert!(buf.is_empty());
    }

    #[test]
    fn test_args_parse_subcommands() {
        let args = Args::try_parse_from(["collectkit", "sum", "--kind", "float", "-1.5", "2"])
            .unwrap();
        match args.command {
            Command::Sum { values, kind } => {
                assert_eq!(values, vec!["-1.5", "2"]);
                assert!(matches!(kind, Kind::Float));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let args = Args::try_parse_from(["collectkit", "collection", "4", "--json"]).unwrap();
        match args.command {
            Command::Collection { values, json, .. } => {
                assert_eq!(values, vec![4]);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
