//! Line-oriented printers for generic sequences.
//!
//! Each `write_*` function targets any [`io::Write`]; the `print_*`
//! variants lock stdout.

use std::any::type_name;
use std::fmt::{self, Debug, Display};
use std::io::{self, Write};

use crate::numeric::Number;

/// Writes `value: {v}` for every element.
pub fn write_slice<W, T>(out: &mut W, s: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for v in s {
        writeln!(out, "value: {}", v)?;
    }
    Ok(())
}

/// Writes `number: {v} type:{type}` for every element.
pub fn write_numbers<W, T>(out: &mut W, s: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Number,
{
    for v in s {
        writeln!(out, "number: {} type:{}", v, type_name::<T>())?;
    }
    Ok(())
}

/// Writes each slice as `current value:  {slice:?}`, then `v:  {v}` per element.
pub fn write_number_slices<W, S, T>(out: &mut W, slices: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<[T]>,
    T: Number,
{
    for slice in slices {
        let values = slice.as_ref();
        writeln!(out, "current value:  {:?}", values)?;
        for v in values {
            writeln!(out, "v:  {}", v)?;
        }
    }
    Ok(())
}

/// Prints `value: {v}` for every element to stdout.
pub fn print_slice<T: Display>(s: &[T]) -> io::Result<()> {
    write_slice(&mut io::stdout().lock(), s)
}

/// Prints every number with its type name to stdout.
pub fn print_numbers<T: Number>(s: &[T]) -> io::Result<()> {
    write_numbers(&mut io::stdout().lock(), s)
}

/// Prints several number slices to stdout.
pub fn print_number_slices<S, T>(slices: &[S]) -> io::Result<()>
where
    S: AsRef<[T]>,
    T: Number,
{
    write_number_slices(&mut io::stdout().lock(), slices)
}

/// Renders a labelled value the way the drivers do, e.g. `m: {"a": 1}`.
pub fn labelled<T: Debug>(label: &str, value: &T) -> String {
    format!("{}: {:?}", label, value)
}

/// Adapter that displays any slice with [`write_slice`] formatting.
pub struct SliceLines<'a, T>(pub &'a [T]);

impl<T: Display> Display for SliceLines<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in self.0 {
            writeln!(f, "value: {}", v)?;
        }
        Ok(())
    }
}
