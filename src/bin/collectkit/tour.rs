//! Walkthrough of every building block, printed section by section.

use std::io::Write;

use anyhow::{Context, Result};

use collectkit::print::{labelled, write_number_slices, write_numbers, write_slice};
use collectkit::{
    sum_floats, sum_int64s, sum_int64s_or_floats, sum_numbers, sum_with_map, sum_with_map2,
    Channel, Collection, List, Mapping, NumberSlice,
};

pub fn run(out: &mut impl Write) -> Result<()> {
    collection_section(out)?;
    sums_section(out)?;
    mapping_section(out)?;
    channel_section(out)?;
    slices_section(out)?;
    Ok(())
}

fn collection_section(out: &mut impl Write) -> Result<()> {
    writeln!(out, "=======Collection=======")?;
    let mut c = Collection::<i32>::new();
    c.append([1, 2, 3]);
    c.append([4, 5, 6]);
    write!(out, "{}", c)?;

    writeln!(out, "map callback")?;
    write!(out, "{}", c.map(|val| val * 2))?;
    writeln!(out, "result:  {:?}", c.result())?;
    Ok(())
}

fn sums_section(out: &mut impl Write) -> Result<()> {
    writeln!(out, "=======Non-Generic=======")?;
    writeln!(out, "{}", sum_int64s(&[1, 2, 3, 4]))?;
    writeln!(out, "{}", sum_floats(&[1.1, 2.1, 3.2, 4.1]))?;

    writeln!(out, "=========with func generic=====")?;
    writeln!(out, "{}", sum_int64s_or_floats(&[1i64, 2, 3, 4, 5]))?;
    writeln!(out, "{}", sum_int64s_or_floats(&[1.1f64, 2.1, 3.2, 4.1]))?;

    let m: Mapping<&str, i64> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    writeln!(out, "sumWithMap result: {}", sum_with_map(&m))?;
    writeln!(
        out,
        "Generic Sums with Constraint: {} and {}",
        sum_numbers(&[1, 2, 3]),
        sum_numbers(&[1.2, 1.2, 1.3])
    )?;
    writeln!(out, "sumWithMap2 result: {}", sum_with_map2(&m))?;

    write_numbers(out, &[1i64, 2, 3])?;
    write_numbers(out, &[1.1f64, 2.0, 3.0])?;
    write_numbers(out, &[1isize, 2, 3])?;
    Ok(())
}

fn mapping_section(out: &mut impl Write) -> Result<()> {
    writeln!(out, "map generics")?;
    // HashMap order is random; sort so the listing is stable.
    let m: Mapping<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
    let m2: Mapping<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
    let m3: Mapping<&str, &str> = [("a", "abc"), ("b", "23ac")].into_iter().collect();

    writeln!(out, "{}", labelled("m", &sorted(&m)))?;
    writeln!(out, "{}", labelled("m2", &sorted(&m2)))?;
    writeln!(out, "{}", labelled("m3", &sorted(&m3)))?;
    Ok(())
}

fn channel_section(out: &mut impl Write) -> Result<()> {
    let mut ch = Channel::with_capacity(10)?;
    for i in 0..10 {
        ch.send(i).context("Failed to fill int channel")?;
    }
    ch.close();
    for val in ch.drain() {
        writeln!(out, "ch value:  {}", val)?;
    }

    let mut ch2 = Channel::with_capacity(10)?;
    for i in 0..10 {
        ch2.send(format!("hello: {}", i))
            .context("Failed to fill string channel")?;
    }
    ch2.close();
    for val in ch2.drain() {
        writeln!(out, "ch2 value:  {}", val)?;
    }
    Ok(())
}

fn slices_section(out: &mut impl Write) -> Result<()> {
    writeln!(out, "=====NumberSlice generics======")?;
    let s = NumberSlice::from(vec![1, 2, 3]);
    write_slice(out, s.as_slice())?;
    let s2 = NumberSlice::from(vec![4, 5, 6]);
    write_number_slices::<_, _, i32>(out, &[s, s2])?;

    writeln!(out, "=====slice generics====")?;
    let l: List<i32> = vec![1, 2, 3];
    write_slice(out, &l)?;
    let l2: List<f64> = vec![1.0, 2.0, 3.0];
    write_slice(out, &l2)?;
    Ok(())
}

fn sorted<K: Ord + Clone, V: Clone>(m: &Mapping<K, V>) -> Vec<(K, V)> {
    let mut entries: Vec<(K, V)> = m.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}
