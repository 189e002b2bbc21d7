//! Tour of the collection, constrained sums and typed wrappers.
//!
//! Run with: cargo run --example generics_tour

use collectkit::print::{print_number_slices, print_numbers, print_slice, SliceLines};
use collectkit::{
    collection, sum_any_int, sum_numbers, sum_signed, underlying_newtype, Channel, Collection,
    List, NumberSlice,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Points(isize);
underlying_newtype!(Points(isize));

#[derive(Debug, Clone, Copy, PartialEq)]
struct Delta(i32);
underlying_newtype!(Delta(i32));

fn main() -> std::io::Result<()> {
    println!("Hello, collectkit");

    // Collection: append twice, map into a new collection
    let mut c = Collection::<i32>::new();
    c.append([1, 2, 3]);
    c.append([4, 5, 6]);
    print!("{}", c);
    println!("map callback");
    print!("{}", c.map(|val| val * 2));
    println!("result:  {:?}", c.result());

    let words = collection!["a".to_string(), "b".to_string()];
    let same = words.map(|w| w.clone());
    println!("identity map equal: {}", same == words);

    // Sums over closed and underlying-type constraint sets
    println!(
        "Generic Sums with Constraint: {} and {}",
        collectkit::sum_numbers!(1, 2, 3),
        sum_numbers(&[1.2, 1.2, 1.3])
    );
    println!("~int sum: {:?}", sum_any_int(&[Points(10), Points(5)]));
    println!("signed sum: {:?}", sum_signed(&[Delta(-4), Delta(9)]));

    print_numbers(&[1i64, 2, 3])?;
    print_numbers(&[1.1f64, 2.0, 3.0])?;

    // Channel filled then drained on one thread
    let mut ch = Channel::with_capacity(10).map_err(std::io::Error::other)?;
    for i in 0..10 {
        ch.send(i).map_err(std::io::Error::other)?;
    }
    ch.close();
    for val in ch.drain() {
        println!("ch value:  {}", val);
    }

    // Slices
    let s = NumberSlice::from(vec![1, 2, 3]);
    print_slice(s.as_slice())?;
    print_number_slices::<_, i32>(&[s, NumberSlice::from(vec![4, 5, 6])])?;

    let l: List<f64> = vec![1.0, 2.0, 3.0];
    print!("{}", SliceLines(&l));
    Ok(())
}
