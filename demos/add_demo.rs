//! Feeds two fixed integers through the ripple-carry adder and prints the
//! result, once per cell wiring.

use anyhow::Result;
use nandcore::{BitVector, RippleCarryAdder};

fn main() -> Result<()> {
    let a = BitVector::try_from_int(149)?;
    let b = BitVector::try_from_int(150)?;

    let out = RippleCarryAdder::nand_only().add(&a, &b);
    println!("{} + {} = {}", a.to_int(), b.to_int(), out.sum.to_int());

    let out = RippleCarryAdder::composed().add(&a, &b);
    println!("  a     = {}", a);
    println!("  b     = {}", b);
    println!("  sum   = {}", out.sum);
    println!("  carry = {}", out.carry);

    Ok(())
}
