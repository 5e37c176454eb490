//! Managing an element's classes through a token list.
//!
//! Run with: cargo run --example class_list

use std::error::Error;

use token_list::{Attributes, TokenList};

fn main() -> Result<(), Box<dyn Error>> {
    let mut button = Attributes::new();
    button.set("class", "  btn   btn-primary ");

    let mut classes = button.token_list("class");
    println!("Parsed {} classes: {}", classes.len(), classes);

    classes.add(["active", "btn"])?;
    let disabled = classes.toggle("disabled")?;
    println!("disabled now {}", disabled);

    classes.remove(["btn-primary"])?;
    classes.add(["btn-secondary"])?;
    drop(classes);

    println!("class=\"{}\"", button.get("class").unwrap_or_default());

    match TokenList::new(&mut String::new()).add(["two words"]) {
        Ok(()) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
