//! Basic usage example for proviso

use proviso::prelude::*;

fn main() -> Result<(), ConstructionError> {
    // Chain test selections, then evaluate once
    let validator = string("HelloWorld").min_length(8)?.max_length(10)?;

    match validator.validate() {
        Ok(true) => println!("✓ 'HelloWorld' is valid (length 8-10)"),
        Ok(false) => println!("✗ 'HelloWorld' is invalid"),
        Err(e) => println!("✗ Error: {}", e),
    }

    // With fail-fast, the first failing test returns its structured failure
    let validator = string("Hi").min_length(8)?.fail_fast();

    match validator.validate() {
        Ok(_) => println!("✓ 'Hi' is valid"),
        Err(e) => println!("✗ 'Hi' is invalid: {}", e),
    }

    // Numbers get bounds and sign tests
    match number(0).is_zero().validate() {
        Ok(true) => println!("✓ 0 is zero"),
        _ => println!("✗ 0 is not zero?"),
    }

    println!("\nproviso is working correctly!");
    Ok(())
}
