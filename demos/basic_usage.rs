// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_rational::prelude::*;

fn main() {
    // RUST_LOG=debug shows rejected constructions and casts
    #[cfg(feature = "logging")]
    if !fixed_rational::utils::init_logging() {
        eprintln!("tracing subscriber already installed, keeping it");
    }

    println!("=== Fixed Rational Example ===\n");

    // Construction always reduces
    let a = Rational64::new(6, -8);
    let b = Rational64::new(5, 12);
    println!("a = 6/-8  -> {}", a);
    println!("b = 5/12  -> {}", b);

    // Arithmetic, including integers on either side
    println!("\nArithmetic:");
    println!("  a + b   = {}", a + b);
    println!("  a * b   = {}", a * b);
    println!("  2 - b   = {}", 2 - b);
    println!("  b ^ -2  = {}", b.pow(-2));

    // Mixed widths widen to the larger word
    let small = Rational::<i16>::new(1, 3);
    println!("  b + 1/3 (i16) = {}", b + small);

    // Division by zero yields special values instead of panicking
    println!("\nSpecial values:");
    let inf = a / 0;
    let nan = Rational64::zero() / 0;
    println!("  a / 0 = {} (infinite: {})", inf, inf.is_infinite());
    println!("  0 / 0 = {} (nan: {})", nan, nan.is_nan());
    println!("  nan < a ? {:?}", nan.partial_cmp(&a));

    // Checked operations surface overflow as errors
    println!("\nChecked arithmetic:");
    let big = Rational::<i8>::new(100, 1);
    match big.checked_add(Rational::new(100, 1)) {
        Ok(sum) => println!("  100 + 100 = {}", sum),
        Err(err) => println!("  100 + 100 in i8: {}", err),
    }

    // Casts
    println!("\nCasts:");
    println!("  b as f64     = {}", b.to_f64());
    println!("  a as integer = {:?}", a.to_integer::<i32>());
    println!("  b as decimal = {:?}", b.to_decimal());

    // Formatting styles
    println!("\nFormatting:");
    let opts: FormatOptions = match "+#f".parse() {
        Ok(opts) => opts,
        Err(err) => {
            println!("  bad format spec: {}", err);
            return;
        },
    };
    println!("  default      = {}", Rational64::from_integer(3));
    println!("  \"+#f\"        = {}", Rational64::from_integer(3).to_string_with(&opts));
    println!("  hex          = {:#x}", Rational64::new(255, 16));
    println!("  padded parts = [{:>4}]", b);
    println!("  padded whole = [{:>8}]", b.display_with(&FormatOptions::new()));

    // Parsing a list with the cursor parser
    println!("\nParsing \"1/2, 3/4, -5\":");
    let mut cursor = "1/2, 3/4, -5";
    let mut total = Rational64::zero();
    loop {
        match parse_fraction::<i64>(&mut cursor) {
            Ok(value) => {
                println!("  read {}", value);
                total += value;
            },
            Err(err) => {
                println!("  stopped: {}", err);
                break;
            },
        }
        match cursor.strip_prefix(',') {
            Some(rest) => cursor = rest,
            None => break,
        }
    }
    println!("  total = {}", total);

    println!("\n=== Example Complete ===");
}
