// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use text_decimal::prelude::*;

fn main() {
    println!("=== Text Decimal Example ===\n");

    // Validate raw tokens before any arithmetic
    println!("Validating tokens...");
    for token in ["12.50", "-0.003", "1.", " 7", "+42"] {
        match validate(token) {
            Ok(()) => println!("  {:?} ok", token),
            Err(err) => println!("  {:?} rejected: {}", token, err),
        }
    }

    // Exact addition, including values f64 cannot represent
    println!("\nAdding...");
    let pairs = [
        ("0.1", "0.2"),
        ("10", "-3.5"),
        ("999999999999999999999999.9", "0.1"),
        ("5", "-5"),
    ];
    for (a, b) in pairs {
        println!("  {} + {} = {}", a, b, add(a, b));
    }

    // Read a small ledger and total it
    println!("\nReading ledger...");
    let source = InMemoryLineSource::new(
        "# deposits and withdrawals\n\
         1500.75\n\
         -200.5\n\
         \n\
         0.01\n\
         not-a-number\n",
    );

    let reader = match DecimalReader::new(ReaderConfig::lenient(), Arc::new(LoggingEventHandler)) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            return;
        },
    };

    match reader.read_source(&source) {
        Ok(report) => {
            for rejected in &report.rejected {
                println!(
                    "  line {}: {:?} skipped ({})",
                    rejected.line_number, rejected.text, rejected.error
                );
            }
            let total = report.total();
            println!("  {} values, total {}", report.accepted.len(), total);
            println!("  approximate: {}", total.to_f64());
        },
        Err(err) => eprintln!("read failed: {}", err),
    }
}
