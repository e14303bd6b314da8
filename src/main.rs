//! USCC Emulator - CLI Entry Point
//!
//! Commands:
//! - `uscc-emu run <tape>` - Execute an instruction tape file
//! - `uscc-emu demo` - Run the original USCC test program
//! - `uscc-emu test` - Run the built-in self-test

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "uscc-emu")]
#[command(version = "0.1.0")]
#[command(about = "An emulator of the USCC Headquarters four-function binary calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute an instruction tape until it runs out
    Run {
        /// Path to the tape file (one binary instruction per line)
        tape: String,
        /// Operator name for the welcome greeting
        #[arg(short, long, default_value = "Operator")]
        name: String,
        /// Echo each instruction before executing it
        #[arg(short, long)]
        trace: bool,
    },
    /// Run the original USCC test program
    Demo {
        /// Operator name for the welcome greeting
        #[arg(short, long, default_value = "James")]
        name: String,
    },
    /// Run the built-in self-test
    Test,
}

/// The original USCC test program: store 5 and 10, run all four
/// operations on them, then recall the last three calculations.
const DEMO_PROGRAM: [(&str, &str); 9] = [
    ("00000100000000000000000101000000", "store 5"),
    ("00000100000000000000001010000000", "store 10"),
    ("00000000001000100000000000100000", "add r1, r2"),
    ("00000000001000100000000000100010", "subtract r1, r2"),
    ("00000000001000100000000000011000", "multiply r1, r2"),
    ("00000000001000100000000000011010", "divide r1, r2"),
    ("10000100000000000000000000000000", "recall"),
    ("10000100000000000000000000000000", "recall"),
    ("10000100000000000000000000000000", "recall"),
];

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { tape, name, trace }) => {
            run_tape(&tape, &name, trace);
        }
        Some(Commands::Demo { name }) => {
            run_demo(&name);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("USCC Emulator v0.1.0");
            println!("A four-function binary instruction calculator");
            println!();
            println!("Use --help for available commands");
            println!();
            run_demo("James");
        }
    }
}

fn run_tape(path: &str, name: &str, trace: bool) {
    use uscc::{load_tape, Calculator};

    let tape = match load_tape(path) {
        Ok(tape) => tape,
        Err(e) => {
            eprintln!("Failed to load tape: {}", e);
            std::process::exit(1);
        }
    };

    if tape.is_empty() {
        eprintln!("No instructions to execute");
        std::process::exit(1);
    }

    println!("Loaded {} instructions from {}", tape.len(), path);
    println!();

    let mut calc = Calculator::new(name);
    for instruction in &tape.instructions {
        if trace {
            println!("> {}", instruction);
        }
        calc.execute(instruction);
    }
}

fn run_demo(name: &str) {
    use uscc::Calculator;

    println!("--- USCC test program ---");

    let mut calc = Calculator::new(name);
    for (instruction, comment) in DEMO_PROGRAM {
        println!("# {}", comment);
        calc.execute(instruction);
    }
}

fn run_self_test() {
    use uscc::{divide, parse_bits, format_bits, BufferSink, Calculator, Fields};

    println!("--- USCC Emulator Self-Test ---");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |label: &str, ok: bool| {
        if ok {
            println!("{}... ok", label);
            passed += 1;
        } else {
            println!("{}... FAILED", label);
            failed += 1;
        }
    };

    // Binary codec round-trip
    let mut ok = true;
    for value in [-1023, -5, 0, 5, 1023, 104857] {
        if parse_bits(&format_bits(value)) != Ok(value) {
            ok = false;
            break;
        }
    }
    check("binary codec round-trip", ok);

    // Field slicing
    let fields = Fields::slice("00000100000000000000000101000000");
    check(
        "field slicing",
        matches!(fields, Ok(f) if f.opcode == "000001" && f.store == "0000000101"),
    );

    // Division policy
    check(
        "division policy",
        divide(0, 7) == 0 && divide(7, 0) == 0 && divide(5, 10) == 0 && divide(-5, 10) == -1,
    );

    // Full driver program
    let mut calc = Calculator::with_sink("Operator", BufferSink::new());
    for (instruction, _) in DEMO_PROGRAM {
        calc.execute(instruction);
    }
    check(
        "test program output",
        calc.sink().lines
            == vec![
                "Welcome, Operator",
                "Register 1: 5",
                "Register 2: 10",
                "Add Result: 15",
                "Subtract Result: -5",
                "Multiply Result: 50",
                "Divide Result: 0",
                "Last Result=0",
                "Last Result=50",
                "Last Result=-5",
            ],
    );

    println!();
    println!("Results: {} passed, {} failed", passed, failed);

    if failed > 0 {
        std::process::exit(1);
    }
}
