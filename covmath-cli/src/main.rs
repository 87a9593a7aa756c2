use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Evaluate a single covmath operation and print the result
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Log filter (e.g. `debug`, `covmath=trace`); defaults to `warn`
    #[arg(long, env = "COVMATH_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// a + b (wrapping)
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// a - b (wrapping)
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// a * b (wrapping)
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Floating-point a / b
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Integer a / b, truncating toward zero
    DivideInt {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// base ^ exponent
    Power {
        #[arg(allow_negative_numbers = true)]
        base: i32,
        #[arg(allow_negative_numbers = true)]
        exponent: i32,
    },
    /// n!
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Primality test
    IsPrime {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Absolute value
    Abs {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Larger of two integers
    Max {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Smaller of two integers
    Min {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Greatest common divisor
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// n-th Fibonacci number
    Fibonacci {
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
    /// Sum of the given integers
    Sum {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Mean of the given integers
    Average {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Length in bytes up to the first NUL
    Strlen { text: String },
    /// Case-sensitive palindrome check
    IsPalindrome { text: String },
}

impl Command {
    /// Run the operation and render its result as a single line.
    fn evaluate(&self) -> Result<String> {
        let out = match self {
            Command::Add { a, b } => covmath::add(*a, *b).to_string(),
            Command::Subtract { a, b } => covmath::subtract(*a, *b).to_string(),
            Command::Multiply { a, b } => covmath::multiply(*a, *b).to_string(),
            Command::Divide { a, b } => {
                let q = covmath::divide(*a, *b).with_context(|| format!("divide({}, {})", a, b))?;
                format!("{:.2}", q)
            }
            Command::DivideInt { a, b } => covmath::divide_int(*a, *b)
                .with_context(|| format!("divide_int({}, {})", a, b))?
                .to_string(),
            Command::Power { base, exponent } => covmath::power(*base, *exponent)
                .with_context(|| format!("power({}, {})", base, exponent))?
                .to_string(),
            Command::Factorial { n } => covmath::factorial(*n)
                .with_context(|| format!("factorial({})", n))?
                .to_string(),
            Command::IsPrime { n } => covmath::is_prime(*n).to_string(),
            Command::Abs { n } => covmath::absolute_value(*n).to_string(),
            Command::Max { a, b } => covmath::max(*a, *b).to_string(),
            Command::Min { a, b } => covmath::min(*a, *b).to_string(),
            Command::Gcd { a, b } => covmath::gcd(*a, *b).to_string(),
            Command::Fibonacci { n } => covmath::fibonacci(*n)
                .with_context(|| format!("fibonacci({})", n))?
                .to_string(),
            Command::Sum { values } => covmath::sum(values).to_string(),
            Command::Average { values } => format!("{:.2}", covmath::average(values)),
            Command::Strlen { text } => covmath::string_length(Some(text.as_str())).to_string(),
            Command::IsPalindrome { text } => covmath::is_palindrome(Some(text.as_str())).to_string(),
        };
        Ok(out)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log filter '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "evaluating");
    let out = cli.command.evaluate()?;
    println!("{}", out);
    Ok(())
}
