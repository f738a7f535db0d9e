//! Continuous week-grid calendar CLI.
//!
//! # Usage
//! ```ignore
//! weekcal -n 3                  // Three months from today
//! weekcal -n 12 --start 202401  // The whole of 2024
//! weekcal -n 2 -m -H            // Monday first, with a weekday header
//! ```

use weekcal::args::Args;
use weekcal::calendar::weeks;
use weekcal::combine::combine;
use weekcal::formatter::WeekFormatter;
use weekcal::types::RenderContext;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("weekcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = RenderContext::new(args)?;
    let formatter = WeekFormatter::new(&ctx);

    for (i, week) in combine(weeks(ctx.start, ctx.months, ctx.week_start)).enumerate() {
        for line in formatter.render(&week, ctx.header && i == 0) {
            println!("{}", line);
        }
    }

    Ok(())
}
