// Cleartext baseline for the demo expression: computes (a * scale) + b with
// plain integers so encrypted runs can be checked against it.

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
struct Opt {
    a: i64,
    b: i64,
    #[arg(long, default_value_t = 2)]
    scale: i64,
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    println!("{}", opt.a * opt.scale + opt.b);
    Ok(())
}
