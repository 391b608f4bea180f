use clap::Parser;

use bqcrypto::{generate_additive_keypair, generate_multiplicative_keypair, save_json};

#[derive(Parser, Debug)]
struct Opt {
    /// Output directory
    #[arg(long, default_value = "./keys")]
    out: String,
    /// Modulus size in bits
    #[arg(long, default_value_t = 2048)]
    bits: u32,
    /// Scheme to generate: additive | multiplicative
    #[arg(long, default_value = "additive")]
    scheme: String,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    std::fs::create_dir_all(&opt.out)?;
    let mut rng = rand::thread_rng();
    match opt.scheme.as_str() {
        "additive" => {
            let pair = generate_additive_keypair(opt.bits, &mut rng)?;
            save_json(&format!("{}/additive_pub.json", opt.out), &pair.public)?;
            save_json(&format!("{}/additive_priv.json", opt.out), &pair.private)?;
        }
        "multiplicative" => {
            let pair = generate_multiplicative_keypair(opt.bits, &mut rng)?;
            save_json(&format!("{}/multiplicative_pub.json", opt.out), &pair.public)?;
            save_json(&format!("{}/multiplicative_priv.json", opt.out), &pair.private)?;
        }
        other => anyhow::bail!("unknown scheme: {other}"),
    }
    println!("Wrote {} keys to {}", opt.scheme, opt.out);
    Ok(())
}
