use clap::Parser;

use bqcrypto::{load_json, AdditivePrivateKey, AdditivePublicKey};

#[derive(Parser, Debug)]
struct Opt {
    #[arg(long)]
    additive_pub: String,
    #[arg(long)]
    additive_priv: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    let pk: AdditivePublicKey = load_json(&opt.additive_pub)?;
    println!("Public key fingerprint: {}", pk.fingerprint());
    if let Some(sk_path) = opt.additive_priv {
        let sk: AdditivePrivateKey = load_json(&sk_path)?;
        anyhow::ensure!(
            sk.fingerprint() == pk.fingerprint(),
            "private key does not match public key"
        );
        println!("Private key matches the public key.");
    }
    Ok(())
}
