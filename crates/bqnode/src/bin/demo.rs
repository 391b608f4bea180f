// Demonstration entry point: one client, one blind server, the worked
// example (a * scale) + b. Exit code 0 when the decrypted result matches the
// cleartext computation, non-zero otherwise.

use anyhow::{bail, Result};
use clap::Parser;
use rug::Integer;

use bqeval::ExprNode;
use bqnode::{Client, Server};

#[derive(Parser, Debug)]
struct Opt {
    /// Modulus size in bits for the additive keypair
    #[arg(long, default_value_t = 1024)]
    bits: u32,
    #[arg(long, default_value_t = 50)]
    a: u64,
    #[arg(long, default_value_t = 10)]
    b: u64,
    /// Cleartext scalar applied to `a`
    #[arg(long, default_value_t = 2)]
    scale: u64,
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let mut rng = rand::thread_rng();

    let client = Client::generate_additive(opt.bits, &mut rng)?;
    let server = Server::from_record(&client.public_key_record())?;
    println!("Clear a: {}, clear b: {}", opt.a, opt.b);
    println!("Server key fingerprint: {}", server.fingerprint());

    let ea = client.encrypt(&Integer::from(opt.a), &mut rng)?;
    let eb = client.encrypt(&Integer::from(opt.b), &mut rng)?;

    // (a * scale) + b, combined by the server on ciphertexts only
    let expr = ExprNode::add(
        ExprNode::scalar_mul(ExprNode::leaf(ea), Integer::from(opt.scale)),
        ExprNode::leaf(eb),
    );
    let result_ct = server.evaluate(&expr)?;

    let got = client.decrypt(&result_ct)?;
    let expected = Integer::from(opt.a) * opt.scale + opt.b;
    println!("Decrypted result: {got}");
    println!("Expected result:  {expected}");

    if got != expected {
        bail!("blind evaluation disagrees with the cleartext computation");
    }
    println!("Match: true");
    Ok(())
}
