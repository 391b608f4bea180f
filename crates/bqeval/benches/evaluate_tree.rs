use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rug::Integer;

use bqcrypto::{additive, generate_additive_keypair, PublicKey};
use bqeval::{evaluate, ExprNode};

fn bench_scaled_sum(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let pair = generate_additive_keypair(1024, &mut rng).unwrap();
    let pk = PublicKey::Additive(pair.public.clone());

    let ea = additive::encrypt(&pair.public, &Integer::from(50u32), &mut rng).unwrap();
    let eb = additive::encrypt(&pair.public, &Integer::from(10u32), &mut rng).unwrap();
    let expr = ExprNode::add(
        ExprNode::scalar_mul(ExprNode::leaf(ea), 2u32),
        ExprNode::leaf(eb),
    );

    c.bench_function("evaluate_scaled_sum_1024", |bencher| {
        bencher.iter(|| {
            let res = evaluate(&pk, &expr).unwrap();
            black_box(res);
        });
    });
}

criterion_group!(benches, bench_scaled_sum);
criterion_main!(benches);
