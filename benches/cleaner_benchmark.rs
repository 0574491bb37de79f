use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ticket_cleaner::TicketCleaner;

fn generate_sample_ticket(updates: usize) -> String {
    let mut ticket = String::from("CAROLINE CONCEICAO 01/07/2025 10:04\n");

    for i in 0..updates {
        ticket.push_str(&format!(
            "ATUALIZAÇÃO: Verificado o acesso do usuário {} ao sistema EM: 01/07/2025 10:{:02}\n",
            i,
            i % 60
        ));
    }

    ticket.push_str("CONCLUSÃO: Senha enviada via Teams.\n");
    ticket.push_str("TICKET CRIADO POR X EM: 7/1/2025 8:31 AM");
    ticket
}

fn bench_clean(c: &mut Criterion) {
    let ticket = generate_sample_ticket(10);
    let cleaner = TicketCleaner::default();

    c.bench_function("clean 10 updates", |b| {
        b.iter(|| {
            let _result = cleaner.process(black_box(&ticket), true);
        })
    });

    // Benchmark with different numbers of update lines
    let update_counts = [1, 10, 50, 100, 500];
    let mut group = c.benchmark_group("update_scaling");
    for &count in &update_counts {
        let ticket = generate_sample_ticket(count);
        group.bench_function(format!("{} updates", count), |b| {
            b.iter(|| {
                let _result = cleaner.process(black_box(&ticket), true);
            })
        });
    }
    group.finish();

    let batch: Vec<String> = (0..200).map(generate_sample_ticket).collect();
    c.bench_function("batch of 200 tickets", |b| {
        b.iter(|| {
            let _results = cleaner.process_batch(black_box(batch.as_slice()), true);
        })
    });
}

criterion_group!(benches, bench_clean);
criterion_main!(benches);
