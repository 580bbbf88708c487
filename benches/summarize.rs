use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use workforce_stats::{RecordTable, harmonize::harmonize, schema::CANONICAL_COLUMNS, summarize};

fn generate_staff(rows: usize) -> RecordTable {
    let departments = ["Cardiology", "ICU", "Maternity", "Oncology", "Emergency"];
    let statuses = ["Single", "Married", "Divorced"];
    let headers = CANONICAL_COLUMNS
        .iter()
        .map(|c| match *c {
            "EmpID" => "EmployeeID".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>();
    let data = (0..rows)
        .map(|i| {
            headers
                .iter()
                .map(|h| match h.as_str() {
                    "EmployeeID" => i.to_string(),
                    "Department" => departments[i % departments.len()].to_string(),
                    "MaritalStatus" => statuses[i % statuses.len()].to_string(),
                    "Gender" => if i % 2 == 0 { "Female" } else { "Male" }.to_string(),
                    "Attrition" => if i % 7 == 0 { "Yes" } else { "No" }.to_string(),
                    "HourlyRate" => format!("{}.5", 20 + i % 80),
                    _ => (18 + i % 50).to_string(),
                })
                .collect()
        })
        .collect();
    RecordTable::new(headers, data)
}

fn bench_summarize(c: &mut Criterion) {
    let staff = generate_staff(50_000);
    c.bench_function("harmonize_and_summarize_50k", |b| {
        b.iter_batched(
            || staff.clone(),
            |mut table| {
                harmonize(&mut table);
                summarize(&table).expect("summary")
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
