use std::time::Instant;

use crate::model::{SnippetRecord, SourceRecord, ToolRecord};
use crate::search::{search_palette, FuzzyIndex};

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

fn warm_corpus() -> Vec<SourceRecord> {
    let mut records: Vec<SourceRecord> = (0..1_000)
        .map(|i| {
            SourceRecord::Snippet(SnippetRecord {
                id: i,
                title: format!("Snippet {i:04}"),
                description: "daily note".to_string(),
                content: format!("console.log('entry {i:04}');"),
                created_at: String::new(),
            })
        })
        .collect();

    records.push(SourceRecord::Tool(ToolRecord {
        id: 9_999,
        name: "Q4 Report Builder".to_string(),
        url: "https://reports.example".to_string(),
        description: "quarterly report generator".to_string(),
        category: "productivity".to_string(),
        keywords: "report excel finance".to_string(),
        created_at: String::new(),
    }));
    records
}

#[test]
fn warm_query_p95_under_150ms() {
    let records = warm_corpus();
    let index = FuzzyIndex::build(&records);

    for _ in 0..30 {
        let _ = search_palette(&index, "reort builder", 50);
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(80);
        for _ in 0..80 {
            let start = Instant::now();
            let _ = search_palette(&index, "reort builder", 50);
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 150.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 150.0ms); batches={batch_p95:?}",
    );
}
