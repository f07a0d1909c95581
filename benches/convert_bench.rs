use criterion::{black_box, criterion_group, criterion_main, Criterion};
use handoc::{
    boundary::DocIndex,
    io::ParallelWriter,
    processing::{han2wmt::insert_boundaries, wmt2han::extract_boundaries},
};
use indicatif::ProgressBar;

const NB_DOCS: usize = 1_000;
const DOC_SIZE: usize = 20;

fn wmt_lines() -> (Vec<String>, Vec<String>) {
    let mut src = Vec::with_capacity(NB_DOCS * (DOC_SIZE + 1));
    let mut tgt = Vec::with_capacity(NB_DOCS * (DOC_SIZE + 1));
    for doc in 0..NB_DOCS {
        for seg in 0..DOC_SIZE {
            src.push(format!("Das ist Satz {} im Dokument {}.\n", seg, doc));
            tgt.push(format!("This is sentence {} of document {}.\n", seg, doc));
        }
        src.push("\n".to_string());
        tgt.push("\n".to_string());
    }
    (src, tgt)
}

pub fn wmt2han(c: &mut Criterion) {
    let (src, tgt) = wmt_lines();
    let pb = ProgressBar::hidden();
    c.bench_function("extract_boundaries", |b| {
        b.iter(|| {
            let mut out = ParallelWriter::new(Vec::new(), Vec::new());
            extract_boundaries(black_box(&src), black_box(&tgt), &mut out, &pb).unwrap()
        })
    });
}

pub fn han2wmt(c: &mut Criterion) {
    let (src, tgt): (Vec<String>, Vec<String>) = wmt_lines()
        .0
        .into_iter()
        .zip(wmt_lines().1)
        .filter(|(s, _)| s != "\n")
        .unzip();
    let doc_index = DocIndex::new((0..NB_DOCS).map(|doc| doc * DOC_SIZE).collect());
    let pb = ProgressBar::hidden();
    c.bench_function("insert_boundaries", |b| {
        b.iter(|| {
            let mut out = ParallelWriter::new(Vec::new(), Vec::new());
            insert_boundaries(
                black_box(&src),
                black_box(&tgt),
                &doc_index,
                &mut out,
                &pb,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, wmt2han, han2wmt);
criterion_main!(benches);
