//! 文本分析性能基准测试

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use newslens::analysis::{
    AnalysisPipeline, KeywordExtractor, LengthSummarizer, LsaSummarizer, Summarizer, Vocabulary,
};

const PARAGRAPH: &str = "Qeveria njoftoi një plan të ri për rritjen ekonomike. \
    Ministri tha se investimet në infrastrukturë do të dyfishohen. \
    Opozita kritikoi mungesën e transparencës në tenderët publikë. \
    Ekspertët paralajmërojnë për inflacion gjatë muajve të ardhshëm. ";

/// n 段重复文本
fn article(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

/// LSA 排序随句子数增长
fn bench_lsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarizer/lsa");
    let lsa = LsaSummarizer::default();

    for paragraphs in [1usize, 5, 20] {
        let text = article(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs * 4), &text, |b, text| {
            b.iter(|| lsa.summarize(black_box(text)));
        });
    }
    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let text = article(20);
    let summarizer = LengthSummarizer::default();
    c.bench_function("summarizer/length/80_sentences", |b| {
        b.iter(|| summarizer.summarize(black_box(&text)));
    });
}

fn bench_keywords(c: &mut Criterion) {
    let text = article(20);
    let extractor = KeywordExtractor::new(Vocabulary::default().analysis_stopwords, 10);
    c.bench_function("keywords/80_sentences", |b| {
        b.iter(|| extractor.extract(black_box(&text)));
    });
}

/// 完整分析（不含存储）
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = AnalysisPipeline::default();
    let text = article(5);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("quick_summary", |b| {
        b.iter(|| pipeline.quick_summary(black_box(&text)));
    });
    group.bench_function("analyze", |b| {
        b.iter(|| pipeline.analyze(black_box(&text)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_lsa,
    bench_length,
    bench_keywords,
    bench_pipeline
);
criterion_main!(benches);
