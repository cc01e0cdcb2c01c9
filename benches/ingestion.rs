use std::fmt::Write as _;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use area_stats::Areas;
use area_stats::filter::ImportFilters;
use area_stats::ingestion::{ColumnMapping, SourceColumn, SourceFormat};

fn authority_csv(rows: usize) -> String {
    let mut out = String::from("Local authority code,Name (eng),Name (cym)\n");
    for i in 0..rows {
        let _ = writeln!(out, "W{i:08},Area {i},Ardal {i}");
    }
    out
}

fn stats_json(rows: usize) -> String {
    let mut out = String::from(r#"{"value":["#);
    for i in 0..rows {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(
            out,
            r#"{{"Localauthority_Code":"W{code:08}","Localauthority_ItemName_ENG":"Area {code}","Measure_Code":"dens","Measure_ItemName_ENG":"Density","Year_Code":"{year}","Data":{value}.5}}"#,
            code = i / 10,
            year = 2010 + i % 10,
            value = i,
        );
    }
    out.push_str("]}");
    out
}

fn year_csv(rows: usize) -> String {
    let mut out = String::from("AuthorityCode,2010,2011,2012,2013,2014\n");
    for i in 0..rows {
        let _ = writeln!(out, "W{i:08},{i}.0,{i}.1,{i}.2,{i}.3,{i}.4");
    }
    out
}

fn bench_ingestion(c: &mut Criterion) {
    let no_filters = ImportFilters::none();

    let input = authority_csv(1_000);
    let mut columns = ColumnMapping::new();
    columns.insert(SourceColumn::AuthCode, "Local authority code".to_string());
    columns.insert(SourceColumn::AuthNameEng, "Name (eng)".to_string());
    columns.insert(SourceColumn::AuthNameCym, "Name (cym)".to_string());
    c.bench_function("authority_code_csv_1k_rows", |b| {
        b.iter(|| {
            let mut areas = Areas::new();
            areas
                .populate(
                    black_box(input.as_bytes()),
                    SourceFormat::AuthorityCodeCsv,
                    &columns,
                    &no_filters,
                )
                .unwrap();
            areas.len()
        })
    });

    let input = stats_json(1_000);
    let mut columns = ColumnMapping::new();
    columns.insert(SourceColumn::AuthCode, "Localauthority_Code".to_string());
    columns.insert(SourceColumn::AuthNameEng, "Localauthority_ItemName_ENG".to_string());
    columns.insert(SourceColumn::MeasureCode, "Measure_Code".to_string());
    columns.insert(SourceColumn::MeasureName, "Measure_ItemName_ENG".to_string());
    columns.insert(SourceColumn::Year, "Year_Code".to_string());
    columns.insert(SourceColumn::Value, "Data".to_string());
    c.bench_function("stats_json_1k_records", |b| {
        b.iter(|| {
            let mut areas = Areas::new();
            areas
                .populate(
                    black_box(input.as_bytes()),
                    SourceFormat::StatsJson,
                    &columns,
                    &no_filters,
                )
                .unwrap();
            areas.len()
        })
    });

    let input = year_csv(1_000);
    let mut columns = ColumnMapping::new();
    columns.insert(SourceColumn::AuthCode, "AuthorityCode".to_string());
    columns.insert(SourceColumn::SingleMeasureCode, "dens".to_string());
    columns.insert(SourceColumn::SingleMeasureName, "Population density".to_string());
    c.bench_function("authority_by_year_csv_1k_rows", |b| {
        b.iter(|| {
            let mut areas = Areas::new();
            areas
                .populate(
                    black_box(input.as_bytes()),
                    SourceFormat::AuthorityByYearCsv,
                    &columns,
                    &no_filters,
                )
                .unwrap();
            areas.len()
        })
    });
}

criterion_group!(benches, bench_ingestion);
criterion_main!(benches);
