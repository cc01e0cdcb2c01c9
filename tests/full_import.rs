//! End-to-end import across all three formats, exercising merge-by-precedence
//! between datasets and the JSON export shape.

use area_stats::Areas;
use area_stats::catalogue;
use area_stats::filter::ImportFilters;
use area_stats::ingestion::SourceFormat;
use area_stats::source::{InputFile, InputSource};

fn import_fixture(areas: &mut Areas, file: &str, dataset_code: &str, filters: &ImportFilters) {
    let dataset = catalogue::find(dataset_code).unwrap();
    let reader = InputFile::new(format!("tests/fixtures/{file}")).open().unwrap();
    areas
        .populate(reader, dataset.format, &dataset.columns, filters)
        .unwrap();
}

fn import_all(filters: &ImportFilters) -> Areas {
    let mut areas = Areas::new();
    let reader = InputFile::new("tests/fixtures/areas.csv").open().unwrap();
    areas
        .populate(
            reader,
            SourceFormat::AuthorityCodeCsv,
            &catalogue::authority_code_columns(),
            filters,
        )
        .unwrap();
    import_fixture(&mut areas, "popu1009.json", "popden", filters);
    import_fixture(&mut areas, "complete-popu1009-popden.csv", "complete-popden", filters);
    areas
}

#[test]
fn datasets_merge_into_one_model() {
    let areas = import_all(&ImportFilters::none());

    assert_eq!(areas.len(), 3);

    let anglesey = areas.area("W06000001").unwrap();
    // Names from the authority-code table survive later imports.
    assert_eq!(anglesey.name("eng").unwrap(), "Isle of Anglesey");
    assert_eq!(anglesey.name("cym").unwrap(), "Ynys Mon");

    // The dens series is the union of the JSON and by-year CSV datasets, with
    // the later import winning on the shared years.
    let dens = anglesey.measure("dens").unwrap();
    assert_eq!(dens.len(), 3);
    assert_eq!(dens.value(2010).unwrap(), 96.1);
    assert_eq!(dens.value(2012).unwrap(), 96.8);

    // The JSON-only measure is still present.
    assert!(anglesey.measure("pop").is_ok());

    // Swansea appears only in the authority-code table, with no measures.
    assert!(areas.area("W06000011").unwrap().is_empty());
}

#[test]
fn importing_a_dataset_twice_is_a_no_op() {
    let mut once = Areas::new();
    import_fixture(&mut once, "popu1009.json", "popden", &ImportFilters::none());

    let mut twice = Areas::new();
    import_fixture(&mut twice, "popu1009.json", "popden", &ImportFilters::none());
    import_fixture(&mut twice, "popu1009.json", "popden", &ImportFilters::none());

    assert_eq!(once, twice);
}

#[test]
fn export_shape_matches_the_interchange_contract() {
    let areas = import_all(&ImportFilters::none());
    let json: serde_json::Value = serde_json::from_str(&areas.to_json().unwrap()).unwrap();

    let anglesey = &json["W06000001"];
    assert_eq!(anglesey["names"]["eng"], "Isle of Anglesey");
    assert_eq!(anglesey["names"]["cym"], "Ynys Mon");
    assert_eq!(anglesey["measures"]["dens"]["2012"], 96.8);
    assert_eq!(anglesey["measures"]["pop"]["2010"], 68849.0);

    // Swansea has no measures, so only its names are exported.
    assert!(json["W06000011"].get("measures").is_none());
    assert_eq!(json["W06000011"]["names"]["cym"], "Abertawe");
}

#[test]
fn filters_compose_across_datasets() {
    let filters = ImportFilters {
        areas: area_stats::filter::build_filter_set(vec!["anglesey"]),
        measures: area_stats::filter::build_filter_set(vec!["dens"]),
        years: Some((2011, 2012)),
    };
    let areas = import_all(&filters);

    // The enhanced area filter matched Anglesey by name substring only.
    assert_eq!(areas.len(), 1);
    let anglesey = areas.area("W06000001").unwrap();

    // The measure filter dropped "pop"; the year filter kept 2011 and 2012.
    assert!(anglesey.measure("pop").is_err());
    let dens = anglesey.measure("dens").unwrap();
    assert_eq!(dens.len(), 2);
    assert!(dens.value(2010).is_err());
    assert_eq!(dens.value(2011).unwrap(), 96.5);
}

#[test]
fn rendered_output_lists_areas_in_code_order() {
    let areas = import_all(&ImportFilters::none());
    let rendered = areas.to_string();

    let anglesey = rendered.find("Isle of Anglesey / Ynys Mon (W06000001)").unwrap();
    let gwynedd = rendered.find("Gwynedd / Gwynedd (W06000002)").unwrap();
    let swansea = rendered.find("Swansea / Abertawe (W06000011)").unwrap();
    assert!(anglesey < gwynedd && gwynedd < swansea);

    // Swansea has no measures.
    assert!(rendered[swansea..].contains("<no measures>"));
}
