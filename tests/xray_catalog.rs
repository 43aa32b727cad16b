// tests/xray_catalog.rs
mod common;

use common::{approx, FakeSite, XRAY_WATER};
use physdata::{Density, Error};

#[test]
fn element_table_scans_only_the_data_section() {
    let site = FakeSite::nist();
    let t = site.client().xray_coefficients(13, false).unwrap();

    assert_eq!(t.len(), 7);
    assert!(t.rows().iter().all(|r| r.len() == 3));
    assert_eq!(t.rows()[0], vec![1.0e-3, 1185.0, 1183.0]);
    // K edge: the energy repeats with the jump in μ/ρ
    assert_eq!(t.rows()[2][0], t.rows()[3][0]);
    assert!(t.rows()[3][1] > t.rows()[2][1]);
    // numbers in the navigation and footer sections never leak in
    assert!(t.rows().iter().all(|r| r[1] != 2.0 && r[1] != 1.0));

    assert!(site.calls()[0].ends_with("/PhysRefData/XrayMassCoef/ElemTab/z13.html"));
}

#[test]
fn identifier_forms_agree() {
    let site = FakeSite::nist();
    let client = site.client();
    let a = client.xray_coefficients(13, false).unwrap();
    let b = client.xray_coefficients("13", false).unwrap();
    let c = client.xray_coefficients("013", false).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);

    // single digit elements are padded to two
    client.xray_coefficients(4, false).unwrap();
    assert!(site.calls().last().unwrap().ends_with("ElemTab/z04.html"));
}

#[test]
fn compound_pages_are_keyed_by_short_name() {
    let site = FakeSite::nist();
    let t = site.client().xray_coefficients("water", false).unwrap();
    assert_eq!(t.len(), 4);
    assert!(site.calls()[0].ends_with("/ComTab/water.html"));
}

#[test]
fn auto_density_is_the_catalog_density() {
    let site = FakeSite::nist();
    let client = site.client();

    let mass = client.xray_coefficients(13, false).unwrap();
    let auto = client.xray_coefficients(13, Density::Auto).unwrap();
    assert_eq!(auto.density(), Some(2.699));
    for (m, a) in mass.rows().iter().zip(auto.rows()) {
        assert_eq!(m[0], a[0]);
        assert!(approx(a[1] / m[1], 2.699));
        assert!(approx(a[2] / m[2], 2.699));
    }

    // data page first, then the element catalog
    let calls = site.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[1].ends_with("ElemTab/z13.html"));
    assert!(calls[2].ends_with("tab1.html"));
}

#[test]
fn compound_auto_density_joins_through_both_catalogs() {
    let site = FakeSite::nist();
    let client = site.client();
    let mass = client.xray_coefficients("adipose", false).unwrap();
    let auto = client.xray_coefficients("adipose", true).unwrap();
    assert_eq!(auto.density(), Some(0.95));
    assert!(approx(auto.rows()[0][1], mass.rows()[0][1] * 0.95));

    let calls = site.calls();
    assert!(calls[2].ends_with("tab4.html"));
    assert!(calls[3].ends_with("tab2.html"));
}

#[test]
fn auto_density_for_uncatalogued_compound_is_not_found() {
    let site = FakeSite::nist().xray_page("ComTab/mystery.html", XRAY_WATER);
    let err = site.client().xray_coefficients("mystery", true).unwrap_err();
    assert!(matches!(err, Error::DensityNotFound(_)), "{err}");
}

#[test]
fn unknown_materials_surface_as_not_found() {
    let site = FakeSite::nist();
    let client = site.client();
    assert!(client.xray_coefficients(99, false).unwrap_err().is_not_found());
    assert!(client.xray_coefficients("nosuch", false).unwrap_err().is_not_found());
}

#[test]
fn invalid_inputs_fail_without_a_request() {
    let site = FakeSite::nist();
    let client = site.client();
    assert!(matches!(client.xray_coefficients(0, false), Err(Error::InvalidIdentifier(_))));
    assert!(matches!(
        client.xray_coefficients("../tab1", false),
        Err(Error::InvalidIdentifier(_))
    ));
    assert!(matches!(client.xray_coefficients(13, -2.0), Err(Error::InvalidDensity(_))));
    assert!(site.calls().is_empty());
}

#[test]
fn element_catalog() {
    let site = FakeSite::nist();
    let client = site.client();
    let elements = client.elements().unwrap();

    let zs: Vec<u32> = elements.iter().map(|e| e.z).collect();
    assert_eq!(zs, vec![1, 4, 13, 85]);
    let al = &elements[2];
    assert_eq!((al.symbol.as_str(), al.name.as_str()), ("Al", "Aluminum"));
    assert_eq!(al.mass_ratio, 0.48181);
    assert_eq!(al.excitation, 166.0);
    assert!(!al.has_nominal_density());
    assert!(elements[3].has_nominal_density());

    for e in &elements {
        let t = e.coefficients_with(&client, false).unwrap();
        assert!(!t.is_empty(), "{}", e.name);
    }
    let scaled = al.coefficients_with(&client, true).unwrap();
    assert_eq!(scaled.density(), Some(2.699));

    // placeholder density is applied as published
    let at = &elements[3];
    let mass = at.coefficients_with(&client, false).unwrap();
    let nominal = at.coefficients_with(&client, true).unwrap();
    assert_eq!(nominal.density(), Some(10.0));
    assert!(approx(nominal.rows()[0][1], mass.rows()[0][1] * 10.0));
}

#[test]
fn compound_catalog_reports_unjoined_rows() {
    let site = FakeSite::nist();
    let client = site.client();
    let catalog = client.compound_catalog().unwrap();

    let names: Vec<&str> = catalog.records.iter().map(|c| c.short_name.as_str()).collect();
    assert_eq!(names, vec!["adipose", "tissue", "water"]);
    assert_eq!(catalog.unmatched, vec!["Bone, Cortical (ICRU-44)".to_string()]);

    let tissue = &catalog.records[1];
    assert_eq!(tissue.name, "Tissue, Soft (ICRU-44)");
    assert_eq!(tissue.density, 1.06);
    assert_eq!(tissue.composition, "1: 0.102000; 6: 0.143000");

    for c in &catalog.records {
        let t = c.coefficients_with(&client, false).unwrap();
        assert!(!t.is_empty(), "{}", c.short_name);
        assert_eq!(t.density(), None);
    }

    let water = &catalog.records[2];
    let t = water.coefficients_with(&client, true).unwrap();
    assert_eq!(t.density(), Some(1.0));

    assert_eq!(client.compounds().unwrap(), catalog.records);
}

#[test]
#[ignore = "hits physics.nist.gov"]
fn live_catalogs() {
    let elements = physdata::fetch_elements().unwrap();
    assert!(elements.len() >= 92);
    let catalog = physdata::fetch_compound_catalog().unwrap();
    assert!(!catalog.records.is_empty());
    let water = physdata::fetch_xray_coefficients("water", true).unwrap();
    assert!(!water.is_empty());
}
