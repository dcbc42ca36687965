use std::fs;
use std::path::Path;

use vote_topology::config::Dataset;
use vote_topology::{
    load_counties, run_batch, save_counties, Affiliation, Error, HomologyConfig, RenderOptions,
    RunConfig,
};

const VA_2016: &str = "\
County,\"Voted (0=R, 1=D)\",Neighbors
Arlington,1,Fairfax; Alexandria
Fairfax,1,Arlington; Alexandria; Loudoun; Prince William
Alexandria,1,Arlington; Fairfax
Loudoun,0,Fairfax; Prince William
Prince William,0,Fairfax; Loudoun
";

const VA_2020: &str = "\
County,\"Voted (0=R, 1=D)\",Neighbors
Arlington,1,Fairfax; Alexandria
Fairfax,1,Arlington; Alexandria; Loudoun; Prince William
Alexandria,1,Arlington; Fairfax
Loudoun,1,Fairfax; Prince William
Prince William,1,Fairfax; Loudoun
";

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_batch_over_two_years() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let config = RunConfig {
        datasets: vec![
            Dataset::new("VA2016_", write(dir.path(), "VA2016.csv", VA_2016)),
            Dataset::new("VA2020_", write(dir.path(), "VA2020.csv", VA_2020)),
        ],
        affiliations: Affiliation::ALL.to_vec(),
        homology: HomologyConfig::default(),
        output_dir: Some(out.clone()),
        render: RenderOptions::default(),
    };

    let report = run_batch(&config).unwrap();
    assert_eq!(report.reports.len(), 4);

    // 2016: Arlington-Fairfax-Alexandria triangle; Loudoun-Prince William edge
    let dem_2016 = &report.reports[1];
    assert_eq!((dem_2016.label.as_str(), dem_2016.vote), ("VA2016_", 1));
    assert_eq!(dem_2016.betti.to_vec(), vec![1, 0, 0]);
    let rep_2016 = &report.reports[0];
    assert_eq!(rep_2016.betti.to_vec(), vec![1, 0]);

    // 2020: two triangles glued at Fairfax
    let dem_2020 = &report.reports[3];
    assert_eq!(dem_2020.simplices, 2);
    assert_eq!(dem_2020.betti.to_vec(), vec![1, 0, 0]);
    assert!(report.reports[2].betti.is_empty());

    for name in ["VA2016_0.svg", "VA2016_1.svg", "VA2020_0.svg", "VA2020_1.svg"] {
        let svg = fs::read_to_string(out.join(name)).unwrap();
        assert!(svg.starts_with("<svg"), "{name} should be an SVG document");
    }

    let dem = report.comparison(Affiliation::Democrat).unwrap();
    assert_eq!(dem.entries.len(), 2);
    assert_eq!(dem.deltas()[0].delta, vec![0, 0, 0]);
}

#[test]
fn test_batch_without_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        datasets: vec![Dataset::new("VA2016_", write(dir.path(), "VA2016.csv", VA_2016))],
        affiliations: vec![Affiliation::Democrat],
        homology: HomologyConfig::with_max_dimension(1),
        output_dir: None,
        render: RenderOptions::default(),
    };

    let report = run_batch(&config).unwrap();
    assert_eq!(report.reports.len(), 1);
    assert_eq!(report.reports[0].betti.to_vec(), vec![1, 0]);
    assert!(report.reports[0].image.is_none());
}

#[test]
fn test_missing_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig {
        datasets: vec![
            Dataset::new("VA2016_", write(dir.path(), "VA2016.csv", VA_2016)),
            Dataset::new("VA2012_", dir.path().join("VA2012.csv")),
        ],
        affiliations: Affiliation::ALL.to_vec(),
        homology: HomologyConfig::default(),
        output_dir: None,
        render: RenderOptions::default(),
    };

    let err = run_batch(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_unknown_neighbor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.csv",
        "County,\"Voted (0=R, 1=D)\",Neighbors\nA,1,B\n",
    );
    let err = load_counties(&path).unwrap_err();
    assert!(err.to_string().contains("unknown neighbor"));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let original = load_counties(write(dir.path(), "VA2016.csv", VA_2016)).unwrap();

    let copy = dir.path().join("copy.csv");
    save_counties(&copy, &original).unwrap();
    let reloaded = load_counties(&copy).unwrap();

    assert_eq!(reloaded.adjacency(), original.adjacency());
    assert!(reloaded.is_symmetric());
}

#[test]
fn test_sample_manifest() {
    let manifest_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/datasets.toml");
    let manifest = vote_topology::Manifest::load(&manifest_path).unwrap();
    assert_eq!(manifest.datasets.len(), 2);

    let config = RunConfig {
        datasets: manifest.datasets,
        affiliations: Affiliation::ALL.to_vec(),
        homology: HomologyConfig::default(),
        output_dir: None,
        render: RenderOptions::default(),
    };
    let report = run_batch(&config).unwrap();

    let betti: Vec<Vec<usize>> = report.reports.iter().map(|r| r.betti.to_vec()).collect();
    assert_eq!(
        betti,
        vec![vec![1, 0], vec![1, 0, 0], vec![1, 0], vec![1, 0, 0]]
    );
    assert_eq!(report.reports[3].counties, 6);
}
