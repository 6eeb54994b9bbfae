use std::fs;

use crate::benchmark::{BenchmarkSpec, VALUE_RANGE, WEIGHT_RANGE, write_instance_file};

#[test]
fn test_generated_file_layout_for_500_items() {
    let dir = tempfile::tempdir().unwrap();
    let spec = BenchmarkSpec::default();
    let path = dir.path().join(spec.default_file_name());

    write_instance_file(&path, &spec, Some(2024)).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1 + 3 * 500);
    assert_eq!(lines[0], "security van capacity: 295");

    for (i, chunk) in lines[1..].chunks(3).enumerate() {
        assert_eq!(chunk[0].trim(), format!("bag {}:", i + 1));

        let weight: f64 = chunk[1].trim().strip_prefix("weight: ").unwrap().parse().unwrap();
        assert!(WEIGHT_RANGE.contains(&weight));
        let decimals = chunk[1].rsplit('.').next().unwrap();
        assert_eq!(decimals.len(), 1);

        let value: u32 = chunk[2].trim().strip_prefix("value: ").unwrap().parse().unwrap();
        assert!(VALUE_RANGE.contains(&value));
    }
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let spec = BenchmarkSpec {
        capacity: 100,
        item_count: 25,
    };
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");

    write_instance_file(&a, &spec, Some(9)).unwrap();
    write_instance_file(&b, &spec, Some(9)).unwrap();

    assert_eq!(fs::read_to_string(a).unwrap(), fs::read_to_string(b).unwrap());
}
