/*!
 * Region Lifecycle Tests
 * Creation, head insertion, iteration and bulk release
 */

use pretty_assertions::assert_eq;
use rbmm::{AllocatorHandle, Region, ReleaseReport};

fn contents(region: &Region) -> Vec<String> {
    region.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_end_to_end_scenario() {
    let allocator = AllocatorHandle::system();
    let mut region = Region::new(allocator.clone()).unwrap();

    region.add(b"alpha").unwrap();
    region.add(b"b").unwrap();
    region.add(b"cc").unwrap();

    assert_eq!(region.len(), 3);
    assert_eq!(contents(&region), vec!["cc", "b", "alpha"]);
    let lengths: Vec<usize> = region.iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![2, 1, 5]);

    let report = region.destroy();
    assert_eq!(
        report,
        ReleaseReport {
            nodes: 3,
            strings: 3,
            payload_bytes: 8,
        }
    );

    let stats = allocator.stats();
    assert_eq!(stats.strings.allocated, 3);
    assert_eq!(stats.strings.released, 3);
    assert_eq!(stats.nodes.allocated, 3);
    assert_eq!(stats.nodes.released, 3);
    assert_eq!(stats.regions.released, 1);
    assert_eq!(stats.bytes_in_use, 0);
}

#[test]
fn test_create_then_destroy() {
    let allocator = AllocatorHandle::system();
    let region = Region::new(allocator.clone()).unwrap();
    assert_eq!(allocator.stats().regions.live, 1);

    assert_eq!(region.destroy(), ReleaseReport::default());

    let stats = allocator.stats();
    assert_eq!(stats.regions.allocated, 1);
    assert_eq!(stats.regions.released, 1);
    assert_eq!(stats.nodes.allocated, 0);
    assert_eq!(stats.strings.allocated, 0);
}

#[test]
fn test_copy_semantics() {
    let mut region = Region::with_system().unwrap();
    let mut source = b"mutable".to_vec();
    region.add(&source).unwrap();

    source[0] = b'M';
    source.clear();

    assert_eq!(region.head().unwrap(), "mutable");
}

#[test]
fn test_regions_are_independent() {
    let allocator = AllocatorHandle::system();
    let mut first = Region::new(allocator.clone()).unwrap();
    let mut second = Region::new(allocator.clone()).unwrap();
    assert_ne!(first.id(), second.id());

    first.add(b"one").unwrap();
    second.add(b"two").unwrap();
    second.add(b"three").unwrap();

    let report = first.destroy();
    assert_eq!(report.nodes, 1);
    assert_eq!(contents(&second), vec!["three", "two"]);
    assert_eq!(allocator.stats().nodes.live, 2);

    drop(second);
    assert_eq!(allocator.stats().live_records(), 0);
}

#[test]
fn test_build_tool_strings() {
    let mut region = Region::with_system().unwrap();
    region.join(" ", &["cc", "-o", "main.out", "main.c"]).unwrap();
    region.path(&["examples", "test", "main.c"]).unwrap();

    assert_eq!(region.len(), 2);
    let sep = std::path::MAIN_SEPARATOR;
    assert_eq!(
        contents(&region),
        vec![
            format!("examples{sep}test{sep}main.c"),
            "cc -o main.out main.c".to_string()
        ]
    );
}

#[test]
fn test_binary_payloads() {
    let mut region = Region::with_system().unwrap();
    region.add(&[0, 159, 146, 150]).unwrap();
    region.add(b"").unwrap();

    let head = region.head().unwrap();
    assert!(head.is_empty());
    let tail = region.iter().nth(1).unwrap();
    assert_eq!(tail.as_bytes(), &[0, 159, 146, 150]);
    assert_eq!(tail.as_str(), None);
    assert_eq!(region.byte_len(), 4);
}
