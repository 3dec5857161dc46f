use std::io::{self, Write};

use hgprop_common::io::{
    read_hypergraphs, read_hypergraphs_from_file, to_set_of_sets_string, write_hypergraphs,
    write_hypergraphs_to_file,
};
use hgprop_common::{Hypergraph, HypergraphError};

fn family() -> Vec<Hypergraph<u32>> {
    vec![
        Hypergraph::from_edges([vec![1, 2], vec![2, 3]]).unwrap(),
        Hypergraph::from_edges([vec![1, 2, 3], vec![3, 4], vec![2, 4]]).unwrap(),
        Hypergraph::from_edges([vec![10], vec![2, 10]]).unwrap(),
    ]
}

#[test]
fn file_round_trip_preserves_edge_sets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.txt");
    let original = family();

    write_hypergraphs_to_file(&path, &original).unwrap();
    let back: Vec<Hypergraph<u32>> = read_hypergraphs_from_file(&path).unwrap();
    assert_eq!(back, original);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{{1, 2}, {2, 3}}\n{{2, 4}, {3, 4}, {1, 2, 3}}\n{{10}, {10, 2}}\n"
    );
}

#[test]
fn rewriting_truncates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.txt");
    write_hypergraphs_to_file(&path, &family()).unwrap();
    write_hypergraphs_to_file(&path, &family()[..1]).unwrap();
    let back: Vec<Hypergraph<u32>> = read_hypergraphs_from_file(&path).unwrap();
    assert_eq!(back.len(), 1);
}

#[test]
fn isolated_vertices_are_not_persisted() {
    let h = Hypergraph::from_parts([1, 2, 3], [vec![1, 2]]).unwrap();
    let back: Vec<Hypergraph<u32>> = read_hypergraphs(to_set_of_sets_string(&h).as_bytes()).unwrap();
    assert_eq!(back[0].num_vertices(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_hypergraphs_from_file::<_, u32>(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, HypergraphError::Io(_)));

    // a directory cannot be opened for writing
    let err = write_hypergraphs_to_file(dir.path(), &family()).unwrap_err();
    assert!(matches!(err, HypergraphError::Io(_)));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_errors_propagate() {
    let err = write_hypergraphs(&mut FailingWriter, &family()).unwrap_err();
    assert!(matches!(err, HypergraphError::Io(e) if e.to_string() == "disk full"));
}

mod property_tests {
    use super::*;
    use hgprop_common::io::parse_set_of_sets;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    #[derive(Clone, Debug)]
    struct Edges(Vec<Vec<u8>>);

    impl Arbitrary for Edges {
        fn arbitrary(g: &mut Gen) -> Self {
            let count = usize::arbitrary(g) % 6;
            Self(
                (0..count)
                    .map(|_| {
                        let len = 1 + usize::arbitrary(g) % 4;
                        (0..len).map(|_| u8::arbitrary(g) % 12).collect()
                    })
                    .collect(),
            )
        }
    }

    quickcheck! {
        fn prop_text_form_reparses_to_the_same_hypergraph(edges: Edges) -> bool {
            let h = Hypergraph::from_edges(edges.0).unwrap();
            parse_set_of_sets::<u8>(&to_set_of_sets_string(&h)).is_ok_and(|back| back == h)
        }
    }
}
