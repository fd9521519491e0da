//! Generator registry dispatch behavior.

use crom_tests::prelude::*;

#[test]
fn test_standard_set_registers_four_dialects() {
    let set = GeneratorSet::standard();
    let extensions: Vec<_> = set.extensions().collect();
    assert_eq!(extensions, vec!["owl", "formal", "rsql", "scroll"]);
}

#[test]
fn test_find_returns_matching_generator() {
    let set = GeneratorSet::standard();
    for ext in ["owl", "formal", "rsql", "scroll"] {
        assert_eq!(set.find(ext).unwrap().extension(), ext);
    }
}

#[test]
fn test_unknown_extension_is_a_reportable_outcome() {
    let set = GeneratorSet::standard();
    match set.find("xyz") {
        Err(DispatchError::UnknownExtension { requested, known }) => {
            assert_eq!(requested, "xyz");
            assert_eq!(known, vec!["owl", "formal", "rsql", "scroll"]);
        }
        Ok(_) => panic!("'xyz' must not resolve to a generator"),
    }
}

#[test]
fn test_generators_are_reusable_across_models() {
    let set = GeneratorSet::standard();
    let generator = set.find("formal").unwrap();

    let first = generator.generate("marriage", &marriage_model()).unwrap();
    let _ = generator.generate("bank", &banking_model()).unwrap();
    let again = generator.generate("marriage", &marriage_model()).unwrap();

    // No state leaks between calls.
    assert_eq!(first, again);
}
