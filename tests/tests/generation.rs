//! Cross-dialect generation behavior: idempotence, all-or-nothing failure,
//! and the Marriage end-to-end scenario.

use crom_tests::prelude::*;

fn each_generator(set: &GeneratorSet) -> impl Iterator<Item = &dyn Generator> {
    let extensions: Vec<_> = set.extensions().collect();
    extensions
        .into_iter()
        .map(move |ext| set.find(ext).expect("registered extension resolves"))
}

#[test]
fn test_generation_is_idempotent_for_every_dialect() {
    let set = GeneratorSet::standard();
    for model in [marriage_model(), banking_model()] {
        for generator in each_generator(&set) {
            let first = generator.generate("model", &model).unwrap();
            let second = generator.generate("model", &model).unwrap();
            assert_eq!(first, second, "dialect {}", generator.extension());
        }
    }
}

#[test]
fn test_empty_model_fails_every_dialect() {
    let set = GeneratorSet::standard();
    let model = empty_model();
    for generator in each_generator(&set) {
        assert_eq!(
            generator.generate("empty", &model),
            Err(GenerateError::EmptyModel),
            "dialect {}",
            generator.extension()
        );
    }
}

#[test]
fn test_unresolved_reference_fails_every_dialect() {
    let set = GeneratorSet::standard();
    let model = dangling_model();
    for generator in each_generator(&set) {
        assert_eq!(
            generator.generate("dangling", &model),
            Err(GenerateError::UnresolvedReference {
                role: "Stranger".to_string(),
                compartment: "Marriage".to_string(),
            }),
            "dialect {}",
            generator.extension()
        );
    }
}

#[test]
fn test_marriage_formal_output() {
    let set = GeneratorSet::standard();
    let model = marriage_model();
    let text = set.find("formal").unwrap().generate("marriage", &model).unwrap();

    assert!(text.contains("RoleGroup([Husband],1,1)"));
    assert!(text.contains("RoleGroup([Wife],1,1)"));
    assert!(text.contains(
        "rel(married, Marriage) = (RoleGroup([Husband],1,1), RoleGroup([Wife],1,1))"
    ));
    assert!(text.contains("card(married, Marriage) = ((1,1), (1,1))"));
}

#[test]
fn test_marriage_ontology_output() {
    let set = GeneratorSet::standard();
    let model = marriage_model();
    let text = set.find("owl").unwrap().generate("marriage", &model).unwrap();

    assert!(text.contains("Declaration(Class(:Husband))"));
    assert!(text.contains("SubClassOf(:Husband :RoleType)"));
    assert!(text.contains("Declaration(Class(:Wife))"));
    assert!(text.contains("SubClassOf(:Wife :RoleType)"));
    assert!(text.contains("Declaration(ObjectProperty(:married))"));
    assert!(text.contains("SubClassOf(:Husband ObjectMinCardinality(1 :married :Wife))"));
    assert!(text.contains("SubClassOf(:Husband ObjectMaxCardinality(1 :married :Wife))"));
}

#[test]
fn test_base_name_appears_in_every_dialect() {
    let set = GeneratorSet::standard();
    let model = marriage_model();
    for generator in each_generator(&set) {
        let text = generator.generate("wedding", &model).unwrap();
        assert!(
            text.contains("wedding"),
            "dialect {} lost the base name",
            generator.extension()
        );
    }
}

#[test]
fn test_nested_group_round_trips_through_formal_dialect() {
    let set = GeneratorSet::standard();
    let model = banking_model();
    let text = set.find("formal").unwrap().generate("bank", &model).unwrap();

    // The nested group keeps its bracketed form inside the outer group.
    assert!(text.contains("RoleGroup([RoleGroup([Clerk,Teller],1,2)],0,inf)"));
}
