use chrono::NaiveDate;
use petfarm_core::{
    Entity, EntityId, Pet, PetKind, PetRepository, RepoError, Repository, ValidationError,
};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn pet(name: &str, kind: PetKind) -> Pet {
    Pet::new(name, kind, date(2019, 4, 12))
}

fn add_new(repo: &mut PetRepository, pet: Pet) -> EntityId {
    repo.add(pet)
        .expect("valid pet should be stored")
        .id
        .expect("stored pet should carry an id")
}

#[test]
fn add_assigns_unique_ids() {
    let mut repo = PetRepository::new();
    let mut seen = HashSet::new();

    for idx in 0..50 {
        let id = add_new(&mut repo, pet(&format!("pet {idx}"), PetKind::Cat));
        assert!(seen.insert(id), "id reused: {id}");
    }
    assert_eq!(repo.len(), 50);
}

#[test]
fn fresh_add_after_max_id_fails_instead_of_reusing_it() {
    let mut repo = PetRepository::new();
    let last = Pet {
        id: Some(EntityId::MAX),
        ..pet("Last", PetKind::Horse)
    };
    assert_eq!(add_new(&mut repo, last), EntityId::MAX);

    let err = repo
        .add(pet("Next", PetKind::Dog))
        .expect_err("no fresh id remains after the max id");
    assert_eq!(err, RepoError::IdsExhausted);

    let ids = repo
        .list()
        .into_iter()
        .map(|pet| pet.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), repo.len());
    assert_eq!(repo.len(), 1);
}

#[test]
fn get_after_add_returns_equal_entity() {
    let mut repo = PetRepository::new();
    let mut original = pet("Rex", PetKind::Dog);
    original.teach("sit");

    let stored = repo
        .add(original.clone())
        .expect("valid pet should be stored");
    let loaded = repo
        .get(stored.id.expect("stored pet should carry an id"))
        .expect("stored pet should be readable");

    assert_eq!(loaded, stored);
    assert_eq!(loaded.name, original.name);
    assert_eq!(loaded.commands, vec!["sit".to_string()]);
}

#[test]
fn remove_then_get_returns_not_found() {
    let mut repo = PetRepository::new();
    let id = add_new(&mut repo, pet("Bella", PetKind::Hamster));

    let removed = repo.remove(id).expect("stored pet should be removable");
    assert_eq!(removed.id, Some(id));

    let err = repo.get(id).expect_err("removed pet must be gone");
    assert_eq!(err, RepoError::NotFound(id));
}

#[test]
fn update_then_get_returns_new_entity() {
    let mut repo = PetRepository::new();
    let id = add_new(&mut repo, pet("Sandy", PetKind::Camel));

    let mut replacement = Pet::new("Dune", PetKind::Donkey, date(2015, 1, 3));
    replacement.teach("carry");
    let updated = repo
        .update(id, replacement.clone())
        .expect("update of stored pet should succeed");

    replacement.assign_id(id);
    assert_eq!(updated, replacement);
    assert_eq!(
        repo.get(id).expect("updated pet should be readable"),
        replacement
    );
}

#[test]
fn update_keeps_stored_id_even_if_entity_carries_another() {
    let mut repo = PetRepository::new();
    let id = add_new(&mut repo, pet("Storm", PetKind::Horse));

    let mut replacement = pet("Thunder", PetKind::Horse);
    replacement.id = Some(999);
    let updated = repo
        .update(id, replacement)
        .expect("update of stored pet should succeed");

    assert_eq!(updated.id, Some(id));
    assert!(matches!(repo.get(999), Err(RepoError::NotFound(999))));
}

#[test]
fn missing_ids_return_not_found_for_every_operation() {
    let mut repo = PetRepository::new();

    assert_eq!(
        repo.get(42).expect_err("empty repo has no pet 42"),
        RepoError::NotFound(42)
    );
    assert_eq!(
        repo.update(42, pet("Ghost", PetKind::Cat))
            .expect_err("empty repo cannot update pet 42"),
        RepoError::NotFound(42)
    );
    assert_eq!(
        repo.remove(42).expect_err("empty repo cannot remove pet 42"),
        RepoError::NotFound(42)
    );
}

#[test]
fn list_length_tracks_adds_minus_removes() {
    let mut repo = PetRepository::new();
    let ids = (0..6)
        .map(|idx| add_new(&mut repo, pet(&format!("p{idx}"), PetKind::Dog)))
        .collect::<Vec<_>>();

    repo.remove(ids[1]).expect("pet 2 should be removable");
    repo.remove(ids[4]).expect("pet 5 should be removable");
    repo.remove(ids[4])
        .expect_err("second remove of the same id must fail");

    assert_eq!(repo.list().len(), 6 - 2);
}

#[test]
fn list_preserves_insertion_order() {
    let mut repo = PetRepository::new();
    add_new(&mut repo, pet("first", PetKind::Dog));
    add_new(
        &mut repo,
        Pet {
            id: Some(100),
            ..pet("imported", PetKind::Cat)
        },
    );
    add_new(&mut repo, pet("third", PetKind::Horse));

    let names = repo
        .list()
        .into_iter()
        .map(|pet| pet.name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["first", "imported", "third"]);
}

#[test]
fn add_rejects_duplicate_caller_supplied_id() {
    let mut repo = PetRepository::new();
    let id = add_new(&mut repo, pet("Rex", PetKind::Dog));

    let clash = Pet {
        id: Some(id),
        ..pet("Impostor", PetKind::Dog)
    };
    let err = repo.add(clash).expect_err("taken id must be rejected");
    assert_eq!(err, RepoError::DuplicateId(id));
    assert_eq!(repo.len(), 1);
}

#[test]
fn add_rejects_invalid_pet() {
    let mut repo = PetRepository::new();

    let err = repo
        .add(pet("   ", PetKind::Dog))
        .expect_err("blank name must be rejected");
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError { field: "name", .. })
    ));
    assert!(repo.is_empty());
}

#[test]
fn add_list_remove_scenario() {
    let mut repo = PetRepository::new();
    let a = repo
        .add(pet("A", PetKind::Cat))
        .expect("valid pet should be stored");
    assert_eq!(repo.list(), vec![a.clone()]);

    let id = a.id.expect("stored pet should carry an id");
    repo.remove(id).expect("stored pet should be removable");
    assert!(repo.list().is_empty());
    assert_eq!(
        repo.get(id).expect_err("removed pet must be gone"),
        RepoError::NotFound(id)
    );
}

fn add_through<R: Repository<Pet>>(mut repo: R, pet: Pet) -> Pet {
    repo.add(pet).expect("valid pet should be stored")
}

#[test]
fn borrowed_repository_writes_through_to_owner() {
    let mut owner = PetRepository::new();
    let stored = add_through(&mut owner, pet("Through", PetKind::Dog));

    assert_eq!(owner.len(), 1);
    let id = stored.id.expect("stored pet should carry an id");
    assert_eq!(
        owner.get(id).expect("owner should see the pet").name,
        "Through"
    );
}
