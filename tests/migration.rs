//! End-to-end tests for the legacy menu migration.

use menukit::migrate::{LegacyItemRow, LegacySetRow, LegacyTables, migrate_legacy_menus};
use menukit::test_harness::{FakeLocales, FakePage, FakeSite};
use menukit::{LinkType, Locale, MenuItem, MenuSet, MenuStore, MigrationOutcome, PageId};

fn legacy_item(id: u64, set: u64) -> LegacyItemRow {
    LegacyItemRow {
        id,
        menu_set_id: set,
        class_name: Some("MenuItem".to_string()),
        menu_title: None,
        link: None,
        page_id: None,
        file_id: None,
        sort: 0,
        is_new_window: false,
        anchor: None,
        extra: Default::default(),
    }
}

fn site() -> FakeSite {
    let mut site = FakeSite::new();
    site.add_page(5, FakePage::new("About us", "about-us", "/about-us/"));
    site
}

#[test]
fn footer_scenario_migrates_one_internal_item() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Footer".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![],
    };

    let outcome =
        migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let report = match outcome {
        MigrationOutcome::Migrated(r) => r,
        MigrationOutcome::Skipped { reason } => panic!("skipped: {reason}"),
    };
    assert_eq!(report.sets_created, 1);
    assert_eq!(report.items_migrated, 1);

    let set = store.set_by_name("Footer").expect("footer set");
    let items = store.items_of(set.id);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].link_type, Some(LinkType::Internal));
    assert_eq!(items[0].page_ref, Some(PageId::new(5)));
    assert_eq!(items[0].url, None);
    // title defaulting ran through the normal save path
    assert_eq!(items[0].title(), Some("About us"));
}

#[test]
fn page_reference_wins_and_literal_link_is_dropped() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Main".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            link: Some("https://stale.example".to_string()),
            ..legacy_item(10, 1)
        }],
        localisations: vec![],
    };

    migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let set = store.set_by_name("Main").expect("set");
    let item = store.items_of(set.id)[0].clone();
    assert_eq!(item.link_type, Some(LinkType::Internal));
    assert_eq!(item.url, None);
}

#[test]
fn derivation_precedence_file_then_external_then_undetermined() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Main".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![
            LegacyItemRow {
                file_id: Some(9),
                link: Some("https://ignored.example".to_string()),
                ..legacy_item(10, 1)
            },
            LegacyItemRow {
                link: Some("https://kept.example".to_string()),
                sort: 1,
                ..legacy_item(11, 1)
            },
            LegacyItemRow {
                page_id: Some(0), // legacy zero means unset
                sort: 2,
                ..legacy_item(12, 1)
            },
        ],
        localisations: vec![],
    };

    migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let set = store.set_by_name("Main").expect("set");
    let items: Vec<MenuItem> = store.items_of(set.id).into_iter().cloned().collect();
    assert_eq!(items[0].link_type, Some(LinkType::File));
    assert_eq!(items[0].url, None);
    assert_eq!(items[1].link_type, Some(LinkType::External));
    assert_eq!(items[1].url, Some("https://kept.example".to_string()));
    assert_eq!(items[2].link_type, None);
    assert_eq!(items[2].page_ref, None);
}

#[test]
fn existing_set_is_reused_and_its_items_replaced() {
    let mut store = MenuStore::new();
    let site = site();

    let set_id = store.allocate_set_id();
    store.put_set(MenuSet::new(set_id, "Footer"));

    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Footer".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![],
    };

    let outcome =
        migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let report = match outcome {
        MigrationOutcome::Migrated(r) => r,
        MigrationOutcome::Skipped { reason } => panic!("skipped: {reason}"),
    };
    assert_eq!(report.sets_created, 0);
    assert_eq!(report.sets_reused, 1);
    assert_eq!(store.set_count(), 1);
    assert_eq!(store.items_of(set_id).len(), 1);
}

#[test]
fn duplicate_legacy_set_rows_wipe_and_recreate_items() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![
            LegacySetRow {
                id: 1,
                name: "Footer".to_string(),
                tenant_id: None,
            },
            LegacySetRow {
                id: 2,
                name: "Footer".to_string(),
                tenant_id: None,
            },
        ],
        menu_items: vec![
            LegacyItemRow {
                page_id: Some(5),
                ..legacy_item(10, 1)
            },
            LegacyItemRow {
                link: Some("https://example.org".to_string()),
                ..legacy_item(11, 2)
            },
        ],
        localisations: vec![],
    };

    let outcome =
        migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let report = match outcome {
        MigrationOutcome::Migrated(r) => r,
        MigrationOutcome::Skipped { reason } => panic!("skipped: {reason}"),
    };
    // the second row reuses the set created by the first and replaces its item
    assert_eq!(report.sets_created, 1);
    assert_eq!(report.sets_reused, 1);
    assert_eq!(report.items_wiped, 1);
    assert_eq!(store.set_count(), 1);
    let set = store.set_by_name("Footer").expect("set");
    let items = store.items_of(set.id);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].link_type, Some(LinkType::External));
}

#[test]
fn empty_legacy_relation_aborts_without_writes() {
    let mut store = MenuStore::new();
    let site = FakeSite::new();
    let outcome =
        migrate_legacy_menus(&mut store, &LegacyTables::default(), &site, &site, None)
            .expect("migration");
    assert!(matches!(outcome, MigrationOutcome::Skipped { ref reason } if reason.contains("no menus")));
    assert_eq!(store.set_count(), 0);
}

#[test]
fn second_run_is_skipped_by_the_global_guard() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Footer".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![],
    };

    let first = migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("first run");
    assert!(matches!(first, MigrationOutcome::Migrated(_)));
    let before = store.item_count();

    let second =
        migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("second run");
    assert!(matches!(second, MigrationOutcome::Skipped { ref reason } if reason.contains("already")));
    assert_eq!(store.item_count(), before);
    assert_eq!(store.set_count(), 1);
}

#[test]
fn set_without_items_is_logged_and_skipped() {
    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![
            LegacySetRow {
                id: 1,
                name: "Empty".to_string(),
                tenant_id: None,
            },
            LegacySetRow {
                id: 2,
                name: "Main".to_string(),
                tenant_id: None,
            },
        ],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 2)
        }],
        localisations: vec![],
    };

    let outcome =
        migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let report = match outcome {
        MigrationOutcome::Migrated(r) => r,
        MigrationOutcome::Skipped { reason } => panic!("skipped: {reason}"),
    };
    assert_eq!(report.sets_without_items, vec!["Empty".to_string()]);
    // the empty set itself was still created
    assert!(store.set_by_name("Empty").is_some());
    assert_eq!(report.items_migrated, 1);
}

#[test]
fn tenant_scoped_lookup_reuses_the_right_set() {
    let mut store = MenuStore::new();
    let site = site();

    let unscoped = store.allocate_set_id();
    store.put_set(MenuSet::new(unscoped, "Footer"));

    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Footer".to_string(),
            tenant_id: Some(7),
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![],
    };

    migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    // the unscoped Footer does not match the tenant-scoped filter
    assert_eq!(store.set_count(), 2);
    assert!(store.items_of(unscoped).is_empty());
}

#[test]
fn localised_fields_carry_over_per_locale() {
    use menukit::migrate::LegacyLocalisedRow;

    let mut store = MenuStore::new();
    let site = site();
    let locales = FakeLocales::parse(&["de_CH", "fr"]);

    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Main".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            menu_title: Some("About".to_string()),
            ..legacy_item(10, 1)
        }],
        localisations: vec![
            LegacyLocalisedRow {
                id: 1,
                record_id: 10,
                locale: "de_CH".to_string(),
                menu_title: Some("Über uns".to_string()),
                url: None,
                anchor: None,
            },
            LegacyLocalisedRow {
                id: 2,
                record_id: 99, // belongs to some other legacy item
                locale: "fr".to_string(),
                menu_title: Some("À propos".to_string()),
                url: None,
                anchor: None,
            },
        ],
    };

    migrate_legacy_menus(&mut store, &legacy, &site, &site, Some(&locales)).expect("migration");
    let set = store.set_by_name("Main").expect("set");
    let item = store.items_of(set.id)[0];

    let de = Locale::parse("de_CH").expect("locale");
    let fr = Locale::parse("fr").expect("locale");
    assert_eq!(item.title_for(&de), Some("Über uns"));
    // no fr row for this item: falls back to the base title
    assert_eq!(item.title_for(&fr), Some("About"));
}

#[test]
fn localised_rows_with_no_content_are_skipped_and_not_counted() {
    use menukit::migrate::LegacyLocalisedRow;

    let mut store = MenuStore::new();
    let site = site();
    let locales = FakeLocales::parse(&["de_CH", "fr"]);

    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Main".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![
            LegacyLocalisedRow {
                id: 1,
                record_id: 10,
                locale: "de_CH".to_string(),
                menu_title: None,
                url: None,
                anchor: None,
            },
            LegacyLocalisedRow {
                id: 2,
                record_id: 10,
                locale: "fr".to_string(),
                menu_title: Some("À propos".to_string()),
                url: None,
                anchor: None,
            },
        ],
    };

    let outcome = migrate_legacy_menus(&mut store, &legacy, &site, &site, Some(&locales))
        .expect("migration");
    let report = match outcome {
        MigrationOutcome::Migrated(r) => r,
        MigrationOutcome::Skipped { reason } => panic!("skipped: {reason}"),
    };
    assert_eq!(report.localised_rows, 1);

    let set = store.set_by_name("Main").expect("set");
    let item = store.items_of(set.id)[0];
    assert_eq!(item.localized.len(), 1);
    // every localised application was a full save, so the blank base title
    // was derived on the way through
    assert_eq!(item.title(), Some("About us"));
    let fr = Locale::parse("fr").expect("locale");
    assert_eq!(item.title_for(&fr), Some("À propos"));
}

#[test]
fn localisation_is_ignored_without_a_provider() {
    use menukit::migrate::LegacyLocalisedRow;

    let mut store = MenuStore::new();
    let site = site();
    let legacy = LegacyTables {
        menu_sets: vec![LegacySetRow {
            id: 1,
            name: "Main".to_string(),
            tenant_id: None,
        }],
        menu_items: vec![LegacyItemRow {
            page_id: Some(5),
            ..legacy_item(10, 1)
        }],
        localisations: vec![LegacyLocalisedRow {
            id: 1,
            record_id: 10,
            locale: "de_CH".to_string(),
            menu_title: Some("Über uns".to_string()),
            url: None,
            anchor: None,
        }],
    };

    migrate_legacy_menus(&mut store, &legacy, &site, &site, None).expect("migration");
    let set = store.set_by_name("Main").expect("set");
    assert!(store.items_of(set.id)[0].localized.is_empty());
}

#[test]
fn legacy_tables_parse_from_json() {
    let raw = r#"{
        "menu_sets": [{"id": 1, "name": "Footer"}],
        "menu_items": [{
            "id": 10, "menu_set_id": 1, "page_id": 5,
            "link": null, "file_id": null, "sort": 3,
            "obsolete_column": "dropped"
        }]
    }"#;
    let tables = LegacyTables::from_json(raw).expect("parse");
    assert_eq!(tables.menu_sets.len(), 1);
    assert_eq!(tables.menu_items[0].sort, 3);
    assert!(tables.menu_items[0].extra.contains_key("obsolete_column"));
}
