use std::path::PathBuf;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "avatargen_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn touch(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for name in names {
        std::fs::write(dir.join(name), b"x").unwrap();
    }
}

fn full_tree(root: &Path) {
    touch(&root.join("background"), &["1.png"]);
    for category in Category::ALL {
        for layer in Layer::CATEGORY_LAYERS {
            touch(
                &root.join(category.dir_name()).join(layer.dir_name()),
                &["1.png"],
            );
        }
    }
}

fn file_names(set: &LayerSet) -> Vec<String> {
    set.iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn layer_dir_is_naturally_sorted() {
    let tmp = temp_dir("catalog_natural");
    let dir = tmp.join("hair");
    touch(&dir, &["10.png", "2.png", "1.png"]);

    let set = read_layer_dir(&dir, &CatalogOpts::default()).unwrap();
    assert_eq!(file_names(&set), ["1.png", "2.png", "10.png"]);
    assert_eq!(set.get(0).unwrap(), dir.join("1.png"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn hidden_entries_and_subdirs_are_skipped() {
    let tmp = temp_dir("catalog_hidden");
    let dir = tmp.join("eye");
    touch(&dir, &["a.png", ".DS_Store", "Thumbs.db", "desktop.ini"]);
    std::fs::create_dir_all(dir.join("nested")).unwrap();

    let set = read_layer_dir(&dir, &CatalogOpts::default()).unwrap();
    assert_eq!(file_names(&set), ["a.png"]);

    let all = read_layer_dir(&dir, &CatalogOpts { skip_hidden: false }).unwrap();
    assert_eq!(all.len(), 4);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn hidden_entry_rules() {
    assert!(is_hidden_entry(".DS_Store"));
    assert!(is_hidden_entry(".gitkeep"));
    assert!(is_hidden_entry("thumbs.db"));
    assert!(is_hidden_entry("Desktop.ini"));
    assert!(!is_hidden_entry("1.png"));
}

#[test]
fn empty_layer_dir_is_a_load_error() {
    let tmp = temp_dir("catalog_empty");
    let dir = tmp.join("mouth");
    touch(&dir, &[".DS_Store"]);

    let err = read_layer_dir(&dir, &CatalogOpts::default()).unwrap_err();
    assert!(matches!(err, AvatarError::AssetLoad(_)));
    assert!(err.to_string().contains("no assets"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn load_reads_every_category() {
    let tmp = temp_dir("catalog_load");
    full_tree(&tmp);
    touch(&tmp.join("male").join("hair"), &["2.png"]);

    let catalog = AssetCatalog::load(&tmp).unwrap();
    assert_eq!(catalog.root(), Some(tmp.as_path()));
    assert_eq!(catalog.categories().collect::<Vec<_>>(), Category::ALL);
    assert_eq!(catalog.background().len(), 1);
    assert_eq!(catalog.resolve(Category::Male).unwrap().hair.len(), 2);
    assert_eq!(catalog.resolve(Category::Female).unwrap().hair.len(), 1);

    let summary = catalog.summary();
    assert_eq!(summary.background, 1);
    assert_eq!(summary.categories[&Category::Male][&Layer::Hair], 2);
    assert_eq!(summary.categories[&Category::Monster].len(), 5);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn load_fails_on_missing_layer_dir() {
    let tmp = temp_dir("catalog_missing");
    full_tree(&tmp);
    std::fs::remove_dir_all(tmp.join("monster").join("eye")).unwrap();

    let err = AssetCatalog::load(&tmp).unwrap_err();
    assert!(matches!(err, AvatarError::AssetLoad(_)));
    assert!(err.to_string().contains("eye"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn load_fails_on_missing_root() {
    let err = AssetCatalog::load(temp_dir("catalog_nowhere")).unwrap_err();
    assert!(matches!(err, AvatarError::AssetLoad(_)));
}

#[test]
fn resolve_rejects_category_absent_from_catalog() {
    let catalog = AssetCatalog::new(LayerSet::new(vec!["bg.png".into()]))
        .with_category(Category::Male, CategoryAssets::default());

    assert!(catalog.resolve(Category::Male).is_ok());
    assert!(matches!(
        catalog.resolve(Category::Monster),
        Err(AvatarError::UnknownCategory(_))
    ));
}

#[test]
fn background_layer_comes_from_shared_set() {
    let male = CategoryAssets {
        face: LayerSet::new(vec!["male/face/1.png".into()]),
        ..CategoryAssets::default()
    };
    let catalog =
        AssetCatalog::new(LayerSet::new(vec!["bg.png".into()])).with_category(Category::Male, male);

    let bg = catalog
        .layer_set(Category::Male, Layer::Background)
        .unwrap();
    assert_eq!(bg.get(0).unwrap(), Path::new("bg.png"));
    let face = catalog.layer_set(Category::Male, Layer::Face).unwrap();
    assert_eq!(face.get(0).unwrap(), Path::new("male/face/1.png"));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_keep_their_raw_path() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let tmp = temp_dir("catalog_non_utf8");
    let dir = tmp.join("hair");
    touch(&dir, &["2.png"]);
    let raw = OsStr::from_bytes(b"1h\xffair.png");
    std::fs::write(dir.join(raw), b"x").unwrap();
    std::fs::write(dir.join(OsStr::from_bytes(b".\xff")), b"x").unwrap();

    let set = read_layer_dir(&dir, &CatalogOpts::default()).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(0).unwrap(), dir.join(raw));
    assert!(set.iter().all(Path::exists));

    std::fs::remove_dir_all(&tmp).ok();
}
