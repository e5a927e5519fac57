use super::{ContentAssets, ICON_FILE, INDEX_FILE};

#[test]
fn load_fails_without_the_icon_resource() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = ContentAssets::load(dir.path().to_path_buf()).expect_err("missing icon");
    assert!(err.contains("failed to read tray icon"), "got: {err}");
}

#[test]
fn load_reads_the_icon_eagerly() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join(ICON_FILE), [0u8, 0, 1, 0]).expect("write icon");

    let assets = ContentAssets::load(dir.path().to_path_buf()).expect("load assets");
    assert_eq!(assets.icon, vec![0u8, 0, 1, 0]);
    assert_eq!(assets.index_path(), dir.path().join(INDEX_FILE));
    assert_eq!(assets.root_dir(), dir.path());
}
