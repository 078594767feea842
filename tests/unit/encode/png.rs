use super::*;
use crate::foundation::core::Rgba8;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("orrery-png-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn encoded_png_decodes_to_same_pixels() {
    let mut canvas = Canvas::new(5, 3);
    canvas.put_pixel(1, 1, Rgba8::new(10, 20, 30, 40));
    canvas.put_pixel(4, 2, Rgba8::new(255, 0, 128, 255));
    let bytes = encode_png(&canvas).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (5, 3));
    assert_eq!(Canvas::from_raw(5, 3, decoded.into_raw()).unwrap(), canvas);
}

#[test]
fn atomic_write_creates_parents_and_leaves_no_temp() {
    let dir = scratch("atomic");
    let path = dir.join("nested").join("planet.png");
    write_png_atomic(&path, b"first").unwrap();
    write_png_atomic(&path, b"second").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"second");

    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("planet.png")]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_rename_cleans_up_temp_file() {
    let dir = scratch("blocked");
    // A directory at the destination makes the rename fail.
    let path = dir.join("taken.png");
    std::fs::create_dir_all(path.join("inner")).unwrap();
    assert!(write_png_atomic(&path, b"bytes").is_err());
    assert!(!temp_sibling(&path).unwrap().exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn path_without_file_name_is_rejected() {
    assert!(matches!(
        temp_sibling(Path::new("/")),
        Err(OrreryError::Validation(_))
    ));
}
