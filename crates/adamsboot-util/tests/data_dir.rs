use std::path::PathBuf;

use adamsboot_util::{data_dir, HOME_DIR_ENV};

// Single test: it mutates process-wide environment variables.
#[test]
fn data_dir_honours_override_then_falls_back_to_home() {
    std::env::set_var(HOME_DIR_ENV, "/tmp/adamsboot-override");
    assert_eq!(data_dir(), PathBuf::from("/tmp/adamsboot-override"));

    std::env::remove_var(HOME_DIR_ENV);
    let dir = data_dir();
    assert!(dir.ends_with("adamsboot"), "got: {}", dir.display());
    #[cfg(unix)]
    assert!(dir.to_string_lossy().contains(".local/share"));
}
