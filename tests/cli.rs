// Dancefloor: binary exits that never enter the render loop

use std::process::Command;

fn dancefloor(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_dancefloor"))
        .args(args)
        .output()
        .expect("failed to run dancefloor")
}

#[test]
fn test_list_prints_every_theme() {
    let output = dancefloor(&["--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 25);
    assert_eq!(names[0], "Dancer");
    assert_eq!(names[24], "Cowboy");
}

#[test]
fn test_unknown_theme_lists_available() {
    let output = dancefloor(&["--theme", "Zzz"]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Theme not found: Zzz"));
    let available = lines.next().unwrap();
    assert!(available.starts_with("Available: Dancer, Breakdance, Robot"));
    assert!(available.ends_with("Cowboy"));
}
