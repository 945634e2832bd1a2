use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_boulder-caves"))
        .args(args)
        .output()
        .expect("failed to launch boulder-caves")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 output")
}

#[test]
fn list_names_every_builtin_cave() {
    let output = run(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("Boulder Dash I by Peter Liepa (1984)"));
    assert!(text.contains("  1  A - Intro"));
    assert!(text.contains(" 20  Intermission 4"));
    assert_eq!(text.lines().count(), 21);
}

#[test]
fn show_prints_cave_a_with_pepto_colors() {
    let output = run(&["show", "1"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let rows: Vec<&str> = text.lines().take(22).collect();
    assert_eq!(rows[0], "W".repeat(40));
    assert_eq!(rows[2], "W.rPr...... .........rd..r.... ..... ..W");
    assert!(text.contains("A - Intro (40x22)"));
    assert!(text.contains("colors fg1 #8e5029 fg2 #4a4a4a fg3 #ffffff"));
}

#[test]
fn show_rejects_indices_outside_the_caveset() {
    let output = run(&["show", "21"]);
    assert!(!output.status.success());
    let errors = String::from_utf8_lossy(&output.stderr);
    assert!(errors.contains("failed to decode cave 21"));
}

#[test]
fn exported_caveset_reads_back() {
    let path = std::env::temp_dir().join(format!("boulder-caves-{}.toml", std::process::id()));
    let path_text = path.to_str().expect("utf-8 temp path");

    assert!(run(&["export", path_text]).status.success());
    let output = run(&["--caveset", path_text, "show", "8", "--table", "contrast"]);
    std::fs::remove_file(&path).expect("remove exported caveset");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("G - Amoeba (40x22)"));
    assert!(text.contains("fg3 #9ad284 amoeba #9ad284"));
}
