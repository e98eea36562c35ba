// Unit tests for domain models

use super::*;

#[test]
fn test_verbs_match_command_line() {
    assert_eq!(TrimMode::Start { seconds: 1.0 }.verb(), "trim-start");
    assert_eq!(TrimMode::End { seconds: 1.0 }.verb(), "trim-end");
    assert_eq!(
        TrimMode::Mid {
            start_cut: 1.0,
            end_cut: 2.0
        }
        .verb(),
        "trim-mid"
    );
    assert_eq!(
        TrimMode::BothEnds {
            trim_start: 1.0,
            trim_end: 2.0
        }
        .verb(),
        "trim"
    );
}

#[test]
fn test_only_tail_modes_need_duration() {
    assert!(!TrimMode::Start { seconds: 1.0 }.requires_duration());
    assert!(TrimMode::End { seconds: 1.0 }.requires_duration());
    assert!(!TrimMode::Mid {
        start_cut: 1.0,
        end_cut: 2.0
    }
    .requires_duration());
    assert!(TrimMode::BothEnds {
        trim_start: 1.0,
        trim_end: 2.0
    }
    .requires_duration());
}

#[test]
fn test_mode_display() {
    let mode = TrimMode::Mid {
        start_cut: 30.0,
        end_cut: 40.5,
    };
    assert_eq!(mode.to_string(), "trim-mid 30 40.5");
    assert_eq!(mode.parameters(), vec![30.0, 40.5]);
}

#[test]
fn test_shell_quote() {
    assert_eq!(shell_quote("clip.mp4"), "clip.mp4");
    assert_eq!(shell_quote("-c"), "-c");
    assert_eq!(shell_quote("my clip.mp4"), "'my clip.mp4'");
    assert_eq!(shell_quote("it's"), r"'it'\''s'");
    assert_eq!(shell_quote(""), "''");
}

#[test]
fn test_command_display_and_report() {
    let command = ExternalCommand {
        program: "ffmpeg".into(),
        args: vec!["-i".into(), "my clip.mp4".into(), "out.mp4".into()],
        output: PathBuf::from("out.mp4"),
        cut: Cut::End { length: 90.0 },
    };
    assert_eq!(command.to_string(), "ffmpeg -i 'my clip.mp4' out.mp4");

    let report = command.report();
    assert_eq!(report.program, "ffmpeg");
    assert_eq!(report.args, vec!["-i", "my clip.mp4", "out.mp4"]);
    assert_eq!(report.output, "out.mp4");
}

#[test]
fn test_report_serializes_cut_with_mode_tag() {
    let command = ExternalCommand {
        program: "ffmpeg".into(),
        args: vec![],
        output: PathBuf::from("clip_trim.mp4"),
        cut: Cut::BothEnds {
            seek: 5.0,
            length: 85.0,
        },
    };
    let json = serde_json::to_value(command.report()).unwrap();
    assert_eq!(json["cut"]["mode"], "both_ends");
    assert_eq!(json["cut"]["seek"], 5.0);
    assert_eq!(json["cut"]["length"], 85.0);
    assert_eq!(json["output"], "clip_trim.mp4");
}
